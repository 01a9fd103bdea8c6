use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::contact::ContactForm;
use crate::components::faq::FaqList;
use crate::config::{SECOND_COLUMN_DELAY_MS, STAGGER_CARD_MS, STAGGER_DENSE_MS};
use crate::content::{
    ordinal, Images, Section, ABOUT_POINTS, BLOG_TEASERS, CONTACT, PORTFOLIO, PROCESS_STEPS,
    SERVICES, SERVICE_AREAS, TESTIMONIALS, WHY_CHOOSE_US,
};

fn stagger(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    title: &'static str,
    #[prop_or_default]
    subtitle: Option<&'static str>,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <AnimatedSection class="section-header">
            <div class="gold-line gold-line-center"></div>
            <h2>{props.title}</h2>
            { for props.subtitle.map(|subtitle| html! { <p>{subtitle}</p> }) }
        </AnimatedSection>
    }
}

fn arrow_icon() -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <path d="M5 12h14M12 5l7 7-7 7" />
        </svg>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-bg">
                <img src={Images::HERO} alt="Luxury Interior" />
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <AnimatedSection>
                    <h1>{"Crafting Timeless Interiors That Define Your Story"}</h1>
                    <p class="hero-tagline">
                        {"Allure Space brings Delhi's most sophisticated interior design expertise to your doorstep. From concept to completion, we transform homes and commercial spaces into stunning environments that reflect your unique personality."}
                    </p>
                    <div class="hero-cta">
                        <a href={Section::Contact.href()} class="btn btn-primary">
                            {"Schedule a Free Consultation"}
                            { arrow_icon() }
                        </a>
                        <a href={Section::Portfolio.href()} class="btn btn-outline">
                            {"Explore Our Work"}
                        </a>
                    </div>
                </AnimatedSection>
            </div>
            <div class="hero-images">
                { for Images::HERO_TILES.iter().map(|src| html! {
                    <div class="hero-image-item"><img src={*src} alt="Interior" /></div>
                }) }
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id={Section::About.id()} class="section about-section">
            <div class="about-grid">
                <AnimatedSection class="about-image">
                    <img src={Images::ABOUT} alt="Interior Design Studio" loading="lazy" />
                </AnimatedSection>
                <AnimatedSection delay_ms={SECOND_COLUMN_DELAY_MS} class="about-content">
                    <div class="gold-line"></div>
                    <h2>{"About Allure Space"}</h2>
                    <p>
                        {"Founded in the heart of Delhi, Allure Space has emerged as a trusted name in premium interior design, transforming over 200+ spaces across the capital and NCR region. We believe that great design is not just about aesthetics—it's about creating environments that enhance your daily life."}
                    </p>
                    <p>
                        {"Our philosophy is simple: every space has a story waiting to be told. Whether it's a cozy apartment in South Delhi, a sprawling farmhouse in Chattarpur, or a contemporary office in Connaught Place, we blend functionality with artistic vision to create interiors that are uniquely yours."}
                    </p>
                    <p><strong>{"What Sets Us Apart:"}</strong></p>
                    <ul class="about-points">
                        { for ABOUT_POINTS.iter().map(|(label, detail)| html! {
                            <li>{"✓ "}<strong>{*label}</strong>{" "}{*detail}</li>
                        }) }
                    </ul>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id={Section::Services.id()} class="section services-section">
            <SectionHeader
                title="Our Services"
                subtitle={Some("Comprehensive interior design solutions for residential and commercial spaces in Delhi & NCR")}
            />
            <div class="services-grid">
                { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                    <AnimatedSection key={i} delay_ms={stagger(i, STAGGER_CARD_MS)}>
                        <div class="service-card">
                            <span class="service-number">{ordinal(i)}</span>
                            <div class="service-icon"><span>{service.icon}</span></div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <ul class="service-items">
                                { for service.items.iter().map(|item| html! { <li>{*item}</li> }) }
                            </ul>
                        </div>
                    </AnimatedSection>
                }) }
            </div>
        </section>
    }
}

#[function_component(Process)]
fn process() -> Html {
    html! {
        <section class="section features-section">
            <SectionHeader
                title="How We Work: The Allure Space Experience"
                subtitle={Some("A transparent, structured process to bring your dream space to life")}
            />
            <div class="features-grid process-grid">
                { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                    <AnimatedSection key={i} delay_ms={stagger(i, STAGGER_CARD_MS)}>
                        <div class="feature-item process-step">
                            <div class="feature-number">{step.timeframe}</div>
                            <div class="feature-content">
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        </div>
                    </AnimatedSection>
                }) }
            </div>
        </section>
    }
}

#[function_component(WhyChooseUs)]
fn why_choose_us() -> Html {
    html! {
        <section class="section services-section why-section">
            <SectionHeader title="Why Delhi Chooses Allure Space" />
            <div class="features-grid">
                { for WHY_CHOOSE_US.iter().enumerate().map(|(i, item)| html! {
                    <AnimatedSection key={i} delay_ms={stagger(i, STAGGER_DENSE_MS)}>
                        <div class="feature-item">
                            <div class="feature-content">
                                <h3>{item.title}</h3>
                                <p>{item.description}</p>
                            </div>
                        </div>
                    </AnimatedSection>
                }) }
            </div>
        </section>
    }
}

#[function_component(ServiceAreas)]
fn service_areas() -> Html {
    html! {
        <section class="section areas-section">
            <SectionHeader title="Areas We Serve Across Delhi & NCR" />
            <div class="areas-grid">
                { for SERVICE_AREAS.iter().enumerate().map(|(i, area)| html! {
                    <AnimatedSection key={i} delay_ms={stagger(i, STAGGER_DENSE_MS)}>
                        <div class="area-card">
                            <h3>{area.zone}</h3>
                            <p>{area.localities}</p>
                        </div>
                    </AnimatedSection>
                }) }
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section id={Section::Testimonials.id()} class="section testimonials-section">
            <SectionHeader title="What Our Clients Say" subtitle={Some("Stories of transformation from across the city")} />
            <div class="testimonials-grid">
                { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                    <AnimatedSection key={i} delay_ms={stagger(i, STAGGER_CARD_MS)}>
                        <div class="testimonial-card">
                            <div class="client-info">
                                <span class="client-name">{t.client}</span>
                                <span class="client-location">{t.location}</span>
                            </div>
                            <p class="testimonial-text">{format!("\"{}\"", t.quote)}</p>
                        </div>
                    </AnimatedSection>
                }) }
            </div>
        </section>
    }
}

#[function_component(Portfolio)]
fn portfolio() -> Html {
    html! {
        <section id={Section::Portfolio.id()} class="section gallery-section">
            <SectionHeader title="Our Portfolio" subtitle={Some("Featured projects from our collection")} />
            <div class="gallery-grid">
                { for PORTFOLIO.iter().enumerate().map(|(i, project)| html! {
                    <AnimatedSection key={i} delay_ms={stagger(i, STAGGER_DENSE_MS)} class="gallery-item">
                        <img src={project.image} alt={project.title} title={project.description} loading="lazy" />
                        <div class="gallery-caption">
                            <h3>{project.title}</h3>
                            <p>{project.location}</p>
                        </div>
                    </AnimatedSection>
                }) }
            </div>
        </section>
    }
}

#[function_component(Faq)]
fn faq() -> Html {
    html! {
        <section class="section faq-section">
            <SectionHeader title="Frequently Asked Questions" />
            <FaqList />
        </section>
    }
}

#[function_component(Insights)]
fn insights() -> Html {
    html! {
        <section class="section insights-section">
            <SectionHeader
                title="Design Insights"
                subtitle={Some("Latest trends, tips, and inspiration from the world of interior design")}
            />
            <div class="insights-grid">
                { for BLOG_TEASERS.iter().enumerate().map(|(i, post)| html! {
                    <AnimatedSection key={i} delay_ms={stagger(i, STAGGER_CARD_MS)}>
                        <div class="insight-card">
                            <div class="insight-number">{ordinal(i)}</div>
                            <h3 class="insight-title">{post.title}</h3>
                            <p class="insight-excerpt">{post.excerpt}</p>
                            <a href="#" class="read-more">{"Read Article →"}</a>
                        </div>
                    </AnimatedSection>
                }) }
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id={Section::Contact.id()} class="contact-section">
            <div class="contact-grid">
                <AnimatedSection class="contact-info">
                    <h2>{"Ready to Transform Your Space?"}</h2>
                    <p>
                        {"Let's create something beautiful together. Whether you're planning a complete home makeover or a single-room refresh, Allure Space is here to bring your vision to life."}
                    </p>
                    <div class="contact-details">
                        <div class="contact-item">
                            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z" />
                                <circle cx="12" cy="10" r="3" />
                            </svg>
                            <span>{CONTACT.location}</span>
                        </div>
                        <div class="contact-item">
                            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
                            </svg>
                            <span>{CONTACT.phone}</span>
                        </div>
                        <div class="contact-item">
                            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z" />
                                <polyline points="22,6 12,13 2,6" />
                            </svg>
                            <span>{CONTACT.email}</span>
                        </div>
                        <div class="contact-item contact-hours">
                            <strong>{"Hours:"}</strong>
                            <div>
                                { for CONTACT.hours.iter().map(|line| html! { <div>{*line}</div> }) }
                            </div>
                        </div>
                    </div>
                </AnimatedSection>
                <AnimatedSection delay_ms={SECOND_COLUMN_DELAY_MS}>
                    <ContactForm />
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="landing-page">
            <Hero />
            <About />
            <Services />
            <Process />
            <WhyChooseUs />
            <ServiceAreas />
            <Testimonials />
            <Portfolio />
            <Faq />
            <Insights />
            <Contact />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_scales_with_index() {
        assert_eq!(stagger(0, STAGGER_CARD_MS), 0);
        assert_eq!(stagger(3, STAGGER_CARD_MS), 300);
        assert_eq!(stagger(6, STAGGER_DENSE_MS), 300);
    }
}
