//! Site-wide stylesheet, injected once by `App`.

pub const BASE: &str = r#"
:root {
    --primary-dark: #1a1a1a;
    --primary: #2b2b2b;
    --gold: #c9a96e;
    --gold-light: #e0c9a0;
    --white: #ffffff;
    --cream: #faf7f2;
    --text: #333333;
    --text-muted: #6b6b6b;
    --header-height: 80px;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: smooth; }

body {
    font-family: 'Montserrat', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    color: var(--text);
    background: var(--cream);
    line-height: 1.6;
}

h1, h2, h3, h4 { font-family: 'Playfair Display', Georgia, serif; font-weight: 500; }

img { max-width: 100%; display: block; }

a { color: inherit; text-decoration: none; }

/* Reveal on scroll */
.animate-on-scroll {
    opacity: 0;
    transition: opacity 0.8s ease, transform 0.8s ease;
}
.animate-fade-up { transform: translateY(30px); }
.animate-on-scroll.visible {
    opacity: 1;
    transform: none;
}

/* Header */
.header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: var(--header-height);
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0 5%;
    z-index: 100;
    transition: background 0.3s ease, box-shadow 0.3s ease, height 0.3s ease;
}
.header.scrolled {
    background: rgba(26, 26, 26, 0.95);
    backdrop-filter: blur(10px);
    box-shadow: 0 2px 20px rgba(0, 0, 0, 0.2);
    height: 64px;
}
.header-logo img { height: 48px; width: auto; }
.header-nav { display: flex; gap: 2rem; }
.header-nav a {
    color: var(--white);
    font-size: 0.9rem;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    transition: color 0.3s ease;
}
.header-nav a:hover { color: var(--gold); }

.header-menu {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
    z-index: 102;
}
.header-menu span {
    width: 26px;
    height: 2px;
    background: var(--white);
    transition: transform 0.3s ease, opacity 0.3s ease;
}
.header-menu.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.header-menu.active span:nth-child(2) { opacity: 0; }
.header-menu.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

.mobile-menu-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s ease;
    z-index: 100;
}
.mobile-menu-overlay.active { opacity: 1; pointer-events: auto; }

.mobile-nav {
    position: fixed;
    top: 0;
    right: 0;
    width: min(300px, 80vw);
    height: 100vh;
    padding: calc(var(--header-height) + 2rem) 2rem 2rem;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    background: var(--primary-dark);
    transform: translateX(100%);
    transition: transform 0.3s ease;
    z-index: 101;
}
.mobile-nav.active { transform: translateX(0); }
.mobile-nav a { color: var(--white); font-size: 1.1rem; }

/* Shared section chrome */
.section { padding: 6rem 5%; }
.section-header { text-align: center; max-width: 700px; margin: 0 auto 3.5rem; }
.section-header h2 { font-size: 2.5rem; margin-bottom: 1rem; }
.section-header p { color: var(--text-muted); }
.gold-line { width: 60px; height: 2px; background: var(--gold); margin-bottom: 1.5rem; }
.gold-line-center { margin-left: auto; margin-right: auto; }

.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 1rem 2rem;
    font-size: 0.9rem;
    letter-spacing: 0.05em;
    border: 1px solid transparent;
    cursor: pointer;
    transition: all 0.3s ease;
}
.btn-primary { background: var(--gold); color: var(--primary-dark); }
.btn-primary:hover { background: var(--gold-light); }
.btn-outline { border-color: var(--white); color: var(--white); background: transparent; }
.btn-outline:hover { background: var(--white); color: var(--primary-dark); }

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    padding: calc(var(--header-height) + 4rem) 5% 4rem;
    color: var(--white);
    overflow: hidden;
}
.hero-bg, .hero-bg img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
.hero-bg { z-index: -1; }
.hero-overlay {
    position: absolute;
    inset: 0;
    background: linear-gradient(to right, rgba(0, 0, 0, 0.75), rgba(0, 0, 0, 0.3));
}
.hero-content { max-width: 720px; }
.hero-content h1 { font-size: clamp(2.4rem, 5vw, 4rem); line-height: 1.15; margin-bottom: 1.5rem; }
.hero-tagline { font-size: 1.1rem; opacity: 0.85; margin-bottom: 2.5rem; }
.hero-cta { display: flex; flex-wrap: wrap; gap: 1rem; }
.hero-images {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1rem;
    margin-top: 4rem;
}
.hero-image-item img { aspect-ratio: 4 / 3; object-fit: cover; border-radius: 4px; }

/* About */
.about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: center; }
.about-image img { border-radius: 4px; box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15); }
.about-content h2 { font-size: 2.4rem; margin-bottom: 1.5rem; }
.about-content p { color: var(--text-muted); margin-bottom: 1rem; }
.about-points { list-style: none; margin-top: 1rem; display: flex; flex-direction: column; gap: 0.5rem; }

/* Services */
.services-grid, .process-grid, .gallery-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 2rem;
}
.service-card {
    position: relative;
    height: 100%;
    padding: 2.5rem 2rem;
    background: var(--white);
    border: 1px solid rgba(201, 169, 110, 0.2);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.service-card:hover { transform: translateY(-6px); box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08); }
.service-number { position: absolute; top: 1.5rem; right: 1.5rem; font-size: 2rem; color: rgba(201, 169, 110, 0.3); }
.service-icon { font-size: 2.2rem; margin-bottom: 1rem; }
.service-card h3 { font-size: 1.4rem; margin-bottom: 1rem; }
.service-card p { margin-bottom: 1rem; }
.service-items { padding-left: 1.2rem; color: var(--text-muted); font-size: 0.9rem; }
.service-items li { margin-bottom: 0.25rem; }

/* Process & why choose us */
.features-section { background: var(--cream); }
.why-section { background: var(--white); }
.features-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 2rem; }
.feature-item { display: flex; gap: 1.5rem; }
.process-step { flex-direction: column; gap: 1rem; }
.feature-number {
    align-self: flex-start;
    padding: 0.35rem 1rem;
    border-radius: 4px;
    background: var(--gold);
    color: var(--primary-dark);
    font-size: 0.85rem;
    font-weight: 600;
}
.feature-content h3 { font-size: 1.25rem; margin-bottom: 0.5rem; }
.feature-content p { color: var(--text-muted); }

/* Areas */
.areas-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; }
.area-card { height: 100%; padding: 1.75rem; background: var(--white); border-left: 3px solid var(--gold); }
.area-card h3 { margin-bottom: 0.5rem; }
.area-card p { color: var(--text-muted); font-size: 0.9rem; }

/* Testimonials */
.testimonials-section { background: var(--primary-dark); color: var(--white); }
.testimonials-section .section-header p { color: rgba(255, 255, 255, 0.7); }
.testimonials-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; }
.testimonial-card {
    height: 100%;
    padding: 2rem;
    border: 1px solid rgba(201, 169, 110, 0.25);
    background: rgba(255, 255, 255, 0.03);
}
.client-info { display: flex; flex-direction: column; margin-bottom: 1rem; }
.client-name { color: var(--gold); font-weight: 600; }
.client-location { font-size: 0.85rem; opacity: 0.6; }
.testimonial-text { font-style: italic; opacity: 0.85; }

/* Portfolio */
.gallery-section { background: var(--primary-dark); color: var(--white); }
.gallery-section .section-header p { color: rgba(255, 255, 255, 0.7); }
.gallery-item { position: relative; overflow: hidden; aspect-ratio: 4 / 3; }
.gallery-item img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.6s ease; }
.gallery-item:hover img { transform: scale(1.05); }
.gallery-caption {
    position: absolute;
    left: 0;
    right: 0;
    bottom: 0;
    padding: 1.5rem;
    background: linear-gradient(to top, rgba(0, 0, 0, 0.9), transparent);
    z-index: 3;
}
.gallery-caption h3 { font-size: 1.2rem; margin-bottom: 0.25rem; }
.gallery-caption p { font-size: 0.9rem; opacity: 0.8; }

/* FAQ */
.faq-container { max-width: 820px; margin: 0 auto; }
.faq-item { border-bottom: 1px solid rgba(0, 0, 0, 0.1); }
.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 1rem;
    padding: 1.5rem 0;
    background: none;
    border: none;
    font: inherit;
    font-size: 1.05rem;
    text-align: left;
    cursor: pointer;
}
.faq-icon { font-size: 1.5rem; color: var(--gold); }
.faq-answer { max-height: 0; overflow: hidden; transition: max-height 0.4s ease; }
.faq-item.active .faq-answer { max-height: 400px; }
.faq-answer p { color: var(--text-muted); padding-bottom: 1.5rem; }

/* Insights */
.insights-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; }
.insight-card { height: 100%; padding: 2rem; background: var(--white); }
.insight-number { font-size: 2.5rem; color: rgba(201, 169, 110, 0.4); margin-bottom: 1rem; }
.insight-title { font-size: 1.25rem; margin-bottom: 0.75rem; }
.insight-excerpt { color: var(--text-muted); margin-bottom: 1.25rem; }
.read-more { color: var(--gold); font-size: 0.9rem; }

/* Contact */
.contact-section { padding: 6rem 5%; background: var(--primary); color: var(--white); }
.contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; }
.contact-info h2 { font-size: 2.4rem; margin-bottom: 1.5rem; }
.contact-info p { opacity: 0.8; margin-bottom: 2rem; }
.contact-details { display: flex; flex-direction: column; gap: 1.25rem; }
.contact-item { display: flex; align-items: center; gap: 1rem; }
.contact-item svg { color: var(--gold); flex-shrink: 0; }
.contact-hours { align-items: flex-start; }
.contact-hours strong { min-width: 80px; }
.contact-form { display: flex; flex-direction: column; gap: 1.25rem; }
.form-group { display: flex; flex-direction: column; gap: 0.5rem; }
.form-group label { font-size: 0.85rem; letter-spacing: 0.05em; opacity: 0.8; }
.form-group input, .form-group textarea {
    padding: 0.9rem 1rem;
    font: inherit;
    color: var(--white);
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.15);
}
.form-group input:focus, .form-group textarea:focus { outline: none; border-color: var(--gold); }
.contact-form .btn { align-self: flex-start; }

/* Footer */
.footer { background: var(--primary-dark); color: rgba(255, 255, 255, 0.7); padding: 4rem 5% 2rem; }
.footer-content { display: grid; grid-template-columns: 2fr 1fr 1fr 1fr; gap: 3rem; }
.footer-logo { height: 48px; width: auto; margin-bottom: 1rem; }
.footer-column h4 { color: var(--white); margin-bottom: 1rem; }
.footer-column ul { list-style: none; display: flex; flex-direction: column; gap: 0.5rem; }
.footer-column a:hover { color: var(--gold); }
.footer-bottom {
    margin-top: 3rem;
    padding-top: 1.5rem;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    text-align: center;
    font-size: 0.85rem;
}

@media (max-width: 900px) {
    .header-nav { display: none; }
    .header-menu { display: flex; }
    .about-grid, .contact-grid { grid-template-columns: 1fr; gap: 2.5rem; }
    .hero-images { grid-template-columns: repeat(2, 1fr); }
    .footer-content { grid-template-columns: 1fr 1fr; }
}

@media (max-width: 600px) {
    .section, .contact-section { padding: 4rem 1.25rem; }
    .section-header h2 { font-size: 2rem; }
    .footer-content { grid-template-columns: 1fr; }
}
"#;
