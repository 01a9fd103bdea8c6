//! Copy and media for the landing page. Everything here is read-only and only
//! ordered for display.

pub struct Images;

impl Images {
    pub const HERO: &'static str = "https://images.unsplash.com/photo-1618221195710-dd6b41faaea6?w=1600&q=80";
    pub const HERO_TILES: [&'static str; 4] = [
        "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?w=800&q=80",
        "https://images.unsplash.com/photo-1616486338812-3dadae4b4ace?w=800&q=80",
        "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=800&q=80",
        "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?w=800&q=80",
    ];
    pub const ABOUT: &'static str = "https://images.unsplash.com/photo-1617806118233-18e1de247200?w=800&q=80";
    pub const GALLERY: [&'static str; 6] = [
        "https://images.unsplash.com/photo-1600607687644-c7171b42498f?w=800&q=80",
        "https://images.unsplash.com/photo-1616594039964-ae9021a400a0?w=800&q=80",
        "https://images.unsplash.com/photo-1600489000022-c2086d79f9d4?w=800&q=80",
        "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800&q=80",
        "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?w=800&q=80",
        "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?w=800&q=80",
    ];
}

/// In-page anchors the navigation can jump to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Services,
    Portfolio,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Portfolio,
        Section::Testimonials,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Portfolio => "Portfolio",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
        }
    }
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
    pub icon: &'static str,
}

pub struct ProcessStep {
    pub title: &'static str,
    pub timeframe: &'static str,
    pub description: &'static str,
}

pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct ServiceArea {
    pub zone: &'static str,
    pub localities: &'static str,
}

pub struct Testimonial {
    pub client: &'static str,
    pub location: &'static str,
    pub quote: &'static str,
}

pub struct PortfolioProject {
    pub title: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct BlogTeaser {
    pub title: &'static str,
    pub excerpt: &'static str,
}

pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [FooterLink],
}

pub struct ContactDetails {
    pub location: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub hours: &'static [&'static str],
}

pub const BRAND: &str = "Allure Space";

pub const SERVICES: &[Service] = &[
    Service {
        title: "Residential Interior Design",
        description: "Transform your house into a home that tells your story. From compact 2BHK apartments to luxurious penthouses, we specialize in creating personalized living spaces across Delhi.",
        items: &[
            "Living Room & Bedroom Design",
            "Modular Kitchen Design",
            "Bathroom & Washroom Renovations",
            "Kids' Rooms & Nurseries",
            "Home Office Setups",
            "Pooja Room Design",
            "Balcony & Terrace Makeovers",
        ],
        icon: "🏠",
    },
    Service {
        title: "Commercial Interior Design",
        description: "Elevate your business environment with designs that inspire productivity and impress clients.",
        items: &[
            "Office Interiors & Workspace Planning",
            "Retail Store Design",
            "Restaurant & Café Interiors",
            "Clinic & Medical Office Design",
            "Salon & Spa Interiors",
            "Showroom Design",
        ],
        icon: "🏢",
    },
    Service {
        title: "Turnkey Solutions",
        description: "Leave everything to us. Our turnkey projects cover every aspect from design to execution.",
        items: &[
            "Complete Home Renovation",
            "False Ceiling & Wall Paneling",
            "Electrical & Lighting Design",
            "Flooring Solutions",
            "Custom Furniture & Joinery",
            "Soft Furnishings & Décor",
        ],
        icon: "🔑",
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Discovery & Consultation",
        timeframe: "Week 1",
        description: "We begin with an in-depth consultation at your space in Delhi. Our designers understand your vision, lifestyle, budget, and timeline.",
    },
    ProcessStep {
        title: "Concept Development",
        timeframe: "Week 2-3",
        description: "Our creative team develops initial concepts tailored to your brief. You'll receive mood boards, color palettes, and style directions.",
    },
    ProcessStep {
        title: "Design & Visualization",
        timeframe: "Week 4-6",
        description: "We bring your interiors to life with detailed 2D layouts and photorealistic 3D renderings. Every element is planned meticulously.",
    },
    ProcessStep {
        title: "Approval & Refinement",
        timeframe: "Week 7",
        description: "We refine the design based on your feedback until it's perfect. Once approved, we create detailed execution drawings.",
    },
    ProcessStep {
        title: "Execution & Installation",
        timeframe: "Week 8-16",
        description: "Our project managers oversee every detail of the execution. From civil work to furniture installation, we ensure quality craftsmanship.",
    },
    ProcessStep {
        title: "Handover & Support",
        timeframe: "Week 17",
        description: "We don't just hand over keys—we ensure you're delighted with every detail. Our post-project support ensures your interiors remain stunning.",
    },
];

pub const WHY_CHOOSE_US: &[Highlight] = &[
    Highlight {
        title: "Proven Track Record",
        description: "Over 200 completed projects across Delhi, Gurgaon, and Noida. Our portfolio speaks for itself—from modern apartments in Greater Kailash to luxury villas in Vasant Vihar.",
    },
    Highlight {
        title: "Local Expertise",
        description: "We understand Delhi's unique challenges—from navigating DDA regulations to sourcing materials from Kirti Nagar. Our local knowledge ensures smoother project execution.",
    },
    Highlight {
        title: "Transparent Communication",
        description: "No surprises, no hidden costs. We maintain open communication through every phase, with regular updates and clear documentation.",
    },
    Highlight {
        title: "Quality Without Compromise",
        description: "We partner with certified suppliers and experienced craftsmen. Every material is verified, every installation is inspected, and every detail is perfected.",
    },
];

pub const ABOUT_POINTS: &[(&str, &str)] = &[
    ("Delhi-Centric Expertise:", "Deep understanding of Delhi's architectural styles"),
    ("End-to-End Solutions:", "From concept to final installation"),
    ("Transparent Pricing:", "No hidden costs, clear timelines"),
    ("Quality Craftsmanship:", "Partnerships with Delhi's finest craftsmen"),
];

pub const SERVICE_AREAS: &[ServiceArea] = &[
    ServiceArea {
        zone: "South Delhi",
        localities: "Greater Kailash, Hauz Khas, Defence Colony, Safdarjung Enclave, Green Park, Vasant Vihar, Vasant Kunj, Chittaranjan Park, Malviya Nagar, Saket",
    },
    ServiceArea {
        zone: "Central Delhi",
        localities: "Connaught Place, Karol Bagh, Rajendra Nagar, Patel Nagar, Jor Bagh, Golf Links",
    },
    ServiceArea {
        zone: "West Delhi",
        localities: "Punjabi Bagh, Rajouri Garden, Janakpuri, Dwarka, Uttam Nagar, Paschim Vihar",
    },
    ServiceArea {
        zone: "East Delhi",
        localities: "Mayur Vihar, Preet Vihar, Laxmi Nagar, Patparganj, Karkardooma",
    },
    ServiceArea {
        zone: "North Delhi",
        localities: "Civil Lines, Model Town, Pitampura, Rohini, Shalimar Bagh",
    },
    ServiceArea {
        zone: "Gurgaon",
        localities: "DLF Phase 1-5, Golf Course Road, Sohna Road, MG Road, Sector 56, New Gurgaon",
    },
    ServiceArea {
        zone: "Noida & Greater Noida",
        localities: "Sectors 15, 18, 50, 62, 75, 76, 78, Noida Extension, Greater Noida West",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        client: "Priya & Rahul Sharma",
        location: "Vasant Kunj",
        quote: "Allure Space transformed our 3BHK apartment into a dream home. Their attention to detail and understanding of our lifestyle made all the difference. The modular kitchen is absolutely stunning, and they completed everything within the promised timeline. Highly recommended!",
    },
    Testimonial {
        client: "Mr. Anil Gupta",
        location: "Connaught Place",
        quote: "We hired Allure Space for our new office interiors in CP, and they delivered beyond expectations. The space planning was brilliant—they maximized every square foot while creating a professional yet welcoming environment. Great team to work with!",
    },
    Testimonial {
        client: "Neha Kapoor",
        location: "Greater Kailash",
        quote: "As someone who's very particular about aesthetics, I was worried about finding the right designer. Allure Space not only understood my vision but elevated it. The 3D renders were so accurate, and the final result is even better than I imagined.",
    },
    Testimonial {
        client: "The Mehta Family",
        location: "Dwarka",
        quote: "From our initial consultation to the final handover, the Allure Space team was professional, responsive, and incredibly creative. They designed our entire home—from the living room to the kids' bedrooms—and managed everything seamlessly.",
    },
];

pub const PORTFOLIO: &[PortfolioProject] = &[
    PortfolioProject {
        title: "Modern Minimalist Apartment",
        location: "Greater Kailash I",
        description: "A 1,800 sq ft 3BHK transformed into a serene, clutter-free haven. Clean lines, neutral tones, and smart storage solutions define this contemporary home.",
        image: Images::GALLERY[0],
    },
    PortfolioProject {
        title: "Luxury Penthouse",
        location: "Golf Course Road, Gurgaon",
        description: "4,500 sq ft of opulence featuring Italian marble, custom lighting, and panoramic city views. A perfect blend of modern luxury and comfort.",
        image: Images::GALLERY[1],
    },
    PortfolioProject {
        title: "Heritage Home Restoration",
        location: "Civil Lines",
        description: "Breathing new life into a 1940s colonial bungalow while preserving its architectural character. Traditional charm meets modern amenities.",
        image: Images::GALLERY[2],
    },
    PortfolioProject {
        title: "Contemporary Office",
        location: "Connaught Place",
        description: "2,000 sq ft corporate office designed for collaboration and creativity. Open-plan workspace with breakout zones and smart meeting rooms.",
        image: Images::GALLERY[3],
    },
    PortfolioProject {
        title: "Boutique Café",
        location: "Hauz Khas Village",
        description: "Instagrammable interiors for a specialty coffee shop. Rustic-industrial design with exposed brick, warm lighting, and cozy seating.",
        image: Images::GALLERY[4],
    },
    PortfolioProject {
        title: "Smart Home",
        location: "Dwarka",
        description: "Technology-integrated 4BHK featuring automated lighting, climate control, and entertainment systems. Future-forward living in Delhi.",
        image: Images::GALLERY[5],
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How much does interior design cost in Delhi?",
        answer: "Our projects typically range from ₹1,500 to ₹3,500 per sq ft depending on the scope, materials, and finishes. We offer flexible packages including consultation-only (starting ₹25,000), design-only, and turnkey solutions. Every project gets a detailed, transparent quotation with no hidden costs.",
    },
    FaqEntry {
        question: "How long does a typical project take?",
        answer: "A complete home interior (2-3 BHK) usually takes 8-12 weeks from design approval to handover. Larger projects or extensive renovations may take 12-16 weeks. We provide a detailed timeline during the planning phase and keep you updated throughout.",
    },
    FaqEntry {
        question: "Do you handle government approvals and permissions?",
        answer: "Yes, we assist with necessary approvals from RWAs, housing societies, and municipal authorities where required. We're well-versed in Delhi's building regulations and ensure compliance throughout the project.",
    },
    FaqEntry {
        question: "Can I see samples of materials and finishes before finalizing?",
        answer: "Absolutely! We provide physical samples of all major materials—from tiles and laminates to fabrics and paint colors. We can also arrange visits to our partner showrooms in Kirti Nagar and other furniture hubs.",
    },
    FaqEntry {
        question: "What if I need to modify the design during execution?",
        answer: "We're flexible! Minor modifications can usually be accommodated. For significant changes, we'll discuss the impact on timeline and cost upfront. Your satisfaction is our priority.",
    },
    FaqEntry {
        question: "Do you provide furniture and décor, or only interior work?",
        answer: "We offer both! You can choose our complete turnkey solution (including furniture, furnishings, and décor) or opt for interior work only. We also provide furniture-only packages if you've already completed the civil work.",
    },
    FaqEntry {
        question: "What about warranty and maintenance?",
        answer: "We provide a 1-year comprehensive warranty on all workmanship and installations. Manufacturing warranties from suppliers (on modular kitchens, wardrobes, etc.) are typically 5-10 years. We also offer annual maintenance contracts for ongoing support.",
    },
];

pub const BLOG_TEASERS: &[BlogTeaser] = &[
    BlogTeaser {
        title: "10 Interior Design Trends Dominating Delhi Homes in 2026",
        excerpt: "From biophilic design to maximalist décor, discover what's trending in the capital's most stylish homes.",
    },
    BlogTeaser {
        title: "Modular Kitchen Design Guide for Delhi Apartments",
        excerpt: "Space-saving solutions, layouts, and material choices for Indian cooking needs.",
    },
    BlogTeaser {
        title: "Navigating Vastu While Maintaining Modern Aesthetics",
        excerpt: "How to incorporate Vastu principles without compromising on contemporary design.",
    },
];

pub const CONTACT: ContactDetails = ContactDetails {
    location: "New Delhi, India",
    phone: "+91 98XXX XXXXX",
    email: "hello@allurespace.in",
    hours: &["Mon - Sat: 10:00 AM - 7:00 PM", "Sun: By Appointment Only"],
};

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Quick Links",
        links: &[
            FooterLink { label: "About Us", href: "#about" },
            FooterLink { label: "Our Services", href: "#services" },
            FooterLink { label: "Portfolio", href: "#portfolio" },
            FooterLink { label: "Testimonials", href: "#testimonials" },
            FooterLink { label: "Contact", href: "#contact" },
        ],
    },
    FooterColumn {
        heading: "Services",
        links: &[
            FooterLink { label: "Residential Interiors", href: "#services" },
            FooterLink { label: "Commercial Interiors", href: "#services" },
            FooterLink { label: "Turnkey Solutions", href: "#services" },
            FooterLink { label: "3D Visualization", href: "#services" },
        ],
    },
    FooterColumn {
        heading: "Connect",
        links: &[
            FooterLink { label: "Instagram: @allurespace", href: "#" },
            FooterLink { label: "Facebook: AllureSpace", href: "#" },
            FooterLink { label: "Pinterest: AllureSpace", href: "#" },
            FooterLink { label: "hello@allurespace.in", href: "mailto:hello@allurespace.in" },
        ],
    },
];

/// Two-digit ordinal used on numbered cards: `01`, `02`, ...
pub fn ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn all_images() -> Vec<&'static str> {
        let mut images = vec![Images::HERO, Images::ABOUT];
        images.extend(Images::HERO_TILES);
        images.extend(PORTFOLIO.iter().map(|p| p.image));
        images
    }

    #[test]
    fn section_anchors_are_unique() {
        let mut ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn footer_anchors_point_at_sections() {
        for column in FOOTER_COLUMNS {
            for link in column.links {
                if let Some(anchor) = link.href.strip_prefix('#').filter(|a| !a.is_empty()) {
                    assert!(
                        Section::ALL.iter().any(|s| s.id() == anchor),
                        "{} links to unknown section #{}",
                        link.label,
                        anchor
                    );
                }
            }
        }
    }

    #[test]
    fn images_are_remote_https() {
        for url in all_images() {
            assert!(url.starts_with("https://"), "unexpected image url {}", url);
        }
    }

    #[test]
    fn records_have_no_blank_fields() {
        let mut fields: Vec<&str> = Vec::new();
        for s in SERVICES {
            fields.extend([s.title, s.description, s.icon]);
            fields.extend(s.items);
        }
        fields.extend(PROCESS_STEPS.iter().flat_map(|p| [p.title, p.timeframe, p.description]));
        fields.extend(WHY_CHOOSE_US.iter().flat_map(|h| [h.title, h.description]));
        fields.extend(SERVICE_AREAS.iter().flat_map(|a| [a.zone, a.localities]));
        fields.extend(TESTIMONIALS.iter().flat_map(|t| [t.client, t.location, t.quote]));
        fields.extend(PORTFOLIO.iter().flat_map(|p| [p.title, p.location, p.description]));
        fields.extend(FAQS.iter().flat_map(|f| [f.question, f.answer]));
        fields.extend(BLOG_TEASERS.iter().flat_map(|b| [b.title, b.excerpt]));
        fields.extend([CONTACT.location, CONTACT.phone, CONTACT.email]);
        fields.extend(CONTACT.hours);

        assert!(fields.iter().all(|f| !f.trim().is_empty()));
    }

    #[test]
    fn ordinals_are_zero_padded() {
        assert_eq!(ordinal(0), "01");
        assert_eq!(ordinal(8), "09");
        assert_eq!(ordinal(9), "10");
    }

    #[test]
    fn section_hrefs() {
        assert_eq!(Section::Portfolio.href(), "#portfolio");
        assert_eq!(Section::Home.nav_label(), "Home");
    }
}
