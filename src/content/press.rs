/// Extra material a press section carries beneath its lead paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressDetail {
    Labeled(&'static [(&'static str, &'static str)]),
    Milestones(&'static [(&'static str, &'static str)]),
    Verticals(&'static [(&'static str, &'static str)]),
    Stats(&'static [(&'static str, &'static str)]),
    Quotes(&'static [(&'static str, &'static str)]),
    Topics(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressSection {
    pub number: &'static str,
    pub title: &'static str,
    pub content: Option<&'static str>,
    pub extra: Option<&'static str>,
    pub detail: PressDetail,
}

pub const PRESS_HEADLINE: &str = "Industry Architect | Lifestyle Visionary | Founder of Women Grow";

pub const PRESS_SECTIONS: &[PressSection] = &[
    PressSection {
        number: "01",
        title: "BRAND MISSION & VALUE PROPOSITION",
        content: Some("Jane West is the preeminent global architect of the cannabis lifestyle. By merging mid-century modern aesthetics with sophisticated functional design, Jane West has successfully transitioned cannabis from the counter-culture into the mainstream luxury market. The brand exists to empower the modern consumer, specifically women, through high-end accessories, wellness products, and community-building."),
        extra: None,
        detail: PressDetail::Labeled(&[
            ("Design Excellence", "Merging form and function with a mid-century modern lens."),
            ("Normalization", "Stripping away the 'stoner' stigma to reveal a sophisticated lifestyle."),
            ("Empowerment", "Building the infrastructure for women to lead in the legal cannabis space."),
        ]),
    },
    PressSection {
        number: "02",
        title: "THE BIOGRAPHY: JANE WEST",
        content: Some("Jane West is one of the most recognizable faces in the global cannabis industry. Her journey began in 2014 when her 'corporate-to-cannabis' story went viral after she was fired from her job as a corporate event planner for hosting a cannabis-infused dinner party. Rather than retreating, she leaned into the spotlight, identifying a massive void in the market: products designed for women."),
        extra: Some("As the founder of Women Grow, she built the industry's largest professional networking organization, connecting thousands of entrepreneurs and shaping the leadership landscape of the legal market. Her eponymous brand is a multi-category lifestyle company with global distribution."),
        detail: PressDetail::Milestones(&[
            ("2014", "Launched Edible Events; Founded Women Grow."),
            ("2016", "Raised $1M+ via equity crowdfunding."),
            ("2020-25", "Secured global licensing with High Tide Inc. and Prism Water Pipes."),
        ]),
    },
    PressSection {
        number: "03",
        title: "PRODUCT VERTICALS & FACT SHEET",
        content: None,
        extra: None,
        detail: PressDetail::Verticals(&[
            ("A. The Glass Collection", "Signature partnership with GRAV. Iconic cobalt blue borosilicate glass. Display-worthy silhouettes."),
            ("B. The Travel Collection", "Aircraft-grade aluminum. Discreet, smell-proof, and water-resistant. 40,000+ units sold."),
            ("C. The Wellness Line", "Routine-based CBD wellness. Custom terpene blends for Day, Night, and Recovery."),
        ]),
    },
    PressSection {
        number: "04",
        title: "MARKET IMPACT & STATS",
        content: None,
        extra: None,
        detail: PressDetail::Stats(&[
            ("Global Reach", "5+ Countries, 500+ Retailers"),
            ("Social Equity", "80% Women/POC Owned"),
            ("Investors", "3,000+ from 42 Countries"),
            ("Media Reach", "500M+ Earned Impressions"),
        ]),
    },
    PressSection {
        number: "05",
        title: "BRAND IDENTITY GUIDELINES",
        content: Some("To ensure a high-prestige value, all visual assets adhere to strict modernist standards."),
        extra: None,
        detail: PressDetail::Labeled(&[
            ("Primary Color", "Jane West Blue (Hex: #0047AB / Cobalt Blue)"),
            ("Secondary Palette", "Brushed Gold, Slate Grey, Crisp White"),
            ("Typography", "Montserrat / Futura (Modern Sans-Serif)"),
            ("Imagery", "High-contrast, marble backgrounds, hero product shots"),
        ]),
    },
    PressSection {
        number: "06",
        title: "PRESS ARCHIVE & 'AS SEEN IN'",
        content: None,
        extra: None,
        detail: PressDetail::Quotes(&[
            ("The New York Times", "The Martha Stewart of Cannabis."),
            ("Forbes", "Jane West is Building a Cannabis Empire."),
            ("InStyle", "Named to the 'Badass 50' list."),
        ]),
    },
    PressSection {
        number: "07",
        title: "INTERVIEW TOPICS",
        content: None,
        extra: None,
        detail: PressDetail::Topics(&[
            "The Luxury Cannabis Market: How design drives consumer adoption.",
            "Equity Crowdfunding: Building a brand with evangelists rather than just VCs.",
            "Resilience: Navigating a public firing and raid to build a global empire.",
            "Women in Leadership: The power of professional networking.",
        ]),
    },
];
