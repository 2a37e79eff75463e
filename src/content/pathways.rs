/// A category an inquiry can be filed under. The option list feeds the
/// dependent "request type" select once the pathway is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InquiryPathway {
    pub id: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub options: &'static [&'static str],
}

impl InquiryPathway {
    /// Value sent as the `Inquiry Category` field.
    pub fn category(&self) -> String {
        self.id.to_uppercase()
    }

    pub fn is_general(&self) -> bool {
        self.id == GENERAL_PATHWAY
    }
}

pub const GENERAL_PATHWAY: &str = "general";

pub const PATHWAYS: &[InquiryPathway] = &[
    InquiryPathway {
        id: "wholesale",
        title: "Wholesale & Retail",
        desc: "Stock the collections in your store, dispensary or boutique.",
        options: &["Retail Partnership", "Distribution", "Dispensary Placement", "Bulk Order"],
    },
    InquiryPathway {
        id: "collaboration",
        title: "Brand Collaboration",
        desc: "Co-branded product lines, licensing and design partnerships.",
        options: &["Product Collaboration", "Licensing", "Custom Design", "Sponsorship"],
    },
    InquiryPathway {
        id: "press",
        title: "Press & Speaking",
        desc: "Interviews, features, panels and keynote requests.",
        options: &["Interview", "Feature Story", "Panel / Keynote", "Podcast"],
    },
    InquiryPathway {
        id: GENERAL_PATHWAY,
        title: "General Inquiry",
        desc: "Anything else. We read every message.",
        options: &["Product Question", "Feedback", "Partnership Idea"],
    },
];

pub const TIMELINE_OPTIONS: &[&str] = &[
    "Immediately",
    "Within 1 month",
    "1-3 months",
    "3-6 months",
    "Exploratory",
];

pub const CHANNEL_OPTIONS: &[&str] = &["Email", "Phone", "Video Call"];

pub fn find_pathway(id: &str) -> Option<&'static InquiryPathway> {
    PATHWAYS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_general_pathway() {
        assert_eq!(PATHWAYS.iter().filter(|p| p.is_general()).count(), 1);
    }

    #[test]
    fn category_is_uppercase_id() {
        assert_eq!(find_pathway("wholesale").map(|p| p.category()), Some("WHOLESALE".to_string()));
    }

    #[test]
    fn option_lists_never_contain_the_other_sentinel() {
        let lists = PATHWAYS
            .iter()
            .map(|p| p.options)
            .chain([TIMELINE_OPTIONS, CHANNEL_OPTIONS]);
        for list in lists {
            assert!(!list.is_empty());
            assert!(!list.iter().any(|o| o.eq_ignore_ascii_case("other")));
        }
    }
}
