#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStatus {
    Selected,
    RequestEntry,
}

impl CollectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CollectionStatus::Selected => "SELECTED",
            CollectionStatus::RequestEntry => "REQUEST ENTRY",
        }
    }
}

/// One product line in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub id: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub featured_items: &'static [&'static str],
    pub status: Option<CollectionStatus>,
    pub color_theme: &'static str,
    pub main_link: Option<&'static str>,
    pub item_links: &'static [(&'static str, &'static str)],
    pub seo_cluster: &'static str,
}

impl Collection {
    pub fn item_link(&self, item: &str) -> Option<&'static str> {
        self.item_links
            .iter()
            .find(|(label, _)| *label == item)
            .map(|(_, url)| *url)
    }

    /// "SERIES // 01" style index shown next to the category.
    pub fn series_label(index: usize) -> String {
        format!("SERIES // {:02}", index + 1)
    }
}

pub const COLLECTIONS: &[Collection] = &[
    Collection {
        id: "art-deco",
        category: "ART DECO",
        title: "The Twenties Collection",
        subtitle: "Signature Art Deco glassware in iconic colors like Obsidian, Teal, and Amber. Inspired by the roar of the 1920s.",
        description: "Our flagship collection redefined the aesthetic of the modern consumer. Featuring luxury borosilicate glass that doubles as home decor.",
        featured_items: &["WATER PIPES", "BUBBLERS", "BEAKERS", "ASHTRAYS"],
        status: Some(CollectionStatus::Selected),
        color_theme: "linear-gradient(135deg, #fef3c7, #fde68a)",
        main_link: Some("https://janewest.com/collections/the-twenties-collection"),
        item_links: &[
            ("WATER PIPES", "https://janewest.com/products/twenties-collection-water-pipe"),
            ("BUBBLERS", "https://janewest.com/products/twenties-collection-bubbler"),
            ("BEAKERS", "https://janewest.com/products/twenties-collection-hand-pipe"),
            ("ASHTRAYS", "https://janewest.com/products/twenties-collection-ashtray"),
        ],
        seo_cluster: "Experience the pinnacle of sophisticated consumption with the Jane West Twenties Collection. Discover mid-century modern bongs and Art Deco cannabis glassware crafted from premium heat-resistant borosilicate. This collection features signature cobalt blue bubblers, elegant beaker bongs, and designer glass pipes that serve as functional art for the discerning enthusiast. Every piece reflects the luxury aesthetic of the 1920s, merging high-end cannabis home decor with scientific glass precision.",
    },
    Collection {
        id: "travel",
        category: "TRAVEL",
        title: "The Travel Collection",
        subtitle: "Sleek, discreet metal tools designed for the modern trailblazer who values utility and style.",
        description: "Discreet solutions for the on-the-go lifestyle. Engineered from high-grade materials to fit seamlessly into your daily carry.",
        featured_items: &["THE CLASSIC (FLASK)", "THE WAND (MASCARA)", "THE COMPACT"],
        status: Some(CollectionStatus::Selected),
        color_theme: "linear-gradient(135deg, #f1f5f9, #e2e8f0)",
        main_link: Some("https://janewest.com/products/day-night-travel-pipe-set"),
        item_links: &[
            ("THE CLASSIC (FLASK)", "https://janewest.com/products/janewest-classic"),
            ("THE WAND (MASCARA)", "https://www.iheartjane.com/products/396896/grav-jane-west-wand"),
            ("THE COMPACT", "https://janewest.com/products/janewest-compact"),
        ],
        seo_cluster: "Master the art of discreet consumption with the Jane West Travel Collection. Our range includes sleek one-hitter pipes designed for purse storage, the iconic mascara-shaped travel pipe, and portable smell-proof dugout kits. Designed for the modern trailblazer, these compact smoking accessories offer utility without compromising on style. Find the perfect travel pipe set or the classic flask-style dugout for on-the-go discretion, featuring built-in mirrors and high-grade metal finishes.",
    },
    Collection {
        id: "daily",
        category: "DAILY",
        title: "Daily Accessories",
        subtitle: "Practical home essentials that elevate your daily routine from mundane to magnificent.",
        description: "Elevated essentials that integrate into your home environment. Clean lines, superior function, and timeless design.",
        featured_items: &["SOLO ONE-HITTER", "THE CUBE", "OUTDOOR PIPE"],
        status: Some(CollectionStatus::Selected),
        color_theme: "linear-gradient(135deg, #fce7f3, #fbcfe8)",
        main_link: Some("https://janewest.com"),
        item_links: &[
            ("SOLO ONE-HITTER", "https://janewest.com/products/the-solo"),
            ("THE CUBE", "https://janewest.com/products/the-cube"),
            ("OUTDOOR PIPE", "https://janewest.com/products/the-outdoor-pipe"),
        ],
        seo_cluster: "Elevate your home ritual with Jane West Daily Essentials. This collection features high-end cannabis home decor including the Jane West Solo one-hitter, virtually unbreakable silicone travel pipes, and the innovative Cube storage container. Our elegant weed grinders and sophisticated storage solutions are designed to blend seamlessly into modern interior design. Experience the intersection of luxury cannabis lifestyle and functional daily tools with our architectural glassware and refined home accessories.",
    },
    Collection {
        id: "collaboration",
        category: "COLLABORATION",
        title: "Jane West x GRAV",
        subtitle: "The original high-end borosilicate scientific glass collaborative line for the discerning consumer.",
        description: "A historic partnership that brought scientific glass precision to lifestyle-focused design. Iconic cobalt and clear borosilicate.",
        featured_items: &["BEAKERS", "STEAMROLLERS", "BUBBLERS"],
        status: Some(CollectionStatus::Selected),
        color_theme: "linear-gradient(135deg, #dbeafe, #bfdbfe)",
        main_link: Some("https://www.headshop.com/collections/jane-west"),
        item_links: &[
            ("BEAKERS", "https://smokea.com/products/jane-west-x-grav-labs-beaker-bong"),
            ("STEAMROLLERS", "https://www.leafly.com/brands/caliconnected/products/caliconnected-grav-labs-jane-west-steamroller"),
            ("BUBBLERS", "https://www.headshop.com/collections/jane-west"),
        ],
        seo_cluster: "Celebrate the historic Jane West x GRAV Labs collaboration, the gold standard in high-end borosilicate scientific glass. This collaborative line features iconic cobalt blue water pipes, designer steamrollers, and precision-engineered bubblers. Known for superior airflow and durability, these scientific glass pieces are must-haves for collectors of designer bongs. Architected for the discerning consumer who demands both laboratory-grade quality and high-fashion lifestyle aesthetics.",
    },
    Collection {
        id: "wellness",
        category: "WELLNESS",
        title: "Jane's Brew (CBD)",
        subtitle: "Specialized capsules and K-Cups designed to integrate wellness into your daily rituals.",
        description: "Wellness reimagined. Integrating high-quality CBD into the rituals you already love, from morning coffee to nightly wind-down.",
        featured_items: &["CHILL/HAPPY/SERENITY K-CUPS", "CBD CAPSULES"],
        status: Some(CollectionStatus::RequestEntry),
        color_theme: "linear-gradient(135deg, #ecfdf5, #d1fae5)",
        main_link: Some("https://cbdfarmhouse.com/shop/cbd-hemp-products/cbd-hemp-edibles/janes-brew-cup-of-coffee/"),
        item_links: &[
            ("CHILL/HAPPY/SERENITY K-CUPS", "https://cbdfarmhouse.com/shop/cbd-hemp-products/cbd-hemp-edibles/janes-brew-cup-of-coffee/"),
            ("CBD CAPSULES", "https://cbdfarmhouse.com/shop/cbd-hemp-products/cbd-hemp-edibles/janes-brew-cup-of-coffee/"),
        ],
        seo_cluster: "Revitalize your wellness routine with Jane's Brew CBD coffee. Our specialized CBD coffee K-cups are formulated for focus, featuring high-quality cannabidiol designed to integrate into your morning ritual or nightly serenity. Explore Jane West wellness capsules and functional hemp-infused coffee that supports a balanced lifestyle. Whether you need focus for your workday or a calm evening wind-down, our CBD products provide a seamless path to wellness integration.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn collection_ids_are_unique() {
        let ids: HashSet<_> = COLLECTIONS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), COLLECTIONS.len());
    }

    #[test]
    fn every_featured_item_has_a_link() {
        for col in COLLECTIONS {
            for item in col.featured_items {
                assert!(col.item_link(item).is_some(), "{} / {}", col.id, item);
            }
        }
    }

    #[test]
    fn unknown_item_has_no_link() {
        assert_eq!(COLLECTIONS[0].item_link("NOT A PRODUCT"), None);
    }

    #[test]
    fn series_label_is_one_based_and_padded() {
        assert_eq!(Collection::series_label(0), "SERIES // 01");
        assert_eq!(Collection::series_label(11), "SERIES // 12");
    }
}
