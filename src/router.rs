/// Top-level views. There is no URL routing; the shell keeps the current page
/// in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageId {
    #[default]
    Home,
    Id,
    Collections,
    Contact,
    Press,
}

impl PageId {
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::Id,
        PageId::Collections,
        PageId::Contact,
        PageId::Press,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Id => "id",
            PageId::Collections => "collections",
            PageId::Contact => "contact",
            PageId::Press => "press",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            PageId::Home => "HOME",
            PageId::Id => "THE ID",
            PageId::Collections => "COLLECTIONS",
            PageId::Contact => "CONTACT",
            PageId::Press => "PRESS",
        }
    }
}

/// Whatever owns the scroll position.
pub trait Viewport {
    fn scroll_to_top(&self);
}

pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Flat single-level router. Any slug is accepted on navigation; unknown ones
/// draw the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRouter {
    current: String,
}

impl Default for PageRouter {
    fn default() -> Self {
        Self {
            current: PageId::Home.slug().to_string(),
        }
    }
}

impl PageRouter {
    pub fn navigate(&mut self, target: impl Into<String>, viewport: &impl Viewport) {
        self.current = target.into();
        viewport.scroll_to_top();
    }

    /// Page to draw right now.
    pub fn current(&self) -> PageId {
        PageId::from_slug(&self.current).unwrap_or_default()
    }

    pub fn raw(&self) -> &str {
        &self.current
    }

    pub fn is_active(&self, page: PageId) -> bool {
        self.current == page.slug()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingViewport {
        resets: Cell<u32>,
    }

    impl Viewport for CountingViewport {
        fn scroll_to_top(&self) {
            self.resets.set(self.resets.get() + 1);
        }
    }

    #[test]
    fn starts_at_home() {
        assert_eq!(PageRouter::default().current(), PageId::Home);
    }

    #[test]
    fn slugs_round_trip() {
        for page in PageId::ALL {
            assert_eq!(PageId::from_slug(page.slug()), Some(page));
        }
    }

    #[test]
    fn unknown_slug_draws_home() {
        let viewport = CountingViewport::default();
        let mut router = PageRouter::default();
        for slug in ["", "about", "HOME", "collections/", "🙂"] {
            router.navigate(slug, &viewport);
            assert_eq!(router.raw(), slug);
            assert_eq!(router.current(), PageId::Home);
        }
    }

    #[test]
    fn unknown_slug_highlights_nothing() {
        let mut router = PageRouter::default();
        router.navigate("nowhere", &CountingViewport::default());
        assert!(PageId::ALL.iter().all(|p| !router.is_active(*p)));
    }

    #[test]
    fn every_navigation_scrolls_to_top() {
        let viewport = CountingViewport::default();
        let mut router = PageRouter::default();
        router.navigate("collections", &viewport);
        router.navigate("collections", &viewport);
        router.navigate("press", &viewport);
        assert_eq!(viewport.resets.get(), 3);
        assert_eq!(router.current(), PageId::Press);
        assert!(router.is_active(PageId::Press));
    }
}
