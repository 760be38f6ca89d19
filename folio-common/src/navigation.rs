use tracing::debug;

use crate::Page;

/// Side effect the caller must perform after a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    /// Bring the viewport back to the top of the document
    ScrollToTop,
}

/// Pure view selector: which page is showing and whether the mobile menu is open.
///
/// Handles page switching and menu toggling without any I/O. The UI layer
/// performs the returned [`NavEffect`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteNav {
    active_page: Page,
    menu_open: bool,
}

impl SiteNav {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on a given page (e.g. from a deep link). The menu starts closed.
    pub fn starting_at(page: Page) -> Self {
        Self {
            active_page: page,
            menu_open: false,
        }
    }

    pub fn active_page(&self) -> Page {
        self.active_page
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.active_page == page
    }

    /// Switch to `page` and close the menu. Selecting the current page is allowed.
    pub fn navigate(&mut self, page: Page) -> NavEffect {
        if self.active_page != page {
            debug!("Navigating {} -> {}", self.active_page, page);
        }
        self.active_page = page;
        self.menu_open = false;
        NavEffect::ScrollToTop
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_home_with_menu_closed() {
        let nav = SiteNav::new();
        assert_eq!(nav.active_page(), Page::Home);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_navigate_to_each_page() {
        for page in Page::ALL {
            let mut nav = SiteNav::new();
            assert_eq!(nav.navigate(page), NavEffect::ScrollToTop);
            assert_eq!(nav.active_page(), page);
            for other in Page::ALL.into_iter().filter(|p| *p != page) {
                assert!(!nav.is_active(other));
            }
        }
    }

    #[test]
    fn test_navigate_closes_open_menu() {
        let mut nav = SiteNav::new();
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.navigate(Page::About);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_navigate_keeps_closed_menu_closed() {
        let mut nav = SiteNav::new();
        nav.navigate(Page::Services);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_reselecting_active_page_is_noop() {
        let mut nav = SiteNav::new();
        nav.navigate(Page::Work);
        let before = nav.clone();
        assert_eq!(nav.navigate(Page::Work), NavEffect::ScrollToTop);
        assert_eq!(nav, before);
    }

    #[test]
    fn test_toggle_menu_flips() {
        let mut nav = SiteNav::new();
        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.menu_open());
        assert_eq!(nav.active_page(), Page::Home);
    }

    #[test]
    fn test_starting_at() {
        let nav = SiteNav::starting_at(Page::Contact);
        assert_eq!(nav.active_page(), Page::Contact);
        assert!(!nav.menu_open());
    }
}
