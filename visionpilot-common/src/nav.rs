//! State behind the persistent header.

use crate::route::Page;

/// Vertical offset (px) past which the header switches to its scrolled look.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavLink {
    const fn to(page: Page) -> Self {
        Self {
            label: page.title(),
            path: page.path(),
        }
    }

    /// Exact path equality, no prefix matching.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

/// Links in header order. The brand logo links to `/` on its own.
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink::to(Page::Technical),
    NavLink::to(Page::Demos),
    NavLink::to(Page::Models),
    NavLink::to(Page::Roadmap),
    NavLink::to(Page::About),
];

/// Call to action rendered after the regular links.
pub const CONTACT_LINK: NavLink = NavLink::to(Page::Contact);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavShell {
    mobile_menu_open: bool,
    scrolled: bool,
    scroll_threshold: f64,
}

impl Default for NavShell {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl NavShell {
    pub fn new(scroll_threshold: f64) -> Self {
        Self {
            mobile_menu_open: false,
            scrolled: false,
            scroll_threshold,
        }
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Closes the mobile menu; the route change itself is the router's job.
    pub fn on_navigate(&mut self, path: &str) {
        tracing::debug!("navigating to {path}");
        self.mobile_menu_open = false;
    }

    pub fn on_scroll(&mut self, offset_y: f64) {
        self.scrolled = offset_y > self.scroll_threshold;
    }

    /// Every header link paired with whether it is active for `current_path`.
    pub fn links(current_path: &str) -> impl Iterator<Item = (NavLink, bool)> + '_ {
        NAV_LINKS
            .into_iter()
            .chain(std::iter::once(CONTACT_LINK))
            .map(move |link| (link, link.is_active(current_path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_current_link_is_active() {
        let active: Vec<&str> = NavShell::links("/roadmap")
            .filter(|(_, active)| *active)
            .map(|(link, _)| link.label)
            .collect();
        assert_eq!(active, vec!["Roadmap"]);
    }

    #[test]
    fn test_no_prefix_matching() {
        assert!(NavShell::links("/roadmap/extra").all(|(_, active)| !active));
        assert!(NavShell::links("/").all(|(_, active)| !active));
    }

    #[test]
    fn test_every_route_but_home_has_a_link() {
        let paths: Vec<&str> = NavShell::links("/").map(|(link, _)| link.path).collect();
        for page in Page::ALL.into_iter().filter(|p| *p != Page::Hero) {
            assert!(paths.contains(&page.path()), "missing link for {page}");
        }
    }

    #[test]
    fn test_toggle_twice_is_closed() {
        let mut shell = NavShell::default();
        shell.toggle_mobile_menu();
        assert!(shell.is_mobile_menu_open());
        shell.toggle_mobile_menu();
        assert!(!shell.is_mobile_menu_open());
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut shell = NavShell::default();
        shell.toggle_mobile_menu();
        shell.on_navigate("/demos");
        assert!(!shell.is_mobile_menu_open());
        shell.on_navigate("/demos");
        assert!(!shell.is_mobile_menu_open());
    }

    #[test]
    fn test_scroll_threshold() {
        let mut shell = NavShell::default();
        shell.on_scroll(20.0);
        assert!(!shell.is_scrolled());
        shell.on_scroll(21.0);
        assert!(shell.is_scrolled());
        shell.on_scroll(0.0);
        assert!(!shell.is_scrolled());

        let mut tall = NavShell::new(100.0);
        tall.on_scroll(50.0);
        assert!(!tall.is_scrolled());
    }
}
