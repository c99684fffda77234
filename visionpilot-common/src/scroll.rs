/// Viewport scroll position the host should apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEffect {
    pub left: f64,
    pub top: f64,
}

impl ScrollEffect {
    pub const TOP: ScrollEffect = ScrollEffect { left: 0.0, top: 0.0 };
}

/// Post-navigation hook: every route change scrolls back to the top,
/// anchor links included.
pub fn on_route_changed(path: &str) -> ScrollEffect {
    tracing::debug!("scroll reset after navigating to {path}");
    ScrollEffect::TOP
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Page;

    #[test]
    fn test_scroll_resets_for_every_route() {
        for page in Page::ALL {
            let effect = on_route_changed(page.path());
            assert_eq!(effect.top, 0.0);
            assert_eq!(effect.left, 0.0);
        }
    }

    #[test]
    fn test_anchor_links_still_reset() {
        assert_eq!(on_route_changed("/about#faq"), ScrollEffect::TOP);
    }
}
