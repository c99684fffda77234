mod bar_chart;
mod fallback_image;
mod footer;
mod navbar;
mod page_view;

pub use bar_chart::BarChart;
pub use fallback_image::FallbackImage;
pub use footer::Footer;
pub use navbar::Navbar;
pub use page_view::PageView;

use dioxus::prelude::*;

/// Inline style delaying a list item's entrance animation by its position.
pub fn stagger(index: usize) -> String {
    format!("animation-delay: {:.1}s", index as f64 * 0.1)
}

/// Layout shared by every route.
#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            class: "bg-brand-surface min-h-screen text-slate-800 font-sans flex flex-col",
            Navbar {}
            div { class: "flex-grow", PageView {} }
            Footer {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0), "animation-delay: 0.0s");
        assert_eq!(stagger(3), "animation-delay: 0.3s");
    }
}
