use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use visionpilot_common::{Page, SiteConfig};

mod analytics;
mod browser;
mod components;
mod pages;

use analytics::Analytics;
use components::Shell;
use pages::{About, Contact, Demos, Hero, Models, NotFound, Roadmap, Technical};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// URL routes. Every page sits inside [`Shell`], which owns the header,
/// footer and the animated page container.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Hero {},
        #[route("/technical")]
        Technical {},
        #[route("/demos")]
        Demos {},
        #[route("/models")]
        Models {},
        #[route("/roadmap")]
        Roadmap {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Hero {} => Some(Page::Hero),
            Route::Technical {} => Some(Page::Technical),
            Route::Demos {} => Some(Page::Demos),
            Route::Models {} => Some(Page::Models),
            Route::Roadmap {} => Some(Page::Roadmap),
            Route::About {} => Some(Page::About),
            Route::Contact {} => Some(Page::Contact),
            Route::NotFound { .. } => None,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Hero => Route::Hero {},
            Page::Technical => Route::Technical {},
            Page::Demos => Route::Demos {},
            Page::Models => Route::Models {},
            Page::Roadmap => Route::Roadmap {},
            Page::About => Route::About {},
            Page::Contact => Route::Contact {},
        }
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        web_sys::console::error_1(&format!("logger failed to init: {err}").into());
    }
    launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(|| match SiteConfig::from_build_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("falling back to default configuration: {err}");
            SiteConfig::default()
        }
    });
    use_context_provider(|| Analytics::from_config(&config));

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "icon", href: config.asset("logo_visionpilotnobg.png") }
        document::Title { "VisionPilot" }

        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_match_route_table() {
        for page in Page::ALL {
            let route = Route::from(page);
            assert_eq!(route.page(), Some(page));
            assert_eq!(route.to_string(), page.path());
            assert_eq!(page.path().parse::<Route>().ok(), Some(route));
        }
    }

    #[test]
    fn test_unmatched_paths_fall_through() {
        let route = "/does/not/exist".parse::<Route>().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
        assert_eq!(route.page(), None);
    }
}
