mod about;
mod contact;
mod demos;
mod hero;
mod models;
mod roadmap;
mod technical;

pub use about::About;
pub use contact::Contact;
pub use demos::Demos;
pub use hero::Hero;
pub use models::Models;
pub use roadmap::Roadmap;
pub use technical::Technical;

use dioxus::prelude::*;

/// Target of the catch-all route. [`crate::components::PageView`] renders
/// the pages itself and shows nothing for unmatched paths, so this is never
/// mounted; the `Routable` derive needs a component per route.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let _ = segments;
    rsx! {}
}
