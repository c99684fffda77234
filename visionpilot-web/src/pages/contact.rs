use dioxus::prelude::*;

use visionpilot_common::SiteConfig;

use crate::analytics::use_analytics;

#[component]
pub fn Contact() -> Element {
    let config = use_context::<SiteConfig>();
    let analytics = use_analytics();
    let github = analytics.clone();

    rsx! {
        div { class: "min-h-screen bg-brand-surface pt-24 pb-12 px-4 flex items-center",
            div { class: "fade-up max-w-2xl mx-auto text-center",
                h1 { class: "text-4xl font-display font-bold text-brand-dark mb-4", "Get in Touch" }
                p { class: "text-slate-600 mb-10",
                    "Questions, collaboration ideas or feedback on the project are always welcome."
                }
                div { class: "flex flex-col sm:flex-row gap-4 justify-center",
                    a {
                        href: "{config.repo_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "px-8 py-4 rounded-full bg-brand-dark text-white font-semibold hover:bg-slate-700 transition-colors",
                        onclick: move |_| github.click("Contact", "GitHub"),
                        "View on GitHub"
                    }
                    a {
                        href: "mailto:{config.contact_email}",
                        class: "px-8 py-4 rounded-full bg-white border border-slate-200 text-slate-700 font-semibold hover:bg-slate-50 transition-colors",
                        onclick: move |_| analytics.click("Contact", "Email"),
                        "{config.contact_email}"
                    }
                }
            }
        }
    }
}
