use chrono::Datelike;
use dioxus::prelude::*;

use visionpilot_common::{Page, SiteConfig};

use crate::analytics::use_analytics;
use crate::Route;

const PLATFORM_LINKS: [(&str, Page); 4] = [
    ("Architecture", Page::Technical),
    ("Models & Data", Page::Models),
    ("Simulation Demos", Page::Demos),
    ("Roadmap", Page::Roadmap),
];

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let analytics = use_analytics();
    let year = chrono::Utc::now().year();

    let track = |label: &'static str| {
        let analytics = analytics.clone();
        move |_: MouseEvent| analytics.click("Footer", label)
    };

    rsx! {
        footer { class: "bg-white border-t border-slate-200 pt-16 pb-8",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "grid grid-cols-1 md:grid-cols-4 gap-12 mb-12",
                    div {
                        Link { to: Route::Hero {}, class: "text-2xl font-display font-bold text-brand-dark mb-4 block",
                            "VisionPilot"
                        }
                        p { class: "text-slate-500 text-sm leading-relaxed mb-6",
                            "An open-source autonomous driving platform bridging the gap between simulation and reality using BeamNG.tech."
                        }
                        div { class: "flex space-x-4 text-sm",
                            a { href: "{config.repo_url}", class: "text-slate-400 hover:text-brand-dark transition-colors",
                                onclick: track("GitHub"), "GitHub"
                            }
                            a { href: "#", class: "text-slate-400 hover:text-blue-400 transition-colors",
                                onclick: track("Twitter"), "Twitter"
                            }
                            a { href: "#", class: "text-slate-400 hover:text-blue-700 transition-colors",
                                onclick: track("LinkedIn"), "LinkedIn"
                            }
                        }
                    }

                    div {
                        h3 { class: "font-bold text-brand-dark mb-4", "Platform" }
                        ul { class: "space-y-2 text-sm text-slate-500",
                            for (label, page) in PLATFORM_LINKS {
                                li { key: "{label}",
                                    Link { to: Route::from(page), class: "hover:text-brand-accent transition-colors", "{label}" }
                                }
                            }
                        }
                    }

                    div {
                        h3 { class: "font-bold text-brand-dark mb-4", "Resources" }
                        ul { class: "space-y-2 text-sm text-slate-500",
                            li { a { href: "#", class: "hover:text-brand-accent transition-colors", "Documentation" } }
                            li {
                                a { href: "{config.journal_url}", class: "hover:text-brand-accent transition-colors",
                                    onclick: track("Engineering Journal"), "Engineering Journal"
                                }
                            }
                            li {
                                a { href: "{config.repo_url}", class: "hover:text-brand-accent transition-colors",
                                    onclick: track("GitHub Repository"), "GitHub Repository"
                                }
                            }
                        }
                    }

                    div {
                        h3 { class: "font-bold text-brand-dark mb-4", "Contact" }
                        ul { class: "space-y-2 text-sm text-slate-500",
                            li { Link { to: Route::Contact {}, class: "hover:text-brand-accent transition-colors", "Get in Touch" } }
                            li {
                                a { href: "mailto:{config.contact_email}", class: "hover:text-brand-accent transition-colors",
                                    onclick: track("Email"), "{config.contact_email}"
                                }
                            }
                        }
                    }
                }

                div { class: "border-t border-slate-100 pt-8 flex flex-col md:flex-row justify-between items-center text-sm text-slate-400",
                    p { "© {year} VisionPilot. Open Source MIT License." }
                    p { class: "mt-2 md:mt-0", "Built with ♥ and BeamNG.tech" }
                }
            }
        }
    }
}
