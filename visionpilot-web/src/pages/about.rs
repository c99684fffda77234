use dioxus::prelude::*;

use visionpilot_common::accordion::Accordion;
use visionpilot_common::content::{CREDITS, FAQS};
use visionpilot_common::SiteConfig;

use crate::analytics::use_analytics;

#[component]
pub fn About() -> Element {
    let config = use_context::<SiteConfig>();
    let analytics = use_analytics();
    let mut faq = use_signal(Accordion::default);

    rsx! {
        div { class: "min-h-screen bg-brand-surface pt-24 pb-12 px-4",
            div { class: "max-w-4xl mx-auto space-y-12",
                div { class: "bg-white border border-slate-200 rounded-2xl p-8 md:p-12 shadow-sm",
                    h1 { class: "text-4xl font-display font-bold text-brand-dark mb-6", "About the Project" }
                    p { class: "text-lg text-slate-600 mb-8 leading-relaxed",
                        "VisionPilot started as a modular Python project for autonomous driving research. "
                        "It aims to bridge the gap between simulation and reality by integrating BeamNG.tech's "
                        "soft-body physics with industry-standard computer vision and deep learning pipelines."
                    }
                    div { class: "space-y-6",
                        div {
                            h3 { class: "text-xl font-bold text-brand-accent mb-2", "Engineering Journal" }
                            p { class: "text-slate-500 text-sm mb-3",
                                "Track the entire development process, challenges, and solutions."
                            }
                            a {
                                href: "{config.journal_url}",
                                target: "_blank",
                                rel: "noreferrer",
                                class: "inline-flex items-center text-brand-dark hover:text-brand-accent transition-colors underline underline-offset-4 font-medium",
                                onclick: move |_| analytics.click("About", "View Journal on Google Drive"),
                                "View Journal on Google Drive"
                            }
                        }
                        div { class: "pt-6 border-t border-slate-100",
                            h3 { class: "text-sm font-bold text-slate-400 uppercase tracking-wider mb-4", "Credits" }
                            ul { class: "grid sm:grid-cols-2 gap-2 text-sm text-slate-500",
                                for credit in CREDITS {
                                    li { key: "{credit}", "{credit}" }
                                }
                            }
                        }
                    }
                }

                div { class: "bg-white border border-slate-200 rounded-2xl p-8 shadow-sm",
                    h2 { class: "text-2xl font-display font-bold text-brand-dark mb-6", "Contributors" }
                    div { class: "flex items-center space-x-4",
                        div { class: "w-16 h-16 bg-slate-100 rounded-full flex items-center justify-center text-xl font-bold text-slate-400 border border-slate-200",
                            "JS"
                        }
                        div {
                            h3 { class: "text-lg font-bold text-brand-dark", "Julian S." }
                            p { class: "text-slate-500 text-sm", "Lead Developer" }
                            p { class: "text-xs text-slate-400 mt-1",
                                "Core Architecture, Computer Vision, Control Systems"
                            }
                        }
                    }
                }

                div { class: "bg-white border border-slate-200 rounded-2xl p-8 shadow-sm",
                    h2 { class: "text-2xl font-display font-bold text-brand-dark mb-8", "Frequently Asked Questions" }
                    div { class: "space-y-4",
                        for (idx, entry) in FAQS.iter().enumerate() {
                            div { key: "{idx}", class: "border border-slate-100 rounded-lg overflow-hidden",
                                button {
                                    class: "w-full flex justify-between items-center p-4 bg-slate-50 hover:bg-slate-100 transition-colors text-left",
                                    "aria-expanded": faq.read().is_open(idx),
                                    onclick: move |_| faq.write().toggle(idx),
                                    span { class: "font-semibold text-slate-700", "{entry.question}" }
                                    span { class: "text-slate-400",
                                        if faq.read().is_open(idx) { "▴" } else { "▾" }
                                    }
                                }
                                if faq.read().is_open(idx) {
                                    div { class: "accordion-panel p-4 bg-white text-slate-600 text-sm leading-relaxed border-t border-slate-100",
                                        "{entry.answer}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
