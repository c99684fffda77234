use dioxus::prelude::*;

use visionpilot_common::content::{RoadmapStatus, ROADMAP};

use crate::components::stagger;

#[component]
pub fn Roadmap() -> Element {
    rsx! {
        div { class: "min-h-screen bg-brand-surface pt-24 pb-12 px-4",
            div { class: "max-w-6xl mx-auto",
                div { class: "mb-12 text-center",
                    h1 { class: "text-4xl font-display font-bold text-brand-dark mb-4", "Development Roadmap" }
                    p { class: "text-slate-600", "Where VisionPilot stands today and what comes next." }
                }

                div { class: "flex flex-wrap justify-center gap-6 mb-12 text-sm text-slate-600",
                    for status in RoadmapStatus::ALL {
                        div { key: "{status.label()}", class: "flex items-center gap-2",
                            span { class: glyph_class(status), "{glyph(status)}" }
                            span { "{status.label()}" }
                        }
                    }
                }

                div { class: "grid md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for (idx, item) in ROADMAP.iter().enumerate() {
                        div {
                            key: "{item.category}",
                            class: "fade-up bg-white border border-slate-200 rounded-xl p-6 shadow-sm",
                            style: stagger(idx),
                            h3 { class: "text-lg font-bold text-brand-dark mb-4 pb-2 border-b border-slate-100",
                                "{item.category}"
                            }
                            ul { class: "space-y-3",
                                for entry in item.entries {
                                    li { key: "{entry.text}", class: "flex items-start gap-3 text-sm",
                                        span { class: glyph_class(entry.status), "{glyph(entry.status)}" }
                                        span { class: text_class(entry.status), "{entry.text}" }
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

fn glyph(status: RoadmapStatus) -> &'static str {
    match status {
        RoadmapStatus::Completed => "✓",
        RoadmapStatus::InProgress => "🔥",
        RoadmapStatus::Planned => "◷",
        RoadmapStatus::LowPriority => "○",
    }
}

fn glyph_class(status: RoadmapStatus) -> &'static str {
    match status {
        RoadmapStatus::Completed => "w-5 shrink-0 text-center font-bold text-green-500",
        RoadmapStatus::InProgress => "w-5 shrink-0 text-center text-orange-500",
        RoadmapStatus::Planned => "w-5 shrink-0 text-center text-slate-400",
        RoadmapStatus::LowPriority => "w-5 shrink-0 text-center text-slate-300",
    }
}

fn text_class(status: RoadmapStatus) -> &'static str {
    if status.is_done() {
        "text-slate-400 line-through"
    } else {
        "text-slate-700"
    }
}
