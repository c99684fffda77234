use dioxus::prelude::*;

use visionpilot_common::content::{DemoEntry, DemoMedia, DEMOS};
use visionpilot_common::demo::DemoActivation;
use visionpilot_common::SiteConfig;

use crate::analytics::use_analytics;
use crate::components::{stagger, FallbackImage};

#[component]
pub fn Demos() -> Element {
    let analytics = use_analytics();
    let activation = use_signal(DemoActivation::default);

    use_hook(|| analytics.page_view("Demos"));

    rsx! {
        div { class: "min-h-screen bg-brand-surface pt-24 pb-12 px-4",
            div { class: "max-w-7xl mx-auto",
                div { class: "text-center mb-16",
                    h1 { class: "text-4xl font-display font-bold text-brand-dark mb-4", "System Demos" }
                    p { class: "text-slate-600 max-w-2xl mx-auto",
                        "See the VisionPilot system in action. From raw sensor visualization to full autonomous control loops."
                    }
                }
                div { class: "grid md:grid-cols-2 gap-8",
                    for (idx, demo) in DEMOS.iter().enumerate() {
                        DemoCard { key: "{idx}", index: idx, demo: *demo, activation }
                    }
                }
            }
        }
    }
}

#[component]
fn DemoCard(index: usize, demo: DemoEntry, mut activation: Signal<DemoActivation>) -> Element {
    let config = use_context::<SiteConfig>();
    let analytics = use_analytics();

    let media = match demo.media {
        DemoMedia::Video { .. } if activation.read().is_activated(index) => rsx! {
            iframe {
                class: "w-full h-full",
                src: demo.media.embed_url().unwrap_or_default(),
                title: demo.title,
                allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                allowfullscreen: true,
            }
        },
        DemoMedia::Video { .. } => rsx! {
            div {
                class: "w-full h-full relative cursor-pointer group",
                onclick: move |_| {
                    activation.write().activate(index, demo.title, analytics.reporter());
                },
                FallbackImage {
                    src: demo.media.thumbnail_url().unwrap_or_default(),
                    alt: demo.title,
                    class: "w-full h-full object-cover opacity-80 group-hover:opacity-100 transition-opacity",
                }
                div { class: "absolute inset-0 flex items-center justify-center",
                    div { class: "bg-white/20 backdrop-blur-sm p-5 rounded-full border border-white/30 text-white text-2xl group-hover:scale-110 transition-all duration-300",
                        "▶"
                    }
                }
            }
        },
        DemoMedia::Image { asset } => rsx! {
            div { class: "w-full h-full relative",
                FallbackImage {
                    src: config.asset(asset),
                    alt: demo.title,
                    class: "w-full h-full object-cover opacity-80 hover:opacity-100 transition-opacity",
                }
                div { class: "absolute inset-0 flex items-center justify-center pointer-events-none",
                    div { class: "bg-white/20 backdrop-blur p-4 rounded-full border border-white/30",
                        span { class: "text-xs font-bold uppercase tracking-wider text-white", "GIF Demo" }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "fade-up bg-white rounded-xl overflow-hidden border border-slate-200 hover:border-brand-accent/50 hover:shadow-xl transition-shadow duration-300",
            style: stagger(index),
            div { class: "relative aspect-video bg-slate-900", {media} }
            div { class: "p-6",
                div { class: "flex flex-wrap gap-2 mb-3",
                    for tag in demo.tags {
                        span { key: "{tag}", class: "text-xs font-mono py-1 px-2 rounded bg-slate-100 text-brand-blue border border-slate-200 font-semibold",
                            "#{tag}"
                        }
                    }
                }
                h3 { class: "text-xl font-bold text-brand-dark mb-2", "{demo.title}" }
                p { class: "text-slate-600 text-sm", "{demo.description}" }
            }
        }
    }
}
