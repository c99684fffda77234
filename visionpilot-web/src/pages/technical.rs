use dioxus::prelude::*;

use visionpilot_common::content::{PIPELINE, SENSORS};

use crate::components::stagger;

#[component]
pub fn Technical() -> Element {
    let last = PIPELINE.len() - 1;

    rsx! {
        div { class: "min-h-screen bg-brand-surface pt-24 pb-12 px-4",
            div { class: "max-w-6xl mx-auto",
                div { class: "text-center mb-16",
                    h1 { class: "text-4xl font-display font-bold text-brand-dark mb-4", "System Architecture" }
                    p { class: "text-slate-600 max-w-2xl mx-auto",
                        "A modular pipeline from simulated sensors to actuator commands."
                    }
                }

                div { class: "max-w-2xl mx-auto mb-24",
                    for (idx, stage) in PIPELINE.iter().enumerate() {
                        div { key: "{stage.id}",
                            div {
                                class: "fade-up stage-{stage.id} border rounded-xl p-6 bg-white shadow-sm",
                                style: stagger(idx),
                                h3 { class: "text-xl font-bold text-brand-dark mb-3", "{stage.title}" }
                                ul { class: "space-y-1 text-sm text-slate-600",
                                    for detail in stage.details {
                                        li { key: "{detail}", "{detail}" }
                                    }
                                }
                            }
                            if idx < last {
                                div { class: "flex justify-center py-3 text-slate-300 text-2xl", "↓" }
                            }
                        }
                    }
                }

                h2 { class: "text-3xl font-display font-bold text-brand-dark mb-8 text-center", "Sensor Suite" }
                div { class: "grid md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for (idx, sensor) in SENSORS.iter().enumerate() {
                        div {
                            key: "{sensor.name}",
                            class: "fade-up bg-white border border-slate-200 rounded-xl p-6 hover:shadow-md transition-shadow",
                            style: stagger(idx),
                            h3 { class: "text-lg font-bold text-brand-dark mb-2", "{sensor.name}" }
                            p { class: "text-slate-500 text-sm mb-4", "{sensor.description}" }
                            div { class: "grid grid-cols-2 gap-2",
                                for spec in sensor.specs {
                                    span { key: "{spec}", class: "text-xs font-mono py-1 px-2 rounded bg-slate-50 border border-slate-100 text-slate-600",
                                        "{spec}"
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
