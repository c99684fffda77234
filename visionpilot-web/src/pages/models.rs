use dioxus::prelude::*;

use visionpilot_common::content::{dataset_chart, ModelStatus, BENCHMARKS, MODELS};

use crate::components::BarChart;

#[component]
pub fn Models() -> Element {
    rsx! {
        div { class: "min-h-screen bg-brand-surface pt-24 pb-12 px-4",
            div { class: "max-w-6xl mx-auto",
                div { class: "mb-12",
                    h1 { class: "text-4xl font-display font-bold text-brand-dark mb-4", "Models & Datasets" }
                    p { class: "text-slate-600", "The neural networks and training data powering VisionPilot." }
                }

                div { class: "grid lg:grid-cols-2 gap-12",
                    div { class: "slide-in-left space-y-6",
                        h2 { class: "text-2xl font-bold text-brand-dark mb-6", "Active Models" }
                        div { class: "grid gap-4",
                            for (idx, model) in MODELS.iter().enumerate() {
                                div { key: "{idx}", class: "bg-white border border-slate-200 p-5 rounded-lg flex justify-between items-center hover:border-brand-accent/50 hover:shadow-md transition-all",
                                    div {
                                        h3 { class: "text-lg font-bold text-brand-dark", "{model.name}" }
                                        p { class: "text-sm text-slate-500", "{model.task}" }
                                    }
                                    div { class: "text-right",
                                        span { class: "block text-xs font-mono text-slate-400 mb-1", "{model.framework}" }
                                        span { class: status_class(model.status), "{model.status.label()}" }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "slide-in-right bg-white border border-slate-200 p-8 rounded-2xl shadow-sm",
                        h2 { class: "text-2xl font-bold text-brand-dark mb-6", "Dataset Relative Scale" }
                        BarChart { data: dataset_chart() }
                        p { class: "text-center text-xs text-slate-400 mt-4",
                            "*Relative representation of dataset volume used for training"
                        }
                    }
                }

                div { class: "fade-up mt-12 bg-white rounded-xl border border-slate-200 overflow-hidden shadow-sm",
                    div { class: "bg-slate-50 px-6 py-4 border-b border-slate-100",
                        h3 { class: "font-bold text-brand-dark", "Model Inference Benchmarks" }
                    }
                    div { class: "divide-y divide-slate-100",
                        div { class: "grid grid-cols-3 px-6 py-3 bg-slate-50/50 text-xs font-bold text-slate-400 uppercase tracking-wider",
                            div { "Model Architecture" }
                            div { "Task" }
                            div { class: "text-right", "Inference Time" }
                        }
                        for (idx, bench) in BENCHMARKS.iter().enumerate() {
                            div { key: "{idx}", class: "grid grid-cols-3 px-6 py-4 items-center hover:bg-slate-50 transition-colors",
                                div { class: "font-mono text-sm text-brand-blue font-semibold", "{bench.architecture}" }
                                div { class: "text-sm text-slate-600", "{bench.task}" }
                                div { class: "text-right font-mono text-sm text-brand-dark", "{bench.display_time()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn status_class(status: ModelStatus) -> &'static str {
    match status {
        ModelStatus::Production => "text-xs px-2 py-1 rounded-full border bg-green-50 text-green-600 border-green-200",
        ModelStatus::Optimization => "text-xs px-2 py-1 rounded-full border bg-yellow-50 text-yellow-600 border-yellow-200",
    }
}
