use dioxus::prelude::*;

use visionpilot_common::content::{
    ARCHITECTURE_CTA, FEATURES, FUSION_SENSORS, PERCEPTION_LAYERS, SIMULATION_CTA,
};
use visionpilot_common::pointer::Parallax;
use visionpilot_common::SiteConfig;

use crate::browser;
use crate::components::{stagger, FallbackImage};
use crate::Route;

#[component]
pub fn Hero() -> Element {
    let config = use_context::<SiteConfig>();
    let mut parallax = use_signal(Parallax::default);

    let on_pointer = move |evt: MouseEvent| {
        let point = evt.client_coordinates();
        let viewport = browser::window().and_then(|window| browser::viewport_size(&window));
        if let Ok((width, height)) = viewport {
            parallax.set(Parallax::from_pointer(point.x, point.y, width, height));
        }
    };
    let explore = move |_: MouseEvent| {
        if let Err(err) = browser::scroll_past_viewport() {
            tracing::warn!("scroll to content failed: {err}");
        }
    };

    let offset = parallax();

    rsx! {
        div { class: "relative bg-brand-surface overflow-x-hidden",
            section {
                class: "relative min-h-screen flex items-center justify-center px-4 text-center overflow-hidden",
                onmousemove: on_pointer,
                div { class: "road-scene absolute inset-0 pointer-events-none", style: offset.translate(-12.0),
                    div { class: "road-lane road-lane-left" }
                    div { class: "road-lane road-lane-center" }
                    div { class: "road-lane road-lane-right" }
                }
                div { class: "absolute top-0 left-0 right-0 h-1/2 bg-gradient-to-b from-slate-50 via-slate-50/90 to-transparent z-10 pointer-events-none" }

                div { class: "fade-up relative z-30 max-w-4xl mx-auto", style: offset.translate(6.0),
                    h1 { class: "text-6xl md:text-8xl font-display font-bold tracking-tight text-brand-dark mb-6",
                        "VisionPilot"
                    }
                    p { class: "text-xl md:text-2xl text-slate-600 leading-relaxed mb-10 max-w-2xl mx-auto font-light",
                        "Autonomous Driving Simulation & "
                        br {}
                        span { class: "text-brand-accent font-normal", "Real-Time Perception" }
                    }
                    div { class: "flex flex-col sm:flex-row gap-4 justify-center items-center",
                        button {
                            class: "px-8 py-4 rounded-full bg-brand-accent text-white font-bold text-lg hover:bg-teal-500 transition-colors shadow-lg hover:shadow-xl",
                            onclick: explore,
                            "Explore System ↓"
                        }
                        a {
                            href: "{config.repo_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "px-8 py-4 rounded-full bg-white border border-slate-200 text-slate-700 font-semibold text-lg hover:bg-slate-50 transition-all",
                            "Codebase"
                        }
                    }
                }

                div {
                    class: "bounce absolute bottom-10 left-0 w-full flex justify-center text-slate-400 cursor-pointer",
                    onclick: explore,
                    span { class: "text-xs uppercase tracking-widest font-bold opacity-60", "Scroll to Explore" }
                }
            }

            section { class: "py-24 px-4 bg-white border-b border-slate-100",
                div { class: "max-w-7xl mx-auto",
                    div { class: "text-center mb-16",
                        h2 { class: "text-brand-accent font-semibold tracking-wide uppercase mb-3", "Core Capabilities" }
                        h3 { class: "text-3xl md:text-4xl font-display font-bold text-brand-dark", "Modular Autonomy Stack" }
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                        for (idx, feature) in FEATURES.iter().enumerate() {
                            div {
                                key: "{feature.title}",
                                class: "fade-up bg-slate-50 border border-slate-100 p-8 rounded-2xl hover:border-brand-accent/30 hover:shadow-lg transition-colors duration-300",
                                style: stagger(idx),
                                h3 { class: "text-lg font-bold text-brand-dark mb-2", "{feature.title}" }
                                p { class: "text-slate-600 text-sm leading-relaxed", "{feature.description}" }
                            }
                        }
                    }
                }
            }

            section { class: "py-32 px-4 relative bg-white overflow-hidden border-t border-slate-200",
                div { class: "max-w-7xl mx-auto grid lg:grid-cols-2 gap-20 items-center relative z-10",
                    div { class: "relative h-[500px] flex items-center justify-center",
                        div { class: "layer-stack relative w-72 h-72",
                            div { class: "layer layer-raw absolute inset-0 bg-white border border-slate-200 rounded-xl shadow-xl flex items-center justify-center",
                                span { class: "text-slate-400 font-mono text-xs font-bold tracking-widest", "RAW_DATA" }
                            }
                            for (idx, layer) in PERCEPTION_LAYERS.iter().enumerate() {
                                div {
                                    key: "{layer.tag}",
                                    class: "layer layer-{idx} absolute inset-0 rounded-xl shadow-lg backdrop-blur-sm flex items-center justify-center",
                                    span { class: "font-mono text-xs bg-white/80 px-2 border rounded", "{layer.tag}" }
                                }
                            }
                        }
                    }

                    div { class: "slide-in-right",
                        div { class: "inline-flex items-center space-x-2 mb-6 px-3 py-1 rounded-full bg-brand-accent/10 border border-brand-accent/20",
                            span { class: "w-2 h-2 rounded-full bg-brand-accent animate-pulse" }
                            span { class: "text-sm font-bold text-brand-accent uppercase tracking-wider", "Sensor Fusion" }
                        }
                        h2 { class: "text-4xl md:text-5xl font-display font-bold text-brand-dark mb-6", "See the World in Layers" }
                        p { class: "text-lg text-slate-600 mb-8 leading-relaxed",
                            "True autonomy requires more than just a camera feed. VisionPilot deconstructs the environment into semantic layers, "
                            "separating road geometry from dynamic obstacles, before fusing them into a unified 3D understanding."
                        }
                        div { class: "space-y-6 mb-10",
                            for layer in PERCEPTION_LAYERS {
                                div { key: "{layer.title}", class: "ml-4",
                                    h4 { class: "text-brand-dark font-bold text-lg mb-1", "{layer.title}" }
                                    p { class: "text-slate-600 text-sm leading-relaxed", "{layer.description}" }
                                }
                            }
                        }
                        Link {
                            to: Route::from(ARCHITECTURE_CTA.page),
                            class: "inline-flex items-center px-8 py-4 rounded-full bg-brand-dark text-white font-bold hover:bg-brand-accent transition-all shadow-lg",
                            "{ARCHITECTURE_CTA.label} →"
                        }
                    }
                }
            }

            section { class: "py-32 px-4 relative bg-white overflow-hidden border-t border-slate-100",
                div { class: "max-w-7xl mx-auto grid lg:grid-cols-2 gap-16 items-center",
                    div { class: "fade-up relative h-[500px] lg:order-2 flex items-center justify-center",
                        div { class: "relative w-full h-full max-w-md aspect-square",
                            CoverageMap {}
                            div { class: "absolute bottom-0 left-0 right-0 flex justify-center space-x-6 text-xs font-bold uppercase tracking-wider",
                                for sensor in FUSION_SENSORS {
                                    div { key: "{sensor.legend}", class: "flex items-center", style: "color: {sensor.color}",
                                        span { class: "w-3 h-3 rounded-full mr-2 border", style: "border-color: {sensor.color}" }
                                        "{sensor.legend}"
                                    }
                                }
                            }
                        }
                    }

                    div { class: "slide-in-left lg:order-1",
                        h2 { class: "text-4xl font-display font-bold text-brand-dark mb-6", "Multi-Modal Sensor Fusion" }
                        p { class: "text-lg text-slate-600 mb-8 leading-relaxed",
                            "No single sensor is perfect. VisionPilot overlaps data from three distinct physical domains "
                            "so that perception keeps working when one of them fails."
                        }
                        div { class: "space-y-8",
                            for sensor in FUSION_SENSORS {
                                div { key: "{sensor.name}", class: "relative pl-8 border-l-2 border-slate-200",
                                    span {
                                        class: "absolute -left-[9px] top-0 w-4 h-4 rounded-full bg-white border-2",
                                        style: "border-color: {sensor.color}",
                                    }
                                    h4 { class: "text-brand-dark font-bold text-lg mb-1", "{sensor.name}" }
                                    p { class: "text-slate-600 text-sm", "{sensor.description}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "py-24 px-4 bg-white border-t border-slate-200",
                div { class: "fade-up max-w-7xl mx-auto relative rounded-3xl overflow-hidden bg-white border border-slate-200 shadow-xl",
                    div { class: "absolute top-0 left-0 w-full h-1 bg-gradient-to-r from-brand-accent to-blue-500" }
                    div { class: "grid md:grid-cols-2",
                        div { class: "p-10 md:p-16 flex flex-col justify-center",
                            span { class: "text-sm font-bold text-slate-400 uppercase tracking-wider mb-4", "Physics Engine" }
                            h3 { class: "text-4xl font-display font-bold text-brand-dark mb-6", "Tested in BeamNG.tech" }
                            p { class: "text-slate-600 mb-8 text-lg leading-relaxed",
                                "Soft-body physics simulation puts the control algorithms through realistic vehicle dynamics, "
                                "sensor noise and complex traffic scenarios before they ever touch real pavement."
                            }
                            div { class: "flex flex-col sm:flex-row gap-4",
                                Link {
                                    to: Route::from(SIMULATION_CTA.page),
                                    class: "inline-flex items-center justify-center px-6 py-3 rounded-full bg-brand-dark text-white font-bold hover:bg-brand-accent transition-all shadow-lg",
                                    "{SIMULATION_CTA.label} ⚡"
                                }
                            }
                        }
                        div { class: "relative h-64 md:h-auto overflow-hidden bg-white",
                            FallbackImage {
                                src: config.asset("beamng_tech.jpg"),
                                alt: "BeamNG Simulation",
                                class: "w-full h-full object-cover opacity-90 hover:opacity-100 transition-all duration-700",
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Top-down view of the car with its radar, camera and LiDAR coverage.
#[component]
fn CoverageMap() -> Element {
    rsx! {
        svg { class: "absolute inset-0 w-full h-full", view_box: "0 0 400 400",
            g { transform: "translate(200, 200)",
                g { class: "lidar-sweep",
                    for angle in (0..8).map(|i| i * 45) {
                        line {
                            key: "{angle}",
                            x1: "0", y1: "0", x2: "0", y2: "-200",
                            stroke: "#3b82f6",
                            stroke_width: "2",
                            stroke_opacity: "0.1",
                            transform: "rotate({angle})",
                        }
                    }
                }
                path { class: "coverage-pulse", d: "M -30 -60 L -80 -220 A 100 100 0 0 1 80 -220 L 30 -60 Z", fill: "#ef4444", fill_opacity: "0.15" }
                path { class: "coverage-pulse", d: "M 0 -30 L -160 -180 L 160 -180 Z", fill: "#10b981", fill_opacity: "0.15" }
                path { d: "M -30 45 L -100 100 A 50 50 0 0 0 -50 110 L -30 45 Z", fill: "#ef4444", fill_opacity: "0.1" }
                path { d: "M 30 45 L 100 100 A 50 50 0 0 1 50 110 L 30 45 Z", fill: "#ef4444", fill_opacity: "0.1" }
                rect { x: "-30", y: "-52", width: "60", height: "105", rx: "12", fill: "#1e293b", stroke: "#334155", stroke_width: "3" }
                path { d: "M -26 -25 L -26 0 L 26 0 L 26 -25 Q 0 -35 -26 -25", fill: "#475569" }
                path { d: "M -28 -50 L -15 -50 L -15 -45 L -28 -42 Z", fill: "#fbbf24" }
                path { d: "M 28 -50 L 15 -50 L 15 -45 L 28 -42 Z", fill: "#fbbf24" }
                circle { cx: "0", cy: "0", r: "8", fill: "#3b82f6", stroke: "#fff", stroke_width: "2" }
            }
        }
    }
}
