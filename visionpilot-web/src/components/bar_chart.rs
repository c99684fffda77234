use dioxus::prelude::*;

use visionpilot_common::chart::{bar_widths, ChartDatum};

/// Horizontal bars with a tooltip on hover. Read-only.
#[component]
pub fn BarChart(data: Vec<ChartDatum>) -> Element {
    let mut hovered = use_signal(|| None::<usize>);
    let widths = bar_widths(&data);

    rsx! {
        div { class: "space-y-3",
            for (idx, (datum, width)) in data.into_iter().zip(widths).enumerate() {
                div {
                    key: "{datum.name}",
                    class: "relative flex items-center gap-3",
                    onmouseenter: move |_| hovered.set(Some(idx)),
                    onmouseleave: move |_| hovered.set(None),
                    span { class: "w-20 shrink-0 text-right text-xs text-slate-500", "{datum.name}" }
                    div { class: "flex-1 h-5 rounded-r bg-slate-50",
                        div {
                            class: "h-5 rounded-r transition-all duration-300",
                            style: "width: {width:.1}%; background-color: {datum.color};",
                        }
                    }
                    if *hovered.read() == Some(idx) {
                        div { class: "absolute left-24 -top-8 z-10 rounded-lg border border-slate-200 bg-white px-3 py-1 text-xs text-slate-900 shadow-md",
                            "{datum.name}: {datum.value}"
                        }
                    }
                }
            }
        }
    }
}
