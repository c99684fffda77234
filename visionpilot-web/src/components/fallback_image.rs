use dioxus::prelude::*;

/// An image that turns into its alt text when it fails to load.
#[component]
pub fn FallbackImage(
    #[props(into)] src: String,
    #[props(into)] alt: String,
    #[props(default, into)] class: String,
) -> Element {
    let failed = use_signal(|| false);
    image(&src, &alt, &class, failed)
}

fn image(src: &str, alt: &str, class: &str, mut failed: Signal<bool>) -> Element {
    if failed() {
        return rsx! {
            div { class: "{class} flex items-center justify-center bg-slate-100 text-sm text-slate-400",
                "{alt}"
            }
        };
    }

    rsx! {
        img {
            src: "{src}",
            alt: "{alt}",
            class: "{class}",
            onerror: move |_| {
                tracing::debug!("image failed to load, showing alt text");
                failed.set(true);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus::ssr::render(&dom)
    }

    #[test]
    fn test_loads_image_by_default() {
        fn app() -> Element {
            rsx! { FallbackImage { src: "/beamng_simulation.png", alt: "BeamNG Simulation" } }
        }
        let html = render(app);
        assert!(html.contains("<img"));
        assert!(html.contains("/beamng_simulation.png"));
    }

    #[test]
    fn test_failed_image_shows_alt_text() {
        fn app() -> Element {
            let failed = use_signal(|| true);
            image("/missing.png", "BeamNG Simulation", "w-full", failed)
        }
        let html = render(app);
        assert!(!html.contains("<img"));
        assert!(!html.contains("/missing.png"));
        assert!(html.contains("BeamNG Simulation"));
    }
}
