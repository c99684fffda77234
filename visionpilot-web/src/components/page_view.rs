use dioxus::prelude::*;

use visionpilot_common::scroll::{self, ScrollEffect};
use visionpilot_common::transition::{PageTransition, Phase, TransitionEffect};
use visionpilot_common::{Page, Result};

use crate::browser;
use crate::pages::{About, Contact, Demos, Hero, Models, Roadmap, Technical};
use crate::Route;

/// Mounts the page for the current route. A route change plays the old
/// page's exit animation to completion before the next page is mounted.
#[component]
pub fn PageView() -> Element {
    let route = use_route::<Route>();
    let mut transition = use_signal(|| PageTransition::new(route.page()));

    use_hook(|| {
        if let Err(err) = browser::scroll_to(scroll::on_route_changed(&route.to_string())) {
            tracing::warn!("initial scroll reset failed: {err}");
        }
    });

    use_effect(use_reactive((&route,), move |(route,)| {
        let page = route.page();
        if page.is_none() {
            tracing::debug!("no page at {route}");
        }
        let effect = transition.write().navigate(page);
        apply(effect, browser::scroll_to);
    }));

    let (mounted, phase) = {
        let state = transition.read();
        (state.mounted(), state.phase())
    };
    let Some(page) = mounted else {
        return rsx! {};
    };

    rsx! {
        div {
            key: "{page.path()}",
            class: phase_class(phase),
            "aria-hidden": !phase.is_interactive(),
            "inert": inert(phase),
            onanimationend: move |evt: AnimationEvent| {
                finish_animation(
                    &mut transition.write(),
                    &evt.data().animation_name(),
                    browser::scroll_to,
                );
            },
            {render(page)}
        }
    }
}

/// Feeds a bubbled `animationend` to the transition and applies the result.
/// Animations from inside the page carry other names and change nothing.
fn finish_animation(
    transition: &mut PageTransition,
    name: &str,
    scroll: impl FnOnce(ScrollEffect) -> Result<()>,
) -> TransitionEffect {
    let effect = transition.on_animation_end(name);
    apply(effect, scroll);
    effect
}

fn apply(effect: TransitionEffect, scroll_to: impl FnOnce(ScrollEffect) -> Result<()>) {
    match effect {
        TransitionEffect::Mounted { page, scroll } => {
            tracing::debug!("mounting {page}");
            if let Err(err) = scroll_to(scroll) {
                tracing::warn!("scroll reset failed: {err}");
            }
        }
        TransitionEffect::Cleared => tracing::debug!("page container cleared"),
        TransitionEffect::ExitStarted => tracing::debug!("page exit started"),
        TransitionEffect::Settled | TransitionEffect::None => {}
    }
}

/// Keeps keyboard focus out of a page that is on its way out.
fn inert(phase: Phase) -> Option<&'static str> {
    (!phase.is_interactive()).then_some("")
}

fn phase_class(phase: Phase) -> &'static str {
    match phase {
        Phase::Entering => "page-view page-entering",
        Phase::Exiting => "page-view page-exiting pointer-events-none",
        Phase::Steady | Phase::Unmounted => "page-view",
    }
}

fn render(page: Page) -> Element {
    match page {
        Page::Hero => rsx! { Hero {} },
        Page::Technical => rsx! { Technical {} },
        Page::Demos => rsx! { Demos {} },
        Page::Models => rsx! { Models {} },
        Page::Roadmap => rsx! { Roadmap {} },
        Page::About => rsx! { About {} },
        Page::Contact => rsx! { Contact {} },
    }
}
