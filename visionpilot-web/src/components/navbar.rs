use dioxus::prelude::*;

use visionpilot_common::nav::{NavLink, NavShell, CONTACT_LINK};
use visionpilot_common::SiteConfig;

use crate::browser::use_window_scroll;
use crate::Route;

#[component]
pub fn Navbar() -> Element {
    let config = use_context::<SiteConfig>();
    let route = use_route::<Route>();
    let current_path = route.to_string();
    let mut shell = use_signal(|| NavShell::new(config.scroll_threshold));

    use_window_scroll(move |offset| {
        // Only write when the flag flips.
        let mut next = *shell.peek();
        next.on_scroll(offset);
        if next != *shell.peek() {
            shell.set(next);
        }
    });

    let state = *shell.read();
    let frame = if state.is_scrolled() {
        "bg-white/50 backdrop-blur-2xl border-slate-200/50 shadow-lg"
    } else {
        "bg-transparent border-transparent shadow-none"
    };
    let links: Vec<(NavLink, bool)> = NavShell::links(&current_path)
        .filter(|(link, _)| *link != CONTACT_LINK)
        .collect();
    let mobile_links = links.clone();

    rsx! {
        nav {
            class: "fixed z-50 transition-all duration-500 mx-auto left-0 right-0 top-4 w-[calc(100%-2rem)] max-w-7xl rounded-2xl border {frame}",
            div { class: "mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex items-center justify-between h-16",
                    Link {
                        to: Route::Hero {},
                        class: "flex items-center space-x-2 group",
                        onclick: move |_| shell.write().on_navigate("/"),
                        img {
                            src: config.asset("logo_visionpilotnobg.png"),
                            alt: "VisionPilot Logo",
                            class: "h-8 w-auto",
                        }
                        span { class: "text-xl font-display font-bold text-brand-dark group-hover:text-brand-accent transition-all duration-300",
                            "VisionPilot"
                        }
                    }

                    // Desktop
                    div { class: "hidden md:block",
                        div { class: "ml-10 flex items-baseline space-x-4",
                            for (link, active) in links {
                                Link {
                                    key: "{link.path}",
                                    to: link.path,
                                    class: desktop_link_class(active),
                                    onclick: move |_| shell.write().on_navigate(link.path),
                                    "{link.label}"
                                }
                            }
                            Link {
                                to: CONTACT_LINK.path,
                                class: "ml-4 px-4 py-2 rounded-full bg-brand-dark text-white text-sm font-bold hover:bg-brand-accent transition-colors shadow-md hover:shadow-lg",
                                onclick: move |_| shell.write().on_navigate(CONTACT_LINK.path),
                                "{CONTACT_LINK.label}"
                            }
                        }
                    }

                    // Mobile menu button
                    div { class: "md:hidden",
                        button {
                            class: "p-2 rounded-md text-slate-600 hover:text-brand-dark hover:bg-slate-100 focus:outline-none",
                            "aria-label": "Toggle menu",
                            "aria-expanded": state.is_mobile_menu_open(),
                            onclick: move |_| shell.write().toggle_mobile_menu(),
                            if state.is_mobile_menu_open() { "✕" } else { "☰" }
                        }
                    }
                }
            }

            if state.is_mobile_menu_open() {
                div { class: "mobile-menu md:hidden bg-white/60 backdrop-blur-2xl border-b border-slate-200/50 rounded-b-2xl",
                    div { class: "px-2 pt-2 pb-3 space-y-1 sm:px-3",
                        for (link, active) in mobile_links {
                            Link {
                                key: "{link.path}",
                                to: link.path,
                                class: mobile_link_class(active),
                                onclick: move |_| shell.write().on_navigate(link.path),
                                "{link.label}"
                            }
                        }
                        Link {
                            to: CONTACT_LINK.path,
                            class: "block w-full text-center mt-4 px-5 py-3 rounded-md font-bold bg-brand-dark text-white hover:bg-brand-accent transition-colors",
                            onclick: move |_| shell.write().on_navigate(CONTACT_LINK.path),
                            "Get in Touch"
                        }
                    }
                }
            }
        }
    }
}

fn desktop_link_class(active: bool) -> &'static str {
    if active {
        "px-3 py-2 rounded-md text-sm font-semibold transition-all duration-200 text-brand-accent bg-brand-accent/10"
    } else {
        "px-3 py-2 rounded-md text-sm font-medium transition-all duration-200 text-slate-600 hover:text-brand-dark hover:bg-slate-100"
    }
}

fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "block px-3 py-2 rounded-md text-base font-medium text-brand-accent bg-brand-accent/10"
    } else {
        "block px-3 py-2 rounded-md text-base font-medium text-slate-600 hover:text-brand-dark hover:bg-slate-50"
    }
}
