use dioxus::prelude::*;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use visionpilot_common::scroll::ScrollEffect;
use visionpilot_common::{Result, SiteError};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| SiteError::Browser("no global window".to_string()))
}

pub fn js_error(err: JsValue) -> SiteError {
    SiteError::Browser(format!("{err:?}"))
}

pub fn scroll_to(effect: ScrollEffect) -> Result<()> {
    window()?.scroll_to_with_x_and_y(effect.left, effect.top);
    Ok(())
}

/// Smoothly scrolls down by one viewport height.
pub fn scroll_past_viewport() -> Result<()> {
    let window = window()?;
    let (_, height) = viewport_size(&window)?;
    let options = ScrollToOptions::new();
    options.set_top(height);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn viewport_size(window: &Window) -> Result<(f64, f64)> {
    let width = window.inner_width().map_err(js_error)?.as_f64();
    let height = window.inner_height().map_err(js_error)?.as_f64();
    viewport_from(width, height)
}

fn viewport_from(width: Option<f64>, height: Option<f64>) -> Result<(f64, f64)> {
    match (width, height) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(SiteError::Browser(
            "viewport size is not a number".to_string(),
        )),
    }
}

/// A `scroll` listener on the window, removed again by [`ScrollListener::detach`].
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> Result<Self> {
        let window = window()?;
        on_scroll(window.scroll_y().map_err(js_error)?);

        let source = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Ok(offset) = source.scroll_y() {
                on_scroll(offset);
            }
        });
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(js_error)?;
        Ok(Self { window, callback })
    }

    pub fn detach(&self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            tracing::warn!("failed to remove scroll listener: {err:?}");
        }
    }
}

/// Calls `on_scroll` with the window's vertical offset on mount and on every
/// scroll event until the calling component unmounts.
pub fn use_window_scroll(on_scroll: impl FnMut(f64) + 'static) {
    let listener = use_hook(move || match ScrollListener::attach(on_scroll) {
        Ok(listener) => Some(Rc::new(listener)),
        Err(err) => {
            tracing::warn!("scroll tracking disabled: {err}");
            None
        }
    });
    use_drop(move || {
        if let Some(listener) = listener {
            listener.detach();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_size_must_be_numeric() {
        assert_eq!(viewport_from(Some(1280.0), Some(720.0)), Ok((1280.0, 720.0)));
        assert!(matches!(
            viewport_from(None, Some(720.0)),
            Err(SiteError::Browser(_))
        ));
        assert!(matches!(
            viewport_from(Some(1280.0), None),
            Err(SiteError::Browser(_))
        ));
    }
}
