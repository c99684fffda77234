use dioxus::prelude::*;
use js_sys::{Function, Object, Reflect};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};

use visionpilot_common::analytics::{AnalyticsEvent, AnalyticsReporter, LogReporter};
use visionpilot_common::{Result, SiteConfig, SiteError};

use crate::browser::{js_error, window};

const GTAG_SRC: &str = "https://www.googletagmanager.com/gtag/js";

/// Sends events to Google Analytics through the global `gtag` function.
#[derive(Clone, Debug)]
pub struct GtagReporter {
    measurement_id: String,
}

impl GtagReporter {
    /// Loads the gtag script and defines the `gtag` queue so events sent
    /// before the script arrives are buffered.
    pub fn install(measurement_id: &str) -> Result<Self> {
        let document = window()?
            .document()
            .ok_or_else(|| SiteError::Browser("no document".to_string()))?;
        let head = document.head().ok_or_else(|| SiteError::Browser("no <head>".to_string()))?;

        let script = document
            .create_element("script")
            .map_err(js_error)?
            .dyn_into::<web_sys::HtmlScriptElement>()
            .map_err(|_| SiteError::Browser("created element is not a script".to_string()))?;
        script.set_async(true);
        script.set_src(&format!("{GTAG_SRC}?id={measurement_id}"));
        head.append_child(&script).map_err(js_error)?;

        Function::new_no_args(
            "window.dataLayer = window.dataLayer || [];\
             window.gtag = function () { window.dataLayer.push(arguments); };\
             window.gtag('js', new Date());",
        )
        .call0(&JsValue::NULL)
        .map_err(js_error)?;

        let reporter = Self {
            measurement_id: measurement_id.to_string(),
        };
        reporter
            .gtag()?
            .call2(
                &JsValue::NULL,
                &JsValue::from_str("config"),
                &JsValue::from_str(&reporter.measurement_id),
            )
            .map_err(js_error)?;
        tracing::info!("analytics enabled for {}", reporter.measurement_id);
        Ok(reporter)
    }

    fn gtag(&self) -> Result<Function> {
        Reflect::get(&JsValue::from(window()?), &JsValue::from_str("gtag"))
            .map_err(js_error)?
            .dyn_into::<Function>()
            .map_err(|_| SiteError::Browser("gtag is not defined".to_string()))
    }

    fn send(&self, event: &AnalyticsEvent) -> Result<()> {
        let params = Object::new();
        Reflect::set(
            &params,
            &JsValue::from_str("event_category"),
            &JsValue::from_str(&event.category),
        )
        .map_err(js_error)?;
        Reflect::set(
            &params,
            &JsValue::from_str("event_label"),
            &JsValue::from_str(&event.label),
        )
        .map_err(js_error)?;
        self.gtag()?
            .call3(
                &JsValue::NULL,
                &JsValue::from_str("event"),
                &JsValue::from_str(&event.action),
                &params,
            )
            .map_err(js_error)?;
        Ok(())
    }
}

impl AnalyticsReporter for GtagReporter {
    fn report(&self, event: &AnalyticsEvent) {
        LogReporter.report(event);
        if let Err(err) = self.send(event) {
            tracing::warn!("analytics event dropped: {err}");
        }
    }
}

/// Reporter shared through the component tree.
#[derive(Clone)]
pub struct Analytics(Rc<dyn AnalyticsReporter>);

impl Analytics {
    pub fn new(reporter: Rc<dyn AnalyticsReporter>) -> Self {
        Self(reporter)
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        match config.analytics_id.as_deref().map(GtagReporter::install) {
            Some(Ok(reporter)) => Self::new(Rc::new(reporter)),
            Some(Err(err)) => {
                tracing::warn!("analytics unavailable, logging events only: {err}");
                Self::new(Rc::new(LogReporter))
            }
            None => Self::new(Rc::new(LogReporter)),
        }
    }

    pub fn reporter(&self) -> &dyn AnalyticsReporter {
        self.0.as_ref()
    }

    pub fn click(&self, category: &str, label: &str) {
        self.0.report(&AnalyticsEvent::click(category, label));
    }

    pub fn page_view(&self, label: &str) {
        self.0.report(&AnalyticsEvent::page_view(label));
    }
}

pub fn use_analytics() -> Analytics {
    use_context::<Analytics>()
}
