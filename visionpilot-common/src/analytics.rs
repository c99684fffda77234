//! One-way analytics events.
//!
//! Reporters are fire-and-forget: `report` returns nothing and must never
//! panic or block. Implementations that talk to a real tracker swallow and
//! log their own failures.

use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub action: String,
    pub category: String,
    pub label: String,
}

impl AnalyticsEvent {
    pub fn new(
        action: impl Into<String>,
        category: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            category: category.into(),
            label: label.into(),
        }
    }

    pub fn click(category: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new("click", category, label)
    }

    pub fn page_view(label: impl Into<String>) -> Self {
        Self::new("view", "Page", label)
    }
}

pub trait AnalyticsReporter {
    fn report(&self, event: &AnalyticsEvent);
}

impl<T: AnalyticsReporter + ?Sized> AnalyticsReporter for Rc<T> {
    fn report(&self, event: &AnalyticsEvent) {
        (**self).report(event)
    }
}

/// Writes events to the log and nowhere else. Used when no tracker is
/// configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl AnalyticsReporter for LogReporter {
    fn report(&self, event: &AnalyticsEvent) {
        match serde_json::to_string(event) {
            Ok(json) => tracing::debug!("analytics event {json}"),
            Err(err) => tracing::warn!("unserializable analytics event: {err}"),
        }
    }
}

/// Keeps every event in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingReporter {
    events: Rc<RefCell<Vec<AnalyticsEvent>>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.borrow().clone()
    }
}

impl AnalyticsReporter for RecordingReporter {
    fn report(&self, event: &AnalyticsEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_constructors() {
        assert_eq!(
            AnalyticsEvent::click("Footer", "GitHub"),
            AnalyticsEvent::new("click", "Footer", "GitHub")
        );
        let view = AnalyticsEvent::page_view("Demos");
        assert_eq!(view.action, "view");
        assert_eq!(view.category, "Page");
        assert_eq!(view.label, "Demos");
    }

    #[test]
    fn test_recording_reporter_shares_events_between_clones() {
        let recorder = RecordingReporter::default();
        let shared: Rc<dyn AnalyticsReporter> = Rc::new(recorder.clone());
        shared.report(&AnalyticsEvent::click("About", "View Journal on Google Drive"));
        LogReporter.report(&AnalyticsEvent::click("About", "ignored"));
        assert_eq!(recorder.events().len(), 1);
        assert_eq!(recorder.events()[0].category, "About");
    }
}
