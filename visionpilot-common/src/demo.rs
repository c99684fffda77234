use std::collections::BTreeSet;

use crate::analytics::{AnalyticsEvent, AnalyticsReporter};

/// Which demo videos the visitor has started. Activation is one-way for the
/// lifetime of the page; a remount starts from scratch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoActivation {
    activated: BTreeSet<usize>,
}

impl DemoActivation {
    pub fn is_activated(&self, index: usize) -> bool {
        self.activated.contains(&index)
    }

    /// Reports the play click, then swaps the preview for the live player.
    /// Repeated calls report again but change nothing else.
    pub fn activate<R: AnalyticsReporter + ?Sized>(
        &mut self,
        index: usize,
        title: &str,
        reporter: &R,
    ) {
        reporter.report(&AnalyticsEvent::click("Demos", format!("Play Video: {title}")));
        if self.activated.insert(index) {
            tracing::debug!("activated demo {index} ({title})");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::RecordingReporter;

    #[test]
    fn test_activation_is_monotonic() {
        let reporter = RecordingReporter::default();
        let mut demos = DemoActivation::default();
        assert!(!demos.is_activated(0));

        demos.activate(0, "Autonomous Lane Keeping v2", &reporter);
        demos.activate(0, "Autonomous Lane Keeping v2", &reporter);

        assert!(demos.is_activated(0));
        assert!(!demos.is_activated(1));
        let events = reporter.events();
        assert!(!events.is_empty() && events.len() <= 2);
        assert_eq!(
            events[0],
            AnalyticsEvent::click("Demos", "Play Video: Autonomous Lane Keeping v2")
        );
    }
}
