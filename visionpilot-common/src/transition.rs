//! Route-keyed page transitions.
//!
//! [`PageTransition`] decides which page is mounted and which animation it
//! is playing. The host plays the animations and reports their completion
//! through [`PageTransition::on_animation_end`]; nothing here uses timers.
//! Exactly one page is ever mounted, so two pages are never interactive at
//! the same time.

use crate::route::Page;
use crate::scroll::{self, ScrollEffect};

pub const ENTER_ANIMATION: &str = "page-enter";
pub const EXIT_ANIMATION: &str = "page-exit";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Steady,
    Exiting,
    Unmounted,
}

impl Phase {
    /// Name of the animation whose end moves this phase forward.
    pub fn animation(self) -> Option<&'static str> {
        match self {
            Phase::Entering => Some(ENTER_ANIMATION),
            Phase::Exiting => Some(EXIT_ANIMATION),
            Phase::Steady | Phase::Unmounted => None,
        }
    }

    /// Pages accept input unless they are on their way out.
    pub fn is_interactive(self) -> bool {
        matches!(self, Phase::Entering | Phase::Steady)
    }
}

/// What the host has to do after a transition step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionEffect {
    None,
    /// The mounted page started its exit animation.
    ExitStarted,
    /// A new page was mounted; apply the scroll reset before it animates in.
    Mounted { page: Page, scroll: ScrollEffect },
    /// The old page left and the target path matches no page.
    Cleared,
    /// The enter animation finished.
    Settled,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageTransition {
    mounted: Option<Page>,
    phase: Phase,
    // Resolved target of the latest navigation. Outer `None` means nothing
    // is queued; `Some(None)` queues an unmatched path.
    queued: Option<Option<Page>>,
}

impl PageTransition {
    pub fn new(initial: Option<Page>) -> Self {
        let phase = if initial.is_some() {
            Phase::Entering
        } else {
            Phase::Unmounted
        };
        Self {
            mounted: initial,
            phase,
            queued: None,
        }
    }

    pub fn mounted(&self) -> Option<Page> {
        self.mounted
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Page the container is heading to, mounted or not.
    pub fn target(&self) -> Option<Page> {
        self.queued.unwrap_or(self.mounted)
    }

    pub fn navigate(&mut self, target: Option<Page>) -> TransitionEffect {
        if target == self.target() {
            return TransitionEffect::None;
        }
        match self.phase {
            Phase::Unmounted => self.mount(target),
            Phase::Entering | Phase::Steady => {
                tracing::debug!("exiting {:?} towards {:?}", self.mounted, target);
                self.phase = Phase::Exiting;
                self.queued = Some(target);
                TransitionEffect::ExitStarted
            }
            Phase::Exiting if target == self.mounted => {
                // Back to the page that is leaving: keep it.
                self.queued = None;
                self.phase = Phase::Steady;
                TransitionEffect::Settled
            }
            Phase::Exiting => {
                self.queued = Some(target);
                TransitionEffect::None
            }
        }
    }

    /// Feeds an animation-end notification. Animations other than the one
    /// the current phase waits for (for instance ones bubbling up from
    /// inside the page) are ignored.
    pub fn on_animation_end(&mut self, animation: &str) -> TransitionEffect {
        if self.phase.animation() != Some(animation) {
            return TransitionEffect::None;
        }
        match self.phase {
            Phase::Entering => {
                self.phase = Phase::Steady;
                TransitionEffect::Settled
            }
            Phase::Exiting => {
                let target = self.queued.take().flatten();
                self.mounted = None;
                self.phase = Phase::Unmounted;
                self.mount(target)
            }
            Phase::Steady | Phase::Unmounted => TransitionEffect::None,
        }
    }

    fn mount(&mut self, target: Option<Page>) -> TransitionEffect {
        match target {
            Some(page) => {
                self.mounted = Some(page);
                self.phase = Phase::Entering;
                TransitionEffect::Mounted {
                    page,
                    scroll: scroll::on_route_changed(page.path()),
                }
            }
            None => TransitionEffect::Cleared,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(page: Page) -> PageTransition {
        let mut transition = PageTransition::new(Some(page));
        assert_eq!(
            transition.on_animation_end(ENTER_ANIMATION),
            TransitionEffect::Settled
        );
        transition
    }

    #[test]
    fn test_initial_state() {
        let transition = PageTransition::new(Some(Page::Hero));
        assert_eq!(transition.phase(), Phase::Entering);
        assert_eq!(transition.mounted(), Some(Page::Hero));

        let empty = PageTransition::new(None);
        assert_eq!(empty.phase(), Phase::Unmounted);
        assert_eq!(empty.mounted(), None);
    }

    #[test]
    fn test_same_path_is_noop() {
        let mut transition = settled(Page::Demos);
        assert_eq!(transition.navigate(Some(Page::Demos)), TransitionEffect::None);
        assert_eq!(transition.phase(), Phase::Steady);
    }

    #[test]
    fn test_exit_then_enter() {
        let mut transition = settled(Page::Hero);
        assert_eq!(
            transition.navigate(Some(Page::About)),
            TransitionEffect::ExitStarted
        );
        assert_eq!(transition.phase(), Phase::Exiting);
        // The old page stays mounted until its exit finishes.
        assert_eq!(transition.mounted(), Some(Page::Hero));
        assert!(!transition.phase().is_interactive());

        assert_eq!(
            transition.on_animation_end(EXIT_ANIMATION),
            TransitionEffect::Mounted {
                page: Page::About,
                scroll: ScrollEffect::TOP
            }
        );
        assert_eq!(transition.mounted(), Some(Page::About));
        assert_eq!(transition.phase(), Phase::Entering);
        assert_eq!(
            transition.on_animation_end(ENTER_ANIMATION),
            TransitionEffect::Settled
        );
        assert_eq!(transition.phase(), Phase::Steady);
    }

    #[test]
    fn test_foreign_animations_are_ignored() {
        let mut transition = settled(Page::Hero);
        transition.navigate(Some(Page::Models));
        assert_eq!(transition.on_animation_end("fade-in-card"), TransitionEffect::None);
        assert_eq!(transition.on_animation_end(ENTER_ANIMATION), TransitionEffect::None);
        assert_eq!(transition.phase(), Phase::Exiting);
        assert_eq!(
            transition.on_animation_end(EXIT_ANIMATION),
            TransitionEffect::Mounted {
                page: Page::Models,
                scroll: ScrollEffect::TOP
            }
        );
    }

    #[test]
    fn test_latest_navigation_wins_during_exit() {
        let mut transition = settled(Page::Hero);
        transition.navigate(Some(Page::Demos));
        assert_eq!(transition.navigate(Some(Page::Roadmap)), TransitionEffect::None);
        assert_eq!(transition.target(), Some(Page::Roadmap));
        match transition.on_animation_end(EXIT_ANIMATION) {
            TransitionEffect::Mounted { page, .. } => assert_eq!(page, Page::Roadmap),
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn test_returning_during_exit_keeps_page() {
        let mut transition = settled(Page::Hero);
        transition.navigate(Some(Page::Demos));
        assert_eq!(transition.navigate(Some(Page::Hero)), TransitionEffect::Settled);
        assert_eq!(transition.phase(), Phase::Steady);
        assert_eq!(transition.on_animation_end(EXIT_ANIMATION), TransitionEffect::None);
        assert_eq!(transition.mounted(), Some(Page::Hero));
    }

    #[test]
    fn test_navigation_interrupts_enter() {
        let mut transition = PageTransition::new(Some(Page::Hero));
        assert_eq!(
            transition.navigate(Some(Page::Contact)),
            TransitionEffect::ExitStarted
        );
        assert_eq!(transition.phase(), Phase::Exiting);
    }

    #[test]
    fn test_unmatched_path_clears_and_recovers() {
        let mut transition = settled(Page::Technical);
        assert_eq!(transition.navigate(None), TransitionEffect::ExitStarted);
        assert_eq!(transition.on_animation_end(EXIT_ANIMATION), TransitionEffect::Cleared);
        assert_eq!(transition.phase(), Phase::Unmounted);
        assert_eq!(transition.mounted(), None);
        assert_eq!(transition.navigate(None), TransitionEffect::None);

        match transition.navigate(Some(Page::Technical)) {
            TransitionEffect::Mounted { page, scroll } => {
                assert_eq!(page, Page::Technical);
                assert_eq!(scroll.top, 0.0);
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }
}
