use visionpilot_common::accordion::Accordion;
use visionpilot_common::analytics::RecordingReporter;
use visionpilot_common::demo::DemoActivation;
use visionpilot_common::nav::NavShell;
use visionpilot_common::transition::{
    PageTransition, Phase, TransitionEffect, ENTER_ANIMATION, EXIT_ANIMATION,
};
use visionpilot_common::Page;

/// Minimal stand-in for the browser: owns the scroll offset and the local
/// state of whichever page is mounted.
struct Host {
    shell: NavShell,
    transition: PageTransition,
    scroll_y: f64,
    faq: Option<Accordion>,
    demos: Option<DemoActivation>,
}

impl Host {
    fn open(path: &str) -> Self {
        let page = Page::resolve(path);
        let mut host = Self {
            shell: NavShell::default(),
            transition: PageTransition::new(page),
            scroll_y: 0.0,
            faq: None,
            demos: None,
        };
        if let Some(page) = page {
            host.mount(page);
        }
        host.finish(ENTER_ANIMATION);
        host
    }

    fn mount(&mut self, page: Page) {
        self.faq = (page == Page::About).then(Accordion::default);
        self.demos = (page == Page::Demos).then(DemoActivation::default);
    }

    fn apply(&mut self, effect: TransitionEffect) {
        match effect {
            TransitionEffect::Mounted { page, scroll } => {
                self.scroll_y = scroll.top;
                self.mount(page);
            }
            TransitionEffect::Cleared => {
                self.faq = None;
                self.demos = None;
            }
            TransitionEffect::None | TransitionEffect::ExitStarted | TransitionEffect::Settled => {}
        }
    }

    fn finish(&mut self, animation: &str) {
        let effect = self.transition.on_animation_end(animation);
        self.apply(effect);
    }

    fn click(&mut self, path: &str) {
        self.shell.on_navigate(path);
        let effect = self.transition.navigate(Page::resolve(path));
        self.apply(effect);
        self.finish(EXIT_ANIMATION);
        self.finish(ENTER_ANIMATION);
    }
}

#[test]
fn round_trip_remounts_in_default_state() {
    let mut host = Host::open("/about");
    host.faq.as_mut().unwrap().toggle(2);
    assert!(host.faq.unwrap().is_open(2));

    host.click("/demos");
    assert!(host.faq.is_none());
    host.click("/about");

    assert_eq!(host.transition.mounted(), Some(Page::About));
    assert_eq!(host.faq.unwrap().open_index(), None);
}

#[test]
fn demo_activation_does_not_survive_remount() {
    let reporter = RecordingReporter::default();
    let mut host = Host::open("/demos");
    host.demos
        .as_mut()
        .unwrap()
        .activate(1, "Foxglove LiDAR Visualization", &reporter);
    host.click("/models");
    host.click("/demos");
    assert!(!host.demos.as_ref().unwrap().is_activated(1));
    assert_eq!(reporter.events().len(), 1);
}

#[test]
fn scroll_is_zero_after_every_route_change() {
    let mut host = Host::open("/");
    for page in Page::ALL.into_iter().skip(1).chain([Page::Hero]) {
        host.scroll_y = 5000.0;
        host.click(page.path());
        assert_eq!(host.scroll_y, 0.0, "after navigating to {page}");
        assert_eq!(host.transition.phase(), Phase::Steady);
    }
}

#[test]
fn navigation_closes_mobile_menu() {
    let mut host = Host::open("/");
    host.shell.toggle_mobile_menu();
    host.click("/roadmap");
    assert!(!host.shell.is_mobile_menu_open());
    let active: Vec<_> = NavShell::links("/roadmap")
        .filter(|(_, active)| *active)
        .map(|(link, _)| link.path)
        .collect();
    assert_eq!(active, vec!["/roadmap"]);
}

#[test]
fn unmatched_path_renders_nothing() {
    let mut host = Host::open("/technical");
    host.click("/does-not-exist");
    assert_eq!(host.transition.mounted(), None);
    assert_eq!(host.transition.phase(), Phase::Unmounted);

    let empty = Host::open("/nowhere");
    assert_eq!(empty.transition.mounted(), None);
}
