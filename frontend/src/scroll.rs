//! Scroll restoration on navigation.
//!
//! A plain navigation jumps to the top of the page immediately. A navigation
//! carrying a fragment (`/#approach`) waits for the settle delay and then
//! smooth-scrolls the matching element into view, because the section may
//! not be mounted yet when the location changes. Only the latest location
//! may ever scroll: every change cancels whatever is still pending.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLocation {
    pub path: String,
    /// Raw fragment as reported by the router, including the leading `#`.
    pub fragment: Option<String>,
}

impl RouteLocation {
    /// Builds a location from the router's path and hash. An empty hash, or
    /// one that is only the `#` marker, counts as no fragment.
    pub fn from_parts(path: &str, hash: &str) -> Self {
        let fragment = match hash.strip_prefix('#').unwrap_or(hash) {
            "" => None,
            _ => Some(hash.to_owned()),
        };
        Self {
            path: path.to_owned(),
            fragment,
        }
    }

    /// Element id the fragment points at, with the `#` marker stripped.
    pub fn anchor_id(&self) -> Option<&str> {
        self.fragment
            .as_deref()
            .map(|fragment| fragment.strip_prefix('#').unwrap_or(fragment))
    }
}

/// What the controller did in response to a location change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollAction {
    ResetToOrigin,
    Deferred { target: String, delay_ms: u32 },
}

pub trait Viewport {
    fn scroll_to_origin(&self);

    /// Smooth-scrolls the element with `id` into view. Returns `false` when no
    /// such element is mounted.
    fn scroll_into_view(&self, id: &str) -> bool;
}

/// One-shot deferred execution. Dropping the returned handle cancels the task
/// if it has not run yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct ScrollController<S: Scheduler, V> {
    scheduler: S,
    viewport: Rc<V>,
    settle_delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler, V: Viewport + 'static> ScrollController<S, V> {
    pub fn new(scheduler: S, viewport: V, settle_delay_ms: u32) -> Self {
        Self {
            scheduler,
            viewport: Rc::new(viewport),
            settle_delay_ms,
            pending: None,
        }
    }

    #[cfg(test)]
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn on_location_change(&mut self, location: &RouteLocation) -> ScrollAction {
        self.cancel_pending();

        let Some(target) = location.anchor_id() else {
            self.viewport.scroll_to_origin();
            return ScrollAction::ResetToOrigin;
        };

        let target = target.to_owned();
        let viewport = Rc::clone(&self.viewport);
        let task_target = target.clone();
        let handle = self.scheduler.schedule(
            self.settle_delay_ms,
            Box::new(move || {
                if !viewport.scroll_into_view(&task_target) {
                    debug!("No element with id '{}' to scroll to", task_target);
                }
            }),
        );
        self.pending = Some(handle);
        debug!(
            "Scroll to '{}' scheduled in {}ms for {}",
            target, self.settle_delay_ms, location.path
        );

        ScrollAction::Deferred {
            target,
            delay_ms: self.settle_delay_ms,
        }
    }

    pub fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            debug!("Pending scroll cancelled");
        }
    }
}

pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_to_origin(&self) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id));

        match element {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}

/// Mounted once inside the router. Renders nothing.
#[function_component(ScrollRestoration)]
pub fn scroll_restoration() -> Html {
    let location = use_location();
    let controller = use_mut_ref(|| {
        ScrollController::new(TimeoutScheduler, BrowserViewport, config::settle_delay_ms())
    });

    let deps = location
        .map(|location| (location.path().to_owned(), location.hash().to_owned()))
        .unwrap_or_default();

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |(path, hash)| {
                let location = RouteLocation::from_parts(path, hash);
                controller.borrow_mut().on_location_change(&location);
                move || controller.borrow_mut().cancel_pending()
            },
            deps,
        );
    }

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};

    struct Scheduled {
        due: u32,
        delay_ms: u32,
        cancelled: Rc<Cell<bool>>,
        task: Option<Box<dyn FnOnce()>>,
    }

    /// Scheduler driven by hand: nothing runs until `advance` is called.
    #[derive(Clone, Default)]
    struct ManualClock {
        now: Rc<Cell<u32>>,
        tasks: Rc<RefCell<Vec<Scheduled>>>,
    }

    struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl Scheduler for ManualClock {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.tasks.borrow_mut().push(Scheduled {
                due: self.now.get() + delay_ms,
                delay_ms,
                cancelled: cancelled.clone(),
                task: Some(task),
            });
            ManualHandle(cancelled)
        }
    }

    impl ManualClock {
        fn advance(&self, ms: u32) {
            let now = self.now.get() + ms;
            self.now.set(now);
            let due: Vec<Box<dyn FnOnce()>> = self
                .tasks
                .borrow_mut()
                .iter_mut()
                .filter(|scheduled| scheduled.due <= now && !scheduled.cancelled.get())
                .filter_map(|scheduled| scheduled.task.take())
                .collect();
            for task in due {
                task();
            }
        }

        fn scheduled_count(&self) -> usize {
            self.tasks.borrow().len()
        }

        fn live_count(&self) -> usize {
            self.tasks
                .borrow()
                .iter()
                .filter(|scheduled| scheduled.task.is_some() && !scheduled.cancelled.get())
                .count()
        }

        fn last_delay(&self) -> Option<u32> {
            self.tasks.borrow().last().map(|scheduled| scheduled.delay_ms)
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Scrolled {
        Origin,
        IntoView(String),
    }

    #[derive(Default)]
    struct RecordingViewport {
        mounted: RefCell<Vec<String>>,
        log: RefCell<Vec<Scrolled>>,
    }

    impl RecordingViewport {
        fn with_elements(ids: &[&str]) -> Self {
            Self {
                mounted: RefCell::new(ids.iter().map(|id| id.to_string()).collect()),
                log: RefCell::default(),
            }
        }

        fn mount(&self, id: &str) {
            self.mounted.borrow_mut().push(id.to_string());
        }

        fn log(&self) -> Vec<Scrolled> {
            self.log.borrow().clone()
        }
    }

    impl Viewport for RecordingViewport {
        fn scroll_to_origin(&self) {
            self.log.borrow_mut().push(Scrolled::Origin);
        }

        fn scroll_into_view(&self, id: &str) -> bool {
            if self.mounted.borrow().iter().any(|mounted| mounted == id) {
                self.log.borrow_mut().push(Scrolled::IntoView(id.to_string()));
                true
            } else {
                false
            }
        }
    }

    fn controller(
        viewport: RecordingViewport,
    ) -> (ScrollController<ManualClock, RecordingViewport>, ManualClock) {
        let clock = ManualClock::default();
        let controller = ScrollController::new(clock.clone(), viewport, config::SETTLE_DELAY_MS);
        (controller, clock)
    }

    #[test]
    fn location_strips_anchor_marker() {
        let location = RouteLocation::from_parts("/", "#approach");
        assert_eq!(location.fragment.as_deref(), Some("#approach"));
        assert_eq!(location.anchor_id(), Some("approach"));
    }

    #[test]
    fn empty_or_bare_hash_is_no_fragment() {
        assert_eq!(RouteLocation::from_parts("/", "").fragment, None);
        assert_eq!(RouteLocation::from_parts("/", "#").fragment, None);
    }

    #[test]
    fn hash_without_marker_is_used_as_is() {
        let location = RouteLocation::from_parts("/how-it-works", "steps");
        assert_eq!(location.anchor_id(), Some("steps"));
    }

    #[test]
    fn plain_navigation_resets_immediately_without_timer() {
        let (mut controller, clock) = controller(RecordingViewport::default());

        let action = controller.on_location_change(&RouteLocation::from_parts("/therapists", ""));

        assert_eq!(action, ScrollAction::ResetToOrigin);
        assert_eq!(controller.viewport().log(), vec![Scrolled::Origin]);
        assert_eq!(clock.scheduled_count(), 0);
    }

    #[test]
    fn fragment_schedules_one_smooth_scroll_after_settle_delay() {
        let (mut controller, clock) = controller(RecordingViewport::with_elements(&["approach"]));

        let action = controller.on_location_change(&RouteLocation::from_parts("/", "#approach"));

        assert_eq!(
            action,
            ScrollAction::Deferred {
                target: "approach".to_string(),
                delay_ms: 100,
            }
        );
        assert_eq!(clock.scheduled_count(), 1);
        assert_eq!(clock.last_delay(), Some(100));

        clock.advance(99);
        assert!(controller.viewport().log().is_empty());

        clock.advance(1);
        assert_eq!(
            controller.viewport().log(),
            vec![Scrolled::IntoView("approach".to_string())]
        );
    }

    #[test]
    fn missing_target_is_a_silent_no_op() {
        let (mut controller, clock) = controller(RecordingViewport::default());

        controller.on_location_change(&RouteLocation::from_parts("/", "#approach"));
        clock.advance(100);

        assert!(controller.viewport().log().is_empty());
        assert_eq!(clock.live_count(), 0);
    }

    #[test]
    fn target_mounted_during_settle_delay_is_found() {
        let (mut controller, clock) = controller(RecordingViewport::default());

        controller.on_location_change(&RouteLocation::from_parts("/", "#faq"));
        clock.advance(40);
        controller.viewport().mount("faq");
        clock.advance(60);

        assert_eq!(
            controller.viewport().log(),
            vec![Scrolled::IntoView("faq".to_string())]
        );
    }

    #[test]
    fn rapid_navigation_only_runs_latest_scroll() {
        let (mut controller, clock) = controller(RecordingViewport::with_elements(&["a", "b"]));

        controller.on_location_change(&RouteLocation::from_parts("/", "#a"));
        clock.advance(50);
        controller.on_location_change(&RouteLocation::from_parts("/", "#b"));
        assert_eq!(clock.live_count(), 1);

        clock.advance(1_000);

        assert_eq!(
            controller.viewport().log(),
            vec![Scrolled::IntoView("b".to_string())]
        );
    }

    #[test]
    fn plain_navigation_cancels_pending_fragment_scroll() {
        let (mut controller, clock) = controller(RecordingViewport::with_elements(&["approach"]));

        controller.on_location_change(&RouteLocation::from_parts("/", "#approach"));
        clock.advance(30);
        controller.on_location_change(&RouteLocation::from_parts("/how-it-works", ""));
        clock.advance(500);

        assert_eq!(controller.viewport().log(), vec![Scrolled::Origin]);
    }

    #[test]
    fn teardown_cancels_pending_scroll() {
        let viewport = Rc::new(RecordingViewport::with_elements(&["faq"]));
        let clock = ManualClock::default();
        {
            let mut controller =
                ScrollController::new(clock.clone(), SharedViewport(viewport.clone()), 100);
            controller.on_location_change(&RouteLocation::from_parts("/", "#faq"));
        }
        clock.advance(200);

        assert!(viewport.log().is_empty());
        assert_eq!(clock.live_count(), 0);
    }

    #[test]
    fn explicit_cancel_is_idempotent() {
        let (mut controller, clock) = controller(RecordingViewport::with_elements(&["faq"]));

        controller.on_location_change(&RouteLocation::from_parts("/", "#faq"));
        controller.cancel_pending();
        controller.cancel_pending();
        clock.advance(200);

        assert!(controller.viewport().log().is_empty());
    }

    #[test]
    fn settle_delay_is_configurable() {
        let clock = ManualClock::default();
        let mut controller =
            ScrollController::new(clock.clone(), RecordingViewport::with_elements(&["x"]), 250);

        controller.on_location_change(&RouteLocation::from_parts("/", "#x"));
        clock.advance(100);
        assert!(controller.viewport().log().is_empty());
        clock.advance(150);
        assert_eq!(controller.viewport().log(), vec![Scrolled::IntoView("x".to_string())]);
    }

    /// Lets a test keep observing the viewport after the controller is gone.
    struct SharedViewport(Rc<RecordingViewport>);

    impl Viewport for SharedViewport {
        fn scroll_to_origin(&self) {
            self.0.scroll_to_origin();
        }

        fn scroll_into_view(&self, id: &str) -> bool {
            self.0.scroll_into_view(id)
        }
    }
}
