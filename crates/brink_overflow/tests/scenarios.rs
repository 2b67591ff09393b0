//! End-to-end overflow tracking scenarios on the headless platform

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use brink_core::{EventDispatcher, EventLoop, ManualClock};
use brink_overflow::{Direction, OverflowOptions, OverflowState, OverflowTracker};
use brink_platform::{HeadlessElement, HeadlessWindow, ScrollElement, ScrollMetrics};

const WINDOW: Duration = Duration::from_millis(100);

type Calls = Rc<RefCell<Vec<(Direction, bool)>>>;

/// Headless element that counts how often it is measured
struct CountingElement {
    inner: HeadlessElement,
    reads: Cell<usize>,
}

impl CountingElement {
    fn new(inner: HeadlessElement) -> Self {
        Self {
            inner,
            reads: Cell::new(0),
        }
    }
}

impl ScrollElement for CountingElement {
    fn scroll_metrics(&self) -> brink_platform::Result<ScrollMetrics> {
        self.reads.set(self.reads.get() + 1);
        self.inner.scroll_metrics()
    }

    fn events(&self) -> &EventDispatcher {
        self.inner.events()
    }
}

fn track<E: ScrollElement + 'static>(
    element: &Rc<E>,
    window: &HeadlessWindow,
    event_loop: &EventLoop<ManualClock>,
    options: OverflowOptions,
) -> (OverflowTracker, Calls) {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let log = calls.clone();
    let tracker = OverflowTracker::attach(
        element,
        window,
        &event_loop.timers(),
        move |_, direction, overflowing| log.borrow_mut().push((direction, overflowing)),
        options,
    );
    (tracker, calls)
}

/// 200x100 viewport over 600x300 content: `right` and `down` overflow
fn wide_and_tall() -> HeadlessElement {
    HeadlessElement::new(200.0, 100.0).with_content_size(600.0, 300.0)
}

#[test]
fn unscrolled_wide_content_overflows_right_only_horizontally() {
    let element = HeadlessElement::new(200.0, 100.0).with_content_size(800.0, 100.0);
    let state = OverflowState::measure(&element);
    assert!(!state.left);
    assert!(state.right);
}

#[test]
fn scrolled_to_max_offset_has_no_right_overflow() {
    let element = HeadlessElement::new(200.0, 100.0).with_content_size(800.0, 100.0);
    element.scroll_to(600.0, 0.0);
    assert_eq!(element.metrics().scroll_left, element.metrics().max_scroll_left());
    assert!(!OverflowState::measure(&element).right);
}

#[test]
fn trigger_on_init_reports_all_four_directions() {
    let event_loop = EventLoop::manual();
    let window = HeadlessWindow::default();
    let element = Rc::new(wide_and_tall());

    let (_tracker, calls) = track(
        &element,
        &window,
        &event_loop,
        OverflowOptions::new().with_trigger_on_init(true),
    );

    assert_eq!(
        *calls.borrow(),
        vec![
            (Direction::Up, false),
            (Direction::Right, true),
            (Direction::Down, true),
            (Direction::Left, false)
        ]
    );
}

#[test]
fn without_trigger_on_init_nothing_is_reported_until_a_change() {
    let mut event_loop = EventLoop::manual();
    let window = HeadlessWindow::default();
    let element = Rc::new(wide_and_tall());

    let (_tracker, calls) = track(&element, &window, &event_loop, OverflowOptions::default());
    event_loop.advance(WINDOW * 3);
    assert!(calls.borrow().is_empty());

    element.scroll_to(0.0, 10.0);
    event_loop.advance(WINDOW);
    assert_eq!(*calls.borrow(), vec![(Direction::Up, true)]);
}

#[test]
fn scrolling_fully_right_reports_right_once() {
    let mut event_loop = EventLoop::manual();
    let window = HeadlessWindow::default();
    let element = Rc::new(HeadlessElement::new(200.0, 100.0).with_content_size(600.0, 300.0));

    let (_tracker, calls) = track(&element, &window, &event_loop, OverflowOptions::default());

    // Drag across in small steps, all inside one window
    for step in 1..=8 {
        element.scroll_to(50.0 * step as f32, 0.0);
        event_loop.advance(Duration::from_millis(10));
    }
    assert!(calls.borrow().is_empty());

    event_loop.advance(WINDOW);
    // `left` flips too; `down` is unchanged and stays unreported
    assert_eq!(
        *calls.borrow(),
        vec![(Direction::Right, false), (Direction::Left, true)]
    );
}

#[test]
fn scrolling_right_from_already_scrolled_position_reports_only_right() {
    let mut event_loop = EventLoop::manual();
    let window = HeadlessWindow::default();
    let element = Rc::new(wide_and_tall().with_scroll(100.0, 0.0));

    let (_tracker, calls) = track(&element, &window, &event_loop, OverflowOptions::default());

    element.scroll_to(element.metrics().max_scroll_left(), 0.0);
    event_loop.advance(WINDOW);
    assert_eq!(*calls.borrow(), vec![(Direction::Right, false)]);
}

#[test]
fn burst_of_scrolls_is_measured_once() {
    let mut event_loop = EventLoop::manual();
    let window = HeadlessWindow::default();
    let element = Rc::new(CountingElement::new(wide_and_tall()));

    let (_tracker, calls) = track(&element, &window, &event_loop, OverflowOptions::default());
    assert_eq!(element.reads.get(), 1);

    for step in 1..=20 {
        element.inner.scroll_to(0.0, step as f32 * 10.0);
    }
    event_loop.advance(WINDOW);

    assert_eq!(element.reads.get(), 2);
    assert_eq!(*calls.borrow(), vec![(Direction::Up, true), (Direction::Down, false)]);
}

#[test]
fn burst_that_returns_to_start_reports_nothing() {
    let mut event_loop = EventLoop::manual();
    let window = HeadlessWindow::default();
    let element = Rc::new(wide_and_tall());

    let (_tracker, calls) = track(&element, &window, &event_loop, OverflowOptions::default());

    element.scroll_to(400.0, 200.0);
    event_loop.advance(Duration::from_millis(50));
    element.scroll_to(0.0, 0.0);
    event_loop.advance(WINDOW);

    assert!(calls.borrow().is_empty());
}

#[test]
fn recheck_without_geometry_change_is_idempotent() {
    let mut event_loop = EventLoop::manual();
    let window = HeadlessWindow::default();
    let element = Rc::new(CountingElement::new(wide_and_tall()));

    let (_tracker, calls) = track(&element, &window, &event_loop, OverflowOptions::default());

    element.inner.scroll_to(0.0, 40.0);
    event_loop.advance(WINDOW);
    assert_eq!(calls.borrow().len(), 1);

    // Same geometry, fresh measurement
    window.resize(1024, 768);
    event_loop.advance(WINDOW);
    assert_eq!(element.reads.get(), 3);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn window_resize_that_shrinks_viewport_reports_down() {
    let mut event_loop = EventLoop::manual();
    let window = HeadlessWindow::default();
    let element = Rc::new(HeadlessElement::new(200.0, 100.0));

    let (_tracker, calls) = track(&element, &window, &event_loop, OverflowOptions::default());

    // Host relayout: the container loses 40px of height
    element.set_client_size(200.0, 60.0);
    window.resize(800, 560);
    assert!(calls.borrow().is_empty());

    event_loop.advance(WINDOW);
    assert_eq!(*calls.borrow(), vec![(Direction::Down, true)]);
}

#[test]
fn resize_storm_settles_into_one_report() {
    let mut event_loop = EventLoop::manual();
    let window = HeadlessWindow::default();
    let element = Rc::new(CountingElement::new(HeadlessElement::new(200.0, 100.0)));

    let (tracker, calls) = track(&element, &window, &event_loop, OverflowOptions::default());

    for height in (400..600).step_by(20) {
        element.inner.set_client_size(200.0, height as f32 / 6.0);
        window.resize(800, height);
        event_loop.advance(Duration::from_millis(16));
    }
    assert!(tracker.is_pending());

    event_loop.advance(WINDOW);
    assert!(!tracker.is_pending());
    assert_eq!(element.reads.get(), 2);
    // Final client height 580/6 < 100, so the content now overflows downward
    assert_eq!(*calls.borrow(), vec![(Direction::Down, true)]);
}

#[test]
fn disposed_tracker_never_reports_again() {
    let mut event_loop = EventLoop::manual();
    let window = HeadlessWindow::default();
    let element = Rc::new(wide_and_tall());

    let (mut tracker, calls) = track(&element, &window, &event_loop, OverflowOptions::default());
    element.scroll_to(0.0, 150.0);
    tracker.dispose();

    event_loop.advance(WINDOW);
    window.resize(100, 100);
    event_loop.advance(WINDOW);

    assert!(calls.borrow().is_empty());
    assert!(event_loop.is_idle());
}

#[test]
fn options_loaded_from_toml_drive_the_tracker() {
    let mut event_loop = EventLoop::manual();
    let window = HeadlessWindow::default();
    let element = Rc::new(wide_and_tall());

    let options = OverflowOptions::from_toml_str("trigger_on_init = false\ndebounce_ms = 40\n").unwrap();
    let (_tracker, calls) = track(&element, &window, &event_loop, options);

    element.scroll_to(30.0, 0.0);
    event_loop.advance(Duration::from_millis(40));
    assert_eq!(*calls.borrow(), vec![(Direction::Left, true)]);
}
