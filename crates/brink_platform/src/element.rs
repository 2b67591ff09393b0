//! Scroll container abstraction

use std::cell::Cell;

use brink_core::{Event, EventDispatcher};
use tracing::trace;

use crate::error::{PlatformError, Result};
use crate::geometry::ScrollMetrics;

/// A scrollable element as seen by observers
///
/// Implemented by host element types. The element dispatches
/// [`SCROLL`](brink_core::event_types::SCROLL) events on its dispatcher
/// whenever its scroll offset changes.
pub trait ScrollElement {
    /// Read the element's current scroll geometry
    ///
    /// Fails when the element can't be measured, e.g. it has no layout box
    /// or is detached from its window.
    fn scroll_metrics(&self) -> Result<ScrollMetrics>;

    /// The element's event target
    fn events(&self) -> &EventDispatcher;
}

/// An in-memory scroll container
///
/// Geometry is set directly instead of coming from layout. Scrolling clamps
/// to the reachable range and dispatches a scroll event only when the offset
/// actually moves.
pub struct HeadlessElement {
    metrics: Cell<ScrollMetrics>,
    attached: Cell<bool>,
    events: EventDispatcher,
}

impl HeadlessElement {
    /// Create an attached element whose content exactly fits the viewport
    pub fn new(client_width: f32, client_height: f32) -> Self {
        Self {
            metrics: Cell::new(ScrollMetrics::new(client_width, client_height)),
            attached: Cell::new(true),
            events: EventDispatcher::new(),
        }
    }

    /// Set the initial content extent
    pub fn with_content_size(self, width: f32, height: f32) -> Self {
        self.metrics
            .set(self.metrics.get().content(width, height).clamped());
        self
    }

    /// Set the initial scroll offsets (clamped, no event)
    pub fn with_scroll(self, left: f32, top: f32) -> Self {
        self.metrics.set(self.metrics.get().scrolled(left, top).clamped());
        self
    }

    /// Current geometry, regardless of attachment
    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics.get()
    }

    /// Scroll to absolute offsets
    pub fn scroll_to(&self, left: f32, top: f32) {
        self.update(self.metrics.get().scrolled(left, top));
    }

    /// Scroll relative to the current offsets
    pub fn scroll_by(&self, dx: f32, dy: f32) {
        let current = self.metrics.get();
        self.scroll_to(current.scroll_left + dx, current.scroll_top + dy);
    }

    /// Scroll to the far end on both axes
    pub fn scroll_to_end(&self) {
        let current = self.metrics.get();
        self.scroll_to(current.max_scroll_left(), current.max_scroll_top());
    }

    /// Change the content extent
    ///
    /// Content changes are not events in their own right; a scroll event is
    /// only dispatched if the offset had to be clamped.
    pub fn set_content_size(&self, width: f32, height: f32) {
        self.update(self.metrics.get().content(width, height));
    }

    /// Change the visible viewport, e.g. after the window was resized
    pub fn set_client_size(&self, width: f32, height: f32) {
        let mut next = self.metrics.get();
        next.client_width = width;
        next.client_height = height;
        self.update(next);
    }

    /// Remove the element from its window; measuring it then fails
    pub fn detach(&self) {
        self.attached.set(false);
    }

    pub fn attach(&self) {
        self.attached.set(true);
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    fn update(&self, next: ScrollMetrics) {
        let previous = self.metrics.get();
        let next = next.clamped();
        self.metrics.set(next);

        let moved =
            previous.scroll_left != next.scroll_left || previous.scroll_top != next.scroll_top;
        if moved {
            trace!(
                left = next.scroll_left,
                top = next.scroll_top,
                "headless element scrolled"
            );
            self.events
                .dispatch(&Event::scroll(next.scroll_left, next.scroll_top));
        }
    }
}

impl ScrollElement for HeadlessElement {
    fn scroll_metrics(&self) -> Result<ScrollMetrics> {
        if !self.attached.get() {
            return Err(PlatformError::Detached);
        }
        Ok(self.metrics.get())
    }

    fn events(&self) -> &EventDispatcher {
        &self.events
    }
}
