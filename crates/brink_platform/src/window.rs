//! Window abstraction and configuration

use std::cell::Cell;

use brink_core::{Event, EventDispatcher};
use tracing::trace;

/// Window configuration
#[derive(Clone, Debug)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in logical pixels
    pub width: u32,
    /// Initial height in logical pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Brink".to_string(),
            width: 800,
            height: 600,
        }
    }
}

impl WindowConfig {
    /// Create a new window configuration with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Window abstraction trait
///
/// The window dispatches [`RESIZE`](brink_core::event_types::RESIZE) events
/// on its dispatcher whenever its inner size changes.
pub trait Window {
    /// Inner size in logical pixels
    fn size(&self) -> (u32, u32);

    /// The window's event target
    fn events(&self) -> &EventDispatcher;
}

/// An in-memory window
///
/// Resizing doesn't lay anything out: hosts (or tests) update element
/// geometry themselves, then call [`HeadlessWindow::resize`].
pub struct HeadlessWindow {
    title: String,
    size: Cell<(u32, u32)>,
    events: EventDispatcher,
}

impl HeadlessWindow {
    pub fn new(config: WindowConfig) -> Self {
        Self {
            title: config.title,
            size: Cell::new((config.width, config.height)),
            events: EventDispatcher::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Change the inner size, dispatching a resize event if it changed
    pub fn resize(&self, width: u32, height: u32) {
        if self.size.replace((width, height)) == (width, height) {
            return;
        }
        trace!(width, height, title = %self.title, "headless window resized");
        self.events.dispatch(&Event::resize(width, height));
    }
}

impl Default for HeadlessWindow {
    fn default() -> Self {
        Self::new(WindowConfig::default())
    }
}

impl Window for HeadlessWindow {
    fn size(&self) -> (u32, u32) {
        self.size.get()
    }

    fn events(&self) -> &EventDispatcher {
        &self.events
    }
}
