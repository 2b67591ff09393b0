//! Scroll container geometry

/// One consistent read of a scroll container's geometry
///
/// Field names follow the usual box model: the client box is the visible
/// viewport, the scroll size is the full extent of the content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Horizontal scroll offset
    pub scroll_left: f32,
    /// Vertical scroll offset
    pub scroll_top: f32,
    /// Total scrollable content width
    pub scroll_width: f32,
    /// Total scrollable content height
    pub scroll_height: f32,
    /// Visible viewport width
    pub client_width: f32,
    /// Visible viewport height
    pub client_height: f32,
}

impl ScrollMetrics {
    /// Metrics for a viewport whose content exactly fits
    pub fn new(client_width: f32, client_height: f32) -> Self {
        Self {
            scroll_left: 0.0,
            scroll_top: 0.0,
            scroll_width: client_width,
            scroll_height: client_height,
            client_width,
            client_height,
        }
    }

    /// Set the content extent
    pub fn content(mut self, scroll_width: f32, scroll_height: f32) -> Self {
        self.scroll_width = scroll_width;
        self.scroll_height = scroll_height;
        self
    }

    /// Set the scroll offsets (not clamped)
    pub fn scrolled(mut self, scroll_left: f32, scroll_top: f32) -> Self {
        self.scroll_left = scroll_left;
        self.scroll_top = scroll_top;
        self
    }

    /// Largest reachable horizontal offset
    pub fn max_scroll_left(&self) -> f32 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    /// Largest reachable vertical offset
    pub fn max_scroll_top(&self) -> f32 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// Clamp the scroll offsets into the reachable range
    pub fn clamped(mut self) -> Self {
        self.scroll_left = self.scroll_left.clamp(0.0, self.max_scroll_left());
        self.scroll_top = self.scroll_top.clamp(0.0, self.max_scroll_top());
        self
    }
}
