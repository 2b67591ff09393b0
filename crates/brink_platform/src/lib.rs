//! Brink Platform Abstraction Layer
//!
//! This crate describes the host services the overflow tracker consumes
//! without implementing any of them for a real windowing system:
//!
//! - [`ScrollElement`] - A scroll container's geometry and its scroll events
//! - [`Window`] - The owning window's size and its resize events
//! - [`ScrollMetrics`] - One consistent read of a container's scroll geometry
//!
//! Headless implementations ([`HeadlessElement`], [`HeadlessWindow`]) back
//! the tests and demos, and are a reference for host integrations.
//!
//! # Example
//!
//! ```rust
//! use brink_platform::prelude::*;
//!
//! let list = HeadlessElement::new(300.0, 200.0).with_content_size(300.0, 900.0);
//! let metrics = list.scroll_metrics()?;
//! assert_eq!(metrics.max_scroll_top(), 700.0);
//! # Ok::<(), PlatformError>(())
//! ```

mod element;
mod error;
mod geometry;
mod window;

// Re-export all public types
pub use element::{HeadlessElement, ScrollElement};
pub use error::{PlatformError, Result};
pub use geometry::ScrollMetrics;
pub use window::{HeadlessWindow, Window, WindowConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::element::{HeadlessElement, ScrollElement};
    pub use crate::error::{PlatformError, Result};
    pub use crate::geometry::ScrollMetrics;
    pub use crate::window::{HeadlessWindow, Window, WindowConfig};
}
