//! Brink Overflow Tracking
//!
//! Reports which edges of a scroll container hide content, and tells a
//! listener whenever that changes:
//!
//! - [`OverflowState`] - Up/right/down/left overflow computed from one geometry read
//! - [`Direction`] - The edge a change is reported for
//! - [`OverflowTracker`] - A disposable binding that rechecks after scroll and
//!   window resize activity settles, and reports only the directions that flipped
//! - [`OverflowOptions`] - Initial reporting and debounce window, loadable from TOML
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! use brink_core::EventLoop;
//! use brink_overflow::{Direction, OverflowOptions, OverflowTracker};
//! use brink_platform::{HeadlessElement, HeadlessWindow};
//!
//! let mut event_loop = EventLoop::manual();
//! let window = HeadlessWindow::default();
//! let list = Rc::new(HeadlessElement::new(300.0, 200.0).with_content_size(300.0, 900.0));
//!
//! let tracker = OverflowTracker::attach(
//!     &list,
//!     &window,
//!     &event_loop.timers(),
//!     |_, direction, overflowing| {
//!         if direction == Direction::Up {
//!             println!("show top shadow: {overflowing}");
//!         }
//!     },
//!     OverflowOptions::new().with_trigger_on_init(true),
//! );
//!
//! list.scroll_to(0.0, 120.0);
//! event_loop.advance(Duration::from_millis(100));
//! assert!(tracker.is_active());
//! ```

pub mod direction;
pub mod error;
pub mod options;
pub mod state;
pub mod tracker;

pub use direction::{Axis, Direction};
pub use error::{OverflowError, Result};
pub use options::{OverflowOptions, DEFAULT_DEBOUNCE, MAX_DEBOUNCE_MS};
pub use state::{OverflowChanges, OverflowState};
pub use tracker::{create_overflow_tracker, OverflowTracker};
