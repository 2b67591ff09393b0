//! Brink Core Runtime
//!
//! This crate provides the single-threaded primitives the rest of Brink is
//! built on:
//!
//! - **Clocks**: Monotonic and manually driven time sources
//! - **Timers**: A cancellable timer queue driven by the event loop
//! - **Event Dispatch**: Per-target listener registries for scroll/resize events
//! - **Debouncing**: Trailing-edge coalescing of bursts of calls
//!
//! Everything here is `!Send`. Work happens on one thread, inside turns of
//! the [`EventLoop`].
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! use brink_core::{Debouncer, EventLoop};
//!
//! let mut event_loop = EventLoop::manual();
//! let runs = Rc::new(Cell::new(0));
//!
//! let counter = runs.clone();
//! let debounced = Debouncer::new(event_loop.timers(), Duration::from_millis(100), move || {
//!     counter.set(counter.get() + 1);
//! });
//!
//! debounced.call();
//! debounced.call();
//! event_loop.advance(Duration::from_millis(100));
//! assert_eq!(runs.get(), 1);
//! ```

pub mod clock;
pub mod debounce;
pub mod error;
pub mod events;
pub mod runtime;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use debounce::Debouncer;
pub use error::{CoreError, Result};
pub use events::{event_types, Event, EventData, EventDispatcher, EventType, ListenerId};
pub use runtime::{EventLoop, LoopStats};
pub use timer::{TimerHandle, TimerId, TimerQueue};
