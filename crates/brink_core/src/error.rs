//! Core error types

use std::time::Duration;

use thiserror::Error;

/// Errors raised by the core runtime primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The timer queue backing a handle has been dropped
    #[error("event loop has shut down")]
    LoopClosed,

    /// A timer delay pushes its deadline past the clock's range
    #[error("timer delay {delay:?} overflows the clock at {now:?}")]
    DeadlineOverflow { now: Duration, delay: Duration },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
