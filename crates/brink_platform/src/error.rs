//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Element is not attached to a window
    #[error("element is detached from its window")]
    Detached,

    /// Element has no layout box to measure
    #[error("element has no layout box")]
    NoLayoutBox,
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
