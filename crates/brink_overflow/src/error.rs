//! Overflow tracking error types

use thiserror::Error;

/// Errors raised while building overflow tracking configuration
///
/// Tracking itself never fails: geometry that can't be measured is reported
/// as "not overflowing".
#[derive(Error, Debug)]
pub enum OverflowError {
    /// Options file is not valid TOML or has the wrong shape
    #[error("failed to parse overflow options: {0}")]
    Config(#[from] toml::de::Error),

    /// Options parsed but hold an unusable value
    #[error("invalid overflow option: {0}")]
    InvalidOption(String),

    /// Direction name not one of up/right/down/left
    #[error("unknown overflow direction: {0:?}")]
    UnknownDirection(String),
}

/// Result type for overflow configuration
pub type Result<T> = std::result::Result<T, OverflowError>;
