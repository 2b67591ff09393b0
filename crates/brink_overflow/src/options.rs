//! Overflow tracker options
//!
//! Options can be built in code or loaded from a flat TOML table:
//!
//! ```toml
//! trigger_on_init = true
//! debounce_ms = 150
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{OverflowError, Result};

/// Default quiet period before a recheck runs
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Longest debounce accepted from configuration
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Options for an overflow tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OverflowOptions {
    /// Report all four directions immediately on attach
    pub trigger_on_init: bool,
    /// Quiet period after the last scroll/resize before rechecking
    #[serde(rename = "debounce_ms", with = "duration_ms")]
    pub debounce: Duration,
}

impl Default for OverflowOptions {
    fn default() -> Self {
        Self {
            trigger_on_init: false,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl OverflowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the initial state is reported on attach
    pub fn with_trigger_on_init(mut self, trigger_on_init: bool) -> Self {
        self.trigger_on_init = trigger_on_init;
        self
    }

    /// Set the debounce window
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Debounce window actually used by a tracker
    ///
    /// Windows longer than [`MAX_DEBOUNCE_MS`] are cut down to it.
    pub fn effective_debounce(&self) -> Duration {
        self.debounce.min(Duration::from_millis(MAX_DEBOUNCE_MS))
    }

    /// Parse and validate options from TOML
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let options: Self = toml::from_str(source)?;
        options.validate()?;
        Ok(options)
    }

    /// Check that the options are usable
    pub fn validate(&self) -> Result<()> {
        if self.debounce.is_zero() {
            return Err(OverflowError::InvalidOption(
                "debounce_ms must be greater than zero".to_string(),
            ));
        }
        if self.debounce > Duration::from_millis(MAX_DEBOUNCE_MS) {
            return Err(OverflowError::InvalidOption(format!(
                "debounce_ms must be at most {MAX_DEBOUNCE_MS}, got {}",
                self.debounce.as_millis()
            )));
        }
        Ok(())
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::ser::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis())
            .map_err(|_| S::Error::custom(format!("debounce of {value:?} does not fit in u64 ms")))?;
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
