//! Configuration error type.
//!
//! The light model itself never fails; errors only arise at the edges.
//! Peripheral bring-up reports [`HwInitError`](crate::drivers::hw_init::HwInitError)
//! and configuration validation reports [`ConfigError`].  Both are `Copy` so
//! they can be logged and passed around without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from [`LightConfig::validate`](crate::config::LightConfig::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl core::error::Error for ConfigError {}
