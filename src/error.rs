//! Error types for the discovery engine
//!
//! The engine itself is infallible by design: missing optional data degrades
//! to neutral scores rather than failing. The variants here cover the only
//! conditions worth surfacing to the caller, which are programming errors
//! that should fail fast during integration rather than silently produce
//! empty or meaningless results.

use std::borrow::Cow;
use thiserror::Error;

/// Result type alias for discovery operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the discovery engine
#[derive(Debug, Error)]
pub enum Error {
    /// Custom scoring weights must sum to 1.0 so final scores stay
    /// comparable across requests.
    #[error("Invalid scoring weights: sum is {sum}, expected 1.0")]
    InvalidWeights { sum: f64 },

    #[error("Invalid coordinate: {axis} = {value} is out of range")]
    InvalidCoordinate { axis: &'static str, value: f64 },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: Cow<'static, str> },
}

impl Error {
    pub fn invalid_weights(sum: f64) -> Self {
        Self::InvalidWeights { sum }
    }

    pub fn invalid_coordinate(axis: &'static str, value: f64) -> Self {
        Self::InvalidCoordinate { axis, value }
    }

    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
