//! Core error type.
//!
//! Higher crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where they validate core primitives.

use thiserror::Error;

use crate::Floor;

/// Errors raised while building core primitives and configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid floor range: min {min} is above max {max}")]
    InvalidFloorRange { min: Floor, max: Floor },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lift-core`.
pub type CoreResult<T> = Result<T, CoreError>;
