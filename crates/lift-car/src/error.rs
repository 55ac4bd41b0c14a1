use lift_core::{Floor, FloorRange};
use thiserror::Error;

/// Caller errors raised by [`Car`][crate::Car] operations.
///
/// None of these are transient; the car never retries internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarError {
    #[error("unexpected floor {floor}, car serves {range}")]
    OutOfRangeFloor { floor: Floor, range: FloorRange },

    #[error("car is full")]
    CarFull,

    #[error("car is empty")]
    CarEmpty,

    #[error("car is not boarding")]
    NotBoarding,

    #[error("invalid car configuration: {0}")]
    InvalidConfiguration(String),
}

pub type CarResult<T> = Result<T, CarError>;
