use lift_car::CarError;
use thiserror::Error;

use crate::RiderStatus;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RiderError {
    #[error("car rejected rider request: {0}")]
    Car(#[from] CarError),

    #[error("rider cannot go from {from:?} to {to:?}")]
    InvalidTransition {
        from: RiderStatus,
        to:   RiderStatus,
    },

    #[error("rider is {0:?}, only a rider aboard can select a destination")]
    NotAboard(RiderStatus),
}

pub type RiderResult<T> = Result<T, RiderError>;
