use lift_car::CarError;
use lift_core::{CoreError, Floor, FloorRange};
use lift_rider::RiderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Core(#[from] CoreError),

    #[error("car error: {0}")]
    Car(#[from] CarError),

    #[error("rider error: {0}")]
    Rider(#[from] RiderError),

    #[error("invalid trip {origin} -> {destination}: floors must differ and lie in {range}")]
    InvalidTrip {
        origin:      Floor,
        destination: Floor,
        range:       FloorRange,
    },
}

pub type SimResult<T> = Result<T, SimError>;
