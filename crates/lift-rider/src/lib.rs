//! `lift-rider` — the rider's side of a trip.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`status`]  | `RiderStatus` and its allowed-transition table                  |
//! | [`outcome`] | `BoardOutcome`, `AlightOutcome`                                 |
//! | [`rider`]   | `Rider` — call, board, select, alight                           |
//! | [`error`]   | `RiderError`, `RiderResult<T>`                                  |
//!
//! # Design notes
//!
//! A rider holds no scheduling logic.  Each tick the driver asks it whether
//! it can alight or board, using only what the car exposes through
//! [`CarHandle`][lift_car::CarHandle], and the rider forwards the matching
//! request to the car.  The car is never stored: it is borrowed for the
//! duration of each call.
//!
//! ```text
//! INIT ──call──▶ WAITING ──board──▶ ABOARD ──alight──▶ ARRIVED
//!                 ▲    │
//!                 └────┘ car filled up first: call again
//! ```

pub mod error;
pub mod outcome;
pub mod rider;
pub mod status;

#[cfg(test)]
mod tests;

pub use error::{RiderError, RiderResult};
pub use outcome::{AlightOutcome, BoardOutcome};
pub use rider::Rider;
pub use status::RiderStatus;
