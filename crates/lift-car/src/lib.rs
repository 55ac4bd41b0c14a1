//! `lift-car` — the elevator car and its dispatch algorithm.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`requests`] | `FloorRequests` — ordered floor set with range queries          |
//! | [`state`]    | `CarStatus`, `Direction`, `StepOutcome`                         |
//! | [`car`]      | `Car` — position, occupancy, the two request sets, `step`       |
//! | [`handle`]   | `CarHandle` — the slice of `Car` a rider talks to               |
//! | [`error`]    | `CarError`, `CarResult<T>`                                      |
//!
//! # Dispatch (one `step` per tick)
//!
//! ```text
//! ① no requests at all            → IDLE, stay put
//! ② stop condition at position    → BOARDING, clear position from both sets
//! ③ not yet MOVING                → MOVING, stay put (one-tick start-up)
//! ④ MOVING                        → reverse if nothing ahead, advance one floor
//! ```
//!
//! Pickup requests are ignored while the car is full, both for stopping and
//! for deciding whether anything lies ahead.  Destination requests are never
//! gated.

pub mod car;
pub mod error;
pub mod handle;
pub mod requests;
pub mod state;


pub use car::Car;
pub use error::{CarError, CarResult};
pub use handle::CarHandle;
pub use requests::FloorRequests;
pub use state::{CarStatus, Direction, StepOutcome};
