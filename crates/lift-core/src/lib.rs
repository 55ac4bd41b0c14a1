//! `lift-core` — foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`floor`]       | `Floor`, `FloorRange`                                 |
//! | [`ids`]         | `RiderId`                                             |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (seeded trip generation)                     |
//! | [`config`]      | `SimConfig`                                           |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on public types; needed to load a `SimConfig` file. |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use floor::{Floor, FloorRange};
pub use ids::RiderId;
pub use rng::SimRng;
pub use time::Tick;
