//! `lift-sim` — tick loop driver for the rust_lift elevator simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Generate — every spawn_interval_ticks draw (origin, destination);
//!                equal floors → trip skipped and counted.
//!   ② Step     — Car::step(), exactly once.
//!   ③ Alight   — aboard riders that can_alight get out.
//!   ④ Remove   — arrived riders are dropped.
//!   ⑤ Board    — INIT riders call the car; WAITING riders that can_board
//!                board and select their destination.
//!   ⑥ Stats    — SimStats refreshed, on_tick_end fired.
//! ```
//!
//! # Cargo features
//!
//! | Feature | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on `SimStats` and dependencies.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("delivered {}", sim.stats.delivered);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RiderEntry, Sim};
pub use stats::SimStats;
