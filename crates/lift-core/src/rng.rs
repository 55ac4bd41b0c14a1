//! Deterministic simulation RNG.
//!
//! The driver draws every random trip from a single `SimRng` seeded from
//! `SimConfig::seed`, so the same seed always replays the same arrivals.
//! The simulation is single-threaded; there is no per-thread splitting.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Floor, FloorRange};

/// Simulation-level RNG used for trip generation.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// A floor drawn uniformly from `floors` (both ends inclusive).
    #[inline]
    pub fn floor(&mut self, floors: FloorRange) -> Floor {
        self.0.gen_range(floors.min()..=floors.max())
    }
}
