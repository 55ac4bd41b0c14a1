//! Top-level simulation configuration.

use crate::{CoreError, CoreResult, Floor, FloorRange, Tick};

/// Parameters for one simulation run.
///
/// Plain data; typically built from [`SimConfig::default`] or loaded from a
/// JSON file by the application crate (requires the `serde` feature).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Lowest floor the car serves.  The car starts here.
    pub min_floor: Floor,

    /// Highest floor the car serves.
    pub max_floor: Floor,

    /// Maximum number of riders aboard at once.  Must be positive.
    pub capacity: u32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Generate a new random trip every N ticks.  0 disables generation.
    pub spawn_interval_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            min_floor:            1,
            max_floor:            10,
            capacity:             5,
            total_ticks:          100,
            spawn_interval_ticks: 5,
            seed:                 42,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// The served floor range, or an error if `min_floor > max_floor`.
    pub fn floor_range(&self) -> CoreResult<FloorRange> {
        FloorRange::new(self.min_floor, self.max_floor)
    }

    /// Check every field that has a constraint.
    pub fn validate(&self) -> CoreResult<()> {
        self.floor_range()?;
        if self.capacity == 0 {
            return Err(CoreError::Config("capacity must be positive".into()));
        }
        Ok(())
    }
}
