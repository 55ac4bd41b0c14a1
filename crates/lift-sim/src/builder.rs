//! Fluent builder for constructing a [`Sim`].

use lift_car::Car;
use lift_core::{Floor, RiderId, SimConfig, SimRng, Tick};

use crate::{Sim, SimResult, SimStats};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: floor range, capacity, total ticks, spawn interval, seed
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                       |
/// |---------------|-------------------------------|
/// | `.riders(v)`  | No riders before the first tick |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .riders(vec![(1, 7), (4, 2)])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    trips:  Vec<(Floor, Floor)>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, trips: Vec::new() }
    }

    /// Riders present before the first tick, as `(origin, destination)`
    /// pairs.  They are spawned at tick 0 in the order given.
    ///
    /// Each pair is checked like [`Sim::spawn_rider`]: both floors in range
    /// and distinct.
    pub fn riders(mut self, trips: Vec<(Floor, Floor)>) -> Self {
        self.trips = trips;
        self
    }

    /// Validate the config and the initial trips, build the car, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let car = Car::new((self.config.min_floor, self.config.max_floor), self.config.capacity)?;

        let mut sim = Sim {
            rng:     SimRng::new(self.config.seed),
            config:  self.config,
            now:     Tick::ZERO,
            car,
            riders:  Vec::with_capacity(self.trips.len()),
            stats:   SimStats::default(),
            next_id: RiderId(0),
        };
        for (origin, destination) in self.trips {
            sim.spawn_rider(origin, destination)?;
        }
        sim.refresh_stats();
        Ok(sim)
    }
}
