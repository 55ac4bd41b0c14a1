//! The `Sim` struct and its tick loop.

use lift_car::Car;
use lift_core::{Floor, RiderId, SimConfig, SimRng, Tick};
use lift_rider::{AlightOutcome, BoardOutcome, Rider, RiderStatus};

use crate::{SimError, SimObserver, SimResult, SimStats};

// ── Rider bookkeeping ─────────────────────────────────────────────────────────

/// A rider still in the simulation, with the driver's metadata.
#[derive(Clone, Debug)]
pub struct RiderEntry {
    pub id:         RiderId,
    pub rider:      Rider,
    /// Tick the rider was created; trip time is measured from here.
    pub spawned_at: Tick,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim` owns the car, the live riders and the trip generator, and drives the
/// tick loop:
///
/// 1. **Generate**: every `spawn_interval_ticks` ticks draw a random trip;
///    trips whose origin equals their destination are dropped.
/// 2. **Step**: call [`Car::step`] exactly once.
/// 3. **Alight**: every aboard rider that can alight does so.
/// 4. **Remove**: arrived riders leave the simulation.
/// 5. **Board**: riders call the car; waiting riders that can board do so
///    and select their destination right away.
/// 6. **Stats**: refresh [`SimStats`].
///
/// Alighting runs for all riders before anyone boards, so a car emptied this
/// tick takes new riders this tick.  Within a pass riders act one at a time in
/// spawn order, each seeing the car as left by the one before.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (floor range, capacity, total ticks, seed, …).
    pub config: SimConfig,

    /// The next tick to be processed.
    pub now: Tick,

    /// The single car.  Owned here and lent to riders one call at a time.
    pub car: Car,

    /// Riders not yet arrived, in spawn order.
    pub riders: Vec<RiderEntry>,

    /// Totals as of the end of the last processed tick.
    pub stats: SimStats,

    pub(crate) rng:     SimRng,
    pub(crate) next_id: RiderId,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks throughout every tick.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.now < self.config.end_tick() {
            self.tick(observer)?;
        }
        observer.on_sim_end(self.now, &self.stats);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick(observer)?;
        }
        Ok(())
    }

    /// Add a rider travelling from `origin` to `destination`, stamped with the
    /// current tick.  It calls the car during the next board pass.
    ///
    /// Fails with [`SimError::InvalidTrip`] if either floor lies outside the
    /// car's range or the two are equal.
    pub fn spawn_rider(&mut self, origin: Floor, destination: Floor) -> SimResult<RiderId> {
        let range = self.car.floors();
        if origin == destination || !range.contains(origin) || !range.contains(destination) {
            return Err(SimError::InvalidTrip { origin, destination, range });
        }
        let id = self.next_id;
        self.next_id = id.next();
        self.riders.push(RiderEntry {
            id,
            rider:      Rider::new(origin, destination),
            spawned_at: self.now,
        });
        self.stats.spawned += 1;
        Ok(id)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.now;
        observer.on_tick_start(now);
        self.process_tick(now, observer)?;
        observer.on_tick_end(now, &self.stats);
        self.now = now + 1;
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        // ── Phase 1: trip generation ──────────────────────────────────────
        if now.is_multiple_of(self.config.spawn_interval_ticks) {
            let floors = self.car.floors();
            let origin = self.rng.floor(floors);
            let destination = self.rng.floor(floors);
            if origin == destination {
                self.stats.skipped_trips += 1;
            } else {
                let id = self.spawn_rider(origin, destination)?;
                observer.on_rider_spawned(now, id, origin, destination);
            }
        }

        // ── Phase 2: the car's single action ──────────────────────────────
        let outcome = self.car.step();
        observer.on_car_step(now, &self.car, outcome);

        // ── Phase 3: alight pass ──────────────────────────────────────────
        for entry in &mut self.riders {
            let rider = &mut entry.rider;
            if rider.status() != RiderStatus::Aboard || !rider.can_alight(&self.car) {
                continue;
            }
            if rider.alight(&mut self.car)? == AlightOutcome::Alighted {
                self.stats.delivered += 1;
                self.stats.total_trip_ticks += now.since(entry.spawned_at);
                observer.on_alight(now, entry.id, rider.destination());
            }
        }

        // ── Phase 4: drop arrived riders ──────────────────────────────────
        self.riders.retain(|entry| !entry.rider.is_arrived());

        // ── Phase 5: board pass ───────────────────────────────────────────
        for entry in &mut self.riders {
            let rider = &mut entry.rider;
            match rider.status() {
                RiderStatus::Init => rider.request_pickup(&mut self.car)?,
                RiderStatus::Waiting if rider.can_board(&self.car) => {
                    match rider.board(&mut self.car)? {
                        BoardOutcome::Boarded => {
                            rider.request_destination(&mut self.car)?;
                            observer.on_board(now, entry.id, rider.origin());
                        }
                        BoardOutcome::Requeued => {
                            observer.on_board_missed(now, entry.id, rider.origin());
                        }
                        BoardOutcome::Unavailable => {}
                    }
                }
                // The stop cleared this floor's call, so a rider left behind
                // by a full car has to call again.
                RiderStatus::Waiting if self.car.is_boarding_at(rider.origin()) => {
                    rider.request_pickup(&mut self.car)?;
                    observer.on_board_missed(now, entry.id, rider.origin());
                }
                _ => {}
            }
        }

        // ── Phase 6: statistics ───────────────────────────────────────────
        self.refresh_stats();
        Ok(())
    }

    pub(crate) fn refresh_stats(&mut self) {
        let aboard = self
            .riders
            .iter()
            .filter(|e| e.rider.status() == RiderStatus::Aboard)
            .count();
        self.stats.aboard = aboard;
        self.stats.waiting = self.riders.len() - aboard;
    }
}
