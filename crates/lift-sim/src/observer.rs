//! Simulation observer trait for status reporting and data collection.

use lift_car::{Car, StepOutcome};
use lift_core::{Floor, RiderId, Tick};

use crate::SimStats;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Nothing in the car or rider crates logs on
/// its own; every line of simulation output goes through this trait.
///
/// # Example: status printer
///
/// ```rust,ignore
/// struct StatusPrinter;
///
/// impl SimObserver for StatusPrinter {
///     fn on_car_step(&mut self, tick: Tick, car: &Car, _outcome: StepOutcome) {
///         println!("{tick}: {} at {}", car.status(), car.position());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when the trip generator creates a rider.
    fn on_rider_spawned(
        &mut self,
        _tick:        Tick,
        _rider:       RiderId,
        _origin:      Floor,
        _destination: Floor,
    ) {}

    /// Called after every [`Car::step`], with the car in its new state.
    fn on_car_step(&mut self, _tick: Tick, _car: &Car, _outcome: StepOutcome) {}

    /// Called when a rider leaves the car at `floor`.
    fn on_alight(&mut self, _tick: Tick, _rider: RiderId, _floor: Floor) {}

    /// Called when a rider has boarded at `floor` and selected its destination.
    fn on_board(&mut self, _tick: Tick, _rider: RiderId, _floor: Floor) {}

    /// Called when the car was open at a waiting rider's floor but had no room.
    /// The rider has already called the car again.
    fn on_board_missed(&mut self, _tick: Tick, _rider: RiderId, _floor: Floor) {}

    /// Called at the end of each tick with the refreshed totals.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &SimStats) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &SimStats) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
