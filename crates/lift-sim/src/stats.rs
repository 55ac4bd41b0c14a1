//! Running totals for one simulation.

/// Counters refreshed at the end of every tick.
///
/// Kept in memory only; an observer that wants a history copies them out in
/// [`on_tick_end`][crate::SimObserver::on_tick_end].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimStats {
    /// Riders created, by the generator or injected directly.
    pub spawned: u64,

    /// Generated trips dropped because origin and destination coincided.
    pub skipped_trips: u64,

    /// Riders that reached their destination.
    pub delivered: u64,

    /// Riders not yet aboard (`Init` or `Waiting`).
    pub waiting: usize,

    /// Riders in the car.  Always equal to the car's occupancy.
    pub aboard: usize,

    /// Sum over delivered riders of ticks from spawn to alighting.
    pub total_trip_ticks: u64,
}

impl SimStats {
    /// Mean spawn-to-arrival time of delivered riders, `None` before the
    /// first delivery.
    pub fn mean_trip_ticks(&self) -> Option<f64> {
        if self.delivered == 0 {
            return None;
        }
        Some(self.total_trip_ticks as f64 / self.delivered as f64)
    }
}
