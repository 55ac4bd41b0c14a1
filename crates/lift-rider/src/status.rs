//! Rider status and the allowed-transition table.

/// Where a rider is in its trip.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiderStatus {
    /// Created, has not called the car yet.
    #[default]
    Init,
    /// Called the car at its origin and is waiting for it.
    Waiting,
    /// Inside the car, heading for its destination.
    Aboard,
    /// Left the car at its destination.  Terminal.
    Arrived,
}

impl RiderStatus {
    /// `true` if a rider may move from `self` to `next`.
    ///
    /// Progress is monotonic apart from `Waiting → Waiting`, which covers a
    /// rider who called again after the car filled up before it could board.
    pub fn can_transition_to(self, next: RiderStatus) -> bool {
        use RiderStatus::*;
        matches!(
            (self, next),
            (Init, Waiting) | (Waiting, Waiting) | (Waiting, Aboard) | (Aboard, Arrived)
        )
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self == RiderStatus::Arrived
    }
}
