//! Results of a rider's boarding and alighting attempts.

/// What happened when a rider tried to board.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardOutcome {
    /// The rider is aboard.  It should select its destination next.
    Boarded,

    /// The car filled up before this rider got in.  The rider called the car
    /// again and keeps waiting.
    Requeued,

    /// The car was not boarding at the rider's floor, or was full.  Nothing
    /// changed.
    Unavailable,
}

/// What happened when a rider tried to alight.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlightOutcome {
    /// The rider left the car at its destination.
    Alighted,

    /// The car was not boarding at the rider's destination.  Nothing changed.
    Unavailable,
}
