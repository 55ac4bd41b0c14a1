//! Car status, travel direction, and per-step outcomes.

use std::fmt;

use lift_core::Floor;

/// What the car is doing right now.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarStatus {
    /// No serviceable request; the car waits at its floor.
    Idle,
    /// Doors open at the current floor; riders may board and alight.
    Boarding,
    /// In motion (or committed to moving on the next step).
    Moving,
}

/// Travel direction.  Kept while boarding so the car resumes the same way.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Floor delta of one step in this direction.
    #[inline]
    pub fn delta(self) -> Floor {
        match self {
            Direction::Up   => 1,
            Direction::Down => -1,
        }
    }
}

impl fmt::Display for CarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CarStatus::Idle     => "IDLE",
            CarStatus::Boarding => "BOARDING",
            CarStatus::Moving   => "MOVING",
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up   => "UP",
            Direction::Down => "DOWN",
        })
    }
}

/// The single action a call to [`Car::step`][crate::Car::step] performed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepOutcome {
    /// Both request sets were empty; the car is idle.
    Idle,

    /// The car opened its doors at `floor`.  `pickup`/`dropoff` report which
    /// request sets held the floor (and were cleared).
    Stopped {
        floor:   Floor,
        pickup:  bool,
        dropoff: bool,
    },

    /// The car switched into MOVING without changing floor.
    Started,

    /// The car advanced one floor.  `reversed` is set when the direction
    /// flipped on this same step.
    Moved {
        from:     Floor,
        to:       Floor,
        reversed: bool,
    },

    /// Requests are pending but none can be served (full car, pickups only).
    /// The car parks in IDLE without moving.
    Held,
}
