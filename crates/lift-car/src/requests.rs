//! `FloorRequests`: an ordered set of requested floors.
//!
//! The car keeps two of these side by side (pickups and destinations) rather
//! than one tagged collection, because only pickups are capacity-gated.
//!
//! `BTreeSet` gives O(log n) insert/remove and O(log n) "any floor at or
//! above / at or below x" queries via `range`, and iterates in ascending
//! order for free.

use std::collections::BTreeSet;

use lift_core::Floor;

/// A set of distinct floors, iterated in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FloorRequests {
    inner: BTreeSet<Floor>,
}

impl FloorRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `floor`.  Returns `false` if it was already present (no-op).
    pub fn insert(&mut self, floor: Floor) -> bool {
        self.inner.insert(floor)
    }

    /// Remove `floor`.  Returns `true` if it was present.
    pub fn remove(&mut self, floor: Floor) -> bool {
        self.inner.remove(&floor)
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        self.inner.contains(&floor)
    }

    /// `true` if some requested floor is `>= floor`.
    #[inline]
    pub fn any_at_or_above(&self, floor: Floor) -> bool {
        self.inner.range(floor..).next().is_some()
    }

    /// `true` if some requested floor is `<= floor`.
    #[inline]
    pub fn any_at_or_below(&self, floor: Floor) -> bool {
        self.inner.range(..=floor).next_back().is_some()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Ascending iterator over the requested floors.
    pub fn iter(&self) -> impl Iterator<Item = Floor> + '_ {
        self.inner.iter().copied()
    }
}
