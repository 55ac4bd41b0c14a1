//! Floor numbers and the inclusive range a car serves.

use std::fmt;
use std::ops::RangeInclusive;

use crate::{CoreError, CoreResult};

/// A floor number.  Signed so that basements (`-1`, `-2`, …) are expressible.
pub type Floor = i32;

/// Inclusive `[min, max]` span of valid floors, fixed for a car's lifetime.
///
/// Construction guarantees `min <= max`, so a range always holds at least one
/// floor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct FloorRange {
    min: Floor,
    max: Floor,
}

impl FloorRange {
    /// Build a range, failing if `min > max`.
    pub fn new(min: Floor, max: Floor) -> CoreResult<Self> {
        if min > max {
            return Err(CoreError::InvalidFloorRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(self) -> Floor {
        self.min
    }

    #[inline]
    pub fn max(self) -> Floor {
        self.max
    }

    /// `true` if `floor` lies within `[min, max]`.
    #[inline]
    pub fn contains(self, floor: Floor) -> bool {
        self.min <= floor && floor <= self.max
    }

    /// Number of floors in the range (never zero).
    #[inline]
    pub fn floor_count(self) -> usize {
        (self.max as i64 - self.min as i64 + 1) as usize
    }

    /// Ascending iterator over every floor in the range.
    pub fn iter(self) -> RangeInclusive<Floor> {
        self.min..=self.max
    }
}

impl TryFrom<(Floor, Floor)> for FloorRange {
    type Error = CoreError;

    fn try_from((min, max): (Floor, Floor)) -> CoreResult<Self> {
        FloorRange::new(min, max)
    }
}

impl fmt::Display for FloorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
