//! The `CarHandle` trait: what a rider may ask of a car.

use lift_core::Floor;

use crate::{Car, CarResult};

/// The slice of [`Car`] a rider interacts with.
///
/// Riders are written against this trait rather than `Car` directly, so a
/// rider's decision logic can be exercised against a scripted car.
pub trait CarHandle {
    fn register_pickup(&mut self, floor: Floor) -> CarResult<()>;

    fn register_destination(&mut self, floor: Floor) -> CarResult<()>;

    fn board(&mut self) -> CarResult<()>;

    fn alight(&mut self) -> CarResult<()>;

    fn is_boarding_at(&self, floor: Floor) -> bool;

    fn is_full(&self) -> bool;
}

impl CarHandle for Car {
    fn register_pickup(&mut self, floor: Floor) -> CarResult<()> {
        Car::register_pickup(self, floor)
    }

    fn register_destination(&mut self, floor: Floor) -> CarResult<()> {
        Car::register_destination(self, floor)
    }

    fn board(&mut self) -> CarResult<()> {
        Car::board(self)
    }

    fn alight(&mut self) -> CarResult<()> {
        Car::alight(self)
    }

    fn is_boarding_at(&self, floor: Floor) -> bool {
        Car::is_boarding_at(self, floor)
    }

    fn is_full(&self) -> bool {
        Car::is_full(self)
    }
}
