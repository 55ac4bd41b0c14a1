//! Unit tests for lift-rider.

use std::cell::RefCell;

use lift_car::{Car, CarError, CarHandle, CarResult};
use lift_core::Floor;

use crate::{AlightOutcome, BoardOutcome, Rider, RiderError, RiderStatus};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A call a rider made on a [`ScriptedCar`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Pickup(Floor),
    Destination(Floor),
    Board,
    Alight,
    IsBoardingAt(Floor),
}

/// A car whose answers are fixed up front and which records every call.
struct ScriptedCar {
    boarding: bool,
    full:     bool,
    /// Returned from `board()`.
    board:    CarResult<()>,
    calls:    RefCell<Vec<Call>>,
}

impl ScriptedCar {
    fn new(boarding: bool, full: bool) -> Self {
        Self { boarding, full, board: Ok(()), calls: RefCell::new(vec![]) }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl CarHandle for ScriptedCar {
    fn register_pickup(&mut self, floor: Floor) -> CarResult<()> {
        self.record(Call::Pickup(floor));
        Ok(())
    }

    fn register_destination(&mut self, floor: Floor) -> CarResult<()> {
        self.record(Call::Destination(floor));
        Ok(())
    }

    fn board(&mut self) -> CarResult<()> {
        self.record(Call::Board);
        self.board.clone()
    }

    fn alight(&mut self) -> CarResult<()> {
        self.record(Call::Alight);
        Ok(())
    }

    fn is_boarding_at(&self, floor: Floor) -> bool {
        self.record(Call::IsBoardingAt(floor));
        self.boarding
    }

    fn is_full(&self) -> bool {
        self.full
    }
}

/// A rider 1 → 10 that has already called a scripted car.
fn waiting_rider(car: &mut ScriptedCar) -> Rider {
    let mut r = Rider::new(1, 10);
    r.request_pickup(car).unwrap();
    r
}

// ── Status table ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod status_tests {
    use super::*;

    #[test]
    fn allowed_transitions() {
        use RiderStatus::*;
        assert!(Init.can_transition_to(Waiting));
        assert!(Waiting.can_transition_to(Waiting));
        assert!(Waiting.can_transition_to(Aboard));
        assert!(Aboard.can_transition_to(Arrived));
    }

    #[test]
    fn forbidden_transitions() {
        use RiderStatus::*;
        assert!(!Init.can_transition_to(Aboard));
        assert!(!Init.can_transition_to(Arrived));
        assert!(!Waiting.can_transition_to(Arrived));
        assert!(!Aboard.can_transition_to(Waiting));
        assert!(!Arrived.can_transition_to(Waiting));
        assert!(!Arrived.can_transition_to(Arrived));
    }

    #[test]
    fn only_arrived_is_terminal() {
        assert!(RiderStatus::Arrived.is_terminal());
        assert!(!RiderStatus::Aboard.is_terminal());
        assert_eq!(RiderStatus::default(), RiderStatus::Init);
    }
}

// ── Eligibility queries ───────────────────────────────────────────────────────

#[cfg(test)]
mod eligibility_tests {
    use super::*;

    #[test]
    fn can_board_open_car_with_room() {
        let car = ScriptedCar::new(true, false);
        let r = Rider::new(1, 10);
        assert!(r.can_board(&car));
        assert_eq!(car.calls(), vec![Call::IsBoardingAt(1)]);
    }

    #[test]
    fn cannot_board_full_car() {
        let car = ScriptedCar::new(true, true);
        assert!(!Rider::new(1, 10).can_board(&car));
    }

    #[test]
    fn cannot_board_car_not_boarding() {
        let car = ScriptedCar::new(false, false);
        assert!(!Rider::new(1, 10).can_board(&car));
    }

    #[test]
    fn can_alight_asks_about_destination() {
        let car = ScriptedCar::new(true, false);
        assert!(Rider::new(1, 10).can_alight(&car));
        assert_eq!(car.calls(), vec![Call::IsBoardingAt(10)]);
    }

    #[test]
    fn cannot_alight_car_not_boarding() {
        let car = ScriptedCar::new(false, false);
        assert!(!Rider::new(1, 10).can_alight(&car));
    }
}

// ── Requests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod request_tests {
    use super::*;

    #[test]
    fn pickup_registers_origin_and_waits() {
        let mut car = ScriptedCar::new(false, false);
        let mut r = Rider::new(1, 5);
        r.request_pickup(&mut car).unwrap();
        assert_eq!(car.calls(), vec![Call::Pickup(1)]);
        assert_eq!(r.status(), RiderStatus::Waiting);
    }

    #[test]
    fn pickup_can_be_repeated_while_waiting() {
        let mut car = ScriptedCar::new(false, false);
        let mut r = waiting_rider(&mut car);
        r.request_pickup(&mut car).unwrap();
        assert_eq!(car.calls(), vec![Call::Pickup(1), Call::Pickup(1)]);
        assert_eq!(r.status(), RiderStatus::Waiting);
    }

    #[test]
    fn destination_registers_destination_floor() {
        let mut car = ScriptedCar::new(true, false);
        let mut r = waiting_rider(&mut car);
        r.board(&mut car).unwrap();
        r.request_destination(&mut car).unwrap();
        assert_eq!(car.calls().last(), Some(&Call::Destination(10)));
    }

    #[test]
    fn destination_before_boarding_rejected() {
        let mut car = ScriptedCar::new(false, false);
        let r = Rider::new(1, 5);
        assert_eq!(
            r.request_destination(&mut car),
            Err(RiderError::NotAboard(RiderStatus::Init))
        );
        assert!(car.calls().is_empty());
    }

    #[test]
    fn pickup_out_of_range_propagates_and_stays_init() {
        let mut car = Car::new((1, 10), 5).unwrap();
        let mut r = Rider::new(42, 3);
        let err = r.request_pickup(&mut car).unwrap_err();
        assert!(matches!(err, RiderError::Car(CarError::OutOfRangeFloor { floor: 42, .. })));
        assert_eq!(r.status(), RiderStatus::Init);
    }
}

// ── Boarding / alighting ──────────────────────────────────────────────────────

#[cfg(test)]
mod transition_tests {
    use super::*;

    #[test]
    fn board_calls_car_and_goes_aboard() {
        let mut car = ScriptedCar::new(true, false);
        let mut r = waiting_rider(&mut car);
        assert_eq!(r.board(&mut car), Ok(BoardOutcome::Boarded));
        assert_eq!(r.status(), RiderStatus::Aboard);
        assert!(car.calls().contains(&Call::Board));
    }

    #[test]
    fn board_race_on_full_car_requeues() {
        // The car looked free when checked but another rider took the last
        // place first.
        let mut car = ScriptedCar::new(true, false);
        car.board = Err(CarError::CarFull);
        let mut r = waiting_rider(&mut car);

        assert_eq!(r.board(&mut car), Ok(BoardOutcome::Requeued));
        assert_eq!(r.status(), RiderStatus::Waiting);
        assert_eq!(
            car.calls(),
            vec![Call::Pickup(1), Call::IsBoardingAt(1), Call::Board, Call::Pickup(1)]
        );
    }

    #[test]
    fn board_other_car_errors_propagate() {
        let mut car = ScriptedCar::new(true, false);
        car.board = Err(CarError::NotBoarding);
        let mut r = waiting_rider(&mut car);
        assert_eq!(r.board(&mut car), Err(RiderError::Car(CarError::NotBoarding)));
        assert_eq!(r.status(), RiderStatus::Waiting);
    }

    #[test]
    fn board_when_not_eligible_is_a_no_op() {
        let mut car = ScriptedCar::new(true, true);
        let mut r = waiting_rider(&mut car);
        assert_eq!(r.board(&mut car), Ok(BoardOutcome::Unavailable));
        assert_eq!(r.status(), RiderStatus::Waiting);
        assert!(!car.calls().contains(&Call::Board));
    }

    #[test]
    fn board_before_calling_rejected() {
        let mut car = ScriptedCar::new(true, false);
        let mut r = Rider::new(1, 10);
        assert_eq!(
            r.board(&mut car),
            Err(RiderError::InvalidTransition {
                from: RiderStatus::Init,
                to:   RiderStatus::Aboard,
            })
        );
        assert!(car.calls().is_empty());
    }

    #[test]
    fn alight_calls_car_and_arrives() {
        let mut car = ScriptedCar::new(true, false);
        let mut r = waiting_rider(&mut car);
        r.board(&mut car).unwrap();
        assert_eq!(r.alight(&mut car), Ok(AlightOutcome::Alighted));
        assert_eq!(r.status(), RiderStatus::Arrived);
        assert!(r.is_arrived());
        assert_eq!(car.calls().last(), Some(&Call::Alight));
    }

    #[test]
    fn alight_when_not_eligible_is_a_no_op() {
        let mut car = ScriptedCar::new(true, false);
        let mut r = waiting_rider(&mut car);
        r.board(&mut car).unwrap();
        car.boarding = false;
        assert_eq!(r.alight(&mut car), Ok(AlightOutcome::Unavailable));
        assert_eq!(r.status(), RiderStatus::Aboard);
        assert!(!car.calls().contains(&Call::Alight));
    }

    #[test]
    fn alight_while_waiting_rejected() {
        let mut car = ScriptedCar::new(true, false);
        let mut r = waiting_rider(&mut car);
        assert!(matches!(
            r.alight(&mut car),
            Err(RiderError::InvalidTransition { from: RiderStatus::Waiting, .. })
        ));
    }

    #[test]
    fn pickup_after_boarding_rejected() {
        let mut car = ScriptedCar::new(true, false);
        let mut r = waiting_rider(&mut car);
        r.board(&mut car).unwrap();
        assert!(matches!(
            r.request_pickup(&mut car),
            Err(RiderError::InvalidTransition { from: RiderStatus::Aboard, to: RiderStatus::Waiting })
        ));
    }
}

// ── Against a real car ────────────────────────────────────────────────────────

#[cfg(test)]
mod real_car_tests {
    use super::*;

    #[test]
    fn full_trip() {
        let mut car = Car::new((1, 10), 5).unwrap();
        let mut r = Rider::new(3, 1);

        r.request_pickup(&mut car).unwrap();
        let mut ticks = 0;
        while !r.can_board(&car) {
            car.step();
            ticks += 1;
            assert!(ticks < 20, "car never opened at the origin");
        }
        assert_eq!(r.board(&mut car), Ok(BoardOutcome::Boarded));
        r.request_destination(&mut car).unwrap();
        assert_eq!(car.occupancy(), 1);

        while !r.can_alight(&car) {
            car.step();
            ticks += 1;
            assert!(ticks < 40, "car never opened at the destination");
        }
        assert_eq!(r.alight(&mut car), Ok(AlightOutcome::Alighted));
        assert!(car.is_empty());
        assert!(r.is_arrived());
    }

    #[test]
    fn last_place_goes_to_first_rider() {
        let mut car = Car::new((1, 10), 1).unwrap();
        let mut a = Rider::new(1, 5);
        let mut b = Rider::new(1, 6);
        a.request_pickup(&mut car).unwrap();
        b.request_pickup(&mut car).unwrap();
        car.step();

        assert_eq!(a.board(&mut car), Ok(BoardOutcome::Boarded));
        assert!(!b.can_board(&car));
        assert_eq!(b.board(&mut car), Ok(BoardOutcome::Unavailable));
        assert_eq!(b.status(), RiderStatus::Waiting);
    }
}
