//! The `Rider` state machine.

use lift_car::{CarError, CarHandle};
use lift_core::Floor;

use crate::{AlightOutcome, BoardOutcome, RiderError, RiderResult, RiderStatus};

/// One trip from `origin` to `destination`.
///
/// No validation happens here: the floors are checked by the car when the
/// rider registers them, and keeping `origin != destination` is the driver's
/// job.
///
/// # Misuse
///
/// - Calling an operation from a status the transition table forbids fails
///   with [`RiderError::InvalidTransition`] and changes nothing.
/// - Calling [`board`][Self::board] / [`alight`][Self::alight] when
///   [`can_board`][Self::can_board] / [`can_alight`][Self::can_alight] is
///   false is a no-op reported as `Unavailable`; the car is not touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rider {
    origin:      Floor,
    destination: Floor,
    status:      RiderStatus,
}

impl Rider {
    pub fn new(origin: Floor, destination: Floor) -> Self {
        Self { origin, destination, status: RiderStatus::Init }
    }

    #[inline]
    pub fn origin(&self) -> Floor {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> Floor {
        self.destination
    }

    #[inline]
    pub fn status(&self) -> RiderStatus {
        self.status
    }

    /// `true` once the rider has left the car at its destination.
    #[inline]
    pub fn is_arrived(&self) -> bool {
        self.status.is_terminal()
    }

    // ── Requests ──────────────────────────────────────────────────────────

    /// Call the car to the origin floor and start waiting.
    ///
    /// Valid from `Init`, and again from `Waiting` as a re-attempt.
    pub fn request_pickup<C: CarHandle + ?Sized>(&mut self, car: &mut C) -> RiderResult<()> {
        self.check_transition(RiderStatus::Waiting)?;
        car.register_pickup(self.origin)?;
        self.status = RiderStatus::Waiting;
        Ok(())
    }

    /// Select the destination floor.  Call right after a successful board.
    pub fn request_destination<C: CarHandle + ?Sized>(&self, car: &mut C) -> RiderResult<()> {
        if self.status != RiderStatus::Aboard {
            return Err(RiderError::NotAboard(self.status));
        }
        car.register_destination(self.destination)?;
        Ok(())
    }

    // ── Eligibility ───────────────────────────────────────────────────────

    /// The car is boarding at the origin floor and has room.
    pub fn can_board<C: CarHandle + ?Sized>(&self, car: &C) -> bool {
        car.is_boarding_at(self.origin) && !car.is_full()
    }

    /// The car is boarding at the destination floor.
    pub fn can_alight<C: CarHandle + ?Sized>(&self, car: &C) -> bool {
        car.is_boarding_at(self.destination)
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Get into the car.
    ///
    /// If the car turns out to be full (another rider got the last place this
    /// tick) the rider calls the car again and stays `Waiting`.
    pub fn board<C: CarHandle + ?Sized>(&mut self, car: &mut C) -> RiderResult<BoardOutcome> {
        self.check_transition(RiderStatus::Aboard)?;
        if !self.can_board(&*car) {
            return Ok(BoardOutcome::Unavailable);
        }
        match car.board() {
            Ok(()) => {
                self.status = RiderStatus::Aboard;
                Ok(BoardOutcome::Boarded)
            }
            Err(CarError::CarFull) => {
                self.request_pickup(car)?;
                Ok(BoardOutcome::Requeued)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Leave the car at the destination floor.
    pub fn alight<C: CarHandle + ?Sized>(&mut self, car: &mut C) -> RiderResult<AlightOutcome> {
        self.check_transition(RiderStatus::Arrived)?;
        if !self.can_alight(&*car) {
            return Ok(AlightOutcome::Unavailable);
        }
        car.alight()?;
        self.status = RiderStatus::Arrived;
        Ok(AlightOutcome::Alighted)
    }

    fn check_transition(&self, next: RiderStatus) -> RiderResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(RiderError::InvalidTransition { from: self.status, to: next });
        }
        Ok(())
    }
}
