//! The `Car` struct and its per-tick dispatch step.

use lift_core::{Floor, FloorRange};

use crate::{CarError, CarResult, CarStatus, Direction, FloorRequests, StepOutcome};

/// A single elevator car.
///
/// The car is the only source of truth in the simulation.  It knows nothing
/// about individual riders: only its aggregate `occupancy` and two request
/// sets.
///
/// - **pickups**: floors called from outside.  Served only while the car has
///   room, so a full car never opens for a rider it could not take.
/// - **destinations**: floors selected from inside.  Always served.
///
/// All mutation goes through the methods below; every reachable state keeps
/// `position` inside `floors` and `occupancy <= capacity`.
#[derive(Clone, Debug)]
pub struct Car {
    floors:       FloorRange,
    capacity:     u32,
    position:     Floor,
    direction:    Direction,
    status:       CarStatus,
    occupancy:    u32,
    pickups:      FloorRequests,
    destinations: FloorRequests,
}

impl Car {
    /// Create an idle, empty car at the lowest floor of `floors`, facing down.
    ///
    /// Fails with [`CarError::InvalidConfiguration`] if `floors.0 > floors.1`
    /// or `capacity == 0`.
    pub fn new(floors: (Floor, Floor), capacity: u32) -> CarResult<Self> {
        let floors = FloorRange::try_from(floors)
            .map_err(|e| CarError::InvalidConfiguration(e.to_string()))?;
        if capacity == 0 {
            return Err(CarError::InvalidConfiguration("capacity must be positive".into()));
        }
        Ok(Self {
            floors,
            capacity,
            position:     floors.min(),
            direction:    Direction::Down,
            status:       CarStatus::Idle,
            occupancy:    0,
            pickups:      FloorRequests::new(),
            destinations: FloorRequests::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn floors(&self) -> FloorRange {
        self.floors
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn position(&self) -> Floor {
        self.position
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn status(&self) -> CarStatus {
        self.status
    }

    #[inline]
    pub fn occupancy(&self) -> u32 {
        self.occupancy
    }

    /// Floors called from outside the car.
    pub fn pickups(&self) -> &FloorRequests {
        &self.pickups
    }

    /// Floors selected from inside the car.
    pub fn destinations(&self) -> &FloorRequests {
        &self.destinations
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` iff the doors are open at `floor`.
    #[inline]
    pub fn is_boarding_at(&self, floor: Floor) -> bool {
        self.status == CarStatus::Boarding && self.position == floor
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupancy == self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupancy == 0
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register a call from outside at `floor`.  Idempotent.
    pub fn register_pickup(&mut self, floor: Floor) -> CarResult<()> {
        self.check_floor(floor)?;
        self.pickups.insert(floor);
        Ok(())
    }

    /// Register a destination selected from inside.  Idempotent.
    pub fn register_destination(&mut self, floor: Floor) -> CarResult<()> {
        self.check_floor(floor)?;
        self.destinations.insert(floor);
        Ok(())
    }

    // ── Boarding transitions ──────────────────────────────────────────────

    /// One rider gets in.
    pub fn board(&mut self) -> CarResult<()> {
        if self.is_full() {
            return Err(CarError::CarFull);
        }
        if self.status != CarStatus::Boarding {
            return Err(CarError::NotBoarding);
        }
        self.occupancy += 1;
        Ok(())
    }

    /// One rider gets out.
    pub fn alight(&mut self) -> CarResult<()> {
        if self.is_empty() {
            return Err(CarError::CarEmpty);
        }
        if self.status != CarStatus::Boarding {
            return Err(CarError::NotBoarding);
        }
        self.occupancy -= 1;
        Ok(())
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Advance the car by one tick.  Performs exactly one action, in
    /// priority order:
    ///
    /// 1. No requests at all: become IDLE.
    /// 2. Stop condition holds here: become BOARDING and clear this floor
    ///    from both request sets.
    /// 3. Not yet MOVING: become MOVING without changing floor.
    /// 4. MOVING: reverse if nothing serviceable lies ahead, then move one
    ///    floor in the (possibly new) direction.
    ///
    /// When requests exist but none is serviceable (a full car with only
    /// pickups pending) steps 3 and 4 are replaced by parking in IDLE; see
    /// [`StepOutcome::Held`].
    pub fn step(&mut self) -> StepOutcome {
        if self.pickups.is_empty() && self.destinations.is_empty() {
            self.status = CarStatus::Idle;
            return StepOutcome::Idle;
        }

        if self.should_stop_here() {
            self.status = CarStatus::Boarding;
            let floor = self.position;
            let pickup = self.pickups.remove(floor);
            let dropoff = self.destinations.remove(floor);
            return StepOutcome::Stopped { floor, pickup, dropoff };
        }

        let ahead = self.has_pending(self.direction);
        if !ahead && !self.has_pending(self.direction.reversed()) {
            self.status = CarStatus::Idle;
            return StepOutcome::Held;
        }

        if self.status != CarStatus::Moving {
            self.status = CarStatus::Moving;
            return StepOutcome::Started;
        }

        // Something serviceable exists strictly ahead or strictly behind
        // (the current floor is ruled out by the stop check), so the move
        // below never leaves the range.
        let reversed = !ahead;
        if reversed {
            self.direction = self.direction.reversed();
        }
        let from = self.position;
        self.position += self.direction.delta();
        debug_assert!(self.floors.contains(self.position));

        StepOutcome::Moved { from, to: self.position, reversed }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check_floor(&self, floor: Floor) -> CarResult<()> {
        if !self.floors.contains(floor) {
            return Err(CarError::OutOfRangeFloor { floor, range: self.floors });
        }
        Ok(())
    }

    fn should_stop_here(&self) -> bool {
        self.destinations.contains(self.position)
            || (!self.is_full() && self.pickups.contains(self.position))
    }

    /// Any serviceable request at or beyond the current floor in `direction`.
    /// Pickups only count while there is room.
    fn has_pending(&self, direction: Direction) -> bool {
        let pos = self.position;
        let serve_pickups = !self.is_full();
        match direction {
            Direction::Up => {
                self.destinations.any_at_or_above(pos)
                    || (serve_pickups && self.pickups.any_at_or_above(pos))
            }
            Direction::Down => {
                self.destinations.any_at_or_below(pos)
                    || (serve_pickups && self.pickups.any_at_or_below(pos))
            }
        }
    }
}
