//! The `Bus` record.

use bf_core::{BusId, GeoPoint};
use bf_graph::Stop;

/// One bus of the fleet.
///
/// Owned exclusively by the simulation context; mutated only by motion
/// control and the passenger-exchange step.  The route is fixed for the
/// bus's lifetime — every deployed bus carries the full stop list of the
/// line and starts at index 0.
#[derive(Clone, Debug)]
pub struct Bus {
    pub id: BusId,
    /// Current geographic position.  Interpolated while moving; equals the
    /// current stop's position while idle.
    pub position: GeoPoint,
    pub capacity: u32,
    /// Always within `0..=capacity`.
    pub passengers: u32,
    /// The ordered stops this bus serves.  Never mutated after deploy.
    pub route: Vec<Stop>,
    /// Index into `route` of the stop the bus is at (or last departed).
    pub stop_index: usize,
}

impl Bus {
    /// Deploy a bus at the first stop of `route` with no passengers.
    pub fn new(id: BusId, route: Vec<Stop>, capacity: u32) -> Self {
        let position = route[0].position;
        Self {
            id,
            position,
            capacity,
            passengers: 0,
            route,
            stop_index: 0,
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.passengers >= self.capacity
    }

    /// The stop at the bus's current route index.
    #[inline]
    pub fn current_stop(&self) -> &Stop {
        &self.route[self.stop_index]
    }

    /// `true` once the bus sits at the line's terminal stop.
    #[inline]
    pub fn at_terminal(&self, terminal_id: &str) -> bool {
        self.current_stop().id == terminal_id
    }

    /// Board one passenger.  No-op (returns `false`) at capacity.
    pub fn board_one(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        self.passengers += 1;
        true
    }

    /// Alight one passenger.  No-op (returns `false`) when empty.
    pub fn alight_one(&mut self) -> bool {
        if self.passengers == 0 {
            return false;
        }
        self.passengers -= 1;
        true
    }
}
