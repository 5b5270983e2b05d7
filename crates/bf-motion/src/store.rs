//! `MotionStore` — lazy per-bus motion state entries.

use std::collections::HashMap;

use bf_core::BusId;

use crate::{MotionPhase, MotionState};

/// Motion state keyed by bus id.
///
/// Entries are created on first reference and persist for the bus's
/// lifetime (they are merely reset to idle between moves, never removed).
#[derive(Debug, Default)]
pub struct MotionStore {
    states: HashMap<BusId, MotionState>,
}

impl MotionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable state for `bus`, creating an idle entry on first reference.
    pub fn state(&mut self, bus: BusId) -> &mut MotionState {
        self.states.entry(bus).or_default()
    }

    /// Existing state for `bus`, if any.  Does not create an entry.
    pub fn get(&self, bus: BusId) -> Option<&MotionState> {
        self.states.get(&bus)
    }

    /// Existing mutable state for `bus`.  Does not create an entry.
    pub fn get_mut(&mut self, bus: BusId) -> Option<&mut MotionState> {
        self.states.get_mut(&bus)
    }

    /// Current phase for `bus`; buses without an entry are idle.
    pub fn phase(&self, bus: BusId) -> MotionPhase {
        self.states
            .get(&bus)
            .map(|s| s.phase)
            .unwrap_or(MotionPhase::Idle)
    }

    /// `true` if any bus is moving or computing a route — the scheduler
    /// holds its movement cycle while this is the case.
    pub fn any_active(&self) -> bool {
        self.states
            .values()
            .any(|s| s.phase != MotionPhase::Idle)
    }
}
