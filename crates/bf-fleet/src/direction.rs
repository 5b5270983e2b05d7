//! `DirectionTracker` — forward/reverse traversal direction per bus.
//!
//! Every bus starts moving forward along the line, including buses deployed
//! mid-run.  Direction flips only when a move is requested at a route end:
//! forward at the last stop, or backward at the first.  A bus parked at the
//! terminal never requests another move, so it never flips again.

use std::collections::HashMap;

use bf_core::BusId;

/// Lazy per-bus direction state.  Entries are created on first reference
/// and default to forward.
#[derive(Debug, Default)]
pub struct DirectionTracker {
    forward: HashMap<BusId, bool>,
}

impl DirectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current direction for `bus`, creating the forward-default entry on
    /// first reference.
    pub fn is_forward(&mut self, bus: BusId) -> bool {
        *self.forward.entry(bus).or_insert(true)
    }

    /// Reverse the direction for `bus`.
    pub fn flip(&mut self, bus: BusId) {
        let entry = self.forward.entry(bus).or_insert(true);
        *entry = !*entry;
    }

    /// Read-only peek (no entry created) for status surfaces.
    pub fn peek(&self, bus: BusId) -> bool {
        self.forward.get(&bus).copied().unwrap_or(true)
    }
}
