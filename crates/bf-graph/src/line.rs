//! `Line` — the validated, ordered stop sequence plus its terminal.
//!
//! The line owns the topology questions motion control asks: "which stop is
//! next in this direction?", "where is the next main stop?", "is this the
//! terminal?".  Keeping those scans here leaves the motion controller free
//! of index bookkeeping.

use bf_core::GeoPoint;

use crate::{LineError, Stop};

/// An ordered sequence of stops with one designated terminal stop.
///
/// Immutable after construction.  The terminal must exist on the line and be
/// a main stop; buses that reach it never move again.
#[derive(Clone, Debug)]
pub struct Line {
    stops: Vec<Stop>,
    terminal_index: usize,
}

impl Line {
    /// Validate and build a line.
    ///
    /// # Errors
    ///
    /// - [`LineError::TooFewStops`] for fewer than two stops,
    /// - [`LineError::DuplicateStopId`] if two stops share an id,
    /// - [`LineError::TerminalNotFound`] / [`LineError::TerminalNotMain`] if
    ///   the terminal id is missing or flags an intermediate stop.
    pub fn new(stops: Vec<Stop>, terminal_id: &str) -> Result<Self, LineError> {
        if stops.len() < 2 {
            return Err(LineError::TooFewStops);
        }
        for (i, stop) in stops.iter().enumerate() {
            if stops[..i].iter().any(|other| other.id == stop.id) {
                return Err(LineError::DuplicateStopId(stop.id.clone()));
            }
        }
        let terminal_index = stops
            .iter()
            .position(|s| s.id == terminal_id)
            .ok_or_else(|| LineError::TerminalNotFound(terminal_id.to_owned()))?;
        if !stops[terminal_index].is_main_stop {
            return Err(LineError::TerminalNotMain(terminal_id.to_owned()));
        }
        Ok(Self { stops, terminal_index })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The stop at `index`.  Panics on out-of-range, like slice indexing —
    /// indices held by buses are always in range by construction.
    pub fn stop(&self, index: usize) -> &Stop {
        &self.stops[index]
    }

    /// Look up a stop by id.
    pub fn get(&self, id: &str) -> Option<&Stop> {
        self.stops.iter().find(|s| s.id == id)
    }

    /// Position of `id` in the line ordering.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.stops.iter().position(|s| s.id == id)
    }

    pub fn terminal(&self) -> &Stop {
        &self.stops[self.terminal_index]
    }

    pub fn terminal_index(&self) -> usize {
        self.terminal_index
    }

    pub fn is_terminal(&self, index: usize) -> bool {
        index == self.terminal_index
    }

    /// Where newly deployed buses appear: the first stop of the line.
    pub fn spawn_position(&self) -> GeoPoint {
        self.stops[0].position
    }

    // ── Scans used by motion control ──────────────────────────────────────

    /// Index of the next main stop strictly after `from` in the given
    /// direction.  If none lies ahead, the scan wraps to the opposite
    /// direction; `None` only when no other main stop exists at all.
    pub fn next_main_stop_index(&self, from: usize, forward: bool) -> Option<usize> {
        self.scan_main(from, forward)
            .or_else(|| self.scan_main(from, !forward))
    }

    fn scan_main(&self, from: usize, forward: bool) -> Option<usize> {
        if forward {
            (from + 1..self.stops.len()).find(|&i| self.stops[i].is_main_stop)
        } else {
            (0..from).rev().find(|&i| self.stops[i].is_main_stop)
        }
    }

    /// The intermediate stop immediately preceding the terminal, if any.
    ///
    /// This pair gets the discounted near-terminal edge in the graph build.
    pub fn terminal_approach_index(&self) -> Option<usize> {
        self.terminal_index
            .checked_sub(1)
            .filter(|&i| !self.stops[i].is_main_stop)
    }
}
