//! `VisitTracker` — bridges `SimObserver` to the station store.

use bf_core::BusId;
use bf_fleet::ExchangeOutcome;
use bf_graph::Stop;
use bf_sim::SimObserver;

use crate::{StationStore, StoreError, StoreResult};

/// A [`SimObserver`] that writes every arrival and auto-mode toggle through
/// to a [`StationStore`].
///
/// Observer methods have no return value, so write errors are latched
/// internally; check [`take_error`][Self::take_error] after the run.  Only
/// the first error is kept.
pub struct VisitTracker {
    store: StationStore,
    last_error: Option<StoreError>,
}

impl VisitTracker {
    pub fn new(store: StationStore) -> Self {
        Self {
            store,
            last_error: None,
        }
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<StoreError> {
        self.last_error.take()
    }

    /// Borrow the underlying store (e.g. to read counts mid-run).
    pub fn store(&self) -> &StationStore {
        &self.store
    }

    /// Unwrap the inner store.
    pub fn into_store(self) -> StationStore {
        self.store
    }

    fn latch(&mut self, result: StoreResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl SimObserver for VisitTracker {
    fn on_arrival(&mut self, _bus: BusId, stop: &Stop, _exchange: &ExchangeOutcome) {
        let result = self.store.increment(&stop.name);
        self.latch(result);
    }

    fn on_auto_mode(&mut self, enabled: bool) {
        let result = self.store.set_automation(enabled);
        self.latch(result);
    }
}
