//! Simulation observer trait for progress reporting and data collection.

use bf_core::{BusId, Tick};
use bf_fleet::ExchangeOutcome;
use bf_graph::Stop;

/// Callbacks invoked by [`TransitSim`][crate::TransitSim] at key points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — arrival printer
///
/// ```rust,ignore
/// struct ArrivalPrinter;
///
/// impl SimObserver for ArrivalPrinter {
///     fn on_arrival(&mut self, bus: BusId, stop: &Stop, exchange: &ExchangeOutcome) {
///         println!("{bus} reached {}: +{} −{}", stop.name, exchange.boarded, exchange.alighted);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called once per bus arrival, after the passenger exchange ran.
    fn on_arrival(&mut self, _bus: BusId, _stop: &Stop, _exchange: &ExchangeOutcome) {}

    /// Called when the scheduler deploys a new bus.  `fleet_size` is the
    /// size *after* the deployment.
    fn on_deploy(&mut self, _bus: BusId, _fleet_size: usize) {}

    /// Called when auto mode is toggled.
    fn on_auto_mode(&mut self, _enabled: bool) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to tick the
/// simulation but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
