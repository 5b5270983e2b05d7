//! The `TransitSim` context object and its tick loop.

use tracing::{info, warn};

use bf_core::{BusId, SimClock, SimConfig, Tick};
use bf_fleet::{exchange_passengers, BusStore, DirectionTracker};
use bf_graph::{Line, PathEngine, StopGraph};
use bf_motion::{MotionController, MotionState, MoveOutcome};
use bf_route::GeometryProvider;

use crate::{AutoScheduler, SimObserver};

/// The single simulation context: every piece of shared mutable state lives
/// here and is mutated only through these methods.
///
/// # Tick anatomy
///
/// 1. **Motion**: every `Moving` bus advances one interpolation step; buses
///    that arrive get their passenger exchange applied and observers
///    notified.
/// 2. **Scheduler** (auto mode only): stuck-guard recovery, one staggered
///    move request at most, the movement cycle, and the deployment
///    countdown.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct TransitSim<E: PathEngine, G: GeometryProvider> {
    /// Global configuration (cadences, velocities, fleet bounds, seed).
    pub config: SimConfig,

    /// Simulation clock — one tick per interpolation step.
    pub clock: SimClock,

    /// The stop sequence and terminal designation.  Immutable.
    pub line: Line,

    /// Weighted stop graph.  Built once from the line; read-only after.
    pub graph: StopGraph,

    /// The fleet and its per-bus RNG streams.
    pub buses: BusStore,

    /// Forward/reverse travel direction per bus.
    pub directions: DirectionTracker,

    /// Motion state machine, path engine, and waypoint resolver.
    pub motion: MotionController<E, G>,

    /// Auto-mode timers, move queue, and deploy guard.
    pub scheduler: AutoScheduler,
}

impl<E: PathEngine, G: GeometryProvider> TransitSim<E, G> {
    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the simulation by one interpolation tick.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        self.process_arrivals(observer);

        if self.scheduler.enabled() {
            self.drive_scheduler(now, observer);
        }

        observer.on_tick_end(now);
        self.clock.advance();
    }

    /// Run exactly `n` ticks.  Convenience for tests and demos.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick(observer);
        }
    }

    /// Advance motion and apply the passenger exchange for every arrival.
    fn process_arrivals<O: SimObserver>(&mut self, observer: &mut O) {
        let arrivals = self.motion.tick(&mut self.buses);
        if arrivals.is_empty() {
            return;
        }
        let terminal_id = self.line.terminal().id.clone();
        for id in arrivals {
            let Some((bus, rng)) = self.buses.bus_and_rng_mut(id) else {
                continue;
            };
            let exchange = exchange_passengers(bus, &terminal_id, rng);
            let stop = bus.current_stop().clone();
            observer.on_arrival(id, &stop, &exchange);
        }
    }

    /// One tick of auto-mode work: guard recovery, staggered moves, the
    /// movement cycle, and the deployment countdown.
    fn drive_scheduler<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        // Stuck-guard recovery: a deployment that never cleared its guard
        // must not block the countdown forever.
        if self.scheduler.deploy_stuck(now) {
            warn!(%now, "deployment guard exceeded safety timeout, clearing");
            self.scheduler.finish_deploy();
        }

        // Drain at most one staggered move request per tick.
        if let Some(id) = self.scheduler.next_pending() {
            self.request_move(id);
        }

        // Movement cycle: only starts a fresh round once the fleet is quiet
        // and the previous round fully drained.
        if self.scheduler.movement_cycle_due()
            && !self.motion.store.any_active()
            && !self.scheduler.has_pending()
        {
            let terminal_id = self.line.terminal().id.clone();
            let movable: Vec<BusId> = self
                .buses
                .iter()
                .filter(|bus| !bus.at_terminal(&terminal_id))
                .map(|bus| bus.id)
                .collect();
            self.scheduler.queue_moves(movable);
        }

        // Deployment countdown (1 Hz).
        if self.scheduler.countdown_tick() {
            self.try_deploy(now, observer);
        }
    }

    /// Deploy one bus if the fleet cap and the guard allow it.
    fn try_deploy<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        if self.buses.len() >= self.config.max_fleet_size || self.scheduler.deploying() {
            return;
        }
        self.scheduler.begin_deploy(now);
        let id = self
            .buses
            .deploy(self.line.stops().to_vec(), self.config.bus_capacity);
        info!(bus = %id, fleet = self.buses.len(), "deployed new bus");
        observer.on_deploy(id, self.buses.len());
        self.scheduler.finish_deploy();
    }

    // ── Manual control surface ────────────────────────────────────────────

    /// Board one passenger onto `bus`.
    ///
    /// No-op (`false`) for an unknown bus, a full bus, or a bus parked at
    /// the terminal.
    pub fn add_passenger(&mut self, bus: BusId) -> bool {
        let terminal_id = self.line.terminal().id.clone();
        match self.buses.get_mut(bus) {
            Some(bus) if !bus.at_terminal(&terminal_id) => bus.board_one(),
            _ => false,
        }
    }

    /// Alight one passenger from `bus`.  No-op (`false`) for an unknown or
    /// empty bus.
    pub fn remove_passenger(&mut self, bus: BusId) -> bool {
        match self.buses.get_mut(bus) {
            Some(bus) => bus.alight_one(),
            None => false,
        }
    }

    /// Request the next hop for `bus`.  `None` for an unknown bus; the
    /// usual idle/terminal guards apply otherwise.
    pub fn request_move(&mut self, bus: BusId) -> Option<MoveOutcome> {
        let bus = self.buses.get_mut(bus)?;
        Some(self.motion.request_move(
            bus,
            &mut self.directions,
            &self.line,
            &self.graph,
            &self.config,
        ))
    }

    /// Flip auto mode.  Either direction resets the deployment countdown
    /// and clears the scheduler's transient state; deployed buses remain.
    pub fn toggle_auto_mode<O: SimObserver>(&mut self, observer: &mut O) -> bool {
        let enabled = !self.scheduler.enabled();
        self.scheduler.set_enabled(enabled);
        info!(enabled, "auto mode toggled");
        observer.on_auto_mode(enabled);
        enabled
    }

    // ── Read surface ──────────────────────────────────────────────────────

    pub fn auto_mode(&self) -> bool {
        self.scheduler.enabled()
    }

    pub fn fleet_size(&self) -> usize {
        self.buses.len()
    }

    /// Seconds left until the next deployment attempt.
    pub fn deployment_countdown_secs(&self) -> u32 {
        self.scheduler.countdown_secs()
    }

    /// Motion state for `bus`, if it has ever been referenced.
    pub fn motion_state(&self, bus: BusId) -> Option<&MotionState> {
        self.motion.store.get(bus)
    }
}
