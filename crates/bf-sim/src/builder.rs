//! Fluent builder for constructing a [`TransitSim`].

use bf_fleet::{BusStore, DirectionTracker};
use bf_graph::{Line, PathEngine, StopGraphBuilder};
use bf_motion::MotionController;
use bf_route::GeometryProvider;

use bf_core::SimConfig;

use crate::{AutoScheduler, SimError, SimResult, TransitSim};

/// Fluent builder for [`TransitSim<E, G>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — cadences, velocities, fleet bounds, seed
/// - [`Line`] — the validated stop sequence (construct via [`Line::new`])
/// - `E: PathEngine` — the search algorithm (e.g. [`bf_graph::DijkstraEngine`])
/// - `G: GeometryProvider` — the road-geometry source (e.g.
///   [`bf_route::HttpGeometryProvider`] or [`bf_route::OfflineProvider`])
///
/// # Example
///
/// ```rust,ignore
/// let line = Line::new(stops, "bellandur")?;
/// let mut sim = SimBuilder::new(SimConfig::default(), line, DijkstraEngine, OfflineProvider)
///     .build()?;
/// sim.toggle_auto_mode(&mut NoopObserver);
/// sim.run_ticks(1_000, &mut NoopObserver);
/// ```
pub struct SimBuilder<E: PathEngine, G: GeometryProvider> {
    config: SimConfig,
    line: Line,
    engine: E,
    provider: G,
    initial_buses: usize,
}

impl<E: PathEngine, G: GeometryProvider> SimBuilder<E, G> {
    /// Create a builder with all required inputs.  One bus is seated at the
    /// first stop by default.
    pub fn new(config: SimConfig, line: Line, engine: E, provider: G) -> Self {
        Self {
            config,
            line,
            engine,
            provider,
            initial_buses: 1,
        }
    }

    /// Start with `n` buses instead of one.  Must not exceed the config's
    /// `max_fleet_size`.
    pub fn initial_buses(mut self, n: usize) -> Self {
        self.initial_buses = n;
        self
    }

    /// Validate the config, build the stop graph, and seat the initial
    /// fleet at the first stop.
    pub fn build(self) -> SimResult<TransitSim<E, G>> {
        self.config.validate()?;
        if self.initial_buses > self.config.max_fleet_size {
            return Err(SimError::FleetTooLarge {
                requested: self.initial_buses,
                max: self.config.max_fleet_size,
            });
        }

        let graph = StopGraphBuilder::build(&self.line);

        let mut buses = BusStore::new(self.config.seed);
        for _ in 0..self.initial_buses.max(1) {
            buses.deploy(self.line.stops().to_vec(), self.config.bus_capacity);
        }

        Ok(TransitSim {
            clock: self.config.make_clock(),
            scheduler: AutoScheduler::new(&self.config),
            config: self.config,
            line: self.line,
            graph,
            buses,
            directions: DirectionTracker::new(),
            motion: MotionController::new(self.engine, self.provider),
        })
    }
}
