//! `MotionController` — decides the next hop and drives interpolation.
//!
//! The controller owns the path engine, the waypoint resolver, and the
//! motion store.  It exposes two operations:
//!
//! - [`request_move`][MotionController::request_move] runs the decision
//!   tree for one bus (direction handling, express-vs-regular, waypoint
//!   materialization) and transitions it to `Moving`;
//! - [`tick`][MotionController::tick] advances every `Moving` bus by one
//!   interpolation step and reports arrivals.
//!
//! Waypoint resolution cannot fail (the resolver falls back to a straight
//! line), so a requested move always runs to completion — there is no
//! cancellation path.

use bf_core::{geo::polyline_length, BusId, GeoPoint, SimConfig};
use bf_fleet::{Bus, BusStore, DirectionTracker};
use bf_graph::{Line, PathEngine, Stop, StopGraph};
use bf_route::{GeometryProvider, WaypointResolver};

use crate::{MotionPhase, MotionState, MotionStore};

// ── Outcome types ─────────────────────────────────────────────────────────────

/// Why a move request was ignored.  Ignoring is normal operation, not an
/// error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The bus is already moving or computing a route.
    NotIdle,
    /// The bus sits at the terminal stop and never moves again.
    AtTerminal,
}

/// Result of a move request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Started {
        express: bool,
        target_index: usize,
    },
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    pub fn started(&self) -> bool {
        matches!(self, MoveOutcome::Started { .. })
    }
}

// ── MotionController ──────────────────────────────────────────────────────────

/// Wraps a [`PathEngine`] and [`WaypointResolver`] plus all per-bus motion
/// state.
///
/// Swap the type parameters to change the search algorithm or the geometry
/// source with no runtime overhead.
pub struct MotionController<E: PathEngine, G: GeometryProvider> {
    pub engine: E,
    pub resolver: WaypointResolver<G>,
    pub store: MotionStore,
}

impl<E: PathEngine, G: GeometryProvider> MotionController<E, G> {
    pub fn new(engine: E, provider: G) -> Self {
        Self {
            engine,
            resolver: WaypointResolver::new(provider),
            store: MotionStore::new(),
        }
    }

    /// Start the next hop for `bus`, if it may move.
    ///
    /// No-ops when the bus is not idle or is parked at the terminal.  The
    /// direction flips here — before the target is computed — when the bus
    /// would otherwise walk off either end of its route.
    pub fn request_move(
        &mut self,
        bus: &mut Bus,
        directions: &mut DirectionTracker,
        line: &Line,
        graph: &StopGraph,
        config: &SimConfig,
    ) -> MoveOutcome {
        if self.store.phase(bus.id) != MotionPhase::Idle {
            return MoveOutcome::Ignored(IgnoreReason::NotIdle);
        }
        if bus.at_terminal(&line.terminal().id) {
            return MoveOutcome::Ignored(IgnoreReason::AtTerminal);
        }

        let last = bus.route.len() - 1;
        let mut forward = directions.is_forward(bus.id);
        if forward && bus.stop_index == last {
            directions.flip(bus.id);
            forward = false;
        } else if !forward && bus.stop_index == 0 {
            directions.flip(bus.id);
            forward = true;
        }

        // Adjacent stop in the travel direction, clamped to route bounds.
        let adjacent = if forward {
            (bus.stop_index + 1).min(last)
        } else {
            bus.stop_index.saturating_sub(1)
        };

        if bus.is_full() {
            self.store.state(bus.id).phase = MotionPhase::CalculatingRoute;

            let target = line
                .next_main_stop_index(bus.stop_index, forward)
                .unwrap_or(adjacent);
            let path_ids =
                self.engine
                    .find_path(graph, &bus.current_stop().id, &line.stop(target).id);
            let path_stops: Vec<&Stop> =
                path_ids.iter().filter_map(|id| line.get(id)).collect();
            let waypoints = if path_stops.len() >= 2 {
                self.resolver.resolve_path(&path_stops)
            } else {
                self.resolver.resolve_hop(bus.current_stop(), line.stop(target))
            };

            self.begin_move(bus.id, waypoints, target, true, config);
            MoveOutcome::Started { express: true, target_index: target }
        } else {
            let waypoints = self
                .resolver
                .resolve_hop(bus.current_stop(), line.stop(adjacent));

            self.begin_move(bus.id, waypoints, adjacent, false, config);
            MoveOutcome::Started { express: false, target_index: adjacent }
        }
    }

    /// Transition `bus` to `Moving` along `waypoints`.
    fn begin_move(
        &mut self,
        bus: BusId,
        waypoints: Vec<GeoPoint>,
        target_index: usize,
        express: bool,
        config: &SimConfig,
    ) {
        // A zero-length polyline (co-located stops) completes on the next
        // tick instead of dividing by zero.
        let path_length = polyline_length(&waypoints).max(f32::EPSILON);
        let state = self.store.state(bus);
        state.phase = MotionPhase::Moving;
        state.waypoints = waypoints;
        state.waypoint_index = 0;
        state.progress = 0.0;
        state.velocity = config.velocity(express);
        state.express = express;
        state.target_index = target_index;
        state.path_length = path_length;
    }

    /// Advance every `Moving` bus by one interpolation step.
    ///
    /// Returns the buses that arrived this tick, in deploy order, with
    /// their positions snapped to the final waypoint, their route index on
    /// the target stop, and their motion state reset to idle.  The caller
    /// applies the passenger exchange for each.
    pub fn tick(&mut self, buses: &mut BusStore) -> Vec<BusId> {
        let mut arrivals = Vec::new();
        let ids: Vec<BusId> = buses.ids().collect();

        for id in ids {
            let Some(state) = self.store.get_mut(id) else { continue };
            if state.phase != MotionPhase::Moving {
                continue;
            }
            let Some(bus) = buses.get_mut(id) else { continue };

            state.progress += state.velocity / state.path_length;

            if state.progress >= 1.0 {
                if let Some(&end) = state.waypoints.last() {
                    bus.position = end;
                }
                bus.stop_index = state.target_index;
                *state = MotionState::idle();
                arrivals.push(id);
            } else {
                state.waypoint_index = state.segment_at(state.progress);
                if let Some(position) = state.position_at(state.progress) {
                    bus.position = position;
                }
            }
        }
        arrivals
    }
}
