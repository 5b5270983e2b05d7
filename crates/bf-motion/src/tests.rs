//! Unit tests for bf-motion.
//!
//! All tests run against the offline geometry provider, so every hop is a
//! straight line and path lengths are exact degree arithmetic.

use bf_core::{GeoPoint, SimConfig};
use bf_fleet::{BusStore, DirectionTracker};
use bf_graph::{DijkstraEngine, Line, Stop, StopGraph, StopGraphBuilder};
use bf_route::OfflineProvider;

use crate::{IgnoreReason, MotionController, MotionPhase, MotionState, MoveOutcome};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// a(main) — x1 — x2 — b(main) — x3 — c(main, terminal), 1° spacing.
fn line() -> Line {
    Line::new(
        vec![
            Stop::main("a", "Alpha", 0.0, 0.0),
            Stop::intermediate("x1", "First", 0.0, 1.0),
            Stop::intermediate("x2", "Second", 0.0, 2.0),
            Stop::main("b", "Beta", 0.0, 3.0),
            Stop::intermediate("x3", "Third", 0.0, 4.0),
            Stop::main("c", "Gamma", 0.0, 5.0),
        ],
        "c",
    )
    .unwrap()
}

/// Velocity 0.25°/tick → a 1° hop takes 4 ticks.
fn config() -> SimConfig {
    SimConfig {
        base_velocity: 0.25,
        express_velocity_factor: 2.0,
        ..SimConfig::default()
    }
}

struct Fixture {
    line: Line,
    graph: StopGraph,
    config: SimConfig,
    buses: BusStore,
    directions: DirectionTracker,
    controller: MotionController<DijkstraEngine, OfflineProvider>,
}

impl Fixture {
    fn new() -> Self {
        let line = line();
        let graph = StopGraphBuilder::build(&line);
        let config = config();
        let mut buses = BusStore::new(config.seed);
        buses.deploy(line.stops().to_vec(), config.bus_capacity);
        Self {
            line,
            graph,
            config,
            buses,
            directions: DirectionTracker::new(),
            controller: MotionController::new(DijkstraEngine, OfflineProvider),
        }
    }

    fn request_move(&mut self, bus: bf_core::BusId) -> MoveOutcome {
        let bus_ref = self.buses.get_mut(bus).unwrap();
        self.controller.request_move(
            bus_ref,
            &mut self.directions,
            &self.line,
            &self.graph,
            &self.config,
        )
    }

    /// Tick until the fleet is quiet, returning arrivals in order.
    fn run_to_idle(&mut self) -> Vec<bf_core::BusId> {
        let mut arrivals = Vec::new();
        for _ in 0..10_000 {
            arrivals.extend(self.controller.tick(&mut self.buses));
            if !self.controller.store.any_active() {
                return arrivals;
            }
        }
        panic!("fleet never settled");
    }
}

const BUS: bf_core::BusId = bf_core::BusId(0);

// ── request_move guards ───────────────────────────────────────────────────────

#[test]
fn move_while_moving_is_ignored() {
    let mut fx = Fixture::new();
    assert!(fx.request_move(BUS).started());
    assert_eq!(
        fx.request_move(BUS),
        MoveOutcome::Ignored(IgnoreReason::NotIdle)
    );
}

#[test]
fn move_at_terminal_is_ignored() {
    let mut fx = Fixture::new();
    fx.buses.get_mut(BUS).unwrap().stop_index = 5; // terminal "c"
    assert_eq!(
        fx.request_move(BUS),
        MoveOutcome::Ignored(IgnoreReason::AtTerminal)
    );
    assert_eq!(fx.controller.store.phase(BUS), MotionPhase::Idle);
}

// ── Regular hops ──────────────────────────────────────────────────────────────

#[test]
fn regular_hop_targets_adjacent_stop() {
    let mut fx = Fixture::new();
    let outcome = fx.request_move(BUS);
    assert_eq!(
        outcome,
        MoveOutcome::Started { express: false, target_index: 1 }
    );
    let state = fx.controller.store.get(BUS).unwrap();
    assert_eq!(state.phase, MotionPhase::Moving);
    assert_eq!(state.waypoints.len(), 2);
    assert_eq!(state.velocity, fx.config.base_velocity);
}

#[test]
fn hop_takes_expected_tick_count() {
    let mut fx = Fixture::new();
    fx.request_move(BUS);
    // 1° at 0.25°/tick → arrival on the 4th tick.
    for _ in 0..3 {
        assert!(fx.controller.tick(&mut fx.buses).is_empty());
    }
    assert_eq!(fx.controller.tick(&mut fx.buses), vec![BUS]);
}

#[test]
fn arrival_updates_bus_and_resets_state() {
    let mut fx = Fixture::new();
    fx.request_move(BUS);
    let arrivals = fx.run_to_idle();
    assert_eq!(arrivals, vec![BUS]);

    let bus = fx.buses.get(BUS).unwrap();
    assert_eq!(bus.stop_index, 1);
    assert_eq!(bus.position, fx.line.stop(1).position);
    let state = fx.controller.store.get(BUS).unwrap();
    assert!(state.is_idle());
    assert_eq!(state.progress, 0.0);
}

#[test]
fn position_advances_monotonically_along_hop() {
    let mut fx = Fixture::new();
    fx.request_move(BUS);
    let mut last_lng = fx.buses.get(BUS).unwrap().position.lng;
    loop {
        let arrived = !fx.controller.tick(&mut fx.buses).is_empty();
        let lng = fx.buses.get(BUS).unwrap().position.lng;
        assert!(lng >= last_lng, "position moved backwards: {lng} < {last_lng}");
        assert!(lng <= 1.0 + 1e-5);
        last_lng = lng;
        if arrived {
            break;
        }
    }
}

// ── Express hops ──────────────────────────────────────────────────────────────

#[test]
fn full_bus_targets_next_main_stop() {
    let mut fx = Fixture::new();
    {
        let bus = fx.buses.get_mut(BUS).unwrap();
        bus.stop_index = 1; // x1
        bus.passengers = bus.capacity;
    }
    let outcome = fx.request_move(BUS);
    assert_eq!(
        outcome,
        MoveOutcome::Started { express: true, target_index: 3 } // b
    );
    let state = fx.controller.store.get(BUS).unwrap();
    assert!(state.express);
    assert_eq!(
        state.velocity,
        fx.config.base_velocity * fx.config.express_velocity_factor
    );
    // x1 → x2 → b along the discounted consecutive edges.
    assert_eq!(state.waypoints.len(), 3);
}

#[test]
fn express_arrival_skips_intermediate_stops() {
    let mut fx = Fixture::new();
    {
        let bus = fx.buses.get_mut(BUS).unwrap();
        bus.passengers = bus.capacity;
    }
    fx.request_move(BUS);
    fx.run_to_idle();

    let bus = fx.buses.get(BUS).unwrap();
    // From a(0), the next main stop forward is b(3): x1 and x2 were flown
    // past without any exchange (stop_index jumped straight to 3).
    assert_eq!(bus.stop_index, 3);
    assert_eq!(bus.passengers, bus.capacity, "no exchange mid-express");
}

#[test]
fn full_bus_beyond_last_main_wraps_backward() {
    let mut fx = Fixture::new();
    {
        let bus = fx.buses.get_mut(BUS).unwrap();
        bus.stop_index = 4; // x3 — only the terminal lies ahead
        bus.passengers = bus.capacity;
    }
    // Forward scan finds c(5), the terminal, which is still a main stop:
    // the express targets it directly.
    let outcome = fx.request_move(BUS);
    assert_eq!(
        outcome,
        MoveOutcome::Started { express: true, target_index: 5 }
    );
}

// ── Direction handling ────────────────────────────────────────────────────────

#[test]
fn forward_bus_at_route_end_flips_backward() {
    // Terminal at the start so index 5 is an ordinary route end.
    let line = Line::new(
        vec![
            Stop::main("a", "Alpha", 0.0, 0.0),
            Stop::intermediate("x1", "First", 0.0, 1.0),
            Stop::main("b", "Beta", 0.0, 2.0),
        ],
        "a",
    )
    .unwrap();
    let graph = StopGraphBuilder::build(&line);
    let config = config();
    let mut buses = BusStore::new(config.seed);
    buses.deploy(line.stops().to_vec(), config.bus_capacity);
    let mut directions = DirectionTracker::new();
    let mut controller = MotionController::new(DijkstraEngine, OfflineProvider);

    let bus = buses.get_mut(BUS).unwrap();
    bus.stop_index = 2; // forward at the last stop
    let outcome = controller.request_move(bus, &mut directions, &line, &graph, &config);

    assert_eq!(
        outcome,
        MoveOutcome::Started { express: false, target_index: 1 }
    );
    assert!(!directions.peek(BUS), "direction must have flipped to reverse");
}

#[test]
fn backward_bus_at_route_start_flips_forward() {
    let mut fx = Fixture::new();
    fx.directions.flip(BUS); // force reverse at index 0
    let outcome = fx.request_move(BUS);
    assert_eq!(
        outcome,
        MoveOutcome::Started { express: false, target_index: 1 }
    );
    assert!(fx.directions.peek(BUS));
}

// ── Interpolation primitives ──────────────────────────────────────────────────

#[test]
fn position_at_hits_both_endpoints() {
    let state = MotionState {
        waypoints: vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.5, 1.0),
            GeoPoint::new(0.0, 2.0),
        ],
        ..MotionState::idle()
    };
    assert_eq!(state.position_at(0.0), Some(GeoPoint::new(0.0, 0.0)));
    assert_eq!(state.position_at(1.0), Some(GeoPoint::new(0.0, 2.0)));
}

#[test]
fn position_at_is_continuous_across_segments() {
    let state = MotionState {
        waypoints: vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(0.0, 2.0),
        ],
        ..MotionState::idle()
    };
    // Sample densely; adjacent samples must never jump more than the
    // sampling step covers (2° over 200 samples → 0.01° each).
    let mut prev = state.position_at(0.0).unwrap();
    for i in 1..=200 {
        let p = state.position_at(i as f32 / 200.0).unwrap();
        assert!(prev.euclidean(p) < 0.011, "discontinuity at sample {i}");
        prev = p;
    }
}

#[test]
fn segment_clamps_to_last_valid() {
    let state = MotionState {
        waypoints: vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(0.0, 2.0),
        ],
        ..MotionState::idle()
    };
    assert_eq!(state.segment_at(0.0), 0);
    assert_eq!(state.segment_at(0.49), 0);
    assert_eq!(state.segment_at(0.51), 1);
    assert_eq!(state.segment_at(1.0), 1); // clamped, not 2
}

#[test]
fn zero_length_hop_completes_next_tick() {
    // Two co-located stops produce a degenerate polyline; the move must
    // still terminate rather than divide by zero.
    let line = Line::new(
        vec![
            Stop::main("a", "Alpha", 0.0, 0.0),
            Stop::intermediate("x1", "Twin", 0.0, 0.0),
            Stop::main("b", "Beta", 0.0, 1.0),
        ],
        "b",
    )
    .unwrap();
    let graph = StopGraphBuilder::build(&line);
    let config = config();
    let mut buses = BusStore::new(config.seed);
    buses.deploy(line.stops().to_vec(), config.bus_capacity);
    let mut directions = DirectionTracker::new();
    let mut controller = MotionController::new(DijkstraEngine, OfflineProvider);

    let bus = buses.get_mut(BUS).unwrap();
    let outcome = controller.request_move(bus, &mut directions, &line, &graph, &config);
    assert!(outcome.started());
    assert_eq!(controller.tick(&mut buses), vec![BUS]);
    assert_eq!(buses.get(BUS).unwrap().stop_index, 1);
}
