//! Integration tests for bf-sim.
//!
//! Everything runs on the offline geometry provider (straight-line hops)
//! with a fast test config: 50 ms ticks, 1 s movement cycles, a 2 s
//! deployment countdown, and hops that complete in 2 ticks.

use bf_core::{BusId, SimConfig, Tick};
use bf_fleet::ExchangeOutcome;
use bf_graph::{DijkstraEngine, Line, Stop};
use bf_motion::{IgnoreReason, MoveOutcome};
use bf_route::OfflineProvider;

use crate::{NoopObserver, SimBuilder, SimObserver, TransitSim};

// ── Helpers ───────────────────────────────────────────────────────────────────

const BUS: BusId = BusId(0);

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

fn fast_config() -> SimConfig {
    SimConfig {
        seed: 42,
        tick_duration_ms: 50,
        movement_interval_secs: 1,
        settle_delay_ms: 100,
        deployment_countdown_secs: 2,
        deployment_timeout_secs: 1,
        max_fleet_size: 4,
        bus_capacity: 20,
        base_velocity: 0.5,
        express_velocity_factor: 1.5,
    }
}

fn sim() -> TransitSim<DijkstraEngine, OfflineProvider> {
    SimBuilder::new(fast_config(), line(), DijkstraEngine, OfflineProvider)
        .build()
        .unwrap()
}

/// Tick until no bus is moving (bounded).
fn settle(sim: &mut TransitSim<DijkstraEngine, OfflineProvider>) {
    for _ in 0..10_000 {
        if !sim.motion.store.any_active() {
            return;
        }
        sim.tick(&mut NoopObserver);
    }
    panic!("simulation never settled");
}

// ── Builder ───────────────────────────────────────────────────────────────────

mod builder {
    use super::*;

    #[test]
    fn default_build_seats_one_bus() {
        let sim = sim();
        assert_eq!(sim.fleet_size(), 1);
        let bus = sim.buses.get(BUS).unwrap();
        assert_eq!(bus.stop_index, 0);
        assert_eq!(bus.position, sim.line.spawn_position());
        assert!(!sim.auto_mode());
    }

    #[test]
    fn initial_buses_above_cap_rejected() {
        let result = SimBuilder::new(fast_config(), line(), DijkstraEngine, OfflineProvider)
            .initial_buses(5)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn invalid_config_rejected() {
        let mut config = fast_config();
        config.bus_capacity = 0;
        let result =
            SimBuilder::new(config, line(), DijkstraEngine, OfflineProvider).build();
        assert!(result.is_err());
    }

    #[test]
    fn graph_covers_all_stops() {
        let sim = sim();
        assert_eq!(sim.graph.node_count(), sim.line.len());
    }
}

// ── Manual control surface ────────────────────────────────────────────────────

mod manual {
    use super::*;

    #[test]
    fn add_and_remove_passengers_with_guards() {
        let mut sim = sim();
        assert!(!sim.remove_passenger(BUS), "empty bus: removal is a no-op");
        assert!(sim.add_passenger(BUS));
        assert!(sim.remove_passenger(BUS));

        for _ in 0..sim.config.bus_capacity {
            sim.add_passenger(BUS);
        }
        assert!(!sim.add_passenger(BUS), "full bus: boarding is a no-op");

        assert!(!sim.add_passenger(BusId(9)), "unknown bus: no-op");
        assert!(!sim.remove_passenger(BusId(9)));
    }

    #[test]
    fn add_passenger_is_noop_at_terminal() {
        let mut sim = sim();
        sim.buses.get_mut(BUS).unwrap().stop_index = 5;
        assert!(!sim.add_passenger(BUS));
    }

    #[test]
    fn request_move_completes_a_hop() {
        let mut sim = sim();
        let outcome = sim.request_move(BUS).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Started { express: false, target_index: 1 }
        );
        settle(&mut sim);

        let bus = sim.buses.get(BUS).unwrap();
        assert_eq!(bus.stop_index, 1);
        assert!(bus.passengers <= bus.capacity);
    }

    #[test]
    fn request_move_unknown_bus_is_none() {
        let mut sim = sim();
        assert!(sim.request_move(BusId(9)).is_none());
    }

    #[test]
    fn second_request_while_moving_is_ignored() {
        let mut sim = sim();
        assert!(sim.request_move(BUS).unwrap().started());
        assert_eq!(
            sim.request_move(BUS).unwrap(),
            MoveOutcome::Ignored(IgnoreReason::NotIdle)
        );
    }
}

// ── Terminal behavior ─────────────────────────────────────────────────────────

mod terminal {
    use super::*;

    #[test]
    fn terminal_arrival_discharges_and_parks() {
        let mut sim = sim();
        {
            let bus = sim.buses.get_mut(BUS).unwrap();
            bus.stop_index = 4; // x3, one hop from the terminal
            bus.position = sim.line.stop(4).position;
            bus.passengers = 7;
        }
        sim.request_move(BUS).unwrap();
        settle(&mut sim);

        let bus = sim.buses.get(BUS).unwrap();
        assert_eq!(bus.stop_index, 5);
        assert_eq!(bus.passengers, 0, "terminal discharges everyone");

        // Parked for good: moves and boarding are no-ops from here on.
        assert_eq!(
            sim.request_move(BUS).unwrap(),
            MoveOutcome::Ignored(IgnoreReason::AtTerminal)
        );
        assert!(!sim.add_passenger(BUS));
    }
}

// ── Observers ─────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Recorder {
    arrivals: Vec<(BusId, String, ExchangeOutcome)>,
    deploys: Vec<(BusId, usize)>,
    auto_toggles: Vec<bool>,
}

impl SimObserver for Recorder {
    fn on_arrival(&mut self, bus: BusId, stop: &Stop, exchange: &ExchangeOutcome) {
        self.arrivals.push((bus, stop.id.clone(), *exchange));
    }

    fn on_deploy(&mut self, bus: BusId, fleet_size: usize) {
        self.deploys.push((bus, fleet_size));
    }

    fn on_auto_mode(&mut self, enabled: bool) {
        self.auto_toggles.push(enabled);
    }
}

mod observers {
    use super::*;

    #[test]
    fn arrival_hook_reports_stop_and_exchange() {
        let mut sim = sim();
        let mut recorder = Recorder::default();
        sim.request_move(BUS).unwrap();
        for _ in 0..16 {
            sim.tick(&mut recorder);
        }
        assert_eq!(recorder.arrivals.len(), 1);
        let (bus, stop_id, exchange) = &recorder.arrivals[0];
        assert_eq!(*bus, BUS);
        assert_eq!(stop_id, "x1");
        // Intermediate stop: boarding only.
        assert_eq!(exchange.alighted, 0);
        assert!(exchange.boarded <= 10);
    }

    #[test]
    fn auto_mode_hook_fires_on_toggle() {
        let mut sim = sim();
        let mut recorder = Recorder::default();
        assert!(sim.toggle_auto_mode(&mut recorder));
        assert!(!sim.toggle_auto_mode(&mut recorder));
        assert_eq!(recorder.auto_toggles, vec![true, false]);
    }
}

// ── Auto mode: movement ───────────────────────────────────────────────────────

mod auto_movement {
    use super::*;

    #[test]
    fn scheduler_moves_idle_buses() {
        let mut sim = sim();
        sim.toggle_auto_mode(&mut NoopObserver);
        // One movement cycle (20 ticks) + settle + a 2-tick hop.
        sim.run_ticks(30, &mut NoopObserver);
        assert!(
            sim.buses.get(BUS).unwrap().stop_index > 0,
            "auto mode should have moved the bus"
        );
    }

    #[test]
    fn disabled_scheduler_moves_nothing() {
        let mut sim = sim();
        sim.run_ticks(200, &mut NoopObserver);
        assert_eq!(sim.buses.get(BUS).unwrap().stop_index, 0);
        assert_eq!(sim.fleet_size(), 1, "no deployment while auto mode is off");
    }

    #[test]
    fn all_buses_get_move_requests() {
        let mut sim = SimBuilder::new(fast_config(), line(), DijkstraEngine, OfflineProvider)
            .initial_buses(2)
            .build()
            .unwrap();
        sim.toggle_auto_mode(&mut NoopObserver);
        sim.run_ticks(60, &mut NoopObserver);
        assert!(sim.buses.get(BusId(0)).unwrap().stop_index > 0);
        assert!(sim.buses.get(BusId(1)).unwrap().stop_index > 0);
    }
}

// ── Auto mode: deployment ─────────────────────────────────────────────────────

mod deployment {
    use super::*;

    #[test]
    fn countdown_fire_deploys_exactly_one_bus() {
        let mut sim = sim();
        sim.toggle_auto_mode(&mut NoopObserver);
        assert_eq!(sim.deployment_countdown_secs(), 2);
        // 2 s at 20 ticks/s: the countdown fires during tick 40.
        sim.run_ticks(39, &mut NoopObserver);
        assert_eq!(sim.fleet_size(), 1);
        sim.run_ticks(5, &mut NoopObserver);
        assert_eq!(sim.fleet_size(), 2);
        // Countdown rearmed after firing.
        assert!(sim.deployment_countdown_secs() <= 2);
    }

    #[test]
    fn fleet_never_exceeds_cap() {
        let mut sim = sim();
        sim.toggle_auto_mode(&mut NoopObserver);
        let mut recorder = Recorder::default();
        for _ in 0..400 {
            sim.tick(&mut recorder);
            assert!(sim.fleet_size() <= sim.config.max_fleet_size);
        }
        assert_eq!(sim.fleet_size(), 4);
        let fleet_sizes: Vec<usize> = recorder.deploys.iter().map(|d| d.1).collect();
        assert_eq!(fleet_sizes, vec![2, 3, 4]);
    }

    #[test]
    fn new_buses_spawn_at_first_stop_with_full_route() {
        let mut sim = sim();
        sim.toggle_auto_mode(&mut NoopObserver);
        sim.run_ticks(50, &mut NoopObserver);
        assert_eq!(sim.fleet_size(), 2);
        let rookie = sim.buses.get(BusId(1)).unwrap();
        assert_eq!(rookie.route.len(), sim.line.len());
        assert_eq!(rookie.passengers, 0);
    }

    #[test]
    fn toggle_resets_countdown_and_keeps_fleet() {
        let mut sim = sim();
        sim.toggle_auto_mode(&mut NoopObserver);
        sim.run_ticks(50, &mut NoopObserver);
        assert_eq!(sim.fleet_size(), 2);

        sim.toggle_auto_mode(&mut NoopObserver); // off
        assert_eq!(sim.deployment_countdown_secs(), 2);
        assert_eq!(sim.fleet_size(), 2, "toggling never removes buses");

        sim.run_ticks(100, &mut NoopObserver);
        assert_eq!(sim.fleet_size(), 2, "no deployment while disabled");
    }

    #[test]
    fn stuck_guard_blocks_then_recovers() {
        // A guard that outlives the 3 s timeout: the first countdown fire
        // (at 2 s) is skipped, the guard is cleared at the timeout, and the
        // next fire deploys.
        let mut config = fast_config();
        config.deployment_timeout_secs = 3;
        let mut sim = SimBuilder::new(config, line(), DijkstraEngine, OfflineProvider)
            .build()
            .unwrap();
        sim.toggle_auto_mode(&mut NoopObserver);
        sim.scheduler.begin_deploy(Tick(0)); // wedge the guard

        sim.run_ticks(45, &mut NoopObserver);
        assert_eq!(sim.fleet_size(), 1, "fire under a stuck guard must skip");

        // Timeout (60 ticks) clears the guard; the 4 s fire deploys.
        sim.run_ticks(45, &mut NoopObserver);
        assert!(!sim.scheduler.deploying(), "guard must have been cleared");
        assert_eq!(sim.fleet_size(), 2, "deployment must retry after recovery");
    }
}

// ── Express integration ───────────────────────────────────────────────────────

mod express {
    use super::*;

    #[test]
    fn full_bus_expresses_to_next_main_stop() {
        let mut sim = sim();
        for _ in 0..sim.config.bus_capacity {
            sim.add_passenger(BUS);
        }
        let outcome = sim.request_move(BUS).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Started { express: true, target_index: 3 }
        );
        settle(&mut sim);

        let bus = sim.buses.get(BUS).unwrap();
        assert_eq!(bus.stop_index, 3, "express lands on the main stop");
        // Main-stop arrival: 1–10 passengers alighted, nobody boarded.
        let capacity = bus.capacity;
        assert!(bus.passengers < capacity);
        assert!(bus.passengers >= capacity - 10);
    }

    #[test]
    fn geometry_failure_still_completes_the_move() {
        // The offline provider fails every fetch; the straight-line
        // fallback must carry the bus to its target regardless.
        let mut sim = sim();
        sim.request_move(BUS).unwrap();
        settle(&mut sim);
        assert_eq!(sim.buses.get(BUS).unwrap().stop_index, 1);
        assert_eq!(
            sim.motion.resolver.cache_len(),
            0,
            "failed fetches must not be cached"
        );
    }
}
