//! bengaluru — demo run of the busfleet engine on the original
//! Koramangala–Indiranagar–Marathahalli–Bellandur line.
//!
//! Plays a short manual session through the relay bridge, then hands the
//! fleet to the autonomous scheduler for two simulated minutes.  Visit
//! counts persist to `output/bengaluru/visits.db`.
//!
//! Set `BUSFLEET_OSRM_URL` to an OSRM-compatible endpoint to fetch real
//! road geometry; without it every hop falls back to straight lines.

mod line;

use std::path::Path;

use anyhow::Result;

use bf_core::{BusId, SimConfig};
use bf_fleet::ExchangeOutcome;
use bf_graph::{DijkstraEngine, Stop};
use bf_relay::dispatch;
use bf_route::{GeometryProvider, HttpGeometryProvider, OfflineProvider};
use bf_sim::{SimBuilder, SimObserver, TransitSim};
use bf_store::{StationStore, VisitTracker};

use line::build_line;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const AUTO_SECONDS: u32 = 120; // simulated auto-mode runtime
const OUTPUT_DIR: &str = "output/bengaluru";

// ── Console + store observer ──────────────────────────────────────────────────

/// Prints simulation events and forwards them to the visit tracker.
struct ConsoleObserver {
    tracker: VisitTracker,
    arrivals: usize,
}

impl SimObserver for ConsoleObserver {
    fn on_arrival(&mut self, bus: BusId, stop: &Stop, exchange: &ExchangeOutcome) {
        self.arrivals += 1;
        println!(
            "  {bus} arrived at {:<20} (+{} boarded, −{} alighted)",
            stop.name, exchange.boarded, exchange.alighted
        );
        self.tracker.on_arrival(bus, stop, exchange);
    }

    fn on_deploy(&mut self, bus: BusId, fleet_size: usize) {
        println!("  {bus} deployed — fleet is now {fleet_size}");
        self.tracker.on_deploy(bus, fleet_size);
    }

    fn on_auto_mode(&mut self, enabled: bool) {
        println!("  auto mode {}", if enabled { "ON" } else { "OFF" });
        self.tracker.on_auto_mode(enabled);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    println!("=== bengaluru — busfleet demo ===");
    let line = build_line();
    println!(
        "Line: {} stops ({} main), terminal {}",
        line.len(),
        line.stops().iter().filter(|s| s.is_main_stop).count(),
        line.terminal().name,
    );

    let config = SimConfig { seed: SEED, ..SimConfig::default() };

    match std::env::var("BUSFLEET_OSRM_URL") {
        Ok(url) => {
            println!("Geometry: OSRM at {url}");
            let sim = SimBuilder::new(config, line, DijkstraEngine, HttpGeometryProvider::new(url)?)
                .build()?;
            run(sim)
        }
        Err(_) => {
            println!("Geometry: offline (straight-line hops)");
            let sim =
                SimBuilder::new(config, line, DijkstraEngine, OfflineProvider).build()?;
            run(sim)
        }
    }
}

fn run<G: GeometryProvider>(mut sim: TransitSim<DijkstraEngine, G>) -> Result<()> {
    // 1. Persistent visit store, pre-seeded with every stop name.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let store = StationStore::open(&Path::new(OUTPUT_DIR).join("visits.db"))?;
    store.seed_stations(sim.line.stops().iter().map(|s| s.name.as_str()))?;
    let mut observer = ConsoleObserver { tracker: VisitTracker::new(store), arrivals: 0 };

    // 2. A short manual session through the relay bridge (one bad token to
    //    show it being ignored).
    println!();
    println!("Manual session:");
    for token in ["0_BOARD", "0_BOARD", "0_BOARD", "0_MOVE", "0_WARP"] {
        let outcome = dispatch(&mut sim, token);
        println!("  relay {token:<8} → {outcome:?}");
    }
    while sim.motion.store.any_active() {
        sim.tick(&mut observer);
    }

    // 3. Autonomous operation.
    println!();
    println!("Scheduler session ({AUTO_SECONDS} simulated seconds):");
    sim.toggle_auto_mode(&mut observer);
    let ticks = sim.clock.ticks_for_secs(AUTO_SECONDS);
    sim.run_ticks(ticks, &mut observer);
    sim.toggle_auto_mode(&mut observer);

    // 4. Fleet summary.
    println!();
    println!("{:<10} {:<22} {:<12} {:<9}", "Bus", "Stop", "Passengers", "Direction");
    println!("{}", "-".repeat(55));
    for bus in sim.buses.iter() {
        println!(
            "{:<10} {:<22} {:<12} {:<9}",
            bus.id.0,
            bus.current_stop().name,
            format!("{}/{}", bus.passengers, bus.capacity),
            if sim.directions.peek(bus.id) { "forward" } else { "reverse" },
        );
    }

    // 5. Persisted visit counts.
    println!();
    println!("Visit counts ({} arrivals this run):", observer.arrivals);
    for (name, visits) in observer.tracker.store().read_all()? {
        println!("  {name:<22} {visits}");
    }

    if let Some(e) = observer.tracker.take_error() {
        eprintln!("store error: {e}");
    }
    Ok(())
}
