//! Applying relay commands to the simulation.

use tracing::debug;

use bf_core::BusId;
use bf_graph::PathEngine;
use bf_route::GeometryProvider;
use bf_sim::TransitSim;

use crate::RelayCommand;

/// What happened to a relayed token.  Everything short of `Applied` is a
/// silent no-op by design.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The command ran and changed state.
    Applied(RelayCommand),
    /// Auto mode is active; manual commands are ignored wholesale.
    AutoModeActive,
    /// The token didn't parse.
    UnknownToken,
    /// The command parsed but a guard made it a no-op (no such bus, bus
    /// full/empty, not idle, at the terminal).
    NoEffect(RelayCommand),
}

/// Map one relayed token onto the manual control surface.
///
/// The same guards apply as for a direct manual call; the outcome reports
/// which path was taken, mainly for logging and tests.
pub fn dispatch<E: PathEngine, G: GeometryProvider>(
    sim: &mut TransitSim<E, G>,
    token: &str,
) -> RelayOutcome {
    if sim.auto_mode() {
        debug!(token, "relay token ignored: auto mode active");
        return RelayOutcome::AutoModeActive;
    }

    let Some(command) = RelayCommand::parse(token) else {
        debug!(token, "relay token ignored: unrecognized");
        return RelayOutcome::UnknownToken;
    };

    let bus = BusId(command.bus_index());
    let applied = match command {
        RelayCommand::Board(_) => sim.add_passenger(bus),
        RelayCommand::Exit(_) => sim.remove_passenger(bus),
        RelayCommand::Move(_) => sim
            .request_move(bus)
            .is_some_and(|outcome| outcome.started()),
    };

    if applied {
        RelayOutcome::Applied(command)
    } else {
        debug!(token, "relay command had no effect");
        RelayOutcome::NoEffect(command)
    }
}
