//! Simulation construction errors.

use thiserror::Error;

use bf_core::ConfigError;

/// Errors produced when building a [`TransitSim`][crate::TransitSim].
///
/// Running the simulation is infallible — every runtime failure mode
/// (geometry, graph lookup, invalid command, stuck guard) recovers locally.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("initial fleet of {requested} exceeds max fleet size {max}")]
    FleetTooLarge { requested: usize, max: usize },
}

pub type SimResult<T> = Result<T, SimError>;
