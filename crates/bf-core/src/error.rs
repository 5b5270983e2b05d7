//! Configuration error type.
//!
//! Sub-crates define their own error enums for their own fallible surfaces
//! and wrap this one where configuration flows through them.

use thiserror::Error;

/// Validation failures for [`SimConfig`][crate::SimConfig].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be positive")]
    ZeroDuration(&'static str),

    #[error("max fleet size must be at least 1")]
    ZeroFleetSize,

    #[error("bus capacity must be positive")]
    ZeroCapacity,

    #[error("base velocity must be positive, got {0}")]
    NonPositiveVelocity(f32),

    #[error("express velocity factor must be at least 1, got {0}")]
    ExpressFactorBelowOne(f32),
}
