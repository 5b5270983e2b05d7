//! `bf-core` — foundational types for the busfleet simulation engine.
//!
//! This crate is a dependency of every other `bf-*` crate.  It intentionally
//! has no `bf-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                      |
//! |-----------|-----------------------------------------------|
//! | [`ids`]   | `BusId`                                       |
//! | [`geo`]   | `GeoPoint`, euclidean distance, interpolation |
//! | [`time`]  | `Tick`, `SimClock`, `SimConfig`               |
//! | [`rng`]   | `BusRng` (per-bus deterministic RNG)          |
//! | [`error`] | `ConfigError`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::ConfigError;
pub use geo::GeoPoint;
pub use ids::BusId;
pub use rng::BusRng;
pub use time::{SimClock, SimConfig, Tick};
