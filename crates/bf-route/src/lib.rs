//! `bf-route` — turning stop-to-stop hops into concrete waypoint polylines.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`provider`] | `GeometryProvider` trait, `HttpGeometryProvider`, `OfflineProvider` |
//! | [`resolver`] | `WaypointResolver` — caching, reversal, straight-line fallback |
//! | [`error`]    | `GeometryError`                                        |
//!
//! # Contract
//!
//! Resolution is infallible from the caller's point of view: every failure
//! form of the external geometry service (transport error, non-2xx, bad
//! payload, empty route) collapses to the 2-point straight line between the
//! stops.  Every returned polyline has at least two points.

pub mod error;
pub mod provider;
pub mod resolver;


pub use error::GeometryError;
pub use provider::{GeometryProvider, HttpGeometryProvider, OfflineProvider};
pub use resolver::WaypointResolver;
