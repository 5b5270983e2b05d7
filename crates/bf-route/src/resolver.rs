//! `WaypointResolver` — stop-to-stop hops materialized as polylines.
//!
//! The resolver sits between motion control and the geometry provider.  It
//! is infallible: a hop always resolves to a polyline of at least two
//! points, falling back to the straight line between the stops when the
//! provider fails in any way.
//!
//! Successful fetches are cached per *ordered* stop-id pair and never
//! evicted.  The reverse direction is served by reversing the cached forward
//! polyline rather than re-fetching.  Fallback lines are deliberately not
//! cached so a transient provider outage does not pin a degraded path.

use std::collections::HashMap;

use tracing::warn;

use bf_core::GeoPoint;
use bf_graph::Stop;

use crate::{GeometryError, GeometryProvider};

/// Caching waypoint resolution over a [`GeometryProvider`].
pub struct WaypointResolver<G: GeometryProvider> {
    provider: G,
    /// Append-only: `(from id, to id) → polyline`.
    cache: HashMap<(String, String), Vec<GeoPoint>>,
}

impl<G: GeometryProvider> WaypointResolver<G> {
    pub fn new(provider: G) -> Self {
        Self {
            provider,
            cache: HashMap::new(),
        }
    }

    /// Resolve the single hop `from → to`.
    ///
    /// Returns the cached polyline, the reverse of the cached opposite
    /// polyline, a fresh fetch, or the 2-point straight line — in that
    /// order of preference.  Always at least two points.
    pub fn resolve_hop(&mut self, from: &Stop, to: &Stop) -> Vec<GeoPoint> {
        let key = (from.id.clone(), to.id.clone());
        if let Some(points) = self.cache.get(&key) {
            return points.clone();
        }

        let reverse_key = (to.id.clone(), from.id.clone());
        if let Some(points) = self.cache.get(&reverse_key) {
            let mut reversed = points.clone();
            reversed.reverse();
            self.cache.insert(key, reversed.clone());
            return reversed;
        }

        let fetched = self
            .provider
            .fetch(from.position, to.position)
            .and_then(|points| {
                if points.len() < 2 {
                    Err(GeometryError::EmptyRoute)
                } else {
                    Ok(points)
                }
            });

        match fetched {
            Ok(points) => {
                self.cache.insert(key, points.clone());
                points
            }
            Err(err) => {
                warn!(from = %from.id, to = %to.id, %err, "geometry fetch failed, using straight line");
                vec![from.position, to.position]
            }
        }
    }

    /// Resolve a multi-stop path by resolving each consecutive pair and
    /// concatenating the legs in order.
    ///
    /// Exact duplicate points at leg joins are dropped; they would only add
    /// zero-length interpolation segments.
    pub fn resolve_path(&mut self, stops: &[&Stop]) -> Vec<GeoPoint> {
        let mut joined: Vec<GeoPoint> = Vec::new();
        for pair in stops.windows(2) {
            for point in self.resolve_hop(pair[0], pair[1]) {
                if joined.last() != Some(&point) {
                    joined.push(point);
                }
            }
        }

        // Degenerate inputs (a single stop) still honor the ≥ 2 contract.
        if joined.len() < 2 {
            if let Some(stop) = stops.first() {
                joined = vec![stop.position, stop.position];
            }
        }
        joined
    }

    /// Number of cached polylines (test hook).
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Borrow the underlying provider.
    pub fn provider(&self) -> &G {
        &self.provider
    }
}
