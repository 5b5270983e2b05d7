//! Road-geometry providers.
//!
//! The external service takes two coordinates and answers with an ordered
//! list of points describing a road-following path between them.  The HTTP
//! implementation speaks the OSRM `route/v1` GeoJSON shape; anything that
//! is not a 2xx response carrying at least two coordinates is an error, and
//! all error forms are treated identically downstream.

use std::time::Duration;

use serde::Deserialize;

use bf_core::GeoPoint;

use crate::GeometryError;

/// Source of road-following waypoints for a single stop-to-stop hop.
///
/// Implementations must be `Send + Sync`.  `fetch` may block on a network
/// round trip — it is the only suspending operation in the engine and is
/// called from exactly one place, the waypoint resolver.
pub trait GeometryProvider: Send + Sync {
    /// Ordered points from `from` to `to`, at least two on success.
    fn fetch(&self, from: GeoPoint, to: GeoPoint) -> Result<Vec<GeoPoint>, GeometryError>;
}

// ── HttpGeometryProvider ──────────────────────────────────────────────────────

/// OSRM-style response payload.  Only the geometry is read.
#[derive(Deserialize)]
struct RouteResponse {
    #[serde(default)]
    routes: Vec<RouteEntry>,
}

#[derive(Deserialize)]
struct RouteEntry {
    geometry: RouteGeometry,
}

#[derive(Deserialize)]
struct RouteGeometry {
    /// GeoJSON order: `[lng, lat]`.
    coordinates: Vec<[f64; 2]>,
}

/// Blocking HTTP client against an OSRM-compatible routing service.
pub struct HttpGeometryProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpGeometryProvider {
    /// Default per-request timeout.  A slow geometry service must not stall
    /// the scheduler longer than this.
    const TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(base_url: impl Into<String>) -> Result<Self, GeometryError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }
}

impl GeometryProvider for HttpGeometryProvider {
    fn fetch(&self, from: GeoPoint, to: GeoPoint) -> Result<Vec<GeoPoint>, GeometryError> {
        let url = format!(
            "{}/route/v1/driving/{:.6},{:.6};{:.6},{:.6}?overview=full&geometries=geojson",
            self.base_url, from.lng, from.lat, to.lng, to.lat,
        );

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeometryError::Status(status.as_u16()));
        }

        let body: RouteResponse = response
            .json()
            .map_err(|e| GeometryError::MalformedPayload(e.to_string()))?;

        let route = body
            .routes
            .into_iter()
            .next()
            .ok_or(GeometryError::EmptyRoute)?;

        let points: Vec<GeoPoint> = route
            .geometry
            .coordinates
            .iter()
            .map(|c| GeoPoint::new(c[1] as f32, c[0] as f32))
            .collect();

        if points.len() < 2 {
            return Err(GeometryError::EmptyRoute);
        }
        Ok(points)
    }
}

// ── OfflineProvider ───────────────────────────────────────────────────────────

/// A provider that always fails, driving the resolver's straight-line
/// fallback.  Used by the demo (no network) and by tests exercising the
/// failure path.
pub struct OfflineProvider;

impl GeometryProvider for OfflineProvider {
    fn fetch(&self, _from: GeoPoint, _to: GeoPoint) -> Result<Vec<GeoPoint>, GeometryError> {
        Err(GeometryError::Unavailable)
    }
}
