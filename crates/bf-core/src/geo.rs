//! Geographic coordinate type and the distance metric the graph is built on.
//!
//! `GeoPoint` uses `f32` latitude/longitude.  At city scale this gives ~1 m
//! precision, which is far below the spacing of any two bus stops.
//!
//! All edge weights and path lengths use the *planar euclidean* distance in
//! coordinate space.  The stop line spans a few kilometres, where the planar
//! approximation is indistinguishable from great-circle distance for the
//! purpose of weighting edges against each other.

/// A WGS-84 geographic coordinate stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f32,
    pub lng: f32,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f32, lng: f32) -> Self {
        Self { lat, lng }
    }

    /// Planar euclidean distance in coordinate degrees.
    ///
    /// This is the weight metric for every graph edge rule; velocities are
    /// expressed in the same unit (degrees per tick) so the two cancel
    /// cleanly in progress arithmetic.
    #[inline]
    pub fn euclidean(self, other: GeoPoint) -> f32 {
        let d_lat = other.lat - self.lat;
        let d_lng = other.lng - self.lng;
        (d_lat * d_lat + d_lng * d_lng).sqrt()
    }

    /// Linear interpolation between `self` and `other` at fraction `t`.
    ///
    /// `t = 0` yields `self`, `t = 1` yields `other`.  `t` is not clamped;
    /// callers keep it in `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: GeoPoint, t: f32) -> GeoPoint {
        GeoPoint {
            lat: self.lat + (other.lat - self.lat) * t,
            lng: self.lng + (other.lng - self.lng) * t,
        }
    }
}

/// Total euclidean length of a polyline, in coordinate degrees.
///
/// Returns `0.0` for fewer than two points.
pub fn polyline_length(points: &[GeoPoint]) -> f32 {
    points
        .windows(2)
        .map(|pair| pair[0].euclidean(pair[1]))
        .sum()
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
