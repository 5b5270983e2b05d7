//! The `Stop` record.

use bf_core::GeoPoint;

/// One stop on the line.  Immutable once loaded.
///
/// Stops carry unique *string* ids (they originate in external data and are
/// referenced by the visit store and wire tokens), not typed indices.  A
/// stop's position in the line ordering is a `usize` index into
/// [`Line::stops`][crate::Line::stops].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// Unique id, e.g. `"koramangala"`.
    pub id: String,
    /// Human-readable name, e.g. `"Koramangala"`.  Keys the visit store.
    pub name: String,
    pub position: GeoPoint,
    /// Hubs get direct express edges; one of them is the line's terminal.
    pub is_main_stop: bool,
}

impl Stop {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: GeoPoint,
        is_main_stop: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            is_main_stop,
        }
    }

    /// Convenience constructor for a main stop.
    pub fn main(id: impl Into<String>, name: impl Into<String>, lat: f32, lng: f32) -> Self {
        Self::new(id, name, GeoPoint::new(lat, lng), true)
    }

    /// Convenience constructor for an intermediate stop.
    pub fn intermediate(
        id: impl Into<String>,
        name: impl Into<String>,
        lat: f32,
        lng: f32,
    ) -> Self {
        Self::new(id, name, GeoPoint::new(lat, lng), false)
    }
}
