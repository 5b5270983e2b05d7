//! Geometry-subsystem error type.
//!
//! These errors never escape the resolver — they select the straight-line
//! fallback and are logged, not propagated.

use thiserror::Error;

/// Failure forms of a road-geometry fetch.  The resolver treats all of them
/// identically.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("geometry service returned status {0}")]
    Status(u16),

    #[error("geometry response could not be parsed: {0}")]
    MalformedPayload(String),

    #[error("geometry response contained no usable route")]
    EmptyRoute,

    #[error("geometry provider unavailable")]
    Unavailable,
}
