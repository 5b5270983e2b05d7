//! Line validation errors.

use thiserror::Error;

/// Errors produced when constructing a [`Line`][crate::Line].
#[derive(Debug, Error)]
pub enum LineError {
    #[error("a line needs at least two stops")]
    TooFewStops,

    #[error("duplicate stop id {0:?}")]
    DuplicateStopId(String),

    #[error("terminal stop {0:?} not found on the line")]
    TerminalNotFound(String),

    #[error("terminal stop {0:?} is not a main stop")]
    TerminalNotMain(String),
}
