//! `bf-graph` — stop data, weighted stop graph, and shortest-path search.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`stop`]   | `Stop`                                                    |
//! | [`line`]   | `Line` — validated ordered stop list + terminal           |
//! | [`graph`]  | `StopGraph` (symmetric weighted adjacency), `StopGraphBuilder` |
//! | [`engine`] | `PathEngine` trait, `DijkstraEngine`                      |
//! | [`error`]  | `LineError`                                               |

pub mod engine;
pub mod error;
pub mod graph;
pub mod line;
pub mod stop;


pub use engine::{DijkstraEngine, PathEngine};
pub use error::LineError;
pub use graph::{StopGraph, StopGraphBuilder};
pub use line::Line;
pub use stop::Stop;
