//! `bf-sim` — the simulation context and its autonomous scheduler.
//!
//! # Crate layout
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`sim`]       | `TransitSim` — owns all state, tick loop, manual surface |
//! | [`scheduler`] | `AutoScheduler` — movement cycle + deployment countdown |
//! | [`builder`]   | `SimBuilder`                                         |
//! | [`observer`]  | `SimObserver` trait, `NoopObserver`                  |
//! | [`error`]     | `SimError`, `SimResult<T>`                           |
//!
//! # Concurrency model
//!
//! One logical clock, cooperative single-threaded ticks.  Every mutation
//! flows through [`TransitSim`]'s methods, so exactly one tick author
//! touches a bus at a time and per-bus phase transitions form a strict
//! sequence.  The only blocking operation is waypoint resolution, invoked
//! inside a move request.

pub mod builder;
pub mod error;
pub mod observer;
pub mod scheduler;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use scheduler::AutoScheduler;
pub use sim::TransitSim;
