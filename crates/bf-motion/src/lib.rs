//! `bf-motion` — the per-bus motion state machine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`state`]      | `MotionPhase`, `MotionState`                        |
//! | [`store`]      | `MotionStore` — lazy per-bus state entries          |
//! | [`controller`] | `MotionController` — move requests + interpolation  |
//!
//! # State machine
//!
//! Per bus: `Idle → CalculatingRoute → Moving → Idle` (the calculating phase
//! is entered only when the bus is full and needs an express path; otherwise
//! `Idle → Moving` directly).  A bus whose phase is not `Idle` ignores new
//! move requests — that phase check is the reentrancy guard.

pub mod controller;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use controller::{IgnoreReason, MotionController, MoveOutcome};
pub use state::{MotionPhase, MotionState};
pub use store::MotionStore;
