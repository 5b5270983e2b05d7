//! `bf-store` — write-through persistence for stop-visit analytics.
//!
//! Purely observational: nothing in routing or motion reads this store.
//! It mirrors two things as they happen — how often each stop has been
//! visited, and whether automation is active.
//!
//! | Module       | Contents                                      |
//! |--------------|-----------------------------------------------|
//! | [`store`]    | `StationStore` — the SQLite backing            |
//! | [`observer`] | `VisitTracker` — `SimObserver` → store bridge  |
//! | [`error`]    | `StoreError`, `StoreResult<T>`                 |

pub mod error;
pub mod observer;
pub mod store;


pub use error::{StoreError, StoreResult};
pub use observer::VisitTracker;
pub use store::StationStore;
