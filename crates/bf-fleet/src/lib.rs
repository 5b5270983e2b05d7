//! `bf-fleet` — buses and everything that rides with them.
//!
//! # Crate layout
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`bus`]       | `Bus`                                               |
//! | [`store`]     | `BusStore` — fleet storage + per-bus RNGs           |
//! | [`direction`] | `DirectionTracker` — forward/reverse per bus        |
//! | [`exchange`]  | Boarding/alighting rules applied on arrival         |

pub mod bus;
pub mod direction;
pub mod exchange;
pub mod store;


pub use bus::Bus;
pub use direction::DirectionTracker;
pub use exchange::{exchange_passengers, ExchangeOutcome};
pub use store::BusStore;
