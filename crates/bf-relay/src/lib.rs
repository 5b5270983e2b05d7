//! `bf-relay` — mapping externally relayed command tokens onto the manual
//! control surface.
//!
//! An external device sends three token shapes over some transport
//! (WebSocket relay, serial bridge — not this crate's concern):
//!
//! ```text
//! <busIndex>_BOARD    board one passenger
//! <busIndex>_EXIT     alight one passenger
//! <busIndex>_MOVE     request the next hop
//! ```
//!
//! [`dispatch`] applies a token to a [`TransitSim`] under the same guards
//! as a direct manual call.  Tokens are ignored — never errors — when auto
//! mode is active, when the token is malformed, or when the indexed bus
//! does not exist.
//!
//! [`TransitSim`]: bf_sim::TransitSim

pub mod bridge;
pub mod command;


pub use bridge::{dispatch, RelayOutcome};
pub use command::RelayCommand;
