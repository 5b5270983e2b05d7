//! Strongly typed, zero-cost identifier wrappers.
//!
//! Buses are identified by their index into the fleet's `Vec` storage, so
//! `BusId` is `Copy + Ord + Hash` and usable as a map key without ceremony.
//! Stops, by contrast, carry unique *string* ids (they come from external
//! data and appear in wire tokens and the visit store), so there is no typed
//! stop id here.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a bus in fleet storage.  Assigned sequentially at deploy
    /// time and never reused — buses are only ever added, never removed.
    pub struct BusId(u32);
}
