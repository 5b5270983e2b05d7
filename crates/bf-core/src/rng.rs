//! Deterministic per-bus RNG.
//!
//! # Determinism strategy
//!
//! Each bus gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (bus_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive bus ids uniformly across the seed space.  This
//! means buses never share RNG state, and deploying a new bus mid-run does
//! not disturb the streams of the buses already on the road — the same seed
//! always replays the same passenger exchanges.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::BusId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-bus deterministic RNG, created alongside the bus at deploy time.
pub struct BusRng(SmallRng);

impl BusRng {
    /// Seed deterministically from the run's global seed and a bus id.
    pub fn new(global_seed: u64, bus: BusId) -> Self {
        let seed = global_seed ^ (bus.0 as u64).wrapping_mul(MIXING_CONSTANT);
        BusRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
