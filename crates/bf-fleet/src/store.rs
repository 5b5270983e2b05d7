//! `BusStore` — fleet storage and per-bus RNGs.
//!
//! The RNGs live beside the buses (not inside them) so the exchange step can
//! borrow one bus and its RNG mutably at the same time through
//! [`BusStore::bus_and_rng_mut`] — the same split-borrow arrangement the
//! rest of the engine relies on.

use bf_core::{BusId, BusRng};
use bf_graph::Stop;

use crate::Bus;

/// All buses of the fleet, in deploy order, plus their RNG streams.
///
/// Buses are only ever added.  `BusId` is the index into both vectors.
pub struct BusStore {
    buses: Vec<Bus>,
    rngs: Vec<BusRng>,
    seed: u64,
}

impl BusStore {
    /// An empty fleet whose future RNG streams derive from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            buses: Vec::new(),
            rngs: Vec::new(),
            seed,
        }
    }

    /// Add a bus at the start of `route` and return its id.
    ///
    /// The RNG stream is seeded from the store's global seed and the new id,
    /// so deploying never perturbs existing buses' streams.
    pub fn deploy(&mut self, route: Vec<Stop>, capacity: u32) -> BusId {
        let id = BusId(self.buses.len() as u32);
        self.rngs.push(BusRng::new(self.seed, id));
        self.buses.push(Bus::new(id, route, capacity));
        id
    }

    pub fn len(&self) -> usize {
        self.buses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buses.is_empty()
    }

    pub fn get(&self, id: BusId) -> Option<&Bus> {
        self.buses.get(id.index())
    }

    pub fn get_mut(&mut self, id: BusId) -> Option<&mut Bus> {
        self.buses.get_mut(id.index())
    }

    /// Simultaneous mutable access to one bus and its RNG.
    pub fn bus_and_rng_mut(&mut self, id: BusId) -> Option<(&mut Bus, &mut BusRng)> {
        let bus = self.buses.get_mut(id.index())?;
        let rng = &mut self.rngs[id.index()];
        Some((bus, rng))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bus> {
        self.buses.iter()
    }

    /// Ids of all buses in deploy order.
    pub fn ids(&self) -> impl Iterator<Item = BusId> + '_ {
        (0..self.buses.len() as u32).map(BusId)
    }
}
