//! Passenger exchange on arrival.
//!
//! Applied exactly once, synchronously, right after a bus's motion state
//! returns to idle:
//!
//! - terminal stop: everyone alights, nobody boards — the bus is done;
//! - other main stop: 1–10 passengers alight (capped by occupancy);
//! - intermediate stop: 0–10 passengers board (capped by free seats).
//!
//! The passenger count stays within `0..=capacity` on both sides of the
//! exchange.

use bf_core::BusRng;

use crate::Bus;

/// Most passengers that alight at one main stop.
pub const MAX_ALIGHTING: u32 = 10;
/// Most passengers that board at one intermediate stop.
pub const MAX_BOARDING: u32 = 10;

/// What one arrival exchange did, for observers and logs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExchangeOutcome {
    pub boarded: u32,
    pub alighted: u32,
}

/// Apply the exchange rules for the stop the bus just arrived at.
pub fn exchange_passengers(bus: &mut Bus, terminal_id: &str, rng: &mut BusRng) -> ExchangeOutcome {
    let (at_terminal, is_main) = {
        let stop = bus.current_stop();
        (stop.id == terminal_id, stop.is_main_stop)
    };

    if at_terminal {
        let alighted = bus.passengers;
        bus.passengers = 0;
        ExchangeOutcome { boarded: 0, alighted }
    } else if is_main {
        let alighted = rng.gen_range(1..=MAX_ALIGHTING).min(bus.passengers);
        bus.passengers -= alighted;
        ExchangeOutcome { boarded: 0, alighted }
    } else {
        let free_seats = bus.capacity - bus.passengers;
        let boarded = rng.gen_range(0..=MAX_BOARDING).min(free_seats);
        bus.passengers += boarded;
        ExchangeOutcome { boarded, alighted: 0 }
    }
}
