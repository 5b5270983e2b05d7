//! The Koramangala → Bellandur demo line.
//!
//! Four main transit hubs with eight intermediate stops between them.
//! Bellandur is the terminal: buses that reach it discharge everyone and
//! park for good.

use bf_graph::{Line, Stop};

/// Stop id of the terminal.
pub const TERMINAL: &str = "bellandur";

pub fn build_line() -> Line {
    let stops = vec![
        Stop::main("koramangala", "Koramangala", 12.9352, 77.6245),
        Stop::intermediate("egl", "Embassy Golf Links", 12.9450, 77.6410),
        Stop::intermediate("domlur", "Domlur", 12.9610, 77.6384),
        Stop::intermediate("trinity", "Trinity Circle", 12.9700, 77.6300),
        Stop::main("indiranagar", "Indiranagar", 12.9784, 77.6408),
        Stop::intermediate("doddanekkundi", "Doddanekkundi", 12.9793, 77.6905),
        Stop::intermediate("spice_garden", "Spice Garden", 12.9592, 77.6974),
        Stop::intermediate("innovative", "Innovative Multiplex", 12.9530, 77.6960),
        Stop::main("marathahalli", "Marathahalli", 12.9569, 77.7011),
        Stop::intermediate("panathur", "Panathur", 12.9395, 77.7050),
        Stop::intermediate("kadubeesanahalli", "Kadubeesanahalli", 12.9372, 77.6957),
        Stop::main("bellandur", "Bellandur", 12.9261, 77.6763),
    ];

    Line::new(stops, TERMINAL).expect("demo line data is valid")
}
