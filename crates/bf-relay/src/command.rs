//! Relay command tokens.

/// A parsed relay token.  The index addresses a bus by deploy order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RelayCommand {
    /// `<busIndex>_BOARD` — board one passenger.
    Board(u32),
    /// `<busIndex>_EXIT` — alight one passenger.
    Exit(u32),
    /// `<busIndex>_MOVE` — request the next hop.
    Move(u32),
}

impl RelayCommand {
    /// Parse a raw token.  Returns `None` for anything that is not exactly
    /// `<digits>_BOARD`, `<digits>_EXIT`, or `<digits>_MOVE` — unknown
    /// tokens are silently dropped by the bridge, not reported.
    pub fn parse(token: &str) -> Option<Self> {
        let (index, action) = token.trim().split_once('_')?;
        let index: u32 = index.parse().ok()?;
        match action {
            "BOARD" => Some(RelayCommand::Board(index)),
            "EXIT" => Some(RelayCommand::Exit(index)),
            "MOVE" => Some(RelayCommand::Move(index)),
            _ => None,
        }
    }

    /// The bus index the command addresses.
    pub fn bus_index(&self) -> u32 {
        match *self {
            RelayCommand::Board(i) | RelayCommand::Exit(i) | RelayCommand::Move(i) => i,
        }
    }
}
