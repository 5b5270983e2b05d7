//! Simulation time model and top-level configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! interpolation step (tens of milliseconds of simulated wall time); the
//! slower scheduler cadences — the movement cycle, the one-second deployment
//! countdown — are derived from `SimConfig` as whole tick counts.  Keeping
//! the integer tick as the canonical unit means all scheduler arithmetic is
//! exact and comparisons are O(1).

use std::fmt;

use crate::error::ConfigError;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at the default 50 ms per tick a u64 lasts ~29 billion
/// years of simulated time.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and maps tick counts to simulated milliseconds.
///
/// Cheap to copy; holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many simulated milliseconds one tick represents.
    pub tick_duration_ms: u32,
    /// The current tick — advanced once per interpolation step.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_ms: u32) -> Self {
        Self { tick_duration_ms, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated milliseconds since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_tick.0 * self.tick_duration_ms as u64
    }

    /// How many ticks span `ms` milliseconds? (rounds up, never zero)
    #[inline]
    pub fn ticks_for_ms(&self, ms: u32) -> u64 {
        (ms as u64).div_ceil(self.tick_duration_ms as u64).max(1)
    }

    /// How many ticks span `secs` seconds? (rounds up, never zero)
    #[inline]
    pub fn ticks_for_secs(&self, secs: u32) -> u64 {
        self.ticks_for_ms(secs.saturating_mul(1_000))
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_ms = self.elapsed_ms();
        write!(f, "{} ({}.{:03} s)", self.current_tick, total_ms / 1_000, total_ms % 1_000)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate (enable
/// the `serde` feature) and passed to the simulation builder.  All scheduler
/// cadences are given in natural units (seconds, milliseconds) and converted
/// to tick counts through [`SimClock`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Simulated milliseconds per interpolation tick.
    pub tick_duration_ms: u32,

    /// Interval between scheduler movement cycles, in seconds.
    pub movement_interval_secs: u32,

    /// Settling delay between per-bus move requests within one movement
    /// cycle, in milliseconds.
    pub settle_delay_ms: u32,

    /// Deployment countdown duration, in seconds.  Reset to this value when
    /// the countdown fires and when auto mode is toggled.
    pub deployment_countdown_secs: u32,

    /// Upper bound on how long the deploying guard may stay set before a
    /// tick forcibly clears it, in seconds.
    pub deployment_timeout_secs: u32,

    /// Hard cap on fleet size.  Deployment stops here.
    pub max_fleet_size: usize,

    /// Passenger capacity of every bus.
    pub bus_capacity: u32,

    /// Base speed in coordinate degrees per tick.
    pub base_velocity: f32,

    /// Multiplier applied to `base_velocity` on express paths.  Must be ≥ 1.
    pub express_velocity_factor: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                      42,
            tick_duration_ms:          50,
            movement_interval_secs:    2,
            settle_delay_ms:           500,
            deployment_countdown_secs: 45,
            deployment_timeout_secs:   5,
            max_fleet_size:            4,
            bus_capacity:              20,
            base_velocity:             4.0e-4,
            express_velocity_factor:   1.5,
        }
    }
}

impl SimConfig {
    /// Check every field against its documented bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration("tick_duration_ms"));
        }
        if self.movement_interval_secs == 0 {
            return Err(ConfigError::ZeroDuration("movement_interval_secs"));
        }
        if self.deployment_countdown_secs == 0 {
            return Err(ConfigError::ZeroDuration("deployment_countdown_secs"));
        }
        if self.deployment_timeout_secs == 0 {
            return Err(ConfigError::ZeroDuration("deployment_timeout_secs"));
        }
        if self.max_fleet_size == 0 {
            return Err(ConfigError::ZeroFleetSize);
        }
        if self.bus_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !(self.base_velocity > 0.0) {
            return Err(ConfigError::NonPositiveVelocity(self.base_velocity));
        }
        if !(self.express_velocity_factor >= 1.0) {
            return Err(ConfigError::ExpressFactorBelowOne(self.express_velocity_factor));
        }
        Ok(())
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_ms)
    }

    /// Velocity for a move, given whether it runs on the express path.
    #[inline]
    pub fn velocity(&self, express: bool) -> f32 {
        if express {
            self.base_velocity * self.express_velocity_factor
        } else {
            self.base_velocity
        }
    }
}
