//! `AutoScheduler` — timer state for autonomous operation.
//!
//! Two independent cadences run while auto mode is on:
//!
//! - the **movement cycle** fires every `movement_interval_secs`; when no
//!   bus is moving it queues every non-terminal bus, and the queue then
//!   drains one move request per `settle_delay_ms` so transitions never
//!   overlap;
//! - the **deployment countdown** ticks down once per simulated second and,
//!   on reaching zero, rearms and (fleet size permitting) triggers one
//!   deployment under a boolean guard.  A guard left set longer than the
//!   safety timeout is forcibly cleared, so a stuck deployment can never
//!   wedge the scheduler.
//!
//! The scheduler holds only timer/queue state; [`TransitSim`] drives it and
//! performs the actual moves and deployments.
//!
//! [`TransitSim`]: crate::TransitSim

use std::collections::VecDeque;

use bf_core::{BusId, SimConfig, Tick};

/// Timer and guard state for auto mode.  All intervals are pre-derived as
/// tick counts from [`SimConfig`].
#[derive(Debug)]
pub struct AutoScheduler {
    enabled: bool,

    // Derived intervals (ticks).
    movement_interval_ticks: u64,
    settle_ticks: u64,
    ticks_per_second: u64,
    timeout_ticks: u64,
    countdown_reset_secs: u32,

    // Live timers.
    move_timer: u64,
    settle_timer: u64,
    second_timer: u64,
    countdown_secs: u32,

    /// Buses awaiting their staggered move request.
    pending: VecDeque<BusId>,

    /// Deployment reentrancy guard, and when it was set.
    deploying: bool,
    guard_since: Option<Tick>,
}

impl AutoScheduler {
    pub fn new(config: &SimConfig) -> Self {
        let clock = config.make_clock();
        let movement_interval_ticks = clock.ticks_for_secs(config.movement_interval_secs);
        let settle_ticks = clock.ticks_for_ms(config.settle_delay_ms);
        let ticks_per_second = clock.ticks_for_secs(1);
        let timeout_ticks = clock.ticks_for_secs(config.deployment_timeout_secs);

        Self {
            enabled: false,
            movement_interval_ticks,
            settle_ticks,
            ticks_per_second,
            timeout_ticks,
            countdown_reset_secs: config.deployment_countdown_secs,
            move_timer: movement_interval_ticks,
            settle_timer: 0,
            second_timer: ticks_per_second,
            countdown_secs: config.deployment_countdown_secs,
            pending: VecDeque::new(),
            deploying: false,
            guard_since: None,
        }
    }

    // ── Mode control ──────────────────────────────────────────────────────

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Switch auto mode.  Both directions reset the countdown, rearm the
    /// timers, and clear the pending queue and deploy guard.
    pub fn set_enabled(&mut self, on: bool) {
        self.enabled = on;
        self.reset();
    }

    /// Rearm all timers and clear transient state.  Deployed buses are
    /// untouched — the scheduler only forgets what it was about to do.
    pub fn reset(&mut self) {
        self.move_timer = self.movement_interval_ticks;
        self.settle_timer = 0;
        self.second_timer = self.ticks_per_second;
        self.countdown_secs = self.countdown_reset_secs;
        self.pending.clear();
        self.deploying = false;
        self.guard_since = None;
    }

    // ── Read surface ──────────────────────────────────────────────────────

    /// Seconds left on the deployment countdown.
    pub fn countdown_secs(&self) -> u32 {
        self.countdown_secs
    }

    pub fn deploying(&self) -> bool {
        self.deploying
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    // ── Movement cycle ────────────────────────────────────────────────────

    /// Advance the movement timer by one tick; `true` when a cycle is due.
    pub fn movement_cycle_due(&mut self) -> bool {
        self.move_timer -= 1;
        if self.move_timer == 0 {
            self.move_timer = self.movement_interval_ticks;
            true
        } else {
            false
        }
    }

    /// Append buses to the staggered move queue.
    pub fn queue_moves(&mut self, ids: impl IntoIterator<Item = BusId>) {
        self.pending.extend(ids);
    }

    /// The next queued bus whose settle delay has elapsed, if any.
    /// Advances the settle timer by one tick otherwise.
    pub fn next_pending(&mut self) -> Option<BusId> {
        if self.pending.is_empty() {
            return None;
        }
        if self.settle_timer > 0 {
            self.settle_timer -= 1;
            return None;
        }
        self.settle_timer = self.settle_ticks;
        self.pending.pop_front()
    }

    // ── Deployment countdown ──────────────────────────────────────────────

    /// Advance the 1 Hz countdown by one tick; `true` exactly when the
    /// countdown reached zero (it rearms itself on firing).
    pub fn countdown_tick(&mut self) -> bool {
        self.second_timer -= 1;
        if self.second_timer > 0 {
            return false;
        }
        self.second_timer = self.ticks_per_second;
        self.countdown_secs = self.countdown_secs.saturating_sub(1);
        if self.countdown_secs == 0 {
            self.countdown_secs = self.countdown_reset_secs;
            true
        } else {
            false
        }
    }

    /// Set the deploy guard, remembering when for the safety timeout.
    pub fn begin_deploy(&mut self, now: Tick) {
        self.deploying = true;
        self.guard_since = Some(now);
    }

    /// Clear the deploy guard after a completed deployment.
    pub fn finish_deploy(&mut self) {
        self.deploying = false;
        self.guard_since = None;
    }

    /// `true` when the guard has been set longer than the safety timeout.
    pub fn deploy_stuck(&self, now: Tick) -> bool {
        match self.guard_since {
            Some(since) if self.deploying => now.since(since) > self.timeout_ticks,
            _ => false,
        }
    }
}
