//! Per-bus motion state.

use bf_core::GeoPoint;

/// Where a bus is in its move cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MotionPhase {
    /// Parked at a stop, accepting move requests.
    #[default]
    Idle,
    /// Full bus waiting on the express path computation.  At most one per
    /// bus — requests arriving in this phase are ignored.
    CalculatingRoute,
    /// Interpolating along `waypoints`.
    Moving,
}

/// Transient motion state for one bus.  Reset to idle on arrival.
#[derive(Clone, Debug, Default)]
pub struct MotionState {
    pub phase: MotionPhase,
    /// The polyline being traversed.  At least two points while `Moving`.
    pub waypoints: Vec<GeoPoint>,
    /// Segment index last interpolated into (diagnostic surface).
    pub waypoint_index: usize,
    /// Fraction of the whole polyline covered, in `[0, 1]`.
    pub progress: f32,
    /// Coordinate degrees advanced per tick.
    pub velocity: f32,
    /// `true` when this move runs on an express path.
    pub express: bool,
    /// Route index the bus will occupy on arrival.
    pub target_index: usize,
    /// Total polyline length; the denominator of progress advancement.
    pub path_length: f32,
}

impl MotionState {
    /// A fresh idle state.
    pub fn idle() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.phase == MotionPhase::Idle
    }

    /// The waypoint segment `progress` falls in:
    /// `floor(progress · (n−1))`, clamped to the last valid segment.
    pub fn segment_at(&self, progress: f32) -> usize {
        let n = self.waypoints.len();
        if n < 2 {
            return 0;
        }
        let scaled = progress.clamp(0.0, 1.0) * (n - 1) as f32;
        (scaled.floor() as usize).min(n - 2)
    }

    /// Position on the polyline at `progress`, linearly interpolated within
    /// the segment `progress` falls in.
    ///
    /// `progress = 0` yields the first waypoint and `progress = 1` the last;
    /// the sweep in between is continuous.  `None` if there are no
    /// waypoints.
    pub fn position_at(&self, progress: f32) -> Option<GeoPoint> {
        let n = self.waypoints.len();
        if n < 2 {
            return self.waypoints.first().copied();
        }
        let scaled = progress.clamp(0.0, 1.0) * (n - 1) as f32;
        let segment = (scaled.floor() as usize).min(n - 2);
        let local = scaled - segment as f32;
        Some(self.waypoints[segment].lerp(self.waypoints[segment + 1], local))
    }
}
