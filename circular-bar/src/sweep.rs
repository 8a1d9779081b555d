//! Progress to arc angle mapping.
//!
//! Angles are in degrees with 0° at 3 o'clock and positive values running
//! clockwise, so the bar starts at [`START_12`] (270°).

/// 12 o'clock.
pub const START_12: f32 = 270.0;

/// Start and sweep angles of the reached and unreached arcs.
///
/// ```
/// use circular_bar::sweep::ProgressSweep;
///
/// let sweep = ProgressSweep::new(25, 100);
/// assert_eq!(sweep.reached_sweep, 90.0);
/// assert_eq!(sweep.unreached_start, 360.0);
/// assert_eq!(sweep.unreached_sweep, 270.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSweep {
    /// Where the reached arc begins, always [`START_12`].
    pub reached_start: f32,
    /// Angular extent of the reached arc, `0..=360`.
    pub reached_sweep: f32,
    /// Where the unreached arc begins: the end of the reached arc.
    pub unreached_start: f32,
    /// Angular extent of the unreached arc, `360 - reached_sweep`.
    pub unreached_sweep: f32,
    progress: i32,
    max: i32,
}

impl ProgressSweep {
    /// Computes the angles for `progress` out of `max`.
    ///
    /// `progress` is clamped into `[0, max]`. A non-positive `max` yields an
    /// empty reached arc.
    pub fn new(progress: i32, max: i32) -> Self {
        let mut sweep = Self {
            reached_start: START_12,
            reached_sweep: 0.0,
            unreached_start: START_12,
            unreached_sweep: 360.0,
            progress,
            max,
        };
        sweep.enforce_bounds();
        sweep.update_angles();
        sweep
    }

    /// Advances the progress by `by` (which may be negative), clamping into
    /// `[0, max]`, and recomputes the angles.
    pub fn increment(&mut self, by: i32) {
        self.progress = self.progress.saturating_add(by);
        self.enforce_bounds();
        self.update_angles();
    }

    /// The clamped progress these angles were computed from.
    pub fn progress(&self) -> i32 {
        self.progress
    }

    /// Completed fraction in `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        // Both operands go to f32 first; integer division would floor to 0.
        self.progress as f32 / self.max as f32
    }

    fn enforce_bounds(&mut self) {
        self.progress = self.progress.clamp(0, self.max.max(0));
    }

    fn update_angles(&mut self) {
        let reached = self.fraction() * 360.0;
        self.reached_sweep = reached;
        self.unreached_start = START_12 + reached;
        self.unreached_sweep = 360.0 - reached;
    }
}
