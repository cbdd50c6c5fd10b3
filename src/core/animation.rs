//! Animation tickers for the lively parts of the interface.
//!
//! egui is immediate mode, so there are no timer callbacks to hang an
//! animation off. Each loop is a small state machine stepped from the
//! frame handler with the current `Instant`, and reports when its next
//! step is due so the window can ask egui to repaint exactly then.

use std::time::{Duration, Instant};

/// Interval between title color steps.
pub const TITLE_CYCLE_INTERVAL: Duration = Duration::from_millis(350);

/// Interval between result label color steps.
pub const RESULT_CYCLE_INTERVAL: Duration = Duration::from_millis(250);

/// Interval between progress bar movements.
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(12);

/// Maximum progress movement per tick.
pub const PROGRESS_STEP: f32 = 1.8;

/// Distance at which the progress bar snaps onto its target.
pub const PROGRESS_SNAP_DISTANCE: f32 = 0.5;

/// Upper bound of the progress scale BMI values are mapped onto.
pub const PROGRESS_SCALE_MAX: f32 = 40.0;

/// Cycles an index through a fixed-size palette at a fixed interval.
///
/// The cycle never terminates on its own; it steps for as long as the
/// owner keeps ticking it.
pub struct ColorCycle {
    palette_len: usize,
    interval: Duration,
    index: usize,
    last_step: Instant,
}

impl ColorCycle {
    pub fn new(palette_len: usize, interval: Duration, now: Instant) -> Self {
        debug_assert!(palette_len > 0);
        Self {
            palette_len,
            interval,
            index: 0,
            last_step: now,
        }
    }

    /// Current palette index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Reset to the first palette entry and realign the step clock.
    pub fn restart(&mut self, now: Instant) {
        self.index = 0;
        self.last_step = now;
    }

    /// Advance one step per elapsed interval. Returns true if the index
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut stepped = false;
        while now.duration_since(self.last_step) >= self.interval {
            self.index = (self.index + 1) % self.palette_len;
            self.last_step += self.interval;
            stepped = true;
        }
        stepped
    }

    /// When the next step is due.
    pub fn next_due(&self) -> Instant {
        self.last_step + self.interval
    }
}

/// Moves a displayed value toward a target by a bounded step per tick,
/// snapping once it gets close.
///
/// This is the only animation with a terminal state: after the snap it
/// stops asking for ticks until [`set_target`](Self::set_target) re-enters
/// it. The value never leaves `0..=PROGRESS_SCALE_MAX`.
pub struct ProgressAnimation {
    value: f32,
    target: f32,
    running: bool,
    last_step: Instant,
}

impl ProgressAnimation {
    pub fn new(now: Instant) -> Self {
        Self {
            value: 0.0,
            target: 0.0,
            running: false,
            last_step: now,
        }
    }

    /// Displayed value.
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Point the bar at a new target (clamped to the scale) and start
    /// converging. The first movement happens immediately, the rest on
    /// the tick cadence.
    pub fn set_target(&mut self, target: f32, now: Instant) {
        self.target = target.clamp(0.0, PROGRESS_SCALE_MAX);
        self.running = true;
        self.last_step = now;
        self.step_once();
    }

    /// Step toward the target once per elapsed interval.
    pub fn tick(&mut self, now: Instant) {
        while self.running && now.duration_since(self.last_step) >= PROGRESS_INTERVAL {
            self.last_step += PROGRESS_INTERVAL;
            self.step_once();
        }
    }

    /// When the next step is due, or None once settled.
    pub fn next_due(&self) -> Option<Instant> {
        self.running.then(|| self.last_step + PROGRESS_INTERVAL)
    }

    fn step_once(&mut self) {
        let distance = self.target - self.value;
        if distance.abs() < PROGRESS_SNAP_DISTANCE {
            self.value = self.target;
            self.running = false;
            return;
        }
        self.value += distance.abs().min(PROGRESS_STEP).copysign(distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn test_color_cycle_waits_for_interval() {
        let t0 = Instant::now();
        let mut cycle = ColorCycle::new(4, TITLE_CYCLE_INTERVAL, t0);
        assert!(!cycle.tick(at(t0, 349)));
        assert_eq!(cycle.index(), 0);
        assert!(cycle.tick(at(t0, 350)));
        assert_eq!(cycle.index(), 1);
    }

    #[test]
    fn test_color_cycle_wraps_around() {
        let t0 = Instant::now();
        let mut cycle = ColorCycle::new(4, Duration::from_millis(10), t0);
        cycle.tick(at(t0, 45));
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn test_color_cycle_restart() {
        let t0 = Instant::now();
        let mut cycle = ColorCycle::new(4, Duration::from_millis(10), t0);
        cycle.tick(at(t0, 25));
        assert_eq!(cycle.index(), 2);

        cycle.restart(at(t0, 25));
        assert_eq!(cycle.index(), 0);
        assert!(!cycle.tick(at(t0, 34)));
        assert!(cycle.tick(at(t0, 35)));
        assert_eq!(cycle.index(), 1);
    }

    #[test]
    fn test_progress_moves_in_bounded_steps() {
        let t0 = Instant::now();
        let mut bar = ProgressAnimation::new(t0);
        bar.set_target(22.86, t0);
        assert!((bar.value() - 1.8).abs() < 1e-6);

        bar.tick(at(t0, 12));
        assert!((bar.value() - 3.6).abs() < 1e-6);
        assert!(bar.is_running());
    }

    #[test]
    fn test_progress_snaps_and_stops() {
        let t0 = Instant::now();
        let mut bar = ProgressAnimation::new(t0);
        bar.set_target(4.0, t0);

        bar.tick(at(t0, 12));
        assert!((bar.value() - 3.6).abs() < 1e-6);

        // remaining 0.4 is within snap distance
        bar.tick(at(t0, 24));
        assert_eq!(bar.value(), 4.0);
        assert!(!bar.is_running());
        assert_eq!(bar.next_due(), None);

        // further ticks are no-ops
        bar.tick(at(t0, 1000));
        assert_eq!(bar.value(), 4.0);
    }

    #[test]
    fn test_progress_target_clamped_to_scale() {
        let t0 = Instant::now();
        let mut bar = ProgressAnimation::new(t0);
        bar.set_target(120.0, t0);

        let mut ms = 0;
        while bar.is_running() && ms < 10_000 {
            ms += 12;
            bar.tick(at(t0, ms));
            assert!(bar.value() <= PROGRESS_SCALE_MAX);
        }
        assert_eq!(bar.value(), PROGRESS_SCALE_MAX);
    }

    #[test]
    fn test_progress_converges_downward() {
        let t0 = Instant::now();
        let mut bar = ProgressAnimation::new(t0);
        bar.set_target(30.0, t0);
        bar.tick(at(t0, 1000));
        assert_eq!(bar.value(), 30.0);

        bar.set_target(10.0, at(t0, 1000));
        let mut previous = bar.value();
        let mut ms = 1000;
        while bar.is_running() && ms < 10_000 {
            ms += 12;
            bar.tick(at(t0, ms));
            assert!(bar.value() <= previous);
            previous = bar.value();
        }
        assert_eq!(bar.value(), 10.0);
    }

    #[test]
    fn test_progress_catches_up_after_long_frame() {
        let t0 = Instant::now();
        let mut bar = ProgressAnimation::new(t0);
        bar.set_target(22.86, t0);

        // one late tick covers many elapsed intervals
        bar.tick(at(t0, 1200));
        assert_eq!(bar.value(), 22.86);
        assert!(!bar.is_running());
    }

    #[test]
    fn test_retarget_restarts_convergence() {
        let t0 = Instant::now();
        let mut bar = ProgressAnimation::new(t0);
        bar.set_target(10.0, t0);
        bar.tick(at(t0, 1000));
        assert!(!bar.is_running());

        bar.set_target(20.0, at(t0, 1000));
        assert!(bar.is_running());
        assert!(bar.next_due().is_some());
    }
}
