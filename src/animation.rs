//! Position tweens driving the re-render transitions.
//!
//! A [`Tween`] carries a set of 2-D points from their previous positions to
//! new targets over a fixed duration. Tweens are fire-and-forget:
//! retargeting one mid-flight samples the current in-between positions and
//! restarts from there (last-writer-wins, no cancellation, no queue).
//! Sampling is monotonic — between two sample times the points only ever
//! move toward the target.

use std::time::{Duration, Instant};

/// Interpolation curve applied to the normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Slow start and finish, matching the feel of the usual chart
    /// transition defaults.
    #[default]
    CubicInOut,
}

impl Easing {
    /// Ease a normalized progress value. Monotonic on `[0, 1]` for every
    /// variant.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A timed interpolation of a fixed-size set of points.
#[derive(Clone, Debug)]
pub struct Tween {
    start: Vec<[f64; 2]>,
    target: Vec<[f64; 2]>,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// A tween that is already settled at `positions` (no motion until the
    /// first retarget).
    pub fn settled(positions: Vec<[f64; 2]>, duration: Duration, easing: Easing) -> Self {
        Tween {
            start: positions.clone(),
            target: positions,
            started_at: Instant::now(),
            duration,
            easing,
        }
    }

    /// Start moving toward `target` from wherever the points currently are.
    /// Supersedes any in-flight motion.
    pub fn retarget(&mut self, target: Vec<[f64; 2]>, now: Instant) {
        if target.len() != self.start.len() {
            // The point set never resizes mid-run; a length change means a
            // fresh start rather than an interpolation.
            self.start = target.clone();
        } else {
            self.start = self.sample(now);
        }
        self.target = target;
        self.started_at = now;
    }

    /// Positions at time `now`: eased interpolation between start and
    /// target, clamped to the target once the duration has elapsed.
    pub fn sample(&self, now: Instant) -> Vec<[f64; 2]> {
        let k = self.easing.apply(self.progress(now));
        self.start
            .iter()
            .zip(&self.target)
            .map(|(a, b)| {
                [
                    a[0] + (b[0] - a[0]) * k,
                    a[1] + (b[1] - a[1]) * k,
                ]
            })
            .collect()
    }

    /// `true` while an interpolation is still in flight.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.start != self.target && self.progress(now) < 1.0
    }

    pub fn target(&self) -> &[[f64; 2]] {
        &self.target
    }

    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}
