//! Time driven drawing of a path prefix.

#[allow(unused_imports)]
use vek::num_traits::real::Real;

use crate::config::{Setting, DEFAULT_TIME_MULTIPLIER, MAX_TIME_MULTIPLIER};
use crate::path::{PathModel, PathResult};

/// Number of leading points out of `total` to draw as a line strip
/// after `elapsed` seconds, advancing `time_multiplier` points per second.
///
/// Negative or NaN progress draws nothing; once the whole curve
/// is reached the count stays at `total`.
pub fn visible_count(elapsed: f64, time_multiplier: f64, total: usize) -> usize {
    let drawn = (elapsed * time_multiplier).floor();
    if drawn.is_nan() || drawn <= 0.0 {
        0
    } else if drawn >= total as f64 {
        total
    } else {
        drawn as usize
    }
}

/// Drawing clock: when drawing started and how fast it goes.
///
/// Timestamps are seconds from any monotonic clock the caller owns.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Playback {
    start: f64,
    time_multiplier: Setting<u32>,
}

impl Playback {
    pub fn new(now: f64) -> Self {
        Self {
            start: now,
            time_multiplier: Setting::new(
                "time multiplier",
                DEFAULT_TIME_MULTIPLIER,
                (1, MAX_TIME_MULTIPLIER),
            ),
        }
    }

    /// Starts drawing from the first point again.
    pub fn restart(&mut self, now: f64) {
        log::debug!("playback restarted at {:.3}s", now);
        self.start = now;
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn elapsed(&self, now: f64) -> f64 {
        (now - self.start).max(0.0)
    }

    pub fn time_multiplier(&self) -> u32 {
        self.time_multiplier.value()
    }

    /// A new speed also restarts the drawing.
    pub fn set_time_multiplier(&mut self, time_multiplier: u32, now: f64) -> PathResult<()> {
        self.time_multiplier.set(time_multiplier)?;
        self.restart(now);
        Ok(())
    }

    pub fn visible_count(&self, now: f64, path: &PathModel) -> usize {
        path.visible_count(self.elapsed(now), self.time_multiplier() as f64)
    }

    pub fn is_complete(&self, now: f64, path: &PathModel) -> bool {
        self.visible_count(now, path) == path.point_count()
    }
}
