//! Fixed-rate gate between display refreshes and simulation ticks

/// Decides on each display refresh whether a simulation tick is due
///
/// At most one tick per refresh: a slow display slows the game down rather
/// than running a burst of catch-up ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    interval_ms: f64,
    last_tick_ms: f64,
}

impl FrameClock {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_tick_ms: 0.0,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Returns true (and records `now_ms`) when a full interval has elapsed
    pub fn ready(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_tick_ms >= self.interval_ms {
            self.last_tick_ms = now_ms;
            true
        } else {
            false
        }
    }
}
