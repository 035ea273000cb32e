//! Wall-clock frame timing

use std::time::Instant;

use crate::consts::{MAX_FRAME_DT, MIN_DT};

/// Measures the time between ticks
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Seconds since the previous call, clamped to `[MIN_DT, MAX_FRAME_DT]`.
    /// The first call returns `MIN_DT`.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        dt.clamp(MIN_DT, MAX_FRAME_DT)
    }
}
