//! Spiral track geometry
//!
//! The track is an Archimedean spiral around `center`:
//! `radius(t, lane) = radius_const * (t + lane * π/4)`. Lanes are the same
//! spiral shifted by a fixed angle, so neighbouring lanes run parallel.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::LANE_SPACING;
use crate::settings::SpiralSettings;
use crate::to_cartesian;

/// Immutable per-session spiral
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spiral {
    pub center: Vec2,
    pub sample_interval: f32,
    pub radius_const: f32,
    pub angle_init: f32,
    pub angle_max: f32,
}

impl Spiral {
    pub fn new(settings: &SpiralSettings) -> Self {
        Self {
            center: Vec2::new(settings.width / 2.0, settings.height / 2.0),
            sample_interval: settings.sample_interval,
            radius_const: settings.radius_const,
            angle_init: settings.angle_init,
            angle_max: settings.angle_max,
        }
    }

    /// Radius of `lane` at angle `t`
    #[inline]
    pub fn radius(&self, t: f32, lane: i32) -> f32 {
        self.radius_const * (t + lane as f32 * LANE_SPACING)
    }

    /// Absolute position of `lane` at angle `t`
    #[inline]
    pub fn position(&self, t: f32, lane: i32) -> Vec2 {
        to_cartesian(t, self.radius(t, lane), self.center)
    }

    /// Whether `t` is still on the track
    #[inline]
    pub fn contains(&self, t: f32) -> bool {
        t >= self.angle_init && t <= self.angle_max
    }

    /// Angle step that covers roughly `sample_interval` of arc at `t`
    #[inline]
    pub fn sample_step(&self, t: f32) -> f32 {
        self.sample_interval / self.radius(t, 0).max(self.sample_interval)
    }

    /// Trace `lane` from `start` to `end` at constant arc length.
    /// Stops early once the step no longer moves `t` at f32 precision.
    pub fn sample_range(&self, start: f32, end: f32, lane: i32) -> Vec<Vec2> {
        let mut points = Vec::new();
        let mut t = start;
        while t < end {
            points.push(self.position(t, lane));
            let next = t + self.sample_step(t);
            if next <= t {
                break;
            }
            t = next;
        }
        points.push(self.position(end, lane));
        points
    }

    /// Polyline of a whole lane, for pre-drawing the track
    pub fn sample_lane(&self, lane: i32) -> Vec<Vec2> {
        self.sample_range(self.angle_init, self.angle_max, lane)
    }
}
