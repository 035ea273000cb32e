//! The player's avatar

use serde::{Deserialize, Serialize};

use super::spiral::Spiral;
use crate::consts::LANE_LIMIT;
use crate::settings::AvatarSettings;

/// Position and motion along the spiral
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    /// Current angle on the spiral
    pub angle: f32,
    pub lane: i32,
    /// Linear speed along the track; negative while bouncing back
    pub speed: f32,
    pub bouncing: bool,
    /// Speed to recover to after a bounce
    pub pre_bounce_speed: f32,
    /// Draw radius
    pub size: f32,
    correct_speed_boost: f32,
    bounce_offset: f32,
    bounce_recovery_step: f32,
}

impl Avatar {
    pub fn new(spiral: &Spiral, settings: &AvatarSettings) -> Self {
        Self {
            angle: spiral.angle_init,
            lane: 0,
            speed: settings.speed,
            bouncing: false,
            pre_bounce_speed: settings.speed,
            size: settings.size,
            correct_speed_boost: settings.correct_speed_boost,
            bounce_offset: settings.bounce_offset,
            bounce_recovery_step: settings.bounce_recovery_step,
        }
    }

    /// Move along the track for `dt` seconds.
    ///
    /// Dividing by the current radius keeps the linear speed constant as the
    /// spiral widens. The divisor never drops below the sample interval, so
    /// inner lanes near the start (where the radius formula reaches zero)
    /// don't stall or run backwards.
    ///
    /// Returns `false` once the avatar has left the spiral.
    pub fn advance(&mut self, dt: f32, spiral: &Spiral) -> bool {
        let radius = spiral.radius(self.angle, self.lane).max(spiral.sample_interval);
        self.angle += self.speed * dt / radius;

        if self.bouncing {
            self.speed = (self.speed + self.bounce_recovery_step).min(self.pre_bounce_speed);
            if self.speed >= self.pre_bounce_speed {
                self.bouncing = false;
            }
        }

        spiral.contains(self.angle)
    }

    /// Shift lanes; results outside (-3, 3) are ignored
    pub fn change_lane(&mut self, delta: i32) {
        let lane = self.lane + delta;
        if -LANE_LIMIT < lane && lane < LANE_LIMIT {
            self.lane = lane;
        }
    }

    pub fn correct_point_hit(&mut self) {
        self.speed += self.correct_speed_boost;
    }

    /// Reverse and start recovering
    pub fn incorrect_point_hit(&mut self) {
        self.bouncing = true;
        self.pre_bounce_speed = self.speed;
        self.speed = -self.speed + self.bounce_offset;
    }

    /// Position on the track
    pub fn position(&self, spiral: &Spiral) -> glam::Vec2 {
        spiral.position(self.angle, self.lane)
    }
}
