//! Spiral Dash - a color-matching arcade game on an expanding spiral
//!
//! Core modules:
//! - `sim`: Simulation (spiral geometry, path generation, avatar, scoring)
//! - `viewport`: Scrolling window that follows the avatar
//! - `signals`: Audio/particle collaborator interfaces
//! - `screen`: Menu / game / score screen dispatch
//! - `settings`: Data-driven tuning, loaded from JSON
//! - `highscores`: Top five scores persisted to disk
//! - `clock`: Wall-clock frame timing
//! - `player`: Scripted input for headless runs

pub mod clock;
pub mod error;
pub mod highscores;
pub mod hud;
pub mod input;
pub mod palette;
pub mod player;
pub mod screen;
pub mod settings;
pub mod signals;
pub mod sim;
pub mod viewport;

pub use error::{ConfigError, HighScoreError};
pub use highscores::HighScores;
pub use palette::{ColorId, Palette};
pub use settings::{Difficulty, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the external loop
    pub const FRAME_RATE: u32 = 60;
    /// Smallest tick length; two ticks on the same timestamp still move
    pub const MIN_DT: f32 = 0.000_001;
    /// Longest frame the clock reports (stalls don't teleport the avatar)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Angular offset between neighbouring lanes
    pub const LANE_SPACING: f32 = std::f32::consts::FRAC_PI_4;
    /// Lanes used by generated paths
    pub const MIN_PATH_LANE: i32 = -2;
    pub const MAX_PATH_LANE: i32 = 2;
    /// Exclusive bound for lane changes
    pub const LANE_LIMIT: i32 = 3;

    /// Avatar defaults
    pub const AVATAR_SPEED: f32 = 100.0;
    pub const AVATAR_SIZE: f32 = 15.0;
    /// Speed the menu demo runs at
    pub const DEMO_SPEED: f32 = 500.0;

    /// Number of entries in the high score file
    pub const HIGH_SCORE_SLOTS: usize = 5;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert polar coordinates around `origin` to cartesian
#[inline]
pub fn to_cartesian(theta: f32, r: f32, origin: Vec2) -> Vec2 {
    polar_to_cartesian(r, theta) + origin
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
