//! Outgoing signals to audio and particle collaborators
//!
//! The simulation only tells collaborators what happened. They never feed
//! anything back. `SparkDensity` holds the emitter density rules so a
//! renderer only has to spawn the particles it is told to.

use glam::Vec2;

use crate::palette::ColorId;

/// Fire-and-forget audio cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    CorrectHit,
    IncorrectHit,
    /// Session started
    MusicStart,
    /// Session ended
    MusicFadeOut,
}

impl SoundCue {
    /// Sound file stem the cue is played from
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundCue::CorrectHit => "correct_hit",
            SoundCue::IncorrectHit => "incorrect_hit",
            SoundCue::MusicStart | SoundCue::MusicFadeOut => "Intermission",
        }
    }
}

pub trait AudioSignal {
    fn cue(&mut self, cue: SoundCue);
}

pub trait ParticleSignal {
    /// Avatar moved to `position` (viewport space); `on_path` drives the trail
    fn update(&mut self, position: Vec2, on_path: bool);
    /// Correct hit of `color`
    fn explode(&mut self, color: ColorId);
    /// Incorrect hit: kill every emitter
    fn reset(&mut self);
}

/// Audio sink that drops every cue
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioSignal for Silent {
    fn cue(&mut self, _cue: SoundCue) {}
}

/// Collaborators a tick reports to
pub struct Signals<'a> {
    pub audio: &'a mut dyn AudioSignal,
    pub particles: &'a mut dyn ParticleSignal,
}

impl<'a> Signals<'a> {
    pub fn new(audio: &'a mut dyn AudioSignal, particles: &'a mut dyn ParticleSignal) -> Self {
        Self { audio, particles }
    }
}

/// Trail density while on a matching path
pub const TRAIL_DENSITY: u32 = 20;
/// Burst density on a correct hit
pub const BURST_DENSITY: u32 = 100;
/// Burst max speed on a correct hit
pub const BURST_SPEED: u32 = 100;
/// Burst max speed never decays below this
pub const BURST_SPEED_FLOOR: u32 = 30;

/// One emitter's density state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Emitter {
    /// Particles to spawn per tick
    pub density: u32,
    /// Upper bound of the spawn speed range
    pub max_speed: u32,
}

/// Density hints for the spark trail and the per-color hit bursts
#[derive(Debug, Clone)]
pub struct SparkDensity {
    pub position: Vec2,
    pub trail: Emitter,
    /// Indexed by `ColorId`
    pub bursts: [Emitter; 4],
}

impl Default for SparkDensity {
    fn default() -> Self {
        let idle = Emitter {
            density: 0,
            max_speed: BURST_SPEED_FLOOR,
        };
        Self {
            position: Vec2::ZERO,
            trail: idle,
            bursts: [idle; 4],
        }
    }
}

impl SparkDensity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn burst(&self, color: ColorId) -> Emitter {
        self.bursts[color.index()]
    }

    /// Total particles requested this tick
    pub fn density_hint(&self) -> u32 {
        self.trail.density + self.bursts.iter().map(|e| e.density).sum::<u32>()
    }
}

impl ParticleSignal for SparkDensity {
    fn update(&mut self, position: Vec2, on_path: bool) {
        self.position = position;

        for burst in &mut self.bursts {
            burst.density = if burst.density <= 5 {
                0
            } else {
                burst.density * 9 / 10
            };
            burst.max_speed = if burst.max_speed < BURST_SPEED_FLOOR {
                BURST_SPEED_FLOOR
            } else {
                (burst.max_speed * 4 / 5).max(BURST_SPEED_FLOOR)
            };
        }

        if on_path {
            self.trail.density = TRAIL_DENSITY;
        } else if self.trail.density < 2 {
            self.trail.density = 0;
        } else {
            self.trail.density = self.trail.density * 9 / 10;
        }
    }

    fn explode(&mut self, color: ColorId) {
        let burst = &mut self.bursts[color.index()];
        burst.density = BURST_DENSITY;
        burst.max_speed = BURST_SPEED;
    }

    fn reset(&mut self) {
        for burst in &mut self.bursts {
            burst.density = 0;
        }
        self.trail.density = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_follows_path_state() {
        let mut sparks = SparkDensity::new();
        sparks.update(Vec2::new(3.0, 4.0), true);
        assert_eq!(sparks.trail.density, TRAIL_DENSITY);
        assert_eq!(sparks.position, Vec2::new(3.0, 4.0));

        sparks.update(Vec2::ZERO, false);
        assert_eq!(sparks.trail.density, 18);

        for _ in 0..40 {
            sparks.update(Vec2::ZERO, false);
        }
        assert_eq!(sparks.trail.density, 0);
    }

    #[test]
    fn test_burst_decays_to_zero() {
        let mut sparks = SparkDensity::new();
        sparks.explode(ColorId::Red);
        assert_eq!(sparks.burst(ColorId::Red).density, BURST_DENSITY);
        assert_eq!(sparks.burst(ColorId::Blue).density, 0);

        sparks.update(Vec2::ZERO, false);
        assert_eq!(sparks.burst(ColorId::Red).density, 90);
        assert_eq!(sparks.burst(ColorId::Red).max_speed, 80);

        for _ in 0..60 {
            sparks.update(Vec2::ZERO, false);
        }
        assert_eq!(sparks.burst(ColorId::Red).density, 0);
        assert_eq!(sparks.burst(ColorId::Red).max_speed, BURST_SPEED_FLOOR);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut sparks = SparkDensity::new();
        sparks.update(Vec2::ZERO, true);
        sparks.explode(ColorId::Green);
        assert!(sparks.density_hint() > 0);
        sparks.reset();
        assert_eq!(sparks.density_hint(), 0);
    }
}
