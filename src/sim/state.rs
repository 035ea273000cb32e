//! Game state and core simulation types
//!
//! One `GameState` is one play session. It owns the spiral, the generated
//! paths and the avatar; nothing is shared between sessions.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::generator::generate_paths;
use super::path::PathSet;
use super::spiral::Spiral;
use crate::palette::ColorId;
use crate::settings::{Difficulty, ScoringSettings, Settings};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Avatar is on the spiral
    Playing,
    /// Avatar left the spiral or the player quit
    Ended,
}

/// Complete state of one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the paths were generated from
    pub seed: u64,
    pub difficulty: Difficulty,
    pub phase: GamePhase,
    pub score: f64,
    pub bonus: f64,
    pub current_color: ColorId,
    /// Playable colors, in HUD order
    pub colors: Vec<ColorId>,
    pub spiral: Spiral,
    pub paths: PathSet,
    pub avatar: Avatar,
    pub scoring: ScoringSettings,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Build a session: generates every path before returning
    pub fn new(settings: &Settings, difficulty: Difficulty, seed: u64) -> Self {
        let spiral = Spiral::new(&settings.spiral);
        let mut rng = Pcg32::seed_from_u64(seed);
        let paths = generate_paths(&spiral, settings, difficulty, &mut rng);
        let avatar = Avatar::new(&spiral, &settings.avatar);
        let colors = settings.colors(difficulty).to_vec();

        log::info!(
            "New {} game (seed {}): {} segments",
            difficulty.as_str(),
            seed,
            paths.len()
        );

        Self {
            seed,
            difficulty,
            phase: GamePhase::Playing,
            score: 0.0,
            bonus: 0.0,
            current_color: colors.first().copied().unwrap_or(ColorId::Blue),
            colors,
            spiral,
            paths,
            avatar,
            scoring: settings.scoring.clone(),
            time_ticks: 0,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Switch color; colors not in play are ignored
    pub fn select_color(&mut self, color: ColorId) {
        if self.colors.contains(&color) {
            self.current_color = color;
        }
    }

    /// Switch to the color of HUD button `index`
    pub fn select_color_index(&mut self, index: usize) {
        if let Some(&color) = self.colors.get(index) {
            self.current_color = color;
        }
    }

    /// Whether the avatar sits on a path of the current color
    pub fn on_path(&self) -> bool {
        self.paths
            .on_path(self.avatar.angle, self.avatar.lane, self.current_color)
    }

    /// Grow the bonus on a matching path, decay it otherwise
    pub fn update_bonus(&mut self, on_path: bool, dt: f64) {
        if on_path {
            self.bonus += self.scoring.bonus_increase * dt;
        } else {
            self.bonus -= self.scoring.bonus_decay * self.bonus * dt;
            if self.bonus < self.scoring.bonus_floor {
                self.bonus = 0.0;
            }
        }
    }

    /// Score a point of the current color
    pub fn correct_point_hit(&mut self) {
        self.score += self.bonus * self.scoring.hit_multiplier;
        self.bonus += self.scoring.correct_bonus;
        self.avatar.correct_point_hit();
    }

    /// Penalise a point of another color
    pub fn incorrect_point_hit(&mut self) {
        self.score /= self.scoring.miss_divisor;
        self.bonus = 0.0;
        self.avatar.incorrect_point_hit();
    }

    /// Stop the session
    pub fn end(&mut self) {
        if self.phase != GamePhase::Ended {
            log::info!("Game over: score {}", self.final_score());
            self.phase = GamePhase::Ended;
        }
    }

    /// Score as recorded in the high score list
    pub fn final_score(&self) -> u64 {
        self.score.max(0.0) as u64
    }
}
