//! Game settings and tuning
//!
//! Loaded from a JSON file at startup. Every section falls back to the
//! built-in defaults, so a settings file only needs the values it changes.
//! Settings are validated once, before the first session is created.

use std::f32::consts::PI;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{AVATAR_SIZE, AVATAR_SPEED};
use crate::error::ConfigError;
use crate::palette::{ColorId, PaletteSpec, Palettes};

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Spiral geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralSettings {
    /// Size of the playfield the spiral is drawn into
    pub width: f32,
    pub height: f32,
    /// Arc length between samples when tracing a lane
    pub sample_interval: f32,
    /// Radius growth per radian
    pub radius_const: f32,
    /// Angle the avatar starts at
    pub angle_init: f32,
    /// Angle at which the run ends
    pub angle_max: f32,
}

impl Default for SpiralSettings {
    fn default() -> Self {
        Self {
            width: 5000.0,
            height: 5000.0,
            sample_interval: 10.0,
            radius_const: 30.0,
            angle_init: 1.0,
            angle_max: 2.0 * PI * 5.0,
        }
    }
}

/// Avatar movement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarSettings {
    /// Linear speed along the track (px/s)
    pub speed: f32,
    /// Draw radius
    pub size: f32,
    /// Speed gained per correct hit
    pub correct_speed_boost: f32,
    /// Added to the reversed speed when bouncing off a wrong point
    pub bounce_offset: f32,
    /// Speed regained per tick while bouncing
    pub bounce_recovery_step: f32,
}

impl Default for AvatarSettings {
    fn default() -> Self {
        Self {
            speed: AVATAR_SPEED,
            size: AVATAR_SIZE,
            correct_speed_boost: 3.0,
            bounce_offset: 5.0,
            bounce_recovery_step: 10.0,
        }
    }
}

/// Score and bonus rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    /// Bonus gained per second while on a matching path
    pub bonus_increase: f64,
    /// Fraction of the bonus lost per second off path
    pub bonus_decay: f64,
    /// Bonus below this snaps to zero
    pub bonus_floor: f64,
    /// Score per bonus point on a correct hit
    pub hit_multiplier: f64,
    /// Bonus added by a correct hit
    pub correct_bonus: f64,
    /// Score is divided by this on an incorrect hit
    pub miss_divisor: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            bonus_increase: 30.0,
            bonus_decay: 0.3,
            bonus_floor: 1.0,
            hit_multiplier: 1000.0,
            correct_bonus: 10.0,
            miss_divisor: 5.0,
        }
    }
}

/// Path generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Segments never start within this angle of the spiral end
    pub start_margin: f32,
    /// Segment angular length range [min, max)
    pub min_length: f32,
    pub max_length: f32,
    /// Each segment gets 1 + up to this many points
    pub max_extra_points: u32,
    /// Chance that a point is neutral (cannot be hit)
    pub neutral_chance: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            start_margin: 2.0 * PI,
            min_length: PI / 8.0,
            max_length: PI / 2.0,
            max_extra_points: 9,
            neutral_chance: 0.01,
        }
    }
}

/// What a difficulty level plays with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultySettings {
    /// Selectable colors, in HUD order
    pub colors: Vec<ColorId>,
    /// Candidate segments tried during generation
    pub target_segments: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyTable {
    pub easy: DifficultySettings,
    pub medium: DifficultySettings,
    pub hard: DifficultySettings,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: DifficultySettings {
                colors: vec![ColorId::Blue, ColorId::Red],
                target_segments: 100,
            },
            medium: DifficultySettings {
                colors: vec![ColorId::Blue, ColorId::Red, ColorId::Green],
                target_segments: 100,
            },
            hard: DifficultySettings {
                colors: ColorId::ALL.to_vec(),
                target_segments: 100,
            },
        }
    }
}

impl DifficultyTable {
    pub fn get(&self, difficulty: Difficulty) -> &DifficultySettings {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

/// Visible window
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
        }
    }
}

fn default_palettes() -> [PaletteSpec; 4] {
    ColorId::ALL.map(PaletteSpec::default_for)
}

/// Complete game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub spiral: SpiralSettings,
    pub avatar: AvatarSettings,
    pub scoring: ScoringSettings,
    pub generation: GenerationSettings,
    pub difficulties: DifficultyTable,
    pub viewport: ViewportSettings,
    /// Palettes in `ColorId` order (blue, red, green, yellow)
    #[serde(default = "default_palettes")]
    pub palettes: [PaletteSpec; 4],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spiral: SpiralSettings::default(),
            avatar: AvatarSettings::default(),
            scoring: ScoringSettings::default(),
            generation: GenerationSettings::default(),
            difficulties: DifficultyTable::default(),
            viewport: ViewportSettings::default(),
            palettes: default_palettes(),
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const DEFAULT_PATH: &'static str = "spiral-dash.json";

    /// Load settings from `path`. A missing file means defaults; anything
    /// else that goes wrong is a configuration error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let spiral = &self.spiral;
        if spiral.angle_init >= spiral.angle_max {
            return Err(ConfigError::EmptySpiral {
                init: spiral.angle_init,
                max: spiral.angle_max,
            });
        }
        for (field, value) in [
            ("radius_const", spiral.radius_const),
            ("sample_interval", spiral.sample_interval),
            ("width", spiral.width),
            ("height", spiral.height),
            ("viewport width", self.viewport.width),
            ("viewport height", self.viewport.height),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        for difficulty in Difficulty::ALL {
            let entry = self.difficulties.get(difficulty);
            if entry.colors.is_empty() {
                return Err(ConfigError::NoColors {
                    difficulty: difficulty.as_str(),
                });
            }
            for (i, color) in entry.colors.iter().enumerate() {
                if entry.colors[..i].contains(color) {
                    return Err(ConfigError::DuplicateColor {
                        difficulty: difficulty.as_str(),
                        color: color.as_str(),
                    });
                }
            }
            if entry.target_segments == 0 {
                return Err(ConfigError::NoSegments {
                    difficulty: difficulty.as_str(),
                });
            }
        }

        let generation = &self.generation;
        let (low, high) = self.start_range();
        if low >= high {
            return Err(ConfigError::EmptyStartRange { low, high });
        }
        if generation.min_length <= 0.0 || generation.min_length >= generation.max_length {
            return Err(ConfigError::BadLengthRange {
                min: generation.min_length,
                max: generation.max_length,
            });
        }
        if !(0.0..=1.0).contains(&generation.neutral_chance) {
            return Err(ConfigError::BadProbability(generation.neutral_chance));
        }

        self.palettes()?;
        Ok(())
    }

    /// Angle range segment starts are drawn from
    pub fn start_range(&self) -> (f32, f32) {
        (
            self.spiral.angle_init + PI,
            self.spiral.angle_max - self.generation.start_margin,
        )
    }

    /// Colors playable at a difficulty
    pub fn colors(&self, difficulty: Difficulty) -> &[ColorId] {
        &self.difficulties.get(difficulty).colors
    }

    /// Resolved palettes
    pub fn palettes(&self) -> Result<Palettes, ConfigError> {
        Palettes::from_specs(&self.palettes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "avatar": { "speed": 250.0 } }"#).unwrap();
        assert_eq!(settings.avatar.speed, 250.0);
        assert_eq!(settings.avatar.size, AVATAR_SIZE);
        assert_eq!(settings.spiral.radius_const, 30.0);
        assert_eq!(settings.colors(Difficulty::Hard).len(), 4);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_inverted_spiral_rejected() {
        let json = r#"{ "spiral": { "angle_init": 20.0, "angle_max": 10.0 } }"#;
        assert!(matches!(
            Settings::from_json(json),
            Err(ConfigError::EmptySpiral { .. })
        ));
    }

    #[test]
    fn test_empty_difficulty_rejected() {
        let mut settings = Settings::default();
        settings.difficulties.easy.colors.clear();
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::NoColors { difficulty: "easy" })
        ));
    }

    #[test]
    fn test_duplicate_color_rejected() {
        let mut settings = Settings::default();
        settings.difficulties.medium.colors = vec![ColorId::Red, ColorId::Red];
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::DuplicateColor { color: "red", .. })
        ));
    }

    #[test]
    fn test_start_range_must_fit() {
        let mut settings = Settings::default();
        settings.generation.start_margin = 100.0;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::EmptyStartRange { .. })
        ));
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("Easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("med"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("exit"), None);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("spiral-dash-settings-does-not-exist.json");
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.viewport.width, 640.0);
    }
}
