//! Error types
//!
//! Gameplay never fails: boundary exits, generation shortfalls and bad
//! lane/color requests are ordinary state. Errors only come from setup
//! (configuration) and from writing the high score file.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid or unreadable configuration. Raised before a session starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("spiral angle range is empty: init {init} must be below max {max}")]
    EmptySpiral { init: f32, max: f32 },

    #[error("spiral {field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("difficulty {difficulty} has no colors")]
    NoColors { difficulty: &'static str },

    #[error("difficulty {difficulty} lists {color} more than once")]
    DuplicateColor {
        difficulty: &'static str,
        color: &'static str,
    },

    #[error("difficulty {difficulty} requests zero segments")]
    NoSegments { difficulty: &'static str },

    #[error("segment start range [{low}, {high}) is empty")]
    EmptyStartRange { low: f32, high: f32 },

    #[error("segment length range [{min}, {max}) is invalid")]
    BadLengthRange { min: f32, max: f32 },

    #[error("neutral point chance {0} is outside [0, 1]")]
    BadProbability(f64),

    #[error("palette {palette}: invalid color {value:?} for {field}")]
    InvalidColor {
        palette: &'static str,
        field: &'static str,
        value: String,
    },
}

/// Failure writing the high score file
#[derive(Error, Debug)]
pub enum HighScoreError {
    #[error("failed to write high scores to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode high scores: {0}")]
    Encode(#[from] serde_json::Error),
}
