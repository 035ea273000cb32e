//! High score list
//!
//! Persisted to a JSON file as an array of five scores, highest first.
//! A missing or unreadable file is replaced with five zeros.

use std::path::{Path, PathBuf};

use crate::consts::HIGH_SCORE_SLOTS;
use crate::error::HighScoreError;

/// Top scores backed by a file
#[derive(Debug, Clone)]
pub struct HighScores {
    path: PathBuf,
    scores: [u64; HIGH_SCORE_SLOTS],
}

impl HighScores {
    /// Default file name
    pub const DEFAULT_PATH: &'static str = "highscores.json";

    /// Load from `path`, recreating the file if it is missing or corrupt
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::read(&path) {
            Some(mut scores) => {
                scores.sort_unstable_by(|a, b| b.cmp(a));
                log::info!("Loaded high scores from {}", path.display());
                Self { path, scores }
            }
            None => {
                log::warn!("High scores at {} missing or corrupt, resetting", path.display());
                let fresh = Self {
                    path,
                    scores: [0; HIGH_SCORE_SLOTS],
                };
                if let Err(err) = fresh.save() {
                    log::warn!("{}", err);
                }
                fresh
            }
        }
    }

    fn read(path: &Path) -> Option<[u64; HIGH_SCORE_SLOTS]> {
        let json = std::fs::read_to_string(path).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Write the list to its file
    pub fn save(&self) -> Result<(), HighScoreError> {
        let json = serde_json::to_string(&self.scores)?;
        std::fs::write(&self.path, json).map_err(|source| HighScoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current scores, highest first
    pub fn top_scores(&self) -> [u64; HIGH_SCORE_SLOTS] {
        self.scores
    }

    pub fn top_score(&self) -> u64 {
        self.scores[0]
    }

    /// Whether a score would enter the list
    pub fn qualifies(&self, score: u64) -> bool {
        score > 0 && score > self.scores[HIGH_SCORE_SLOTS - 1]
    }

    /// Rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        self.scores.iter().position(|&s| score > s).map(|i| i + 1)
    }

    /// Add a score and persist. Returns the rank achieved, if any.
    /// A failed write is logged; the in-memory list is still updated.
    pub fn record(&mut self, score: u64) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        let i = rank - 1;
        self.scores.copy_within(i..HIGH_SCORE_SLOTS - 1, i + 1);
        self.scores[i] = score;

        match self.save() {
            Ok(()) => log::info!("High score {} recorded at rank {}", score, rank),
            Err(err) => log::warn!("{}", err),
        }
        Some(rank)
    }
}
