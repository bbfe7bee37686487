//! Startup configuration.

use crate::error::ConfigError;
use crate::feedback::ScoringRule;
use crate::DEFAULT_TILE_SIZE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Asset locations and game options, read once from a JSON file.
///
/// Every field is optional:
///
/// ```json
/// { "letters": "letters.png", "tile_size": 204, "scoring": "standard" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Letter sheet image
    pub letters: PathBuf,
    /// Candidate secrets
    pub answers: PathBuf,
    /// Accepted guesses
    pub valid_guesses: PathBuf,
    pub tile_size: u32,
    pub scoring: ScoringRule,
    /// Directory rendered boards are written to
    pub output_dir: PathBuf,
    /// Fixed seed for secret selection; random when absent
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            letters: PathBuf::from("letters.png"),
            answers: PathBuf::from("dicts/coca_derivative_2000.txt"),
            valid_guesses: PathBuf::from("dicts/all_valid.txt"),
            tile_size: DEFAULT_TILE_SIZE,
            scoring: ScoringRule::default(),
            output_dir: PathBuf::from("."),
            seed: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve relative asset paths against `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        for path in [
            &mut self.letters,
            &mut self.answers,
            &mut self.valid_guesses,
            &mut self.output_dir,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }
}
