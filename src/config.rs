/// Runtime configuration, optionally loaded from a RON file.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{MadLibError, Result};

pub const DEFAULT_STORIES_DIR: &str = "./stories";
pub const DEFAULT_EXTENSION: &str = "mdlb";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base directory for relative template names and random selection.
    pub stories_dir: PathBuf,
    /// File extension of story templates, without the dot.
    pub extension: String,
    /// Fixed seed for shuffling and selection. Entropy when unset.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stories_dir: PathBuf::from(DEFAULT_STORIES_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            seed: None,
        }
    }
}

impl Config {
    /// Load a config from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| MadLibError::Config(format!("{}: {}", path.display(), e)))?;
        Self::parse_ron(&contents)
    }

    /// Parse a config from a RON string. Missing fields take their defaults.
    pub fn parse_ron(input: &str) -> Result<Config> {
        ron::from_str(input).map_err(|e| MadLibError::Config(e.to_string()))
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, stories_dir: Option<PathBuf>, seed: Option<u64>) -> Config {
        if let Some(dir) = stories_dir {
            self.stories_dir = dir;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}
