//! Reducer settings, loaded from and saved to JSON

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default lower bound for the requested distinct-sound count
pub const MIN_TARGET: usize = 1;

/// Pairs at or above this distance are never merge candidates.
/// Larger than `Syllable::MAX_DISTANCE`, so by default every pair qualifies.
pub const DEFAULT_MERGE_THRESHOLD: u32 = 43;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("target of {target} distinct sounds is below the minimum of {minimum}")]
    BelowMinimumTarget { target: usize, minimum: usize },

    #[error("failed to access config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reduction settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReducerConfig {
    /// Smallest accepted target count
    #[serde(default = "default_min_target")]
    pub min_target: usize,
    /// Exclusive upper bound on the distance of a merge candidate pair
    #[serde(default = "default_merge_threshold")]
    pub merge_threshold: u32,
}

fn default_min_target() -> usize {
    MIN_TARGET
}

fn default_merge_threshold() -> u32 {
    DEFAULT_MERGE_THRESHOLD
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            min_target: default_min_target(),
            merge_threshold: default_merge_threshold(),
        }
    }
}

impl ReducerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_target(mut self, min_target: usize) -> Self {
        self.min_target = min_target;
        self
    }

    pub fn with_merge_threshold(mut self, merge_threshold: u32) -> Self {
        self.merge_threshold = merge_threshold;
        self
    }

    /// Reject a target below `min_target`
    pub fn validate_target(&self, target: usize) -> Result<usize, ConfigError> {
        if target < self.min_target {
            return Err(ConfigError::BelowMinimumTarget {
                target,
                minimum: self.min_target,
            });
        }
        Ok(target)
    }
}

/// Default config location: ~/.config/phonoreduce/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("phonoreduce").join("config.json")
}

/// Load config (defaults when the file is missing or unparsable)
pub fn load_config_from(path: &Path) -> ReducerConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring invalid config {}: {}", path.display(), e);
            ReducerConfig::default()
        }),
        Err(_) => ReducerConfig::default(),
    }
}

pub fn save_config_to(path: &Path, config: &ReducerConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
