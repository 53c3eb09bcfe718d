//! Generator configuration
//!
//! Defaults live in code; a JSON file may override any subset of fields.

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::composer::DEFAULT_MIDDLE_CHANCE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Smallest number of names handed out per request
    pub min_count: usize,
    /// Largest number of names handed out per request
    pub max_count: usize,
    /// Probability of inserting a middle fragment
    pub middle_chance: f64,
    /// Fixed seed for reproducible output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_count: 1,
            max_count: 10,
            middle_chance: DEFAULT_MIDDLE_CHANCE,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&raw)?;
        info!(path = %path.display(), "Loaded generator config");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_count == 0 {
            return Err(ConfigError::Invalid("min_count must be at least 1".into()));
        }
        if self.min_count > self.max_count {
            return Err(ConfigError::Invalid(format!(
                "min_count ({}) is greater than max_count ({})",
                self.min_count, self.max_count
            )));
        }
        if !(0.0..=1.0).contains(&self.middle_chance) {
            return Err(ConfigError::Invalid(format!(
                "middle_chance must be between 0 and 1, got {}",
                self.middle_chance
            )));
        }
        Ok(())
    }

    /// Force a requested count into `min_count..=max_count`
    pub fn clamp_count(&self, requested: i64) -> usize {
        // Negative requests fall to the bottom of the range
        usize::try_from(requested)
            .unwrap_or(0)
            .clamp(self.min_count, self.max_count)
    }

    /// Seeded generator when a seed is configured, otherwise from entropy
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
