//! Generator configuration
//!
//! Loaded from JSON; every field is optional and falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ATTEMPTS, MAX_WALK_STEPS};
use crate::error::ConfigError;
use crate::level::WalkWeights;

/// Settings for `LevelGenerator`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Odds of left, right and down moves in the route walk
    pub walk: WalkWeights,
    /// Walk steps before a route attempt is abandoned
    pub max_walk_steps: u32,
    /// Route attempts before generation gives up
    pub max_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            walk: WalkWeights::default(),
            max_walk_steps: MAX_WALK_STEPS,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check limits; walk weights are validated when they are built
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_walk_steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}
