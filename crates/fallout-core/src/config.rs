//! Collector configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Depth bound applied when none is configured.
pub const DEFAULT_MAX_DEPTH: u32 = 16;

/// Upper bound on `max_depth`; recursion depth grows with it.
pub const MAX_DEPTH_LIMIT: u32 = 256;

/// `../` segments from a change view back to the site root.
pub const DEFAULT_LEVELS_TO_ROOT: usize = 4;

pub const DEFAULT_SITE_NAME: &str = "admin";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid collector config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("max_depth must be at least 1, got {0}")]
    MaxDepthTooSmall(u32),

    #[error("max_depth must be at most {limit}, got {0}", limit = MAX_DEPTH_LIMIT)]
    MaxDepthTooLarge(u32),

    #[error("site_name must not be empty")]
    EmptySiteName,
}

///
/// CollectorConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollectorConfig {
    /// Traversal depth bound; depth starts at 1 and grows by 2 per hop.
    pub max_depth: u32,

    pub levels_to_root: usize,
    pub site_name: String,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            levels_to_root: DEFAULT_LEVELS_TO_ROOT,
            site_name: DEFAULT_SITE_NAME.to_string(),
        }
    }
}

impl CollectorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::MaxDepthTooSmall(self.max_depth));
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::MaxDepthTooLarge(self.max_depth));
        }
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::EmptySiteName);
        }

        Ok(())
    }
}

///
/// TESTS
///
