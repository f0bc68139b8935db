use std::path::Path;

use serde::{Deserialize, Serialize};
use shardline_core::RestoreFlag;

use crate::{Error, Result};

/// Configuration for statement restoration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestoreConfig {
    /// Flags applied to every restore
    pub flags: RestoreFlag,
    /// Fallback log filter when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for RestoreConfig {
    fn default() -> Self {
        Self {
            flags: RestoreFlag::DEFAULT,
            log_level: "info".to_string(),
        }
    }
}

impl RestoreConfig {
    /// Load and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: RestoreConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Add `flag` to the configured set. A string quote flag replaces the
    /// other one instead of being combined with it.
    pub fn apply_flag(&mut self, flag: RestoreFlag) {
        if flag.contains(RestoreFlag::STRING_SINGLE_QUOTES) {
            self.flags.remove(RestoreFlag::STRING_DOUBLE_QUOTES);
        }
        if flag.contains(RestoreFlag::STRING_DOUBLE_QUOTES) {
            self.flags.remove(RestoreFlag::STRING_SINGLE_QUOTES);
        }
        self.flags |= flag;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.flags.contains(RestoreFlag::STRING_SINGLE_QUOTES | RestoreFlag::STRING_DOUBLE_QUOTES) {
            return Err(Error::Config(
                "STRING_SINGLE_QUOTES and STRING_DOUBLE_QUOTES cannot both be set".into(),
            ));
        }
        if self.log_level.trim().is_empty() {
            return Err(Error::Config("log_level cannot be empty".into()));
        }
        Ok(())
    }
}
