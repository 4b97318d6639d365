//! User configuration
//!
//! Read from `config.toml` in the platform configuration directory
//! (`~/.config/curate/config.toml` on Linux). Every key is optional:
//!
//! ```toml
//! [import]
//! max_listed_duplicates = 5
//! max_identifier_chars = 60
//!
//! [notices]
//! duplicate_ttl_ms = 5000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors that can occur when loading the configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurateConfig {
    pub import: ImportConfig,
    pub notices: NoticeConfig,
}

/// Limits on the duplicate feedback produced by bulk import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    /// How many skipped identifiers are named before "and N more"
    pub max_listed_duplicates: usize,
    /// Longer identifiers are cut and end in an ellipsis
    pub max_identifier_chars: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_listed_duplicates: default_max_listed_duplicates(),
            max_identifier_chars: default_max_identifier_chars(),
        }
    }
}

fn default_max_listed_duplicates() -> usize {
    5
}
fn default_max_identifier_chars() -> usize {
    60
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoticeConfig {
    /// Lifetime of the "already added" notice, in milliseconds
    pub duplicate_ttl_ms: u64,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            duplicate_ttl_ms: default_duplicate_ttl_ms(),
        }
    }
}

fn default_duplicate_ttl_ms() -> u64 {
    5000
}

impl NoticeConfig {
    pub fn duplicate_ttl(&self) -> Duration {
        Duration::from_millis(self.duplicate_ttl_ms)
    }
}

impl CurateConfig {
    /// Parse a configuration document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CurateConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path; the file must exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(path) => {
                tracing::debug!(path = %path.display(), "No configuration file, using defaults");
                Ok(Self::default())
            }
            None => {
                tracing::debug!("No configuration directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `<config dir>/curate/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("curate").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // Room for at least one character plus the ellipsis
        if self.import.max_identifier_chars < 2 {
            return Err(ConfigError::InvalidValue {
                key: "import.max_identifier_chars".to_string(),
                message: "must be at least 2".to_string(),
            });
        }
        Ok(())
    }
}
