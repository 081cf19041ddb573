//! Configuration management for `fixdesk`.
//!
//! Configuration is loaded from YAML with support for:
//! - Session config (./fixdesk.yaml)
//! - Explicit path override (--config or `FIXDESK_CONFIG`)
//! - Environment variable overrides (`FIXDESK_NO_SAMPLE`,
//!   `FIXDESK_DEFAULT_TYPE`)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fixdesk_lib::IssueType;
use serde::{Deserialize, Serialize};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "FIXDESK_CONFIG";
/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "fixdesk.yaml";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Seed the demo dataset into new sessions.
    pub seed_sample_data: bool,

    /// Default reporter when `--raised-by` is not given.
    pub reporter: Option<String>,

    /// Default issue type when `--type` is not given.
    pub default_type: IssueType,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            reporter: None,
            default_type: IssueType::Common,
        }
    }
}

impl Config {
    /// Load configuration: explicit path, then `FIXDESK_CONFIG`, then
    /// `./fixdesk.yaml` if present, then defaults. Environment overrides
    /// are applied last.
    ///
    /// # Errors
    ///
    /// Returns an error if a named config file is unreadable or invalid.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        let path = explicit_path.map(Path::to_path_buf).or(env_path);

        let mut config = match path {
            Some(path) => Self::load_file(&path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_overrides(
            std::env::var("FIXDESK_NO_SAMPLE").ok().as_deref(),
            std::env::var("FIXDESK_DEFAULT_TYPE").ok().as_deref(),
        );
        Ok(config)
    }

    fn load_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse a YAML config document.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed YAML or unknown fields.
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(Into::into)
    }

    fn apply_overrides(&mut self, no_sample: Option<&str>, default_type: Option<&str>) {
        if let Some(value) = no_sample {
            if !value.is_empty() && value != "0" {
                self.seed_sample_data = false;
            }
        }
        if let Some(value) = default_type {
            if let Ok(issue_type) = value.parse::<IssueType>() {
                self.default_type = issue_type;
            }
        }
    }
}
