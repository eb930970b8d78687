//! TOML configuration.
//!
//! Looked up at `--config <PATH>` when given, otherwise at
//! `$XDG_CONFIG_HOME/ledger-calc/config.toml` (or the platform equivalent).
//! A missing default file is not an error; every field has a default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ai::DEFAULT_SYSTEM_PROMPT;
use crate::calculator::ErrorPolicy;
use crate::error::ConfigError;

const APP_DIR: &str = "ledger-calc";
const CONFIG_FILE: &str = "config.toml";

/// Runtime configuration for the calculator session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalcConfig {
    /// File the history ledger is mirrored to.
    #[serde(default = "default_history_file")]
    pub history_file: PathBuf,
    /// Report malformed operands, zero divisors and unknown operators
    /// instead of defaulting them.
    #[serde(default)]
    pub strict: bool,
    /// Preamble placed before the template in simulated LLM prompts.
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    /// Fixed seed for the evaluator's random fallback.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            history_file: default_history_file(),
            strict: false,
            system_prompt: default_system_prompt(),
            seed: None,
        }
    }
}

fn default_history_file() -> PathBuf {
    PathBuf::from("history.txt")
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

impl CalcConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Load from an explicit path, else the default location if it exists,
    /// else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        if self.strict {
            ErrorPolicy::Strict
        } else {
            ErrorPolicy::Lenient
        }
    }
}

/// Default config file location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
