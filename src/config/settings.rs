//! Configuration settings for quickadd.
//!
//! Settings are loaded from `~/.quickadd/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::core::DateOrder;
use crate::error::QuickAddError;
use crate::features::nlp::{ParsingMode, TaskParser};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Parsing behaviour.
    pub parsing: ParsingConfig,
    /// Task server connection, used by the preview.
    pub server: ServerConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    pub default_output: OutputFormat,
    /// Color output setting.
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Parsing settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ParsingConfig {
    /// Token dialect.
    pub mode: ParsingMode,
    /// How `a/b` numeric dates are read.
    pub date_order: DateOrder,
}

impl ParsingConfig {
    /// A parser configured from these settings.
    #[must_use]
    pub const fn parser(&self) -> TaskParser {
        TaskParser::new(self.mode).with_date_order(self.date_order)
    }
}

/// Task server settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the task server.
    pub url: String,
    /// API token.
    pub api_token: String,
    /// Project used when the input names none.
    #[serde(default = "default_project_id")]
    pub default_project_id: i64,
}

const fn default_project_id() -> i64 {
    1
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_token: String::new(),
            default_project_id: default_project_id(),
        }
    }
}

impl ServerConfig {
    /// Both the URL and the token are set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.api_token.is_empty()
    }

    /// The token as it may be displayed.
    #[must_use]
    pub fn masked_token(&self) -> &'static str {
        if self.api_token.is_empty() {
            "empty"
        } else {
            "***"
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, QuickAddError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, QuickAddError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            QuickAddError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        // an empty file deserializes to a YAML null
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| {
            QuickAddError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), QuickAddError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), QuickAddError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| QuickAddError::Config(format!("Failed to serialize config: {e}")))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents).map_err(|e| {
            QuickAddError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
