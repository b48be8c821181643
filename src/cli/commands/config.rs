//! `config` subcommands.

use std::path::Path;

use serde_json::json;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::Config;
use crate::error::QuickAddError;

/// Execute config subcommands against the file at `path`.
///
/// # Errors
///
/// Returns an error if the config file cannot be written, or if `init`
/// would overwrite an existing file without `--force`.
pub fn config(
    cmd: ConfigCommands,
    current: &Config,
    path: &Path,
    format: OutputFormat,
) -> Result<String, QuickAddError> {
    match cmd {
        ConfigCommands::Show => show(current, format),
        ConfigCommands::Path => Ok(path.display().to_string()),
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                return Err(QuickAddError::InvalidArgument(format!(
                    "config file already exists at {} (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save_to_path(path)?;
            tracing::debug!(path = %path.display(), "wrote default config");
            Ok(format!("Wrote default config to {}", path.display()))
        },
        ConfigCommands::SetMode { mode } => {
            let mut updated = current.clone();
            updated.parsing.mode = mode;
            updated.save_to_path(path)?;
            Ok(format!("Parsing mode set to {mode}"))
        },
    }
}

fn show(config: &Config, format: OutputFormat) -> Result<String, QuickAddError> {
    let mut shown = config.clone();
    if !shown.server.api_token.is_empty() {
        shown.server.api_token = shown.server.masked_token().to_string();
    }

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "config": shown,
            "server_configured": config.server.is_configured(),
        }))?),
        OutputFormat::Pretty => serde_yaml::to_string(&shown)
            .map(|yaml| yaml.trim_end().to_string())
            .map_err(|e| QuickAddError::Config(format!("Failed to serialize config: {e}"))),
    }
}
