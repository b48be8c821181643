//! Configuration management for quickadd.
//!
//! This module handles loading and saving configuration from `~/.quickadd/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, ParsingConfig, ServerConfig};
