//! Command implementations for quickadd.
//!
//! Each command returns the text to print; `main` does the printing.

mod completions;
mod config;
mod parse;

pub use completions::{completions, generate_completions};
pub use config::config;
pub use parse::{parse, preview};
