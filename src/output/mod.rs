//! Output formatting for quickadd.
//!
//! This module renders parsed tasks as pretty text, JSON, or a launcher preview.

mod json;
mod preview;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::QuickAddError;
use crate::features::nlp::ParsedTask;

pub use json::*;
pub use preview::*;
pub use pretty::*;

/// Format a parsed task based on output format
///
/// # Errors
///
/// Returns `QuickAddError::Json` if JSON serialization fails.
pub fn format_task(task: &ParsedTask, format: OutputFormat) -> Result<String, QuickAddError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task)),
        OutputFormat::Json => format_task_json(task),
    }
}
