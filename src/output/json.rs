//! JSON output formatting for quickadd.

use serde_json::json;

use crate::error::QuickAddError;
use crate::features::nlp::ParsedTask;

/// Format a parsed task as JSON.
///
/// `due_date` is an ISO-8601 local date-time (no offset), `priority` the
/// numeric level.
///
/// # Errors
///
/// Returns `QuickAddError::Json` if serialization fails.
pub fn format_task_json(task: &ParsedTask) -> Result<String, QuickAddError> {
    let output = json!({
        "title": task.title,
        "project": task.project,
        "priority": task.priority.level(),
        "labels": task.labels,
        "due_date": task.due_date.map(|d| d.format("%Y-%m-%dT%H:%M:%S").to_string()),
        "description": task.description,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
