//! Natural language parsing for task entry.
//!
//! This module turns one line of input into a [`ParsedTask`]:
//! - "buy milk tomorrow 3pm *errands +Home !2" (Vikunja markers)
//! - "call mom friday evening @family #Personal p1" (Todoist markers)
//! - "vacation 7/4/2026", "report in 2 weeks", "standup 17h30"

mod dialect;
mod parser;
mod task;
mod text;

pub use dialect::{extract_tokens, Extraction};
pub use parser::{parse_task, parse_task_with, TaskParser};
pub use task::{ParsedTask, ParsingMode, Priority};
pub use text::{normalize_whitespace, remove_spans};
