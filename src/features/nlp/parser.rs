//! Natural language task parser.
//!
//! Parses strings like `"review PR tomorrow 3pm +work !2 *code"` into a
//! [`ParsedTask`]: dialect tokens first, then a due date on what remains,
//! then the leftover text becomes the title.

use chrono::NaiveDateTime;
use tracing::debug;

use super::dialect::extract_tokens;
use super::task::{ParsedTask, ParsingMode};
use super::text::{normalize_whitespace, remove_spans};
use crate::core::{extract_datetime, DateContext, DateOrder};

/// Parse a task line against the current local time.
///
/// # Examples
///
/// ```
/// use quickadd::features::nlp::{parse_task, ParsingMode, Priority};
///
/// let task = parse_task("buy milk *errands +Home !2", ParsingMode::Vikunja);
/// assert_eq!(task.title, "buy milk");
/// assert_eq!(task.labels, vec!["errands"]);
/// assert_eq!(task.project, Some("Home".to_string()));
/// assert_eq!(task.priority, Priority::Medium);
///
/// let task = parse_task("standup tomorrow 9am #team p1", ParsingMode::Todoist);
/// assert_eq!(task.title, "standup");
/// assert!(task.due_date.is_some());
/// ```
#[must_use]
pub fn parse_task(input: &str, mode: ParsingMode) -> ParsedTask {
    parse_task_with(input, mode, &DateContext::now())
}

/// Parse a task line against a fixed reference context.
///
/// Never fails: unrecognized fragments stay in the title.
#[must_use]
pub fn parse_task_with(input: &str, mode: ParsingMode, ctx: &DateContext) -> ParsedTask {
    let input = input.trim();
    if input.is_empty() {
        return ParsedTask::default();
    }

    let tokens = extract_tokens(input, mode);
    let mut task = ParsedTask {
        project: tokens.project,
        priority: tokens.priority,
        labels: tokens.labels,
        ..ParsedTask::default()
    };

    let mut remaining = tokens.residual;
    if let Some(found) = extract_datetime(&remaining, ctx) {
        task.due_date = Some(found.datetime);
        remaining = remove_spans(&remaining, found.spans);
    }

    task.title = normalize_whitespace(&remaining);
    debug!(title = %task.title, "parsed task");
    task
}

/// A parser bound to one dialect and date convention, as read from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskParser {
    /// Token dialect.
    pub mode: ParsingMode,
    /// Numeric date convention.
    pub date_order: DateOrder,
}

impl TaskParser {
    /// Create a parser for `mode` with month-first numeric dates.
    #[must_use]
    pub const fn new(mode: ParsingMode) -> Self {
        Self {
            mode,
            date_order: DateOrder::MonthFirst,
        }
    }

    /// Use a different numeric date convention.
    #[must_use]
    pub const fn with_date_order(mut self, date_order: DateOrder) -> Self {
        self.date_order = date_order;
        self
    }

    /// Parse against the current local time.
    #[must_use]
    pub fn parse(&self, input: &str) -> ParsedTask {
        self.parse_with(input, DateContext::now())
    }

    /// Parse against a fixed instant.
    #[must_use]
    pub fn parse_at(&self, input: &str, now: NaiveDateTime) -> ParsedTask {
        self.parse_with(input, DateContext::at(now))
    }

    fn parse_with(&self, input: &str, ctx: DateContext) -> ParsedTask {
        parse_task_with(input, self.mode, &ctx.with_date_order(self.date_order))
    }
}
