//! Parsed task record and the vocabulary around it.

use chrono::{NaiveDateTime, Timelike};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Lexical dialect used to mark labels, project and priority.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsingMode {
    /// `*label`, `+project`, `!1`-`!5`
    #[default]
    Vikunja,
    /// `@label`, `#project`, `p1`-`p5`
    Todoist,
}

impl ParsingMode {
    /// One-line summary of the markers, shown when there is nothing to parse yet.
    #[must_use]
    pub const fn syntax_help(self) -> &'static str {
        match self {
            Self::Vikunja => {
                "Enter a task with optional due date and tags (+project, !1-5, *label)"
            },
            Self::Todoist => {
                "Enter a task with optional due date and tags (#project, p1-p5, @label)"
            },
        }
    }
}

impl std::fmt::Display for ParsingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Vikunja => "vikunja",
            Self::Todoist => "todoist",
        })
    }
}

/// Task priority, level 0 (unset) through 5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Priority {
    /// No priority given.
    #[default]
    Unset,
    /// Level 1.
    Low,
    /// Level 2.
    Medium,
    /// Level 3.
    High,
    /// Level 4.
    Urgent,
    /// Level 5.
    DoNow,
}

impl Priority {
    /// Map a numeric level to a priority; `None` outside `0..=5`.
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Unset),
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            4 => Some(Self::Urgent),
            5 => Some(Self::DoNow),
            _ => None,
        }
    }

    /// Numeric level, 0 meaning unset.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Unset => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Urgent => 4,
            Self::DoNow => 5,
        }
    }

    /// Whether a priority was given at all.
    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.level()
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level).ok_or_else(|| format!("priority must be 0-5, got {level}"))
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Unset => "none",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
            Self::DoNow => "DO NOW",
        })
    }
}

/// Result of parsing one line of task input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTask {
    /// Whatever text is left once every token is removed; may be empty.
    pub title: String,
    /// Project name, case preserved.
    pub project: Option<String>,
    /// Priority level.
    pub priority: Priority,
    /// Labels in order of appearance, duplicates kept.
    pub labels: Vec<String>,
    /// Local due date-time; a midnight time means "date only".
    pub due_date: Option<NaiveDateTime>,
    /// Never filled in by parsing.
    pub description: Option<String>,
}

impl ParsedTask {
    /// Check if a due date was found.
    #[must_use]
    pub const fn has_due_date(&self) -> bool {
        self.due_date.is_some()
    }

    /// Check if the due date carries a time other than midnight.
    #[must_use]
    pub fn due_has_time(&self) -> bool {
        self.due_date
            .is_some_and(|due| due.hour() != 0 || due.minute() != 0)
    }

    /// Get the due date as an ISO date string.
    #[must_use]
    pub fn due_date_iso(&self) -> Option<String> {
        self.due_date.map(|due| due.format("%Y-%m-%d").to_string())
    }
}
