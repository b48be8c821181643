//! quickadd - natural language task entry
//!
//! This crate turns a single line of text into a structured task: title,
//! due date-time, project, priority and labels, using either the Vikunja
//! (`*label +project !3`) or Todoist (`@label #project p3`) marker dialect.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;

pub use crate::core::{DateContext, DateOrder};
pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::QuickAddError;
pub use features::nlp::{parse_task, parse_task_with, ParsedTask, ParsingMode, Priority, TaskParser};
