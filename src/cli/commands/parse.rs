//! `parse` and `preview`.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{OutputFormat, ParseArgs};
use crate::config::Config;
use crate::error::QuickAddError;
use crate::features::nlp::{ParsedTask, TaskParser};
use crate::output::{format_preview, format_task, preview_title};

/// Parse the input and print the task.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn parse(args: &ParseArgs, config: &Config, format: OutputFormat) -> Result<String, QuickAddError> {
    let task = run_parser(args, config);
    format_task(&task, format)
}

/// Print the launcher preview for the input.
///
/// Empty input shows the syntax help for the active dialect; incomplete
/// server settings show a configuration notice instead of a preview.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn preview(args: &ParseArgs, config: &Config, format: OutputFormat) -> Result<String, QuickAddError> {
    let parser = parser_for(args, config);

    if args.input().trim().is_empty() {
        return render(
            "Vikunja Quick Add",
            parser.mode.syntax_help(),
            None,
            format,
        );
    }

    let server = &config.server;
    if !server.is_configured() {
        let subtitle = format!(
            "Please configure server URL and API token in settings. Current: URL='{}', Token='{}'",
            server.url,
            server.masked_token()
        );
        return render("⚠️ Configuration Required", &subtitle, None, format);
    }

    let task = run_parser(args, config);
    let subtitle = format_preview(&task, server.default_project_id);
    render(&preview_title(&task), &subtitle, Some(&task), format)
}

fn parser_for(args: &ParseArgs, config: &Config) -> TaskParser {
    let mut parser = config.parsing.parser();
    if let Some(mode) = args.mode {
        parser.mode = mode;
    }
    if let Some(order) = args.date_order {
        parser.date_order = order;
    }
    parser
}

fn run_parser(args: &ParseArgs, config: &Config) -> ParsedTask {
    let parser = parser_for(args, config);
    let input = args.input();
    match args.now {
        Some(now) => parser.parse_at(&input, now),
        None => parser.parse(&input),
    }
}

fn render(
    title: &str,
    subtitle: &str,
    task: Option<&ParsedTask>,
    format: OutputFormat,
) -> Result<String, QuickAddError> {
    match format {
        OutputFormat::Json => {
            let output = json!({
                "title": title,
                "subtitle": subtitle,
                "task": task,
            });
            Ok(serde_json::to_string_pretty(&output)?)
        },
        OutputFormat::Pretty => Ok(format!("{}\n{}", title.bold(), subtitle.dimmed())),
    }
}
