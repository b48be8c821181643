use std::fmt::Write;

use colored::Colorize;

use crate::features::nlp::ParsedTask;

/// Format a parsed task as labelled, colored lines.
pub fn format_task_pretty(task: &ParsedTask) -> String {
    let mut output = format!("{}\n", "Parsed Task".yellow().bold());

    let title = if task.title.is_empty() {
        "(empty)".dimmed().to_string()
    } else {
        task.title.clone()
    };
    writeln!(output, "  {} {title}", "Title:".cyan().bold()).ok();

    if let Some(due) = task.due_date_iso() {
        writeln!(output, "  {} {due}", "Due:".cyan()).ok();
        if task.due_has_time() {
            if let Some(time) = task.due_date.map(|d| d.format("%H:%M")) {
                writeln!(output, "  {} {time}", "Time:".cyan()).ok();
            }
        }
    }
    if let Some(project) = &task.project {
        writeln!(output, "  {} {project}", "Project:".magenta()).ok();
    }
    if !task.labels.is_empty() {
        writeln!(output, "  {} {}", "Labels:".yellow(), task.labels.join(", ")).ok();
    }
    if task.priority.is_set() {
        let priority = format!("{} ({})", task.priority, task.priority.level());
        writeln!(output, "  {} {}", "Priority:".red(), priority.red()).ok();
    }

    output.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::Priority;
    use chrono::NaiveDate;

    fn plain(task: &ParsedTask) -> String {
        colored::control::set_override(false);
        format_task_pretty(task)
    }

    #[test]
    fn test_minimal_task() {
        let task = ParsedTask {
            title: "buy milk".to_string(),
            ..Default::default()
        };
        let out = plain(&task);
        assert!(out.contains("Title: buy milk"));
        assert!(!out.contains("Due:"));
        assert!(!out.contains("Priority:"));
    }

    #[test]
    fn test_full_task() {
        let task = ParsedTask {
            title: "team meeting".to_string(),
            project: Some("work".to_string()),
            priority: Priority::DoNow,
            labels: vec!["urgent".to_string(), "meeting".to_string()],
            due_date: NaiveDate::from_ymd_opt(2026, 2, 11).and_then(|d| d.and_hms_opt(15, 0, 0)),
            description: None,
        };
        let out = plain(&task);
        assert!(out.contains("Due: 2026-02-11"));
        assert!(out.contains("Time: 15:00"));
        assert!(out.contains("Project: work"));
        assert!(out.contains("Labels: urgent, meeting"));
        assert!(out.contains("Priority: DO NOW (5)"));
    }

    #[test]
    fn test_midnight_due_has_no_time_line() {
        let task = ParsedTask {
            title: "x".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 2, 11).and_then(|d| d.and_hms_opt(0, 0, 0)),
            ..Default::default()
        };
        assert!(!plain(&task).contains("Time:"));
    }
}
