//! Launcher-style preview: a result title plus a one-line subtitle.

use crate::features::nlp::ParsedTask;

/// `Create task: <title>`.
#[must_use]
pub fn preview_title(task: &ParsedTask) -> String {
    format!("Create task: {}", task.title)
}

/// The subtitle shown under a pending task, fields joined by ` | `.
///
/// A task without a project shows `Project:Default` when a default project
/// id is configured.
#[must_use]
pub fn format_preview(task: &ParsedTask, default_project_id: i64) -> String {
    let mut parts = vec![format!("Title:'{}'", task.title)];

    if !task.labels.is_empty() {
        parts.push(format!("Labels:[{}]", task.labels.join(",")));
    }

    match task.project.as_deref().filter(|p| !p.is_empty()) {
        Some(project) => parts.push(format!("Project:{project}")),
        None if default_project_id > 0 => parts.push("Project:Default".to_string()),
        None => {},
    }

    if let Some(due) = task.due_date {
        let pattern = if task.due_has_time() {
            "%b %d, %Y %H:%M"
        } else {
            "%b %d, %Y"
        };
        parts.push(format!("Due:{}", due.format(pattern)));
    }

    if task.priority.is_set() {
        parts.push(format!("Priority:{}", task.priority));
    }

    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::Priority;
    use chrono::NaiveDate;

    fn due(y: i32, m: u32, d: u32, h: u32, min: u32) -> Option<chrono::NaiveDateTime> {
        NaiveDate::from_ymd_opt(y, m, d).and_then(|date| date.and_hms_opt(h, min, 0))
    }

    #[test]
    fn test_title_only() {
        let task = ParsedTask {
            title: "buy milk".to_string(),
            ..Default::default()
        };
        assert_eq!(format_preview(&task, 0), "Title:'buy milk'");
        assert_eq!(format_preview(&task, 1), "Title:'buy milk' | Project:Default");
        assert_eq!(preview_title(&task), "Create task: buy milk");
    }

    #[test]
    fn test_all_parts() {
        let task = ParsedTask {
            title: "team meeting".to_string(),
            project: Some("work".to_string()),
            priority: Priority::DoNow,
            labels: vec!["urgent".to_string(), "meeting".to_string()],
            due_date: due(2026, 2, 11, 15, 0),
            description: None,
        };
        assert_eq!(
            format_preview(&task, 1),
            "Title:'team meeting' | Labels:[urgent,meeting] | Project:work | Due:Feb 11, 2026 15:00 | Priority:DO NOW"
        );
    }

    #[test]
    fn test_midnight_due_omits_time() {
        let task = ParsedTask {
            title: "report".to_string(),
            due_date: due(2026, 7, 4, 0, 0),
            priority: Priority::Low,
            ..Default::default()
        };
        assert_eq!(
            format_preview(&task, 0),
            "Title:'report' | Due:Jul 04, 2026 | Priority:Low"
        );
    }

    #[test]
    fn test_empty_title() {
        let task = ParsedTask::default();
        assert_eq!(format_preview(&task, 0), "Title:''");
        assert_eq!(preview_title(&task), "Create task: ");
    }
}
