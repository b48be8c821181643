//! Label, project and priority tokens.
//!
//! | Field    | Vikunja                  | Todoist                  |
//! |----------|--------------------------|--------------------------|
//! | Label    | `*word`, `*"two words"`  | `@word`, `@"two words"`  |
//! | Project  | `+word`, `+"two words"`  | `#word`, `#"two words"`  |
//! | Priority | `!1` - `!5`              | `p1` - `p5`              |
//!
//! Single quotes work in place of double quotes. Every label is collected;
//! for project and priority the first occurrence wins. All marker tokens are
//! removed from the text either way.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

use super::task::{ParsingMode, Priority};
use super::text::remove_spans;

// Compiled regex patterns
static VIKUNJA_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\*(?:"([^"]+)"|'([^']+)'|(\w+))"#)
        .unwrap_or_else(|e| panic!("Invalid label regex: {e}"))
});

static VIKUNJA_PRIORITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!([1-5])\b").unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

static VIKUNJA_PROJECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\+(?:"([^"]+)"|'([^']+)'|(\w+))"#)
        .unwrap_or_else(|e| panic!("Invalid project regex: {e}"))
});

static TODOIST_PROJECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"#(?:"([^"]+)"|'([^']+)'|(\S+))"#)
        .unwrap_or_else(|e| panic!("Invalid project regex: {e}"))
});

static TODOIST_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"@(?:"([^"]+)"|'([^']+)'|(\S+))"#)
        .unwrap_or_else(|e| panic!("Invalid label regex: {e}"))
});

static TODOIST_PRIORITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bp([1-5])\b").unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

/// Tokens pulled out of the input, plus what is left of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// First project token.
    pub project: Option<String>,
    /// First priority token.
    pub priority: Priority,
    /// Every label token, in order.
    pub labels: Vec<String>,
    /// Input with all tokens removed (whitespace not yet normalized).
    pub residual: String,
}

/// Extract labels, project and priority according to `mode`.
#[must_use]
pub fn extract_tokens(text: &str, mode: ParsingMode) -> Extraction {
    let extraction = match mode {
        ParsingMode::Vikunja => extract_vikunja(text),
        ParsingMode::Todoist => extract_todoist(text),
    };
    trace!(
        %mode,
        project = ?extraction.project,
        priority = extraction.priority.level(),
        labels = ?extraction.labels,
        "dialect tokens"
    );
    extraction
}

/// Strip as we go: labels, then priority, then project, each removed from
/// the working text before the next pattern runs.
fn extract_vikunja(text: &str) -> Extraction {
    let mut extraction = Extraction::default();

    extraction.labels = VIKUNJA_LABEL
        .captures_iter(text)
        .filter_map(|caps| token_value(&caps))
        .collect();
    let remaining = VIKUNJA_LABEL.replace_all(text, " ");

    extraction.priority = VIKUNJA_PRIORITY
        .captures(&remaining)
        .and_then(|caps| priority_value(&caps))
        .unwrap_or_default();
    let remaining = VIKUNJA_PRIORITY.replace_all(&remaining, " ");

    extraction.project = VIKUNJA_PROJECT
        .captures(&remaining)
        .and_then(|caps| token_value(&caps));
    extraction.residual = VIKUNJA_PROJECT.replace_all(&remaining, " ").into_owned();

    extraction
}

/// Scan the untouched input for project, labels and priority, then remove
/// every matched span in one pass.
fn extract_todoist(text: &str) -> Extraction {
    let mut extraction = Extraction::default();
    let mut spans: Vec<Range<usize>> = Vec::new();

    for caps in TODOIST_PROJECT.captures_iter(text) {
        if extraction.project.is_none() {
            extraction.project = token_value(&caps);
        }
        spans.extend(whole_span(&caps));
    }

    for caps in TODOIST_LABEL.captures_iter(text) {
        let Some(span) = unclaimed_span(&caps, &spans) else {
            continue;
        };
        if let Some(label) = token_value(&caps) {
            extraction.labels.push(label);
            spans.push(span);
        }
    }

    for caps in TODOIST_PRIORITY.captures_iter(text) {
        let Some(span) = unclaimed_span(&caps, &spans) else {
            continue;
        };
        if !extraction.priority.is_set() {
            extraction.priority = priority_value(&caps).unwrap_or_default();
        }
        spans.push(span);
    }

    extraction.residual = remove_spans(text, spans);
    extraction
}

/// First non-empty of the quoted-double, quoted-single and bare groups.
fn token_value(caps: &Captures<'_>) -> Option<String> {
    (1..=3)
        .filter_map(|i| caps.get(i))
        .map(|m| m.as_str())
        .find(|value| !value.is_empty())
        .map(String::from)
}

fn priority_value(caps: &Captures<'_>) -> Option<Priority> {
    let level: u8 = caps.get(1)?.as_str().parse().ok()?;
    Priority::from_level(level)
}

fn whole_span(caps: &Captures<'_>) -> Option<Range<usize>> {
    caps.get(0).map(|m| m.range())
}

/// The match's span, unless it lies inside a token already taken
/// (e.g. `@ops` within `#"team @ops"`).
fn unclaimed_span(caps: &Captures<'_>, claimed: &[Range<usize>]) -> Option<Range<usize>> {
    whole_span(caps).filter(|span| {
        !claimed
            .iter()
            .any(|c| c.start < span.end && span.start < c.end)
    })
}
