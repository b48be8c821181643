//! Working-text helpers: span removal and whitespace normalization.

use std::ops::Range;

/// Remove byte ranges from `text`, replacing each with a single space.
///
/// Ranges may arrive in any order and may overlap; overlapping ranges are
/// removed once. Ranges that fall outside `text` are ignored.
#[must_use]
pub fn remove_spans<I>(text: &str, spans: I) -> String
where
    I: IntoIterator<Item = Range<usize>>,
{
    let mut spans: Vec<Range<usize>> = spans
        .into_iter()
        .filter(|s| s.start < s.end && text.get(s.clone()).is_some())
        .collect();
    spans.sort_by_key(|s| s.start);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        if span.end <= cursor {
            continue;
        }
        out.push_str(text.get(cursor..span.start.max(cursor)).unwrap_or_default());
        out.push(' ');
        cursor = span.end;
    }
    out.push_str(text.get(cursor..).unwrap_or_default());
    out
}

/// Collapse whitespace runs to one space and trim the ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_single_span() {
        let text = "meeting tomorrow";
        assert_eq!(normalize_whitespace(&remove_spans(text, [8..16])), "meeting");
    }

    #[test]
    fn test_remove_unordered_spans() {
        let text = "a xx b yy c";
        let out = remove_spans(text, [7..9, 2..4]);
        assert_eq!(normalize_whitespace(&out), "a b c");
    }

    #[test]
    fn test_remove_overlapping_spans() {
        let text = "keep #\"big @thing\" keep";
        // project span covers the label span
        let out = remove_spans(text, [5..18, 10..16]);
        assert_eq!(normalize_whitespace(&out), "keep keep");
    }

    #[test]
    fn test_remove_by_offset_not_by_literal() {
        // only the second "work" is a token
        let text = "work on #work";
        let out = remove_spans(text, [8..13]);
        assert_eq!(normalize_whitespace(&out), "work on");
    }

    #[test]
    fn test_out_of_bounds_spans_ignored() {
        assert_eq!(remove_spans("abc", [2..10, 5..6]), "abc");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  buy \t milk \n now  "), "buy milk now");
        assert_eq!(normalize_whitespace("   "), "");
        assert_eq!(normalize_whitespace(""), "");
    }
}
