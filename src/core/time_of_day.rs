//! Time-of-day recognition.
//!
//! Finds a clock time inside free text: `4:30pm`, `9 a.m.`, `17h30`, `12h`,
//! `14:30`, or a named part of the day such as `evening`. Every form may be
//! introduced by `at ` or `in the `, which then becomes part of the match.

use std::ops::Range;

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A time found in text, with the byte range it occupied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeMatch {
    /// The recognized clock time.
    pub time: NaiveTime,
    /// Byte range of the match, including any `at ` / `in the ` prefix.
    pub span: Range<usize>,
}

impl TimeMatch {
    /// The matched text within the string that was searched.
    #[must_use]
    pub fn as_str<'t>(&self, text: &'t str) -> &'t str {
        text.get(self.span.clone()).unwrap_or_default()
    }
}

const PREFIX: &str = "(?:at |in the )?";
const MERIDIEM: &str = r"(a\.m\.|p\.m\.|am\b|pm\b)";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid time regex {pattern}: {e}"))
}

static CLOCK_MERIDIEM: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?i)\b{PREFIX}(\d{{1,2}}):(\d{{2}})\s*{MERIDIEM}")));

static HOUR_MERIDIEM: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?i)\b{PREFIX}(\d{{1,2}})\s*{MERIDIEM}")));

static EUROPEAN: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?i)\b{PREFIX}(\d{{1,2}})h(\d{{2}})?\b")));

static CLOCK_24H: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?i)\b{PREFIX}(\d{{1,2}}):(\d{{2}})\b")));

/// Named parts of the day, in lookup order.
pub const NAMED_TIMES: [(&str, u32); 6] = [
    ("morning", 9),
    ("afternoon", 14),
    ("evening", 18),
    ("night", 20),
    ("noon", 12),
    ("midnight", 0),
];

static NAMED: Lazy<Vec<(Regex, u32)>> = Lazy::new(|| {
    NAMED_TIMES
        .iter()
        .map(|(word, hour)| (compile(&format!(r"(?i)\b{PREFIX}{word}\b")), *hour))
        .collect()
});

type TimeResolver = fn(&str) -> Option<TimeMatch>;

/// Time recognizers in precedence order. The first one that yields a valid
/// time wins; a recognizer whose first match is out of range yields nothing.
const RESOLVERS: [(&str, TimeResolver); 5] = [
    ("clock+meridiem", clock_with_meridiem),
    ("hour+meridiem", hour_with_meridiem),
    ("european", european),
    ("24-hour", clock_24h),
    ("named", named_time),
];

/// Find the first recognizable time of day in `text`.
#[must_use]
pub fn find_time_of_day(text: &str) -> Option<TimeMatch> {
    RESOLVERS.iter().find_map(|(name, resolve)| {
        let found = resolve(text);
        if let Some(m) = &found {
            tracing::trace!(resolver = name, matched = m.as_str(text), time = %m.time, "time of day");
        }
        found
    })
}

fn clock_with_meridiem(text: &str) -> Option<TimeMatch> {
    let caps = CLOCK_MERIDIEM.captures(text)?;
    let hour = number(&caps, 1)?;
    let minute = number(&caps, 2)?;
    build(&caps, to_24_hour(hour, caps.get(3)?.as_str()), minute)
}

fn hour_with_meridiem(text: &str) -> Option<TimeMatch> {
    let caps = HOUR_MERIDIEM.captures(text)?;
    let hour = number(&caps, 1)?;
    build(&caps, to_24_hour(hour, caps.get(2)?.as_str()), 0)
}

fn european(text: &str) -> Option<TimeMatch> {
    let caps = EUROPEAN.captures(text)?;
    let hour = number(&caps, 1)?;
    let minute = if caps.get(2).is_some() {
        number(&caps, 2)?
    } else {
        0
    };
    build(&caps, hour, minute)
}

fn clock_24h(text: &str) -> Option<TimeMatch> {
    let caps = CLOCK_24H.captures(text)?;
    build(&caps, number(&caps, 1)?, number(&caps, 2)?)
}

fn named_time(text: &str) -> Option<TimeMatch> {
    NAMED.iter().find_map(|(regex, hour)| {
        let m = regex.find(text)?;
        Some(TimeMatch {
            time: NaiveTime::from_hms_opt(*hour, 0, 0)?,
            span: m.range(),
        })
    })
}

/// 12 AM is midnight, 12 PM is noon, other PM hours shift by twelve.
fn to_24_hour(hour: u32, marker: &str) -> u32 {
    let is_pm = marker.starts_with(['p', 'P']);
    match (is_pm, hour) {
        (true, 12) => 12,
        (true, h) => h + 12,
        (false, 12) => 0,
        (false, h) => h,
    }
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

fn build(caps: &Captures<'_>, hour: u32, minute: u32) -> Option<TimeMatch> {
    // from_hms_opt rejects hour > 23 and minute > 59
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(TimeMatch {
        time,
        span: caps.get(0)?.range(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(text: &str) -> Option<(u32, u32)> {
        use chrono::Timelike;
        find_time_of_day(text).map(|m| (m.time.hour(), m.time.minute()))
    }

    fn matched(text: &str) -> Option<String> {
        find_time_of_day(text).map(|m| m.as_str(text).to_string())
    }

    #[test]
    fn test_meridiem_with_minutes() {
        assert_eq!(hm("doctor 10:30am"), Some((10, 30)));
        assert_eq!(hm("meeting 4:45pm"), Some((16, 45)));
        assert_eq!(hm("call at 9:15 A.M."), Some((9, 15)));
        assert_eq!(matched("call at 9:15 A.M."), Some("at 9:15 A.M.".to_string()));
    }

    #[test]
    fn test_meridiem_hour_only() {
        assert_eq!(hm("call 3pm"), Some((15, 0)));
        assert_eq!(hm("call 9 a.m."), Some((9, 0)));
        assert_eq!(hm("call 4 PM"), Some((16, 0)));
        assert_eq!(matched("lunch at 1pm sharp"), Some("at 1pm".to_string()));
    }

    #[test]
    fn test_twelve_oclock_edges() {
        assert_eq!(hm("12am"), Some((0, 0)));
        assert_eq!(hm("12pm"), Some((12, 0)));
        assert_eq!(hm("12:30am"), Some((0, 30)));
    }

    #[test]
    fn test_meridiem_requires_word_end() {
        // "3 amazing" is not 3am
        assert_eq!(hm("3 amazing ideas"), None);
    }

    #[test]
    fn test_european_notation() {
        assert_eq!(hm("call 17h30"), Some((17, 30)));
        assert_eq!(hm("lunch 12h"), Some((12, 0)));
        assert_eq!(hm("at 8H05"), Some((8, 5)));
        assert_eq!(hm("takes 4hours"), None);
    }

    #[test]
    fn test_24_hour_clock() {
        assert_eq!(hm("train 14:30"), Some((14, 30)));
        assert_eq!(hm("meeting 9:00"), Some((9, 0)));
        assert_eq!(hm("at 0:15"), Some((0, 15)));
    }

    #[test]
    fn test_named_times() {
        assert_eq!(hm("in the morning"), Some((9, 0)));
        assert_eq!(hm("afternoon"), Some((14, 0)));
        assert_eq!(hm("evening"), Some((18, 0)));
        assert_eq!(hm("night"), Some((20, 0)));
        assert_eq!(hm("at noon"), Some((12, 0)));
        assert_eq!(hm("midnight"), Some((0, 0)));
        assert_eq!(matched("run in the evening"), Some("in the evening".to_string()));
    }

    #[test]
    fn test_named_time_needs_whole_word() {
        assert_eq!(hm("movie tonight"), None);
        assert_eq!(hm("nightly build"), None);
    }

    #[test]
    fn test_out_of_range_falls_through() {
        // 13pm would be 25:00; the 24-hour form is tried next and also fails
        assert_eq!(hm("13pm"), None);
        assert_eq!(hm("25:00"), None);
        assert_eq!(hm("10:75"), None);
        // invalid clock form, valid named time later in the text
        assert_eq!(hm("25:00 in the evening"), Some((18, 0)));
    }

    #[test]
    fn test_precedence_meridiem_over_24_hour() {
        // both 14:00 and 3pm are present; am/pm forms are tried first
        assert_eq!(hm("14:00 or 3pm"), Some((15, 0)));
    }

    #[test]
    fn test_no_time() {
        assert_eq!(hm("buy groceries"), None);
        assert_eq!(hm(""), None);
    }
}
