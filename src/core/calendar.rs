//! Explicit calendar dates and relative offsets.
//!
//! Handles "in 3 days", "Feb 17, 2026", "3rd March", "12/25", "7/4/2026"
//! and a bare ordinal day such as "17th". Patterns are tried in the order of
//! [`DateShape::ORDER`]; only the first match of each pattern is considered,
//! and a match that does not form a real date falls through to the next one.

use std::ops::Range;

use chrono::{Datelike, Days, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::context::DateContext;
use super::datetime::add_months;

const MONTHS: &str = "january|february|march|april|may|june|july|august|september|october|\
                      november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid date regex {pattern}: {e}"))
}

static RELATIVE_OFFSET: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\bin\s+(\d+)\s+(days?|weeks?|months?)\b"));

/// Resolve "in N days/weeks/months" against today.
#[must_use]
pub fn match_relative_offset(text: &str, today: NaiveDate) -> Option<(NaiveDate, Range<usize>)> {
    let caps = RELATIVE_OFFSET.captures(text)?;
    let amount: u32 = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps.get(2)?.as_str().to_lowercase();

    let date = if unit.starts_with("day") {
        today.checked_add_days(Days::new(u64::from(amount)))?
    } else if unit.starts_with("week") {
        today.checked_add_days(Days::new(u64::from(amount) * 7))?
    } else {
        add_months(today, amount)?
    };

    Some((date, caps.get(0)?.range()))
}

/// Shapes of explicit calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateShape {
    /// `Feb 17`, `February 3rd, 2026`, `dec 15 2025`
    MonthNameDay,
    /// `17 Feb`, `3rd March, 2025`, `2 feb 2026`
    DayMonthName,
    /// `7/4/2026`
    NumericWithYear,
    /// `2/15`
    Numeric,
    /// `17th`, `1st` - day of the current or next month
    OrdinalDay,
}

impl DateShape {
    /// Precedence order of the date patterns.
    pub const ORDER: [Self; 5] = [
        Self::MonthNameDay,
        Self::DayMonthName,
        Self::NumericWithYear,
        Self::Numeric,
        Self::OrdinalDay,
    ];

    fn pattern(self) -> String {
        match self {
            Self::MonthNameDay => format!(
                r"(?i)\b({MONTHS})\s+(\d{{1,2}})(?:st|nd|rd|th)?\b(?:,?\s+(\d{{4}})\b)?"
            ),
            Self::DayMonthName => format!(
                r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?\s+({MONTHS})\b(?:,?\s+(\d{{4}})\b)?"
            ),
            Self::NumericWithYear => r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b".to_string(),
            Self::Numeric => r"\b(\d{1,2})/(\d{1,2})\b".to_string(),
            Self::OrdinalDay => r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b".to_string(),
        }
    }

    fn resolve(self, caps: &Captures<'_>, ctx: &DateContext) -> Option<NaiveDate> {
        let today = ctx.today();
        match self {
            Self::MonthNameDay => {
                let month = month_number(caps.get(1)?.as_str())?;
                let day = number(caps, 2)?;
                month_day(month, day, year(caps, 3), today)
            },
            Self::DayMonthName => {
                let day = number(caps, 1)?;
                let month = month_number(caps.get(2)?.as_str())?;
                month_day(month, day, year(caps, 3), today)
            },
            Self::NumericWithYear | Self::Numeric => {
                let first = number(caps, 1)?;
                let second = number(caps, 2)?;
                let year = year(caps, 3);
                let (month, day) = ctx.date_order.month_day(first, second);
                // "15/4" under month-first is only readable the other way round
                month_day(month, day, year, today).or_else(|| month_day(day, month, year, today))
            },
            Self::OrdinalDay => ordinal_day(number(caps, 1)?, today),
        }
    }
}

struct DateRule {
    shape: DateShape,
    regex: Regex,
}

static DATE_RULES: Lazy<Vec<DateRule>> = Lazy::new(|| {
    DateShape::ORDER
        .iter()
        .map(|&shape| DateRule {
            shape,
            regex: compile(&shape.pattern()),
        })
        .collect()
});

/// Find the first explicit calendar date in `text`.
#[must_use]
pub fn match_calendar_date(
    text: &str,
    ctx: &DateContext,
) -> Option<(NaiveDate, DateShape, Range<usize>)> {
    for rule in DATE_RULES.iter() {
        let Some(caps) = rule.regex.captures(text) else {
            continue;
        };
        let Some(whole) = caps.get(0) else {
            continue;
        };
        match rule.shape.resolve(&caps, ctx) {
            Some(date) => return Some((date, rule.shape, whole.range())),
            None => {
                tracing::trace!(shape = ?rule.shape, candidate = whole.as_str(), "not a valid date");
            },
        }
    }
    None
}

/// Build a date from month and day. An explicit year is honored as given,
/// even in the past. Without one the date is built in the current year and
/// moved a year ahead unless it is strictly after today.
fn month_day(month: u32, day: u32, year: Option<i32>, today: NaiveDate) -> Option<NaiveDate> {
    if let Some(year) = year {
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    let this_year = NaiveDate::from_ymd_opt(today.year(), month, day)?;
    if this_year > today {
        Some(this_year)
    } else {
        // a passed Feb 29 becomes Feb 28
        this_year.checked_add_months(Months::new(12))
    }
}

/// Day of the current month if still ahead, otherwise the same day next
/// month, clamped to that month's length. A day the current month does not
/// have is no date at all.
fn ordinal_day(day: u32, today: NaiveDate) -> Option<NaiveDate> {
    let this_month = today.with_day(day)?;
    if this_month > today {
        Some(this_month)
    } else {
        add_months(this_month, 1)
    }
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

fn year(caps: &Captures<'_>, group: usize) -> Option<i32> {
    caps.get(group)?.as_str().parse().ok()
}

/// Parse an English month name or abbreviation to its number.
#[must_use]
pub fn month_number(name: &str) -> Option<u32> {
    match name.to_lowercase().as_str() {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::DateOrder;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Tuesday 2026-02-10, 10:00.
    fn ctx() -> DateContext {
        DateContext::at(date(2026, 2, 10).and_hms_opt(10, 0, 0).unwrap())
    }

    fn calendar(text: &str) -> Option<(NaiveDate, String)> {
        match_calendar_date(text, &ctx()).map(|(d, _, span)| (d, text[span].to_string()))
    }

    #[test]
    fn test_relative_offsets() {
        let today = date(2026, 2, 10);
        let days = match_relative_offset("follow up in 3 days", today).unwrap();
        assert_eq!(days.0, date(2026, 2, 13));
        assert_eq!(&"follow up in 3 days"[days.1], "in 3 days");

        assert_eq!(match_relative_offset("in 1 day", today).unwrap().0, date(2026, 2, 11));
        assert_eq!(match_relative_offset("In 2 Weeks", today).unwrap().0, date(2026, 2, 24));
        assert_eq!(match_relative_offset("in 1 month", today).unwrap().0, date(2026, 3, 10));
        assert!(match_relative_offset("in 3 years", today).is_none());
        assert!(match_relative_offset("in a week", today).is_none());
    }

    #[test]
    fn test_relative_month_clamps_to_month_end() {
        let jan_31 = date(2026, 1, 31);
        assert_eq!(match_relative_offset("in 1 month", jan_31).unwrap().0, date(2026, 2, 28));
    }

    #[test]
    fn test_month_name_day() {
        assert_eq!(calendar("appointment February 20"), Some((date(2026, 2, 20), "February 20".into())));
        assert_eq!(calendar("task Apr 10"), Some((date(2026, 4, 10), "Apr 10".into())));
        assert_eq!(calendar("due Feb 2nd"), Some((date(2027, 2, 2), "Feb 2nd".into())));
    }

    #[test]
    fn test_month_name_day_with_year() {
        assert_eq!(calendar("launch Feb 17, 2026"), Some((date(2026, 2, 17), "Feb 17, 2026".into())));
        assert_eq!(calendar("launch March 3 2025"), Some((date(2025, 3, 3), "March 3 2025".into())));
        assert_eq!(calendar("launch Feb 2nd, 2028"), Some((date(2028, 2, 2), "Feb 2nd, 2028".into())));
    }

    #[test]
    fn test_day_month_name() {
        assert_eq!(calendar("meeting 5 February"), Some((date(2027, 2, 5), "5 February".into())));
        assert_eq!(calendar("deadline 15 Mar"), Some((date(2026, 3, 15), "15 Mar".into())));
        assert_eq!(calendar("party 3rd March, 2025"), Some((date(2025, 3, 3), "3rd March, 2025".into())));
    }

    #[test]
    fn test_day_month_ignores_meridiem_day() {
        // "Feb 2pm" is not Feb 2; the day-first shape finds "3 Feb"
        assert_eq!(calendar("meeting 3 Feb 2pm"), Some((date(2027, 2, 3), "3 Feb".into())));
    }

    #[test]
    fn test_implicit_year_rolls_when_not_after_today() {
        // today itself is not strictly in the future
        assert_eq!(calendar("Feb 10"), Some((date(2027, 2, 10), "Feb 10".into())));
        assert_eq!(calendar("Feb 11"), Some((date(2026, 2, 11), "Feb 11".into())));
        assert_eq!(calendar("Jan 5"), Some((date(2027, 1, 5), "Jan 5".into())));
    }

    #[test]
    fn test_leap_day_without_year() {
        // 2026 has no Feb 29, so there is nothing to roll forward
        assert_eq!(calendar("Feb 29"), None);

        // a passed leap day moves a year ahead and is clamped
        let leap = DateContext::at(date(2028, 3, 1).and_hms_opt(9, 0, 0).unwrap());
        let found = match_calendar_date("Feb 29", &leap).map(|(d, _, _)| d);
        assert_eq!(found, Some(date(2029, 2, 28)));
        let early = DateContext::at(date(2028, 1, 10).and_hms_opt(9, 0, 0).unwrap());
        let found = match_calendar_date("Feb 29", &early).map(|(d, _, _)| d);
        assert_eq!(found, Some(date(2028, 2, 29)));
    }

    #[test]
    fn test_explicit_past_year_is_honored() {
        assert_eq!(calendar("meeting 12/31/2025"), Some((date(2025, 12, 31), "12/31/2025".into())));
        assert_eq!(calendar("vacation 7/4/2026"), Some((date(2026, 7, 4), "7/4/2026".into())));
    }

    #[test]
    fn test_numeric_month_first() {
        assert_eq!(calendar("report 2/15"), Some((date(2026, 2, 15), "2/15".into())));
        // only valid as day/month
        assert_eq!(calendar("deadline 15/4"), Some((date(2026, 4, 15), "15/4".into())));
    }

    #[test]
    fn test_numeric_day_first() {
        let ctx = ctx().with_date_order(DateOrder::DayFirst);
        let (d, _, _) = match_calendar_date("report 4/7/2026", &ctx).unwrap();
        assert_eq!(d, date(2026, 7, 4));
        let (d, _, _) = match_calendar_date("report 2/15", &ctx).unwrap();
        assert_eq!(d, date(2026, 2, 15));
    }

    #[test]
    fn test_invalid_numeric_date_is_not_a_match() {
        assert_eq!(calendar("ratio 40/50"), None);
        assert_eq!(calendar("2/30/2026"), None);
    }

    #[test]
    fn test_ordinal_day() {
        assert_eq!(calendar("pay on the 17th"), Some((date(2026, 2, 17), "17th".into())));
        // the 1st has passed this month
        assert_eq!(calendar("pay on the 1st"), Some((date(2026, 3, 1), "1st".into())));
        // today does not count as ahead
        assert_eq!(calendar("pay on the 10th"), Some((date(2026, 3, 10), "10th".into())));
        // February has no 30th
        assert_eq!(calendar("pay on the 30th"), None);
    }

    #[test]
    fn test_ordinal_rollover_clamps_to_month_end() {
        let jan_31 = DateContext::at(date(2026, 1, 31).and_hms_opt(9, 0, 0).unwrap());
        let on_jan_31 = |text: &str| match_calendar_date(text, &jan_31).map(|(d, _, _)| d);
        assert_eq!(on_jan_31("pay rent 30th"), Some(date(2026, 2, 28)));
        assert_eq!(on_jan_31("pay rent 31st"), Some(date(2026, 2, 28)));
        assert_eq!(on_jan_31("due the 28th"), Some(date(2026, 2, 28)));
    }

    #[test]
    fn test_no_calendar_date() {
        assert_eq!(calendar("buy groceries"), None);
        assert_eq!(calendar("room 42"), None);
    }

    #[test]
    fn test_month_number() {
        assert_eq!(month_number("Sept"), Some(9));
        assert_eq!(month_number("DECEMBER"), Some(12));
        assert_eq!(month_number("smarch"), None);
    }
}
