//! Fixed relative date phrases.
//!
//! [`KEYWORD_TABLE`] is scanned top to bottom and the first phrase found
//! anywhere in the text wins, so compound phrases ("tomorrow evening") must
//! stay above the bare words they contain ("tomorrow").

use std::ops::Range;

use chrono::{NaiveDate, NaiveTime, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

use super::datetime::{add_months, end_of_month, next_weekday};

/// The day a keyword phrase refers to, relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRef {
    /// Today.
    Today,
    /// Today plus one day.
    Tomorrow,
    /// Next future occurrence of the weekday, never today.
    Weekday(Weekday),
    /// The coming Saturday.
    ThisWeekend,
    /// Today plus seven days.
    NextWeek,
    /// Same day next month, clamped to the month's length.
    NextMonth,
    /// Last day of the current month.
    EndOfMonth,
}

impl DayRef {
    /// Resolve against `today`.
    #[must_use]
    pub fn resolve(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Today => Some(today),
            Self::Tomorrow => today.succ_opt(),
            Self::Weekday(weekday) => next_weekday(today, weekday),
            Self::ThisWeekend => next_weekday(today, Weekday::Sat),
            Self::NextWeek => today.checked_add_days(chrono::Days::new(7)),
            Self::NextMonth => add_months(today, 1),
            Self::EndOfMonth => end_of_month(today),
        }
    }
}

/// One row of the keyword table: phrase, day, and the hour the phrase fixes.
pub type KeywordEntry = (&'static str, DayRef, Option<u32>);

use DayRef::{EndOfMonth, NextMonth, NextWeek, ThisWeekend, Today, Tomorrow};

/// Keyword phrases in precedence order.
pub const KEYWORD_TABLE: &[KeywordEntry] = &[
    ("today morning", Today, Some(9)),
    ("today afternoon", Today, Some(14)),
    ("today evening", Today, Some(18)),
    ("this morning", Today, Some(9)),
    ("this afternoon", Today, Some(14)),
    ("this evening", Today, Some(18)),
    ("today", Today, None),
    ("tonight", Today, Some(20)),
    ("tomorrow morning", Tomorrow, Some(9)),
    ("tomorrow afternoon", Tomorrow, Some(14)),
    ("tomorrow evening", Tomorrow, Some(18)),
    ("tomorrow night", Tomorrow, Some(20)),
    ("tomorrow", Tomorrow, None),
    ("next monday", DayRef::Weekday(Weekday::Mon), None),
    ("next tuesday", DayRef::Weekday(Weekday::Tue), None),
    ("next wednesday", DayRef::Weekday(Weekday::Wed), None),
    ("next thursday", DayRef::Weekday(Weekday::Thu), None),
    ("next friday", DayRef::Weekday(Weekday::Fri), None),
    ("next saturday", DayRef::Weekday(Weekday::Sat), None),
    ("next sunday", DayRef::Weekday(Weekday::Sun), None),
    ("monday morning", DayRef::Weekday(Weekday::Mon), Some(9)),
    ("monday afternoon", DayRef::Weekday(Weekday::Mon), Some(14)),
    ("monday evening", DayRef::Weekday(Weekday::Mon), Some(18)),
    ("monday", DayRef::Weekday(Weekday::Mon), None),
    ("tuesday", DayRef::Weekday(Weekday::Tue), None),
    ("wednesday", DayRef::Weekday(Weekday::Wed), None),
    ("thursday", DayRef::Weekday(Weekday::Thu), None),
    ("friday", DayRef::Weekday(Weekday::Fri), None),
    ("saturday", DayRef::Weekday(Weekday::Sat), None),
    ("sunday", DayRef::Weekday(Weekday::Sun), None),
    ("this weekend", ThisWeekend, None),
    ("next week", NextWeek, None),
    ("next month", NextMonth, None),
    ("end of month", EndOfMonth, None),
];

/// A compiled keyword row.
#[derive(Debug)]
pub struct KeywordRule {
    /// The phrase as written in the table.
    pub phrase: &'static str,
    /// The day it resolves to.
    pub day: DayRef,
    hour: Option<u32>,
    regex: Regex,
}

impl KeywordRule {
    /// Clock time fixed by the phrase itself, e.g. 18:00 for "tomorrow evening".
    ///
    /// Phrases without one leave the time open for a separate time-of-day search.
    #[must_use]
    pub fn fixed_time(&self) -> Option<NaiveTime> {
        self.hour.and_then(|h| NaiveTime::from_hms_opt(h, 0, 0))
    }
}

static KEYWORD_RULES: Lazy<Vec<KeywordRule>> = Lazy::new(|| {
    KEYWORD_TABLE
        .iter()
        .map(|&(phrase, day, hour)| {
            let pattern = format!(r"(?i)\b{}\b", phrase.replace(' ', r"\s+"));
            let regex = Regex::new(&pattern)
                .unwrap_or_else(|e| panic!("Invalid keyword regex {pattern}: {e}"));
            KeywordRule {
                phrase,
                day,
                hour,
                regex,
            }
        })
        .collect()
});

/// Find the highest-precedence keyword phrase present in `text`.
#[must_use]
pub fn match_keyword(text: &str) -> Option<(&'static KeywordRule, Range<usize>)> {
    KEYWORD_RULES
        .iter()
        .find_map(|rule| rule.regex.find(text).map(|m| (rule, m.range())))
}
