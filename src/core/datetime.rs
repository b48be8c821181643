//! Date and time extraction from free text.
//!
//! [`extract_datetime`] runs the resolvers in a fixed order and returns the
//! first hit:
//!
//! 1. keyword phrases (`tomorrow evening`, `next friday`, `end of month`)
//! 2. relative offsets (`in 3 days`)
//! 3. explicit calendar dates (`Feb 3rd`, `12/25`, `17th`)
//! 4. a standalone time (`3pm`), anchored to the next time it occurs
//!
//! Keyword and calendar dates pick up a separate time of day from the rest of
//! the text (`friday 4:45pm`) unless the phrase already fixes one.

use std::ops::Range;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use tracing::debug;

use super::calendar::{match_calendar_date, match_relative_offset};
use super::context::DateContext;
use super::keywords::match_keyword;
use super::time_of_day::find_time_of_day;

/// Which resolver produced a [`DateMatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStage {
    /// Fixed keyword phrase.
    Keyword,
    /// "in N days/weeks/months".
    RelativeOffset,
    /// Explicit calendar date.
    CalendarDate,
    /// Time of day with no date.
    StandaloneTime,
}

/// A resolved due date and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    /// Resolved local date-time; midnight when no time was given.
    pub datetime: NaiveDateTime,
    /// The matched text: the date phrase, then the time phrase if separate.
    pub matched: String,
    /// Byte ranges in the searched text to remove from the title.
    pub spans: Vec<Range<usize>>,
    /// The resolver that matched.
    pub stage: DateStage,
}

impl DateMatch {
    fn date_only(stage: DateStage, date: NaiveDate, text: &str, span: Range<usize>) -> Self {
        Self::single(stage, date.and_time(NaiveTime::default()), text, span)
    }

    fn single(stage: DateStage, datetime: NaiveDateTime, text: &str, span: Range<usize>) -> Self {
        Self {
            datetime,
            matched: slice(text, &span).to_string(),
            spans: vec![span],
            stage,
        }
    }

    /// Attach a time of day found elsewhere in the text, if there is one.
    fn with_time_from(stage: DateStage, date: NaiveDate, text: &str, span: Range<usize>) -> Self {
        let rest = mask(text, &span);
        match find_time_of_day(&rest) {
            Some(time) => Self {
                datetime: date.and_time(time.time),
                matched: format!("{} {}", slice(text, &span), slice(text, &time.span)),
                spans: vec![span, time.span],
                stage,
            },
            None => Self::date_only(stage, date, text, span),
        }
    }
}

/// Find a due date/time in `text`, resolved against `ctx`.
///
/// Returns `None` when nothing date-like is present.
#[must_use]
pub fn extract_datetime(text: &str, ctx: &DateContext) -> Option<DateMatch> {
    let found = resolve(text, ctx);
    match &found {
        Some(m) => debug!(stage = ?m.stage, matched = %m.matched, due = %m.datetime, "due date"),
        None => debug!("no due date"),
    }
    found
}

fn resolve(text: &str, ctx: &DateContext) -> Option<DateMatch> {
    let today = ctx.today();

    if let Some((rule, span)) = match_keyword(text) {
        if let Some(date) = rule.day.resolve(today) {
            return Some(match rule.fixed_time() {
                Some(time) => DateMatch::single(DateStage::Keyword, date.and_time(time), text, span),
                None => DateMatch::with_time_from(DateStage::Keyword, date, text, span),
            });
        }
    }

    if let Some((date, span)) = match_relative_offset(text, today) {
        return Some(DateMatch::date_only(DateStage::RelativeOffset, date, text, span));
    }

    if let Some((date, _, span)) = match_calendar_date(text, ctx) {
        return Some(DateMatch::with_time_from(DateStage::CalendarDate, date, text, span));
    }

    let time = find_time_of_day(text)?;
    let mut datetime = today.and_time(time.time);
    // a bare time means its next occurrence; midnight today is always past
    if datetime <= ctx.now {
        datetime = datetime.checked_add_days(Days::new(1))?;
    }
    Some(DateMatch::single(DateStage::StandaloneTime, datetime, text, time.span))
}

/// Next occurrence of `weekday` strictly after `from` (one to seven days out).
#[must_use]
pub fn next_weekday(from: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let ahead = (7 + weekday.num_days_from_monday() - from.weekday().num_days_from_monday()) % 7;
    let days = if ahead == 0 { 7 } else { ahead };
    from.checked_add_days(Days::new(u64::from(days)))
}

/// Last calendar day of `date`'s month.
#[must_use]
pub fn end_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)?.checked_add_months(Months::new(1))?.pred_opt()
}

/// Add whole months, clamping the day to the target month's length.
#[must_use]
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Blank out `span` so a second search cannot match inside it. Byte offsets
/// outside the span are preserved.
fn mask(text: &str, span: &Range<usize>) -> String {
    let mut masked = String::with_capacity(text.len());
    masked.push_str(text.get(..span.start).unwrap_or_default());
    masked.push_str(&" ".repeat(span.len()));
    masked.push_str(text.get(span.end..).unwrap_or_default());
    masked
}

fn slice<'t>(text: &'t str, span: &Range<usize>) -> &'t str {
    text.get(span.clone()).unwrap_or_default()
}
