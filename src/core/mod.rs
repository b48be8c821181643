//! Date and time engine for quickadd.
//!
//! Pure functions over a string and a reference [`DateContext`]; the regex
//! tables behind them are compiled once and shared read-only.

mod calendar;
mod context;
mod datetime;
mod keywords;
mod time_of_day;

pub use calendar::{match_calendar_date, match_relative_offset, month_number, DateShape};
pub use context::{DateContext, DateOrder};
pub use datetime::{
    add_months, end_of_month, extract_datetime, next_weekday, DateMatch, DateStage,
};
pub use keywords::{match_keyword, DayRef, KeywordEntry, KeywordRule, KEYWORD_TABLE};
pub use time_of_day::{find_time_of_day, TimeMatch, NAMED_TIMES};
