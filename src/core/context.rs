//! Reference time and conventions shared by every date resolver.

use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the two numbers of a numeric `a/b` date are read.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `2/15` is February 15.
    #[default]
    MonthFirst,
    /// `15/2` is February 15.
    DayFirst,
}

impl DateOrder {
    /// Split the two numbers of a numeric date into `(month, day)`.
    #[must_use]
    pub const fn month_day(self, first: u32, second: u32) -> (u32, u32) {
        match self {
            Self::MonthFirst => (first, second),
            Self::DayFirst => (second, first),
        }
    }
}

impl std::fmt::Display for DateOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::MonthFirst => "month-first",
            Self::DayFirst => "day-first",
        })
    }
}

/// The "now" a parse is resolved against.
///
/// Every rollover decision (future weekday, implicit year, standalone time)
/// reads `now` from here, so a single call never observes the clock twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateContext {
    /// Local wall-clock reference instant.
    pub now: NaiveDateTime,
    /// Numeric date convention.
    pub date_order: DateOrder,
}

impl DateContext {
    /// Context anchored at the current local time.
    #[must_use]
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    /// Context anchored at a fixed instant.
    #[must_use]
    pub const fn at(now: NaiveDateTime) -> Self {
        Self {
            now,
            date_order: DateOrder::MonthFirst,
        }
    }

    /// Use a different numeric date convention.
    #[must_use]
    pub const fn with_date_order(mut self, date_order: DateOrder) -> Self {
        self.date_order = date_order;
        self
    }

    /// Today's date at the reference instant.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }
}

impl Default for DateContext {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_day_order() {
        assert_eq!(DateOrder::MonthFirst.month_day(2, 15), (2, 15));
        assert_eq!(DateOrder::DayFirst.month_day(15, 2), (2, 15));
    }

    #[test]
    fn test_fixed_context() {
        let now = NaiveDate::from_ymd_opt(2026, 2, 10)
            .and_then(|d| d.and_hms_opt(10, 0, 0))
            .unwrap();
        let ctx = DateContext::at(now).with_date_order(DateOrder::DayFirst);

        assert_eq!(ctx.today(), NaiveDate::from_ymd_opt(2026, 2, 10).unwrap());
        assert_eq!(ctx.date_order, DateOrder::DayFirst);
    }

    #[test]
    fn test_date_order_serde_names() {
        let yaml = serde_yaml::to_string(&DateOrder::DayFirst).unwrap();
        assert_eq!(yaml.trim(), "day-first");
        let parsed: DateOrder = serde_yaml::from_str("month-first").unwrap();
        assert_eq!(parsed, DateOrder::MonthFirst);
    }
}
