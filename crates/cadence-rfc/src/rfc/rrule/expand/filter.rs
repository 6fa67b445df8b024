//! Date-level BYxxx filtering.
//!
//! Each non-empty list narrows the candidate days of a period; a day is kept
//! only if every list accepts it. Negative entries are resolved against the
//! length of the day's own month or year.

use chrono::{Datelike, NaiveDate};

use super::calendar::{days_in_month, days_in_year, week_of_year};
use crate::rfc::rrule::core::{Frequency, Rule, WeekdayNum};

/// Period that ordinal BYDAY entries (`2MO`, `-1FR`) count within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrdinalScope {
    Month,
    Year,
}

#[derive(Debug, Clone)]
pub(super) struct DateFilter {
    /// Months 1-12.
    months: Vec<u32>,
    week_numbers: Vec<i32>,
    year_days: Vec<i32>,
    month_days: Vec<i32>,
    weekdays: Vec<chrono::Weekday>,
    nth_weekdays: Vec<(i32, chrono::Weekday)>,
    scope: OrdinalScope,
    week_start: chrono::Weekday,
}

impl DateFilter {
    /// ## Summary
    /// Compiles the date filters of `rule`, adding the implicit filters RFC 5545
    /// derives from the start date when no day-level part is present.
    ///
    /// `YEARLY` keeps the start's month and day, `MONTHLY` the start's day of
    /// month and `WEEKLY` the start's weekday.
    pub(super) fn new(rule: &Rule, start: NaiveDate) -> Self {
        let mut months: Vec<u32> = rule
            .by_month()
            .iter()
            .map(|m| resolve_month(m.value()))
            .collect();
        let mut month_days: Vec<i32> = rule.by_month_day().iter().map(|d| d.value()).collect();
        let mut weekdays: Vec<chrono::Weekday> = rule
            .by_day()
            .iter()
            .filter(|d| !d.has_ordinal())
            .map(|d| d.weekday().to_chrono())
            .collect();
        let nth_weekdays = rule
            .by_day()
            .iter()
            .filter_map(|d: &WeekdayNum| d.ordinal().map(|n| (n, d.weekday().to_chrono())))
            .collect();

        let has_day_part = !(rule.by_week_no().is_empty()
            && rule.by_year_day().is_empty()
            && rule.by_month_day().is_empty()
            && rule.by_day().is_empty());
        if !has_day_part {
            match rule.freq() {
                Frequency::Yearly => {
                    if months.is_empty() {
                        months.push(start.month());
                    }
                    month_days.push(day_of_month(start));
                }
                Frequency::Monthly => month_days.push(day_of_month(start)),
                Frequency::Weekly => weekdays.push(start.weekday()),
                Frequency::Daily
                | Frequency::Hourly
                | Frequency::Minutely
                | Frequency::Secondly => {}
            }
        }

        let monthly_scope = rule.freq() == Frequency::Monthly
            || (rule.freq() == Frequency::Yearly && !months.is_empty());
        let scope = if monthly_scope {
            OrdinalScope::Month
        } else {
            OrdinalScope::Year
        };

        Self {
            months,
            week_numbers: rule.by_week_no().iter().map(|w| w.value()).collect(),
            year_days: rule.by_year_day().iter().map(|d| d.value()).collect(),
            month_days,
            weekdays,
            nth_weekdays,
            scope,
            week_start: rule.week_start().to_chrono(),
        }
    }

    /// Returns whether `date` passes every date-level filter.
    pub(super) fn matches(&self, date: NaiveDate) -> bool {
        self.matches_month(date)
            && self.matches_week_number(date)
            && self.matches_year_day(date)
            && self.matches_month_day(date)
            && self.matches_weekday(date)
    }

    fn matches_month(&self, date: NaiveDate) -> bool {
        self.months.is_empty() || self.months.contains(&date.month())
    }

    fn matches_week_number(&self, date: NaiveDate) -> bool {
        if self.week_numbers.is_empty() {
            return true;
        }
        week_of_year(date, self.week_start).is_some_and(|week| {
            self.week_numbers.contains(&week.week) || self.week_numbers.contains(&week.from_end())
        })
    }

    fn matches_year_day(&self, date: NaiveDate) -> bool {
        if self.year_days.is_empty() {
            return true;
        }
        let (from_start, from_end) = position(date.ordinal(), days_in_year(date.year()));
        self.year_days.contains(&from_start) || self.year_days.contains(&from_end)
    }

    fn matches_month_day(&self, date: NaiveDate) -> bool {
        if self.month_days.is_empty() {
            return true;
        }
        let (from_start, from_end) =
            position(date.day(), days_in_month(date.year(), date.month()));
        self.month_days.contains(&from_start) || self.month_days.contains(&from_end)
    }

    /// Plain and ordinal BYDAY entries form a union.
    fn matches_weekday(&self, date: NaiveDate) -> bool {
        if self.weekdays.is_empty() && self.nth_weekdays.is_empty() {
            return true;
        }
        let weekday = date.weekday();
        if self.weekdays.contains(&weekday) {
            return true;
        }

        let (day, len) = match self.scope {
            OrdinalScope::Month => (date.day(), days_in_month(date.year(), date.month())),
            OrdinalScope::Year => (date.ordinal(), days_in_year(date.year())),
        };
        let from_start = nth_from_start(day);
        let from_end = nth_from_end(day, len);
        self.nth_weekdays
            .iter()
            .any(|(n, wd)| *wd == weekday && (*n == from_start || *n == from_end))
    }
}

/// Negative BYMONTH `-n` is month `13 - n`.
fn resolve_month(value: i32) -> u32 {
    let month = if value < 0 { 13 + value } else { value };
    month.unsigned_abs()
}

fn day_of_month(date: NaiveDate) -> i32 {
    i32::try_from(date.day()).unwrap_or(1)
}

/// 1-based position of `index` within `len`, counted from both ends.
fn position(index: u32, len: u32) -> (i32, i32) {
    let index = i64::from(index);
    let len = i64::from(len);
    let from_start = i32::try_from(index).unwrap_or(i32::MAX);
    let from_end = i32::try_from(index - len - 1).unwrap_or(i32::MIN);
    (from_start, from_end)
}

/// Which occurrence of its weekday `day` is, counted from the period start.
fn nth_from_start(day: u32) -> i32 {
    i32::try_from((day - 1) / 7 + 1).unwrap_or(i32::MAX)
}

/// Which occurrence of its weekday `day` is, counted from the period end.
fn nth_from_end(day: u32, len: u32) -> i32 {
    -i32::try_from((len - day) / 7 + 1).unwrap_or(i32::MAX)
}
