//! Gregorian calendar arithmetic used by the expansion engine.

use chrono::{Datelike, NaiveDate};

#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[must_use]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Number of days in `month` (1-12) of `year`.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// ## Summary
/// First day of week 1 of `year` when weeks start on `week_start`.
///
/// Week 1 is the first week with at least four days in the year, which is
/// always the week containing January 4th.
#[must_use]
pub fn week_one_start(year: i32, week_start: chrono::Weekday) -> Option<NaiveDate> {
    let jan4 = NaiveDate::from_ymd_opt(year, 1, 4)?;
    let back = days_since(jan4.weekday(), week_start);
    jan4.checked_sub_days(chrono::Days::new(u64::from(back)))
}

/// Week number of a date, counted from the week-numbering year it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekOfYear {
    /// 1-based week number.
    pub week: i32,
    /// Number of weeks in the week-numbering year (52 or 53).
    pub weeks_in_year: i32,
}

impl WeekOfYear {
    /// The same week counted from the end of the year (`-1` is the last week).
    #[must_use]
    pub const fn from_end(self) -> i32 {
        self.week - self.weeks_in_year - 1
    }
}

/// ## Summary
/// Computes the week number of `date` with weeks starting on `week_start`.
///
/// Dates early in January may belong to the last week of the previous year
/// and dates late in December to week 1 of the next year.
#[must_use]
pub fn week_of_year(date: NaiveDate, week_start: chrono::Weekday) -> Option<WeekOfYear> {
    let year = date.year();
    let mut start = week_one_start(year, week_start)?;
    let mut next = week_one_start(year + 1, week_start)?;
    if date < start {
        next = start;
        start = week_one_start(year - 1, week_start)?;
    } else if date >= next {
        start = next;
        next = week_one_start(year + 2, week_start)?;
    }

    let week = i32::try_from((date - start).num_days() / 7).ok()? + 1;
    let weeks_in_year = i32::try_from((next - start).num_days() / 7).ok()?;
    Some(WeekOfYear {
        week,
        weeks_in_year,
    })
}

/// Days from the closest `from` on or before a `day`, i.e. `(day - from) mod 7`.
#[must_use]
pub fn days_since(day: chrono::Weekday, from: chrono::Weekday) -> u32 {
    (day.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7
}
