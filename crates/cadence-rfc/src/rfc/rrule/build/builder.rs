use chrono::NaiveDateTime;
use thiserror::Error;

use crate::rfc::rrule::core::{
    Frequency, MonthDayNum, MonthNum, Rule, RuleParts, SetPosNum, ValidationError, WeekNum,
    Weekday, WeekdayNum, YearDayNum,
};

/// Failure to turn a [`RuleBuilder`] into a [`Rule`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("FREQ must be set before building a rule")]
    MissingFrequency,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Incremental, order-independent accumulator of rule parts.
///
/// Setting a part twice keeps the later value. Cross-part constraints are
/// checked only by [`RuleBuilder::build`].
///
/// ```rust
/// use cadence_rfc::rfc::rrule::{RuleBuilder, Weekday, WeekdayNum};
///
/// let rule = RuleBuilder::new()
///     .weekly()
///     .count(4)
///     .by_day([WeekdayNum::every(Weekday::Tuesday)])
///     .build()
///     .unwrap();
/// assert_eq!(rule.to_string(), "FREQ=WEEKLY;COUNT=4;BYDAY=TU");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleBuilder {
    freq: Option<Frequency>,
    until: Option<NaiveDateTime>,
    count: Option<u32>,
    interval: Option<u32>,
    by_second: Vec<u8>,
    by_minute: Vec<u8>,
    by_hour: Vec<u8>,
    by_day: Vec<WeekdayNum>,
    by_month_day: Vec<MonthDayNum>,
    by_year_day: Vec<YearDayNum>,
    by_week_no: Vec<WeekNum>,
    by_month: Vec<MonthNum>,
    by_set_pos: Vec<SetPosNum>,
    week_start: Option<Weekday>,
}

impl RuleBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn freq(mut self, freq: Frequency) -> Self {
        self.freq = Some(freq);
        self
    }

    #[must_use]
    pub fn secondly(self) -> Self {
        self.freq(Frequency::Secondly)
    }

    #[must_use]
    pub fn minutely(self) -> Self {
        self.freq(Frequency::Minutely)
    }

    #[must_use]
    pub fn hourly(self) -> Self {
        self.freq(Frequency::Hourly)
    }

    #[must_use]
    pub fn daily(self) -> Self {
        self.freq(Frequency::Daily)
    }

    #[must_use]
    pub fn weekly(self) -> Self {
        self.freq(Frequency::Weekly)
    }

    #[must_use]
    pub fn monthly(self) -> Self {
        self.freq(Frequency::Monthly)
    }

    #[must_use]
    pub fn yearly(self) -> Self {
        self.freq(Frequency::Yearly)
    }

    /// Sets the inclusive, floating local end of the recurrence.
    #[must_use]
    pub fn until(mut self, until: NaiveDateTime) -> Self {
        self.until = Some(until);
        self
    }

    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub fn interval(mut self, interval: u32) -> Self {
        self.interval = Some(interval);
        self
    }

    #[must_use]
    pub fn by_second(mut self, seconds: impl IntoIterator<Item = u8>) -> Self {
        self.by_second = seconds.into_iter().collect();
        self
    }

    #[must_use]
    pub fn by_minute(mut self, minutes: impl IntoIterator<Item = u8>) -> Self {
        self.by_minute = minutes.into_iter().collect();
        self
    }

    #[must_use]
    pub fn by_hour(mut self, hours: impl IntoIterator<Item = u8>) -> Self {
        self.by_hour = hours.into_iter().collect();
        self
    }

    #[must_use]
    pub fn by_day(mut self, days: impl IntoIterator<Item = WeekdayNum>) -> Self {
        self.by_day = days.into_iter().collect();
        self
    }

    #[must_use]
    pub fn by_month_day(mut self, days: impl IntoIterator<Item = MonthDayNum>) -> Self {
        self.by_month_day = days.into_iter().collect();
        self
    }

    #[must_use]
    pub fn by_year_day(mut self, days: impl IntoIterator<Item = YearDayNum>) -> Self {
        self.by_year_day = days.into_iter().collect();
        self
    }

    #[must_use]
    pub fn by_week_no(mut self, weeks: impl IntoIterator<Item = WeekNum>) -> Self {
        self.by_week_no = weeks.into_iter().collect();
        self
    }

    #[must_use]
    pub fn by_month(mut self, months: impl IntoIterator<Item = MonthNum>) -> Self {
        self.by_month = months.into_iter().collect();
        self
    }

    #[must_use]
    pub fn by_set_pos(mut self, positions: impl IntoIterator<Item = SetPosNum>) -> Self {
        self.by_set_pos = positions.into_iter().collect();
        self
    }

    #[must_use]
    pub fn week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = Some(week_start);
        self
    }

    /// ## Summary
    /// Validates the accumulated parts and produces an immutable [`Rule`].
    ///
    /// ## Errors
    /// Returns [`BuildError::MissingFrequency`] if no frequency was set, or
    /// the [`ValidationError`] raised by [`Rule::new`].
    pub fn build(self) -> Result<Rule, BuildError> {
        let freq = self.freq.ok_or(BuildError::MissingFrequency)?;
        let parts = RuleParts {
            freq,
            until: self.until,
            count: self.count,
            interval: self.interval,
            by_second: self.by_second,
            by_minute: self.by_minute,
            by_hour: self.by_hour,
            by_day: self.by_day,
            by_month_day: self.by_month_day,
            by_year_day: self.by_year_day,
            by_week_no: self.by_week_no,
            by_month: self.by_month,
            by_set_pos: self.by_set_pos,
            week_start: self.week_start,
        };
        Ok(Rule::new(parts)?)
    }
}

impl From<Rule> for RuleBuilder {
    fn from(rule: Rule) -> Self {
        let parts = rule.into_parts();
        Self {
            freq: Some(parts.freq),
            until: parts.until,
            count: parts.count,
            interval: parts.interval,
            by_second: parts.by_second,
            by_minute: parts.by_minute,
            by_hour: parts.by_hour,
            by_day: parts.by_day,
            by_month_day: parts.by_month_day,
            by_year_day: parts.by_year_day,
            by_week_no: parts.by_week_no,
            by_month: parts.by_month,
            by_set_pos: parts.by_set_pos,
            week_start: parts.week_start,
        }
    }
}
