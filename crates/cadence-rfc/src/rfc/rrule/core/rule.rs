use chrono::NaiveDateTime;

use super::{
    Frequency, MonthDayNum, MonthNum, SetPosNum, ValidationError, WeekNum, Weekday, WeekdayNum,
    YearDayNum,
};

pub const MAX_SECOND: u8 = 60;
pub const MAX_MINUTE: u8 = 59;
pub const MAX_HOUR: u8 = 23;

/// Unvalidated rule parts, the input to [`Rule::new`].
///
/// Empty lists mean the rule part is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleParts {
    pub freq: Frequency,
    /// Floating local end date-time (inclusive).
    pub until: Option<NaiveDateTime>,
    pub count: Option<u32>,
    pub interval: Option<u32>,
    pub by_second: Vec<u8>,
    pub by_minute: Vec<u8>,
    pub by_hour: Vec<u8>,
    pub by_day: Vec<WeekdayNum>,
    pub by_month_day: Vec<MonthDayNum>,
    pub by_year_day: Vec<YearDayNum>,
    pub by_week_no: Vec<WeekNum>,
    pub by_month: Vec<MonthNum>,
    pub by_set_pos: Vec<SetPosNum>,
    pub week_start: Option<Weekday>,
}

impl RuleParts {
    #[must_use]
    pub const fn new(freq: Frequency) -> Self {
        Self {
            freq,
            until: None,
            count: None,
            interval: None,
            by_second: Vec::new(),
            by_minute: Vec::new(),
            by_hour: Vec::new(),
            by_day: Vec::new(),
            by_month_day: Vec::new(),
            by_year_day: Vec::new(),
            by_week_no: Vec::new(),
            by_month: Vec::new(),
            by_set_pos: Vec::new(),
            week_start: None,
        }
    }

    fn has_by_filter(&self) -> bool {
        !(self.by_second.is_empty()
            && self.by_minute.is_empty()
            && self.by_hour.is_empty()
            && self.by_day.is_empty()
            && self.by_month_day.is_empty()
            && self.by_year_day.is_empty()
            && self.by_week_no.is_empty()
            && self.by_month.is_empty())
    }
}

/// A validated RFC 5545 recurrence rule (RECUR value).
///
/// Immutable once constructed; every instance satisfies the RFC 5545
/// cross-part constraints checked by [`Rule::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    parts: RuleParts,
}

impl Rule {
    /// ## Summary
    /// Validates `parts` and wraps them in an immutable rule.
    ///
    /// ## Errors
    /// Returns the first violated constraint: zero COUNT or INTERVAL, UNTIL
    /// together with COUNT, a time value out of range, or a BYxxx part that is
    /// not allowed with the rule's frequency.
    pub fn new(parts: RuleParts) -> Result<Self, ValidationError> {
        validate(&parts)?;
        Ok(Self { parts })
    }

    #[must_use]
    pub const fn freq(&self) -> Frequency {
        self.parts.freq
    }

    #[must_use]
    pub const fn until(&self) -> Option<NaiveDateTime> {
        self.parts.until
    }

    #[must_use]
    pub const fn count(&self) -> Option<u32> {
        self.parts.count
    }

    /// Interval between periods, `1` when INTERVAL is absent.
    #[must_use]
    pub fn interval(&self) -> u32 {
        self.parts.interval.unwrap_or(1)
    }

    /// The INTERVAL part as written, if any.
    #[must_use]
    pub const fn interval_part(&self) -> Option<u32> {
        self.parts.interval
    }

    #[must_use]
    pub fn by_second(&self) -> &[u8] {
        &self.parts.by_second
    }

    #[must_use]
    pub fn by_minute(&self) -> &[u8] {
        &self.parts.by_minute
    }

    #[must_use]
    pub fn by_hour(&self) -> &[u8] {
        &self.parts.by_hour
    }

    #[must_use]
    pub fn by_day(&self) -> &[WeekdayNum] {
        &self.parts.by_day
    }

    #[must_use]
    pub fn by_month_day(&self) -> &[MonthDayNum] {
        &self.parts.by_month_day
    }

    #[must_use]
    pub fn by_year_day(&self) -> &[YearDayNum] {
        &self.parts.by_year_day
    }

    #[must_use]
    pub fn by_week_no(&self) -> &[WeekNum] {
        &self.parts.by_week_no
    }

    #[must_use]
    pub fn by_month(&self) -> &[MonthNum] {
        &self.parts.by_month
    }

    #[must_use]
    pub fn by_set_pos(&self) -> &[SetPosNum] {
        &self.parts.by_set_pos
    }

    /// Week start day, Monday when WKST is absent.
    #[must_use]
    pub fn week_start(&self) -> Weekday {
        self.parts.week_start.unwrap_or(Weekday::Monday)
    }

    /// The WKST part as written, if any.
    #[must_use]
    pub const fn week_start_part(&self) -> Option<Weekday> {
        self.parts.week_start
    }

    /// Returns whether the rule ends, by COUNT or by UNTIL.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.parts.count.is_some() || self.parts.until.is_some()
    }

    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        !self.is_finite()
    }

    /// Borrows the underlying parts.
    #[must_use]
    pub const fn parts(&self) -> &RuleParts {
        &self.parts
    }

    /// Consumes the rule, returning its parts for modification and revalidation.
    #[must_use]
    pub fn into_parts(self) -> RuleParts {
        self.parts
    }
}

impl TryFrom<RuleParts> for Rule {
    type Error = ValidationError;

    fn try_from(parts: RuleParts) -> Result<Self, Self::Error> {
        Self::new(parts)
    }
}

fn validate(parts: &RuleParts) -> Result<(), ValidationError> {
    if parts.count == Some(0) {
        return Err(ValidationError::ZeroCount);
    }
    if parts.interval == Some(0) {
        return Err(ValidationError::ZeroInterval);
    }
    if parts.until.is_some() && parts.count.is_some() {
        return Err(ValidationError::UntilWithCount);
    }

    check_times("BYSECOND", &parts.by_second, MAX_SECOND)?;
    check_times("BYMINUTE", &parts.by_minute, MAX_MINUTE)?;
    check_times("BYHOUR", &parts.by_hour, MAX_HOUR)?;

    let has_ordinal_day = parts.by_day.iter().any(WeekdayNum::has_ordinal);
    if has_ordinal_day && !matches!(parts.freq, Frequency::Monthly | Frequency::Yearly) {
        return Err(ValidationError::OrdinalByDay(parts.freq));
    }
    if has_ordinal_day && parts.freq == Frequency::Yearly && !parts.by_week_no.is_empty() {
        return Err(ValidationError::OrdinalByDayWithWeekNo);
    }
    if parts.freq == Frequency::Weekly && !parts.by_month_day.is_empty() {
        return Err(ValidationError::ByMonthDayWeekly);
    }
    if matches!(
        parts.freq,
        Frequency::Daily | Frequency::Weekly | Frequency::Monthly
    ) && !parts.by_year_day.is_empty()
    {
        return Err(ValidationError::ByYearDay(parts.freq));
    }
    if parts.freq != Frequency::Yearly && !parts.by_week_no.is_empty() {
        return Err(ValidationError::ByWeekNo(parts.freq));
    }
    if !parts.by_set_pos.is_empty() && !parts.has_by_filter() {
        return Err(ValidationError::BySetPosAlone);
    }
    Ok(())
}

fn check_times(part: &'static str, values: &[u8], max: u8) -> Result<(), ValidationError> {
    match values.iter().find(|value| **value > max) {
        Some(value) => Err(ValidationError::OutOfRange {
            part,
            value: i32::from(*value),
            min: 0,
            max: i32::from(max),
        }),
        None => Ok(()),
    }
}
