use chrono::NaiveDateTime;

use crate::rfc::rrule::build::RuleBuilder;
use crate::rfc::rrule::core::{
    Frequency, MonthDayNum, MonthNum, SetPosNum, WeekNum, Weekday, WeekdayNum, YearDayNum,
};

/// One parsed rule part, ready to be applied to a [`RuleBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartialRule {
    Frequency(Frequency),
    Until(NaiveDateTime),
    Count(u32),
    Interval(u32),
    BySecond(Vec<u8>),
    ByMinute(Vec<u8>),
    ByHour(Vec<u8>),
    ByDay(Vec<WeekdayNum>),
    ByMonthDay(Vec<MonthDayNum>),
    ByYearDay(Vec<YearDayNum>),
    ByWeekNo(Vec<WeekNum>),
    ByMonth(Vec<MonthNum>),
    BySetPos(Vec<SetPosNum>),
    WorkWeekStart(Weekday),
}

impl PartialRule {
    /// RFC 5545 name of the rule part.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "FREQ",
            Self::Until(_) => "UNTIL",
            Self::Count(_) => "COUNT",
            Self::Interval(_) => "INTERVAL",
            Self::BySecond(_) => "BYSECOND",
            Self::ByMinute(_) => "BYMINUTE",
            Self::ByHour(_) => "BYHOUR",
            Self::ByDay(_) => "BYDAY",
            Self::ByMonthDay(_) => "BYMONTHDAY",
            Self::ByYearDay(_) => "BYYEARDAY",
            Self::ByWeekNo(_) => "BYWEEKNO",
            Self::ByMonth(_) => "BYMONTH",
            Self::BySetPos(_) => "BYSETPOS",
            Self::WorkWeekStart(_) => "WKST",
        }
    }

    /// Applies this rule part to `builder`, replacing any earlier value of the same part.
    #[must_use]
    pub fn apply_to(self, builder: RuleBuilder) -> RuleBuilder {
        match self {
            Self::Frequency(freq) => builder.freq(freq),
            Self::Until(until) => builder.until(until),
            Self::Count(count) => builder.count(count),
            Self::Interval(interval) => builder.interval(interval),
            Self::BySecond(list) => builder.by_second(list),
            Self::ByMinute(list) => builder.by_minute(list),
            Self::ByHour(list) => builder.by_hour(list),
            Self::ByDay(list) => builder.by_day(list),
            Self::ByMonthDay(list) => builder.by_month_day(list),
            Self::ByYearDay(list) => builder.by_year_day(list),
            Self::ByWeekNo(list) => builder.by_week_no(list),
            Self::ByMonth(list) => builder.by_month(list),
            Self::BySetPos(list) => builder.by_set_pos(list),
            Self::WorkWeekStart(day) => builder.week_start(day),
        }
    }
}
