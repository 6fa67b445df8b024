//! Recurrence rule data model: enumerations, bounded values and the validated [`Rule`].

mod error;
mod frequency;
mod rule;
mod value;

pub use error::ValidationError;
pub use frequency::{Frequency, Weekday};
pub use rule::{MAX_HOUR, MAX_MINUTE, MAX_SECOND, Rule, RuleParts};
pub use value::{
    MAX_WEEKDAY_ORDINAL, MonthDayNum, MonthNum, SetPosNum, WeekNum, WeekdayNum, YearDayNum,
};
