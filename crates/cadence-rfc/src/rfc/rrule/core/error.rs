use thiserror::Error;

use super::Frequency;

/// A rule or rule value that is syntactically fine but violates RFC 5545 constraints.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{part} value {value} is outside {min}..={max}")]
    OutOfRange {
        part: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("{part} value must not be zero")]
    Zero { part: &'static str },

    #[error("COUNT must be greater than zero")]
    ZeroCount,

    #[error("INTERVAL must be greater than zero")]
    ZeroInterval,

    #[error("UNTIL and COUNT must not both be set")]
    UntilWithCount,

    #[error("BYDAY ordinals are not allowed with FREQ={0}")]
    OrdinalByDay(Frequency),

    #[error("BYDAY ordinals are not allowed with FREQ=YEARLY and BYWEEKNO")]
    OrdinalByDayWithWeekNo,

    #[error("BYMONTHDAY is not allowed with FREQ=WEEKLY")]
    ByMonthDayWeekly,

    #[error("BYYEARDAY is not allowed with FREQ={0}")]
    ByYearDay(Frequency),

    #[error("BYWEEKNO is only allowed with FREQ=YEARLY, not FREQ={0}")]
    ByWeekNo(Frequency),

    #[error("BYSETPOS requires another BYxxx rule part")]
    BySetPosAlone,
}
