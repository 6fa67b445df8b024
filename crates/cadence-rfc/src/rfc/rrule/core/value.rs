//! Range-checked numeric values used by the BYxxx rule parts.
//!
//! Every value is stored as a signed integer. A negative value counts from the
//! end of the enclosing period; zero is never valid.

use std::fmt;

use super::{ValidationError, Weekday};

/// Largest ordinal allowed in front of a BYDAY weekday.
pub const MAX_WEEKDAY_ORDINAL: i32 = 53;

/// A BYDAY entry: a weekday with an optional signed ordinal (`-1FR`, `2MO`, `SU`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdayNum {
    weekday: Weekday,
    ordinal: Option<i8>,
}

impl WeekdayNum {
    /// Every occurrence of `weekday` within the period.
    #[must_use]
    pub const fn every(weekday: Weekday) -> Self {
        Self {
            weekday,
            ordinal: None,
        }
    }

    /// ## Summary
    /// The `ordinal`-th occurrence of `weekday` within the period, counting
    /// from the end when `ordinal` is negative.
    ///
    /// ## Errors
    /// Returns an error if `ordinal` is zero or its magnitude exceeds 53.
    pub fn nth(ordinal: i32, weekday: Weekday) -> Result<Self, ValidationError> {
        let ordinal = checked("BYDAY", ordinal, MAX_WEEKDAY_ORDINAL)?;
        Ok(Self {
            weekday,
            ordinal: i8::try_from(ordinal).ok(),
        })
    }

    /// ## Summary
    /// Builds an entry from an unsigned magnitude and a separate sign flag.
    /// `negative: None` is read as positive.
    ///
    /// ## Errors
    /// Returns an error if the magnitude is zero or exceeds 53.
    pub fn with_sign(
        weekday: Weekday,
        magnitude: u32,
        negative: Option<bool>,
    ) -> Result<Self, ValidationError> {
        Self::nth(apply_sign("BYDAY", magnitude, negative)?, weekday)
    }

    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    #[must_use]
    pub fn ordinal(&self) -> Option<i32> {
        self.ordinal.map(i32::from)
    }

    #[must_use]
    pub const fn has_ordinal(&self) -> bool {
        self.ordinal.is_some()
    }
}

impl From<Weekday> for WeekdayNum {
    fn from(weekday: Weekday) -> Self {
        Self::every(weekday)
    }
}

impl fmt::Display for WeekdayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ordinal) = self.ordinal {
            write!(f, "{ordinal}")?;
        }
        write!(f, "{}", self.weekday)
    }
}

fn checked(part: &'static str, value: i32, max: i32) -> Result<i32, ValidationError> {
    if value == 0 {
        return Err(ValidationError::Zero { part });
    }
    if value.abs() > max {
        return Err(ValidationError::OutOfRange {
            part,
            value,
            min: -max,
            max,
        });
    }
    Ok(value)
}

fn apply_sign(
    part: &'static str,
    magnitude: u32,
    negative: Option<bool>,
) -> Result<i32, ValidationError> {
    let value = i32::try_from(magnitude).map_err(|_e| ValidationError::OutOfRange {
        part,
        value: i32::MAX,
        min: i32::MIN,
        max: i32::MAX,
    })?;
    Ok(if negative.unwrap_or(false) { -value } else { value })
}

macro_rules! signed_number {
    ($(#[$meta:meta])* $name:ident, $part:literal, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i16);

        impl $name {
            /// Largest magnitude this value accepts.
            pub const MAX: i32 = $max;

            /// ## Summary
            /// Wraps a signed value; negative values count from the period end.
            ///
            /// ## Errors
            /// Returns an error if the value is zero or its magnitude is out of range.
            pub fn new(value: i32) -> Result<Self, ValidationError> {
                let value = checked($part, value, Self::MAX)?;
                i16::try_from(value)
                    .map(Self)
                    .map_err(|_e| ValidationError::OutOfRange {
                        part: $part,
                        value,
                        min: -Self::MAX,
                        max: Self::MAX,
                    })
            }

            /// ## Summary
            /// Builds a value from an unsigned magnitude and a separate sign flag.
            /// `negative: None` is read as positive.
            ///
            /// ## Errors
            /// Returns an error if the magnitude is zero or out of range.
            pub fn with_sign(magnitude: u32, negative: Option<bool>) -> Result<Self, ValidationError> {
                Self::new(apply_sign($part, magnitude, negative)?)
            }

            #[must_use]
            pub fn value(self) -> i32 {
                i32::from(self.0)
            }

            #[must_use]
            pub const fn is_negative(self) -> bool {
                self.0 < 0
            }
        }

        impl TryFrom<i32> for $name {
            type Error = ValidationError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

signed_number!(
    /// BYMONTHDAY entry in `[-31,-1] ∪ [1,31]`.
    MonthDayNum,
    "BYMONTHDAY",
    31
);
signed_number!(
    /// BYYEARDAY entry in `[-366,-1] ∪ [1,366]`.
    YearDayNum,
    "BYYEARDAY",
    366
);
signed_number!(
    /// BYWEEKNO entry in `[-53,-1] ∪ [1,53]`.
    WeekNum,
    "BYWEEKNO",
    53
);
signed_number!(
    /// BYMONTH entry in `[-12,-1] ∪ [1,12]`; `-1` is December.
    MonthNum,
    "BYMONTH",
    12
);
signed_number!(
    /// BYSETPOS entry, sharing the year-day range.
    SetPosNum,
    "BYSETPOS",
    366
);
