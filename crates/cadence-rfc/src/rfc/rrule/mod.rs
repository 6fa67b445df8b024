//! RFC 5545 recurrence rules (RRULE).
//!
//! ## Usage
//!
//! ```rust
//! use cadence_rfc::rfc::rrule::{Frequency, Rule, expand};
//! use chrono::{TimeZone, Utc};
//!
//! let rule: Rule = "FREQ=MONTHLY;COUNT=3;BYDAY=MO,TU,WE,TH,FR;BYSETPOS=-1"
//!     .parse()
//!     .unwrap();
//! assert_eq!(rule.freq(), Frequency::Monthly);
//!
//! let start = Utc.with_ymd_and_hms(1997, 9, 2, 9, 0, 0).unwrap();
//! let last_workdays: Vec<_> = expand(&rule, start).collect();
//! assert_eq!(
//!     last_workdays[0],
//!     Utc.with_ymd_and_hms(1997, 9, 30, 9, 0, 0).unwrap()
//! );
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Data model (`Rule`, `Frequency`, bounded values)
//! - [`parse`] - Text parser producing `PartialRule` values
//! - [`build`] - `RuleBuilder` and serialization
//! - [`expand`] - Occurrence expansion engine

pub mod build;
pub mod core;
pub mod expand;
pub mod parse;

mod factory;


pub use build::{BuildError, RuleBuilder, serialize};
pub use self::core::{
    Frequency, MonthDayNum, MonthNum, Rule, RuleParts, SetPosNum, ValidationError, WeekNum,
    Weekday, WeekdayNum, YearDayNum,
};
pub use expand::{
    DstGapPolicy, ExpansionOptions, Occurrences, TimeZoneResolver, expand, expand_in,
    expand_with,
};
pub use factory::parse_rule;
pub use parse::{PartialRule, SyntaxError, parse};
