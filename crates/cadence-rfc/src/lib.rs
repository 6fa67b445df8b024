//! RFC 5545 recurrence rules: parsing, validation, serialization and expansion.
//!
//! ```rust
//! use cadence_rfc::rfc::rrule::{Rule, expand};
//! use chrono::{TimeZone, Utc};
//!
//! let rule: Rule = "FREQ=DAILY;COUNT=2".parse().unwrap();
//! let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
//!
//! let days: Vec<_> = expand(&rule, start).collect();
//! assert_eq!(days.len(), 2);
//! ```

pub mod error;
pub mod rfc;
