//! RRULE text parsing (RFC 5545 §3.3.10).
//!
//! ## Usage
//!
//! ```rust
//! use cadence_rfc::rfc::rrule::parse::{PartialRule, parse};
//! use cadence_rfc::rfc::rrule::Frequency;
//!
//! let parts = parse("FREQ=WEEKLY;COUNT=4").unwrap();
//! assert_eq!(parts[0], PartialRule::Frequency(Frequency::Weekly));
//! assert_eq!(parts[1], PartialRule::Count(4));
//! ```

mod error;
mod parser;
mod partial;
mod values;

pub use error::{ParseResult, SyntaxError};
pub use parser::parse;
pub use partial::PartialRule;
