//! Occurrence expansion for recurrence rules.
//!
//! Each period implied by FREQ and INTERVAL is enumerated in turn: its days are
//! narrowed by the date-level BYxxx parts, crossed with the BYHOUR, BYMINUTE
//! and BYSECOND times, reduced by BYSETPOS and then yielded in order until
//! COUNT or UNTIL is reached.
//!
//! ## Timezones
//!
//! Candidates are generated as wall-clock times in the start's timezone.
//! Times that fall into a DST gap are shifted to the end of the gap by
//! default ([`DstGapPolicy::ShiftForward`]) or dropped
//! ([`DstGapPolicy::Skip`]); times repeated by a DST fold use the earlier
//! instant.

mod calendar;
mod filter;
mod iter;
mod options;
mod timezone;

pub use cadence_core::config::DstGapPolicy;
pub use calendar::{WeekOfYear, days_in_month, days_in_year, is_leap_year, week_of_year};
pub use iter::Occurrences;
pub use options::ExpansionOptions;
pub use timezone::{ConversionError, TimeZoneResolver, resolve_local};

use cadence_core::config::ExpansionConfig;
use chrono::{DateTime, NaiveDateTime, TimeZone};

use crate::error::RfcResult;
use crate::rfc::rrule::core::Rule;

/// Expands `rule` from `start` with default options.
#[must_use]
pub fn expand<Tz: TimeZone>(rule: &Rule, start: DateTime<Tz>) -> Occurrences<Tz> {
    Occurrences::new(rule, start, ExpansionOptions::default())
}

/// Expands `rule` from `start` with explicit options.
#[must_use]
pub fn expand_with<Tz: TimeZone>(
    rule: &Rule,
    start: DateTime<Tz>,
    options: ExpansionOptions,
) -> Occurrences<Tz> {
    Occurrences::new(rule, start, options)
}

/// ## Summary
/// Expands `rule` from a floating start time interpreted in the zone `tzid`.
///
/// The start itself is resolved with the same DST policy as every occurrence.
///
/// ## Errors
/// Returns an error if `tzid` cannot be resolved, or if the start falls into
/// a DST gap and the policy is [`DstGapPolicy::Skip`].
pub fn expand_in(
    rule: &Rule,
    start_local: NaiveDateTime,
    tzid: &str,
    resolver: &mut TimeZoneResolver,
    options: ExpansionOptions,
) -> Result<Occurrences<chrono_tz::Tz>, ConversionError> {
    let tz = resolver.resolve(tzid)?;
    let start = resolve_local(start_local, &tz, options.dst_gap).ok_or_else(|| {
        ConversionError::NonExistentTime(format!("{start_local} in timezone {tzid}"))
    })?;
    Ok(Occurrences::from_local_start(
        rule,
        start,
        start_local,
        options,
    ))
}

/// ## Summary
/// Expands `rule` from a floating start time in the configured timezone.
///
/// ## Errors
/// Returns an error if the configuration is invalid, the configured timezone
/// cannot be resolved, or the start cannot be placed in it.
pub fn expand_configured(
    rule: &Rule,
    start_local: NaiveDateTime,
    config: &ExpansionConfig,
    resolver: &mut TimeZoneResolver,
) -> RfcResult<Occurrences<chrono_tz::Tz>> {
    let options = ExpansionOptions::from_config(config)?;
    Ok(expand_in(rule, start_local, &config.timezone, resolver, options)?)
}

impl Rule {
    /// Expands this rule from `start` with default options.
    #[must_use]
    pub fn expand<Tz: TimeZone>(&self, start: DateTime<Tz>) -> Occurrences<Tz> {
        expand(self, start)
    }
}
