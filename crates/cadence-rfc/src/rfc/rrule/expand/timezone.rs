//! Timezone resolution and local-time disambiguation.
//!
//! Uses ICU4X for Windows timezone ID to IANA mapping and timezone canonicalization.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeDelta, TimeZone};
use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;
use std::collections::HashMap;
use std::str::FromStr;

use cadence_core::config::DstGapPolicy;

/// Longest DST gap searched when shifting a local time forward.
const MAX_GAP_MINUTES: i64 = 24 * 60;

/// Error during timezone resolution.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Unknown or invalid timezone identifier.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Non-existent time during DST gap.
    #[error("Non-existent time (DST gap): {0}")]
    NonExistentTime(String),
}

/// Resolver for timezone identifiers.
///
/// Maintains a cache of resolved timezones by TZID.
#[derive(Debug, Default)]
pub struct TimeZoneResolver {
    cache: HashMap<String, Tz>,
}

impl TimeZoneResolver {
    /// Creates a new timezone resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Resolves a timezone identifier to a `chrono_tz::Tz`.
    ///
    /// Windows names (`Eastern Standard Time`), vendor prefixes
    /// (`/mozilla.org/...`) and IANA aliases are normalized first.
    ///
    /// ## Errors
    ///
    /// Returns `ConversionError::UnknownTimezone` if the TZID cannot be resolved.
    ///
    /// ## Side Effects
    ///
    /// Caches successful resolutions to avoid repeated parsing.
    pub fn resolve(&mut self, tzid: &str) -> Result<Tz, ConversionError> {
        if let Some(tz) = self.cache.get(tzid) {
            return Ok(*tz);
        }

        let normalized = normalize_tzid(tzid);
        let tz = Tz::from_str(&normalized)
            .map_err(|_e| ConversionError::UnknownTimezone(tzid.to_string()))?;

        tracing::trace!(tzid = %tzid, resolved = %tz, "Resolved timezone");
        self.cache.insert(tzid.to_string(), tz);

        Ok(tz)
    }

    /// Returns whether `tzid` has already been resolved.
    #[must_use]
    pub fn is_cached(&self, tzid: &str) -> bool {
        self.cache.contains_key(tzid)
    }
}

/// Normalizes calendar-client timezone identifiers to canonical IANA names.
fn normalize_tzid(tzid: &str) -> String {
    let stripped = tzid
        .strip_prefix("/mozilla.org/")
        .or_else(|| tzid.strip_prefix("/softwarestudio.org/"))
        .unwrap_or(tzid);

    let iana_parser = IanaParserExtended::new();

    if let Some(tz) = WindowsParser::new().parse(stripped, None)
        && let Some(entry) = iana_parser.iter().find(|entry| entry.time_zone == tz)
    {
        return entry.canonical.to_string();
    }

    // Canonicalizes aliases such as Europe/Kiev -> Europe/Kyiv
    let parsed = iana_parser.parse(stripped);
    if parsed.time_zone != icu::time::TimeZone::UNKNOWN {
        return parsed.canonical.to_string();
    }

    stripped.to_string()
}

/// ## Summary
/// Maps a wall-clock time in `tz` to an instant.
///
/// Ambiguous times (DST fold) resolve to the earliest instant. Times skipped
/// by a DST gap follow `policy`: `ShiftForward` yields the first wall-clock
/// time that exists after the gap, `Skip` yields `None`.
pub fn resolve_local<Z: TimeZone>(
    local: NaiveDateTime,
    tz: &Z,
    policy: DstGapPolicy,
) -> Option<DateTime<Z>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _latest) => {
            tracing::debug!(local = %local, "Ambiguous local time, using earliest instant");
            Some(earliest)
        }
        LocalResult::None => match policy {
            DstGapPolicy::Skip => {
                tracing::debug!(local = %local, "Local time in DST gap skipped");
                None
            }
            DstGapPolicy::ShiftForward => {
                let shifted = next_valid_local(local, tz);
                tracing::debug!(
                    local = %local,
                    shifted = ?shifted.as_ref().map(DateTime::naive_local),
                    "Local time in DST gap shifted forward"
                );
                shifted
            }
        },
    }
}

/// Finds the first existing wall-clock time after the non-existent `local`.
fn next_valid_local<Z: TimeZone>(local: NaiveDateTime, tz: &Z) -> Option<DateTime<Z>> {
    let exists = |t: NaiveDateTime| !matches!(tz.from_local_datetime(&t), LocalResult::None);

    let mut invalid = local;
    for _ in 0..MAX_GAP_MINUTES {
        let probe = invalid.checked_add_signed(TimeDelta::minutes(1))?;
        if exists(probe) {
            let mut valid = probe;
            while (valid - invalid).num_seconds() > 1 {
                let mid = invalid + (valid - invalid) / 2;
                if exists(mid) {
                    valid = mid;
                } else {
                    invalid = mid;
                }
            }
            return tz.from_local_datetime(&valid).earliest();
        }
        invalid = probe;
    }
    None
}
