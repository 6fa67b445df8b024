//! Per-part value parsers for the RECUR grammar.

use chrono::{NaiveDate, NaiveDateTime};

use super::error::{ParseResult, SyntaxError};
use super::partial::PartialRule;
use crate::rfc::rrule::core::{
    Frequency, MAX_HOUR, MAX_MINUTE, MAX_SECOND, MAX_WEEKDAY_ORDINAL, MonthDayNum, MonthNum,
    SetPosNum, ValidationError, WeekNum, Weekday, WeekdayNum, YearDayNum,
};

/// Parses a `FREQ=` rule part.
pub(super) fn parse_freq(segment: &str) -> ParseResult<PartialRule> {
    let value = strip_name(segment, "FREQ=")?;
    Frequency::parse(value)
        .map(PartialRule::Frequency)
        .ok_or_else(|| SyntaxError::because(segment, format!("unknown frequency {value}")))
}

/// Parses an `UNTIL=` rule part.
///
/// The 8-digit date form means 23:59:59 on that date.
pub(super) fn parse_until(segment: &str) -> ParseResult<PartialRule> {
    let value = strip_name(segment, "UNTIL=")?;
    let until = match value.len() {
        8 => parse_date(value).and_then(|date| date.and_hms_opt(23, 59, 59)),
        15 if value.as_bytes()[8] == b'T' => parse_date_time(value),
        _ => None,
    };
    until
        .map(PartialRule::Until)
        .ok_or_else(|| SyntaxError::because(segment, "unsupported date format"))
}

/// Parses a `COUNT=` rule part.
pub(super) fn parse_count(segment: &str) -> ParseResult<PartialRule> {
    parse_positive(segment, "COUNT=").map(PartialRule::Count)
}

/// Parses an `INTERVAL=` rule part.
pub(super) fn parse_interval(segment: &str) -> ParseResult<PartialRule> {
    parse_positive(segment, "INTERVAL=").map(PartialRule::Interval)
}

/// Parses a `WKST=` rule part.
pub(super) fn parse_wkst(segment: &str) -> ParseResult<PartialRule> {
    let value = strip_name(segment, "WKST=")?;
    Weekday::parse(value)
        .map(PartialRule::WorkWeekStart)
        .ok_or_else(|| SyntaxError::because(segment, format!("unknown weekday {value}")))
}

/// Parses any `BYxxx=` rule part.
pub(super) fn parse_by_rule(segment: &str) -> ParseResult<PartialRule> {
    let (name, value) = segment
        .split_once('=')
        .ok_or_else(|| SyntaxError::because(segment, "expected value assignment was not found"))?;

    Ok(match name {
        "BYSECOND" => PartialRule::BySecond(parse_time_list(name, value, MAX_SECOND)?),
        "BYMINUTE" => PartialRule::ByMinute(parse_time_list(name, value, MAX_MINUTE)?),
        "BYHOUR" => PartialRule::ByHour(parse_time_list(name, value, MAX_HOUR)?),
        "BYDAY" => PartialRule::ByDay(
            value
                .split(',')
                .map(parse_weekday_num)
                .collect::<ParseResult<_>>()?,
        ),
        "BYMONTHDAY" => PartialRule::ByMonthDay(parse_signed_list(
            name,
            value,
            "expected valid number of day in month",
            MonthDayNum::MAX,
            MonthDayNum::new,
        )?),
        "BYYEARDAY" => PartialRule::ByYearDay(parse_signed_list(
            name,
            value,
            "expected valid number of day in year",
            YearDayNum::MAX,
            YearDayNum::new,
        )?),
        "BYWEEKNO" => PartialRule::ByWeekNo(parse_signed_list(
            name,
            value,
            "expected valid number of week in year",
            WeekNum::MAX,
            WeekNum::new,
        )?),
        "BYMONTH" => PartialRule::ByMonth(parse_signed_list(
            name,
            value,
            "expected valid number of month in year",
            MonthNum::MAX,
            MonthNum::new,
        )?),
        "BYSETPOS" => PartialRule::BySetPos(parse_signed_list(
            name,
            value,
            "expected valid set position",
            SetPosNum::MAX,
            SetPosNum::new,
        )?),
        _ => return Err(SyntaxError::because(segment, "unknown rule part")),
    })
}

/// Parses a single weekday with optional ordinal (e.g., "MO", "1MO", "-1FR").
fn parse_weekday_num(entry: &str) -> ParseResult<WeekdayNum> {
    let error = |cause: &str| SyntaxError::because(format!("BYDAY={entry}"), cause);

    // The last two characters are always the weekday
    let split = entry.len().checked_sub(2);
    let (ordinal_str, weekday_str) = match split {
        Some(at) if entry.is_char_boundary(at) => entry.split_at(at),
        _ => return Err(error("expected at least valid week day name")),
    };
    let weekday = Weekday::parse(weekday_str)
        .ok_or_else(|| error("expected at least valid week day name"))?;

    if ordinal_str.is_empty() {
        return Ok(WeekdayNum::every(weekday));
    }

    let (negative, digits) = split_sign(ordinal_str);
    if digits.len() > 2 {
        return Err(error("expected valid week ordinal number"));
    }
    let magnitude = parse_digits(digits)
        .filter(|n| (1..=MAX_WEEKDAY_ORDINAL.unsigned_abs()).contains(n))
        .ok_or_else(|| error("expected valid week ordinal number"))?;

    WeekdayNum::with_sign(weekday, magnitude, negative).map_err(|e| validation(entry, &e))
}

/// Parses a comma-separated list of time values bounded by `max`.
fn parse_time_list(name: &str, value: &str, max: u8) -> ParseResult<Vec<u8>> {
    value
        .split(',')
        .map(|entry| {
            parse_digits(entry)
                .filter(|_| entry.len() <= 2)
                .and_then(|n| u8::try_from(n).ok())
                .filter(|n| *n <= max)
                .ok_or_else(|| {
                    SyntaxError::because(
                        format!("{name}={value}"),
                        format!("expected comma separated list of numbers between 0-{max} range"),
                    )
                })
        })
        .collect()
}

/// Parses a comma-separated list of optionally signed numbers with magnitude in `1..=max`.
fn parse_signed_list<T>(
    name: &str,
    value: &str,
    cause: &str,
    max: i32,
    build: fn(i32) -> Result<T, ValidationError>,
) -> ParseResult<Vec<T>> {
    value
        .split(',')
        .map(|entry| {
            let error = || SyntaxError::because(format!("{name}={entry}"), cause);
            let (negative, digits) = split_sign(entry);
            let magnitude = parse_digits(digits)
                .and_then(|n| i32::try_from(n).ok())
                .filter(|n| (1..=max).contains(n))
                .ok_or_else(error)?;
            let signed = if negative == Some(true) {
                -magnitude
            } else {
                magnitude
            };
            build(signed).map_err(|e| validation(entry, &e))
        })
        .collect()
}

fn parse_positive(segment: &str, name: &str) -> ParseResult<u32> {
    let value = strip_name(segment, name)?;
    parse_digits(value).filter(|n| *n > 0).ok_or_else(|| {
        SyntaxError::because(
            segment,
            format!("expected positive integer, instead: {value} given"),
        )
    })
}

fn strip_name<'a>(segment: &'a str, name: &str) -> ParseResult<&'a str> {
    segment
        .strip_prefix(name)
        .ok_or_else(|| SyntaxError::new(segment))
}

/// Splits a leading `+` or `-` off `s`, returning `Some(true)` for minus.
fn split_sign(s: &str) -> (Option<bool>, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (Some(true), rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (Some(false), rest)
    } else {
        (None, s)
    }
}

/// Parses a non-empty run of ASCII digits.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parses `YYYYMMDD`.
fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = s.get(0..4)?.parse().ok()?;
    let month = s.get(4..6)?.parse().ok()?;
    let day = s.get(6..8)?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses `YYYYMMDDTHHMMSS`.
fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    let date = parse_date(s.get(0..8)?)?;
    let time = s.get(9..15)?;
    if !time.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour = time.get(0..2)?.parse().ok()?;
    let minute = time.get(2..4)?.parse().ok()?;
    let second = time.get(4..6)?.parse().ok()?;
    date.and_hms_opt(hour, minute, second)
}

fn validation(entry: &str, error: &ValidationError) -> SyntaxError {
    SyntaxError::because(entry, error.to_string())
}
