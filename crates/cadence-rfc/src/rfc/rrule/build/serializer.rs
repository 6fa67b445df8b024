use std::fmt;

use crate::rfc::rrule::core::Rule;

/// RFC 5545 DATE-TIME form used for UNTIL.
pub const UNTIL_FORMAT: &str = "%Y%m%dT%H%M%S";

/// ## Summary
/// Serializes a rule to RECUR text.
///
/// Parts are written as `FREQ`, `UNTIL`, `COUNT`, `INTERVAL`, the BYxxx parts
/// from seconds up to `BYSETPOS`, then `WKST`. Only parts present on the rule
/// are written, so parsing the output yields an equal rule.
#[must_use]
pub fn serialize(rule: &Rule) -> String {
    let mut parts = vec![format!("FREQ={}", rule.freq())];

    if let Some(until) = rule.until() {
        parts.push(format!("UNTIL={}", until.format(UNTIL_FORMAT)));
    }
    if let Some(count) = rule.count() {
        parts.push(format!("COUNT={count}"));
    }
    if let Some(interval) = rule.interval_part() {
        parts.push(format!("INTERVAL={interval}"));
    }

    push_list(&mut parts, "BYSECOND", rule.by_second());
    push_list(&mut parts, "BYMINUTE", rule.by_minute());
    push_list(&mut parts, "BYHOUR", rule.by_hour());
    push_list(&mut parts, "BYDAY", rule.by_day());
    push_list(&mut parts, "BYMONTHDAY", rule.by_month_day());
    push_list(&mut parts, "BYYEARDAY", rule.by_year_day());
    push_list(&mut parts, "BYWEEKNO", rule.by_week_no());
    push_list(&mut parts, "BYMONTH", rule.by_month());
    push_list(&mut parts, "BYSETPOS", rule.by_set_pos());

    if let Some(week_start) = rule.week_start_part() {
        parts.push(format!("WKST={week_start}"));
    }

    parts.join(";")
}

fn push_list<T: fmt::Display>(parts: &mut Vec<String>, name: &str, values: &[T]) {
    if values.is_empty() {
        return;
    }
    let joined: Vec<_> = values.iter().map(ToString::to_string).collect();
    parts.push(format!("{name}={}", joined.join(",")));
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}
