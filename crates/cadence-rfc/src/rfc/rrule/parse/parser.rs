//! RRULE text parser.

use super::error::{ParseResult, SyntaxError};
use super::partial::PartialRule;
use super::values::{
    parse_by_rule, parse_count, parse_freq, parse_interval, parse_until, parse_wkst,
};

/// ## Summary
/// Parses RECUR text (`FREQ=WEEKLY;BYDAY=MO,WE`) into its rule parts, in
/// order of appearance.
///
/// Parts are split on `;` and dispatched on their first character. A single
/// trailing `;` is tolerated. Cross-part constraints are not checked here.
///
/// ## Errors
/// Returns a [`SyntaxError`] naming the first malformed or unrecognized part.
pub fn parse(text: &str) -> ParseResult<Vec<PartialRule>> {
    let text = text.strip_suffix(';').unwrap_or(text);
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split(';').map(parse_part).collect()
}

fn parse_part(segment: &str) -> ParseResult<PartialRule> {
    let part = match segment.as_bytes().first() {
        Some(b'F') => parse_freq(segment),
        Some(b'U') => parse_until(segment),
        Some(b'C') => parse_count(segment),
        Some(b'I') => parse_interval(segment),
        Some(b'B') => parse_by_rule(segment),
        Some(b'W') => parse_wkst(segment),
        Some(_) => Err(SyntaxError::because(segment, "unknown rule part")),
        None => Err(SyntaxError::because(segment, "empty rule part")),
    }?;
    tracing::trace!(segment = %segment, part = part.name(), "Parsed rule part");
    Ok(part)
}
