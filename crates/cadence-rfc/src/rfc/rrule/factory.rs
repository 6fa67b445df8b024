use std::str::FromStr;

use super::build::RuleBuilder;
use super::core::Rule;
use super::parse::parse;
use crate::error::{RfcError, RfcResult};

/// ## Summary
/// Parses RECUR text into a validated [`Rule`].
///
/// Every parsed part is applied to a fresh [`RuleBuilder`] in order of
/// appearance; a repeated part keeps its last value.
///
/// ## Errors
/// Returns a syntax error for malformed text, or a build error if FREQ is
/// missing or the parts violate RFC 5545 constraints.
pub fn parse_rule(text: &str) -> RfcResult<Rule> {
    let builder = parse(text)?
        .into_iter()
        .fold(RuleBuilder::new(), |builder, part| part.apply_to(builder));
    Ok(builder.build()?)
}

impl FromStr for Rule {
    type Err = RfcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rule(s)
    }
}
