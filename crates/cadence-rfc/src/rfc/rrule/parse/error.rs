//! RRULE syntax error type.

use std::fmt;

/// Result type for RRULE parsing operations.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Malformed or unrecognized rule-part text.
///
/// Parsing stops at the first error; no partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// The offending rule part or list entry.
    pub segment: String,
    /// Human-readable reason, when one is known.
    pub cause: Option<String>,
}

impl SyntaxError {
    /// Creates a syntax error without a specific cause.
    #[must_use]
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            cause: None,
        }
    }

    /// Creates a syntax error with a human-readable cause.
    #[must_use]
    pub fn because(segment: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            cause: Some(cause.into()),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error near: {}", self.segment)?;
        if let Some(cause) = &self.cause {
            write!(f, " because {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}
