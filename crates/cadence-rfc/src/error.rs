use thiserror::Error;

use crate::rfc::rrule::build::BuildError;
use crate::rfc::rrule::core::ValidationError;
use crate::rfc::rrule::expand::ConversionError;
use crate::rfc::rrule::parse::SyntaxError;

/// RFC parsing and validation errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Syntax error: {0}")]
    SyntaxError(#[from] SyntaxError),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Build error: {0}")]
    BuildError(#[from] BuildError),

    #[error("Timezone error: {0}")]
    ConversionError(#[from] ConversionError),

    #[error(transparent)]
    CoreError(#[from] cadence_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
