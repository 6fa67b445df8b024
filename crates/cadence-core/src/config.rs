use anyhow::Result;
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, FileFormat};
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE, DEFAULT_DST_GAP_POLICY, DEFAULT_LOG_LEVEL, DEFAULT_MAX_YEAR, DEFAULT_TIMEZONE,
    ENV_PREFIX,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub expansion: ExpansionConfig,
    pub logging: LoggingConfig,
}

/// How a local time that falls into a daylight-saving gap is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DstGapPolicy {
    /// Move to the first wall-clock time that exists after the gap.
    #[default]
    ShiftForward,
    /// Drop the occurrence entirely.
    Skip,
}

impl DstGapPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShiftForward => "shift_forward",
            Self::Skip => "skip",
        }
    }
}

impl std::fmt::Display for DstGapPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpansionConfig {
    /// TZID used when expanding in the configured zone.
    pub timezone: String,
    pub dst_gap: DstGapPolicy,
    /// Last calendar year the expansion engine enumerates.
    pub max_year: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `cadence.toml`.
    /// Environment variables (`CADENCE_EXPANSION__MAX_YEAR`, ...) take precedence.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the configuration fails.
    pub fn load() -> Result<Self> {
        let settings = Self::defaults()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            // Env
            .add_source(Self::environment())
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        tracing::debug!(settings = ?settings, "Configuration loaded");
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from an inline TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_toml(document: &str) -> Result<Self> {
        let settings = Self::defaults()?
            .add_source(config::File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// `CADENCE_` prefix, `__` between nested keys.
    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("expansion.timezone", DEFAULT_TIMEZONE)?
            .set_default("expansion.dst_gap", DEFAULT_DST_GAP_POLICY)?
            .set_default("expansion.max_year", i64::from(DEFAULT_MAX_YEAR))?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?)
    }

    /// ## Summary
    /// Checks value ranges that serde cannot express.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` for an empty timezone or a year outside 1..=9999.
    pub fn validate(&self) -> CoreResult<()> {
        if self.expansion.timezone.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "expansion.timezone must not be empty".to_string(),
            ));
        }

        if !(1..=DEFAULT_MAX_YEAR).contains(&self.expansion.max_year) {
            return Err(CoreError::ConfigError(format!(
                "expansion.max_year must be within 1..={DEFAULT_MAX_YEAR}, got {}",
                self.expansion.max_year
            )));
        }

        Ok(())
    }
}

/// ## Summary
/// Loads configuration from the `.env` file, environment variables and `cadence.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
