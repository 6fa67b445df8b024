//! Log filter construction and subscriber installation.
//!
//! Library code only emits `tracing` events; binaries and tests that embed the
//! workspace call [`init_tracing`] once at startup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::constants::FALLBACK_LOG_LEVEL;

/// ## Summary
/// Builds an `EnvFilter` from a configured level or directive string.
///
/// Invalid directives fall back to `debug` with a warning instead of failing startup.
#[must_use]
pub fn env_filter(level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_new(level) {
        filter
    } else {
        tracing::warn!(level = %level, "Invalid log level in config, keeping {FALLBACK_LOG_LEVEL}");
        EnvFilter::new(FALLBACK_LOG_LEVEL)
    }
}

/// ## Summary
/// Installs the global fmt subscriber filtered by `config.level`.
///
/// ## Errors
/// Returns an error if a global subscriber has already been installed.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()?;

    tracing::info!(level = %config.level, "Tracing initialized");
    Ok(())
}
