/// Application name, also the config file stem
pub const APP_NAME: &str = "cadence";
pub const ENV_PREFIX: &str = "CADENCE";
pub const CONFIG_FILE: &str = const_str::concat!(APP_NAME, ".toml");

/// Expansion defaults
pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_DST_GAP_POLICY: &str = "shift_forward";
/// Largest year an RFC 5545 DATE can carry (4 digits).
pub const DEFAULT_MAX_YEAR: i32 = 9999;

pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Used when the configured level is not a valid filter directive.
pub const FALLBACK_LOG_LEVEL: &str = "debug";
