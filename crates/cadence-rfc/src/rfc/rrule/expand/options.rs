use cadence_core::config::{DstGapPolicy, ExpansionConfig};
use cadence_core::constants::DEFAULT_MAX_YEAR;
use cadence_core::error::{CoreError, CoreResult};

/// Options for recurrence expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionOptions {
    /// How local times skipped by a DST transition are resolved.
    pub dst_gap: DstGapPolicy,

    /// Last calendar year enumerated; later periods end the sequence.
    pub max_year: i32,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            dst_gap: DstGapPolicy::default(),
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

impl ExpansionOptions {
    /// ## Summary
    /// Builds engine options from the loaded expansion configuration.
    ///
    /// ## Errors
    /// Returns an error if `max_year` is outside `1..=9999`.
    pub fn from_config(config: &ExpansionConfig) -> CoreResult<Self> {
        if !(1..=DEFAULT_MAX_YEAR).contains(&config.max_year) {
            return Err(CoreError::ValidationError(format!(
                "max_year must be within 1..={DEFAULT_MAX_YEAR}, got {}",
                config.max_year
            )));
        }
        Ok(Self {
            dst_gap: config.dst_gap,
            max_year: config.max_year,
        })
    }

    #[must_use]
    pub const fn with_dst_gap(mut self, policy: DstGapPolicy) -> Self {
        self.dst_gap = policy;
        self
    }

    #[must_use]
    pub const fn with_max_year(mut self, max_year: i32) -> Self {
        self.max_year = max_year;
        self
    }
}
