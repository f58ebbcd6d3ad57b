//! Schedule configuration: batch size and breathing gap.

use std::num::NonZeroUsize;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Default number of items per batch.
pub const DEFAULT_BATCH_SIZE: i64 = 10;
/// Default pause between batches, in milliseconds.
pub const DEFAULT_BREATHING_GAP_MS: i64 = 10_000;

/// Raw schedule configuration as supplied by callers or parsed from JSON.
///
/// Values are signed so that out-of-range input is representable and can
/// be rejected by [`ScheduleConfig::validate`] instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Items per batch. Must be positive.
    pub batch_size: i64,
    /// Pause between batches in milliseconds. Must not be negative.
    pub breathing_gap_ms: i64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            breathing_gap_ms: DEFAULT_BREATHING_GAP_MS,
        }
    }
}

/// Validated schedule, immutable for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidSchedule {
    /// Items per batch.
    pub batch_size: NonZeroUsize,
    /// Pause between batches.
    pub breathing_gap: Duration,
}

impl ScheduleConfig {
    /// Create a configuration from explicit values (not yet validated).
    pub const fn new(batch_size: i64, breathing_gap_ms: i64) -> Self {
        Self {
            batch_size,
            breathing_gap_ms,
        }
    }

    /// Validate values and convert to a [`ValidSchedule`].
    pub fn validate(&self) -> Result<ValidSchedule, ConfigError> {
        let batch_size = usize::try_from(self.batch_size)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(ConfigError::InvalidBatchSize(self.batch_size))?;
        let gap_ms = u64::try_from(self.breathing_gap_ms)
            .map_err(|_| ConfigError::NegativeBreathingGap(self.breathing_gap_ms))?;
        Ok(ValidSchedule {
            batch_size,
            breathing_gap: Duration::from_millis(gap_ms),
        })
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let cfg: Self =
            serde_json::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
