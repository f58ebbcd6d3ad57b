//! Error types for batch scheduling.

use thiserror::Error;

/// Rejected schedule configuration. Raised before any operation is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Batch size was zero or negative.
    #[error("batch_size must be greater than 0 (got {0})")]
    InvalidBatchSize(i64),
    /// Breathing gap was negative.
    #[error("breathing_gap_ms must not be negative (got {0})")]
    NegativeBreathingGap(i64),
    /// Configuration document could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Errors produced by a batch run.
///
/// `E` is the error type of the caller's operation. It is carried as-is in
/// [`BatchError::Operation`]; the scheduler never wraps, classifies or
/// aggregates operation failures.
#[derive(Debug, Error)]
pub enum BatchError<E> {
    /// The schedule configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The first operation failure observed in the failing batch.
    ///
    /// Display and `source()` both delegate to the inner error.
    #[error(transparent)]
    Operation(E),
    /// A spawned operation ended without reporting an outcome (panic or runtime shutdown).
    #[error("operation for item {position} of batch {batch} was abandoned before settling")]
    Abandoned {
        /// Zero-based index of the batch that contained the item.
        batch: usize,
        /// Zero-based position of the item within the whole input.
        position: usize,
    },
}

impl<E> BatchError<E> {
    /// Returns the operation error if this failure came from the operation.
    pub fn into_operation_error(self) -> Option<E> {
        match self {
            Self::Operation(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the run was rejected before any operation was invoked.
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
