//! Core batch scheduling: partitioning, operations, progress and errors.

pub mod error;
pub mod operation;
pub mod plan;
pub mod progress;
pub mod scheduler;

pub use error::{AppResult, BatchError, ConfigError};
pub use operation::{sync_operation, ItemOperation, SyncOperation};
pub use plan::BatchPlan;
pub use progress::{
    InMemoryProgressSink, NoopProgressSink, ProgressSink, ProgressTracker, RunProgress,
    TracingProgressSink,
};
pub use scheduler::{batch_process, BatchScheduler, RunSummary, Spawn};
