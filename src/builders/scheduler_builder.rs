//! Builder assembling a [`BatchScheduler`] from configuration, sink and spawner.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ScheduleConfig;
use crate::core::{BatchScheduler, ConfigError, ProgressSink, Spawn, TracingProgressSink};
use crate::runtime::CurrentTokioSpawner;

/// Builds a [`BatchScheduler`].
///
/// Starts from [`ScheduleConfig::default`], reports progress through
/// [`TracingProgressSink`] and spawns onto the current tokio runtime unless
/// told otherwise. Validation happens in [`build`](Self::build).
pub struct SchedulerBuilder<S = CurrentTokioSpawner> {
    config: ScheduleConfig,
    sink: Arc<dyn ProgressSink>,
    spawner: S,
}

impl SchedulerBuilder<CurrentTokioSpawner> {
    /// Builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: ScheduleConfig::default(),
            sink: Arc::new(TracingProgressSink),
            spawner: CurrentTokioSpawner,
        }
    }
}

impl Default for SchedulerBuilder<CurrentTokioSpawner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SchedulerBuilder<S> {
    /// Replace the whole schedule configuration.
    #[must_use]
    pub const fn config(mut self, config: ScheduleConfig) -> Self {
        self.config = config;
        self
    }

    /// Items per batch.
    #[must_use]
    pub const fn batch_size(mut self, batch_size: i64) -> Self {
        self.config.batch_size = batch_size;
        self
    }

    /// Pause between batches in milliseconds.
    #[must_use]
    pub const fn breathing_gap_ms(mut self, breathing_gap_ms: i64) -> Self {
        self.config.breathing_gap_ms = breathing_gap_ms;
        self
    }

    /// Pause between batches.
    #[must_use]
    pub fn breathing_gap(mut self, gap: Duration) -> Self {
        self.config.breathing_gap_ms = i64::try_from(gap.as_millis()).unwrap_or(i64::MAX);
        self
    }

    /// Send progress records to `sink`.
    #[must_use]
    pub fn progress_sink(mut self, sink: impl ProgressSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Send progress records to a sink the caller keeps a handle to.
    #[must_use]
    pub fn shared_progress_sink(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Spawn operations with `spawner`.
    pub fn spawner<S2: Spawn>(self, spawner: S2) -> SchedulerBuilder<S2> {
        SchedulerBuilder {
            config: self.config,
            sink: self.sink,
            spawner,
        }
    }

    /// Current, not yet validated, configuration.
    pub const fn current_config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Validate the configuration and build the scheduler.
    pub fn build(self) -> Result<BatchScheduler<S>, ConfigError> {
        let schedule = self.config.validate()?;
        tracing::debug!(
            batch_size = schedule.batch_size.get(),
            breathing_gap_ms = self.config.breathing_gap_ms,
            "scheduler built"
        );
        Ok(BatchScheduler::from_parts(schedule, self.sink, self.spawner))
    }
}
