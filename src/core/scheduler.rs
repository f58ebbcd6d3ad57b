//! Paced batch scheduler.
//!
//! [`BatchScheduler::run`] splits the input into contiguous batches of at
//! most `batch_size` items, starts every operation of a batch, waits until
//! the batch has settled, reports progress, and sleeps for the breathing
//! gap before the next batch. Batches never overlap: batch `b + 1` is only
//! started once every operation of batch `b` has succeeded.
//!
//! # Failure semantics
//!
//! The first failure observed in a batch ends the run. No further batch is
//! started and the error is returned unchanged inside
//! [`BatchError::Operation`]. Siblings of the failing item that are still in
//! flight are **not** cancelled: they were spawned onto the runtime and keep
//! running to completion, but their outcomes are discarded.
//!
//! Callers must therefore not assume rollback. Effects of batches completed
//! before the failure are permanent, and members of the failing batch may
//! have been partially or fully applied. If per-item failures have to be
//! tracked, capture them inside the operation and return `Ok`.
//!
//! The scheduler enforces no timeout. An operation that never settles stalls
//! the run; wrap the operation (for example with `tokio::time::timeout`) when
//! that matters.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tokio::time::Instant;
use tracing::{debug, error, info, warn, Instrument};
use uuid::Uuid;

use crate::config::{ScheduleConfig, ValidSchedule};
use crate::core::{
    BatchError, BatchPlan, ConfigError, ItemOperation, ProgressSink, ProgressTracker,
    TracingProgressSink,
};
use crate::runtime::CurrentTokioSpawner;

/// Abstraction for spawning item operations on a runtime.
pub trait Spawn {
    /// Spawn a detached future.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// Outcome of a run in which every batch succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Identifier shared with the run's progress records and tracing span.
    pub run_id: Uuid,
    /// Items processed.
    pub items: usize,
    /// Batches executed.
    pub batches: usize,
    /// Wall time of the run including breathing gaps.
    pub elapsed_ms: u64,
}

/// Runs item operations in paced, bounded-concurrency batches.
///
/// The scheduler keeps no state between runs; concurrent calls to
/// [`run`](Self::run) are independent apart from the progress sink they
/// share.
pub struct BatchScheduler<S = CurrentTokioSpawner> {
    schedule: ValidSchedule,
    sink: Arc<dyn ProgressSink>,
    spawner: S,
}

impl BatchScheduler<CurrentTokioSpawner> {
    /// Create a scheduler that logs progress through `tracing` and spawns
    /// onto the tokio runtime driving [`run`](Self::run).
    pub fn new(config: &ScheduleConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_parts(
            config.validate()?,
            Arc::new(TracingProgressSink),
            CurrentTokioSpawner,
        ))
    }

    /// Start building a scheduler.
    pub fn builder() -> crate::builders::SchedulerBuilder {
        crate::builders::SchedulerBuilder::new()
    }
}

impl<S> BatchScheduler<S> {
    /// Assemble a scheduler from already validated parts.
    pub fn from_parts(schedule: ValidSchedule, sink: Arc<dyn ProgressSink>, spawner: S) -> Self {
        Self {
            schedule,
            sink,
            spawner,
        }
    }

    /// The schedule this scheduler applies to every run.
    pub const fn schedule(&self) -> ValidSchedule {
        self.schedule
    }

    /// Batch layout a run over `item_count` items would use.
    pub const fn plan(&self, item_count: usize) -> BatchPlan {
        BatchPlan::new(item_count, self.schedule.batch_size)
    }
}

impl<S: Spawn> BatchScheduler<S> {
    /// Run `operation` over `items` batch by batch.
    ///
    /// The operation is invoked exactly once per item, in input order. Within
    /// a batch all operations run concurrently; completion order is
    /// unconstrained. No breathing gap follows the last batch, and an empty
    /// input returns immediately without invoking anything.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Operation`] with the first failure observed, or
    /// [`BatchError::Abandoned`] if a spawned operation panicked or its
    /// runtime shut down before it settled. See the module docs for what
    /// happens to in-flight siblings.
    pub async fn run<T, I, O>(
        &self,
        items: I,
        operation: O,
    ) -> Result<RunSummary, BatchError<O::Error>>
    where
        I: IntoIterator<Item = T>,
        T: Send + 'static,
        O: ItemOperation<T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let plan = self.plan(items.len());
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "batch_run",
            %run_id,
            items = plan.item_count(),
            total_batches = plan.total_batches()
        );
        self.run_plan(run_id, plan, items, &operation)
            .instrument(span)
            .await
    }

    async fn run_plan<T, O>(
        &self,
        run_id: Uuid,
        plan: BatchPlan,
        items: Vec<T>,
        operation: &O,
    ) -> Result<RunSummary, BatchError<O::Error>>
    where
        T: Send + 'static,
        O: ItemOperation<T>,
    {
        let started = Instant::now();
        let tracker = ProgressTracker::new(run_id, plan.total_batches(), started);
        let gap = self.schedule.breathing_gap;
        let mut remaining = items.into_iter();

        info!(
            batch_size = plan.batch_size(),
            breathing_gap_ms = duration_ms(gap),
            "starting batch run"
        );

        for (batch, range) in plan.ranges().enumerate() {
            debug!(batch, start = range.start, len = range.len(), "launching batch");

            let mut pending = FuturesUnordered::new();
            for (position, item) in range.clone().zip(remaining.by_ref()) {
                let fut = operation.invoke(item);
                let (tx, rx) = oneshot::channel();
                self.spawner.spawn(async move {
                    // The receiver is gone once the run has given up on this batch.
                    let _ = tx.send(fut.await);
                });
                pending.push(async move { (position, rx.await) });
            }

            while let Some((position, outcome)) = pending.next().await {
                match outcome {
                    Ok(Ok(_)) => {}
                    Ok(Err(err)) => {
                        warn!(batch, position, "operation failed, stopping run");
                        return Err(BatchError::Operation(err));
                    }
                    Err(_) => {
                        error!(batch, position, "operation abandoned before settling");
                        return Err(BatchError::Abandoned { batch, position });
                    }
                }
            }

            let progress = tracker.record(batch + 1, range.end, Instant::now());
            debug!(
                batch,
                elapsed_ms = progress.elapsed_ms,
                eta_ms = progress.estimated_remaining_ms,
                "batch settled"
            );
            self.sink.report(&progress);

            if !progress.is_final() && !gap.is_zero() {
                debug!(gap_ms = duration_ms(gap), "breathing before next batch");
                tokio::time::sleep(gap).await;
            }
        }

        let summary = RunSummary {
            run_id,
            items: plan.item_count(),
            batches: plan.total_batches(),
            elapsed_ms: duration_ms(started.elapsed()),
        };
        info!(elapsed_ms = summary.elapsed_ms, "batch run complete");
        Ok(summary)
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Validate `config` and run `operation` over `items` on the current tokio
/// runtime, logging progress through `tracing`.
///
/// # Errors
///
/// [`BatchError::Config`] when `config` is invalid (no operation is invoked),
/// otherwise the errors of [`BatchScheduler::run`].
pub async fn batch_process<T, I, O>(
    items: I,
    operation: O,
    config: &ScheduleConfig,
) -> Result<RunSummary, BatchError<O::Error>>
where
    I: IntoIterator<Item = T>,
    T: Send + 'static,
    O: ItemOperation<T>,
{
    BatchScheduler::new(config)?.run(items, operation).await
}
