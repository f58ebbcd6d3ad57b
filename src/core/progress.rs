//! Progress records, ETA estimation and reporting sinks.
//!
//! After every completed batch the scheduler derives a [`RunProgress`] from
//! the running average batch duration and hands it to a [`ProgressSink`].
//! Nothing here is persisted; records live as long as the sink keeps them.

use std::collections::VecDeque;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use uuid::Uuid;

use crate::util::clock::{display_local, utc_after};

/// Snapshot of a run after a batch completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunProgress {
    /// Identifier of the run that produced this record.
    pub run_id: Uuid,
    /// Number of batches completed so far (1-based).
    pub batch_index: usize,
    /// Total batches in the run.
    pub total_batches: usize,
    /// Batches still to run.
    pub batches_left: usize,
    /// Items whose batch has fully settled.
    pub items_done: usize,
    /// Time since the run started, including breathing gaps.
    pub elapsed_ms: u64,
    /// `elapsed / batch_index`.
    pub average_ms_per_batch: u64,
    /// `average × batches_left`.
    pub estimated_remaining_ms: u64,
    /// Wall-clock time at which the run is expected to finish.
    pub estimated_finish: DateTime<Utc>,
}

impl RunProgress {
    /// Estimated remaining time in whole seconds, rounded up.
    pub const fn estimated_remaining_secs(&self) -> u64 {
        self.estimated_remaining_ms.div_ceil(1000)
    }

    /// Estimated finish rendered in local time.
    pub fn estimated_finish_display(&self) -> String {
        display_local(self.estimated_finish)
    }

    /// Whether this record describes the final batch.
    pub const fn is_final(&self) -> bool {
        self.batches_left == 0
    }
}

/// Derives [`RunProgress`] records for one run.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    run_id: Uuid,
    total_batches: usize,
    started: Instant,
}

impl ProgressTracker {
    /// Start tracking a run of `total_batches` that began at `started`.
    pub const fn new(run_id: Uuid, total_batches: usize, started: Instant) -> Self {
        Self {
            run_id,
            total_batches,
            started,
        }
    }

    /// Build the record for `batches_done` completed batches as of `now`.
    pub fn record(&self, batches_done: usize, items_done: usize, now: Instant) -> RunProgress {
        let elapsed = now.saturating_duration_since(self.started);
        let batches_left = self.total_batches.saturating_sub(batches_done);
        let average = u32::try_from(batches_done.max(1))
            .map_or(Duration::ZERO, |done| elapsed / done);
        let remaining = u32::try_from(batches_left)
            .ok()
            .and_then(|left| average.checked_mul(left))
            .unwrap_or(Duration::MAX);

        RunProgress {
            run_id: self.run_id,
            batch_index: batches_done,
            total_batches: self.total_batches,
            batches_left,
            items_done,
            elapsed_ms: as_millis(elapsed),
            average_ms_per_batch: as_millis(average),
            estimated_remaining_ms: as_millis(remaining),
            estimated_finish: utc_after(remaining),
        }
    }
}

fn as_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Receives one record per completed batch.
pub trait ProgressSink: Send + Sync {
    /// Record progress after a batch completed.
    fn report(&self, progress: &RunProgress);
}

impl<F> ProgressSink for F
where
    F: Fn(&RunProgress) + Send + Sync,
{
    fn report(&self, progress: &RunProgress) {
        self(progress);
    }
}

/// Emits each record as a structured `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgressSink;

impl ProgressSink for TracingProgressSink {
    fn report(&self, progress: &RunProgress) {
        tracing::info!(
            run_id = %progress.run_id,
            batch = progress.batch_index,
            total_batches = progress.total_batches,
            batches_left = progress.batches_left,
            eta_secs = progress.estimated_remaining_secs(),
            "batch {}/{} done, ~{}s remaining, estimated finish {}",
            progress.batch_index,
            progress.total_batches,
            progress.estimated_remaining_secs(),
            progress.estimated_finish_display(),
        );
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgressSink;

impl ProgressSink for NoopProgressSink {
    fn report(&self, _progress: &RunProgress) {}
}

/// Keeps the most recent records in memory, for tests and dashboards.
pub struct InMemoryProgressSink {
    records: Mutex<VecDeque<RunProgress>>,
    max_records: usize,
}

impl InMemoryProgressSink {
    /// Create a sink retaining at most `max_records` records.
    pub fn new(max_records: usize) -> Self {
        Self {
            records: Mutex::new(VecDeque::with_capacity(max_records)),
            max_records,
        }
    }

    /// Snapshot of retained records, oldest first.
    pub fn records(&self) -> Vec<RunProgress> {
        self.records.lock().iter().cloned().collect()
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether no record has been retained.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl ProgressSink for InMemoryProgressSink {
    fn report(&self, progress: &RunProgress) {
        if self.max_records == 0 {
            return;
        }
        let mut records = self.records.lock();
        if records.len() >= self.max_records {
            records.pop_front();
        }
        records.push_back(progress.clone());
    }
}
