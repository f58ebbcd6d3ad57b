//! # Batch Pacer
//!
//! Bounded-concurrency, paced batch execution for bulk asynchronous work.
//!
//! Pushing thousands of requests at an external system all at once trips rate
//! limits and overloads downstream capacity; sending them one at a time wastes
//! hours. This crate sits in between: it splits the work into fixed-size
//! batches, runs each batch concurrently, waits for the whole batch to settle,
//! and pauses for a "breathing gap" before the next one.
//!
//! ## Key Features
//!
//! - **Bounded concurrency**: at most `batch_size` operations in flight
//! - **Pacing**: a fixed pause between batches caps throughput independently of concurrency
//! - **Fail-fast**: the first failure stops the run; later batches never start
//! - **No forced cancellation**: in-flight siblings of a failed item run to completion
//! - **Progress/ETA**: a record per batch with running-average time estimates
//! - **Pluggable reporting**: `tracing`, in-memory, closures or your own sink
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use batch_pacer::config::ScheduleConfig;
//! use batch_pacer::core::batch_process;
//!
//! let config = ScheduleConfig::new(25, 2_000);
//! batch_process(customer_ids, |id| async move { notify(id).await }, &config).await?;
//! ```
//!
//! ## Custom Sinks and Spawners
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use batch_pacer::core::{BatchScheduler, InMemoryProgressSink};
//!
//! let progress = Arc::new(InMemoryProgressSink::new(100));
//! let scheduler = BatchScheduler::builder()
//!     .batch_size(5)
//!     .breathing_gap_ms(500)
//!     .shared_progress_sink(progress.clone())
//!     .build()?;
//!
//! let summary = scheduler.run(items, op).await?;
//! for record in progress.records() {
//!     println!("{} batches left, finish ~{}", record.batches_left, record.estimated_finish_display());
//! }
//! ```
//!
//! For complete examples, see:
//! - `tests/batch_scheduler_test.rs` - end-to-end scheduling scenarios
//! - `demos/sandbox.rs` - runnable walkthrough

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling: partitioning, operations, progress and errors.
pub mod core;
/// Configuration models for schedules.
pub mod config;
/// Builders to construct schedulers from configuration.
pub mod builders;
/// Runtime adapters used to spawn operations.
pub mod runtime;
/// Shared utilities.
pub mod util;
