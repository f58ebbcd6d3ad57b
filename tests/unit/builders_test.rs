//! Tests for builder modules

use std::sync::Arc;
use std::time::Duration;

use batch_pacer::builders::SchedulerBuilder;
use batch_pacer::config::ScheduleConfig;
use batch_pacer::core::{ConfigError, InMemoryProgressSink, NoopProgressSink};
use batch_pacer::runtime::TokioSpawner;

#[test]
fn test_scheduler_builder_defaults() {
    let builder: SchedulerBuilder = SchedulerBuilder::default();
    assert_eq!(builder.current_config().batch_size, 10);
    assert_eq!(builder.current_config().breathing_gap_ms, 10_000);
}

#[test]
fn test_scheduler_builder_from_config() {
    let scheduler = SchedulerBuilder::new()
        .config(ScheduleConfig::new(4, 40))
        .progress_sink(NoopProgressSink)
        .build()
        .unwrap();
    assert_eq!(scheduler.schedule().batch_size.get(), 4);
    assert_eq!(scheduler.schedule().breathing_gap, Duration::from_millis(40));
    assert_eq!(scheduler.plan(9).total_batches(), 3);
}

#[test]
fn test_scheduler_builder_rejects_negative_batch_size() {
    let result = SchedulerBuilder::new()
        .batch_size(-2)
        .shared_progress_sink(Arc::new(InMemoryProgressSink::new(1)))
        .build();
    assert_eq!(result.err(), Some(ConfigError::InvalidBatchSize(-2)));
}

#[tokio::test]
async fn test_scheduler_builder_custom_spawner() {
    let scheduler = SchedulerBuilder::new()
        .batch_size(2)
        .breathing_gap_ms(0)
        .spawner(TokioSpawner::current())
        .build()
        .unwrap();
    let summary = scheduler
        .run(0..5u8, |_item: u8| async { Ok::<_, String>(()) })
        .await
        .unwrap();
    assert_eq!(summary.batches, 3);
}
