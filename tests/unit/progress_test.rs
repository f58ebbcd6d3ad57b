//! Tests for progress sinks

use std::sync::Arc;

use batch_pacer::core::{
    InMemoryProgressSink, NoopProgressSink, ProgressSink, ProgressTracker, RunProgress,
    TracingProgressSink,
};
use tokio::time::Instant;
use uuid::Uuid;

fn sample(batches_done: usize) -> RunProgress {
    let tracker = ProgressTracker::new(Uuid::new_v4(), 5, Instant::now());
    tracker.record(batches_done, batches_done * 2, Instant::now())
}

#[test]
fn test_in_memory_sink_keeps_order() {
    let sink = InMemoryProgressSink::new(10);
    assert!(sink.is_empty());
    for done in 1..=3 {
        sink.report(&sample(done));
    }
    let indices: Vec<usize> = sink.records().iter().map(|p| p.batch_index).collect();
    assert_eq!(indices, vec![1, 2, 3]);
}

#[test]
fn test_zero_capacity_sink_keeps_nothing() {
    let sink = InMemoryProgressSink::new(0);
    sink.report(&sample(1));
    assert!(sink.is_empty());
}

#[test]
fn test_sinks_usable_as_trait_objects() {
    let sinks: Vec<Arc<dyn ProgressSink>> = vec![
        Arc::new(TracingProgressSink),
        Arc::new(NoopProgressSink),
        Arc::new(InMemoryProgressSink::new(1)),
    ];
    for sink in &sinks {
        sink.report(&sample(2));
    }
}

#[test]
fn test_progress_serializes() {
    let progress = sample(4);
    let json = serde_json::to_value(&progress).unwrap();
    assert_eq!(json["batch_index"], 4);
    assert_eq!(json["batches_left"], 1);
    assert_eq!(json["items_done"], 8);
    let back: RunProgress = serde_json::from_value(json).unwrap();
    assert_eq!(back, progress);
}
