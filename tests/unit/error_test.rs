//! Tests for error types

use std::error::Error as _;
use std::io;

use batch_pacer::core::{BatchError, ConfigError};
use thiserror::Error;

#[derive(Debug, Error)]
enum UpstreamError {
    #[error("upstream request failed")]
    Request(#[source] io::Error),
}

#[test]
fn test_invalid_batch_size_error() {
    let err = ConfigError::InvalidBatchSize(0);
    assert_eq!(format!("{}", err), "batch_size must be greater than 0 (got 0)");
}

#[test]
fn test_negative_gap_error() {
    let err = ConfigError::NegativeBreathingGap(-3);
    assert_eq!(format!("{}", err), "breathing_gap_ms must not be negative (got -3)");
}

#[test]
fn test_config_error_is_transparent() {
    let err: BatchError<String> = ConfigError::InvalidBatchSize(-1).into();
    assert!(err.is_config());
    assert_eq!(format!("{}", err), "batch_size must be greater than 0 (got -1)");
}

#[test]
fn test_operation_error_is_unchanged() {
    let err: BatchError<String> = BatchError::Operation("upstream said no".to_string());
    assert!(!err.is_config());
    assert_eq!(format!("{}", err), "upstream said no");
    assert_eq!(err.into_operation_error().as_deref(), Some("upstream said no"));
}

#[test]
fn test_abandoned_error() {
    let err: BatchError<String> = BatchError::Abandoned { batch: 2, position: 21 };
    assert_eq!(
        format!("{}", err),
        "operation for item 21 of batch 2 was abandoned before settling"
    );
    assert!(err.into_operation_error().is_none());
}

#[test]
fn test_operation_error_forwards_source_chain() {
    let inner = UpstreamError::Request(io::Error::other("root cause"));
    let err: BatchError<UpstreamError> = BatchError::Operation(inner);

    assert_eq!(err.to_string(), "upstream request failed");
    let source = err.source().expect("cause is forwarded");
    assert_eq!(source.to_string(), "root cause");

    let report = anyhow::Error::from(err);
    let chain: Vec<String> = report.chain().map(ToString::to_string).collect();
    assert_eq!(chain, vec!["upstream request failed", "root cause"]);
    assert_eq!(format!("{:#}", report), "upstream request failed: root cause");
}
