//! Tests for tokio spawner utilities

use batch_pacer::core::Spawn;
use batch_pacer::runtime::tokio_spawner::{CurrentTokioSpawner, TokioSpawner};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tokio_spawner_spawn() {
    let spawner = TokioSpawner::new(tokio::runtime::Handle::current());

    let (tx, rx) = tokio::sync::oneshot::channel();
    spawner.spawn(async move {
        tx.send(123).unwrap();
    });

    let result = rx.await.expect("oneshot result");
    assert_eq!(result, 123);
}

#[tokio::test]
async fn test_current_tokio_spawner_spawn() {
    let (tx, rx) = tokio::sync::oneshot::channel();
    CurrentTokioSpawner.spawn(async move {
        tx.send("done").unwrap();
    });
    assert_eq!(rx.await.expect("oneshot result"), "done");
}

#[test]
fn test_try_current_outside_runtime() {
    assert!(TokioSpawner::try_current().is_none());
}

#[test]
fn test_owned_runtime_spawner() {
    let spawner = TokioSpawner::with_worker_threads(1).expect("runtime");
    let (tx, rx) = std::sync::mpsc::channel();
    spawner.spawn(async move {
        tx.send(7).unwrap();
    });
    assert_eq!(rx.recv().unwrap(), 7);
}
