//! Runtime adapters used to spawn item operations.

pub mod tokio_spawner;

pub use tokio_spawner::{CurrentTokioSpawner, TokioSpawner};
