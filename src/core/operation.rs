//! The per-item operation a scheduler drives.

use std::future::{ready, Future, Ready};

/// Asynchronous, fallible work applied to one item.
///
/// The returned future must be `'static` because the scheduler spawns it
/// onto the runtime: if a sibling in the same batch fails, the scheduler
/// stops waiting but the future keeps running to completion instead of
/// being dropped mid-flight.
///
/// Closures returning a future implement this trait automatically:
///
/// ```rust,ignore
/// let op = |id: u64| async move {
///     client.notify(id).await?;
///     Ok::<_, reqwest::Error>(())
/// };
/// scheduler.run(ids, op).await?;
/// ```
///
/// Implementations on named types pick a concrete future, typically
/// `futures::future::BoxFuture<'static, Result<Self::Output, Self::Error>>`.
pub trait ItemOperation<T>: Send + Sync + 'static {
    /// Successful outcome. Discarded by the scheduler.
    type Output: Send + 'static;
    /// Failure surfaced unchanged through [`crate::core::BatchError::Operation`].
    type Error: Send + 'static;
    /// Future driving one item to completion.
    type Future: Future<Output = Result<Self::Output, Self::Error>> + Send + 'static;

    /// Start the operation for `item`.
    fn invoke(&self, item: T) -> Self::Future;
}

impl<T, F, Fut, O, E> ItemOperation<T> for F
where
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<O, E>> + Send + 'static,
    O: Send + 'static,
    E: Send + 'static,
{
    type Output = O;
    type Error = E;
    type Future = Fut;

    fn invoke(&self, item: T) -> Fut {
        self(item)
    }
}

/// Adapter running a synchronous function as an [`ItemOperation`].
///
/// The function runs at invocation time, in input order, and its result is
/// delivered through an already-completed future.
#[derive(Debug, Clone, Copy)]
pub struct SyncOperation<F> {
    func: F,
}

/// Wrap a synchronous `Fn(T) -> Result<O, E>` so it can be scheduled.
pub const fn sync_operation<F>(func: F) -> SyncOperation<F> {
    SyncOperation { func }
}

impl<T, F, O, E> ItemOperation<T> for SyncOperation<F>
where
    F: Fn(T) -> Result<O, E> + Send + Sync + 'static,
    O: Send + 'static,
    E: Send + 'static,
{
    type Output = O;
    type Error = E;
    type Future = Ready<Result<O, E>>;

    fn invoke(&self, item: T) -> Self::Future {
        ready((self.func)(item))
    }
}
