//! Deterministic partitioning of an input sequence into batches.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Batch layout for a run over `item_count` items.
///
/// Boundaries depend only on `(item_count, batch_size)`: batches are
/// contiguous, never overlap, and concatenated in index order they cover
/// `0..item_count` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    item_count: usize,
    batch_size: NonZeroUsize,
}

impl BatchPlan {
    /// Create a plan for `item_count` items split into groups of `batch_size`.
    pub const fn new(item_count: usize, batch_size: NonZeroUsize) -> Self {
        Self {
            item_count,
            batch_size,
        }
    }

    /// Number of items covered by the plan.
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Maximum items per batch.
    pub const fn batch_size(&self) -> usize {
        self.batch_size.get()
    }

    /// `ceil(item_count / batch_size)`.
    pub const fn total_batches(&self) -> usize {
        self.item_count.div_ceil(self.batch_size.get())
    }

    /// Item index range of batch `index`, or `None` past the last batch.
    pub fn bounds(&self, index: usize) -> Option<Range<usize>> {
        if index >= self.total_batches() {
            return None;
        }
        let start = index * self.batch_size.get();
        let end = start.saturating_add(self.batch_size.get()).min(self.item_count);
        Some(start..end)
    }

    /// Iterate all batch ranges in index order.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.total_batches()).filter_map(|index| self.bounds(index))
    }
}
