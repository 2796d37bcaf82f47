//! Sort strategy abstraction.
//!
//! Lets the gateway bind each route to an execution policy without knowing
//! how the policy schedules its work.

use std::time::Instant;

use async_trait::async_trait;
use sortd_core::{Sequence, SortBatch, SortResult};

use crate::ExecutorError;

/// An execution policy that sorts every sequence of a batch.
///
/// Implementations must be `Send + Sync` so one instance can serve all
/// requests.
///
/// # Cancel Safety
/// Dropping the future returned by [`SortStrategy::run`] drops the batch.
/// Tasks already dispatched by a concurrent implementation may keep running
/// until their sequence is sorted.
#[async_trait]
pub trait SortStrategy: Send + Sync {
    /// Short name used in logs, e.g. `"sequential"`.
    fn name(&self) -> &'static str;

    /// Sort every sequence ascending. The returned vector has the same length
    /// as `sequences` and element `i` is the sorted form of input `i`.
    ///
    /// # Errors
    /// Returns an [`ExecutorError`] if a unit of work is lost before it
    /// finishes.
    async fn sort_all(&self, sequences: Vec<Sequence>) -> Result<Vec<Sequence>, ExecutorError>;

    /// Sort a batch and measure the wall-clock time spent in
    /// [`SortStrategy::sort_all`].
    ///
    /// # Errors
    /// Propagates errors from [`SortStrategy::sort_all`].
    async fn run(&self, batch: SortBatch) -> Result<SortResult, ExecutorError> {
        let sequences = batch.len();
        let start = Instant::now();
        let sorted = self.sort_all(batch.into_sequences()).await?;
        let result = SortResult::new(sorted, start.elapsed());

        tracing::debug!(
            strategy = self.name(),
            sequences,
            elapsed_ns = result.time_ns,
            "batch sorted"
        );

        Ok(result)
    }
}
