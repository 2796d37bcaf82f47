//! Concurrent strategy: one unit of work per sequence, joined at a barrier.
//!
//! Each unit takes exclusive ownership of its sequence, sorts it, and hands
//! it back through its `JoinHandle`. Handles are kept in input order, so
//! output position `i` always holds the result of unit `i` no matter which
//! unit finishes first. The request does not proceed until every handle has
//! been awaited.
//!
//! Bounded units run on tokio's blocking pool, so long sorts never occupy the
//! runtime workers that drive the listener. Unbounded units are plain runtime
//! tasks; the blocking pool's thread cap would otherwise bound them.

use std::sync::Arc;

use async_trait::async_trait;
use sortd_core::Sequence;
use tokio::{sync::Semaphore, task::JoinHandle};

use crate::{ExecutorError, FanOut, SortStrategy};

/// Sorts every sequence of a batch as its own unit of work.
///
/// With [`FanOut::Bounded`] the strategy owns a semaphore shared by every
/// request it serves; a permit is taken before each unit is spawned and
/// released when the unit finishes.
#[derive(Debug, Clone)]
pub struct ConcurrentStrategy {
    pool: Option<Arc<Semaphore>>,
}

impl ConcurrentStrategy {
    /// Create a strategy with the given fan-out policy.
    #[must_use]
    pub fn new(fan_out: FanOut) -> Self {
        let pool = fan_out
            .workers()
            .map(|workers| Arc::new(Semaphore::new(workers.get())));
        Self { pool }
    }
}

impl Default for ConcurrentStrategy {
    fn default() -> Self {
        Self::new(FanOut::default())
    }
}

#[async_trait]
impl SortStrategy for ConcurrentStrategy {
    fn name(&self) -> &'static str {
        "concurrent"
    }

    async fn sort_all(&self, sequences: Vec<Sequence>) -> Result<Vec<Sequence>, ExecutorError> {
        fan_out(sequences, self.pool.as_ref(), |sequence| sequence.sort_unstable()).await
    }
}

/// Spawn `work` once per sequence and wait for all of them.
///
/// With a pool, each unit holds a permit and runs on the blocking pool.
/// Without one, each unit is a runtime task. On the first lost unit the
/// remaining handles are aborted and the loss is reported with the
/// sequence's input index.
async fn fan_out<F>(
    sequences: Vec<Sequence>,
    pool: Option<&Arc<Semaphore>>,
    work: F,
) -> Result<Vec<Sequence>, ExecutorError>
where
    F: Fn(&mut Sequence) + Copy + Send + 'static,
{
    let mut handles: Vec<JoinHandle<Sequence>> = Vec::with_capacity(sequences.len());

    for mut sequence in sequences {
        let handle = match pool {
            Some(pool) => {
                let permit = Arc::clone(pool)
                    .acquire_owned()
                    .await
                    .map_err(|_| ExecutorError::PoolClosed)?;
                tokio::task::spawn_blocking(move || {
                    let _permit = permit;
                    work(&mut sequence);
                    sequence
                })
            }
            None => tokio::spawn(async move {
                work(&mut sequence);
                sequence
            }),
        };
        handles.push(handle);
    }

    let mut sorted = Vec::with_capacity(handles.len());
    let mut pending = handles.into_iter().enumerate();
    while let Some((index, handle)) = pending.next() {
        match handle.await {
            Ok(sequence) => sorted.push(sequence),
            Err(e) => {
                for (_, rest) in pending.by_ref() {
                    rest.abort();
                }
                tracing::warn!(index, error = %e, "sort worker lost");
                return Err(if e.is_panic() {
                    ExecutorError::WorkerPanicked { index }
                } else {
                    ExecutorError::WorkerCancelled { index }
                });
            }
        }
    }

    Ok(sorted)
}
