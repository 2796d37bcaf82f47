//! Error types for the executor crate.

/// Errors that can occur while running a sort strategy.
///
/// Sorting itself cannot fail; every variant describes a lost unit of work.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExecutorError {
    /// The task sorting the sequence at `index` panicked.
    #[error("sort worker for sequence {index} panicked")]
    WorkerPanicked { index: usize },

    /// The task sorting the sequence at `index` was cancelled before it
    /// finished.
    #[error("sort worker for sequence {index} was cancelled")]
    WorkerCancelled { index: usize },

    /// The worker pool's semaphore was closed while dispatching.
    #[error("worker pool closed during dispatch")]
    PoolClosed,
}
