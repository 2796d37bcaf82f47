//! Fan-out configuration for the concurrent strategy.

use std::{fmt, num::NonZeroUsize};

/// How many sort tasks the concurrent strategy may run at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FanOut {
    /// At most `workers` sequences are sorted concurrently, across all
    /// in-flight requests. Dispatch waits for a free worker, and that wait
    /// counts toward the request's `time_ns`, so under concurrent load the
    /// figure includes time spent behind other requests' sorts. Units run
    /// on tokio's blocking pool.
    Bounded {
        /// Worker pool size.
        workers: NonZeroUsize,
    },
    /// One runtime task per sequence with no cap. A batch of N sequences
    /// spawns N tasks immediately, so large batches can exhaust memory, and
    /// long sorts occupy the runtime's worker threads.
    Unbounded,
}

impl FanOut {
    /// A bounded pool of `workers` tasks.
    #[must_use]
    pub fn bounded(workers: NonZeroUsize) -> Self {
        FanOut::Bounded { workers }
    }

    /// A bounded pool sized to the machine's available parallelism, or a
    /// single worker if that cannot be determined.
    #[must_use]
    pub fn available_parallelism() -> Self {
        let workers = std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
        FanOut::Bounded { workers }
    }

    /// Worker cap, or `None` when unbounded.
    #[must_use]
    pub fn workers(&self) -> Option<NonZeroUsize> {
        match self {
            FanOut::Bounded { workers } => Some(*workers),
            FanOut::Unbounded => None,
        }
    }
}

impl Default for FanOut {
    fn default() -> Self {
        Self::available_parallelism()
    }
}

impl fmt::Display for FanOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FanOut::Bounded { workers } => write!(f, "bounded({workers})"),
            FanOut::Unbounded => f.write_str("unbounded"),
        }
    }
}
