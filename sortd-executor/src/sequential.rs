//! Sequential strategy: sorts sequences one after another on the calling
//! task.

use async_trait::async_trait;
use sortd_core::Sequence;

use crate::{ExecutorError, SortStrategy};

/// Sorts each sequence in input order without spawning any work.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialStrategy;

impl SequentialStrategy {
    /// Create the strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SortStrategy for SequentialStrategy {
    fn name(&self) -> &'static str {
        "sequential"
    }

    async fn sort_all(&self, mut sequences: Vec<Sequence>) -> Result<Vec<Sequence>, ExecutorError> {
        for sequence in &mut sequences {
            sequence.sort_unstable();
        }
        Ok(sequences)
    }
}
