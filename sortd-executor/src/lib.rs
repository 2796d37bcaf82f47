//! Sort execution strategies for the sortd batch sort service.
//!
//! A [`SortStrategy`] takes a [`sortd_core::SortBatch`] and returns a
//! [`sortd_core::SortResult`]. Two implementations exist:
//! [`SequentialStrategy`] sorts one sequence after another, and
//! [`ConcurrentStrategy`] dispatches one task per sequence and waits for all
//! of them.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod concurrent;
pub mod config;
pub mod error;
pub mod sequential;
pub mod strategy;

pub use concurrent::ConcurrentStrategy;
pub use config::FanOut;
pub use error::ExecutorError;
pub use sequential::SequentialStrategy;
pub use strategy::SortStrategy;
