//! Integration test: both strategies produce identical sorted output.
//!
//! Covers the large-batch case (10,000 sequences of length 100) in both
//! fan-out modes, plus property checks against the standard library sort.

use std::{future::Future, num::NonZeroUsize};

use sortd_core::{Sequence, SortBatch, SortResult};
use sortd_executor::{ConcurrentStrategy, FanOut, SequentialStrategy, SortStrategy};

fn block_on<F: Future>(future: F) -> F::Output {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .build()
    {
        Ok(rt) => rt,
        Err(e) => panic!("failed to build runtime: {e}"),
    };
    runtime.block_on(future)
}

async fn run(strategy: &dyn SortStrategy, to_sort: Vec<Sequence>) -> SortResult {
    match strategy.run(SortBatch::new(to_sort)).await {
        Ok(r) => r,
        Err(e) => panic!("{} strategy failed: {e}", strategy.name()),
    }
}

/// Deterministic pseudo-random batch so failures are reproducible.
fn large_batch(sequences: usize, len: usize) -> Vec<Sequence> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    (0..sequences)
        .map(|_| {
            (0..len)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    i64::from_ne_bytes(state.to_ne_bytes()) % 1_000
                })
                .collect()
        })
        .collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn large_batch_matches_sequential_in_both_fan_out_modes() {
    let input = large_batch(10_000, 100);
    let expected = run(&SequentialStrategy::new(), input.clone()).await;
    assert_eq!(expected.sorted_arrays.len(), 10_000);

    let four = NonZeroUsize::new(4).unwrap_or(NonZeroUsize::MIN);
    for mode in [FanOut::bounded(four), FanOut::Unbounded] {
        let strategy = ConcurrentStrategy::new(mode);
        let actual = run(&strategy, input.clone()).await;
        assert_eq!(
            actual.sorted_arrays, expected.sorted_arrays,
            "concurrent ({mode}) must match sequential"
        );
    }
}

#[tokio::test]
async fn strategies_are_usable_as_trait_objects() {
    let strategies: Vec<Box<dyn SortStrategy>> = vec![
        Box::new(SequentialStrategy::new()),
        Box::new(ConcurrentStrategy::default()),
    ];
    for strategy in &strategies {
        let result = run(strategy.as_ref(), vec![vec![3, 1, 2], vec![5, 4]]).await;
        assert_eq!(result.sorted_arrays, vec![vec![1, 2, 3], vec![4, 5]]);
    }
}

proptest::proptest! {
    #[test]
    fn proptest_sequential_matches_std_sort(
        to_sort in proptest::collection::vec(
            proptest::collection::vec(proptest::prelude::any::<i64>(), 0..64usize),
            0..32usize,
        ),
    ) {
        let result = block_on(run(&SequentialStrategy::new(), to_sort.clone()));
        proptest::prop_assert_eq!(result.sorted_arrays.len(), to_sort.len());
        for (sorted, original) in result.sorted_arrays.iter().zip(&to_sort) {
            let mut expected = original.clone();
            expected.sort();
            proptest::prop_assert_eq!(sorted, &expected);
        }
    }

    #[test]
    fn proptest_concurrent_matches_sequential(
        to_sort in proptest::collection::vec(
            proptest::collection::vec(proptest::prelude::any::<i64>(), 0..64usize),
            0..32usize,
        ),
        unbounded in proptest::prelude::any::<bool>(),
    ) {
        let mode = if unbounded {
            FanOut::Unbounded
        } else {
            FanOut::bounded(NonZeroUsize::new(3).unwrap_or(NonZeroUsize::MIN))
        };
        let (sequential, concurrent) = block_on(async {
            let sequential = run(&SequentialStrategy::new(), to_sort.clone()).await;
            let concurrent = run(&ConcurrentStrategy::new(mode), to_sort.clone()).await;
            (sequential, concurrent)
        });
        proptest::prop_assert_eq!(concurrent.sorted_arrays, sequential.sorted_arrays);
    }

    #[test]
    fn proptest_sorting_is_idempotent(
        to_sort in proptest::collection::vec(
            proptest::collection::vec(proptest::prelude::any::<i64>(), 0..64usize),
            0..16usize,
        ),
    ) {
        let strategy = ConcurrentStrategy::new(FanOut::Unbounded);
        let (once, twice) = block_on(async {
            let once = run(&strategy, to_sort).await;
            let twice = run(&strategy, once.sorted_arrays.clone()).await;
            (once, twice)
        });
        proptest::prop_assert_eq!(twice.sorted_arrays, once.sorted_arrays);
    }
}
