//! Fuzz target: decode, sort, encode.
//!
//! Every payload that decodes must encode back to a response whose
//! sequences are ascending and match the batch's cardinality.

#![no_main]

use std::time::Duration;

use libfuzzer_sys::fuzz_target;
use sortd_core::{codec, SortResult};

fuzz_target!(|data: &[u8]| {
    let Ok(batch) = codec::decode(data) else {
        return;
    };
    let len = batch.len();
    let sorted: Vec<_> = batch
        .into_sequences()
        .into_iter()
        .map(|mut s| {
            s.sort_unstable();
            s
        })
        .collect();
    assert!(sorted.iter().all(|s| s.windows(2).all(|w| w[0] <= w[1])));

    let result = SortResult::new(sorted, Duration::ZERO);
    let bytes = codec::encode(&result).expect("encoding a sorted batch cannot fail");
    let echoed: SortResult =
        serde_json::from_slice(&bytes).expect("encoded response must parse back");
    assert_eq!(echoed.sorted_arrays.len(), len);
});
