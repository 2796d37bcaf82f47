//! Core types for the sortd batch sort service.
//!
//! Defines the request and response data model ([`SortBatch`], [`SortResult`]),
//! the per-request [`BatchId`], and the JSON wire codec shared by every
//! endpoint.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod batch;
pub mod codec;
pub mod error;
pub mod id;

pub use batch::{Sequence, SortBatch, SortResult};
pub use error::CodecError;
pub use id::BatchId;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn concrete_request_decodes_and_response_encodes() {
        let batch = match codec::decode(br#"{"to_sort": [[3,1,2],[5,4]]}"#) {
            Ok(b) => b,
            Err(e) => panic!("decode failed: {e}"),
        };
        assert_eq!(batch.len(), 2);

        let sorted = batch
            .into_sequences()
            .into_iter()
            .map(|mut s| {
                s.sort_unstable();
                s
            })
            .collect();
        let result = SortResult::new(sorted, Duration::from_nanos(17));
        let bytes = match codec::encode(&result) {
            Ok(b) => b,
            Err(e) => panic!("encode failed: {e}"),
        };
        assert_eq!(
            bytes,
            br#"{"sorted_arrays":[[1,2,3],[4,5]],"time_ns":17}"#.to_vec(),
            "field order and naming must be stable"
        );
    }

    #[test]
    fn batch_id_is_unique_per_request() {
        assert_ne!(BatchId::random(), BatchId::random());
    }

    #[test]
    fn codec_error_display_includes_parser_detail() {
        let err = match codec::decode(b"{\"to_sort\": [[1,") {
            Ok(b) => panic!("truncated input must not decode, got {b:?}"),
            Err(e) => e,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("invalid request payload"), "got {msg}");
        assert!(msg.contains("EOF"), "detail must come from the JSON parser, got {msg}");
    }
}
