//! JSON wire codec for the sort endpoints.
//!
//! Both routes share one contract:
//!
//! ```text
//! request : {"to_sort": [[int, ...], ...]}
//! response: {"sorted_arrays": [[int, ...], ...], "time_ns": int}
//! ```
//!
//! The `to_sort` key is matched ASCII-case-insensitively; `null` and a
//! missing key both mean an empty batch. Unknown request fields are ignored.
//! Trailing bytes after the JSON value are rejected.

use crate::{CodecError, SortBatch, SortResult};

/// Parse a request body into a [`SortBatch`].
///
/// # Errors
/// Returns [`CodecError::Decode`] on malformed or truncated JSON, on a
/// `to_sort` that is not an array of integer arrays, and on integers outside
/// the `i64` range.
pub fn decode(raw: &[u8]) -> Result<SortBatch, CodecError> {
    serde_json::from_slice(raw).map_err(CodecError::Decode)
}

/// Serialize a [`SortResult`] as `{"sorted_arrays": ..., "time_ns": ...}`.
///
/// # Errors
/// Returns [`CodecError::Encode`] if serialization fails.
pub fn encode(result: &SortResult) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(result).map_err(CodecError::Encode)
}
