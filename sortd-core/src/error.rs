/// Errors produced by the `sortd-core` codec.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodecError {
    /// The request body is not a well-formed `{"to_sort": [[int, ...], ...]}`
    /// payload.
    #[error("invalid request payload: {0}")]
    Decode(#[source] serde_json::Error),

    /// A result could not be serialized.
    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}
