//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sortd_core::CodecError;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The request body could not be decoded into a batch.
    #[error("{0}")]
    InvalidRequest(#[source] CodecError),

    /// The sort result could not be serialized.
    #[error("{0}")]
    Encode(#[source] CodecError),

    /// A strategy lost a unit of work.
    #[error("executor error: {0}")]
    Executor(#[from] sortd_executor::ExecutorError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Encode(_) | GatewayError::Executor(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
