//! Axum route handlers for the sort endpoints.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::header,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use sortd_core::{codec, BatchId};
use sortd_executor::{ConcurrentStrategy, FanOut, SequentialStrategy, SortStrategy};
use tower_http::trace::TraceLayer;
use tracing::Instrument;

use crate::error::GatewayError;

// ── Route table ──────────────────────────────────────────────────────────────

/// Strategies bound to each route, built once at startup.
#[derive(Clone)]
pub struct RouteTable {
    /// Serves `POST /process-single`.
    pub sequential: Arc<dyn SortStrategy>,
    /// Serves `POST /process-concurrent`.
    pub concurrent: Arc<dyn SortStrategy>,
}

impl RouteTable {
    /// Bind arbitrary strategies to the two routes.
    #[must_use]
    pub fn new(sequential: Arc<dyn SortStrategy>, concurrent: Arc<dyn SortStrategy>) -> Self {
        Self { sequential, concurrent }
    }

    /// The standard table: [`SequentialStrategy`] and a
    /// [`ConcurrentStrategy`] with the given fan-out.
    #[must_use]
    pub fn with_fan_out(fan_out: FanOut) -> Self {
        Self::new(
            Arc::new(SequentialStrategy::new()),
            Arc::new(ConcurrentStrategy::new(fan_out)),
        )
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router for the given route table.
///
/// Request bodies are not size-limited.
pub fn create_router(routes: RouteTable) -> Router {
    Router::new()
        .route("/process-single", post(process_single))
        .route("/process-concurrent", post(process_concurrent))
        .with_state(routes)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `POST /process-single` — sort every sequence one after another.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if the body is not a valid batch.
pub async fn process_single(
    State(routes): State<RouteTable>,
    body: Bytes,
) -> Result<Response, GatewayError> {
    sort_with(routes.sequential.as_ref(), &body).await
}

/// `POST /process-concurrent` — sort every sequence on its own task.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if the body is not a valid batch,
/// or [`GatewayError::Executor`] if a sort task is lost.
pub async fn process_concurrent(
    State(routes): State<RouteTable>,
    body: Bytes,
) -> Result<Response, GatewayError> {
    sort_with(routes.concurrent.as_ref(), &body).await
}

async fn sort_with(strategy: &dyn SortStrategy, body: &[u8]) -> Result<Response, GatewayError> {
    let batch_id = BatchId::random();
    let batch = codec::decode(body).map_err(|e| {
        tracing::debug!(%batch_id, strategy = strategy.name(), error = %e, "rejected request payload");
        GatewayError::InvalidRequest(e)
    })?;

    let span = tracing::info_span!(
        "sort_batch",
        %batch_id,
        strategy = strategy.name(),
        sequences = batch.len(),
    );
    let result = strategy.run(batch).instrument(span).await?;

    let bytes = codec::encode(&result).map_err(GatewayError::Encode)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}
