use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use precis_common::Summary;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/summarize", post(summarize))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SummarizeRequest {
    text: String,
    /// Requested summary length in words. Missing or zero means the default;
    /// other values are clamped to the configured range.
    #[serde(default)]
    max_words: Option<i64>,
}

#[utoipa::path(
    post,
    path = "/summarize",
    tag = "Summarize",
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Extractive summary", body = Summary),
        (status = 400, description = "No text provided"),
        (status = 413, description = "Text exceeds the configured character limit"),
        (status = 503, description = "Summarization did not finish within the request timeout"),
        (status = 500, description = "Unexpected failure, reported with an error id"),
    )
)]
pub async fn summarize(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<Summary>, ApiError> {
    let cancel = Arc::new(AtomicBool::new(false));

    let pipeline = state.pipeline.clone();
    let task_cancel = cancel.clone();
    let task = tokio::task::spawn_blocking(move || {
        pipeline.summarize_cancellable(&req.text, req.max_words, &task_cancel)
    });

    match tokio::time::timeout(state.request_timeout, task).await {
        Ok(Ok(result)) => Ok(Json(result?)),
        Ok(Err(join_err)) => Err(ApiError::Internal(format!(
            "summarization task failed: {join_err}"
        ))),
        Err(_) => {
            // The blocking task keeps running until its next chunk boundary.
            cancel.store(true, Ordering::Relaxed);
            Err(ApiError::Timeout)
        }
    }
}
