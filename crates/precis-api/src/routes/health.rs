use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    /// RFC 3339, UTC.
    timestamp: String,
    tokenizer_status: String,
    limits: HealthLimits,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthLimits {
    max_input_chars: usize,
    chunk_target_chars: usize,
    max_sentence_count: usize,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service health and limits", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        tokenizer_status: state.tokenizer_status.to_string(),
        limits: HealthLimits {
            max_input_chars: state.limits.max_input_chars,
            chunk_target_chars: state.limits.chunk_char_target,
            max_sentence_count: state.limits.max_sentence_count,
        },
    })
}
