use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(root))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    message: String,
    version: String,
    endpoints: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses((status = 200, description = "Service banner", body = RootResponse))
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Precis API is running. POST /summarize with JSON {text, max_words}.".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ["GET /", "GET /health", "POST /summarize", "GET /docs"]
            .iter()
            .map(|e| e.to_string())
            .collect(),
    })
}
