pub mod health;
pub mod root;
pub mod summarize;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::doc::ApiDoc;
use crate::state::AppState;

/// Worst case for one character inside a JSON string: a surrogate pair
/// written as two `\uXXXX` escapes.
const MAX_JSON_BYTES_PER_CHAR: usize = 12;
/// Room for the JSON envelope around the text itself.
const JSON_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Large enough for a maximal text with every character escaped, so the
    // only 413 a client sees is the pipeline's character-count check.
    let body_limit = state
        .limits
        .max_input_chars
        .saturating_mul(MAX_JSON_BYTES_PER_CHAR)
        .saturating_add(JSON_OVERHEAD_BYTES);

    Router::new()
        .merge(root::routes())
        .merge(health::routes())
        .merge(summarize::routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
