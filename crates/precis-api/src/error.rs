use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use precis_pipeline::PipelineError;
use serde_json::json;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("summarization timed out")]
    Timeout,
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::InvalidInput => ApiError::BadRequest(err.to_string()),
            PipelineError::PayloadTooLarge { .. } => ApiError::PayloadTooLarge(err.to_string()),
            PipelineError::Cancelled => ApiError::Timeout,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() })),
            ApiError::PayloadTooLarge(_) => {
                (StatusCode::PAYLOAD_TOO_LARGE, json!({ "error": self.to_string() }))
            }
            ApiError::Timeout => {
                tracing::warn!("Summarization request timed out");
                (StatusCode::SERVICE_UNAVAILABLE, json!({ "error": self.to_string() }))
            }
            ApiError::Internal(_) => {
                // Full detail stays in the server log; the client only gets an id.
                let error_id = Uuid::new_v4();
                tracing::error!(%error_id, error = %self, "Unhandled error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal server error", "error_id": error_id }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_pipeline_errors_map_to_status() {
        let cases = [
            (PipelineError::InvalidInput, StatusCode::BAD_REQUEST),
            (
                PipelineError::PayloadTooLarge { chars: 11, max: 10 },
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (PipelineError::Cancelled, StatusCode::SERVICE_UNAVAILABLE),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response = ApiError::Internal("panicked at src/secret.rs:42".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "internal server error");
        assert!(body["error_id"].as_str().is_some_and(|id| Uuid::parse_str(id).is_ok()));
        assert!(!body.to_string().contains("secret.rs"));
    }

    #[tokio::test]
    async fn test_bad_request_body() {
        let body = body_json(ApiError::from(PipelineError::InvalidInput).into_response()).await;
        assert_eq!(body["error"], "bad request: no text provided");
    }
}
