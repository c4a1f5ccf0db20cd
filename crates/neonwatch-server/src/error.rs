use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::store::StoreError;

/// Errors surfaced to API clients as `{"error": message}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// Message is generic; the cause is logged, never returned.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Log a store failure and replace it with a generic client message.
    pub fn from_store(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |e| {
            tracing::error!(error = %e, "{context}");
            AppError::Internal(context.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
            Self::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
            Self::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m.clone()),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
