//! API Error Types
//!
//! Error types for the HTTP layer and their conversion into the uniform
//! failure envelope `{ success: false, error, message }`. Every failure
//! class the endpoint can hit (store, validation, duplicate id) is
//! reported with an internal-error status; the envelope's `error` field
//! carries the operation label and `message` the underlying detail.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::dto::ErrorEnvelope;
use crate::store::StoreError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Listing shortcuts failed at the store layer
    #[error("Failed to fetch shortcuts")]
    Fetch(#[source] StoreError),

    /// Creating a shortcut failed (validation, duplicate id, store)
    #[error("Failed to create shortcut")]
    Create(#[source] StoreError),

    /// Server-side failure outside a specific operation
    #[error("Internal error")]
    Internal(String),

    /// IO error (listener bind, etc.)
    #[error("IO error")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Detail string for the envelope's `message` field
    fn detail(&self) -> String {
        match self {
            ApiError::Fetch(e) | ApiError::Create(e) => e.to_string(),
            ApiError::Internal(msg) => msg.clone(),
            ApiError::Io(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error = %self,
            detail = %self.detail(),
            "API error occurred"
        );

        let body = ErrorEnvelope {
            success: false,
            error: self.to_string(),
            message: self.detail(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
