//! Error types for the storefront server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

// == Shop Error Enum ==
/// Unified error type for the storefront server.
#[derive(Error, Debug)]
pub enum ShopError {
    /// Missing catalog, product, image or route
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing required field or malformed input
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Wrong HTTP method for the route
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Failure in the external key-value store
    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ShopError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ShopError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ShopError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            // Store and internal failures are logged server-side; the client
            // only ever sees the generic message.
            ShopError::Store(cause) => {
                error!("store error: {cause:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ShopError::Internal(msg) => {
                error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the storefront server.
pub type Result<T> = std::result::Result<T, ShopError>;
