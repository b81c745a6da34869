use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Everything a handler can fail with. Each variant maps onto one JSON
/// envelope shape; none of them escape as a bare error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Search query is required")]
    MissingQuery,
    #[error("Vehicle with VRM {0} not found")]
    VehicleNotFound(String),
    #[error("No vehicles found matching \"{0}\"")]
    NoMatches(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingQuery => StatusCode::BAD_REQUEST,
            ApiError::VehicleNotFound(_) | ApiError::NoMatches(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::MissingQuery | ApiError::VehicleNotFound(_) => json!({
                "success": false,
                "message": self.to_string(),
            }),
            ApiError::NoMatches(_) => json!({
                "success": false,
                "message": self.to_string(),
                "data": [],
            }),
            ApiError::Store(err) => {
                tracing::error!(error = %err, "vehicle store unavailable");
                json!({
                    "success": false,
                    "message": "Server error",
                    "error": err.to_string(),
                })
            }
        };
        (status, Json(body)).into_response()
    }
}
