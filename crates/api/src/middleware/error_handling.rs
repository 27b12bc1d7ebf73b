//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint fails the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use carnet_core::errors::CarnetError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps a `CarnetError` and implements `IntoResponse`, so
/// handlers can return `Result<_, AppError>` and use `?` on domain and
/// repository results alike.
#[derive(Debug)]
pub struct AppError(pub CarnetError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            CarnetError::NotFound(_) => StatusCode::NOT_FOUND,
            CarnetError::Validation(_) => StatusCode::BAD_REQUEST,
            CarnetError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            CarnetError::Conflict(_) => StatusCode::CONFLICT,
            CarnetError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Allows `?` on functions returning `CarnetResult<T>` inside handlers
impl From<CarnetError> for AppError {
    fn from(err: CarnetError) -> Self {
        AppError(err)
    }
}

/// Repository failures surface as `CarnetError::Database`
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(CarnetError::Database(err))
    }
}

/// Converts a `CarnetError` straight into a response
pub fn map_error(err: CarnetError) -> Response {
    AppError(err).into_response()
}
