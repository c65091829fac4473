//! HTTP error handling and response types.
//!
//! Engine errors map onto HTTP 400 with the frozen `{error_type, message}`
//! payload. All four engine error kinds are deterministic rejections of the
//! request, so none of them warrant a 5xx.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::ErrorBody;
use crate::error::EngineError;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub struct AppError(pub EngineError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody::from(&self.0);
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        AppError(err)
    }
}
