//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the engine
//! service layer. The engine is synchronous and cheap (bounded sampling
//! only), so handlers run it inline.

use axum::Json;

use super::dto::{HealthResponse, Recommendation, RecommendRequest};
use super::error::AppError;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /recommend
///
/// Compute a window-seat recommendation for a flight. Returns the frozen
/// recommendation object, or a 400 with `{error_type, message}` for
/// validation failures, degenerate routes, and polar conditions.
pub async fn recommend(Json(request): Json<RecommendRequest>) -> HandlerResult<Recommendation> {
    let recommendation = services::recommend(&request)?;
    Ok(Json(recommendation))
}
