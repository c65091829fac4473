//! Data Transfer Objects for the HTTP API.
//!
//! The recommendation contract types live in [`crate::api`] and are
//! re-exported here; only HTTP-specific bodies are defined in this module.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    ErrorBody, Location, Midpoint, PhaseTimes, Recommendation, RecommendRequest,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}
