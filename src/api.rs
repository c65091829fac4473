//! Public API surface for the recommendation engine.
//!
//! These DTOs mirror the frozen JSON contract consumed by the frontend.
//! Field names must never change — they are the public HTTP contract.

use serde::{Deserialize, Serialize};

pub use crate::models::{Confidence, Interest, Side, Stability};

/// A named location with coordinates and an IANA timezone identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// City or airport name (informational, not validated against a database)
    pub name: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// IANA timezone identifier
    pub tz: String,
}

/// Request body for a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub origin: Location,
    pub destination: Location,
    /// Naive ISO-8601 local datetime, interpreted in the origin timezone
    pub local_datetime: String,
    pub interest: Interest,
}

/// Solar phase times for the departure date, as ISO-8601 timestamps in the
/// origin timezone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseTimes {
    pub civil_dawn: String,
    pub sunrise: String,
    pub sunset: String,
    pub civil_dusk: String,
}

/// Route midpoint with the sun azimuth seen from there at departure.
/// Informational only — it does not participate in the side decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Midpoint {
    pub lat: f64,
    pub lon: f64,
    pub sun_azimuth_deg: f64,
}

/// Success response for a recommendation. Fully determined by the request;
/// constructed once, returned, discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub side: Side,
    pub confidence: Confidence,
    pub bearing_deg: f64,
    pub sun_azimuth_deg: f64,
    pub relative_angle_deg: f64,
    pub golden_hour: bool,
    pub phase_times: PhaseTimes,
    pub midpoint: Midpoint,
    pub stability: Stability,
    pub notes: String,
}

/// Error payload for failed recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// One of GEO_ERROR, POLAR_DAY, UNDEFINED_SUN, VALIDATION
    pub error_type: String,
    pub message: String,
}

impl From<&crate::error::EngineError> for ErrorBody {
    fn from(err: &crate::error::EngineError) -> Self {
        Self {
            error_type: err.kind_str().to_string(),
            message: err.message().to_string(),
        }
    }
}
