//! Validated domain types for the recommendation engine.
//!
//! Wire DTOs live in [`crate::api`]; the types here are what the engine
//! actually computes with. A [`GeoPoint`] or [`FlightRequest`] can only be
//! obtained through validation, so the services may assume coordinates are
//! in range and timezones resolve.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// A geographic point with an IANA timezone. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub tz: Tz,
}

impl GeoPoint {
    /// Validate coordinate ranges and resolve the timezone identifier.
    pub fn new(latitude: f64, longitude: f64, tz: &str) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(EngineError::Validation(format!(
                "latitude {} out of range [-90, 90]",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(EngineError::Validation(format!(
                "longitude {} out of range [-180, 180]",
                longitude
            )));
        }
        let tz = Tz::from_str(tz)
            .map_err(|_| EngineError::Validation(format!("unknown timezone identifier '{}'", tz)))?;
        Ok(Self { latitude, longitude, tz })
    }
}

/// What the traveler wants to watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Sunrise,
    Sunset,
}

/// Recommended cabin side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Left,
    Right,
    Either,
}

/// Confidence band for the side recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// How robust the recommendation is to departure-time drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stability {
    High,
    Medium,
    Low,
}

/// A validated recommendation request.
#[derive(Debug, Clone)]
pub struct FlightRequest {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    /// Naive local departure time, interpreted in the origin timezone.
    pub local_departure: NaiveDateTime,
    pub interest: Interest,
}

impl FlightRequest {
    /// Resolve the naive local departure to a UTC instant in the origin
    /// timezone. Nonexistent local times (spring-forward gaps) are a
    /// validation error; ambiguous ones (fall-back overlaps) resolve to
    /// the earlier instant.
    pub fn departure_utc(&self) -> Result<DateTime<Utc>> {
        resolve_local(self.local_departure, self.origin.tz)
    }
}

/// Map a naive local timestamp into UTC for the given timezone.
pub fn resolve_local(local: NaiveDateTime, tz: Tz) -> Result<DateTime<Utc>> {
    match tz.from_local_datetime(&local) {
        chrono::LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        chrono::LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        chrono::LocalResult::None => Err(EngineError::Validation(format!(
            "local time {} does not exist in timezone {}",
            local, tz
        ))),
    }
}

/// Sun altitude/azimuth at a point and instant. Ephemeral — recomputed per
/// query, never cached across requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarSnapshot {
    pub instant: DateTime<Utc>,
    pub altitude_deg: f64,
    pub azimuth_deg: f64,
}

/// Resolved solar phase instants for one civil day, in the point's local
/// timezone. Polar conditions never reach this type — they are surfaced as
/// errors before construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseInstants {
    pub civil_dawn: DateTime<Tz>,
    pub sunrise: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
    pub civil_dusk: DateTime<Tz>,
}
