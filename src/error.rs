//! Engine error taxonomy.
//!
//! Four terminal error kinds, matching the frozen wire contract. All are
//! deterministic for a given request: retrying the same input yields the
//! same error, so retries are never appropriate for these conditions.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while computing a recommendation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed input: out-of-range coordinates, unparsable datetime,
    /// unresolvable timezone, unknown interest value.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Geodesy degeneracy: coincident or antipodal endpoints make the
    /// bearing and route interpolation undefined.
    #[error("Geodesy error: {0}")]
    Geo(String),

    /// The sun never crosses the horizon on the relevant local date
    /// (polar day or polar night).
    #[error("Polar day/night: {0}")]
    PolarDay(String),

    /// Sun position or twilight threshold undefined for the request.
    #[error("Undefined sun: {0}")]
    UndefinedSun(String),
}

impl EngineError {
    /// Frozen wire tag for the error payload's `error_type` field.
    pub fn kind_str(&self) -> &'static str {
        match self {
            EngineError::Validation(_) => "VALIDATION",
            EngineError::Geo(_) => "GEO_ERROR",
            EngineError::PolarDay(_) => "POLAR_DAY",
            EngineError::UndefinedSun(_) => "UNDEFINED_SUN",
        }
    }

    /// Human-readable message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            EngineError::Validation(m)
            | EngineError::Geo(m)
            | EngineError::PolarDay(m)
            | EngineError::UndefinedSun(m) => m,
        }
    }
}
