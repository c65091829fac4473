//! Side/confidence decision policy.
//!
//! A single stateless classification: the signed relative angle between
//! the sun's azimuth and the flight bearing determines the cabin side, and
//! its magnitude the confidence band.
//!
//! Global convention: Δ = wrap to (-180, 180] of (sun_azimuth − bearing).
//! Δ > 0 means the sun is clockwise of the flight direction, i.e. on the
//! right.
//!
//! Policy thresholds (reproduced bit-for-bit from the frozen contract):
//! |Δ| < 15° or |Δ| > 150° forces EITHER/LOW (sun effectively ahead or
//! behind); otherwise HIGH for |Δ| ∈ [45°,135°] and MEDIUM for
//! |Δ| ∈ [15°,45°) ∪ (135°,165°]. The 150° EITHER cutoff and the 165°
//! confidence boundary deliberately disagree; the mismatch is part of the
//! contract and must not be reconciled here.

use crate::models::{Confidence, Side};

/// Result of classifying one (bearing, sun azimuth) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub side: Side,
    pub confidence: Confidence,
    pub relative_angle_deg: f64,
    pub note: &'static str,
}

/// Wrap any angle into the canonical (-180, 180] range. Idempotent.
pub fn wrap_angle(deg: f64) -> f64 {
    let mut r = deg % 360.0;
    if r > 180.0 {
        r -= 360.0;
    } else if r <= -180.0 {
        r += 360.0;
    }
    r
}

/// Signed angular offset of the sun from the flight's forward direction.
pub fn relative_angle(bearing_deg: f64, sun_azimuth_deg: f64) -> f64 {
    wrap_angle(sun_azimuth_deg - bearing_deg)
}

/// Apply the side/confidence policy to one bearing + sun azimuth pair.
pub fn classify(bearing_deg: f64, sun_azimuth_deg: f64) -> Decision {
    let delta = relative_angle(bearing_deg, sun_azimuth_deg);
    let abs = delta.abs();

    if abs < 15.0 || abs > 150.0 {
        let note = if abs < 15.0 {
            "Sun roughly ahead of flight path"
        } else {
            "Sun roughly behind flight path"
        };
        return Decision {
            side: Side::Either,
            confidence: Confidence::Low,
            relative_angle_deg: delta,
            note,
        };
    }

    let (side, note) = if delta > 0.0 {
        (Side::Right, "Sun on right side of flight path")
    } else {
        (Side::Left, "Sun on left side of flight path")
    };

    let confidence = if (45.0..=135.0).contains(&abs) {
        Confidence::High
    } else if (15.0..45.0).contains(&abs) || (abs > 135.0 && abs <= 165.0) {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    Decision { side, confidence, relative_angle_deg: delta, note }
}
