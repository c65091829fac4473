//! Recommendation stability across departure-time drift.
//!
//! Re-runs the decision policy at fixed offsets across a ±3-hour window
//! around the requested departure and summarizes how volatile the side
//! recommendation is. A traveler facing a boarding delay wants to know
//! whether the recommendation survives it.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Confidence, GeoPoint, Stability};
use crate::services::decision::{classify, Decision};
use crate::services::solar::solar_position;

/// Exploration window half-width in minutes.
pub const WINDOW_MINUTES: i64 = 180;

/// Sampling step. 30-minute steps over ±3 h give 13 deterministic samples.
pub const STEP_MINUTES: i64 = 30;

/// The fixed sample offsets, in minutes relative to departure.
pub fn sample_offsets() -> impl Iterator<Item = i64> {
    (-WINDOW_MINUTES..=WINDOW_MINUTES).step_by(STEP_MINUTES as usize)
}

/// Re-evaluate the decision across the window. The sun is observed from
/// the origin; the bearing is fixed for the route.
pub fn sample_window(
    origin: &GeoPoint,
    bearing_deg: f64,
    departure_utc: DateTime<Utc>,
) -> Vec<Decision> {
    sample_offsets()
        .map(|offset| {
            let t = departure_utc + Duration::minutes(offset);
            let sun = solar_position(origin.latitude, origin.longitude, t);
            classify(bearing_deg, sun.azimuth_deg)
        })
        .collect()
}

/// Summarize a sampled window:
/// HIGH when the side never changes, MEDIUM when it changes but confidence
/// stays non-LOW throughout, LOW otherwise.
pub fn classify_window(samples: &[Decision]) -> Stability {
    let side_stable = samples.windows(2).all(|w| w[0].side == w[1].side);
    if side_stable {
        return Stability::High;
    }
    if samples.iter().all(|d| d.confidence != Confidence::Low) {
        return Stability::Medium;
    }
    Stability::Low
}

/// Assess stability for one request.
pub fn assess(origin: &GeoPoint, bearing_deg: f64, departure_utc: DateTime<Utc>) -> Stability {
    classify_window(&sample_window(origin, bearing_deg, departure_utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Side;
    use chrono::TimeZone;

    fn decision(side: Side, confidence: Confidence) -> Decision {
        Decision { side, confidence, relative_angle_deg: 0.0, note: "" }
    }

    #[test]
    fn test_thirteen_samples() {
        assert_eq!(sample_offsets().count(), 13);
        assert_eq!(sample_offsets().next(), Some(-180));
        assert_eq!(sample_offsets().last(), Some(180));
    }

    #[test]
    fn test_unchanged_side_is_high() {
        let samples = vec![
            decision(Side::Left, Confidence::High),
            decision(Side::Left, Confidence::Low),
            decision(Side::Left, Confidence::Medium),
        ];
        assert_eq!(classify_window(&samples), Stability::High);
    }

    #[test]
    fn test_side_flip_with_solid_confidence_is_medium() {
        let samples = vec![
            decision(Side::Left, Confidence::High),
            decision(Side::Right, Confidence::Medium),
            decision(Side::Right, Confidence::High),
        ];
        assert_eq!(classify_window(&samples), Stability::Medium);
    }

    #[test]
    fn test_side_flip_with_low_confidence_is_low() {
        let samples = vec![
            decision(Side::Left, Confidence::High),
            decision(Side::Either, Confidence::Low),
            decision(Side::Right, Confidence::High),
        ];
        assert_eq!(classify_window(&samples), Stability::Low);
    }

    #[test]
    fn test_assess_is_deterministic() {
        let origin = GeoPoint::new(22.5726, 88.3639, "Asia/Kolkata").unwrap();
        let dep = Utc.with_ymd_and_hms(2025, 9, 1, 0, 30, 0).unwrap();
        assert_eq!(assess(&origin, 140.0, dep), assess(&origin, 140.0, dep));
    }

    #[test]
    fn test_assess_consistent_with_samples() {
        // If every sample in the window agrees on the side, the assessment
        // must be HIGH; if any sample differs, it must not be HIGH.
        let origin = GeoPoint::new(22.5726, 88.3639, "Asia/Kolkata").unwrap();
        let dep = Utc.with_ymd_and_hms(2025, 9, 1, 0, 30, 0).unwrap();
        for bearing in [0.0, 45.0, 140.0, 220.0, 310.0] {
            let samples = sample_window(&origin, bearing, dep);
            let all_same = samples.windows(2).all(|w| w[0].side == w[1].side);
            let verdict = assess(&origin, bearing, dep);
            if all_same {
                assert_eq!(verdict, Stability::High, "bearing {}", bearing);
            } else {
                assert_ne!(verdict, Stability::High, "bearing {}", bearing);
            }
        }
    }
}
