//! End-to-end tests for the recommendation engine.
//!
//! These run the full orchestrator pipeline on realistic flight requests
//! and on the degenerate inputs the error taxonomy promises to reject.

use chrono::DateTime;

use scenic_seat::api::{Location, RecommendRequest};
use scenic_seat::models::{Confidence, Interest, Side};
use scenic_seat::services::decision;
use scenic_seat::services::recommend;

fn location(name: &str, lat: f64, lon: f64, tz: &str) -> Location {
    Location { name: name.into(), lat, lon, tz: tz.into() }
}

fn kolkata_singapore(local_datetime: &str) -> RecommendRequest {
    RecommendRequest {
        origin: location("Kolkata", 22.5726, 88.3639, "Asia/Kolkata"),
        destination: location("Singapore", 1.3644, 103.9915, "Asia/Singapore"),
        local_datetime: local_datetime.into(),
        interest: Interest::Sunrise,
    }
}

#[test]
fn test_kolkata_singapore_sunrise_flight() {
    let rec = recommend(&kolkata_singapore("2025-09-01T06:00:00")).unwrap();

    // CCU -> SIN heads roughly southeast.
    assert!(
        (125.0..150.0).contains(&rec.bearing_deg),
        "bearing {}",
        rec.bearing_deg
    );

    // Relative angle must be the wrapped difference of the reported pair.
    let expected = decision::relative_angle(rec.bearing_deg, rec.sun_azimuth_deg);
    assert!(
        (expected - rec.relative_angle_deg).abs() < 0.2,
        "Δ {} vs wrapped {}",
        rec.relative_angle_deg,
        expected
    );

    // Side and confidence must agree with the policy applied to the
    // reported angle.
    let check = decision::classify(rec.bearing_deg, rec.sun_azimuth_deg);
    assert_eq!(rec.side, check.side);
    assert_eq!(rec.confidence, check.confidence);

    assert!(rec.notes.contains("great-circle assumption"));
}

#[test]
fn test_kolkata_phase_times_ordered() {
    let rec = recommend(&kolkata_singapore("2025-09-01T06:00:00")).unwrap();
    let dawn = DateTime::parse_from_rfc3339(&rec.phase_times.civil_dawn).unwrap();
    let sunrise = DateTime::parse_from_rfc3339(&rec.phase_times.sunrise).unwrap();
    let sunset = DateTime::parse_from_rfc3339(&rec.phase_times.sunset).unwrap();
    let dusk = DateTime::parse_from_rfc3339(&rec.phase_times.civil_dusk).unwrap();
    assert!(dawn < sunrise);
    assert!(sunrise < sunset);
    assert!(sunset < dusk);
}

#[test]
fn test_golden_hour_flag_near_sunrise() {
    // Departure at 05:30 local is within minutes of Kolkata's September
    // sunrise; midday is near neither event.
    let near = recommend(&kolkata_singapore("2025-09-01T05:30:00")).unwrap();
    assert!(near.golden_hour);

    let midday = recommend(&kolkata_singapore("2025-09-01T12:00:00")).unwrap();
    assert!(!midday.golden_hour);
}

#[test]
fn test_midpoint_lies_between_endpoints() {
    let rec = recommend(&kolkata_singapore("2025-09-01T06:00:00")).unwrap();
    assert!(rec.midpoint.lat < 22.6 && rec.midpoint.lat > 1.3);
    assert!(rec.midpoint.lon > 88.3 && rec.midpoint.lon < 104.0);
    assert!((0.0..360.0).contains(&rec.midpoint.sun_azimuth_deg));
}

#[test]
fn test_recommendation_deterministic() {
    let a = recommend(&kolkata_singapore("2025-09-01T06:00:00")).unwrap();
    let b = recommend(&kolkata_singapore("2025-09-01T06:00:00")).unwrap();
    assert_eq!(
        serde_json::to_value(&a).unwrap(),
        serde_json::to_value(&b).unwrap()
    );
}

#[test]
fn test_northbound_midday_sun_behind_or_ahead() {
    // Due-north route at local noon from a mid-latitude origin: the sun
    // sits near the meridian, well south of the zenith, so the relative
    // angle lands near 180° and the policy yields EITHER.
    let req = RecommendRequest {
        origin: location("A", 45.0, 100.0, "Asia/Bangkok"),
        destination: location("B", 60.0, 100.0, "Asia/Bangkok"),
        local_datetime: "2025-09-01T12:00:00".into(),
        interest: Interest::Sunset,
    };
    let rec = recommend(&req).unwrap();
    assert_eq!(rec.side, Side::Either);
    assert_eq!(rec.confidence, Confidence::Low);
}

#[test]
fn test_coincident_endpoints_rejected() {
    let mut req = kolkata_singapore("2025-09-01T06:00:00");
    req.destination = req.origin.clone();
    let err = recommend(&req).unwrap_err();
    assert_eq!(err.kind_str(), "GEO_ERROR");
}

#[test]
fn test_antipodal_route_rejected() {
    let req = RecommendRequest {
        origin: location("A", 0.0, 0.0, "UTC"),
        destination: location("B", 0.0, 180.0, "Pacific/Tarawa"),
        local_datetime: "2025-09-01T06:00:00".into(),
        interest: Interest::Sunrise,
    };
    let err = recommend(&req).unwrap_err();
    assert_eq!(err.kind_str(), "GEO_ERROR");
}

#[test]
fn test_polar_day_rejected_not_fabricated() {
    let req = RecommendRequest {
        origin: location("Longyearbyen", 78.2232, 15.6267, "Arctic/Longyearbyen"),
        destination: location("Oslo", 59.9139, 10.7522, "Europe/Oslo"),
        local_datetime: "2025-06-21T10:00:00".into(),
        interest: Interest::Sunset,
    };
    let err = recommend(&req).unwrap_err();
    assert_eq!(err.kind_str(), "POLAR_DAY");
}

#[test]
fn test_polar_night_rejected() {
    let req = RecommendRequest {
        origin: location("Longyearbyen", 78.2232, 15.6267, "Arctic/Longyearbyen"),
        destination: location("Oslo", 59.9139, 10.7522, "Europe/Oslo"),
        local_datetime: "2025-12-21T10:00:00".into(),
        interest: Interest::Sunrise,
    };
    let err = recommend(&req).unwrap_err();
    assert_eq!(err.kind_str(), "POLAR_DAY");
}

#[test]
fn test_validation_errors_precede_computation() {
    let mut req = kolkata_singapore("2025-09-01T06:00:00");
    req.origin.lat = 123.0;
    assert_eq!(recommend(&req).unwrap_err().kind_str(), "VALIDATION");

    let mut req = kolkata_singapore("2025-09-01T06:00:00");
    req.origin.tz = "Not/A_Zone".into();
    assert_eq!(recommend(&req).unwrap_err().kind_str(), "VALIDATION");

    let req = kolkata_singapore("09/01/2025 6am");
    assert_eq!(recommend(&req).unwrap_err().kind_str(), "VALIDATION");
}
