//! Orchestrator: validates the request, sequences the engine modules, and
//! assembles the wire response.
//!
//! No retries and no partial results: the first domain error encountered is
//! returned as-is, and the caller decides what to do with it. The whole
//! pipeline is pure and request-scoped, so concurrent callers need no
//! coordination.

use chrono::{NaiveDateTime, SecondsFormat};

use crate::api::{Midpoint, PhaseTimes, Recommendation, RecommendRequest};
use crate::error::{EngineError, Result};
use crate::models::{FlightRequest, GeoPoint};
use crate::services::{decision, geodesy, phases, stability};
use crate::services::solar::solar_position;

/// Compute a window-seat recommendation for one flight request.
pub fn recommend(request: &RecommendRequest) -> Result<Recommendation> {
    let flight = validate(request)?;
    let origin = flight.origin;

    geodesy::check_route(&origin, &flight.destination)?;
    let departure_utc = flight.departure_utc()?;

    let bearing = geodesy::initial_bearing(&origin, &flight.destination);
    let sun = solar_position(origin.latitude, origin.longitude, departure_utc);
    let decision = decision::classify(bearing, sun.azimuth_deg);
    log::debug!(
        "bearing {:.2}°, sun azimuth {:.2}°, Δ {:.2}° => {:?}/{:?}",
        bearing,
        sun.azimuth_deg,
        decision.relative_angle_deg,
        decision.side,
        decision.confidence
    );

    let phase_instants = phases::phase_times(&origin, flight.local_departure.date())?;
    let golden = phases::golden_hour(departure_utc, &phase_instants);

    // Midpoint sun azimuth is informational only; the side decision above
    // never depends on it.
    let (mid_lat, mid_lon) = geodesy::great_circle_point(&origin, &flight.destination, 0.5)?;
    let mid_sun = solar_position(mid_lat, mid_lon, departure_utc);

    let stability = stability::assess(&origin, bearing, departure_utc);

    Ok(Recommendation {
        side: decision.side,
        confidence: decision.confidence,
        bearing_deg: round1(bearing),
        sun_azimuth_deg: round1(sun.azimuth_deg),
        relative_angle_deg: round1(decision.relative_angle_deg),
        golden_hour: golden,
        phase_times: PhaseTimes {
            civil_dawn: iso_local(&phase_instants.civil_dawn),
            sunrise: iso_local(&phase_instants.sunrise),
            sunset: iso_local(&phase_instants.sunset),
            civil_dusk: iso_local(&phase_instants.civil_dusk),
        },
        midpoint: Midpoint {
            lat: round1(mid_lat),
            lon: round1(mid_lon),
            sun_azimuth_deg: round1(mid_sun.azimuth_deg),
        },
        stability,
        notes: format!("{}; departure snapshot; great-circle assumption.", decision.note),
    })
}

/// Validate the raw request into typed domain values.
fn validate(request: &RecommendRequest) -> Result<FlightRequest> {
    let origin = GeoPoint::new(request.origin.lat, request.origin.lon, &request.origin.tz)?;
    let destination = GeoPoint::new(
        request.destination.lat,
        request.destination.lon,
        &request.destination.tz,
    )?;
    let local_departure: NaiveDateTime = request.local_datetime.parse().map_err(|_| {
        EngineError::Validation(format!(
            "local_datetime '{}' is not a naive ISO-8601 timestamp",
            request.local_datetime
        ))
    })?;

    Ok(FlightRequest {
        origin,
        destination,
        local_departure,
        interest: request.interest,
    })
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn iso_local(dt: &chrono::DateTime<chrono_tz::Tz>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, false)
}
