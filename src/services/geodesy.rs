//! Great-circle geodesy: bearing, interpolation, and distance.
//!
//! Spherical-trigonometry routines over a spherical Earth model. All
//! functions are pure; the only error paths are the degenerate routes
//! (coincident or antipodal endpoints) where the great circle is not
//! uniquely defined.

use crate::error::{EngineError, Result};
use crate::models::GeoPoint;

/// Mean Earth radius in kilometers (spherical model).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Angular tolerance (radians) for degenerate-route detection, ~1 km of
/// surface distance.
const DEGENERACY_EPS_RAD: f64 = 1.6e-4;

/// Central angle between two points in radians, via the haversine formula
/// (numerically stable for short arcs).
pub fn central_angle_rad(origin: &GeoPoint, destination: &GeoPoint) -> f64 {
    let lat1 = origin.latitude.to_radians();
    let lat2 = destination.latitude.to_radians();
    let dlat = (destination.latitude - origin.latitude).to_radians();
    let dlon = (destination.longitude - origin.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * h.sqrt().clamp(-1.0, 1.0).asin()
}

/// Great-circle distance in kilometers. Used for duration estimates only;
/// the side decision never depends on it.
pub fn great_circle_distance(origin: &GeoPoint, destination: &GeoPoint) -> f64 {
    central_angle_rad(origin, destination) * EARTH_RADIUS_KM
}

/// Initial forward azimuth along the great circle from origin to
/// destination, in degrees [0, 360) with 0° = North, clockwise.
pub fn initial_bearing(origin: &GeoPoint, destination: &GeoPoint) -> f64 {
    let lat1 = origin.latitude.to_radians();
    let lat2 = destination.latitude.to_radians();
    let dlon = (destination.longitude - origin.longitude).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Reject routes where the great circle is not uniquely defined.
pub fn check_route(origin: &GeoPoint, destination: &GeoPoint) -> Result<()> {
    let delta = central_angle_rad(origin, destination);
    if delta < DEGENERACY_EPS_RAD {
        return Err(EngineError::Geo(
            "origin and destination coincide; bearing is undefined".into(),
        ));
    }
    if delta > std::f64::consts::PI - DEGENERACY_EPS_RAD {
        return Err(EngineError::Geo(
            "antipodal route; great-circle path is undefined".into(),
        ));
    }
    Ok(())
}

/// Spherical interpolation along the shortest arc. `fraction` 0.0 yields
/// the origin, 1.0 the destination, 0.5 the route midpoint. Returns
/// (latitude, longitude) in degrees, longitude normalized to [-180, 180].
pub fn great_circle_point(
    origin: &GeoPoint,
    destination: &GeoPoint,
    fraction: f64,
) -> Result<(f64, f64)> {
    check_route(origin, destination)?;
    let delta = central_angle_rad(origin, destination);

    let lat1 = origin.latitude.to_radians();
    let lon1 = origin.longitude.to_radians();
    let lat2 = destination.latitude.to_radians();
    let lon2 = destination.longitude.to_radians();

    let a = ((1.0 - fraction) * delta).sin() / delta.sin();
    let b = (fraction * delta).sin() / delta.sin();

    let x = a * lat1.cos() * lon1.cos() + b * lat2.cos() * lon2.cos();
    let y = a * lat1.cos() * lon1.sin() + b * lat2.cos() * lon2.sin();
    let z = a * lat1.sin() + b * lat2.sin();

    let lat = z.atan2((x * x + y * y).sqrt()).to_degrees();
    let mut lon = y.atan2(x).to_degrees();
    if lon > 180.0 {
        lon -= 360.0;
    } else if lon <= -180.0 {
        lon += 360.0;
    }
    Ok((lat, lon))
}
