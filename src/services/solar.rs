//! Low-precision solar position.
//!
//! NOAA-style solar ephemeris: Julian century → solar declination and
//! equation of time → true solar time → hour angle → altitude/azimuth via
//! the standard spherical-astronomy formulas. Azimuth uses the same
//! convention as flight bearings (0° = North, clockwise).
//!
//! Accuracy budget: roughly 0.2° in altitude/azimuth within ±50 years of
//! J2000, i.e. well under a minute of event time. That is ample for a
//! seating decision, so there is no ΔT, refraction, or parallax modelling
//! here — a reimplementation should not add them.

use chrono::{DateTime, Timelike, Utc};

use crate::models::SolarSnapshot;

const DEG: f64 = std::f64::consts::PI / 180.0;

/// Julian Date for a UTC instant (Unix epoch = JD 2440587.5).
fn julian_date(instant: DateTime<Utc>) -> f64 {
    let unix = instant.timestamp() as f64 + instant.timestamp_subsec_nanos() as f64 / 1e9;
    unix / 86400.0 + 2440587.5
}

/// Julian centuries since J2000.0.
fn julian_century(jd: f64) -> f64 {
    (jd - 2451545.0) / 36525.0
}

fn normalize_degrees(deg: f64) -> f64 {
    let d = deg % 360.0;
    if d < 0.0 {
        d + 360.0
    } else {
        d
    }
}

fn sun_mean_longitude(t: f64) -> f64 {
    normalize_degrees(280.46646 + t * (36000.76983 + t * 0.0003032))
}

fn sun_mean_anomaly(t: f64) -> f64 {
    normalize_degrees(357.52911 + t * (35999.05029 - t * 0.0001537))
}

fn earth_eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + t * 0.0000001267)
}

fn sun_equation_of_center(t: f64) -> f64 {
    let m = sun_mean_anomaly(t) * DEG;
    m.sin() * (1.914602 - t * (0.004817 + t * 0.000014))
        + (2.0 * m).sin() * (0.019993 - t * 0.000101)
        + (3.0 * m).sin() * 0.000289
}

fn sun_apparent_longitude(t: f64) -> f64 {
    let omega = 125.04 - 1934.136 * t;
    sun_mean_longitude(t) + sun_equation_of_center(t) - 0.00569 - 0.00478 * (omega * DEG).sin()
}

fn obliquity_corrected(t: f64) -> f64 {
    let mean = 23.0 + (26.0 + (21.448 - t * (46.815 + t * (0.00059 - t * 0.001813))) / 60.0) / 60.0;
    let omega = 125.04 - 1934.136 * t;
    mean + 0.00256 * (omega * DEG).cos()
}

/// Solar declination in degrees.
fn solar_declination(t: f64) -> f64 {
    let e = obliquity_corrected(t) * DEG;
    let lambda = sun_apparent_longitude(t) * DEG;
    (e.sin() * lambda.sin()).asin() / DEG
}

/// Equation of time in minutes (apparent minus mean solar time).
fn equation_of_time(t: f64) -> f64 {
    let e = obliquity_corrected(t) * DEG;
    let l0 = sun_mean_longitude(t) * DEG;
    let ecc = earth_eccentricity(t);
    let m = sun_mean_anomaly(t) * DEG;

    let y = (e / 2.0).tan().powi(2);

    let eq = y * (2.0 * l0).sin() - 2.0 * ecc * m.sin()
        + 4.0 * ecc * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * ecc * ecc * (2.0 * m).sin();

    4.0 * eq / DEG
}

/// Compute the sun's altitude and azimuth for a geographic point and UTC
/// instant. Always returns finite values; a negative altitude simply means
/// the sun is below the horizon.
pub fn solar_position(latitude: f64, longitude: f64, instant: DateTime<Utc>) -> SolarSnapshot {
    let t = julian_century(julian_date(instant));

    let decl = solar_declination(t);
    let eqt = equation_of_time(t);

    let minutes_utc = instant.hour() as f64 * 60.0
        + instant.minute() as f64
        + instant.second() as f64 / 60.0
        + instant.timestamp_subsec_nanos() as f64 / 60e9;

    // True solar time in minutes, then hour angle wrapped to [-180, 180).
    let solar_minutes = minutes_utc + eqt + 4.0 * longitude;
    let mut hour_angle = solar_minutes / 4.0 - 180.0;
    hour_angle = hour_angle - 360.0 * ((hour_angle + 180.0) / 360.0).floor();

    let lat_r = latitude * DEG;
    let decl_r = decl * DEG;
    let ha_r = hour_angle * DEG;

    let sin_alt = (lat_r.sin() * decl_r.sin() + lat_r.cos() * decl_r.cos() * ha_r.cos())
        .clamp(-1.0, 1.0);
    let alt_r = sin_alt.asin();

    let azimuth = if lat_r.cos().abs() > 1e-10 && alt_r.cos().abs() > 1e-10 {
        let cos_az = (decl_r.sin() - alt_r.sin() * lat_r.sin()) / (alt_r.cos() * lat_r.cos());
        let az = cos_az.clamp(-1.0, 1.0).acos() / DEG;
        if hour_angle > 0.0 {
            360.0 - az
        } else {
            az
        }
    } else {
        // Observer at a pole or sun at the zenith: azimuth degenerates.
        if decl > latitude {
            180.0
        } else {
            0.0
        }
    };

    SolarSnapshot {
        instant,
        altitude_deg: alt_r / DEG,
        azimuth_deg: normalize_degrees(azimuth),
    }
}
