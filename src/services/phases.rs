//! Solar phase times by root finding on the altitude curve.
//!
//! Samples the solar altitude across one civil day in the point's local
//! timezone and refines each threshold crossing by bisection. Two
//! thresholds matter: the geometric horizon (0°) for sunrise/sunset and
//! −6° for civil dawn/dusk. Within the day, the first dawn/sunrise and the
//! last sunset/dusk are taken.
//!
//! Polar conditions are surfaced as errors, never as fabricated times.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{EngineError, Result};
use crate::models::{GeoPoint, PhaseInstants};
use crate::services::solar::solar_position;

/// Sampling grid across the day. Coarse enough to stay cheap, fine enough
/// that no real dawn-to-dusk interval fits between two samples.
const SAMPLE_STEP_MINUTES: i64 = 10;

/// Bisection budget per crossing: 32 halvings of a 10-minute bracket ends
/// far below a millisecond, and the loop always terminates.
const BISECTION_ITERATIONS: u32 = 32;

/// Altitude threshold for sunrise/sunset (geometric horizon).
pub const HORIZON_DEG: f64 = 0.0;

/// Altitude threshold for civil dawn/dusk.
pub const CIVIL_TWILIGHT_DEG: f64 = -6.0;

/// Golden-hour half window around sunrise/sunset.
const GOLDEN_HOUR_MINUTES: i64 = 45;

/// Compute civil dawn, sunrise, sunset, and civil dusk for the given local
/// date at the given point.
pub fn phase_times(point: &GeoPoint, local_date: NaiveDate) -> Result<PhaseInstants> {
    let start = day_start_utc(point.tz, local_date)?;
    let next = local_date
        .succ_opt()
        .ok_or_else(|| EngineError::Validation("date out of calendar range".into()))?;
    let end = day_start_utc(point.tz, next)?;

    let altitude = |t: DateTime<Utc>| solar_position(point.latitude, point.longitude, t).altitude_deg;

    let samples = sample_day(start, end, &altitude);

    let sunrise = first_crossing(&samples, HORIZON_DEG, true, &altitude);
    let sunset = last_crossing(&samples, HORIZON_DEG, false, &altitude);
    let (sunrise, sunset) = match (sunrise, sunset) {
        (Some(r), Some(s)) => (r, s),
        _ => {
            let msg = if samples.iter().all(|&(_, alt)| alt > HORIZON_DEG) {
                "sun never sets on this date at this latitude (polar day)"
            } else if samples.iter().all(|&(_, alt)| alt < HORIZON_DEG) {
                "sun never rises on this date at this latitude (polar night)"
            } else {
                "sun does not both rise and set within this civil day"
            };
            return Err(EngineError::PolarDay(msg.into()));
        }
    };

    let civil_dawn = first_crossing(&samples, CIVIL_TWILIGHT_DEG, true, &altitude);
    let civil_dusk = last_crossing(&samples, CIVIL_TWILIGHT_DEG, false, &altitude);
    let (civil_dawn, civil_dusk) = match (civil_dawn, civil_dusk) {
        (Some(d), Some(k)) => (d, k),
        _ => {
            return Err(EngineError::UndefinedSun(
                "civil twilight threshold is never crossed on this date".into(),
            ))
        }
    };

    Ok(PhaseInstants {
        civil_dawn: civil_dawn.with_timezone(&point.tz),
        sunrise: sunrise.with_timezone(&point.tz),
        sunset: sunset.with_timezone(&point.tz),
        civil_dusk: civil_dusk.with_timezone(&point.tz),
    })
}

/// True when the instant lies within ±45 minutes of the nearest of the
/// day's sunrise and sunset.
pub fn golden_hour(instant: DateTime<Utc>, phases: &PhaseInstants) -> bool {
    let to_sunrise = (instant - phases.sunrise.with_timezone(&Utc)).num_minutes().abs();
    let to_sunset = (instant - phases.sunset.with_timezone(&Utc)).num_minutes().abs();
    to_sunrise.min(to_sunset) <= GOLDEN_HOUR_MINUTES
}

/// First valid instant of the local date. Midnight may not exist under a
/// DST transition; in that case the earliest existing hour is used.
fn day_start_utc(tz: Tz, date: NaiveDate) -> Result<DateTime<Utc>> {
    for hour in 0..4 {
        let local = match date.and_hms_opt(hour, 0, 0) {
            Some(l) => l,
            None => continue,
        };
        match tz.from_local_datetime(&local) {
            chrono::LocalResult::Single(dt) => return Ok(dt.with_timezone(&Utc)),
            chrono::LocalResult::Ambiguous(earliest, _) => return Ok(earliest.with_timezone(&Utc)),
            chrono::LocalResult::None => continue,
        }
    }
    Err(EngineError::Validation(format!(
        "no valid start of day for {} in timezone {}",
        date, tz
    )))
}

fn sample_day(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    altitude: &impl Fn(DateTime<Utc>) -> f64,
) -> Vec<(DateTime<Utc>, f64)> {
    let mut samples = Vec::with_capacity(24 * 60 / SAMPLE_STEP_MINUTES as usize + 2);
    let mut t = start;
    while t <= end {
        samples.push((t, altitude(t)));
        t += Duration::minutes(SAMPLE_STEP_MINUTES);
    }
    samples
}

/// First sign change against `threshold` in the requested direction
/// (`ascending` = crossing upward), refined by bisection.
fn first_crossing(
    samples: &[(DateTime<Utc>, f64)],
    threshold: f64,
    ascending: bool,
    altitude: &impl Fn(DateTime<Utc>) -> f64,
) -> Option<DateTime<Utc>> {
    samples
        .windows(2)
        .find(|w| crosses(w[0].1, w[1].1, threshold, ascending))
        .map(|w| refine(w[0].0, w[1].0, threshold, altitude))
}

/// Last sign change against `threshold` in the requested direction.
fn last_crossing(
    samples: &[(DateTime<Utc>, f64)],
    threshold: f64,
    ascending: bool,
    altitude: &impl Fn(DateTime<Utc>) -> f64,
) -> Option<DateTime<Utc>> {
    samples
        .windows(2)
        .rev()
        .find(|w| crosses(w[0].1, w[1].1, threshold, ascending))
        .map(|w| refine(w[0].0, w[1].0, threshold, altitude))
}

fn crosses(a: f64, b: f64, threshold: f64, ascending: bool) -> bool {
    if ascending {
        a <= threshold && b > threshold
    } else {
        a >= threshold && b < threshold
    }
}

/// Bisect the bracket down to the crossing instant. The bracket is a fixed
/// 10-minute window and the iteration count is fixed, so termination is
/// guaranteed regardless of input.
fn refine(
    mut a: DateTime<Utc>,
    mut b: DateTime<Utc>,
    threshold: f64,
    altitude: &impl Fn(DateTime<Utc>) -> f64,
) -> DateTime<Utc> {
    let mut fa = altitude(a) - threshold;
    for _ in 0..BISECTION_ITERATIONS {
        let m = a + (b - a) / 2;
        if m == a || m == b {
            break;
        }
        let fm = altitude(m) - threshold;
        if fm.signum() == fa.signum() {
            a = m;
            fa = fm;
        } else {
            b = m;
        }
    }
    a + (b - a) / 2
}
