//! Major lunar phase timing.
//!
//! Phases are defined by the excess of the Moon's geocentric ecliptic
//! longitude over the Sun's: 0° new, 90° first quarter, 180° full, 270°
//! last quarter.

use crate::angle::normalize_pm180;
use crate::body::{geocentric_position, Body};
use crate::search::next_increasing_crossing;

/// The Moon gains ~12.2°/day on the Sun; a half-day scan step brackets
/// every phase crossing.
const SCAN_STEP_DAYS: f64 = 0.5;

fn phase_angle_deg(jd: f64) -> f64 {
    let moon = geocentric_position(Body::Moon, jd);
    let sun = geocentric_position(Body::Sun, jd);
    moon.lon_deg - sun.lon_deg
}

fn next_phase(jd: f64, target_deg: f64) -> f64 {
    next_increasing_crossing(
        |t| normalize_pm180(phase_angle_deg(t) - target_deg),
        jd,
        SCAN_STEP_DAYS,
    )
}

/// Time of the first new moon after `jd`.
pub fn next_new_moon(jd: f64) -> f64 {
    next_phase(jd, 0.0)
}

/// Time of the first first-quarter moon after `jd`.
pub fn next_first_quarter_moon(jd: f64) -> f64 {
    next_phase(jd, 90.0)
}

/// Time of the first full moon after `jd`.
pub fn next_full_moon(jd: f64) -> f64 {
    next_phase(jd, 180.0)
}

/// Time of the first last-quarter moon after `jd`.
pub fn next_last_quarter_moon(jd: f64) -> f64 {
    next_phase(jd, 270.0)
}
