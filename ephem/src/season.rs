//! Solstice and equinox timing.
//!
//! A solstice or equinox is the moment the Sun's geocentric ecliptic
//! longitude crosses a multiple of 90°: 0°/180° for the equinoxes, 90°/270°
//! for the solstices.

use crate::angle::normalize_pm180;
use crate::body::{geocentric_position, Body};
use crate::search::next_increasing_crossing;

/// The Sun advances ~1°/day, so a two-day scan step brackets every
/// crossing comfortably.
const SCAN_STEP_DAYS: f64 = 2.0;

fn next_sun_longitude(jd: f64, target_deg: f64) -> f64 {
    next_increasing_crossing(
        |t| normalize_pm180(geocentric_position(Body::Sun, t).lon_deg - target_deg),
        jd,
        SCAN_STEP_DAYS,
    )
}

/// Time of the first solstice after `jd`.
pub fn next_solstice(jd: f64) -> f64 {
    next_sun_longitude(jd, 90.0).min(next_sun_longitude(jd, 270.0))
}

/// Time of the first equinox after `jd`.
pub fn next_equinox(jd: f64) -> f64 {
    next_sun_longitude(jd, 0.0).min(next_sun_longitude(jd, 180.0))
}
