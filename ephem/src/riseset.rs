//! Horizon-crossing (rise/set) searches.
//!
//! The search day is classified first: a body that never dips below its
//! standard altitude, or never climbs above it, yields the corresponding
//! [`HorizonError`] sentinel condition. Otherwise a coarse scan brackets
//! the requested crossing and bisection refines it. The crossing scan runs
//! up to two days so a Moon rise that slips just past the day boundary is
//! still found.

use crate::body::{geocentric_position, Body, AU_KM};
use crate::error::HorizonError;
use crate::observer::Observer;
use crate::search::bisect_zero;

/// Coarse scan resolution: five minutes catches even the shortest polar
/// day arcs.
const SCAN_STEP_DAYS: f64 = 1.0 / 288.0;

/// How far a crossing scan may run past the search day.
const SCAN_HORIZON_DAYS: f64 = 2.0;

/// Bisection tolerance: about half a second of time.
const BISECT_TOL_DAYS: f64 = 0.5 / 86_400.0;

const EARTH_RADIUS_KM: f64 = 6_378.14;

/// Standard altitude of the body's center at rise or set: 34′ of horizon
/// refraction, plus the solar semi-diameter for the Sun, plus the
/// parallax-dominated correction for the Moon.
fn standard_altitude_deg(body: Body, jd: f64) -> f64 {
    match body {
        Body::Sun => -0.8333,
        Body::Moon => {
            let distance_km = geocentric_position(Body::Moon, jd).earth_distance_au * AU_KM;
            let parallax_deg = (EARTH_RADIUS_KM / distance_km).asin().to_degrees();
            0.7275 * parallax_deg - 0.5667
        }
        _ => -0.5667,
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Crossing {
    Rising,
    Setting,
}

/// Altitude of the body relative to its standard rise/set altitude.
fn horizon_excess(observer: &Observer, body: Body, jd: f64) -> f64 {
    observer.altitude_deg(body, jd) - standard_altitude_deg(body, jd)
}

/// Classify the day `[day_start, day_start + 1]`: `Some(sentinel)` when the
/// body never crosses its standard altitude in either direction.
fn classify_day(observer: &Observer, body: Body, day_start: f64) -> Option<HorizonError> {
    let mut any_above = false;
    let mut any_below = false;
    let steps = (1.0 / SCAN_STEP_DAYS) as u32;
    for i in 0..=steps {
        let t = day_start + f64::from(i) * SCAN_STEP_DAYS;
        if horizon_excess(observer, body, t) > 0.0 {
            any_above = true;
        } else {
            any_below = true;
        }
        if any_above && any_below {
            return None;
        }
    }
    if any_above {
        Some(HorizonError::AlwaysUp)
    } else {
        Some(HorizonError::NeverUp)
    }
}

fn crossing_matches(direction: Crossing, f_prev: f64, f_next: f64) -> bool {
    match direction {
        Crossing::Rising => f_prev < 0.0 && f_next >= 0.0,
        Crossing::Setting => f_prev > 0.0 && f_next <= 0.0,
    }
}

fn search(
    observer: &Observer,
    body: Body,
    start: f64,
    direction: Crossing,
    forward: bool,
) -> Result<f64, HorizonError> {
    let day_start = if forward { start } else { start - 1.0 };
    if let Some(sentinel) = classify_day(observer, body, day_start) {
        return Err(sentinel);
    }

    let f = |t: f64| horizon_excess(observer, body, t);
    let step = if forward {
        SCAN_STEP_DAYS
    } else {
        -SCAN_STEP_DAYS
    };
    let steps = (SCAN_HORIZON_DAYS / SCAN_STEP_DAYS) as u32;

    let mut t_prev = start;
    let mut f_prev = f(start);
    for i in 1..=steps {
        let t = start + f64::from(i) * step;
        let v = f(t);
        // Orient the bracket in time order regardless of scan direction.
        let (t_a, f_a, t_b, f_b) = if forward {
            (t_prev, f_prev, t, v)
        } else {
            (t, v, t_prev, f_prev)
        };
        if crossing_matches(direction, f_a, f_b) {
            return Ok(bisect_zero(&f, t_a, f_a, t_b, BISECT_TOL_DAYS));
        }
        t_prev = t;
        f_prev = v;
    }

    // The day is not circumpolar but the requested crossing sits beyond the
    // scan horizon (a polar transition day). Report the closer sentinel.
    Err(match direction {
        Crossing::Rising => HorizonError::NeverUp,
        Crossing::Setting => HorizonError::AlwaysUp,
    })
}

/// Time of the first rise of `body` after `jd`.
pub fn next_rising(observer: &Observer, body: Body, jd: f64) -> Result<f64, HorizonError> {
    search(observer, body, jd, Crossing::Rising, true)
}

/// Time of the first set of `body` after `jd`.
pub fn next_setting(observer: &Observer, body: Body, jd: f64) -> Result<f64, HorizonError> {
    search(observer, body, jd, Crossing::Setting, true)
}

/// Time of the last rise of `body` before `jd`.
pub fn previous_rising(observer: &Observer, body: Body, jd: f64) -> Result<f64, HorizonError> {
    search(observer, body, jd, Crossing::Rising, false)
}

/// Time of the last set of `body` before `jd`.
pub fn previous_setting(observer: &Observer, body: Body, jd: f64) -> Result<f64, HorizonError> {
    search(observer, body, jd, Crossing::Setting, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{calendar_to_jd, CalendarDate};

    fn equator() -> Observer {
        Observer::new(0.0, 0.0).unwrap()
    }

    #[test]
    fn test_equatorial_sunrise_and_sunset() {
        let start = calendar_to_jd(2017, 1, 1.0);
        let rise = next_rising(&equator(), Body::Sun, start).unwrap();
        let set = next_setting(&equator(), Body::Sun, start).unwrap();

        let rise_cal = CalendarDate::from_jd(rise);
        let set_cal = CalendarDate::from_jd(set);
        // At the equator the Sun rises near 06:00 UT and sets near 18:00 UT
        // for a Greenwich-longitude observer.
        assert!(rise_cal.hour == 5 || rise_cal.hour == 6, "rise {rise_cal:?}");
        assert!(set_cal.hour == 17 || set_cal.hour == 18, "set {set_cal:?}");
        assert!(rise < set);
    }

    #[test]
    fn test_previous_rising_precedes_start() {
        let start = calendar_to_jd(2017, 1, 1.0);
        let prev = previous_rising(&equator(), Body::Sun, start).unwrap();
        assert!(prev < start);
        assert!(start - prev < 1.5);
    }

    #[test]
    fn test_polar_sentinels_at_the_solstices() {
        let north = Observer::new(85.0, 0.0).unwrap();
        let june = calendar_to_jd(2016, 6, 20.0);
        let december = calendar_to_jd(2016, 12, 21.0);

        assert_eq!(
            next_rising(&north, Body::Sun, june),
            Err(HorizonError::AlwaysUp)
        );
        assert_eq!(
            next_setting(&north, Body::Sun, june),
            Err(HorizonError::AlwaysUp)
        );
        assert_eq!(
            next_rising(&north, Body::Sun, december),
            Err(HorizonError::NeverUp)
        );
    }

    #[test]
    fn test_moon_rises_on_most_days() {
        let start = calendar_to_jd(2017, 1, 10.0);
        let rise = next_rising(&equator(), Body::Moon, start).unwrap();
        assert!(rise >= start && rise < start + 1.5);
    }

    #[test]
    fn test_day_length_is_about_twelve_hours_at_equator() {
        let start = calendar_to_jd(2016, 3, 20.0);
        let rise = next_rising(&equator(), Body::Sun, start).unwrap();
        let set = next_setting(&equator(), Body::Sun, start).unwrap();
        let daylight_hours = (set - rise) * 24.0;
        assert!(
            (daylight_hours - 12.1).abs() < 0.5,
            "daylight {daylight_hours}"
        );
    }
}
