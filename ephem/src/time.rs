//! Julian date and calendar conversions, civil-day handling and sidereal
//! time.
//!
//! The engine works in UT Julian dates throughout. ΔT is ignored: it is
//! under a minute of time in the supported era while every consumer of this
//! crate classifies events at civil-day resolution.

use chrono::{Datelike, NaiveDate};

use crate::angle::normalize_deg;

/// Julian date of the J2000.0 epoch (2000-01-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in a day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Gregorian calendar date to Julian date. `day` carries the time of day as
/// a fraction.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (f64::from(y) / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (f64::from(y) + 4716.0)).floor() + (30.6001 * f64::from(m + 1)).floor() + day + b
        - 1524.5
}

/// Julian date to Gregorian calendar `(year, month, day_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Julian date of 00:00 UT of the civil day `jd` falls in.
pub fn midnight(jd: f64) -> f64 {
    jd.round() - 0.5
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Julian date of 00:00 UT on the given calendar date.
pub fn jd_from_date(date: NaiveDate) -> f64 {
    calendar_to_jd(date.year(), date.month(), f64::from(date.day()))
}

/// Greenwich mean sidereal time in degrees.
pub fn gmst_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    normalize_deg(
        280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD) + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

/// A UT calendar date with fractional seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CalendarDate {
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor();
        let secs = (day_frac - day) * SECONDS_PER_DAY;
        Self {
            year,
            month,
            day: day as u32,
            hour: (secs / 3600.0).floor() as u32,
            minute: ((secs % 3600.0) / 60.0).floor() as u32,
            second: secs % 60.0,
        }
    }

    pub fn to_jd(&self) -> f64 {
        let day = f64::from(self.day)
            + f64::from(self.hour) / 24.0
            + f64::from(self.minute) / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day)
    }
}
