//! Meteor-shower reference table and activity lookup.

use astronote_ephem::time::jd_from_date;
use chrono::{Datelike, NaiveDate};

use crate::event::ShowerPeak;

/// A major annual meteor shower with its fixed peak date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeteorShower {
    pub name: &'static str,
    pub peak: ShowerPeak,
}

const fn shower(name: &'static str, month: u32, day: u32) -> MeteorShower {
    MeteorShower {
        name,
        peak: ShowerPeak { month, day },
    }
}

/// The well-known annual showers, in calendar order.
pub const METEOR_SHOWERS: [MeteorShower; 9] = [
    shower("Quadrantids", 1, 3),
    shower("Lyrids", 4, 22),
    shower("Eta Aquarids", 5, 6),
    shower("Perseids", 8, 13),
    shower("Draconids", 10, 8),
    shower("Orionids", 10, 21),
    shower("Leonids", 11, 18),
    shower("Geminids", 12, 14),
    shower("Ursids", 12, 22),
];

/// A shower is active when the query date falls strictly within ±3 days of
/// its peak.
const ACTIVE_WINDOW_DAYS: f64 = 3.0;

/// Showers active around `date`. Peaks are checked in the query year and
/// both neighbours so the window works across the new year.
pub fn active_showers(date: NaiveDate) -> Vec<MeteorShower> {
    let date_jd = jd_from_date(date);
    METEOR_SHOWERS
        .iter()
        .filter(|shower| {
            (date.year() - 1..=date.year() + 1).any(|year| {
                NaiveDate::from_ymd_opt(year, shower.peak.month, shower.peak.day)
                    .map(jd_from_date)
                    .is_some_and(|peak_jd| (peak_jd - date_jd).abs() < ACTIVE_WINDOW_DAYS)
            })
        })
        .copied()
        .collect()
}
