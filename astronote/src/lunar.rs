//! Lunar digest data: phase summary and perigee/apogee flags.

use astronote_ephem::time::midnight;
use astronote_ephem::{earth_distance_au, illuminated_fraction, phase, Body};

use crate::event::{Apsis, MoonPhase};

const MINUTE_DAYS: f64 = 1.0 / 1440.0;

/// The major phase falling on the civil day starting at `date_jd`, if any.
///
/// Each upcoming phase time is normalized to midnight and compared against
/// the queried day, mirroring the engine's next-phase semantics: a phase
/// later the same day is "next" from the day's midnight.
pub fn major_phase(date_jd: f64) -> Option<MoonPhase> {
    let candidates = [
        (phase::next_new_moon(date_jd), MoonPhase::NewMoon),
        (phase::next_first_quarter_moon(date_jd), MoonPhase::FirstQuarter),
        (phase::next_full_moon(date_jd), MoonPhase::FullMoon),
        (phase::next_last_quarter_moon(date_jd), MoonPhase::LastQuarter),
    ];
    candidates
        .iter()
        .find(|(jd, _)| midnight(*jd) == date_jd)
        .map(|(_, name)| *name)
}

/// Illuminated percentage of the lunar disk at `jd`.
pub fn phase_percent(jd: f64) -> u8 {
    (illuminated_fraction(jd) * 100.0).round() as u8
}

/// Whether the Moon passes through perigee or apogee on the day: the
/// Earth-Moon distance changes direction between minute-scale samples at
/// the day's edges.
pub fn apsis(date_jd: f64) -> Option<Apsis> {
    let d1a = earth_distance_au(Body::Moon, date_jd);
    let d1b = earth_distance_au(Body::Moon, date_jd + MINUTE_DAYS);
    let d2a = earth_distance_au(Body::Moon, date_jd + 1.0 - MINUTE_DAYS);
    let d2b = earth_distance_au(Body::Moon, date_jd + 1.0);

    if d1a >= d1b && d2a <= d2b {
        Some(Apsis::Perigee)
    } else if d1a <= d1b && d2a >= d2b {
        Some(Apsis::Apogee)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astronote_ephem::time::{calendar_to_jd, jd_from_date};
    use chrono::NaiveDate;

    #[test]
    fn test_full_moon_of_october_2017() {
        let date = NaiveDate::from_ymd_opt(2017, 10, 5).unwrap();
        assert_eq!(major_phase(jd_from_date(date)), Some(MoonPhase::FullMoon));
    }

    #[test]
    fn test_ordinary_day_has_no_major_phase() {
        // Two days after the 2017-10-05 full moon.
        let date = NaiveDate::from_ymd_opt(2017, 10, 7).unwrap();
        assert_eq!(major_phase(jd_from_date(date)), None);
    }

    #[test]
    fn test_phase_percent_is_a_percentage() {
        for day in 1..29 {
            let percent = phase_percent(calendar_to_jd(2016, 2, f64::from(day)));
            assert!(percent <= 100);
        }
    }

    #[test]
    fn test_one_apsis_of_each_kind_per_anomalistic_month() {
        let start = calendar_to_jd(2016, 1, 1.0);
        let mut perigees = 0;
        let mut apogees = 0;
        for day in 0..28 {
            match apsis(start + f64::from(day)) {
                Some(Apsis::Perigee) => perigees += 1,
                Some(Apsis::Apogee) => apogees += 1,
                None => {}
            }
        }
        assert_eq!(perigees, 1, "perigees {perigees}");
        assert_eq!(apogees, 1, "apogees {apogees}");
    }
}
