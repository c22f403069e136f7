//! Digest assembly: one call per date/location gathers the sun, moon and
//! planet data and classifies the day's events.

use astronote_ephem::time::jd_from_date;
use astronote_ephem::{Body, Observer, PLANETS};
use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::event::{
    DailyDigest, Event, EventDetail, MoonReport, PhaseReport, PlanetReport, SunReport,
};
use crate::{lunar, planets, seasons, separations, showers, transits};

/// Bodies considered for close-approach events.
const SEPARATION_BODIES: [Body; 9] = [
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

/// Compute the full digest for a civil day (UT) at a location.
///
/// The computation is deterministic: the same date and observer always
/// produce the same digest.
pub fn daily_digest(date: NaiveDate, observer: &Observer) -> DailyDigest {
    let date_jd = jd_from_date(date);
    debug!(date = %date, "computing daily digest");

    let sun = SunReport {
        transits: transits::transit_times(Body::Sun, date_jd, observer),
    };

    let moon = MoonReport {
        transits: transits::transit_times(Body::Moon, date_jd, observer),
        phase: PhaseReport {
            percent: lunar::phase_percent(date_jd),
            name: lunar::major_phase(date_jd),
        },
        apsis: lunar::apsis(date_jd),
    };

    let planets: Vec<PlanetReport> = PLANETS
        .iter()
        .filter(|&&planet| planets::is_visible(planet, date_jd))
        .map(|&planet| PlanetReport {
            name: planet.name().to_string(),
            transits: transits::transit_times(planet, date_jd, observer),
        })
        .collect();

    let mut events = planetary_events(date_jd);
    events.extend(separations::separation_events(&SEPARATION_BODIES, date_jd));
    events.extend(shower_events(date));
    events.extend(seasons::season_events(date, date_jd));
    debug!(count = events.len(), "events classified");

    DailyDigest {
        sun,
        moon,
        planets,
        events,
    }
}

/// Opposition, conjunction and greatest-elongation events for each planet.
fn planetary_events(date_jd: f64) -> Vec<Event> {
    let mut events = Vec::new();

    for &planet in &PLANETS {
        let inner = matches!(planet, Body::Mercury | Body::Venus);
        let body = planet.name().to_lowercase();

        if !inner && planets::is_opposition(planet, date_jd) {
            events.push(Event::new(true, EventDetail::Opposition { body: body.clone() }));
        }

        if planets::is_conjunction(planet, date_jd) {
            events.push(Event::new(
                true,
                EventDetail::Conjunction {
                    body: body.clone(),
                    kind: planets::conjunction_kind(planet, date_jd),
                },
            ));
        }

        if planets::is_greatest_elongation(planet, date_jd) {
            events.push(Event::new(
                false,
                EventDetail::Elongation {
                    body,
                    kind: planets::elongation_kind(planet, date_jd),
                },
            ));
        }
    }

    events
}

/// Meteor-shower events; a shower on its exact peak day is highlighted.
fn shower_events(date: NaiveDate) -> Vec<Event> {
    showers::active_showers(date)
        .into_iter()
        .map(|shower| {
            let on_peak = shower.peak.month == date.month() && shower.peak.day == date.day();
            Event::new(
                on_peak,
                EventDetail::MeteorShower {
                    name: shower.name.to_string(),
                    peak: shower.peak,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::SolsticeKind;

    fn observer() -> Observer {
        Observer::new(0.0, 0.0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_digest_is_deterministic() {
        let a = daily_digest(date(2017, 1, 1), &observer());
        let b = daily_digest(date(2017, 1, 1), &observer());
        assert_eq!(a, b);
    }

    #[test]
    fn test_solstice_event_present() {
        let digest = daily_digest(date(2016, 6, 20), &observer());
        assert!(digest.events.iter().any(|e| e.detail
            == EventDetail::Solstice {
                kind: SolsticeKind::June
            }));
    }

    #[test]
    fn test_quadrantids_listed_on_new_year() {
        let digest = daily_digest(date(2017, 1, 1), &observer());
        let listed = digest.events.iter().any(|e| {
            matches!(&e.detail, EventDetail::MeteorShower { name, .. } if name == "Quadrantids")
        });
        assert!(listed);
    }

    #[test]
    fn test_shower_highlight_only_on_peak_day() {
        let on_peak = shower_events(date(2017, 1, 3));
        assert!(on_peak.iter().all(|e| e.highlight));
        let off_peak = shower_events(date(2017, 1, 2));
        assert!(off_peak.iter().all(|e| !e.highlight));
    }

    #[test]
    fn test_invisible_planets_are_not_listed() {
        // Venus is at superior conjunction on 2016-06-06.
        let digest = daily_digest(date(2016, 6, 6), &observer());
        assert!(!digest.planets.iter().any(|p| p.name == "Venus"));
    }

    #[test]
    fn test_jupiter_opposition_appears_in_window() {
        // The opposition fires on exactly one day near 2016-03-08.
        let mut hits = 0;
        for day in 6..11 {
            let digest = daily_digest(date(2016, 3, day), &observer());
            hits += digest
                .events
                .iter()
                .filter(|e| {
                    matches!(&e.detail, EventDetail::Opposition { body } if body == "jupiter")
                })
                .count();
        }
        assert_eq!(hits, 1);
    }
}
