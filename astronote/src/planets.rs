//! Planetary event classification: visibility, oppositions, conjunctions
//! and greatest elongations.
//!
//! Every check samples the signed elongation at a few offsets spanning the
//! civil day and looks for a threshold crossing or a change of direction.

use astronote_ephem::angle::normalize_deg;
use astronote_ephem::{elongation_deg, Body};

use crate::event::{ConjunctionKind, ElongationKind};

const HOUR_DAYS: f64 = 1.0 / 24.0;

/// A planet closer than this to the Sun is lost in the glare and left out
/// of the nightly planet list.
const VISIBILITY_MIN_ELONGATION_DEG: f64 = 10.0;

/// Greatest-elongation checks are skipped when the planet sits this close
/// to the Sun at either end of the day; the direction comparisons misfire
/// on near-conjunction geometry.
const ELONGATION_FLOOR_DEG: f64 = 5.0;

/// Whether the planet is far enough from the Sun to be observable.
pub fn is_visible(body: Body, jd: f64) -> bool {
    elongation_deg(body, jd).abs() > VISIBILITY_MIN_ELONGATION_DEG
}

/// Whether the body's elongation passes 180° during the day, placing it
/// opposite the Sun. The wrap guard rejects the 0°/360° discontinuity a
/// conjunction produces.
pub fn is_opposition(body: Body, jd: f64) -> bool {
    let e1 = normalize_deg(elongation_deg(body, jd));
    let e2 = normalize_deg(elongation_deg(body, jd + 1.0));
    let crosses = (e1 <= 180.0 && e2 >= 180.0) || (e1 >= 180.0 && e2 <= 180.0);
    crosses && (e1 - e2).abs() < 180.0
}

/// Whether the body's elongation passes 0°/360° during the day, aligning
/// it with the Sun. The crossing shows up as a fourth-quadrant ↔
/// first-quadrant jump of the normalized elongation.
pub fn is_conjunction(body: Body, jd: f64) -> bool {
    let e1 = normalize_deg(elongation_deg(body, jd));
    let e2 = normalize_deg(elongation_deg(body, jd + 1.0));
    ((270.0..=360.0).contains(&e1) && (0.0..=90.0).contains(&e2))
        || ((0.0..=90.0).contains(&e1) && (270.0..=360.0).contains(&e2))
}

/// Inferior vs superior for the inner planets (by which side of the Sun
/// the planet leaves the conjunction on), plain conjunction otherwise.
pub fn conjunction_kind(body: Body, jd: f64) -> ConjunctionKind {
    match body {
        Body::Mercury | Body::Venus => {
            let e = normalize_deg(elongation_deg(body, jd + 1.0));
            if (270.0..360.0).contains(&e) {
                ConjunctionKind::Inferior
            } else {
                ConjunctionKind::Superior
            }
        }
        _ => ConjunctionKind::Conjunction,
    }
}

/// Whether the signed elongation reaches an extremum during the day: its
/// direction of motion at the start of the day differs from the direction
/// at the end. Hour-scale offsets are used because minute-scale values are
/// too close together to discriminate reliably.
pub fn is_greatest_elongation(body: Body, jd: f64) -> bool {
    let e1a = elongation_deg(body, jd);
    let e2b = elongation_deg(body, jd + 1.0);
    if e1a.abs() <= ELONGATION_FLOOR_DEG || e2b.abs() <= ELONGATION_FLOOR_DEG {
        return false;
    }
    let e1b = elongation_deg(body, jd + HOUR_DAYS);
    let e2a = elongation_deg(body, jd + 1.0 - HOUR_DAYS);
    (e1a <= e1b && e2a >= e2b) || (e1a >= e1b && e2a <= e2b)
}

/// East or west of the Sun at the end of the day.
pub fn elongation_kind(body: Body, jd: f64) -> ElongationKind {
    if elongation_deg(body, jd + 1.0) < 0.0 {
        ElongationKind::West
    } else {
        ElongationKind::East
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astronote_ephem::time::calendar_to_jd;

    #[test]
    fn test_jupiter_opposition_march_2016() {
        // Jupiter reached opposition on 2016-03-08; allow the neighbouring
        // days for engine tolerance.
        let hits: Vec<u32> = (5..12)
            .filter(|&d| is_opposition(Body::Jupiter, calendar_to_jd(2016, 3, f64::from(d))))
            .collect();
        assert_eq!(hits.len(), 1, "hits {hits:?}");
        assert!((7..=9).contains(&hits[0]), "hit on day {}", hits[0]);
    }

    #[test]
    fn test_no_jupiter_opposition_far_from_the_event() {
        for day in 1..8 {
            assert!(!is_opposition(
                Body::Jupiter,
                calendar_to_jd(2016, 6, f64::from(day))
            ));
        }
    }

    #[test]
    fn test_venus_superior_conjunction_june_2016() {
        // Venus passed behind the Sun on 2016-06-06.
        let hits: Vec<u32> = (4..9)
            .filter(|&d| is_conjunction(Body::Venus, calendar_to_jd(2016, 6, f64::from(d))))
            .collect();
        assert_eq!(hits.len(), 1, "hits {hits:?}");
        let jd = calendar_to_jd(2016, 6, f64::from(hits[0]));
        assert_eq!(conjunction_kind(Body::Venus, jd), ConjunctionKind::Superior);
    }

    #[test]
    fn test_conjunction_not_confused_with_opposition() {
        // Around the June 2016 Venus conjunction no opposition fires.
        for day in 4..9 {
            assert!(!is_opposition(
                Body::Venus,
                calendar_to_jd(2016, 6, f64::from(day))
            ));
        }
    }

    #[test]
    fn test_mercury_greatest_eastern_elongation_april_2016() {
        // Mercury stood farthest east of the Sun on 2016-04-18.
        let hits: Vec<u32> = (16..21)
            .filter(|&d| {
                is_greatest_elongation(Body::Mercury, calendar_to_jd(2016, 4, f64::from(d)))
            })
            .collect();
        assert!(!hits.is_empty(), "no elongation detected");
        let jd = calendar_to_jd(2016, 4, f64::from(hits[0]));
        assert_eq!(elongation_kind(Body::Mercury, jd), ElongationKind::East);
    }

    #[test]
    fn test_visibility_tracks_elongation() {
        // Right at the June 2016 conjunction Venus is invisible.
        assert!(!is_visible(Body::Venus, calendar_to_jd(2016, 6, 6.0)));
        // Jupiter at opposition is as visible as it gets.
        assert!(is_visible(Body::Jupiter, calendar_to_jd(2016, 3, 8.0)));
    }
}
