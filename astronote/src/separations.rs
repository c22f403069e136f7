//! Close-approach detection between pairs of bodies.

use astronote_ephem::{separation_deg, Body};

use crate::event::{Event, EventDetail};

const MINUTE_DAYS: f64 = 1.0 / 1440.0;
const QUARTER_HOUR_DAYS: f64 = 0.25 / 24.0;

/// Minima wider than this are not worth reporting.
const REPORT_MAX_DEG: f64 = 4.0;

/// Separations closer than this are highlighted.
const HIGHLIGHT_MAX_DEG: f64 = 1.0;

/// Whether the two bodies reach their closest point during the day: the
/// separation is shrinking at the start of the day and growing at the end.
pub fn is_min_separation(a: Body, b: Body, date_jd: f64) -> bool {
    let s1a = separation_deg(a, b, date_jd);
    let s1b = separation_deg(a, b, date_jd + MINUTE_DAYS);
    let s2a = separation_deg(a, b, date_jd + 1.0 - MINUTE_DAYS);
    let s2b = separation_deg(a, b, date_jd + 1.0);
    s1a >= s1b && s2a <= s2b
}

/// Rough minimum separation over the day: sample every fifteen minutes,
/// stop at the first increase, and report the minimum only when it is
/// notable (≤ 4°).
pub fn min_separation(a: Body, b: Body, date_jd: f64) -> Option<f64> {
    let mut min = separation_deg(a, b, date_jd);
    for step in 1..95 {
        let sep = separation_deg(a, b, date_jd + f64::from(step) * QUARTER_HOUR_DAYS);
        if sep > min {
            break;
        }
        min = sep;
    }
    (min <= REPORT_MAX_DEG).then_some(min)
}

/// Separation events between every unordered pair drawn from `bodies`.
pub fn separation_events(bodies: &[Body], date_jd: f64) -> Vec<Event> {
    let mut events = Vec::new();
    for (i, &a) in bodies.iter().enumerate() {
        for &b in &bodies[i + 1..] {
            if !is_min_separation(a, b, date_jd) {
                continue;
            }
            if let Some(angle) = min_separation(a, b, date_jd) {
                let angle = (angle * 100.0).round() / 100.0;
                events.push(Event::new(
                    angle < HIGHLIGHT_MAX_DEG,
                    EventDetail::Separation {
                        body1: a.name().to_lowercase(),
                        body2: b.name().to_lowercase(),
                        angle,
                    },
                ));
            }
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use astronote_ephem::time::calendar_to_jd;

    #[test]
    fn test_venus_jupiter_appulse_august_2016() {
        // Venus and Jupiter passed within a fraction of a degree around
        // 2016-08-27; the minimum must land on one day of that window.
        let hits: Vec<u32> = (25..30)
            .filter(|&d| {
                let jd = calendar_to_jd(2016, 8, f64::from(d));
                is_min_separation(Body::Venus, Body::Jupiter, jd)
                    && min_separation(Body::Venus, Body::Jupiter, jd).is_some()
            })
            .collect();
        assert!(!hits.is_empty(), "appulse not detected");
        let jd = calendar_to_jd(2016, 8, f64::from(hits[0]));
        let angle = min_separation(Body::Venus, Body::Jupiter, jd).unwrap();
        assert!(angle < 1.0, "angle {angle}");
    }

    #[test]
    fn test_wide_pairs_report_none() {
        // Uranus and Neptune sit tens of degrees apart throughout 2016.
        let jd = calendar_to_jd(2016, 8, 27.0);
        assert_eq!(min_separation(Body::Uranus, Body::Neptune, jd), None);
    }

    #[test]
    fn test_separation_events_use_lowercase_names() {
        let jd = calendar_to_jd(2016, 8, 27.0);
        let bodies = [Body::Moon, Body::Venus, Body::Jupiter];
        for event in separation_events(&bodies, jd) {
            if let EventDetail::Separation { body1, body2, .. } = &event.detail {
                assert_eq!(body1, &body1.to_lowercase());
                assert_eq!(body2, &body2.to_lowercase());
            }
        }
    }
}
