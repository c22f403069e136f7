//! Rise/set transit assembly for one body on one civil day.

use astronote_ephem::time::midnight;
use astronote_ephem::{riseset, Body, Observer};

use crate::event::{TransitKind, TransitTime};

/// Rise and set records for `body` on the civil day starting at `date_jd`
/// (00:00 UT), in chronological order.
///
/// The shape of the list follows from which crossing comes first:
///
/// - set before rise: the previous rise is included so the set has context,
///   then the set, then the (possibly next-day) rise;
/// - rise before set: rise, set, and a second rise when one still lands on
///   the queried day;
/// - circumpolar day: one rise and one set record carrying the sentinel.
pub fn transit_times(body: Body, date_jd: f64, observer: &Observer) -> Vec<TransitTime> {
    let rise = riseset::next_rising(observer, body, date_jd);
    let set = riseset::next_setting(observer, body, date_jd);

    let mut times = Vec::new();

    match (rise, set) {
        (Ok(rise), Ok(set)) if set < rise => {
            if let Ok(prev) = riseset::previous_rising(observer, body, date_jd) {
                times.push(TransitTime::at(TransitKind::Rise, prev));
            }
            times.push(TransitTime::at(TransitKind::Set, set));
            times.push(TransitTime::at(TransitKind::Rise, rise));
        }
        (Ok(rise), Ok(set)) => {
            times.push(TransitTime::at(TransitKind::Rise, rise));
            times.push(TransitTime::at(TransitKind::Set, set));
            // A short diurnal arc can fit a second rise into the same day.
            if let Ok(next) = riseset::next_rising(observer, body, set) {
                if midnight(next) == date_jd {
                    times.push(TransitTime::at(TransitKind::Rise, next));
                }
            }
        }
        (rise, set) => {
            times.push(match rise {
                Ok(jd) => TransitTime::at(TransitKind::Rise, jd),
                Err(err) => TransitTime::circumpolar(TransitKind::Rise, err),
            });
            times.push(match set {
                Ok(jd) => TransitTime::at(TransitKind::Set, jd),
                Err(err) => TransitTime::circumpolar(TransitKind::Set, err),
            });
        }
    }

    times
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Circumpolar, TransitMoment};
    use astronote_ephem::time::calendar_to_jd;

    fn equator() -> Observer {
        Observer::new(0.0, 0.0).unwrap()
    }

    #[test]
    fn test_sun_day_has_rise_and_set_times() {
        let times = transit_times(Body::Sun, calendar_to_jd(2017, 1, 1.0), &equator());
        assert!(times.len() >= 2);
        assert!(times
            .iter()
            .any(|t| t.kind == TransitKind::Rise && matches!(t.time, TransitMoment::At(_))));
        assert!(times
            .iter()
            .any(|t| t.kind == TransitKind::Set && matches!(t.time, TransitMoment::At(_))));
    }

    #[test]
    fn test_transit_records_are_chronological() {
        let times = transit_times(Body::Sun, calendar_to_jd(2017, 1, 1.0), &equator());
        let stamps: Vec<_> = times
            .iter()
            .filter_map(|t| match t.time {
                TransitMoment::At(split) => Some((split.day, split.hour, split.minute)),
                TransitMoment::Circumpolar(_) => None,
            })
            .collect();
        let mut sorted = stamps.clone();
        sorted.sort_unstable();
        assert_eq!(stamps, sorted);
    }

    #[test]
    fn test_polar_day_yields_sentinel_records() {
        let north = Observer::new(85.0, 0.0).unwrap();
        let times = transit_times(Body::Sun, calendar_to_jd(2016, 6, 20.0), &north);
        assert_eq!(times.len(), 2);
        assert_eq!(
            times[0].time,
            TransitMoment::Circumpolar(Circumpolar::AlwaysUp)
        );
        assert_eq!(times[0].kind, TransitKind::Rise);
        assert_eq!(
            times[1].time,
            TransitMoment::Circumpolar(Circumpolar::AlwaysUp)
        );
        assert_eq!(times[1].kind, TransitKind::Set);
    }

    #[test]
    fn test_polar_night_yields_never_up() {
        let north = Observer::new(85.0, 0.0).unwrap();
        let times = transit_times(Body::Sun, calendar_to_jd(2016, 12, 21.0), &north);
        assert!(times
            .iter()
            .all(|t| t.time == TransitMoment::Circumpolar(Circumpolar::NeverUp)));
    }
}
