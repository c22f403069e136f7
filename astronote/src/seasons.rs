//! Solstice and equinox detection for the digest.
//!
//! Detection defers to the engine's next-solstice/next-equinox searches:
//! a day lands on the event exactly when the next occurrence, normalized to
//! midnight, is the day itself.

use astronote_ephem::season;
use astronote_ephem::time::midnight;
use chrono::{Datelike, NaiveDate};

use crate::event::{EquinoxKind, Event, EventDetail, SolsticeKind};

pub fn is_solstice(date_jd: f64) -> bool {
    midnight(season::next_solstice(date_jd)) == date_jd
}

pub fn is_equinox(date_jd: f64) -> bool {
    midnight(season::next_equinox(date_jd)) == date_jd
}

/// Solstice kind from the calendar month of a confirmed solstice day.
pub fn solstice_kind(date: NaiveDate) -> Option<SolsticeKind> {
    match date.month() {
        6 => Some(SolsticeKind::June),
        12 => Some(SolsticeKind::December),
        _ => None,
    }
}

/// Equinox kind from the calendar month of a confirmed equinox day.
pub fn equinox_kind(date: NaiveDate) -> Option<EquinoxKind> {
    match date.month() {
        3 => Some(EquinoxKind::March),
        9 => Some(EquinoxKind::September),
        _ => None,
    }
}

/// Season events for the day (at most one).
pub fn season_events(date: NaiveDate, date_jd: f64) -> Vec<Event> {
    let mut events = Vec::new();
    if is_solstice(date_jd) {
        if let Some(kind) = solstice_kind(date) {
            events.push(Event::new(true, EventDetail::Solstice { kind }));
        }
    }
    if is_equinox(date_jd) {
        if let Some(kind) = equinox_kind(date) {
            events.push(Event::new(true, EventDetail::Equinox { kind }));
        }
    }
    events
}
