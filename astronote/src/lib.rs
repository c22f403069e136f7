//! # astronote
//!
//! Daily digest of astronomical events for a calendar date and observer
//! location.
//!
//! The digest covers rise/set times for the Sun, the Moon and the visible
//! planets, the lunar phase and perigee/apogee, planetary oppositions,
//! conjunctions and greatest elongations, close approaches between bodies,
//! meteor-shower activity and solstices/equinoxes.
//!
//! All positional astronomy lives in the [`astronote-ephem`](astronote_ephem)
//! engine crate; this crate samples the engine at a few offsets spanning
//! the requested day and classifies events by threshold crossings and
//! sign changes.
//!
//! ## Usage
//!
//! ```no_run
//! let digest = astronote::get_events("2016-06-20", 51.48, 0.0).unwrap();
//! println!("{}", serde_json::to_string_pretty(&digest).unwrap());
//! ```
//!
//! Times are UT throughout; latitude is north-positive and longitude
//! east-positive, both in decimal degrees.

pub mod digest;
pub mod error;
pub mod event;
pub mod lunar;
pub mod planets;
pub mod seasons;
pub mod separations;
pub mod showers;
pub mod transits;

use chrono::NaiveDate;

pub use astronote_ephem::{Body, Observer};
pub use digest::daily_digest;
pub use error::Error;
pub use event::{DailyDigest, Event, EventDetail, TransitKind, TransitMoment, TransitTime};

/// Compute all astronomical events on a given day at a given location.
///
/// `date` is a `YYYY-MM-DD` string; `lat` and `lon` are decimal degrees
/// (positive north/east). This is the crate's single entry point: the
/// returned digest holds sun/moon/planet transit data and the day's typed
/// events.
pub fn get_events(date: &str, lat: f64, lon: f64) -> Result<DailyDigest, Error> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
    let observer = Observer::new(lat, lon)?;
    Ok(daily_digest(date, &observer))
}
