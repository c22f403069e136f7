//! # astronote-ephem
//!
//! Positional astronomy engine backing the `astronote` daily digest.
//!
//! The crate provides everything the digest layer samples:
//!
//! - **Time**: Julian date ↔ Gregorian calendar conversions, civil-day
//!   midnight, Greenwich mean sidereal time ([`time`])
//! - **Positions**: geocentric ecliptic positions for the Sun, the Moon and
//!   the nine planets, angular separations, signed elongations and the
//!   lunar illuminated fraction ([`body`])
//! - **Timing searches**: next solstice/equinox ([`season`]), next major
//!   lunar phase ([`phase`]) and horizon crossings ([`riseset`]), all built
//!   on the same coarse-scan + bisection pattern
//!
//! Planetary positions come from mean orbital elements (valid 1800–2050)
//! and the lunar position from a truncated periodic series. Both are
//! accurate to the arcminute level, far below the degree-scale thresholds
//! the digest layer classifies against.
//!
//! All times are UT expressed as Julian dates; all angles are degrees.

pub mod angle;
pub mod body;
pub mod error;
pub mod observer;
pub mod phase;
pub mod riseset;
pub mod season;
pub mod time;

mod kepler;
mod lunar;
mod search;

pub use body::{
    earth_distance_au, elongation_deg, geocentric_position, illuminated_fraction,
    separation_deg, Body, EclipticPos, EqPos, AU_KM, PLANETS,
};
pub use error::{HorizonError, ObserverError};
pub use observer::Observer;
pub use time::{CalendarDate, J2000_JD, SECONDS_PER_DAY};
