//! Observer location and apparent altitude.

use crate::body::{equatorial_position, Body};
use crate::error::ObserverError;
use crate::time::gmst_deg;

/// A ground-based observer. Latitude is north-positive, longitude
/// east-positive, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl Observer {
    /// Create an observer, validating the coordinate ranges.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, ObserverError> {
        if !(-90.0..=90.0).contains(&latitude_deg) || !latitude_deg.is_finite() {
            return Err(ObserverError::LatitudeOutOfRange(latitude_deg));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) || !longitude_deg.is_finite() {
            return Err(ObserverError::LongitudeOutOfRange(longitude_deg));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Geocentric altitude of a body above the observer's horizon in
    /// degrees.
    pub fn altitude_deg(&self, body: Body, jd: f64) -> f64 {
        let eq = equatorial_position(body, jd);
        let local_sidereal = gmst_deg(jd) + self.longitude_deg;
        let hour_angle = (local_sidereal - eq.ra_deg).to_radians();
        let phi = self.latitude_deg.to_radians();
        let dec = eq.dec_deg.to_radians();
        (phi.sin() * dec.sin() + phi.cos() * dec.cos() * hour_angle.cos())
            .asin()
            .to_degrees()
    }
}
