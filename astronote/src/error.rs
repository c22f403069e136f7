//! Digest error types.

use thiserror::Error;

/// Errors surfaced by the public entry point.
#[derive(Debug, Error)]
pub enum Error {
    /// The date string was not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),
    /// The observer coordinates failed validation.
    #[error("invalid location: {0}")]
    InvalidLocation(#[from] astronote_ephem::ObserverError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_error_message() {
        let err = Error::from(astronote_ephem::ObserverError::LatitudeOutOfRange(99.0));
        assert!(err.to_string().contains("latitude"));
    }
}
