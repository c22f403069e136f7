//! Engine error types.

use thiserror::Error;

/// The two expected outcomes of a horizon-crossing search: the body is
/// circumpolar for the day being searched and never crosses the horizon in
/// the requested direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HorizonError {
    /// The body stays above the horizon for the entire search day.
    #[error("body is above the horizon for the entire day")]
    AlwaysUp,
    /// The body stays below the horizon for the entire search day.
    #[error("body is below the horizon for the entire day")]
    NeverUp,
}

/// Observer coordinates failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ObserverError {
    #[error("latitude {0} outside [-90, 90] degrees")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180] degrees")]
    LongitudeOutOfRange(f64),
}
