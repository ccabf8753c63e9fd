//! Error types for coordinate construction

use std::fmt;

pub type Result<T> = std::result::Result<T, CoordinateError>;

/// Reasons a coordinate is rejected at construction.
#[derive(Clone, Debug, PartialEq)]
pub enum CoordinateError {
    /// Label was given but is empty
    EmptyLabel,

    /// Latitude outside [-90, 90] degrees, or NaN
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180] degrees, or NaN
    LongitudeOutOfRange(f64),
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::EmptyLabel => write!(f, "location name should not be empty"),
            CoordinateError::LatitudeOutOfRange(value) => write!(
                f,
                "latitude must be between -90 and 90 degrees, got {}",
                value
            ),
            CoordinateError::LongitudeOutOfRange(value) => write!(
                f,
                "longitude must be between -180 and 180 degrees, got {}",
                value
            ),
        }
    }
}

impl std::error::Error for CoordinateError {}
