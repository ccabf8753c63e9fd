use std::fmt;

use crate::error::{CoordinateError, Result};
use crate::vincenty::{self, SolverResult};

/// A validated point on the ellipsoid, in degrees.
///
/// Latitude is always in [-90, 90] and longitude in [-180, 180]. Longitudes
/// are never wrapped, so 360 is rejected rather than treated as 0.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinate {
    label: Option<String>,
    latitude_deg: f64,
    longitude_deg: f64,
}

fn check_latitude(latitude_deg: f64) -> Result<f64> {
    if (-90.0..=90.0).contains(&latitude_deg) {
        Ok(latitude_deg)
    } else {
        Err(CoordinateError::LatitudeOutOfRange(latitude_deg))
    }
}

fn check_longitude(longitude_deg: f64) -> Result<f64> {
    if (-180.0..=180.0).contains(&longitude_deg) {
        Ok(longitude_deg)
    } else {
        Err(CoordinateError::LongitudeOutOfRange(longitude_deg))
    }
}

fn check_label(label: String) -> Result<String> {
    if label.trim().is_empty() {
        Err(CoordinateError::EmptyLabel)
    } else {
        Ok(label)
    }
}

impl Coordinate {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self> {
        Ok(Coordinate {
            label: None,
            latitude_deg: check_latitude(latitude_deg)?,
            longitude_deg: check_longitude(longitude_deg)?,
        })
    }

    /// Like [`Coordinate::new`] but with a location name, which must not be empty.
    pub fn named(label: impl Into<String>, latitude_deg: f64, longitude_deg: f64) -> Result<Self> {
        let label = check_label(label.into())?;
        let mut coordinate = Coordinate::new(latitude_deg, longitude_deg)?;
        coordinate.label = Some(label);
        Ok(coordinate)
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn with_latitude(&self, latitude_deg: f64) -> Result<Self> {
        Ok(Coordinate {
            latitude_deg: check_latitude(latitude_deg)?,
            ..self.clone()
        })
    }

    pub fn with_longitude(&self, longitude_deg: f64) -> Result<Self> {
        Ok(Coordinate {
            longitude_deg: check_longitude(longitude_deg)?,
            ..self.clone()
        })
    }

    pub fn with_label(&self, label: impl Into<String>) -> Result<Self> {
        Ok(Coordinate {
            label: Some(check_label(label.into())?),
            ..self.clone()
        })
    }

    /// Ellipsoidal distance to `other` on WGS-84, in meters.
    pub fn distance_to(&self, other: &Coordinate) -> SolverResult {
        vincenty::solve(self, other)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "{} ", label)?;
        }
        write!(f, "({}, {})", self.latitude_deg, self.longitude_deg)
    }
}
