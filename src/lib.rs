//! Geodesic distance on the WGS-84 ellipsoid via Vincenty's inverse formula.

pub mod coordinate;
pub mod ellipsoid;
pub mod error;
pub mod vincenty;

pub use coordinate::Coordinate;
pub use ellipsoid::{Ellipsoid, WGS84};
pub use error::CoordinateError;
pub use vincenty::{solve, SolverResult, VincentySolver};
