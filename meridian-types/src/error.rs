//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeridianTypesError {
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
    /// Coordinate value is NaN or infinite.
    #[error("coordinate is not finite: lon {lon}, lat {lat}")]
    NonFinite {
        /// Longitude of the rejected coordinate.
        lon: f64,
        /// Latitude of the rejected coordinate.
        lat: f64,
    },
}
