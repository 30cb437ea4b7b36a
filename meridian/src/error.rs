//! Error types used by the crate.

use meridian_types::error::MeridianTypesError;
use thiserror::Error;

use crate::multi_polygon::PolygonHandle;

/// Error returned when a shape cannot be constructed from the given coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// Ring has fewer than 3 distinct coordinates (this includes rings collapsing into a single point).
    #[error("ring must have at least 3 distinct coordinates, got {distinct}")]
    MalformedRing {
        /// Number of distinct coordinates in the ring.
        distinct: usize,
    },
    /// One of the coordinates is not a finite number.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] MeridianTypesError),
    /// The handle was not issued by this builder.
    #[error("polygon {0:?} is not registered in the builder")]
    UnknownPolygon(PolygonHandle),
}
