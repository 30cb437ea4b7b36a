//! Implementations of geographic traits.

mod point;

pub use point::GeoPoint2d;
