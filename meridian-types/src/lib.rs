//! Geometry primitives in geographic coordinates.
//!
//! This crate contains the traits and simple implementations the `meridian` shape builder works with:
//! * [`GeoPoint`](geo::GeoPoint) and [`GeoPoint2d`](geo::impls::GeoPoint2d) - a longitude/latitude pair
//! * [`Contour`] and [`ClosedContour`] - sequences of points
//! * [`Polygon`] and [`MultiPolygon`] - areas bounded by closed contours
//! * [`GeoRect`](geo::GeoRect) - longitude/latitude bounding box
//!
//! With the `geo-types` feature (enabled by default) the simple implementations can be converted into the
//! corresponding [`geo-types`](https://docs.rs/geo-types) geometries.

pub mod contour;
pub use contour::{ClosedContour, Contour};

pub mod polygon;
pub use polygon::Polygon;

pub mod multi_polygon;
pub use multi_polygon::MultiPolygon;

pub mod error;
pub mod geo;
pub mod impls;
pub mod orient;
pub mod segment;

#[cfg(feature = "geo-types")]
mod geo_types;
