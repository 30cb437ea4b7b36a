//! Geometries in geographic coordinates (longitude and latitude) (see [`GeoPoint`]) and helpers for dealing with
//! the antimeridian (see [`normalize_lon`]).

pub mod impls;
mod longitude;
mod rect;
mod traits;

pub use longitude::{crosses_antimeridian, normalize_lon, unwrap_lon, ANTIMERIDIAN};
pub use rect::GeoRect;
pub use traits::point::{GeoPoint, NewGeoPoint};
