//! Building polygon and multi-polygon shapes from longitude/latitude coordinates, with handling of polygons going
//! over the antimeridian.
//!
//! Polygons are registered in a [`MultiPolygonBuilder`] as a shell [`Ring`] and zero or more hole rings. When
//! building, every polygon can optionally be split along the antimeridian (longitude `±180`) into parts that don't
//! cross it, and every part is turned into a shape by a [`ShapeFactory`]. A single resulting shape is returned as
//! is, any other number of shapes is wrapped into a collection.
//!
//! ```
//! use meridian::{BuiltShape, MultiPolygonBuilder, PolygonFactory, Ring};
//!
//! let mut builder = MultiPolygonBuilder::new();
//! builder.register(
//!     Ring::new([(179.0, 0.0), (-179.0, 0.0), (-179.0, 10.0), (179.0, 10.0), (179.0, 0.0)]).unwrap(),
//!     [],
//! );
//!
//! match builder.build(true, &PolygonFactory::default()) {
//!     BuiltShape::Collection(collection) => assert_eq!(collection.len(), 2),
//!     BuiltShape::Single(_) => unreachable!(),
//! }
//! ```
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and never installs a logger itself.

pub mod assembler;
pub use assembler::{CoordinatePart, HoleAssignmentWarning};

pub mod error;
pub use error::ShapeError;

pub mod factory;
#[cfg(feature = "geo-types")]
pub use factory::GeoTypesFactory;
pub use factory::{PolygonFactory, ShapeCollection, ShapeFactory, SpatialContext};

pub mod multi_polygon;
pub use multi_polygon::{BuiltShape, MultiPolygonBuilder, PolygonEntry, PolygonHandle};

mod options;
pub use options::BuildOptions;

mod polygon;
pub use polygon::PolygonDefinition;

pub mod ring;
pub use ring::{split_ring, Ring};

pub use meridian_types::geo::impls::GeoPoint2d;
