//! Creating shapes out of assembled coordinates.
//!
//! The builder doesn't know what shapes it creates. It hands every assembled part to a [`ShapeFactory`], and, if
//! there is more than one shape, asks the factory to put them into a collection. Two factories are provided:
//! * [`PolygonFactory`] creates [`Polygon`]s of this crate's types and [`ShapeCollection`]s of them.
//! * [`GeoTypesFactory`] (with `geo-types` feature) creates `geo_types` polygons and geometry collections.

use meridian_types::geo::impls::GeoPoint2d;
use meridian_types::geo::GeoRect;
use meridian_types::impls::{ClosedContour, Polygon};
use serde::{Deserialize, Serialize};

/// Creates shapes from assembled coordinate parts.
pub trait ShapeFactory {
    /// A single shape.
    type Shape;
    /// A collection of shapes.
    type Collection;

    /// Creates a polygon. The contours are never empty and do not cross the antimeridian in wrap mode.
    fn polygon(
        &self,
        shell: ClosedContour<GeoPoint2d>,
        holes: Vec<ClosedContour<GeoPoint2d>>,
    ) -> Self::Shape;

    /// Wraps shapes into a collection. The order of the shapes carries no meaning.
    fn collection(&self, shapes: Vec<Self::Shape>) -> Self::Collection;
}

/// Description of the space shapes live in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialContext {
    /// Coordinates are longitude and latitude on a sphere.
    pub geo: bool,
    /// Valid coordinate range.
    pub world: GeoRect,
}

impl SpatialContext {
    /// Geographic context spanning the whole world.
    pub const GEO: SpatialContext = SpatialContext {
        geo: true,
        world: GeoRect::WORLD,
    };
}

impl Default for SpatialContext {
    fn default() -> Self {
        Self::GEO
    }
}

/// Unordered collection of shapes.
///
/// Two collections are equal if they have the same context and the same shapes, in any order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeCollection<S> {
    shapes: Vec<S>,
    context: SpatialContext,
}

impl<S> ShapeCollection<S> {
    /// Creates a new collection.
    pub fn new(shapes: Vec<S>, context: SpatialContext) -> Self {
        Self { shapes, context }
    }

    /// Shapes of the collection.
    pub fn shapes(&self) -> &[S] {
        &self.shapes
    }

    /// Consumes the collection, returning its shapes.
    pub fn into_shapes(self) -> Vec<S> {
        self.shapes
    }

    /// Context the shapes belong to.
    pub fn context(&self) -> &SpatialContext {
        &self.context
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if the collection has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl<S: PartialEq> PartialEq for ShapeCollection<S> {
    fn eq(&self, other: &Self) -> bool {
        if self.context != other.context || self.shapes.len() != other.shapes.len() {
            return false;
        }

        let mut matched = vec![false; other.shapes.len()];
        self.shapes.iter().all(|shape| {
            let found = other
                .shapes
                .iter()
                .enumerate()
                .position(|(i, candidate)| !matched[i] && candidate == shape);
            match found {
                Some(i) => {
                    matched[i] = true;
                    true
                }
                None => false,
            }
        })
    }
}

impl<P> meridian_types::MultiPolygon for ShapeCollection<Polygon<P>> {
    type Polygon = Polygon<P>;

    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon> {
        self.shapes.iter()
    }
}

/// Factory creating [`Polygon`]s of [`GeoPoint2d`] in the given context.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PolygonFactory {
    context: SpatialContext,
}

impl PolygonFactory {
    /// Creates a factory with the given context.
    pub fn new(context: SpatialContext) -> Self {
        Self { context }
    }

    /// Context given to created collections.
    pub fn context(&self) -> &SpatialContext {
        &self.context
    }
}

impl ShapeFactory for PolygonFactory {
    type Shape = Polygon<GeoPoint2d>;
    type Collection = ShapeCollection<Polygon<GeoPoint2d>>;

    fn polygon(
        &self,
        shell: ClosedContour<GeoPoint2d>,
        holes: Vec<ClosedContour<GeoPoint2d>>,
    ) -> Self::Shape {
        Polygon::new(shell, holes)
    }

    fn collection(&self, shapes: Vec<Self::Shape>) -> Self::Collection {
        ShapeCollection::new(shapes, self.context)
    }
}

/// Factory creating `geo_types` geometries.
#[cfg(feature = "geo-types")]
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoTypesFactory;

#[cfg(feature = "geo-types")]
impl ShapeFactory for GeoTypesFactory {
    type Shape = geo_types::Polygon<f64>;
    type Collection = geo_types::GeometryCollection<f64>;

    fn polygon(
        &self,
        shell: ClosedContour<GeoPoint2d>,
        holes: Vec<ClosedContour<GeoPoint2d>>,
    ) -> Self::Shape {
        geo_types::Polygon::from(&Polygon::new(shell, holes))
    }

    fn collection(&self, shapes: Vec<Self::Shape>) -> Self::Collection {
        geo_types::GeometryCollection(
            shapes
                .into_iter()
                .map(geo_types::Geometry::Polygon)
                .collect(),
        )
    }
}
