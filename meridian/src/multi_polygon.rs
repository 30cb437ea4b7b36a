//! Collecting polygon definitions and building them into shapes.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::assembler::{assemble, HoleAssignmentWarning};
use crate::error::ShapeError;
use crate::factory::ShapeFactory;
use crate::options::BuildOptions;
use crate::polygon::PolygonDefinition;
use crate::ring::Ring;

/// Identifier of a polygon registered in a [`MultiPolygonBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PolygonHandle(usize);

impl PolygonHandle {
    /// Index of the polygon in the builder, in the order of registration.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Result of a build: a single shape, or a collection when the number of shapes is not exactly one.
#[derive(Debug, Clone, PartialEq)]
pub enum BuiltShape<S, C> {
    /// Exactly one shape was produced.
    Single(S),
    /// Zero or several shapes were produced.
    Collection(C),
}

impl<S, C> BuiltShape<S, C> {
    /// Returns the shape if the result is a single shape.
    pub fn as_single(&self) -> Option<&S> {
        match self {
            BuiltShape::Single(shape) => Some(shape),
            BuiltShape::Collection(_) => None,
        }
    }

    /// Returns the collection if the result is a collection.
    pub fn as_collection(&self) -> Option<&C> {
        match self {
            BuiltShape::Single(_) => None,
            BuiltShape::Collection(collection) => Some(collection),
        }
    }

    /// Returns true for a single shape.
    pub fn is_single(&self) -> bool {
        matches!(self, BuiltShape::Single(_))
    }
}

/// Accumulates polygon definitions and builds them into a shape.
///
/// ```
/// use meridian::{BuiltShape, MultiPolygonBuilder, PolygonFactory, Ring};
///
/// let mut builder = MultiPolygonBuilder::new();
/// builder.register(
///     Ring::new([(179.0, 0.0), (-179.0, 0.0), (-179.0, 10.0), (179.0, 10.0)]).unwrap(),
///     [],
/// );
///
/// // The polygon goes over the antimeridian, so it is split in two.
/// let BuiltShape::Collection(collection) = builder.build(true, &PolygonFactory::default()) else {
///     panic!("expected a collection");
/// };
/// assert_eq!(collection.len(), 2);
///
/// // Without wrapping the polygon is left as is.
/// assert!(builder.build(false, &PolygonFactory::default()).is_single());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygonBuilder {
    polygons: Vec<PolygonDefinition>,
}

impl MultiPolygonBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a polygon definition.
    pub fn polygon(&mut self, definition: PolygonDefinition) -> PolygonHandle {
        self.polygons.push(definition);
        PolygonHandle(self.polygons.len() - 1)
    }

    /// Adds a polygon with the given shell and holes.
    pub fn register(
        &mut self,
        shell: Ring,
        holes: impl IntoIterator<Item = Ring>,
    ) -> PolygonHandle {
        self.polygon(PolygonDefinition::with_holes(shell, holes))
    }

    /// Starts a new polygon with the given shell. Holes can be added to the returned entry.
    ///
    /// ```
    /// use meridian::{MultiPolygonBuilder, Ring};
    ///
    /// let mut builder = MultiPolygonBuilder::new();
    /// builder
    ///     .start_polygon(Ring::new([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]).unwrap())
    ///     .hole(Ring::new([(5.0, 1.0), (6.0, 1.0), (6.0, 2.0)]).unwrap())
    ///     .close()
    ///     .start_polygon(Ring::new([(20.0, 0.0), (30.0, 0.0), (30.0, 10.0)]).unwrap());
    ///
    /// assert_eq!(builder.len(), 2);
    /// ```
    pub fn start_polygon(&mut self, shell: Ring) -> PolygonEntry<'_> {
        let handle = self.polygon(PolygonDefinition::new(shell));
        PolygonEntry {
            builder: self,
            index: handle.0,
        }
    }

    /// Entry of an already registered polygon.
    pub fn entry(&mut self, handle: PolygonHandle) -> Result<PolygonEntry<'_>, ShapeError> {
        self.check(handle)?;
        Ok(PolygonEntry {
            builder: self,
            index: handle.0,
        })
    }

    /// Adds a hole to a registered polygon.
    pub fn add_hole(&mut self, handle: PolygonHandle, hole: Ring) -> Result<(), ShapeError> {
        self.check(handle)?;
        self.polygons[handle.0].add_hole(hole);
        Ok(())
    }

    /// Polygon definition with the given handle.
    pub fn get(&self, handle: PolygonHandle) -> Option<&PolygonDefinition> {
        self.polygons.get(handle.0)
    }

    /// Iterates over the registered polygons in the order of registration.
    pub fn polygons(&self) -> impl Iterator<Item = &PolygonDefinition> {
        self.polygons.iter()
    }

    /// Number of registered polygons.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns true if no polygons are registered.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Builds all registered polygons into a shape.
    ///
    /// With `wrap` every polygon crossing the antimeridian is split into parts, each becoming a separate shape. If
    /// exactly one shape is produced, it is returned as [`BuiltShape::Single`], otherwise all shapes (possibly none)
    /// are put into a collection by the factory. Parts of holes that don't fit any part of the shell are dropped
    /// with a warning in the log; use [`MultiPolygonBuilder::build_with_diagnostics`] to get them.
    ///
    /// The builder is not changed, so building again gives the same result.
    pub fn build<F: ShapeFactory>(
        &self,
        wrap: bool,
        factory: &F,
    ) -> BuiltShape<F::Shape, F::Collection> {
        self.build_with_diagnostics(wrap, factory).0
    }

    /// Same as [`MultiPolygonBuilder::build`], also returning the hole parts that were dropped.
    pub fn build_with_diagnostics<F: ShapeFactory>(
        &self,
        wrap: bool,
        factory: &F,
    ) -> (
        BuiltShape<F::Shape, F::Collection>,
        Vec<(PolygonHandle, HoleAssignmentWarning)>,
    ) {
        let mut shapes = vec![];
        let mut warnings = vec![];

        for (index, definition) in self.polygons.iter().enumerate() {
            let assembly = assemble(definition, wrap);
            warnings.extend(
                assembly
                    .dropped_holes
                    .into_iter()
                    .map(|warning| (PolygonHandle(index), warning)),
            );
            shapes.extend(
                assembly
                    .parts
                    .into_iter()
                    .map(|part| factory.polygon(part.shell, part.holes)),
            );
        }

        debug!(
            "Built {} polygons into {} shapes (wrap: {wrap})",
            self.polygons.len(),
            shapes.len()
        );

        let shape = match <[_; 1]>::try_from(shapes) {
            Ok([shape]) => BuiltShape::Single(shape),
            Err(shapes) => BuiltShape::Collection(factory.collection(shapes)),
        };

        (shape, warnings)
    }

    /// Same as [`MultiPolygonBuilder::build`] with the options given as a struct.
    pub fn build_with<F: ShapeFactory>(
        &self,
        options: &BuildOptions,
        factory: &F,
    ) -> BuiltShape<F::Shape, F::Collection> {
        self.build(options.wrap_dateline, factory)
    }

    fn check(&self, handle: PolygonHandle) -> Result<(), ShapeError> {
        if handle.0 < self.polygons.len() {
            Ok(())
        } else {
            Err(ShapeError::UnknownPolygon(handle))
        }
    }
}

/// A polygon in the builder that holes can be added to.
#[derive(Debug)]
pub struct PolygonEntry<'a> {
    builder: &'a mut MultiPolygonBuilder,
    index: usize,
}

impl<'a> PolygonEntry<'a> {
    /// Adds a hole to the polygon.
    pub fn hole(self, hole: Ring) -> Self {
        self.builder.polygons[self.index].add_hole(hole);
        self
    }

    /// Handle of the polygon.
    pub fn handle(&self) -> PolygonHandle {
        PolygonHandle(self.index)
    }

    /// Returns to the builder.
    pub fn close(self) -> &'a mut MultiPolygonBuilder {
        self.builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::PolygonFactory;
    use assert_matches::assert_matches;
    use meridian_types::geo::GeoPoint;

    fn ring(points: &[(f64, f64)]) -> Ring {
        Ring::new(points.iter().copied()).unwrap()
    }

    fn square(lon: f64, lat: f64) -> Ring {
        ring(&[(lon, lat), (lon + 1.0, lat), (lon + 1.0, lat + 1.0), (lon, lat + 1.0)])
    }

    #[test]
    fn handles_are_sequential() {
        let mut builder = MultiPolygonBuilder::new();
        let a = builder.register(square(0.0, 0.0), []);
        let b = builder.polygon(PolygonDefinition::new(square(5.0, 0.0)));
        let c = builder.start_polygon(square(10.0, 0.0)).handle();

        assert_eq!((a.index(), b.index(), c.index()), (0, 1, 2));
        assert_eq!(builder.len(), 3);
        assert_eq!(builder.get(b).unwrap().shell(), &square(5.0, 0.0));
        assert_eq!(builder.polygons().count(), 3);
    }

    #[test]
    fn holes_through_handles() {
        let mut builder = MultiPolygonBuilder::new();
        let handle = builder.register(square(0.0, 0.0), []);
        builder
            .add_hole(handle, ring(&[(0.2, 0.2), (0.4, 0.2), (0.4, 0.4)]))
            .unwrap();
        builder
            .entry(handle)
            .unwrap()
            .hole(ring(&[(0.6, 0.6), (0.8, 0.6), (0.8, 0.8)]))
            .close();

        assert_eq!(builder.get(handle).unwrap().holes().len(), 2);
    }

    #[test]
    fn unknown_handle() {
        let mut builder = MultiPolygonBuilder::new();
        let handle = builder.register(square(0.0, 0.0), []);
        let mut other = MultiPolygonBuilder::new();

        assert_matches!(
            other.add_hole(handle, square(0.0, 0.0)),
            Err(ShapeError::UnknownPolygon(h)) if h == handle
        );
        assert_matches!(other.entry(handle), Err(ShapeError::UnknownPolygon(_)));
        assert!(other.get(handle).is_none());
    }

    #[test]
    fn empty_builder_gives_empty_collection() {
        let builder = MultiPolygonBuilder::new();
        assert!(builder.is_empty());

        let shape = builder.build(true, &PolygonFactory::default());
        assert_matches!(shape, BuiltShape::Collection(collection) if collection.is_empty());
    }

    #[test]
    fn single_polygon_is_not_wrapped_into_collection() {
        let mut builder = MultiPolygonBuilder::new();
        builder.register(square(0.0, 0.0), []);

        for wrap in [true, false] {
            let shape = builder.build(wrap, &PolygonFactory::default());
            assert!(shape.is_single());
            assert!(shape.as_collection().is_none());
            assert_eq!(shape.as_single().unwrap().outer_contour.len(), 4);
        }
    }

    #[test]
    fn several_polygons_keep_order() {
        let mut builder = MultiPolygonBuilder::new();
        builder.register(square(0.0, 0.0), []);
        builder.register(
            ring(&[(179.0, 0.0), (-179.0, 0.0), (-179.0, 10.0), (179.0, 10.0)]),
            [],
        );
        builder.register(square(20.0, 0.0), []);

        let shape = builder.build(true, &PolygonFactory::default());
        let collection = shape.as_collection().unwrap();
        assert_eq!(collection.len(), 4);
        let first_lons: Vec<f64> = collection
            .shapes()
            .iter()
            .map(|polygon| polygon.outer_contour.points[0].lon())
            .collect();
        assert_eq!(first_lons, vec![0.0, 179.0, -179.0, 20.0]);

        assert_eq!(
            builder
                .build(false, &PolygonFactory::default())
                .as_collection()
                .unwrap()
                .len(),
            3
        );
    }

    #[test]
    fn diagnostics_name_polygon() {
        let mut builder = MultiPolygonBuilder::new();
        builder.register(square(0.0, 0.0), []);
        let handle = builder.register(
            ring(&[(170.0, -10.0), (-170.0, -10.0), (-170.0, 10.0), (170.0, 10.0)]),
            [square(50.0, 0.0)],
        );

        let (shape, warnings) = builder.build_with_diagnostics(true, &PolygonFactory::default());
        assert_eq!(shape.as_collection().unwrap().len(), 3);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].0, handle);
        assert_eq!(warnings[0].1.hole, 0);

        let (_, warnings) = builder.build_with_diagnostics(false, &PolygonFactory::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn build_with_options() {
        let mut builder = MultiPolygonBuilder::new();
        builder.register(
            ring(&[(179.0, 0.0), (-179.0, 0.0), (-179.0, 10.0), (179.0, 10.0)]),
            [],
        );

        let factory = PolygonFactory::default();
        assert!(!builder.build_with(&BuildOptions::default(), &factory).is_single());
        assert!(builder.build_with(&BuildOptions::no_wrap(), &factory).is_single());
    }
}
