//! Multi-polygon trait.

use crate::contour::Contour;
use crate::geo::{GeoPoint, GeoRect};
use crate::polygon::Polygon;

/// Geometry consisting of several polygons.
pub trait MultiPolygon {
    /// Polygon type.
    type Polygon: Polygon;

    /// Iterates over polygons.
    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon>;

    /// Bounding box of all the polygons, or `None` if there are no polygons.
    fn bounding_rect(&self) -> Option<GeoRect>
    where
        <<Self::Polygon as Polygon>::Contour as Contour>::Point: GeoPoint<Num = f64>,
    {
        self.polygons()
            .filter_map(|polygon| polygon.bounding_rect())
            .reduce(|acc, rect| acc.merge(rect))
    }
}
