use geo_types::{Coord, CoordNum, LineString};

use crate::contour::Contour;
use crate::geo::impls::GeoPoint2d;
use crate::impls::ClosedContour;

impl<T: CoordNum> Contour for LineString<T> {
    type Point = Coord<T>;

    fn is_closed(&self) -> bool {
        LineString::is_closed(self)
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        if LineString::is_closed(self) {
            self.0[..(self.0.len().max(1) - 1)].iter()
        } else {
            self.0.iter()
        }
    }
}

impl From<&ClosedContour<GeoPoint2d>> for LineString<f64> {
    /// Creates a closed line string, repeating the first point of the contour at the end.
    fn from(value: &ClosedContour<GeoPoint2d>) -> Self {
        LineString(value.to_ring().into_iter().map(Coord::from).collect())
    }
}

impl From<&LineString<f64>> for ClosedContour<GeoPoint2d> {
    fn from(value: &LineString<f64>) -> Self {
        ClosedContour::from_ring(value.0.iter().copied().map(GeoPoint2d::from).collect())
    }
}
