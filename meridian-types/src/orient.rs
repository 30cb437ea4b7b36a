//! Orientation of closed contours.

use serde::{Deserialize, Serialize};

use crate::contour::{ClosedContour, Contour};
use crate::geo::GeoPoint;

/// Direction in which the points of a closed contour go around its area, with longitude treated as `x` and latitude
/// as `y`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winding {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    CounterClockwise,
}

impl Winding {
    /// Winding for the given signed area. Degenerate (zero area) contours are considered clockwise.
    pub fn from_area(area_signed: f64) -> Self {
        if area_signed <= 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}

/// Signed area of the polygon formed by the points, treating the sequence as closed. Positive for counterclockwise
/// sequences.
pub fn area_signed<'a, P: GeoPoint<Num = f64> + 'a>(
    points: impl IntoIterator<Item = &'a P>,
) -> f64 {
    let mut iter = points.into_iter();
    let Some(first) = iter.next() else {
        return 0.0;
    };

    let mut prev = first;
    let mut aggr = 0.0;
    for p in iter.chain(std::iter::once(first)) {
        aggr += prev.lon() * p.lat() - p.lon() * prev.lat();
        prev = p;
    }

    aggr / 2.0
}

/// Area and orientation of closed contours in geographic coordinates.
pub trait GeoClosedContour {
    /// Signed area in square degrees. Positive for counterclockwise contours.
    fn area_signed(&self) -> f64;

    /// Orientation of the contour.
    fn winding(&self) -> Winding {
        Winding::from_area(self.area_signed())
    }
}

impl<P, T> GeoClosedContour for T
where
    P: GeoPoint<Num = f64>,
    T: ClosedContour<Point = P>,
{
    fn area_signed(&self) -> f64 {
        area_signed(Contour::iter_points(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::impls::GeoPoint2d;
    use crate::geo::NewGeoPoint;
    use crate::impls;

    #[test]
    fn area() {
        let contour = impls::ClosedContour::new(vec![
            GeoPoint2d::lonlat(0.0, 0.0),
            GeoPoint2d::lonlat(0.0, 1.0),
            GeoPoint2d::lonlat(1.0, 0.0),
        ]);
        assert_eq!(contour.area_signed(), -0.5);

        let contour = impls::ClosedContour::new(vec![
            GeoPoint2d::lonlat(0.0, 0.0),
            GeoPoint2d::lonlat(1.0, 0.0),
            GeoPoint2d::lonlat(0.0, 1.0),
        ]);
        assert_eq!(contour.area_signed(), 0.5);
    }

    #[test]
    fn winding() {
        let contour = impls::ClosedContour::new(vec![
            GeoPoint2d::lonlat(0.0, 0.0),
            GeoPoint2d::lonlat(0.0, 1.0),
            GeoPoint2d::lonlat(1.0, 0.0),
        ]);
        assert_eq!(contour.winding(), Winding::Clockwise);

        let contour = impls::ClosedContour::new(vec![
            GeoPoint2d::lonlat(0.0, 0.0),
            GeoPoint2d::lonlat(1.0, 0.0),
            GeoPoint2d::lonlat(0.0, 1.0),
        ]);
        assert_eq!(contour.winding(), Winding::CounterClockwise);
    }

    #[test]
    fn empty_area() {
        assert_eq!(area_signed(std::iter::empty::<&GeoPoint2d>()), 0.0);
    }
}
