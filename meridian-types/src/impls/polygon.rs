use serde::{Deserialize, Serialize};

use crate::impls::contour::ClosedContour;

/// Simple implementation of the [`Polygon`](crate::Polygon) trait.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polygon<P> {
    /// Outer contour.
    pub outer_contour: ClosedContour<P>,
    /// Inner contours.
    pub inner_contours: Vec<ClosedContour<P>>,
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(outer_contour: ClosedContour<P>, inner_contours: Vec<ClosedContour<P>>) -> Self {
        Self {
            outer_contour,
            inner_contours,
        }
    }

    /// Casts all points of the polygon into a different type.
    pub fn cast_points<T>(&self, mut cast: impl FnMut(&P) -> T) -> Polygon<T> {
        Polygon {
            outer_contour: ClosedContour::new(
                self.outer_contour.points.iter().map(&mut cast).collect(),
            ),
            inner_contours: self
                .inner_contours
                .iter()
                .map(|c| ClosedContour::new(c.points.iter().map(&mut cast).collect()))
                .collect(),
        }
    }
}

impl<P> crate::polygon::Polygon for Polygon<P> {
    type Contour = ClosedContour<P>;

    fn outer_contour(&self) -> &Self::Contour {
        &self.outer_contour
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        self.inner_contours.iter()
    }
}

impl<P> From<ClosedContour<P>> for Polygon<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            outer_contour: value,
            inner_contours: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::impls::GeoPoint2d;
    use crate::geo::{GeoRect, NewGeoPoint};

    #[test]
    fn bounding_rect_uses_outer_contour() {
        let polygon = Polygon::new(
            ClosedContour::new(vec![
                GeoPoint2d::lonlat(0.0, 0.0),
                GeoPoint2d::lonlat(10.0, 0.0),
                GeoPoint2d::lonlat(10.0, 10.0),
            ]),
            vec![ClosedContour::new(vec![
                GeoPoint2d::lonlat(6.0, 1.0),
                GeoPoint2d::lonlat(8.0, 1.0),
                GeoPoint2d::lonlat(8.0, 3.0),
            ])],
        );

        assert_eq!(
            crate::Polygon::bounding_rect(&polygon),
            Some(GeoRect::new(0.0, 0.0, 10.0, 10.0))
        );
        assert_eq!(crate::Polygon::iter_segments(&polygon).count(), 6);
    }

    #[test]
    fn cast_points() {
        let polygon = Polygon::from(ClosedContour::new(vec![(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]));
        let cast = polygon.cast_points(|&(lon, lat)| GeoPoint2d::lonlat(lon, lat));
        assert_eq!(cast.outer_contour.points[1], GeoPoint2d::lonlat(3.0, 4.0));
        assert!(cast.inner_contours.is_empty());
    }
}
