use serde::{Deserialize, Serialize};

use crate::geo::traits::point::GeoPoint;

/// Bounding box in geographic coordinates.
///
/// The box never wraps around the antimeridian: `lon_min` is always not greater than `lon_max`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRect {
    /// Western boundary.
    pub lon_min: f64,
    /// Southern boundary.
    pub lat_min: f64,
    /// Eastern boundary.
    pub lon_max: f64,
    /// Northern boundary.
    pub lat_max: f64,
}

impl GeoRect {
    /// The whole world.
    pub const WORLD: GeoRect = GeoRect {
        lon_min: -180.0,
        lat_min: -90.0,
        lon_max: 180.0,
        lat_max: 90.0,
    };

    /// Creates a new rect.
    pub fn new(lon_min: f64, lat_min: f64, lon_max: f64, lat_max: f64) -> Self {
        Self {
            lon_min,
            lat_min,
            lon_max,
            lat_max,
        }
    }

    /// Width of the rect in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    /// Height of the rect in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    /// Degenerate rect containing only the given point.
    pub fn from_point(p: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            lon_min: p.lon(),
            lat_min: p.lat(),
            lon_max: p.lon(),
            lat_max: p.lat(),
        }
    }

    /// Smallest rect containing all the points, or `None` if the iterator is empty.
    pub fn from_points<'a, P: GeoPoint<Num = f64> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |rect, p| {
            rect.merge(Self::from_point(p))
        }))
    }

    /// Smallest rect containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            lon_min: self.lon_min.min(other.lon_min),
            lat_min: self.lat_min.min(other.lat_min),
            lon_max: self.lon_max.max(other.lon_max),
            lat_max: self.lat_max.max(other.lat_max),
        }
    }

    /// Returns true if the longitude lies between the western and eastern boundaries (inclusive).
    pub fn contains_lon(&self, lon: f64) -> bool {
        self.lon_min <= lon && lon <= self.lon_max
    }

    /// Returns true if the latitude lies between the southern and northern boundaries (inclusive).
    pub fn contains_lat(&self, lat: f64) -> bool {
        self.lat_min <= lat && lat <= self.lat_max
    }

    /// Returns true if the point is inside the rect or on its boundary.
    pub fn contains(&self, point: &impl GeoPoint<Num = f64>) -> bool {
        self.contains_lon(point.lon()) && self.contains_lat(point.lat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::impls::GeoPoint2d;
    use crate::geo::NewGeoPoint;

    #[test]
    fn from_points() {
        let points = [
            GeoPoint2d::lonlat(10.0, -5.0),
            GeoPoint2d::lonlat(-3.0, 7.0),
            GeoPoint2d::lonlat(4.0, 1.0),
        ];
        let rect = GeoRect::from_points(points.iter()).expect("not empty");
        assert_eq!(rect, GeoRect::new(-3.0, -5.0, 10.0, 7.0));
        assert_eq!(rect.width(), 13.0);
        assert_eq!(rect.height(), 12.0);

        assert!(GeoRect::from_points(std::iter::empty::<&GeoPoint2d>()).is_none());
    }

    #[test]
    fn contains() {
        let rect = GeoRect::new(179.0, 0.0, 180.0, 10.0);
        assert!(rect.contains(&GeoPoint2d::lonlat(180.0, 10.0)));
        assert!(rect.contains(&GeoPoint2d::lonlat(179.5, 5.0)));
        assert!(!rect.contains(&GeoPoint2d::lonlat(-180.0, 5.0)));
        assert!(!rect.contains(&GeoPoint2d::lonlat(179.5, 11.0)));
        assert!(rect.contains_lon(179.5));
        assert!(!rect.contains_lon(178.0));
    }

    #[test]
    fn world_contains_everything() {
        assert!(GeoRect::WORLD.contains(&GeoPoint2d::lonlat(-180.0, -90.0)));
        assert!(GeoRect::WORLD.contains(&GeoPoint2d::lonlat(180.0, 90.0)));
    }
}
