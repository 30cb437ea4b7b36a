//! Line segments and their relation to the antimeridian.

use crate::geo::{crosses_antimeridian, unwrap_lon, GeoPoint, ANTIMERIDIAN};

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P: GeoPoint<Num = f64>> Segment<'_, P> {
    /// Returns true if the shortest path between the segment's endpoints goes over the antimeridian.
    pub fn crosses_antimeridian(&self) -> bool {
        crosses_antimeridian(self.0.lon(), self.1.lon())
    }

    /// For a segment going over the antimeridian returns the side of the antimeridian the segment leaves
    /// (`180` when going east, `-180` when going west) and the latitude at which it crosses the line.
    ///
    /// The latitude is interpolated linearly along the segment after shifting the end point by a full turn, so that
    /// the segment does not go the long way around. Returns `None` for segments that don't cross the antimeridian.
    pub fn antimeridian_crossing(&self) -> Option<(f64, f64)> {
        if !self.crosses_antimeridian() {
            return None;
        }

        let from_lon = self.0.lon();
        let to_lon = unwrap_lon(from_lon, self.1.lon());
        if to_lon == from_lon {
            // Both ends lie on the antimeridian, on its opposite sides.
            return Some((from_lon, self.0.lat()));
        }

        let side = if to_lon > from_lon {
            ANTIMERIDIAN
        } else {
            -ANTIMERIDIAN
        };

        let t = (side - from_lon) / (to_lon - from_lon);
        let lat = self.0.lat() + t * (self.1.lat() - self.0.lat());

        Some((side, lat))
    }
}
