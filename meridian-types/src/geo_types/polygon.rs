use geo_types::LineString;

use crate::error::MeridianTypesError;
use crate::geo::impls::GeoPoint2d;
use crate::geo::GeoPoint;
use crate::impls::{ClosedContour, Polygon};

impl From<&Polygon<GeoPoint2d>> for geo_types::Polygon<f64> {
    fn from(value: &Polygon<GeoPoint2d>) -> Self {
        geo_types::Polygon::new(
            LineString::<f64>::from(&value.outer_contour),
            value
                .inner_contours
                .iter()
                .map(LineString::<f64>::from)
                .collect(),
        )
    }
}

impl TryFrom<&geo_types::Polygon<f64>> for Polygon<GeoPoint2d> {
    type Error = MeridianTypesError;

    fn try_from(value: &geo_types::Polygon<f64>) -> Result<Self, Self::Error> {
        if value.exterior().0.is_empty() {
            return Err(MeridianTypesError::Conversion(
                "polygon exterior is empty".to_string(),
            ));
        }

        let polygon = Polygon::new(
            ClosedContour::<GeoPoint2d>::from(value.exterior()),
            value
                .interiors()
                .iter()
                .map(ClosedContour::<GeoPoint2d>::from)
                .collect(),
        );

        let all_points = std::iter::once(&polygon.outer_contour)
            .chain(polygon.inner_contours.iter())
            .flat_map(|contour| contour.points.iter());
        for point in all_points {
            if !point.is_finite() {
                return Err(MeridianTypesError::NonFinite {
                    lon: point.lon(),
                    lat: point.lat(),
                });
            }
        }

        Ok(polygon)
    }
}
