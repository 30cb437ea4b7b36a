use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::error::MeridianTypesError;
use crate::geo::longitude::normalize_lon;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};

/// 2d point on the surface of the Earth.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lon: f64,
    lat: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lon, lat }
    }
}

impl GeoPoint2d {
    /// Creates a new point from any other geo point.
    pub fn from_point(other: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            lon: other.lon(),
            lat: other.lat(),
        }
    }

    /// Creates a new point, checking that both coordinates are finite.
    pub fn try_lonlat(lon: f64, lat: f64) -> Result<Self, MeridianTypesError> {
        let point = Self { lon, lat };
        if point.is_finite() {
            Ok(point)
        } else {
            Err(MeridianTypesError::NonFinite { lon, lat })
        }
    }

    /// Returns a copy of the point with longitude brought into `[-180, 180]` range.
    pub fn normalized(&self) -> Self {
        Self {
            lon: normalize_lon(self.lon),
            lat: self.lat,
        }
    }

    /// Returns a copy of the point with the given longitude.
    pub fn with_lon(&self, lon: f64) -> Self {
        Self { lon, lat: self.lat }
    }
}

impl From<(f64, f64)> for GeoPoint2d {
    /// Converts `(lon, lat)` tuple into a point.
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for GeoPoint2d {
    /// Converts `[lon, lat]` array into a point.
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl AbsDiffEq for GeoPoint2d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lon.abs_diff_eq(&other.lon, epsilon) && self.lat.abs_diff_eq(&other.lat, epsilon)
    }
}

impl RelativeEq for GeoPoint2d {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.lon.relative_eq(&other.lon, epsilon, max_relative)
            && self.lat.relative_eq(&other.lat, epsilon, max_relative)
    }
}

/// Creates a new GeoPoint2d from longitude and latitude values (in degrees).
///
/// ```
/// use meridian_types::geo::GeoPoint;
/// use meridian_types::lonlat;
///
/// let point = lonlat!(52.0, 38.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! lonlat {
    ($lon:expr, $lat:expr) => {
        <$crate::geo::impls::GeoPoint2d as $crate::geo::NewGeoPoint<f64>>::lonlat($lon, $lat)
    };
}
