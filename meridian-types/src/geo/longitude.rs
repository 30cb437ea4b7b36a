/// Longitude of the antimeridian in degrees. The line itself is at both `+180` and `-180`.
pub const ANTIMERIDIAN: f64 = 180.0;

/// Brings a longitude value into the `[-180, 180]` range by wrapping it around the globe.
///
/// Values already inside the range (including both `-180` and `180`) are returned unchanged.
///
/// ```
/// use meridian_types::geo::normalize_lon;
///
/// assert_eq!(normalize_lon(190.0), -170.0);
/// assert_eq!(normalize_lon(-190.0), 170.0);
/// assert_eq!(normalize_lon(180.0), 180.0);
/// ```
pub fn normalize_lon(lon: f64) -> f64 {
    if (-ANTIMERIDIAN..=ANTIMERIDIAN).contains(&lon) {
        return lon;
    }

    (lon + ANTIMERIDIAN).rem_euclid(2.0 * ANTIMERIDIAN) - ANTIMERIDIAN
}

/// Returns true if going from `from` to `to` longitude the short way around the globe passes the antimeridian.
///
/// This is the case when the literal difference between the two longitudes is more than 180 degrees.
pub fn crosses_antimeridian(from: f64, to: f64) -> bool {
    (to - from).abs() > ANTIMERIDIAN
}

/// Shifts `to` longitude by a full turn so that the difference between `from` and `to` is not more than 180 degrees.
pub fn unwrap_lon(from: f64, to: f64) -> f64 {
    let delta = to - from;
    if delta > ANTIMERIDIAN {
        to - 2.0 * ANTIMERIDIAN
    } else if delta < -ANTIMERIDIAN {
        to + 2.0 * ANTIMERIDIAN
    } else {
        to
    }
}
