//! Closed rings of coordinates and their splitting along the antimeridian.
//!
//! A ring that goes over the antimeridian (for example from longitude `179` to `-179`) is interpreted as taking the
//! short way around the globe. Most planar geometry algorithms would treat the same ring as spanning almost the whole
//! world, so before such a ring can be used it is cut along the antimeridian into several rings, none of which
//! crosses it. See [`Ring::split_antimeridian`].

use std::cmp::Ordering;

use log::{debug, trace};
use meridian_types::contour::Contour;
use meridian_types::geo::impls::GeoPoint2d;
use meridian_types::geo::{unwrap_lon, GeoPoint, NewGeoPoint, ANTIMERIDIAN};
use meridian_types::impls::ClosedContour;
use meridian_types::orient::{GeoClosedContour, Winding};
use meridian_types::segment::Segment;
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// Closed ring of coordinates bounding a polygon shell or a hole in it.
///
/// A ring always has at least 3 distinct finite coordinates. The ring is closed implicitly: if the last coordinate
/// given to [`Ring::new`] repeats the first one, it is dropped, otherwise nothing changes, so closing is idempotent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<GeoPoint2d>", into = "Vec<GeoPoint2d>")]
pub struct Ring {
    contour: ClosedContour<GeoPoint2d>,
}

impl Ring {
    /// Creates a new ring, checking that all the coordinates are finite and there are at least 3 distinct ones.
    ///
    /// ```
    /// use meridian::Ring;
    ///
    /// let ring = Ring::new([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]).unwrap();
    /// assert_eq!(ring.points().len(), 3);
    ///
    /// assert!(Ring::new([(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]).is_err());
    /// ```
    pub fn new<C: Into<GeoPoint2d>>(
        points: impl IntoIterator<Item = C>,
    ) -> Result<Self, ShapeError> {
        let points = points
            .into_iter()
            .map(|p| {
                let p: GeoPoint2d = p.into();
                GeoPoint2d::try_lonlat(p.lon(), p.lat())
            })
            .collect::<Result<Vec<_>, _>>()?;

        let contour = ClosedContour::from_ring(points);
        let distinct = count_distinct(&contour.points);
        if distinct < 3 {
            return Err(ShapeError::MalformedRing { distinct });
        }

        Ok(Self { contour })
    }

    /// Points of the ring without the closing point.
    pub fn points(&self) -> &[GeoPoint2d] {
        &self.contour.points
    }

    /// Points of the ring with the first point repeated at the end.
    pub fn to_closed_points(&self) -> Vec<GeoPoint2d> {
        self.contour.to_ring()
    }

    /// The ring as a closed contour.
    pub fn contour(&self) -> &ClosedContour<GeoPoint2d> {
        &self.contour
    }

    /// Consumes the ring, returning the underlying contour.
    pub fn into_contour(self) -> ClosedContour<GeoPoint2d> {
        self.contour
    }

    /// Returns true if any two consecutive points of the ring (after bringing longitudes into `[-180, 180]` range)
    /// are more than 180 degrees of longitude apart.
    pub fn crosses_antimeridian(&self) -> bool {
        ClosedContour::new(normalized_points(&self.contour)).crosses_antimeridian()
    }

    /// Splits the ring along the antimeridian into one or more closed contours that don't cross it.
    ///
    /// Longitudes are first brought into `[-180, 180]` range. Every segment going over the antimeridian is cut at
    /// the latitude where it meets the line (interpolated linearly), with a new point added on both sides of the
    /// line. The resulting pieces are then joined into closed contours by walking along the antimeridian in the
    /// direction of the ring's winding. Rings going around a pole are closed through that pole.
    ///
    /// A ring that doesn't cross the antimeridian produces exactly one contour with the same points. Contours are
    /// returned in the order their first point appears in the ring, and each contour starts with that point.
    pub fn split_antimeridian(&self) -> Vec<ClosedContour<GeoPoint2d>> {
        let points = normalized_points(&self.contour);
        let crossings = ClosedContour::new(points.clone())
            .iter_segments()
            .filter(|segment| segment.crosses_antimeridian())
            .count();

        if crossings == 0 {
            return vec![ClosedContour::new(points)];
        }

        let direction = walking_direction(&points);
        let chains = cut_into_chains(&points);
        let parts: Vec<_> = stitch(&chains, direction)
            .into_iter()
            .filter_map(|(mut part_points, origin_at)| {
                part_points.rotate_left(origin_at);
                part_points.dedup();

                let contour = ClosedContour::from_ring(part_points);
                if count_distinct(&contour.points) < 3 {
                    debug!("Dropping degenerate antimeridian split part {contour:?}");
                    None
                } else {
                    Some(contour)
                }
            })
            .collect();

        debug!(
            "Ring of {} points crosses the antimeridian {crossings} times, split into {} parts",
            points.len(),
            parts.len()
        );

        parts
    }
}

impl TryFrom<Vec<GeoPoint2d>> for Ring {
    type Error = ShapeError;

    fn try_from(value: Vec<GeoPoint2d>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Ring> for Vec<GeoPoint2d> {
    fn from(value: Ring) -> Self {
        value.to_closed_points()
    }
}

impl meridian_types::contour::ClosedContour for Ring {
    type Point = GeoPoint2d;

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        self.contour.points.iter()
    }
}

/// Validates the points and splits them along the antimeridian. See [`Ring::split_antimeridian`].
pub fn split_ring<C: Into<GeoPoint2d>>(
    points: impl IntoIterator<Item = C>,
) -> Result<Vec<ClosedContour<GeoPoint2d>>, ShapeError> {
    Ok(Ring::new(points)?.split_antimeridian())
}

fn normalized_points(contour: &ClosedContour<GeoPoint2d>) -> Vec<GeoPoint2d> {
    contour.points.iter().map(GeoPoint2d::normalized).collect()
}

fn count_distinct(points: &[GeoPoint2d]) -> usize {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        a.lon()
            .partial_cmp(&b.lon())
            .unwrap_or(Ordering::Equal)
            .then(a.lat().partial_cmp(&b.lat()).unwrap_or(Ordering::Equal))
    });
    sorted.dedup();
    sorted.len()
}

/// Piece of a ring between two antimeridian crossings.
#[derive(Debug)]
struct Chain {
    points: Vec<GeoPoint2d>,
    /// Index in the ring of the first original (not inserted) point of the chain.
    origin: usize,
    /// Position of that point in `points`.
    origin_at: usize,
}

impl Chain {
    fn start(&self) -> &GeoPoint2d {
        &self.points[0]
    }

    fn end(&self) -> &GeoPoint2d {
        &self.points[self.points.len() - 1]
    }
}

/// Cuts the ring at every antimeridian crossing. Every returned chain starts and ends on the antimeridian. The piece
/// after the last crossing is joined with the piece before the first one, since the ring is closed.
fn cut_into_chains(points: &[GeoPoint2d]) -> Vec<Chain> {
    let n = points.len();
    let mut chains = vec![];
    let mut current = Chain {
        points: vec![points[0]],
        origin: 0,
        origin_at: 0,
    };

    for i in 0..n {
        let to = &points[(i + 1) % n];
        if let Some((side, lat)) = Segment(&points[i], to).antimeridian_crossing() {
            trace!("Segment {i} of the ring crosses the antimeridian at latitude {lat}");
            current.points.push(GeoPoint2d::lonlat(side, lat));
            let next = Chain {
                points: vec![GeoPoint2d::lonlat(-side, lat)],
                origin: i + 1,
                origin_at: 1,
            };
            chains.push(std::mem::replace(&mut current, next));
        }

        if i + 1 < n {
            current.points.push(*to);
        }
    }

    if let Some(head) = chains.first_mut() {
        let offset = current.points.len();
        current.points.append(&mut head.points);
        head.points = current.points;
        head.origin_at += offset;
    }

    chains
}

/// Direction to walk along the antimeridian when joining chains: the winding of the ring with longitudes unwrapped
/// to be continuous. A ring going around a pole doesn't close after unwrapping; its area is taken to be on the left.
fn walking_direction(points: &[GeoPoint2d]) -> Winding {
    let mut unwrapped = Vec::with_capacity(points.len());
    let mut lon = points[0].lon();
    unwrapped.push(points[0]);
    for pair in points.windows(2) {
        lon += unwrap_lon(pair[0].lon(), pair[1].lon()) - pair[0].lon();
        unwrapped.push(pair[1].with_lon(lon));
    }

    let last = points[points.len() - 1].lon();
    let closing_lon = lon + unwrap_lon(last, points[0].lon()) - last;
    if (closing_lon - points[0].lon()).abs() > ANTIMERIDIAN {
        return Winding::CounterClockwise;
    }

    ClosedContour::new(unwrapped).winding()
}

/// Position of a point lying on the antimeridian along the boundary of the map, counterclockwise: up the eastern
/// (`180`) edge from `0` to `180`, then down the western (`-180`) edge from `180` to `360`.
fn boundary_position(point: &GeoPoint2d) -> f64 {
    if point.lon() > 0.0 {
        90.0 + point.lat()
    } else {
        270.0 - point.lat()
    }
}

fn walk_distance(from: f64, to: f64, direction: Winding) -> f64 {
    match direction {
        Winding::CounterClockwise => (to - from).rem_euclid(360.0),
        Winding::Clockwise => (from - to).rem_euclid(360.0),
    }
}

/// Map corners passed when walking along the boundary between two positions.
fn corners_between(from: f64, to: f64, direction: Winding) -> Vec<GeoPoint2d> {
    let distance = walk_distance(from, to, direction);
    // No edge along a pole may span more than 180 degrees of longitude.
    let north = [
        GeoPoint2d::lonlat(ANTIMERIDIAN, 90.0),
        GeoPoint2d::lonlat(0.0, 90.0),
        GeoPoint2d::lonlat(-ANTIMERIDIAN, 90.0),
    ];
    let south = [
        GeoPoint2d::lonlat(-ANTIMERIDIAN, -90.0),
        GeoPoint2d::lonlat(0.0, -90.0),
        GeoPoint2d::lonlat(ANTIMERIDIAN, -90.0),
    ];

    let mut passed: Vec<_> = [(180.0, north), (0.0, south)]
        .into_iter()
        .filter_map(|(position, mut corner)| {
            let d = walk_distance(from, position, direction);
            if direction == Winding::Clockwise {
                corner.reverse();
            }
            (d > 0.0 && d < distance).then_some((d, corner))
        })
        .collect();
    passed.sort_by(|a, b| a.0.total_cmp(&b.0));

    passed.into_iter().flat_map(|(_, corner)| corner).collect()
}

/// Joins chains into closed parts. For every part returns its points and the position of its earliest original
/// point, sorted by that point's index in the ring.
fn stitch(chains: &[Chain], direction: Winding) -> Vec<(Vec<GeoPoint2d>, usize)> {
    let mut used = vec![false; chains.len()];
    let mut parts = vec![];

    for first in 0..chains.len() {
        if used[first] {
            continue;
        }
        used[first] = true;

        let mut points = chains[first].points.clone();
        let mut origin = chains[first].origin;
        let mut origin_at = chains[first].origin_at;
        let mut current = first;

        loop {
            let end = boundary_position(chains[current].end());
            let distance_to = |i: usize| {
                walk_distance(end, boundary_position(chains[i].start()), direction)
            };
            let next = (0..chains.len())
                .filter(|&i| i == first || !used[i])
                .min_by(|&a, &b| distance_to(a).total_cmp(&distance_to(b)))
                .unwrap_or(first);

            points.extend(corners_between(
                end,
                boundary_position(chains[next].start()),
                direction,
            ));
            if next == first {
                break;
            }

            used[next] = true;
            if chains[next].origin < origin {
                origin = chains[next].origin;
                origin_at = points.len() + chains[next].origin_at;
            }
            points.extend_from_slice(&chains[next].points);
            current = next;
        }

        parts.push((origin, points, origin_at));
    }

    parts.sort_by_key(|(origin, _, _)| *origin);
    parts
        .into_iter()
        .map(|(_, points, origin_at)| (points, origin_at))
        .collect()
}
