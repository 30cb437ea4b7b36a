//! Turning a polygon definition into one or more coordinate parts ready to be converted into shapes.

use std::fmt::{Display, Formatter};

use log::{debug, warn};
use meridian_types::contour::Contour;
use meridian_types::geo::impls::GeoPoint2d;
use meridian_types::geo::{GeoPoint, GeoRect};
use meridian_types::impls::{ClosedContour, Polygon};
use serde::{Deserialize, Serialize};

use crate::polygon::PolygonDefinition;

/// Shell with its holes that does not cross the antimeridian.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinatePart {
    /// Outer contour.
    pub shell: ClosedContour<GeoPoint2d>,
    /// Holes assigned to the shell.
    pub holes: Vec<ClosedContour<GeoPoint2d>>,
}

impl CoordinatePart {
    /// Creates a part without holes.
    pub fn new(shell: ClosedContour<GeoPoint2d>) -> Self {
        Self {
            shell,
            holes: vec![],
        }
    }

    /// Copies the part into a polygon.
    pub fn to_polygon(&self) -> Polygon<GeoPoint2d> {
        Polygon::new(self.shell.clone(), self.holes.clone())
    }

    /// Converts the part into a polygon.
    pub fn into_polygon(self) -> Polygon<GeoPoint2d> {
        Polygon::new(self.shell, self.holes)
    }
}

impl meridian_types::Polygon for CoordinatePart {
    type Contour = ClosedContour<GeoPoint2d>;

    fn outer_contour(&self) -> &Self::Contour {
        &self.shell
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        self.holes.iter()
    }
}

/// A piece of a hole that could not be placed into any piece of the shell after splitting, and so was left out of
/// the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoleAssignmentWarning {
    /// Index of the hole in the polygon definition.
    pub hole: usize,
    /// Index of the piece of the hole produced by splitting.
    pub hole_part: usize,
    /// Point used to look for the containing shell piece.
    pub point: GeoPoint2d,
}

impl Display for HoleAssignmentWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "part {} of hole {} at ({}, {}) is outside of every shell part",
            self.hole_part,
            self.hole,
            self.point.lon(),
            self.point.lat()
        )
    }
}

/// Result of assembling a single polygon definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    /// Parts in the order they were produced.
    pub parts: Vec<CoordinatePart>,
    /// Hole parts that were dropped.
    pub dropped_holes: Vec<HoleAssignmentWarning>,
}

/// Assembles a polygon definition into coordinate parts.
///
/// Without `wrap` the result is a single part with the rings of the definition as they are. With `wrap` the shell
/// and every hole are split along the antimeridian (see [`Ring::split_antimeridian`](crate::Ring::split_antimeridian)).
/// Every hole piece then goes to the shell piece whose longitude range contains the first point of the hole piece.
/// If there are several such shell pieces, the first one that contains the point within its bounding box wins, and
/// if none does, the first one. Hole pieces that fit no shell piece are dropped and reported in
/// [`Assembly::dropped_holes`].
pub fn assemble(definition: &PolygonDefinition, wrap: bool) -> Assembly {
    if !wrap {
        return Assembly {
            parts: vec![CoordinatePart {
                shell: definition.shell().contour().clone(),
                holes: definition
                    .holes()
                    .iter()
                    .map(|hole| hole.contour().clone())
                    .collect(),
            }],
            dropped_holes: vec![],
        };
    }

    let mut parts: Vec<_> = definition
        .shell()
        .split_antimeridian()
        .into_iter()
        .map(CoordinatePart::new)
        .collect();
    let mut dropped_holes = vec![];

    if parts.len() > 1 {
        debug!(
            "Polygon shell split into {} parts along the antimeridian",
            parts.len()
        );
    }

    let bounds: Vec<Option<GeoRect>> = parts
        .iter()
        .map(|part| part.shell.bounding_rect())
        .collect();

    for (hole_index, hole) in definition.holes().iter().enumerate() {
        for (hole_part, contour) in hole.split_antimeridian().into_iter().enumerate() {
            if let [part] = parts.as_mut_slice() {
                part.holes.push(contour);
                continue;
            }

            let Some(point) = contour.points.first().copied() else {
                continue;
            };

            match containing_part(&bounds, &point) {
                Some(index) => parts[index].holes.push(contour),
                None => {
                    let warning = HoleAssignmentWarning {
                        hole: hole_index,
                        hole_part,
                        point,
                    };
                    warn!("Dropping hole: {warning}");
                    dropped_holes.push(warning);
                }
            }
        }
    }

    Assembly {
        parts,
        dropped_holes,
    }
}

fn containing_part(bounds: &[Option<GeoRect>], point: &GeoPoint2d) -> Option<usize> {
    let candidates: Vec<usize> = bounds
        .iter()
        .enumerate()
        .filter_map(|(index, rect)| {
            rect.filter(|rect| rect.contains_lon(point.lon()))
                .map(|_| index)
        })
        .collect();

    candidates
        .iter()
        .copied()
        .find(|&index| bounds[index].is_some_and(|rect| rect.contains(point)))
        .or(candidates.first().copied())
}
