use serde::{Deserialize, Serialize};

use crate::ring::Ring;

/// Polygon as registered by the user: a shell ring and zero or more holes.
///
/// Holes are expected to lie inside the shell. This is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonDefinition {
    shell: Ring,
    #[serde(default)]
    holes: Vec<Ring>,
}

impl PolygonDefinition {
    /// Creates a definition without holes.
    pub fn new(shell: Ring) -> Self {
        Self {
            shell,
            holes: vec![],
        }
    }

    /// Creates a definition with the given holes.
    pub fn with_holes(shell: Ring, holes: impl IntoIterator<Item = Ring>) -> Self {
        Self {
            shell,
            holes: holes.into_iter().collect(),
        }
    }

    /// Adds a hole to the polygon.
    pub fn add_hole(&mut self, hole: Ring) {
        self.holes.push(hole);
    }

    /// Outer ring.
    pub fn shell(&self) -> &Ring {
        &self.shell
    }

    /// Holes in the order they were added.
    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    /// Returns true if the shell or any of the holes goes over the antimeridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.shell.crosses_antimeridian() || self.holes.iter().any(Ring::crosses_antimeridian)
    }
}

impl From<Ring> for PolygonDefinition {
    fn from(shell: Ring) -> Self {
        Self::new(shell)
    }
}

impl meridian_types::Polygon for PolygonDefinition {
    type Contour = Ring;

    fn outer_contour(&self) -> &Self::Contour {
        &self.shell
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        self.holes.iter()
    }
}

/// Converts a `geo_types` polygon, validating its exterior and interiors the same way [`Ring::new`] does.
#[cfg(feature = "geo-types")]
impl TryFrom<&geo_types::Polygon<f64>> for PolygonDefinition {
    type Error = crate::error::ShapeError;

    fn try_from(value: &geo_types::Polygon<f64>) -> Result<Self, Self::Error> {
        let polygon = meridian_types::impls::Polygon::<crate::GeoPoint2d>::try_from(value)?;
        let holes = polygon
            .inner_contours
            .into_iter()
            .map(|hole| Ring::try_from(hole.points))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::with_holes(
            Ring::try_from(polygon.outer_contour.points)?,
            holes,
        ))
    }
}
