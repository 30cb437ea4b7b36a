use serde::{Deserialize, Serialize};

/// Options of [`MultiPolygonBuilder::build_with`](crate::MultiPolygonBuilder::build_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Split polygons crossing the antimeridian into parts that don't. Enabled by default.
    pub wrap_dateline: bool,
}

impl BuildOptions {
    /// Options with the antimeridian splitting turned off.
    pub fn no_wrap() -> Self {
        Self {
            wrap_dateline: false,
        }
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            wrap_dateline: true,
        }
    }
}
