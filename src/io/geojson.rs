//! GeoJSON-style polygon interchange.
//!
//! Only the geometry object is handled: `{"type": "Polygon", "coordinates":
//! [...]}` or `{"type": "MultiPolygon", "coordinates": [...]}`. Rings may be
//! given closed (first point repeated) or open.
//!
//! # Example
//!
//! ```
//! use polyreduce::io::Shape;
//!
//! let shape = Shape::from_json(
//!     r#"{"type":"Polygon","coordinates":[[[0,0],[0,10],[10,10],[10,0],[0,0]]]}"#,
//! ).unwrap();
//! assert_eq!(shape.vertex_count(), 4);
//! assert!(shape.to_json().unwrap().starts_with(r#"{"type":"Polygon""#));
//! ```

use crate::error::{Result, SimplifyError};
use crate::geometry::open_ring;
use crate::primitives::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coordinates of one polygon: outer ring first, then holes.
pub type PolygonCoords = Vec<Vec<[f64; 2]>>;

/// A polygon or multi-polygon in coordinate-interchange form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Shape {
    Polygon(PolygonCoords),
    MultiPolygon(Vec<PolygonCoords>),
}

impl Shape {
    /// Parses a geometry object. Unknown types and malformed coordinates are
    /// reported as [`SimplifyError::InvalidArgument`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SimplifyError::InvalidArgument(e.to_string()))
    }

    /// Serializes to a compact geometry object.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| SimplifyError::InvalidState(e.to_string()))
    }

    /// Name of the geometry type as written in the `type` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::Polygon(_) => "Polygon",
            Shape::MultiPolygon(_) => "MultiPolygon",
        }
    }

    /// Rings of every polygon, in order.
    pub fn polygons(&self) -> Vec<&PolygonCoords> {
        match self {
            Shape::Polygon(rings) => vec![rings],
            Shape::MultiPolygon(polygons) => polygons.iter().collect(),
        }
    }

    /// Number of distinct vertices; closing duplicates are not counted.
    pub fn vertex_count(&self) -> usize {
        self.polygons()
            .into_iter()
            .flatten()
            .map(|ring| open_ring(ring).len())
            .sum()
    }

    /// Rejects non-finite coordinates.
    pub fn validate(&self) -> Result<()> {
        let bad = self
            .polygons()
            .into_iter()
            .flatten()
            .flatten()
            .map(|&c| Point2::from(c))
            .find(|p| !p.is_finite());

        match bad {
            Some(p) => Err(SimplifyError::InvalidArgument(format!(
                "non-finite coordinate [{}, {}]",
                p.x, p.y
            ))),
            None => Ok(()),
        }
    }
}

impl FromStr for Shape {
    type Err = SimplifyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
