//! Input/output for polygon coordinate data.
//!
//! Provides the GeoJSON-style geometry object consumed and produced by
//! [`simplify_polygon`](crate::simplify::simplify_polygon).

mod geojson;

pub use geojson::{PolygonCoords, Shape};
