//! polyreduce - Least-area polygon simplification
//!
//! Removes the vertices that contribute least to a polygon's area until a
//! vertex budget and an area-error budget are met, optionally keeping the
//! result free of self-intersections.
//!
//! # Example
//!
//! ```
//! use polyreduce::{simplify_polygon, SimplifyOptions};
//! use polyreduce::io::Shape;
//!
//! let shape = Shape::from_json(
//!     r#"{"type":"Polygon","coordinates":[[[0,0],[0,10],[9,9],[10,10],[10,0],[0,0]]]}"#,
//! ).unwrap();
//! let options = SimplifyOptions::new().with_max_vertices(4);
//!
//! let simplified = simplify_polygon(&shape, &options).unwrap();
//! assert_eq!(simplified.vertex_count(), 4);
//! ```

pub mod error;
pub mod geometry;
pub mod io;
pub mod predicates;
pub mod primitives;
pub mod repair;
pub mod simplify;

pub use error::{Result, SimplifyError};
pub use geometry::{Geometry, MultiPolygon, Polygon, Ring, ShapeGeometry, VertexKey};
pub use primitives::{Point2, Segment2, Vec2};
pub use simplify::{simplify_polygon, Simplifier, SimplifyOptions, SimplifyStats, StopConditions};
