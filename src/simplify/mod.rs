//! Least-area polygon simplification.
//!
//! [`Simplifier`] drives vertex removal over any [`Geometry`](crate::Geometry),
//! and [`simplify_polygon`] runs the whole pipeline on an interchange shape.

mod history;
mod options;
mod polygon;
mod queue;
mod simplifier;

pub use history::History;
pub use options::{SimplifyOptions, StopConditions};
pub use polygon::simplify_polygon;
pub use queue::AreaQueue;
pub use simplifier::{Simplifier, SimplifyStats};
