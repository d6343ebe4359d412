//! Topology repair across rings.
//!
//! Simplifying rings independently can leave two outer rings overlapping,
//! or a hole crossing its outer ring. These are fixed with boolean region
//! operations rather than by further vertex edits.

mod merge;
mod region;

pub use merge::fix_self_intersections;
pub use region::{GeoRegions, RegionOps};
