//! Mutable ring geometry for incremental simplification.
//!
//! Rings are slot arenas: every input point keeps its slot for the lifetime
//! of the ring, removed vertices leave a placeholder, and `prev`/`next` links
//! are slot indices. Polygons and multi-polygons are compositions of rings
//! that share one global ring numbering, so a single [`VertexKey`] addresses
//! any vertex of a geometry.

mod multi_polygon;
mod polygon;
mod ring;
mod shape;
mod vertex;

pub use multi_polygon::MultiPolygon;
pub use polygon::Polygon;
pub use ring::{ring_area, Ring};
pub use shape::ShapeGeometry;
pub use vertex::Vertex;

use crate::primitives::Segment2;
use geo::CoordFloat;
use std::ops::Range;

/// Global identifier of a ring within a geometry.
pub type RingId = usize;

/// Address of a vertex: the ring it belongs to and its slot in that ring.
///
/// Ordering is by ring, then slot. Ties in the simplification queue are
/// broken with this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexKey {
    pub ring: RingId,
    pub index: usize,
}

impl VertexKey {
    /// Key for slot `index` of ring `ring`.
    #[inline]
    pub fn new(ring: RingId, index: usize) -> Self {
        Self { ring, index }
    }
}

/// Receives notifications when a vertex's neighbors change.
///
/// Rings call this for both neighbors of a removed or restored vertex, with
/// the neighbor's freshly computed triangle area.
pub trait VertexObserver<F> {
    fn vertex_changed(&mut self, key: VertexKey, area: F);
}

impl<F> VertexObserver<F> for () {
    #[inline]
    fn vertex_changed(&mut self, _key: VertexKey, _area: F) {}
}

/// Common view over rings, polygons and multi-polygons.
///
/// Implementors expose their rings by global id; everything else is derived.
pub trait Geometry<F: CoordFloat> {
    /// Ids of every ring in this geometry.
    fn ring_ids(&self) -> Range<RingId>;

    fn ring(&self, id: RingId) -> Option<&Ring<F>>;

    fn ring_mut(&mut self, id: RingId) -> Option<&mut Ring<F>>;

    /// Current planar area, holes subtracted.
    fn area(&self) -> F;

    /// Number of rings.
    fn ring_count(&self) -> usize {
        self.ring_ids().len()
    }

    /// Number of live vertices across all rings.
    fn vertex_count(&self) -> usize {
        self.ring_ids()
            .filter_map(|id| self.ring(id))
            .map(Ring::vertex_count)
            .sum()
    }

    /// Keys of all live vertices, ring by ring in slot order.
    fn vertices(&self) -> Vec<VertexKey> {
        self.ring_ids()
            .filter_map(|id| self.ring(id))
            .flat_map(|ring| {
                let id = ring.id();
                ring.live_indices().map(move |index| VertexKey::new(id, index))
            })
            .collect()
    }

    /// Edges of every ring that still has at least three live vertices.
    fn line_segments(&self) -> Vec<Segment2<F>> {
        self.ring_ids()
            .filter_map(|id| self.ring(id))
            .flat_map(Ring::line_segments)
            .collect()
    }

    /// Sum of the triangle areas removed from all rings so far.
    fn area_changed(&self) -> F {
        self.ring_ids()
            .filter_map(|id| self.ring(id))
            .fold(F::zero(), |acc, ring| acc + ring.area_changed())
    }
}

/// Appends the first point if it differs from the last.
///
/// # Example
///
/// ```
/// use polyreduce::geometry::{close_ring, open_ring};
///
/// let open = vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
/// let closed = close_ring(&open);
/// assert_eq!(closed.len(), 4);
/// assert_eq!(open_ring(&closed), open);
/// ```
pub fn close_ring<T: Clone + PartialEq>(points: &[T]) -> Vec<T> {
    let mut closed = points.to_vec();
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        if first != last {
            closed.push(first.clone());
        }
    }
    closed
}

/// Drops the last point if it equals the first.
pub fn open_ring<T: Clone + PartialEq>(points: &[T]) -> Vec<T> {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 && first == last => {
            points[..points.len() - 1].to_vec()
        }
        _ => points.to_vec(),
    }
}
