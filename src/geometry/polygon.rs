//! Polygon: an outer ring plus holes.

use super::{Geometry, Ring, RingId};
use geo::CoordFloat;
use std::ops::Range;

/// One outer ring followed by zero or more hole rings.
///
/// Ring ids are contiguous, starting at the id assigned to the outer ring.
#[derive(Debug, Clone)]
pub struct Polygon<F: Copy> {
    rings: Vec<Ring<F>>,
    first_ring: RingId,
}

impl<F: CoordFloat> Polygon<F> {
    /// Builds a polygon from rings of `[x, y]` pairs, outer ring first.
    ///
    /// # Example
    ///
    /// ```
    /// use polyreduce::{Geometry, Polygon};
    ///
    /// let polygon = Polygon::new(&[
    ///     vec![[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0]],
    ///     vec![[2.0, 2.0], [2.0, 4.0], [4.0, 4.0], [4.0, 2.0], [2.0, 2.0]],
    /// ]);
    /// assert_eq!(polygon.vertex_count(), 8);
    /// assert_eq!(polygon.area(), 96.0);
    /// ```
    pub fn new(rings: &[Vec<[F; 2]>]) -> Self {
        Self::with_first_ring_id(rings, 0)
    }

    /// Builds a polygon whose outer ring gets id `first_ring`.
    pub fn with_first_ring_id(rings: &[Vec<[F; 2]>], first_ring: RingId) -> Self {
        let rings = rings
            .iter()
            .enumerate()
            .map(|(i, coords)| Ring::from_coords(coords).with_id(first_ring + i))
            .collect();
        Self { rings, first_ring }
    }

    /// The outer boundary, absent for a polygon built without rings.
    pub fn outer(&self) -> Option<&Ring<F>> {
        self.rings.first()
    }

    /// Hole rings, in input order.
    pub fn holes(&self) -> &[Ring<F>] {
        self.rings.get(1..).unwrap_or(&[])
    }

    /// Outer ring followed by holes.
    pub fn rings(&self) -> &[Ring<F>] {
        &self.rings
    }

    /// Closed coordinates of every ring that still has three vertices.
    pub fn to_closed_coordinates(&self) -> Vec<Vec<[F; 2]>> {
        self.rings
            .iter()
            .map(Ring::to_closed_coordinates)
            .filter(|coords| !coords.is_empty())
            .collect()
    }
}

impl<F: CoordFloat> Geometry<F> for Polygon<F> {
    fn ring_ids(&self) -> Range<RingId> {
        self.first_ring..self.first_ring + self.rings.len()
    }

    fn ring(&self, id: RingId) -> Option<&Ring<F>> {
        self.rings.get(id.checked_sub(self.first_ring)?)
    }

    fn ring_mut(&mut self, id: RingId) -> Option<&mut Ring<F>> {
        self.rings.get_mut(id.checked_sub(self.first_ring)?)
    }

    fn area(&self) -> F {
        let mut rings = self.rings.iter();
        let outer = rings.next().map_or(F::zero(), Geometry::area);
        rings.fold(outer, |acc, hole| acc - hole.area())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::VertexKey;
    use approx::assert_relative_eq;

    fn with_hole() -> Polygon<f64> {
        Polygon::new(&[
            vec![[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0]],
            vec![[2.0, 2.0], [2.0, 4.0], [4.0, 4.0], [4.0, 2.0], [2.0, 2.0]],
        ])
    }

    #[test]
    fn test_area_subtracts_holes() {
        assert_relative_eq!(with_hole().area(), 96.0, epsilon = 1e-12);
    }

    #[test]
    fn test_vertices_span_all_rings() {
        let polygon = with_hole();
        let keys = polygon.vertices();
        assert_eq!(keys.len(), 8);
        assert_eq!(keys[0], VertexKey::new(0, 0));
        assert_eq!(keys[4], VertexKey::new(1, 0));
        assert_eq!(polygon.line_segments().len(), 8);
    }

    #[test]
    fn test_ring_id_offset() {
        let polygon: Polygon<f64> = Polygon::with_first_ring_id(
            &[vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]]],
            5,
        );
        assert_eq!(polygon.ring_ids(), 5..6);
        assert!(polygon.ring(4).is_none());
        assert_eq!(polygon.ring(5).map(Ring::id), Some(5));
        assert_eq!(polygon.vertices()[0], VertexKey::new(5, 0));
    }

    #[test]
    fn test_holes() {
        let polygon = with_hole();
        assert_eq!(polygon.holes().len(), 1);
        assert_eq!(polygon.outer().map(Ring::vertex_count), Some(4));

        let empty: Polygon<f64> = Polygon::new(&[]);
        assert!(empty.outer().is_none());
        assert!(empty.holes().is_empty());
        assert_eq!(empty.area(), 0.0);
    }

    #[test]
    fn test_degenerate_ring_dropped_from_output() {
        let polygon: Polygon<f64> = Polygon::new(&[
            vec![[0.0, 0.0], [0.0, 4.0], [4.0, 4.0], [4.0, 0.0], [0.0, 0.0]],
            vec![[1.0, 1.0], [2.0, 2.0], [1.0, 1.0]],
        ]);
        let coords = polygon.to_closed_coordinates();
        assert_eq!(coords.len(), 1);
        assert_eq!(coords[0].len(), 5);
    }

    #[test]
    fn test_hole_vertices_are_removable() {
        let mut polygon = with_hole();
        let ring = polygon.ring_mut(1).unwrap();
        ring.remove_vertex(0, &mut ()).unwrap();
        assert_eq!(polygon.vertex_count(), 7);
        assert_relative_eq!(polygon.area_changed(), 2.0, epsilon = 1e-12);
        // Hole shrank from 4 to 2.
        assert_relative_eq!(polygon.area(), 98.0, epsilon = 1e-12);
    }
}
