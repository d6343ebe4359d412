//! Collection of polygons sharing one ring numbering.

use super::{Geometry, Polygon, Ring, RingId};
use geo::CoordFloat;
use std::ops::Range;

/// An ordered list of polygons.
///
/// Ring ids run across polygons: the first polygon's rings come first, then
/// the second's, and so on.
#[derive(Debug, Clone)]
pub struct MultiPolygon<F: Copy> {
    polygons: Vec<Polygon<F>>,
    // ring id -> polygon index
    owners: Vec<usize>,
}

impl<F: CoordFloat> MultiPolygon<F> {
    /// Builds a multi-polygon from per-polygon rings of `[x, y]` pairs.
    pub fn new(polygons: &[Vec<Vec<[F; 2]>>]) -> Self {
        let mut next_id = 0;
        let mut owners = Vec::new();
        let polygons = polygons
            .iter()
            .enumerate()
            .map(|(p, rings)| {
                let polygon = Polygon::with_first_ring_id(rings, next_id);
                next_id += rings.len();
                owners.extend(std::iter::repeat(p).take(rings.len()));
                polygon
            })
            .collect();
        Self { polygons, owners }
    }

    /// Member polygons, in input order.
    pub fn polygons(&self) -> &[Polygon<F>] {
        &self.polygons
    }

    /// Closed coordinates per polygon; polygons left without rings are dropped.
    pub fn to_closed_coordinates(&self) -> Vec<Vec<Vec<[F; 2]>>> {
        self.polygons
            .iter()
            .map(Polygon::to_closed_coordinates)
            .filter(|rings| !rings.is_empty())
            .collect()
    }
}

impl<F: CoordFloat> Geometry<F> for MultiPolygon<F> {
    fn ring_ids(&self) -> Range<RingId> {
        0..self.owners.len()
    }

    fn ring(&self, id: RingId) -> Option<&Ring<F>> {
        let owner = *self.owners.get(id)?;
        self.polygons.get(owner)?.ring(id)
    }

    fn ring_mut(&mut self, id: RingId) -> Option<&mut Ring<F>> {
        let owner = *self.owners.get(id)?;
        self.polygons.get_mut(owner)?.ring_mut(id)
    }

    fn area(&self) -> F {
        self.polygons
            .iter()
            .fold(F::zero(), |acc, polygon| acc + polygon.area())
    }
}
