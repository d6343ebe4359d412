//! Slot-arena ring with removal and LIFO restoration.

use super::{close_ring, open_ring, Geometry, RingId, Vertex, VertexKey, VertexObserver};
use crate::error::{Result, SimplifyError};
use crate::predicates::any_intersection;
use crate::primitives::{Point2, Segment2};
use geo::CoordFloat;
use num_traits::Float;
use std::ops::Range;
use tracing::trace;

/// A closed loop of vertices bounding a region or a hole.
///
/// One slot exists per input point (closing duplicate removed). Removing a
/// vertex splices it out of the cycle and marks its slot dead; the vertex
/// keeps its recorded neighbors so it can be restored later, provided those
/// neighbors are still adjacent to each other.
#[derive(Debug, Clone)]
pub struct Ring<F: Copy> {
    id: RingId,
    slots: Vec<Vertex<F>>,
    live: Vec<bool>,
    vertex_count: usize,
    original_area: F,
    area_changed: F,
}

impl<F: CoordFloat> Ring<F> {
    /// Builds a ring from points, accepting both closed and open input.
    ///
    /// # Example
    ///
    /// ```
    /// use polyreduce::{Point2, Ring};
    ///
    /// let ring = Ring::new(&[
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(0.0, 4.0),
    ///     Point2::new(4.0, 4.0),
    ///     Point2::new(4.0, 0.0),
    ///     Point2::new(0.0, 0.0),
    /// ]);
    /// assert_eq!(ring.vertex_count(), 4);
    /// assert_eq!(ring.original_area(), 16.0);
    /// ```
    pub fn new(points: &[Point2<F>]) -> Self {
        let points = open_ring(points);
        let n = points.len();

        let slots = points
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let mut v = Vertex::new(p, i);
                v.set_prev(Some((i + n - 1) % n));
                v.set_next(Some((i + 1) % n));
                v
            })
            .collect();

        Self {
            id: 0,
            slots,
            live: vec![true; n],
            vertex_count: n,
            original_area: ring_area(&points),
            area_changed: F::zero(),
        }
    }

    /// Builds a ring from `[x, y]` pairs.
    pub fn from_coords(coords: &[[F; 2]]) -> Self {
        let points: Vec<Point2<F>> = coords.iter().map(|&c| Point2::from(c)).collect();
        Self::new(&points)
    }

    /// Assigns the global ring id used in [`VertexKey`]s.
    pub fn with_id(mut self, id: RingId) -> Self {
        self.id = id;
        self
    }

    /// Global ring id.
    #[inline]
    pub fn id(&self) -> RingId {
        self.id
    }

    /// Number of slots, live or not.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of live vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Whether slot `index` holds a vertex that has not been removed.
    #[inline]
    pub fn is_live(&self, index: usize) -> bool {
        self.live.get(index).copied().unwrap_or(false)
    }

    /// The vertex in slot `index`, live or removed.
    #[inline]
    pub fn vertex(&self, index: usize) -> Option<&Vertex<F>> {
        self.slots.get(index)
    }

    /// Key of slot `index` in this ring.
    #[inline]
    pub fn key(&self, index: usize) -> VertexKey {
        VertexKey::new(self.id, index)
    }

    /// Slot indices of live vertices in slot order.
    pub fn live_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.live
            .iter()
            .enumerate()
            .filter_map(|(i, &live)| live.then_some(i))
    }

    /// Points of live vertices in slot order.
    pub fn points(&self) -> Vec<Point2<F>> {
        self.live_indices().map(|i| self.slots[i].point()).collect()
    }

    /// Planar area at construction.
    #[inline]
    pub fn original_area(&self) -> F {
        self.original_area
    }

    /// Sum of triangle areas of the vertices currently removed.
    #[inline]
    pub fn area_changed(&self) -> F {
        self.area_changed
    }

    /// `area_changed / original_area`.
    pub fn relative_area_changed(&self) -> F {
        relative(self.area_changed, self.original_area)
    }

    /// Triangle area of the vertex in slot `index` with its current neighbors.
    pub fn area_of(&self, index: usize) -> Result<F> {
        let vertex = self.slot(index)?;
        let (prev, next) = vertex.neighbors()?;
        let prev = self.slot(prev)?.point();
        let next = self.slot(next)?.point();
        Ok(vertex.area_with(prev, next))
    }

    /// Removes the live vertex in slot `index`, returning its triangle area.
    ///
    /// Both neighbors are reported to `observer` with their new areas. A ring
    /// is never reduced below three vertices.
    pub fn remove_vertex<O>(&mut self, index: usize, observer: &mut O) -> Result<F>
    where
        O: VertexObserver<F> + ?Sized,
    {
        if !self.is_live(index) {
            return Err(SimplifyError::InvalidState(format!(
                "vertex {index} of ring {} is not live",
                self.id
            )));
        }
        if self.vertex_count <= 3 {
            return Err(SimplifyError::MinimumRingSize);
        }

        let area = self.area_of(index)?;
        let (prev, next) = self.slots[index].neighbors()?;

        self.slots[prev].set_next(Some(next));
        self.slots[next].set_prev(Some(prev));
        self.live[index] = false;
        self.vertex_count -= 1;
        self.area_changed = self.area_changed + area;

        trace!(ring = self.id, index, "removed vertex");
        self.notify(prev, observer)?;
        self.notify(next, observer)?;
        Ok(area)
    }

    /// Re-inserts a removed vertex between its recorded neighbors.
    ///
    /// Fails with [`SimplifyError::InvalidRestoreOrder`] when those neighbors
    /// are no longer adjacent, i.e. restoration does not mirror removal.
    pub fn restore_vertex<O>(&mut self, index: usize, observer: &mut O) -> Result<()>
    where
        O: VertexObserver<F> + ?Sized,
    {
        if self.is_live(index) {
            return Err(SimplifyError::InvalidState(format!(
                "vertex {index} of ring {} is already live",
                self.id
            )));
        }
        let (prev, next) = self.slot(index)?.neighbors()?;

        let adjacent = self.is_live(prev)
            && self.is_live(next)
            && self.slots[prev].next() == Some(next)
            && self.slots[next].prev() == Some(prev);
        if !adjacent {
            return Err(SimplifyError::InvalidRestoreOrder);
        }

        self.slots[prev].set_next(Some(index));
        self.slots[next].set_prev(Some(index));
        self.live[index] = true;
        self.vertex_count += 1;
        let area = self.area_of(index)?;
        self.area_changed = self.area_changed - area;

        trace!(ring = self.id, index, "restored vertex");
        self.notify(prev, observer)?;
        self.notify(next, observer)?;
        Ok(())
    }

    /// Marks the live vertex in slot `index` as permanently kept.
    pub fn skip_vertex(&mut self, index: usize) -> Result<()> {
        if !self.is_live(index) {
            return Err(SimplifyError::InvalidState(format!(
                "vertex {index} of ring {} is not live",
                self.id
            )));
        }
        self.slots[index].mark_skipped();
        Ok(())
    }

    /// Edges between live vertices, empty when fewer than three remain.
    pub fn line_segments(&self) -> Vec<Segment2<F>> {
        if self.vertex_count < 3 {
            return Vec::new();
        }
        self.live_indices()
            .filter_map(|i| {
                let v = &self.slots[i];
                let next = v.next()?;
                Some(Segment2::new(v.point(), self.slots[next].point()))
            })
            .collect()
    }

    /// Live points as a closed loop, empty when fewer than three remain.
    pub fn to_closed_coordinates(&self) -> Vec<[F; 2]> {
        if self.vertex_count < 3 {
            return Vec::new();
        }
        let coords: Vec<[F; 2]> = self.points().into_iter().map(Point2::to_array).collect();
        close_ring(&coords)
    }

    /// Whether any two non-adjacent live edges intersect.
    pub fn has_self_intersections(&self) -> bool {
        any_intersection(&self.line_segments())
    }

    fn slot(&self, index: usize) -> Result<&Vertex<F>> {
        self.slots.get(index).ok_or_else(|| {
            SimplifyError::InvalidState(format!("ring {} has no slot {index}", self.id))
        })
    }

    fn notify<O>(&self, index: usize, observer: &mut O) -> Result<()>
    where
        O: VertexObserver<F> + ?Sized,
    {
        let area = self.area_of(index)?;
        observer.vertex_changed(self.key(index), area);
        Ok(())
    }
}

impl<F: CoordFloat> Geometry<F> for Ring<F> {
    fn ring_ids(&self) -> Range<RingId> {
        self.id..self.id + 1
    }

    fn ring(&self, id: RingId) -> Option<&Ring<F>> {
        (id == self.id).then_some(self)
    }

    fn ring_mut(&mut self, id: RingId) -> Option<&mut Ring<F>> {
        (id == self.id).then_some(self)
    }

    fn area(&self) -> F {
        ring_area(&self.points())
    }
}

/// Unsigned shoelace area of a ring given without its closing point.
pub fn ring_area<F: Float>(points: &[Point2<F>]) -> F {
    let n = points.len();
    if n < 3 {
        return F::zero();
    }

    let mut sum = F::zero();
    for i in 0..n {
        let j = (i + 1) % n;
        sum = sum + points[i].x * points[j].y - points[j].x * points[i].y;
    }
    (sum / (F::one() + F::one())).abs()
}

/// Ratio of changed to original area.
///
/// A zero original area yields zero while nothing has changed and infinity
/// afterwards.
pub(crate) fn relative<F: Float>(changed: F, original: F) -> F {
    if original == F::zero() {
        if changed == F::zero() {
            F::zero()
        } else {
            F::infinity()
        }
    } else {
        changed / original
    }
}
