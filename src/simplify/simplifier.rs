//! Least-area vertex elimination with undo and intersection rewind.

use super::{AreaQueue, History, StopConditions};
use crate::error::{Result, SimplifyError};
use crate::geometry::{Geometry, Ring, RingId, VertexKey};
use crate::predicates::{any_intersection, intersects_any};
use crate::primitives::Segment2;
use geo::CoordFloat;
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

/// Running counts of simplifier operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimplifyStats {
    /// Calls to [`Simplifier::simplify`] that removed a vertex.
    pub removed: usize,
    /// Calls to [`Simplifier::undo`] that restored a vertex.
    pub restored: usize,
    /// Calls to [`Simplifier::skip`] that kept a vertex.
    pub skipped: usize,
}

/// Greedy least-area simplifier over a mutable geometry.
///
/// Every live vertex is queued by the area of the triangle it forms with its
/// neighbors. [`simplify`](Self::simplify) removes the smallest one and
/// records it; [`undo`](Self::undo) puts the most recent removal back.
///
/// Rings are never reduced below a triangle. Once a ring has three vertices
/// its queued vertices are parked outside the queue, and they return when an
/// undo brings the ring back to four.
///
/// # Example
///
/// ```
/// use polyreduce::{Geometry, Polygon, Simplifier, StopConditions};
///
/// let polygon = Polygon::new(&[vec![
///     [0.0, 0.0], [0.0, 10.0], [9.0, 9.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0],
/// ]]);
/// let mut simplifier = Simplifier::new(polygon).unwrap();
/// simplifier
///     .simplify_to(&StopConditions::new().with_max_vertices(4))
///     .unwrap();
///
/// assert_eq!(
///     simplifier.geometry().to_closed_coordinates(),
///     vec![vec![[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0]]]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Simplifier<F, G> {
    geometry: G,
    queue: AreaQueue<F>,
    history: History,
    parked: BTreeMap<RingId, Vec<usize>>,
    original_area: F,
    stats: SimplifyStats,
}

impl<F, G> Simplifier<F, G>
where
    F: CoordFloat,
    G: Geometry<F>,
{
    /// Indexes every live, non-skipped vertex of `geometry`.
    pub fn new(geometry: G) -> Result<Self> {
        let original_area = geometry.area();
        let mut queue = AreaQueue::new();
        let mut parked: BTreeMap<RingId, Vec<usize>> = BTreeMap::new();

        for id in geometry.ring_ids() {
            let ring = ring_ref(&geometry, id)?;
            let small = ring.vertex_count() <= 3;
            for index in candidates(ring) {
                if small {
                    parked.entry(id).or_default().push(index);
                } else {
                    queue.push(ring.key(index), ring.area_of(index)?);
                }
            }
        }

        debug!(
            vertices = geometry.vertex_count(),
            queued = queue.len(),
            rings = geometry.ring_count(),
            "simplifier ready"
        );

        Ok(Self {
            geometry,
            queue,
            history: History::new(),
            parked,
            original_area,
            stats: SimplifyStats::default(),
        })
    }

    /// The geometry in its current state.
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Consumes the simplifier, returning the geometry.
    pub fn into_geometry(self) -> G {
        self.geometry
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.geometry.vertex_count()
    }

    /// Geometry area at construction.
    pub fn original_area(&self) -> F {
        self.original_area
    }

    /// Total triangle area removed, relative to the original area.
    pub fn relative_area_changed(&self) -> f64 {
        let changed = self.geometry.area_changed();
        let original = self.original_area;
        if original == F::zero() {
            return if changed == F::zero() { 0.0 } else { f64::INFINITY };
        }
        (changed / original).to_f64().unwrap_or(f64::INFINITY)
    }

    /// Number of removals [`undo`](Self::undo) can take back.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Makes every removal so far permanent.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Next vertex [`simplify`](Self::simplify) would remove.
    pub fn peek(&self) -> Option<VertexKey> {
        self.queue.peek().map(|(key, _)| key)
    }

    /// Number of vertices still offered for removal.
    pub fn removable_count(&self) -> usize {
        self.queue.len()
    }

    /// Operation counts since construction.
    pub fn stats(&self) -> SimplifyStats {
        self.stats
    }

    /// Removes the vertex with the least triangle area.
    pub fn simplify(&mut self) -> Result<VertexKey> {
        let (key, area) = self.queue.pop().ok_or(SimplifyError::Exhausted)?;
        let ring = ring_mut(&mut self.geometry, key.ring)?;
        if let Err(e) = ring.remove_vertex(key.index, &mut self.queue) {
            self.queue.push(key, area);
            return Err(e);
        }
        let remaining = ring.vertex_count();

        self.history.push(key);
        self.stats.removed += 1;
        trace!(ring = key.ring, index = key.index, ?area, "simplify");

        if remaining <= 3 {
            self.park(key.ring)?;
        }
        Ok(key)
    }

    /// Restores the most recently removed vertex.
    pub fn undo(&mut self) -> Result<VertexKey> {
        let key = self.history.pop().ok_or(SimplifyError::HistoryEmpty)?;
        let ring = ring_mut(&mut self.geometry, key.ring)?;
        let before = ring.vertex_count();

        if let Err(e) = ring.restore_vertex(key.index, &mut self.queue) {
            self.history.push(key);
            return Err(e);
        }
        let after = ring.vertex_count();
        let area = ring.area_of(key.index)?;

        if before <= 3 && after > 3 {
            self.unpark(key.ring)?;
        }
        self.queue.push(key, area);
        self.stats.restored += 1;
        trace!(ring = key.ring, index = key.index, "undo");
        Ok(key)
    }

    /// Permanently keeps the vertex with the least triangle area.
    ///
    /// The vertex leaves the queue but not the geometry, and is not recorded
    /// in history.
    pub fn skip(&mut self) -> Result<VertexKey> {
        let (key, _) = self.queue.pop().ok_or(SimplifyError::Exhausted)?;
        ring_mut(&mut self.geometry, key.ring)?.skip_vertex(key.index)?;
        self.stats.skipped += 1;
        trace!(ring = key.ring, index = key.index, "skip");
        Ok(key)
    }

    /// Simplifies until `conditions` are met.
    ///
    /// Removal continues while the vertex count exceeds `max_vertices`, or
    /// while it exceeds `min_vertices` and the relative area change is below
    /// `max_error`. If the last removal pushed the error above `max_error`
    /// and the count is below `max_vertices`, that removal is undone.
    ///
    /// Running out of removable vertices ends simplification early.
    pub fn simplify_to(&mut self, conditions: &StopConditions) -> Result<()> {
        conditions.validate()?;
        let StopConditions {
            max_vertices,
            min_vertices,
            max_error,
        } = *conditions;
        let has_lower_bound = min_vertices.is_some() || max_error.is_some();

        loop {
            let count = self.vertex_count();
            let exceeds_max = max_vertices.is_some_and(|max| count > max);
            let above_lower_bound = has_lower_bound
                && min_vertices.map_or(true, |min| count > min)
                && max_error.map_or(true, |err| self.relative_area_changed() < err);

            if !(exceeds_max || above_lower_bound) {
                break;
            }
            if self.queue.is_empty() {
                warn!(
                    vertices = count,
                    ?max_vertices,
                    "no removable vertices left before stop conditions were met"
                );
                break;
            }
            self.simplify()?;
        }

        let error_exceeded = max_error.is_some_and(|err| self.relative_area_changed() > err);
        let below_max = max_vertices.map_or(true, |max| self.vertex_count() < max);
        if error_exceeded && below_max && !self.history.is_empty() {
            self.undo()?;
        }

        debug!(
            vertices = self.vertex_count(),
            relative_error = self.relative_area_changed(),
            "simplified"
        );
        Ok(())
    }

    /// Whether any two edges of the geometry intersect.
    pub fn has_intersections(&self) -> bool {
        any_intersection(&self.geometry.line_segments())
    }

    /// Whether removing the next vertex would create an intersecting edge.
    ///
    /// Returns `false` when nothing is left to remove.
    pub fn will_intersect(&self) -> Result<bool> {
        let Some((key, _)) = self.queue.peek() else {
            return Ok(false);
        };
        let ring = ring_ref(&self.geometry, key.ring)?;
        let vertex = ring
            .vertex(key.index)
            .ok_or_else(|| missing_vertex(key))?;
        let (prev, next) = vertex.neighbors()?;
        let prev = ring.vertex(prev).ok_or_else(|| missing_vertex(key))?;
        let next = ring.vertex(next).ok_or_else(|| missing_vertex(key))?;

        let candidate = Segment2::new(prev.point(), next.point());
        Ok(intersects_any(candidate, &self.geometry.line_segments()))
    }

    /// Rewinds to the state just before the first removal that introduced an
    /// intersection, then clears history.
    ///
    /// Bisects over the removals in history: an intersecting state undoes
    /// half of history; a clean state whose next removal is also clean
    /// replays half the distance back to the last known intersecting count.
    /// The search ends on a clean state whose next removal intersects, so a
    /// following [`skip`](Self::skip) keeps exactly the offending vertex.
    ///
    /// Fails with [`SimplifyError::NoIntersectionFound`] if no removal in the
    /// searched range introduced an intersection.
    pub fn rewind_to_intersection(&mut self) -> Result<()> {
        let mut min_count = self.vertex_count();
        let mut rounds = 0usize;

        loop {
            rounds += 1;
            if self.has_intersections() {
                if self.history.is_empty() {
                    return Err(SimplifyError::NoIntersectionFound);
                }
                min_count = self.vertex_count();
                let target = self.history.len() / 2;
                while self.history.len() > target {
                    self.undo()?;
                }
            } else if !self.will_intersect()? {
                self.history.clear();
                let forward = self.vertex_count().saturating_sub(min_count);
                if forward == 0 {
                    return Err(SimplifyError::NoIntersectionFound);
                }
                let target = forward.div_ceil(2);
                while self.history.len() < target {
                    self.simplify()?;
                }
            } else {
                break;
            }
        }

        self.history.clear();
        debug!(
            rounds,
            vertices = self.vertex_count(),
            "rewound to first intersection"
        );
        Ok(())
    }

    fn park(&mut self, id: RingId) -> Result<()> {
        let ring = ring_ref(&self.geometry, id)?;
        let parked = self.parked.entry(id).or_default();
        for index in ring.live_indices() {
            if self.queue.remove(ring.key(index)).is_some() {
                parked.push(index);
            }
        }
        trace!(ring = id, parked = parked.len(), "ring reached minimum size");
        Ok(())
    }

    fn unpark(&mut self, id: RingId) -> Result<()> {
        let Some(indices) = self.parked.remove(&id) else {
            return Ok(());
        };
        let ring = ring_ref(&self.geometry, id)?;
        for index in indices {
            self.queue.push(ring.key(index), ring.area_of(index)?);
        }
        Ok(())
    }
}

/// Live, non-skipped slots of a ring.
fn candidates<F: CoordFloat>(ring: &Ring<F>) -> Vec<usize> {
    ring.live_indices()
        .filter(|&i| ring.vertex(i).is_some_and(|v| !v.is_skipped()))
        .collect()
}

fn ring_ref<F: CoordFloat, G: Geometry<F>>(geometry: &G, id: RingId) -> Result<&Ring<F>> {
    geometry
        .ring(id)
        .ok_or_else(|| SimplifyError::InvalidState(format!("unknown ring {id}")))
}

fn ring_mut<F: CoordFloat, G: Geometry<F>>(geometry: &mut G, id: RingId) -> Result<&mut Ring<F>> {
    geometry
        .ring_mut(id)
        .ok_or_else(|| SimplifyError::InvalidState(format!("unknown ring {id}")))
}

fn missing_vertex(key: VertexKey) -> SimplifyError {
    SimplifyError::InvalidState(format!("ring {} has no slot {}", key.ring, key.index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;
    use approx::assert_relative_eq;

    fn square() -> Ring<f64> {
        Ring::from_coords(&[[0.0, 0.0], [0.0, 4.0], [4.0, 4.0], [4.0, 0.0]])
    }

    // Bump removals have relative errors 0.0047, 0.0427, 0.1374, 0.6114.
    fn bumpy() -> Polygon<f64> {
        Polygon::new(&[vec![
            [0.0, 0.0],
            [0.0, 10.0],
            [4.0, 10.0],
            [5.0, 11.0],
            [5.0, 12.0],
            [10.0, 10.0],
            [10.0, 0.0],
        ]])
    }

    fn crossing_ring(last_spike: [f64; 2]) -> Ring<f64> {
        Ring::from_coords(&[
            [0.0, 0.0],
            [0.0, 7.0],
            [3.0, 6.0],
            [4.0, 8.0],
            [5.0, 6.0],
            [7.0, 7.0],
            [8.0, 6.0],
            [8.0, 0.0],
            [6.0, 2.0],
            last_spike,
            [2.0, 1.0],
        ])
    }

    #[test]
    fn test_simplify_removes_least_area() {
        let polygon = Polygon::new(&[vec![
            [0.0, 0.0],
            [0.0, 10.0],
            [9.0, 9.0],
            [10.0, 10.0],
            [10.0, 0.0],
        ]]);
        let mut s = Simplifier::new(polygon).unwrap();
        assert_eq!(s.simplify(), Ok(VertexKey::new(0, 2)));
        assert_eq!(s.vertex_count(), 4);
        assert_eq!(s.history_len(), 1);
    }

    #[test]
    fn test_square_stops_at_triangle() {
        let mut s = Simplifier::new(square()).unwrap();
        assert_eq!(s.removable_count(), 4);

        assert_eq!(s.simplify(), Ok(VertexKey::new(0, 0)));
        assert_eq!(s.vertex_count(), 3);
        assert_eq!(s.removable_count(), 0);
        assert_eq!(s.simplify(), Err(SimplifyError::Exhausted));
        assert_eq!(s.skip(), Err(SimplifyError::Exhausted));

        assert_eq!(
            s.geometry().to_closed_coordinates(),
            vec![[0.0, 4.0], [4.0, 4.0], [4.0, 0.0], [0.0, 4.0]]
        );
    }

    #[test]
    fn test_undo_returns_parked_vertices() {
        let mut s = Simplifier::new(square()).unwrap();
        s.simplify().unwrap();
        s.undo().unwrap();

        assert_eq!(s.vertex_count(), 4);
        assert_eq!(s.removable_count(), 4);
        assert_eq!(s.peek(), Some(VertexKey::new(0, 0)));
    }

    #[test]
    fn test_undo_is_inverse_of_simplify() {
        let mut s = Simplifier::new(bumpy()).unwrap();
        s.simplify().unwrap();
        let coords = s.geometry().to_closed_coordinates();
        let count = s.vertex_count();
        let changed = s.geometry().area_changed();

        s.simplify().unwrap();
        s.undo().unwrap();

        assert_eq!(s.vertex_count(), count);
        assert_eq!(s.geometry().to_closed_coordinates(), coords);
        assert_relative_eq!(s.geometry().area_changed(), changed, epsilon = 1e-12);
    }

    /// Reads from a square but writes to a triangle, so every removal fails.
    struct Mismatched {
        read: Ring<f64>,
        write: Ring<f64>,
    }

    impl Geometry<f64> for Mismatched {
        fn ring_ids(&self) -> std::ops::Range<RingId> {
            0..1
        }

        fn ring(&self, id: RingId) -> Option<&Ring<f64>> {
            (id == 0).then_some(&self.read)
        }

        fn ring_mut(&mut self, id: RingId) -> Option<&mut Ring<f64>> {
            (id == 0).then_some(&mut self.write)
        }

        fn area(&self) -> f64 {
            self.read.area()
        }
    }

    #[test]
    fn test_failed_removal_is_requeued() {
        let mut write = square();
        write.remove_vertex(0, &mut ()).unwrap();
        let mut s = Simplifier::new(Mismatched {
            read: square(),
            write,
        })
        .unwrap();
        assert_eq!(s.removable_count(), 4);

        assert!(matches!(s.simplify(), Err(SimplifyError::InvalidState(_))));
        assert_eq!(s.removable_count(), 4);
        assert_eq!(s.peek(), Some(VertexKey::new(0, 0)));
        assert_eq!(s.history_len(), 0);
        assert_eq!(s.stats(), SimplifyStats::default());
    }

    #[test]
    fn test_undo_with_empty_history() {
        let mut s = Simplifier::new(square()).unwrap();
        assert_eq!(s.undo(), Err(SimplifyError::HistoryEmpty));
    }

    #[test]
    fn test_removal_order_and_error() {
        let mut s = Simplifier::new(bumpy()).unwrap();
        let expected = [(3, 0.5 / 105.5), (2, 4.5 / 105.5), (4, 14.5 / 105.5), (0, 64.5 / 105.5)];
        for (index, error) in expected {
            assert_eq!(s.simplify(), Ok(VertexKey::new(0, index)));
            assert_relative_eq!(s.relative_area_changed(), error, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_simplify_to_undoes_step_over_max_error() {
        let mut s = Simplifier::new(bumpy()).unwrap();
        let conditions = StopConditions::new()
            .with_min_vertices(3)
            .with_max_error(0.01);
        s.simplify_to(&conditions).unwrap();

        assert_eq!(
            s.stats(),
            SimplifyStats {
                removed: 2,
                restored: 1,
                skipped: 0
            }
        );
        assert_eq!(s.vertex_count(), 6);
        assert_relative_eq!(s.relative_area_changed(), 0.5 / 105.5, epsilon = 1e-9);
        assert_eq!(
            s.geometry().to_closed_coordinates(),
            vec![vec![
                [0.0, 0.0],
                [0.0, 10.0],
                [4.0, 10.0],
                [5.0, 12.0],
                [10.0, 10.0],
                [10.0, 0.0],
                [0.0, 0.0]
            ]]
        );
    }

    #[test]
    fn test_simplify_to_larger_error_budget() {
        let mut s = Simplifier::new(bumpy()).unwrap();
        let conditions = StopConditions::new()
            .with_min_vertices(3)
            .with_max_error(0.05);
        s.simplify_to(&conditions).unwrap();

        assert_eq!(s.stats().removed, 3);
        assert_eq!(s.stats().restored, 1);
        assert!(s.relative_area_changed() <= 0.05);
        assert_eq!(
            s.geometry().to_closed_coordinates(),
            vec![vec![
                [0.0, 0.0],
                [0.0, 10.0],
                [5.0, 12.0],
                [10.0, 10.0],
                [10.0, 0.0],
                [0.0, 0.0]
            ]]
        );
    }

    #[test]
    fn test_max_vertices_dominates() {
        let mut s = Simplifier::new(bumpy()).unwrap();
        let conditions = StopConditions::new()
            .with_max_vertices(4)
            .with_min_vertices(6)
            .with_max_error(0.01);
        s.simplify_to(&conditions).unwrap();

        // Error is far above budget but undoing would exceed the ceiling.
        assert_eq!(s.vertex_count(), 4);
        assert_eq!(s.stats().restored, 0);
        assert!(s.relative_area_changed() > 0.01);
    }

    #[test]
    fn test_min_vertices_floor() {
        let mut s = Simplifier::new(bumpy()).unwrap();
        s.simplify_to(&StopConditions::new().with_min_vertices(5))
            .unwrap();
        assert_eq!(s.vertex_count(), 5);
    }

    #[test]
    fn test_empty_conditions_do_nothing() {
        let mut s = Simplifier::new(bumpy()).unwrap();
        s.simplify_to(&StopConditions::new()).unwrap();
        assert_eq!(s.vertex_count(), 7);
        assert_eq!(s.stats(), SimplifyStats::default());
    }

    #[test]
    fn test_simplify_to_stops_when_exhausted() {
        let mut s = Simplifier::new(square()).unwrap();
        s.simplify_to(&StopConditions::new().with_min_vertices(0))
            .unwrap();
        assert_eq!(s.vertex_count(), 3);
    }

    #[test]
    fn test_simplify_to_rejects_bad_conditions() {
        let mut s = Simplifier::new(square()).unwrap();
        assert!(matches!(
            s.simplify_to(&StopConditions::new().with_max_vertices(2)),
            Err(SimplifyError::InvalidArgument(_))
        ));
        assert!(matches!(
            s.simplify_to(&StopConditions::new().with_max_error(2.0)),
            Err(SimplifyError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_skip_is_permanent() {
        let mut s = Simplifier::new(bumpy()).unwrap();
        assert_eq!(s.skip(), Ok(VertexKey::new(0, 3)));
        assert_eq!(s.history_len(), 0);
        assert_eq!(s.vertex_count(), 7);
        assert!(s.geometry().ring(0).unwrap().vertex(3).unwrap().is_skipped());

        // Next candidate is the old runner-up.
        assert_eq!(s.simplify(), Ok(VertexKey::new(0, 2)));
        assert_eq!(s.stats().skipped, 1);
    }

    #[test]
    fn test_skipped_vertex_stays_out_after_undo_reinstates_ring() {
        let mut s = Simplifier::new(square()).unwrap();
        s.skip().unwrap();
        s.simplify().unwrap();
        assert_eq!(s.removable_count(), 0);

        s.undo().unwrap();
        // Skipped slot 0 is not queued again.
        assert_eq!(s.removable_count(), 3);
    }

    #[test]
    fn test_will_intersect_clean_removal() {
        let ring = Ring::from_coords(&[
            [0.0, 0.0],
            [0.0, 10.0],
            [5.0, 10.0],
            [5.0, 1.0],
            [6.0, 10.0],
            [10.0, 10.0],
            [10.0, 0.0],
        ]);
        let mut s = Simplifier::new(ring).unwrap();
        assert!(!s.has_intersections());

        // Slot 3 is the narrow spike; cutting it is clean.
        assert_eq!(s.peek(), Some(VertexKey::new(0, 3)));
        assert!(!s.will_intersect().unwrap());
        s.simplify().unwrap();
        assert!(!s.has_intersections());
    }

    #[test]
    fn test_will_intersect_on_empty_queue() {
        let mut s = Simplifier::new(square()).unwrap();
        s.simplify().unwrap();
        assert_eq!(s.will_intersect(), Ok(false));
    }

    #[test]
    fn test_rewind_to_intersection() {
        let mut s = Simplifier::new(crossing_ring([4.0, 7.0])).unwrap();
        while s.vertex_count() > 5 {
            s.simplify().unwrap();
        }
        assert!(s.has_intersections());

        s.rewind_to_intersection().unwrap();

        assert!(!s.has_intersections());
        assert_eq!(s.history_len(), 0);
        assert_eq!(s.peek(), Some(VertexKey::new(0, 3)));
        assert_eq!(s.will_intersect(), Ok(true));
        assert_eq!(
            s.geometry().to_closed_coordinates(),
            vec![
                [0.0, 0.0],
                [0.0, 7.0],
                [3.0, 6.0],
                [4.0, 8.0],
                [5.0, 6.0],
                [8.0, 6.0],
                [8.0, 0.0],
                [6.0, 2.0],
                [4.0, 7.0],
                [2.0, 1.0],
                [0.0, 0.0]
            ]
        );
    }

    #[test]
    fn test_rewind_without_intersection_fails() {
        let mut s = Simplifier::new(crossing_ring([4.0, 5.0])).unwrap();
        while s.vertex_count() > 5 {
            s.simplify().unwrap();
        }
        assert!(!s.has_intersections());
        assert_eq!(
            s.rewind_to_intersection(),
            Err(SimplifyError::NoIntersectionFound)
        );
    }

    #[test]
    fn test_rewind_with_no_history_fails() {
        let bowtie = Ring::from_coords(&[[0.0, 0.0], [0.0, 4.0], [4.0, 0.0], [4.0, 4.0]]);
        let mut s = Simplifier::new(bowtie).unwrap();
        assert!(s.has_intersections());
        assert_eq!(
            s.rewind_to_intersection(),
            Err(SimplifyError::NoIntersectionFound)
        );
    }

    #[test]
    fn test_small_rings_are_never_queued() {
        let polygon = Polygon::new(&[
            vec![[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]],
            vec![[1.0, 1.0], [1.0, 2.0], [2.0, 1.0]],
            vec![[5.0, 5.0], [6.0, 6.0]],
        ]);
        let s = Simplifier::new(polygon).unwrap();
        assert_eq!(s.removable_count(), 4);
        assert_eq!(s.vertex_count(), 9);
    }

    #[test]
    fn test_zero_area_geometry() {
        let flat = Ring::from_coords(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]]);
        let mut s = Simplifier::new(flat).unwrap();
        assert_eq!(s.relative_area_changed(), 0.0);
        s.simplify().unwrap();
        assert_eq!(s.relative_area_changed(), 0.0);
    }
}
