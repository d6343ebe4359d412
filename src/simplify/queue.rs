//! Indexed min-heap of vertices keyed by triangle area.

use crate::geometry::{VertexKey, VertexObserver};
use num_traits::Float;
use priority_queue::PriorityQueue;
use std::cmp::Ordering;

/// Heap priority: smaller area first, then smaller key.
#[derive(Debug, Clone, Copy)]
struct AreaPriority<F> {
    area: F,
    key: VertexKey,
}

impl<F: Float> PartialEq for AreaPriority<F> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<F: Float> Eq for AreaPriority<F> {}

impl<F: Float> PartialOrd for AreaPriority<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Ord for AreaPriority<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: the max-heap must yield the smallest area.
        other
            .area
            .partial_cmp(&self.area)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.key.cmp(&self.key))
    }
}

/// Removal candidates ordered by least triangle area.
///
/// Entries are addressed by [`VertexKey`], so a neighbor whose area changed
/// is re-prioritised in place in O(log n).
#[derive(Debug, Clone)]
pub struct AreaQueue<F> {
    heap: PriorityQueue<VertexKey, AreaPriority<F>>,
}

impl<F: Float> Default for AreaQueue<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> AreaQueue<F> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            heap: PriorityQueue::new(),
        }
    }

    /// Inserts `key`, or updates its area if already queued.
    pub fn push(&mut self, key: VertexKey, area: F) {
        self.heap.push(key, AreaPriority { area, key });
    }

    /// Removes and returns the vertex with the least area.
    pub fn pop(&mut self) -> Option<(VertexKey, F)> {
        self.heap.pop().map(|(key, p)| (key, p.area))
    }

    /// The vertex with the least area, without removing it.
    pub fn peek(&self) -> Option<(VertexKey, F)> {
        self.heap.peek().map(|(&key, p)| (key, p.area))
    }

    /// Updates the area of a queued vertex. Returns `false` if not queued.
    pub fn update(&mut self, key: VertexKey, area: F) -> bool {
        self.heap
            .change_priority(&key, AreaPriority { area, key })
            .is_some()
    }

    /// Takes `key` out of the queue, returning its area if it was queued.
    pub fn remove(&mut self, key: VertexKey) -> Option<F> {
        self.heap.remove(&key).map(|(_, p)| p.area)
    }

    /// Number of queued vertices.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no vertex is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<F: Float> VertexObserver<F> for AreaQueue<F> {
    // Vertices that are not queued (skipped or parked) are left alone.
    fn vertex_changed(&mut self, key: VertexKey, area: F) {
        self.update(key, area);
    }
}
