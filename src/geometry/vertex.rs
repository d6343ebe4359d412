//! Ring vertex record.

use crate::error::{Result, SimplifyError};
use crate::primitives::Point2;
use num_traits::Float;
use std::cell::Cell;

/// A node in a ring's circular doubly-linked list.
///
/// Links are slot indices into the owning ring. The triangle area formed
/// with the current neighbors is cached and cleared whenever a link changes;
/// it is recomputed on the next read.
#[derive(Debug, Clone)]
pub struct Vertex<F: Copy> {
    point: Point2<F>,
    index: usize,
    prev: Option<usize>,
    next: Option<usize>,
    area: Cell<Option<F>>,
    skipped: bool,
}

impl<F: Float> Vertex<F> {
    /// Creates an unlinked vertex for slot `index`.
    pub fn new(point: Point2<F>, index: usize) -> Self {
        Self {
            point,
            index,
            prev: None,
            next: None,
            area: Cell::new(None),
            skipped: false,
        }
    }

    /// Position of the vertex.
    #[inline]
    pub fn point(&self) -> Point2<F> {
        self.point
    }

    /// Slot of this vertex in its ring.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Slot of the previous vertex, if linked.
    #[inline]
    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    /// Slot of the next vertex, if linked.
    #[inline]
    pub fn next(&self) -> Option<usize> {
        self.next
    }

    /// Returns `(prev, next)`, failing if either link is unset.
    pub fn neighbors(&self) -> Result<(usize, usize)> {
        let prev = self
            .prev
            .ok_or_else(|| SimplifyError::InvalidState("prev not set".into()))?;
        let next = self
            .next
            .ok_or_else(|| SimplifyError::InvalidState("next not set".into()))?;
        Ok((prev, next))
    }

    /// Relinks the previous vertex and clears the cached area.
    pub fn set_prev(&mut self, prev: Option<usize>) {
        self.prev = prev;
        self.area.set(None);
    }

    /// Relinks the next vertex and clears the cached area.
    pub fn set_next(&mut self, next: Option<usize>) {
        self.next = next;
        self.area.set(None);
    }

    /// Cached triangle area, if it has been computed since the last relink.
    #[inline]
    pub fn cached_area(&self) -> Option<F> {
        self.area.get()
    }

    /// Triangle area with the given neighbor points, cached until relinked.
    pub(crate) fn area_with(&self, prev: Point2<F>, next: Point2<F>) -> F {
        match self.area.get() {
            Some(area) => area,
            None => {
                let area = self.point.triangle_area(prev, next);
                self.area.set(Some(area));
                area
            }
        }
    }

    /// Skipped vertices are never offered for removal again.
    #[inline]
    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    pub(crate) fn mark_skipped(&mut self) {
        self.skipped = true;
    }
}
