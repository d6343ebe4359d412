//! Removal history.

use crate::geometry::VertexKey;

/// LIFO record of removed vertices.
///
/// Only the most recent removal can be taken back out, which is the order
/// rings accept restorations in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    stack: Vec<VertexKey>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a removal.
    pub fn push(&mut self, key: VertexKey) {
        self.stack.push(key);
    }

    /// Takes back the most recent removal.
    pub fn pop(&mut self) -> Option<VertexKey> {
        self.stack.pop()
    }

    /// Number of recorded removals.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Forgets every recorded removal.
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}
