//! Snapshot-based undo history.

use super::shape::ColoredShape;

/// Last-in-first-out stack of full canvas snapshots.
///
/// Every entry is a complete, independent copy of the shape list. Restoring
/// replaces the live canvas wholesale, so there is no diffing to get wrong.
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Vec<ColoredShape>>,
    /// Maximum number of snapshots kept (0 = unlimited)
    limit: usize,
}

impl History {
    /// Creates an empty history. A `limit` of 0 keeps every snapshot.
    pub fn new(limit: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Pushes a snapshot, discarding the oldest one when the limit is exceeded.
    pub fn push(&mut self, snapshot: Vec<ColoredShape>) {
        self.snapshots.push(snapshot);
        if self.limit > 0 && self.snapshots.len() > self.limit {
            let excess = self.snapshots.len() - self.limit;
            self.snapshots.drain(..excess);
            log::debug!("Undo history limit ({}) reached; dropped oldest", self.limit);
        }
    }

    /// Removes and returns the most recent snapshot.
    pub fn pop(&mut self) -> Option<Vec<ColoredShape>> {
        self.snapshots.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Shape, color::BLACK};

    fn state(n: i32) -> Vec<ColoredShape> {
        (0..n)
            .map(|i| ColoredShape::new(Shape::rect_from_diagonal(i, i, i + 1, i + 1), BLACK, 1.0))
            .collect()
    }

    #[test]
    fn pops_in_reverse_order() {
        let mut history = History::new(0);
        for n in 0..4 {
            history.push(state(n));
        }
        assert_eq!(history.len(), 4);
        for n in (0..4).rev() {
            assert_eq!(history.pop(), Some(state(n)));
        }
        assert!(history.pop().is_none());
    }

    #[test]
    fn limit_discards_oldest() {
        let mut history = History::new(2);
        history.push(state(1));
        history.push(state(2));
        history.push(state(3));
        assert_eq!(history.len(), 2);
        assert_eq!(history.pop(), Some(state(3)));
        assert_eq!(history.pop(), Some(state(2)));
        assert!(history.is_empty());
    }
}
