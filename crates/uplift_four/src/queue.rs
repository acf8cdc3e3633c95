//! Placement-order queue of positions for one color.

use crate::error::{EngineError, EngineErrorKind};
use crate::pos::Pos;
use std::collections::VecDeque;
use tracing::{instrument, warn};

/// FIFO record of where one color's pieces sit, oldest first.
///
/// The front is the piece uplift acts on next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PosQueue {
    entries: VecDeque<Pos>,
}

impl PosQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a position at the back.
    pub fn enqueue(&mut self, pos: Pos) {
        self.entries.push_back(pos);
    }

    /// Removes and returns the oldest position.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::EmptyQueue`] when there is nothing to remove.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn dequeue(&mut self) -> Result<Pos, EngineError> {
        self.entries.pop_front().ok_or_else(|| {
            warn!("Dequeue from empty position queue");
            EngineError::new(EngineErrorKind::EmptyQueue)
        })
    }

    /// Returns the oldest position without removing it.
    pub fn front(&self) -> Option<Pos> {
        self.entries.front().copied()
    }

    /// Number of queued positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no positions are queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates oldest to newest without consuming.
    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.entries.iter().copied()
    }

    /// Rebuilds the queue with every position passed through `f`, keeping order.
    pub fn remap(&mut self, f: impl Fn(Pos) -> Pos) {
        self.entries = self.entries.iter().map(|&p| f(p)).collect();
    }
}

impl FromIterator<Pos> for PosQueue {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_queue_is_empty() {
        let q = PosQueue::new();
        assert_eq!(q.len(), 0);
        assert!(q.is_empty());
        assert_eq!(q.front(), None);
    }

    #[test]
    fn test_enqueue_appends_at_back() {
        let mut q = PosQueue::new();
        q.enqueue(Pos::new(1, 2));
        assert_eq!(q.len(), 1);
        assert_eq!(q.front(), Some(Pos::new(1, 2)));

        q.enqueue(Pos::new(3, 4));
        assert_eq!(q.len(), 2);
        assert_eq!(q.front(), Some(Pos::new(1, 2)));
        assert_eq!(q.iter().collect::<Vec<_>>(), vec![Pos::new(1, 2), Pos::new(3, 4)]);
    }

    #[test]
    fn test_dequeue_is_fifo() {
        let mut q = PosQueue::new();
        q.enqueue(Pos::new(1, 2));
        q.enqueue(Pos::new(3, 4));

        assert_eq!(q.dequeue().ok(), Some(Pos::new(1, 2)));
        assert_eq!(q.len(), 1);
        assert_eq!(q.dequeue().ok(), Some(Pos::new(3, 4)));
        assert!(q.is_empty());
    }

    #[test]
    fn test_dequeue_empty_is_error_not_origin() {
        let mut q = PosQueue::new();
        let err = q.dequeue().unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::EmptyQueue);
    }

    #[test]
    fn test_remap_keeps_order() {
        let mut q: PosQueue = [Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1)]
            .into_iter()
            .collect();
        q.remap(|p| Pos::new(p.col, p.row));
        assert_eq!(
            q.iter().collect::<Vec<_>>(),
            vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(1, 1)]
        );
    }
}
