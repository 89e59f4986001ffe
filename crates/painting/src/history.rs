//! Committed strokes and the undo buffer
//!
//! Strokes move between the two lists by value, so a stroke is always owned by
//! exactly one of them.

use tracing::debug;

use crate::types::Stroke;

/// Stroke history for a canvas session
#[derive(Debug, Clone, Default)]
pub struct StrokeHistory {
    /// Committed strokes in z-order (later paints over earlier)
    committed: Vec<Stroke>,
    /// Undone strokes, most recently undone at the end
    undone: Vec<Stroke>,
    /// Maximum undone strokes kept for redo (None = unbounded)
    max_redo_levels: Option<usize>,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound how many undone strokes are kept for redo
    ///
    /// When an undo pushes the buffer past `levels`, the oldest undone stroke
    /// is discarded and can no longer be redone.
    pub fn with_max_redo_levels(mut self, levels: usize) -> Self {
        self.max_redo_levels = Some(levels);
        self
    }

    /// Append a new stroke. New input invalidates redo history.
    pub fn commit(&mut self, stroke: Stroke) {
        if !self.undone.is_empty() {
            debug!("Commit discards {} redo entries", self.undone.len());
            self.undone.clear();
        }
        self.committed.push(stroke);
    }

    /// Move the most recent committed stroke into the undo buffer
    ///
    /// Returns true if an undo was performed, false if nothing was committed
    pub fn undo(&mut self) -> bool {
        let Some(stroke) = self.committed.pop() else {
            debug!("Undo: no strokes committed");
            return false;
        };
        self.undone.push(stroke);

        if let Some(max) = self.max_redo_levels {
            while self.undone.len() > max {
                self.undone.remove(0);
            }
        }

        debug!(
            "Undo: {} committed, {} undone",
            self.committed.len(),
            self.undone.len()
        );
        true
    }

    /// Re-append the most recently undone stroke to the committed list
    ///
    /// Returns true if a redo was performed, false if the undo buffer is empty
    pub fn redo(&mut self) -> bool {
        let Some(stroke) = self.undone.pop() else {
            debug!("Redo: undo buffer empty");
            return false;
        };
        self.committed.push(stroke);
        debug!(
            "Redo: {} committed, {} undone",
            self.committed.len(),
            self.undone.len()
        );
        true
    }

    /// Drop everything. Not undoable.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.undone.clear();
    }

    pub fn committed(&self) -> &[Stroke] {
        &self.committed
    }

    pub fn undone(&self) -> &[Stroke] {
        &self.undone
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Point};

    fn stroke(x: f32) -> Stroke {
        Stroke::new(Point::new(x, 0.0), Color::BLACK, 10.0)
    }

    #[test]
    fn test_commit_counts() {
        let mut history = StrokeHistory::new();
        for i in 0..5 {
            history.commit(stroke(i as f32));
        }
        assert_eq!(history.committed().len(), 5);
        assert!(history.undone().is_empty());
    }

    #[test]
    fn test_undo_redo_roundtrip() {
        let mut history = StrokeHistory::new();
        history.commit(stroke(1.0));
        history.commit(stroke(2.0));
        let before = history.committed().to_vec();

        assert!(history.undo());
        assert_eq!(history.committed().len(), 1);
        assert_eq!(history.undone(), &[stroke(2.0)]);

        assert!(history.redo());
        assert_eq!(history.committed(), before.as_slice());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_empty_undo_redo_are_noops() {
        let mut history = StrokeHistory::new();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.committed().is_empty());
        assert!(history.undone().is_empty());
    }

    #[test]
    fn test_commit_after_undo_clears_redo() {
        let mut history = StrokeHistory::new();
        history.commit(stroke(1.0));
        history.commit(stroke(2.0));
        history.undo();
        assert!(history.can_redo());

        history.commit(stroke(3.0));
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(history.committed(), &[stroke(1.0), stroke(3.0)]);
    }

    #[test]
    fn test_clear() {
        let mut history = StrokeHistory::new();
        history.commit(stroke(1.0));
        history.commit(stroke(2.0));
        history.undo();

        history.clear();
        assert!(history.committed().is_empty());
        assert!(history.undone().is_empty());
    }

    #[test]
    fn test_max_redo_levels_discards_oldest() {
        let mut history = StrokeHistory::new().with_max_redo_levels(2);
        for i in 0..4 {
            history.commit(stroke(i as f32));
        }
        for _ in 0..4 {
            history.undo();
        }
        assert!(history.committed().is_empty());
        // Only the two most recently undone strokes survive
        assert_eq!(history.undone(), &[stroke(1.0), stroke(0.0)]);

        assert!(history.redo());
        assert!(history.redo());
        assert!(!history.redo());
        assert_eq!(history.committed(), &[stroke(0.0), stroke(1.0)]);
    }
}
