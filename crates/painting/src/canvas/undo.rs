//! Undo, redo and clear for the canvas

use tracing::debug;

use super::StrokeCanvas;

impl StrokeCanvas {
    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undo the last committed stroke
    ///
    /// Returns true if an undo was performed, false if no stroke is committed
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Redo the most recently undone stroke
    ///
    /// The stroke is re-appended on top of the current committed strokes.
    /// Returns true if a redo was performed, false if nothing was undone
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Remove every stroke, including the undo buffer and any active stroke
    ///
    /// This cannot be undone. The background is kept.
    pub fn clear(&mut self) {
        debug!(
            "Clearing canvas: {} committed, {} undone, active={}",
            self.history.committed().len(),
            self.history.undone().len(),
            self.in_progress.is_some()
        );
        self.history.clear();
        self.in_progress = None;
    }
}
