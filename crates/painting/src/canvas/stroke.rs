//! Stroke input for the canvas

use tracing::{debug, warn};

use crate::error::CanvasError;
use crate::types::{Point, PointerEvent};

use super::StrokeCanvas;

impl StrokeCanvas {
    /// Begin a stroke at `point` with the current brush
    ///
    /// A stroke that is still in progress (a second pointer-down without a
    /// lift) is committed first, so ink the user has already seen is kept.
    pub fn begin_stroke(&mut self, point: Point) {
        if let Some(previous) = self.in_progress.take() {
            warn!(
                "begin_stroke: stroke with {} points still active, committing it",
                previous.points().len()
            );
            self.history.commit(previous);
        }

        debug!(
            "begin_stroke at ({:.1}, {:.1}), thickness={}",
            point.x,
            point.y,
            self.brush.thickness()
        );
        self.in_progress = Some(self.brush.stroke_at(point));
    }

    /// Continue the active stroke to `point`
    pub fn extend_stroke(&mut self, point: Point) -> Result<(), CanvasError> {
        let stroke = self
            .in_progress
            .as_mut()
            .ok_or(CanvasError::InvalidState("extend_stroke: no active stroke"))?;
        stroke.push(point);
        Ok(())
    }

    /// Finish the active stroke and append it to the committed strokes
    ///
    /// A tap (single point) is committed too and renders as a dot.
    pub fn commit_stroke(&mut self) -> Result<(), CanvasError> {
        let stroke = self
            .in_progress
            .take()
            .ok_or(CanvasError::InvalidState("commit_stroke: no active stroke"))?;
        debug!(
            "commit_stroke: {} points{}",
            stroke.points().len(),
            if stroke.is_dot() { " (dot)" } else { "" }
        );
        self.history.commit(stroke);
        Ok(())
    }

    /// Drop the active stroke without committing it
    ///
    /// Returns true if a stroke was discarded
    pub fn cancel_stroke(&mut self) -> bool {
        self.in_progress.take().is_some()
    }

    /// Check if a stroke is currently in progress
    pub fn is_stroking(&self) -> bool {
        self.in_progress.is_some()
    }

    /// Route a pointer event to the stroke operations
    ///
    /// Returns true if the canvas changed. Moves and lifts without a
    /// preceding pointer-down are logged and ignored.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let result = match event {
            PointerEvent::Down(point) => {
                self.begin_stroke(point);
                Ok(())
            }
            PointerEvent::Move(point) => self.extend_stroke(point),
            PointerEvent::Up => self.commit_stroke(),
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                debug!("Ignoring {:?}: {}", event, e);
                false
            }
        }
    }
}
