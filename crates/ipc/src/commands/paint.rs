//! Canvas command types for the painting system.

use serde::{Deserialize, Serialize};

pub use fingerpaint_config::BrushSize;

/// Commands for controlling the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CanvasCommand {
    /// Undo last stroke
    Undo,
    /// Redo last undone stroke
    Redo,
    /// Remove all strokes (not undoable)
    Clear,
    /// Set brush thickness in device-independent units
    SetBrushThickness { size: f32 },
    /// Set brush thickness from a chooser preset
    SetBrushPreset { preset: BrushSize },
    /// Set brush color from a color string ("#RRGGBB", "#AARRGGBB" or a name)
    SetBrushColor { color: String },
    /// Set brush color from the configured palette
    SelectPalette { index: usize },
    /// Import an image file as the background
    SetBackground { path: String },
    /// Remove the background
    ClearBackground,
    /// Viewport changed size
    Resize { width: u32, height: u32 },
    /// Write the composite image; a directory or missing path gets a generated file name
    Export { path: Option<String> },
}
