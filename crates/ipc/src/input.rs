//! Pointer input events.

use serde::{Deserialize, Serialize};

/// Pointer input in canvas-local coordinates.
///
/// The host translates touch or mouse coordinates into canvas space before
/// sending them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerMessage {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
}
