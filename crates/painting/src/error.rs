//! Error types for canvas operations.

/// Errors that can occur while driving a [`StrokeCanvas`](crate::StrokeCanvas).
///
/// Every variant is recoverable: the call that produced it left the canvas
/// untouched.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    #[error("Failed to decode background image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    #[error("Invalid brush thickness: {0}")]
    InvalidThickness(f32),
}
