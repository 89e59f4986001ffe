pub use fingerpaint_config::{DEFAULT_BRUSH_SIZE, DEFAULT_DENSITY};

/// Width of the anti-aliased edge band around a stroke, in pixels.
pub const EDGE_FEATHER: f32 = 1.0;

/// Movement below this distance (pixels) is treated as no movement.
pub const MIN_SEGMENT_LENGTH: f32 = 0.001;
