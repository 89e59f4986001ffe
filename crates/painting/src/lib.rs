//! Fingerpaint painting core - strokes, history and compositing
//!
//! This crate provides the finger-painting canvas and its building blocks:
//! - [`canvas::StrokeCanvas`] - Stroke input, undo/redo, background, rendering
//! - [`types::Stroke`] - A committed stroke (points, color, thickness)
//! - [`history`] - Committed strokes and the undo buffer
//! - [`brush`] - Brush state applied to new strokes
//! - [`color`] - Color string parsing
//! - [`surface`] - CPU RGBA surface for compositing
//! - [`raster`] - Round-capped stroke rasterization
//! - [`background`] - Background decode and aspect-fit

pub mod background;
pub mod brush;
pub mod canvas;
pub mod color;
pub mod constants;
pub mod error;
pub mod history;
pub mod raster;
pub mod surface;
pub mod types;

pub use background::*;
pub use brush::*;
pub use canvas::*;
pub use color::*;
pub use constants::*;
pub use error::*;
pub use history::*;
pub use raster::*;
pub use surface::*;
pub use types::*;
