//! The finger-painting canvas
//!
//! This module provides [`StrokeCanvas`], which connects:
//! - Pointer input (begin/extend/commit, or [`PointerEvent`](crate::PointerEvent))
//! - Brush state for new strokes
//! - Stroke history with undo/redo
//! - The base layer (blank color and optional background picture)
//! - Composite rendering of all of the above
//!
//! The canvas is a plain value owned by whatever drives input and rendering.
//! All operations are synchronous; a host that decodes backgrounds on another
//! thread hands the result back through [`StrokeCanvas::set_decoded_background`].

mod render;
mod stroke;
mod undo;

use image::RgbaImage;
use tracing::debug;

use crate::background::{BackgroundRaster, decode_image};
use crate::brush::BrushState;
use crate::color::parse_color;
use crate::constants::DEFAULT_DENSITY;
use crate::error::CanvasError;
use crate::history::StrokeHistory;
use crate::surface::CpuSurface;
use crate::types::{Color, Stroke};

/// Stroke canvas for one drawing session
pub struct StrokeCanvas {
    /// Viewport dimensions in pixels
    pub(crate) width: u32,
    pub(crate) height: u32,
    /// Device pixels per device-independent unit
    pub(crate) density: f32,
    /// Color of the surface when no background is set
    pub(crate) blank_color: Color,
    /// Brush applied to the next stroke
    pub(crate) brush: BrushState,
    /// Committed strokes and undo buffer
    pub(crate) history: StrokeHistory,
    /// Stroke being drawn (None between gestures)
    pub(crate) in_progress: Option<Stroke>,
    /// Imported background picture
    pub(crate) background: Option<BackgroundRaster>,
    /// Blank color plus background, the layer strokes are painted over
    pub(crate) base: CpuSurface,
}

impl StrokeCanvas {
    /// Create a canvas for a `width` x `height` viewport
    pub fn new(width: u32, height: u32) -> Self {
        let mut canvas = Self {
            width,
            height,
            density: DEFAULT_DENSITY,
            blank_color: Color::WHITE,
            brush: BrushState::default(),
            history: StrokeHistory::new(),
            in_progress: None,
            background: None,
            base: CpuSurface::new(0, 0),
        };
        canvas.rebuild_base();
        canvas
    }

    /// Set the display density used to convert brush thickness to pixels
    pub fn with_density(mut self, density: f32) -> Self {
        if density.is_finite() && density > 0.0 {
            self.density = density;
        } else {
            debug!("Ignoring invalid density {}", density);
        }
        self
    }

    /// Set the color of the surface when no background is set
    pub fn with_blank_color(mut self, color: Color) -> Self {
        self.blank_color = color;
        self.rebuild_base();
        self
    }

    /// Start with a given brush instead of the default
    pub fn with_brush(mut self, brush: BrushState) -> Self {
        self.brush = brush;
        self
    }

    /// Bound how many undone strokes are kept for redo (see
    /// [`StrokeHistory::with_max_redo_levels`])
    pub fn with_max_redo_levels(mut self, levels: usize) -> Self {
        self.history = std::mem::take(&mut self.history).with_max_redo_levels(levels);
        self
    }

    /// Get the viewport width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the viewport height
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    /// Committed strokes in paint order
    pub fn committed(&self) -> &[Stroke] {
        self.history.committed()
    }

    /// Undone strokes, next redo last
    pub fn undone(&self) -> &[Stroke] {
        self.history.undone()
    }

    /// The stroke currently being drawn
    pub fn in_progress(&self) -> Option<&Stroke> {
        self.in_progress.as_ref()
    }

    pub fn background(&self) -> Option<&BackgroundRaster> {
        self.background.as_ref()
    }

    /// Set the brush thickness for subsequent strokes
    pub fn set_brush_thickness(&mut self, thickness: f32) -> Result<(), CanvasError> {
        self.brush.set_thickness(thickness)
    }

    /// Set the brush color for subsequent strokes from a color string
    ///
    /// On failure the current color is kept.
    pub fn set_brush_color(&mut self, color: &str) -> Result<(), CanvasError> {
        let color = parse_color(color)?;
        debug!("Brush color {:?} -> {:?}", self.brush.color(), color);
        self.brush.set_color(color);
        Ok(())
    }

    /// Decode `bytes` and use the picture as the background
    ///
    /// On failure the current background is kept.
    pub fn set_background(&mut self, bytes: &[u8]) -> Result<(), CanvasError> {
        let image = decode_image(bytes)?;
        self.set_decoded_background(image);
        Ok(())
    }

    /// Use an already decoded picture as the background
    pub fn set_decoded_background(&mut self, image: RgbaImage) {
        let background = BackgroundRaster::fit(image, self.width, self.height);
        let (source_width, source_height) = background.source_size();
        debug!(
            "Background set: {}x{} source -> {}x{}",
            source_width,
            source_height,
            background.width(),
            background.height()
        );
        self.background = Some(background);
        self.rebuild_base();
    }

    /// Remove the background, returning to the blank surface
    pub fn clear_background(&mut self) {
        if self.background.take().is_some() {
            self.rebuild_base();
        }
    }

    /// Reallocate the base layer for a new viewport size
    ///
    /// The background keeps the size it was fit to when imported; it is not
    /// refit, only its visible window follows the new viewport.
    pub fn on_viewport_resize(&mut self, width: u32, height: u32) {
        debug!(
            "Viewport resize {}x{} -> {}x{}",
            self.width, self.height, width, height
        );
        self.width = width;
        self.height = height;
        if let Some(background) = &mut self.background {
            background.reclip(width, height);
        }
        self.rebuild_base();
    }

    fn rebuild_base(&mut self) {
        let mut base = CpuSurface::new(self.width, self.height);
        base.clear(self.blank_color.to_array());
        if let Some(background) = &self.background {
            base.draw_image(background.image(), 0, 0);
        }
        self.base = base;
    }
}
