//! Composite rendering

use image::RgbaImage;

use crate::raster::rasterize_stroke;
use crate::surface::CpuSurface;

use super::StrokeCanvas;

impl StrokeCanvas {
    /// Render the canvas as it should appear on screen
    ///
    /// Base layer (blank color, then background) with every committed stroke
    /// painted in order, then the active stroke. Does not modify the canvas.
    pub fn render_composite(&self) -> RgbaImage {
        self.render_surface().to_rgba_image()
    }

    /// Render into a CPU surface without quantizing
    pub fn render_surface(&self) -> CpuSurface {
        let mut surface = self.base.clone();
        let strokes = self.history.committed().iter().chain(self.in_progress.as_ref());
        for stroke in strokes {
            rasterize_stroke(&mut surface, stroke, self.density);
        }
        surface
    }
}
