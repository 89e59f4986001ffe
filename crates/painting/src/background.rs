//! Background image import
//!
//! The imported picture is decoded, aspect-fit to the viewport and kept as the
//! base layer strokes are painted over. The fitted size may overflow the
//! viewport; only the part inside the viewport is ever resampled.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use tracing::debug;

use crate::error::CanvasError;

/// A decoded background and its fitted size
///
/// The fitted size is fixed when the picture is imported. `image()` holds the
/// top-left `viewport`-sized window of the fitted picture.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundRaster {
    source: RgbaImage,
    /// Size the picture was fit to, possibly larger than the viewport
    size: (u32, u32),
    visible: RgbaImage,
}

impl BackgroundRaster {
    /// Fit `source` to a `view_width` x `view_height` viewport
    pub fn fit(source: RgbaImage, view_width: u32, view_height: u32) -> Self {
        let size = fit_to_viewport(source.width(), source.height(), view_width, view_height);
        let visible = scale_region(&source, size, view_width, view_height);
        Self {
            source,
            size,
            visible,
        }
    }

    /// Recompute the visible window for a new viewport, keeping the fitted size
    pub fn reclip(&mut self, view_width: u32, view_height: u32) {
        self.visible = scale_region(&self.source, self.size, view_width, view_height);
    }

    /// The part of the fitted picture inside the viewport
    pub fn image(&self) -> &RgbaImage {
        &self.visible
    }

    /// Fitted width
    pub fn width(&self) -> u32 {
        self.size.0
    }

    /// Fitted height
    pub fn height(&self) -> u32 {
        self.size.1
    }

    pub fn source_size(&self) -> (u32, u32) {
        self.source.dimensions()
    }
}

/// Decode image bytes in any supported format
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, CanvasError> {
    let decoded = image::load_from_memory(bytes)?;
    debug!(
        "Decoded background {}x{} ({} bytes)",
        decoded.width(),
        decoded.height(),
        bytes.len()
    );
    Ok(decoded.to_rgba8())
}

/// Target size for a `src_width` x `src_height` picture in the viewport
///
/// The viewport's longer side drives the fit: a landscape viewport fits the
/// picture to its width, anything else fits to its height. The other side
/// follows the picture's aspect ratio and may overflow the viewport. Both
/// sides are clamped to `1..=u32::MAX`.
pub fn fit_to_viewport(src_width: u32, src_height: u32, view_width: u32, view_height: u32) -> (u32, u32) {
    let aspect_ratio = src_width.max(1) as f64 / src_height.max(1) as f64;
    let side = |v: f64| v.trunc().clamp(1.0, u32::MAX as f64) as u32;

    if view_width > view_height {
        (view_width.max(1), side(view_width as f64 / aspect_ratio))
    } else {
        (side(view_height as f64 * aspect_ratio), view_height.max(1))
    }
}

/// Resize `source` for the viewport with bilinear filtering, cropped to the viewport
pub fn scale_to_viewport(source: &RgbaImage, view_width: u32, view_height: u32) -> RgbaImage {
    let size = fit_to_viewport(source.width(), source.height(), view_width, view_height);
    scale_region(source, size, view_width, view_height)
}

/// Resample the part of `source` that lands inside the viewport once the
/// whole picture is scaled to `size`
fn scale_region(source: &RgbaImage, size: (u32, u32), view_width: u32, view_height: u32) -> RgbaImage {
    let (width, height) = size;
    let visible_width = width.min(view_width.max(1));
    let visible_height = height.min(view_height.max(1));
    if source.width() == 0 || source.height() == 0 {
        return RgbaImage::new(visible_width, visible_height);
    }

    let crop = |src: u32, visible: u32, fitted: u32| {
        let exact = src as f64 * visible as f64 / fitted as f64;
        (exact.ceil() as u32).clamp(1, src)
    };
    let crop_width = crop(source.width(), visible_width, width);
    let crop_height = crop(source.height(), visible_height, height);

    debug!(
        "Scaling background {}x{} (fit {}x{}): {}x{} source region -> {}x{}",
        source.width(),
        source.height(),
        width,
        height,
        crop_width,
        crop_height,
        visible_width,
        visible_height
    );
    let region = imageops::crop_imm(source, 0, 0, crop_width, crop_height).to_image();
    imageops::resize(&region, visible_width, visible_height, FilterType::Triangle)
}
