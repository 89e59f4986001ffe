//! CPU RGBA surface the composite is painted on

use image::RgbaImage;

/// Straight-alpha RGBA surface, `[r, g, b, a]` in 0.0-1.0, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct CpuSurface {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[f32; 4]>,
}

impl CpuSurface {
    /// Allocate a transparent surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; width as usize * height as usize],
        }
    }

    /// Fill every pixel with `color`
    pub fn clear(&mut self, color: [f32; 4]) {
        self.pixels.fill(color);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Pixel at (x, y), None outside the surface
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrite the pixel at (x, y); ignored outside the surface
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [f32; 4]) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Source-over `color` at `opacity` onto the pixel at (x, y)
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: [f32; 4], opacity: f32) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let src_alpha = (color[3] * opacity).clamp(0.0, 1.0);
        if src_alpha <= 0.0 {
            return;
        }

        let below = self.pixels[i];
        let below_weight = below[3] * (1.0 - src_alpha);
        let out_alpha = src_alpha + below_weight;
        let mix = |c: usize| (color[c] * src_alpha + below[c] * below_weight) / out_alpha;

        self.pixels[i] = [mix(0), mix(1), mix(2), out_alpha];
    }

    /// Composite an image with its top-left corner at (x, y), clipped to the surface
    ///
    /// Only the overlap with the surface is visited.
    pub fn draw_image(&mut self, image: &RgbaImage, x: i64, y: i64) {
        let x_range = x.max(0)..(x + image.width() as i64).min(self.width as i64);
        let y_range = y.max(0)..(y + image.height() as i64).min(self.height as i64);

        for py in y_range {
            for px in x_range.clone() {
                let pixel = image.get_pixel((px - x) as u32, (py - y) as u32);
                let color = pixel.0.map(|c| c as f32 / 255.0);
                self.blend_pixel(px as u32, py as u32, color, 1.0);
            }
        }
    }

    /// Quantize the surface to an 8-bit RGBA image
    pub fn to_rgba_image(&self) -> RgbaImage {
        let quantized: Vec<[u8; 4]> = self
            .pixels
            .iter()
            .map(|p| p.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8))
            .collect();

        let mut image = RgbaImage::new(self.width, self.height);
        image.copy_from_slice(bytemuck::cast_slice(&quantized));
        image
    }

    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }
}
