//! Brush state applied to new strokes

use tracing::debug;

use crate::constants::DEFAULT_BRUSH_SIZE;
use crate::error::CanvasError;
use crate::types::{Color, Point, Stroke};

/// Current brush color and thickness.
///
/// Changes only affect strokes started afterwards; committed strokes keep the
/// brush they were drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    color: Color,
    /// Thickness in device-independent units
    thickness: f32,
}

impl Default for BrushState {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            thickness: DEFAULT_BRUSH_SIZE,
        }
    }
}

impl BrushState {
    pub fn new(color: Color, thickness: f32) -> Result<Self, CanvasError> {
        let mut brush = Self {
            color,
            ..Default::default()
        };
        brush.set_thickness(thickness)?;
        Ok(brush)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Set the thickness for subsequent strokes
    ///
    /// Rejects non-finite and non-positive values, leaving the brush unchanged.
    pub fn set_thickness(&mut self, thickness: f32) -> Result<(), CanvasError> {
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(CanvasError::InvalidThickness(thickness));
        }
        debug!("Brush thickness {} -> {}", self.thickness, thickness);
        self.thickness = thickness;
        Ok(())
    }

    /// Start a new stroke at `origin` with this brush
    pub fn stroke_at(&self, origin: Point) -> Stroke {
        Stroke::new(origin, self.color, self.thickness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_default() {
        let brush = BrushState::default();
        assert_eq!(brush.color(), Color::BLACK);
        assert_eq!(brush.thickness(), 20.0);
        assert_eq!(
            brush.thickness(),
            fingerpaint_config::CanvasConfig::default().brush_size
        );
    }

    #[test]
    fn test_brush_rejects_bad_thickness() {
        let mut brush = BrushState::default();
        for bad in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                brush.set_thickness(bad),
                Err(CanvasError::InvalidThickness(_))
            ));
        }
        assert_eq!(brush.thickness(), 20.0);
    }

    #[test]
    fn test_stroke_takes_brush_snapshot() {
        let mut brush = BrushState::new(Color::rgb(255, 0, 0), 5.0).unwrap();
        let stroke = brush.stroke_at(Point::new(1.0, 2.0));

        brush.set_color(Color::WHITE);
        brush.set_thickness(15.0).unwrap();

        assert_eq!(stroke.color(), Color::rgb(255, 0, 0));
        assert_eq!(stroke.thickness(), 5.0);
        assert_eq!(stroke.points(), &[Point::new(1.0, 2.0)]);
    }
}
