use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::MIN_SEGMENT_LENGTH;

/// A point in canvas-local pixel coordinates.
pub type Point = Vec2;

/// 8-bit straight-alpha RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from a packed `0xAARRGGBB` value
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Color as `[r, g, b, a]` in 0.0-1.0, the format the CPU surface blends in
    pub fn to_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// A single finger stroke: the points as drawn plus the brush it was drawn with.
///
/// Points are joined by straight segments. Once a stroke has been committed to
/// the history it is only ever handed out by shared reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StrokeRecord")]
pub struct Stroke {
    points: Vec<Point>,
    color: Color,
    /// Thickness in device-independent units
    thickness: f32,
}

impl Stroke {
    /// Start a stroke at `origin`
    pub fn new(origin: Point, color: Color, thickness: f32) -> Self {
        Self {
            points: vec![origin],
            color,
            thickness,
        }
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// True when the finger never moved (a tap). Rendered as a round dot.
    pub fn is_dot(&self) -> bool {
        let first = self.points[0];
        self.points
            .iter()
            .all(|p| p.distance(first) < MIN_SEGMENT_LENGTH)
    }
}

/// Unchecked wire form of a [`Stroke`]
#[derive(Deserialize)]
struct StrokeRecord {
    points: Vec<Point>,
    color: Color,
    thickness: f32,
}

impl TryFrom<StrokeRecord> for Stroke {
    type Error = String;

    fn try_from(record: StrokeRecord) -> Result<Self, Self::Error> {
        if record.points.is_empty() {
            return Err("stroke has no points".to_string());
        }
        if !record.thickness.is_finite() || record.thickness <= 0.0 {
            return Err(format!("invalid stroke thickness {}", record.thickness));
        }
        Ok(Self {
            points: record.points,
            color: record.color,
            thickness: record.thickness,
        })
    }
}

/// Pointer input already translated to canvas-local space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_argb() {
        let color = Color::from_argb(0x80FF4020);
        assert_eq!(color, Color::rgba(0xFF, 0x40, 0x20, 0x80));
    }

    #[test]
    fn test_color_to_array() {
        let [r, g, b, a] = Color::rgba(255, 0, 51, 255).to_array();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < 0.001);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn test_stroke_deserialize_validates() {
        let stroke: Stroke = serde_json::from_str(
            r#"{"points":[[1.0,2.0],[3.0,4.0]],"color":{"r":255,"g":0,"b":0,"a":255},"thickness":5.0}"#,
        )
        .unwrap();
        assert_eq!(stroke.points(), &[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert_eq!(stroke.color(), Color::rgb(255, 0, 0));
        assert!(!stroke.is_dot());

        let empty = serde_json::from_str::<Stroke>(
            r#"{"points":[],"color":{"r":0,"g":0,"b":0,"a":255},"thickness":5.0}"#,
        );
        assert!(empty.is_err());

        let flat = serde_json::from_str::<Stroke>(
            r#"{"points":[[0.0,0.0]],"color":{"r":0,"g":0,"b":0,"a":255},"thickness":0.0}"#,
        );
        assert!(flat.is_err());
    }

    #[test]
    fn test_tap_is_dot() {
        let mut stroke = Stroke::new(Point::new(4.0, 4.0), Color::BLACK, 10.0);
        assert!(stroke.is_dot());

        stroke.push(Point::new(4.0, 4.0));
        assert!(stroke.is_dot());

        stroke.push(Point::new(9.0, 4.0));
        assert!(!stroke.is_dot());
        assert_eq!(stroke.points().len(), 3);
    }
}
