//! Shared configuration for fingerpaint
//!
//! This crate provides the single source of truth for the canvas viewport,
//! display density, brush defaults and the color palette offered to the user.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default viewport width in pixels
pub const DEFAULT_WIDTH: u32 = 1080;

/// Default viewport height in pixels
pub const DEFAULT_HEIGHT: u32 = 1920;

/// Default display density (1.0 = one pixel per device-independent unit)
pub const DEFAULT_DENSITY: f32 = 1.0;

/// Default brush thickness in device-independent units
pub const DEFAULT_BRUSH_SIZE: f32 = 20.0;

/// Environment variable overriding the viewport width
pub const ENV_WIDTH: &str = "FINGERPAINT_WIDTH";

/// Environment variable overriding the viewport height
pub const ENV_HEIGHT: &str = "FINGERPAINT_HEIGHT";

/// Environment variable overriding the display density
pub const ENV_DENSITY: &str = "FINGERPAINT_DENSITY";

/// Brush size presets offered by the brush chooser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushSize {
    Small,
    Medium,
    Large,
}

/// Thickness for each brush size preset, in device-independent units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushPresets {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
}

impl Default for BrushPresets {
    fn default() -> Self {
        Self {
            small: 5.0,
            medium: 10.0,
            large: 15.0,
        }
    }
}

/// Canvas configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Device pixels per device-independent unit
    pub density: f32,
    /// Initial brush thickness in device-independent units
    pub brush_size: f32,
    /// Initial brush color
    pub brush_color: String,
    /// Color of the surface before a background is imported
    pub blank_color: String,
    /// Brush chooser sizes
    pub brush_presets: BrushPresets,
    /// Colors offered by the color chooser
    pub palette: Vec<String>,
    /// Undone strokes kept for redo (None = unbounded)
    pub max_redo_levels: Option<usize>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            density: DEFAULT_DENSITY,
            brush_size: DEFAULT_BRUSH_SIZE,
            brush_color: "#000000".to_string(),
            blank_color: "#FFFFFF".to_string(),
            brush_presets: BrushPresets::default(),
            palette: [
                "#000000", "#FFFFFF", "#FF0000", "#FF9800", "#FFEB3B", "#4CAF50", "#2196F3",
                "#9C27B0", "#795548", "#9E9E9E",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            max_redo_levels: None,
        }
    }
}

impl CanvasConfig {
    /// Create a config with the given viewport and defaults for everything else
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Default config with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override viewport and density from `FINGERPAINT_*` environment variables
    ///
    /// Unparsable or non-positive values are ignored.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(width) = parse_positive::<u32>(ENV_WIDTH, lookup(ENV_WIDTH)) {
            self.width = width;
        }
        if let Some(height) = parse_positive::<u32>(ENV_HEIGHT, lookup(ENV_HEIGHT)) {
            self.height = height;
        }
        if let Some(density) = parse_positive::<f32>(ENV_DENSITY, lookup(ENV_DENSITY)) {
            if density.is_finite() {
                self.density = density;
            }
        }
    }

    /// Thickness for a brush size preset
    pub fn preset_size(&self, size: BrushSize) -> f32 {
        match size {
            BrushSize::Small => self.brush_presets.small,
            BrushSize::Medium => self.brush_presets.medium,
            BrushSize::Large => self.brush_presets.large,
        }
    }

    /// Palette entry at `index`
    pub fn palette_color(&self, index: usize) -> Option<&str> {
        self.palette.get(index).map(String::as_str)
    }
}

fn parse_positive<T>(key: &str, value: Option<String>) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let raw = value?;
    match raw.trim().parse::<T>() {
        Ok(parsed) if parsed > T::default() => Some(parsed),
        _ => {
            warn!("Ignoring {}={:?}: expected a positive number", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overrides(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CanvasConfig::default();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.density, DEFAULT_DENSITY);
        assert_eq!(config.brush_size, 20.0);
        assert_eq!(config.palette_color(0), Some("#000000"));
    }

    #[test]
    fn test_preset_sizes() {
        let config = CanvasConfig::default();
        assert_eq!(config.preset_size(BrushSize::Small), 5.0);
        assert_eq!(config.preset_size(BrushSize::Medium), 10.0);
        assert_eq!(config.preset_size(BrushSize::Large), 15.0);
    }

    #[test]
    fn test_overrides() {
        let mut config = CanvasConfig::default();
        config.apply_overrides(overrides(&[
            (ENV_WIDTH, "640"),
            (ENV_HEIGHT, " 480 "),
            (ENV_DENSITY, "2.5"),
        ]));
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.density, 2.5);
    }

    #[test]
    fn test_bad_overrides_ignored() {
        let mut config = CanvasConfig::default();
        config.apply_overrides(overrides(&[
            (ENV_WIDTH, "wide"),
            (ENV_HEIGHT, "0"),
            (ENV_DENSITY, "-1"),
        ]));
        assert_eq!(config, CanvasConfig::default());
    }
}
