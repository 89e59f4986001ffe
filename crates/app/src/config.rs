//! Application configuration and canvas construction

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use fingerpaint_config::CanvasConfig;
use painting::{BrushState, CanvasError, StrokeCanvas, parse_color};
use tracing::info;

/// Replay a fingerpaint input session and export the drawing.
#[derive(Parser, Debug)]
#[command(
    name = "fingerpaint",
    about = "Replay a fingerpaint session and export the drawing as PNG"
)]
pub struct CliArgs {
    /// Session script: one JSON message per line.
    #[arg(short, long, value_name = "FILE")]
    pub session: PathBuf,

    /// Where to write the final drawing. A directory receives
    /// `Drawing_<millis>.png`. Defaults to the current directory.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Canvas configuration (JSON). FINGERPAINT_* environment variables
    /// are applied on top.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log per-operation detail.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Load the canvas config from an optional JSON file plus environment overrides
pub fn load_config(path: Option<&Path>) -> anyhow::Result<CanvasConfig> {
    let config = match path {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("could not read config '{}'", path.display()))?;
            let mut config = parse_config(&source)
                .with_context(|| format!("invalid config '{}'", path.display()))?;
            config.apply_env();
            config
        }
        None => CanvasConfig::from_env(),
    };

    info!(
        "Canvas {}x{} @ density {}",
        config.width, config.height, config.density
    );
    Ok(config)
}

/// Parse a JSON canvas config; missing fields take their defaults
pub fn parse_config(source: &str) -> Result<CanvasConfig, serde_json::Error> {
    serde_json::from_str(source)
}

/// Build a canvas with the configured viewport, density and initial brush
pub fn build_canvas(config: &CanvasConfig) -> Result<StrokeCanvas, CanvasError> {
    let blank = parse_color(&config.blank_color)?;
    let brush = BrushState::new(parse_color(&config.brush_color)?, config.brush_size)?;

    let canvas = StrokeCanvas::new(config.width, config.height)
        .with_density(config.density)
        .with_blank_color(blank)
        .with_brush(brush);

    Ok(match config.max_redo_levels {
        Some(levels) => canvas.with_max_redo_levels(levels),
        None => canvas,
    })
}
