//! Session replay - dispatches IPC messages to the canvas
//!
//! Every message is applied in order. Failures are logged and counted; the
//! session always continues with the next message.

use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow, bail};
use fingerpaint_config::CanvasConfig;
use fingerpaint_ipc::{CanvasCommand, PointerMessage, SessionMessage};
use painting::{Point, PointerEvent, StrokeCanvas, decode_image};
use tracing::{debug, info, warn};

use crate::export::export_png;

/// Outcome counters for a replayed session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionReport {
    /// Messages applied successfully
    pub applied: usize,
    /// Messages that failed and were skipped
    pub failed: usize,
    /// Files written by export commands
    pub exports: Vec<PathBuf>,
}

/// A canvas plus everything needed to interpret session commands
pub struct Session {
    canvas: StrokeCanvas,
    config: CanvasConfig,
    /// Relative paths in commands resolve against this directory
    base_dir: PathBuf,
    /// Target for exports without an explicit path
    export_dir: PathBuf,
    report: SessionReport,
}

impl Session {
    pub fn new(
        canvas: StrokeCanvas,
        config: CanvasConfig,
        base_dir: impl Into<PathBuf>,
        export_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            canvas,
            config,
            base_dir: base_dir.into(),
            export_dir: export_dir.into(),
            report: SessionReport::default(),
        }
    }

    pub fn canvas(&self) -> &StrokeCanvas {
        &self.canvas
    }

    pub fn report(&self) -> &SessionReport {
        &self.report
    }

    /// Apply every message in order
    pub async fn run(&mut self, messages: Vec<SessionMessage>) -> &SessionReport {
        info!("Replaying {} session messages", messages.len());
        for (index, message) in messages.into_iter().enumerate() {
            match self.apply(message).await {
                Ok(()) => self.report.applied += 1,
                Err(e) => {
                    warn!("Message {} failed: {:#}", index + 1, e);
                    self.report.failed += 1;
                }
            }
        }
        info!(
            "Session done: {} applied, {} failed, {} strokes committed",
            self.report.applied,
            self.report.failed,
            self.canvas.committed().len()
        );
        &self.report
    }

    /// Apply a single message
    pub async fn apply(&mut self, message: SessionMessage) -> anyhow::Result<()> {
        match message {
            SessionMessage::Pointer(pointer) => {
                let event = pointer_event(pointer);
                if !self.canvas.handle_pointer(event) {
                    bail!("{:?} without an active stroke", event);
                }
                Ok(())
            }
            SessionMessage::Command(command) => self.apply_command(command).await,
        }
    }

    async fn apply_command(&mut self, command: CanvasCommand) -> anyhow::Result<()> {
        match command {
            CanvasCommand::Undo => {
                if !self.canvas.undo() {
                    debug!("Undo: nothing to undo");
                }
            }
            CanvasCommand::Redo => {
                if !self.canvas.redo() {
                    debug!("Redo: nothing to redo");
                }
            }
            CanvasCommand::Clear => self.canvas.clear(),
            CanvasCommand::SetBrushThickness { size } => {
                self.canvas.set_brush_thickness(size)?;
            }
            CanvasCommand::SetBrushPreset { preset } => {
                let size = self.config.preset_size(preset);
                self.canvas.set_brush_thickness(size)?;
                debug!("Brush preset {:?} -> {}", preset, size);
            }
            CanvasCommand::SetBrushColor { color } => {
                self.canvas.set_brush_color(&color)?;
            }
            CanvasCommand::SelectPalette { index } => {
                let color = self
                    .config
                    .palette_color(index)
                    .ok_or_else(|| {
                        anyhow!(
                            "palette index {} out of range ({} colors)",
                            index,
                            self.config.palette.len()
                        )
                    })?
                    .to_string();
                self.canvas.set_brush_color(&color)?;
            }
            CanvasCommand::SetBackground { path } => {
                let path = self.resolve(&path);
                self.load_background(path).await?;
            }
            CanvasCommand::ClearBackground => self.canvas.clear_background(),
            CanvasCommand::Resize { width, height } => {
                self.canvas.on_viewport_resize(width, height);
            }
            CanvasCommand::Export { path } => {
                let target = match path {
                    Some(path) => self.resolve(&path),
                    None => self.export_dir.clone(),
                };
                let written = export_png(&self.canvas.render_composite(), &target)?;
                self.report.exports.push(written);
            }
        }
        Ok(())
    }

    /// Read and decode a background on the blocking pool, then install it here
    async fn load_background(&mut self, path: PathBuf) -> anyhow::Result<()> {
        let image = tokio::task::spawn_blocking(move || -> anyhow::Result<_> {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("could not read background '{}'", path.display()))?;
            Ok(decode_image(&bytes)?)
        })
        .await
        .context("background decode task failed")??;

        self.canvas.set_decoded_background(image);
        Ok(())
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

fn pointer_event(pointer: PointerMessage) -> PointerEvent {
    match pointer {
        PointerMessage::Down { x, y } => PointerEvent::Down(Point::new(x, y)),
        PointerMessage::Move { x, y } => PointerEvent::Move(Point::new(x, y)),
        PointerMessage::Up => PointerEvent::Up,
    }
}
