//! Fingerpaint - headless stroke canvas host
//!
//! Replays a recorded input session (pointer events and toolbar commands)
//! against a stroke canvas and exports the finished drawing as PNG.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use fingerpaint_ipc::parse_session;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod export;
mod session;

use config::{CliArgs, build_canvas, load_config};
use export::export_png;
use session::Session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = load_config(args.config.as_deref())?;
    let canvas = build_canvas(&config).context("invalid canvas configuration")?;

    let script = tokio::fs::read_to_string(&args.session)
        .await
        .with_context(|| format!("could not read session '{}'", args.session.display()))?;
    let messages = parse_session(&script)
        .with_context(|| format!("invalid session '{}'", args.session.display()))?;

    let base_dir = args
        .session
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let output = args.output.unwrap_or_else(|| PathBuf::from("."));

    let mut session = Session::new(canvas, config, base_dir, output.clone());
    let report = session.run(messages).await.clone();

    let path = export_png(&session.canvas().render_composite(), &output)?;
    info!(
        "Done: {} messages applied, {} failed, {} intermediate exports, final drawing at {}",
        report.applied,
        report.failed,
        report.exports.len(),
        path.display()
    );
    Ok(())
}
