//! glint - render the demo scene to a PNG.

mod cli;
mod config;
mod demo;

use std::sync::atomic::AtomicBool;

use anyhow::{Context, Result};
use clap::Parser;
use glint_renderer::{render_parallel, render_serial, Camera};

use crate::cli::Args;
use crate::config::Settings;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    }
    .with_overrides(args.width, args.height);

    let scene = demo::build_scene().context("building demo scene")?;
    let camera = Camera::new(&settings.camera).context("invalid camera settings")?;

    let image = if args.serial {
        render_serial(&scene, &camera, &settings.render)?
    } else {
        let cancel = AtomicBool::new(false);
        render_parallel(&scene, &camera, &settings.render, &cancel)?
    };

    image
        .save_png(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}
