//! Lumen command line renderer.
//!
//! Loads a scene, renders it on all cores and writes a PPM or PNG.

mod cli;
mod logger;
mod output;
mod progress;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use lumen_core::load_scene;
use lumen_renderer::{render_parallel_with_progress, Camera, Scene, XorShift32};

use crate::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(args.log_level.into());

    log::info!("Starting Lumen");

    let config = args.render_config()?;
    config
        .validate()
        .context("Invalid render configuration")?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the thread pool")?;
    }

    let start = Instant::now();
    let desc = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;
    let scene = Scene::from_description(&desc);
    log::info!("Scene loaded in {:.2?}", start.elapsed());

    if scene.is_empty() {
        log::warn!("Scene has no entities, the image will only show the sky");
    }

    let camera = Camera::new(&desc.camera, config.width, config.height);

    let pb = progress::row_progress(config.height, args.quiet)?;
    let start = Instant::now();
    let image =
        render_parallel_with_progress::<XorShift32, _>(&camera, &scene, &config, |_| pb.inc(1));
    pb.finish_and_clear();
    let elapsed = start.elapsed();
    log::info!(
        "Rendered {} pixels in {:.2?} ({:.0} samples/s)",
        image.pixels.len(),
        elapsed,
        (image.pixels.len() as f64 * config.samples_per_pixel as f64)
            / elapsed.as_secs_f64().max(f64::EPSILON)
    );

    output::save_image(&args.output, &image, config.gamma)?;

    Ok(())
}
