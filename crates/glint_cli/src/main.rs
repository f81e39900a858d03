//! Glint command line renderer.
//!
//! Run with: cargo run --release -- --samples 50 --output image.png

mod cli;
mod output;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{load_scene, random_scene, save_scene, SceneDescription};
use glint_renderer::{build_world, render, Camera};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let config = args.render_config();
    config.validate()?;

    let mut rng = match args.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let scene: SceneDescription = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => random_scene(&mut rng),
    };

    if let Some(path) = &args.dump_scene {
        save_scene(&scene, path)
            .with_context(|| format!("Failed to write scene {}", path.display()))?;
    }

    // Build the scene
    let start = Instant::now();
    let world = build_world(&scene).context("Invalid scene")?;
    let camera = Camera::from_description(&scene.camera, config.aspect_ratio);
    log::info!("Scene built in {:?}", start.elapsed());

    let image = render(&camera, &world, &config, &mut rng)?;

    output::save_image(&image, &args.output)?;

    Ok(())
}
