use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::{error, info};

use skyglint::config::Config;
use skyglint::integrator::{Integrator, MAX_BOUNCES};
use skyglint::output::save_image;
use skyglint::renderer::render;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => {
            info!("No config given, rendering the demo scene");
            Config::demo()
        }
    };

    if let Some(width) = args.width {
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.render.height = height;
    }
    if let Some(fov) = args.fov {
        config.render.fov = fov;
    }
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.render.output));

    // Meshes and the skybox are loaded here, before any pixel is traced
    let world = config.build()?;
    if world.reflection_depth > MAX_BOUNCES {
        info!(
            "Reflection depth {} requested, evaluating {} bounce",
            world.reflection_depth, MAX_BOUNCES
        );
    }

    info!(
        "Image resolution: {}x{}, fov: {}",
        world.camera.image_width, world.camera.image_height, world.camera.fov
    );
    let integrator = Integrator::new(&world.scene, &world.light, &world.skybox)
        .with_depth(world.reflection_depth);
    let image = render(&world.camera, &integrator, !args.quiet);

    save_image(&image, &output)
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("Skyglint - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
