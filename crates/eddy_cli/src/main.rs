mod cli;
mod logger;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use eddy_core::load_scene;
use eddy_renderer::{render_with_config, save_image, to_ascii, Camera, RenderConfig};

use cli::Args;
use logger::init_logger;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.map(Into::into));

    info!("Starting Eddy");

    let file = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    let config = RenderConfig {
        width: args.width,
        height: args.height,
        parallel: !args.single_thread,
        ..RenderConfig::default()
    };

    let mut desc = file.camera.unwrap_or_default();
    if let Some(fov) = args.fov {
        desc.fov_degrees = fov;
    }
    let camera = Camera::from_desc(&desc, config.aspect()).context("Invalid camera")?;

    info!(
        "Rendering {} primitives with {} lights at {}x{}",
        file.scene.primitive_count(),
        file.scene.light_count(),
        config.width,
        config.height
    );
    let image = render_with_config(&file.scene, &camera, &config).context("Render failed")?;

    save_image(&image, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if args.ascii {
        print!("{}", to_ascii(&image));
    }

    Ok(())
}
