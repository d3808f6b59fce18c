//! Glint command-line renderer.

mod demo;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};

use glint_renderer::{render, Camera};

use settings::RenderSettings;

/// Log levels accepted on the command line.
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments.
#[derive(Parser)]
#[command(name = "glint")]
#[command(about = "A Whitted-style CPU ray tracer")]
struct Args {
    /// Wavefront mesh file to place in the scene
    #[arg(short, long)]
    mesh: Option<PathBuf>,

    /// Output image path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// JSON render settings file
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

/// Initialize the logger with the specified level.
fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let settings = match &args.settings {
        Some(path) => RenderSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => RenderSettings::default(),
    };

    let mesh = match &args.mesh {
        Some(path) => {
            let start = Instant::now();
            let triangles = glint_core::load_triangles(path)
                .with_context(|| format!("loading mesh from {}", path.display()))?;
            info!("mesh loaded in {:.2?}", start.elapsed());
            Some(triangles)
        }
        None => None,
    };

    let scene = demo::build_scene(mesh);
    info!(
        "scene ready: {} objects, {} lights",
        scene.object_count(),
        scene.light_count()
    );

    let camera = Camera::new(settings.camera_config());
    let start = Instant::now();
    let image = render(&scene, &camera, &settings.render_config());
    info!(
        "rendered {}x{} in {:.2?}",
        settings.width,
        settings.height,
        start.elapsed()
    );

    image
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!("saved {}", args.output.display());

    Ok(())
}
