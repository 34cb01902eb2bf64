use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
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

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "eddy")]
#[command(about = "Render a JSON scene description with a Whitted-style ray tracer")]
pub struct Args {
    /// Scene description (JSON)
    pub scene: PathBuf,

    /// Output file; the extension picks the format (.png, .ppm, or .txt for ASCII)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 450)]
    pub height: u32,

    /// Horizontal field of view in degrees, overriding the scene camera
    #[arg(long)]
    pub fov: Option<f64>,

    /// Render on the calling thread instead of the thread pool
    #[arg(long)]
    pub single_thread: bool,

    /// Also print an ASCII preview to stdout
    #[arg(long)]
    pub ascii: bool,

    /// Logging level; falls back to RUST_LOG, then "info"
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}
