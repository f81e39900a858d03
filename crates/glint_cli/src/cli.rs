use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_renderer::RenderConfig;
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
#[command(name = "glint")]
#[command(about = "An offline sphere ray tracer")]
pub struct Args {
    /// Scene file (JSON); renders the random demo scene when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Seed for scene generation and sampling; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Image width in pixels
    #[arg(long, default_value_t = 400)]
    pub width: u32,

    /// Image width / height
    #[arg(long, default_value_t = 16.0 / 9.0)]
    pub aspect_ratio: f32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 100)]
    pub samples: u32,

    /// Maximum ray bounce depth
    #[arg(long, default_value_t = 50)]
    pub max_depth: u32,

    /// Output file path (.ppm for P3 text, .png for 8-bit PNG)
    #[arg(short, long, default_value = "image.ppm")]
    pub output: PathBuf,

    /// Also write the scene that was rendered as JSON
    #[arg(long)]
    pub dump_scene: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            image_width: self.width,
            aspect_ratio: self.aspect_ratio,
            samples_per_pixel: self.samples,
            max_depth: self.max_depth,
        }
    }
}
