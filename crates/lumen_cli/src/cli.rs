use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::RenderConfig;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
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
#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(about = "A Monte Carlo path tracer for spheres and triangles")]
pub struct Args {
    /// Scene file (.txt scene format or .json)
    pub scene: PathBuf,

    /// Output image (.ppm or .png)
    #[arg(short, long, default_value = "image.ppm")]
    pub output: PathBuf,

    /// JSON render configuration; command line values override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of samples per pixel
    #[arg(short, long)]
    pub samples: Option<u32>,

    /// Maximum number of bounces per path
    #[arg(short = 'd', long)]
    pub max_depth: Option<u32>,

    /// Global random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Apply gamma-2 correction to the output
    #[arg(long)]
    pub gamma: bool,

    /// Number of render threads (defaults to one per core)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Build the render configuration: defaults, then the JSON file, then flags.
    pub fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RenderConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut RenderConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(samples) = self.samples {
            config.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.gamma {
            config.gamma = true;
        }
    }
}

/// Read a JSON render configuration; missing fields keep their defaults.
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    log::info!("Loaded render config from {}", path.display());
    Ok(config)
}
