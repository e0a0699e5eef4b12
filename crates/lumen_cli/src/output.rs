//! # Output Module
//!
//! Writes rendered images to disk:
//! - ASCII PPM (`P3`), one pixel per line
//! - PNG through the `image` crate
//!
//! Both formats quantize with [`ImageBuffer::to_rgb8`], top row first.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use image::{ImageFormat, RgbImage};
use log::{debug, info};
use lumen_renderer::ImageBuffer;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ppm,
    Png,
}

impl OutputFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("ppm") => Ok(OutputFormat::Ppm),
            Some("png") => Ok(OutputFormat::Png),
            _ => bail!(
                "Unsupported output format for {} (use .ppm or .png)",
                path.display()
            ),
        }
    }
}

/// Write `image` as an ASCII PPM.
pub fn write_ppm<W: Write>(writer: &mut W, image: &ImageBuffer, gamma: bool) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for rgb in image.to_rgb8(gamma).chunks_exact(3) {
        writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
    }

    Ok(())
}

/// Save `image` to `path`, choosing the format from the extension.
pub fn save_image(path: &Path, image: &ImageBuffer, gamma: bool) -> Result<()> {
    let format = OutputFormat::from_path(path)?;
    debug!("Writing {:?} image to {}", format, path.display());

    match format {
        OutputFormat::Ppm => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_ppm(&mut writer, image, gamma)
                .and_then(|()| writer.flush())
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        OutputFormat::Png => {
            let buffer = RgbImage::from_raw(image.width, image.height, image.to_rgb8(gamma))
                .context("Image buffer size does not match its dimensions")?;
            buffer
                .save_with_format(path, ImageFormat::Png)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
    }

    info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
