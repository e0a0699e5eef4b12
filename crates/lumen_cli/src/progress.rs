use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over image rows; hidden when `quiet`.
pub fn row_progress(rows: u32, quiet: bool) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new(rows as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} rows | {elapsed_precise} | ETA: {eta}")
            .context("Invalid progress bar template")?,
    );
    Ok(pb)
}
