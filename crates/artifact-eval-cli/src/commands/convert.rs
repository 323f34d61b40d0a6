//! PPM to PNG conversion command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use artifact_eval::{RasterImage, png};

pub fn run(input: PathBuf, output: PathBuf, verbose: bool) -> Result<()> {
    let img = RasterImage::read(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    if verbose {
        eprintln!("{}: {}x{}", input.display(), img.width(), img.height());
    }

    png::write_rgb(&output, img.width(), img.height(), img.pixels())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
