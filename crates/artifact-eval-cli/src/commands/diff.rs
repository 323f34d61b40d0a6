//! Luma-diff heatmap command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use artifact_eval::{RasterImage, diff_heatmap, png};

pub fn run(
    reference: PathBuf,
    test: PathBuf,
    output: PathBuf,
    scale: u32,
    verbose: bool,
) -> Result<()> {
    let ref_img = RasterImage::read(&reference)
        .with_context(|| format!("Failed to read {}", reference.display()))?;
    let test_img = RasterImage::read(&test)
        .with_context(|| format!("Failed to read {}", test.display()))?;

    // Fails on mismatched dimensions before anything is written.
    let gray = diff_heatmap(&ref_img, &test_img, scale).with_context(|| {
        format!(
            "Cannot diff {} ({}x{}) against {} ({}x{})",
            test.display(),
            test_img.width(),
            test_img.height(),
            reference.display(),
            ref_img.width(),
            ref_img.height()
        )
    })?;

    if verbose {
        let hot = gray.iter().filter(|&&v| v > 0).count();
        eprintln!("{} differing pixels of {}", hot, gray.len());
    }

    png::write_gray(&output, ref_img.width(), ref_img.height(), &gray)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
