//! PSNR metrics command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use artifact_eval::{Psnr, RasterImage};

pub fn run(reference: PathBuf, test: PathBuf, verbose: bool) -> Result<()> {
    let ref_img = RasterImage::read(&reference)
        .with_context(|| format!("Failed to read {}", reference.display()))?;
    let test_img = RasterImage::read(&test)
        .with_context(|| format!("Failed to read {}", test.display()))?;
    if verbose {
        eprintln!(
            "{} vs {} ({}x{})",
            reference.display(),
            test.display(),
            ref_img.width(),
            ref_img.height()
        );
    }

    let psnr = Psnr::between(&ref_img, &test_img).with_context(|| {
        format!(
            "Cannot compare {} against {}",
            test.display(),
            reference.display()
        )
    })?;

    println!(
        "psnr_rgb={:.6} psnr_r={:.6} psnr_g={:.6} psnr_b={:.6}",
        psnr.psnr_rgb, psnr.psnr_r, psnr.psnr_g, psnr.psnr_b
    );
    Ok(())
}
