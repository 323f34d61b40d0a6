//! PSNR quality metrics between a reference and a test raster.
//!
//! Per-plane and combined peak signal-to-noise ratio over 8-bit RGB.
//! Squared errors accumulate in `u64` (exact for any image small enough to
//! hold in memory); identical planes report `f64::INFINITY`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ppm::RasterImage;

/// PSNR in decibels, per plane and combined. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Psnr {
    /// Red plane.
    pub psnr_r: f64,
    /// Green plane.
    pub psnr_g: f64,
    /// Blue plane.
    pub psnr_b: f64,
    /// All three planes combined.
    pub psnr_rgb: f64,
}

impl Psnr {
    /// Compute over two interleaved RGB buffers of equal, non-zero length.
    pub fn compute(ref_pixels: &[u8], test_pixels: &[u8]) -> Result<Self> {
        if ref_pixels.len() != test_pixels.len() || ref_pixels.is_empty() {
            return Err(Error::SizeMismatch {
                expected: ref_pixels.len().max(3),
                actual: test_pixels.len(),
            });
        }

        let mut sse_r = 0u64;
        let mut sse_g = 0u64;
        let mut sse_b = 0u64;
        for (a, b) in ref_pixels.chunks_exact(3).zip(test_pixels.chunks_exact(3)) {
            let dr = i64::from(a[0]) - i64::from(b[0]);
            let dg = i64::from(a[1]) - i64::from(b[1]);
            let db = i64::from(a[2]) - i64::from(b[2]);
            sse_r += (dr * dr) as u64;
            sse_g += (dg * dg) as u64;
            sse_b += (db * db) as u64;
        }

        let npx = (ref_pixels.len() / 3) as f64;
        Ok(Self {
            psnr_r: psnr_from_mse(sse_r as f64 / npx),
            psnr_g: psnr_from_mse(sse_g as f64 / npx),
            psnr_b: psnr_from_mse(sse_b as f64 / npx),
            psnr_rgb: psnr_from_mse((sse_r + sse_g + sse_b) as f64 / (npx * 3.0)),
        })
    }

    /// Compute between two decoded images, with a dimension check.
    pub fn between(reference: &RasterImage, test: &RasterImage) -> Result<Self> {
        if !reference.same_dimensions(test) {
            return Err(Error::SizeMismatch {
                expected: reference.pixels().len(),
                actual: test.pixels().len(),
            });
        }
        Self::compute(reference.pixels(), test.pixels())
    }
}

fn psnr_from_mse(mse: f64) -> f64 {
    if mse <= 0.0 {
        f64::INFINITY
    } else {
        10.0 * (255.0 * 255.0 / mse).log10()
    }
}
