//! Per-pixel luma-difference heatmap.
//!
//! Output feeds the grayscale PNG path: bright pixels mark where the test
//! image's luma diverges from the reference. `scale` amplifies small
//! differences so near-threshold artifacts become visible.

use crate::colorspace::luma;
use crate::error::{Error, Result};
use crate::ppm::RasterImage;

/// Absolute luma difference per pixel, scaled and clipped to [0, 255].
///
/// Both buffers are interleaved RGB of equal length; output is one byte per
/// pixel (`len / 3`). Fails if the buffer lengths differ.
pub fn diff_luma_gray(ref_pixels: &[u8], test_pixels: &[u8], scale: u32) -> Result<Vec<u8>> {
    if ref_pixels.len() != test_pixels.len() {
        return Err(Error::SizeMismatch {
            expected: ref_pixels.len(),
            actual: test_pixels.len(),
        });
    }

    let mut out = Vec::with_capacity(ref_pixels.len() / 3);
    for (rp, tp) in ref_pixels
        .chunks_exact(3)
        .zip(test_pixels.chunks_exact(3))
    {
        let y_ref = i32::from(luma(rp[0], rp[1], rp[2]));
        let y_test = i32::from(luma(tp[0], tp[1], tp[2]));
        let v = (y_test - y_ref).unsigned_abs().saturating_mul(scale);
        out.push(v.min(255) as u8);
    }
    Ok(out)
}

/// [`diff_luma_gray`] over two decoded images, with a dimension check.
pub fn diff_heatmap(reference: &RasterImage, test: &RasterImage, scale: u32) -> Result<Vec<u8>> {
    if !reference.same_dimensions(test) {
        return Err(Error::SizeMismatch {
            expected: reference.pixels().len(),
            actual: test.pixels().len(),
        });
    }
    diff_luma_gray(reference.pixels(), test.pixels(), scale)
}
