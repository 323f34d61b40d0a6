//! Per-column mean statistics over a raster.
//!
//! Each function reduces an image to one value per pixel column: the
//! arithmetic mean over all rows of a per-pixel scalar. Sums are accumulated
//! in integers (the per-pixel values are 8-bit), so the only rounding is the
//! final division by height. Vertical banding shows up as structure in these
//! series that survives the row averaging.

use crate::colorspace::Channel;
use crate::ppm::RasterImage;

/// Per-column mean of one channel. Output length is the image width.
#[must_use]
pub fn column_means(image: &RasterImage, channel: Channel) -> Vec<f64> {
    let width = image.width() as usize;
    let height = image.height() as usize;

    let mut sums = vec![0u64; width];
    for row in image.pixels().chunks_exact(width * 3) {
        for (px, sum) in row.chunks_exact(3).zip(sums.iter_mut()) {
            *sum += u64::from(channel.extract(px[0], px[1], px[2]));
        }
    }

    sums.into_iter().map(|s| s as f64 / height as f64).collect()
}

/// Per-column mean luma.
#[must_use]
pub fn column_luma(image: &RasterImage) -> Vec<f64> {
    column_means(image, Channel::Luma)
}

/// Per-column mean R, G, B, in that order.
#[must_use]
pub fn column_rgb(image: &RasterImage) -> [Vec<f64>; 3] {
    [
        column_means(image, Channel::R),
        column_means(image, Channel::G),
        column_means(image, Channel::B),
    ]
}

/// Per-column mean Y, Cb, Cr, in that order.
#[must_use]
pub fn column_ycbcr(image: &RasterImage) -> [Vec<f64>; 3] {
    [
        column_means(image, Channel::Luma),
        column_means(image, Channel::Cb),
        column_means(image, Channel::Cr),
    ]
}

/// Element-wise difference `test - reference` of two equal-length series.
///
/// # Panics
///
/// Panics if the series lengths differ; callers compare images that already
/// passed a dimension check.
#[must_use]
pub fn series_diff(reference: &[f64], test: &[f64]) -> Vec<f64> {
    assert_eq!(reference.len(), test.len());
    test.iter()
        .zip(reference.iter())
        .map(|(t, r)| t - r)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ppm::RasterImage;

    fn image(width: u32, height: u32, pixels: Vec<u8>) -> RasterImage {
        RasterImage::from_raw(width, height, pixels).unwrap()
    }

    #[test]
    fn test_column_means_small_image() {
        // 2x2: left column red 10/30, right column red 20/40.
        let img = image(
            2,
            2,
            vec![10, 0, 0, 20, 0, 0, 30, 0, 0, 40, 0, 0],
        );
        let r = column_means(&img, Channel::R);
        assert_eq!(r, vec![20.0, 30.0]);
    }

    #[test]
    fn test_column_luma_reference_vector() {
        let img = image(2, 1, vec![10, 20, 30, 40, 50, 60]);
        let y = column_luma(&img);
        // (77*10 + 150*20 + 29*30) >> 8 = 18; (77*40 + 150*50 + 29*60) >> 8 = 48
        assert_eq!(y, vec![18.0, 48.0]);
    }

    #[test]
    fn test_aggregation_idempotent() {
        let pixels: Vec<u8> = (0..4 * 3 * 3).map(|i| (i * 37 % 256) as u8).collect();
        let img = image(4, 3, pixels);
        assert_eq!(column_luma(&img), column_luma(&img));
        assert_eq!(column_ycbcr(&img), column_ycbcr(&img));
    }

    #[test]
    fn test_uniform_image_flat_series() {
        let img = image(5, 4, vec![33; 5 * 4 * 3]);
        for series in column_rgb(&img) {
            assert!(series.iter().all(|&v| v == 33.0));
        }
    }

    #[test]
    fn test_series_diff() {
        let d = series_diff(&[1.0, 2.0, 3.0], &[2.0, 2.0, 1.0]);
        assert_eq!(d, vec![1.0, 0.0, -2.0]);
    }
}
