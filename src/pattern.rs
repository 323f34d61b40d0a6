//! Deterministic synthetic test images.
//!
//! Small fixed patterns for exercising an encoder without a corpus: flat
//! color, gradients, block edges, noise, and a diagonal line. Noise comes
//! from a seeded LCG, so renders are reproducible.

use crate::error::{Error, Result};
use crate::ppm::RasterImage;

/// Largest accepted side length for a generated image.
const MAX_SIDE: u32 = 4096;

/// Numerical-recipes LCG step.
fn lcg_next(state: &mut u32) -> u32 {
    *state = state.wrapping_mul(1664525).wrapping_add(1013904223);
    *state
}

/// A synthetic image pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestPattern {
    /// Flat color (17, 34, 51).
    Solid,
    /// Horizontal red ramp, vertical green ramp, diagonal blue ramp.
    RgbGradient,
    /// 8x8 black/white checkerboard.
    Checker,
    /// Per-pixel LCG noise.
    Noise,
    /// White main diagonal on black.
    Diagonal,
}

impl TestPattern {
    /// All patterns, in CLI listing order.
    pub const ALL: [Self; 5] = [
        Self::Solid,
        Self::RgbGradient,
        Self::Checker,
        Self::Noise,
        Self::Diagonal,
    ];

    /// Name used on the command line.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::RgbGradient => "rgbgrad",
            Self::Checker => "checker",
            Self::Noise => "noise",
            Self::Diagonal => "diag",
        }
    }

    /// Render at the given size. `seed` only affects [`TestPattern::Noise`].
    ///
    /// Fails if either side is zero or exceeds 4096.
    pub fn render(self, width: u32, height: u32, seed: u32) -> Result<RasterImage> {
        if width == 0 || height == 0 || width > MAX_SIDE || height > MAX_SIDE {
            return Err(Error::Pattern(format!(
                "bad size {width}x{height} (sides must be 1..={MAX_SIDE})"
            )));
        }

        let mut state = seed;
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for y in 0..height {
            for x in 0..width {
                let (r, g, b) = match self {
                    Self::Solid => (17, 34, 51),
                    Self::RgbGradient => (
                        ((x * 255) / (width - 1).max(1)) as u8,
                        ((y * 255) / (height - 1).max(1)) as u8,
                        (((x + y) * 255) / (width + height - 2).max(1)) as u8,
                    ),
                    Self::Checker => {
                        let v = if ((x / 8) ^ (y / 8)) & 1 != 0 { 255 } else { 0 };
                        (v, v, v)
                    }
                    Self::Noise => {
                        let v = lcg_next(&mut state);
                        ((v & 0xff) as u8, ((v >> 8) & 0xff) as u8, ((v >> 16) & 0xff) as u8)
                    }
                    Self::Diagonal => {
                        let v = if x.abs_diff(y) <= 1 { 255 } else { 0 };
                        (v, v, v)
                    }
                };
                pixels.extend_from_slice(&[r, g, b]);
            }
        }

        RasterImage::from_raw(width, height, pixels)
    }
}

impl std::str::FromStr for TestPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.code() == s)
            .ok_or_else(|| Error::Pattern(format!("unknown pattern: {s}")))
    }
}

impl std::fmt::Display for TestPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
