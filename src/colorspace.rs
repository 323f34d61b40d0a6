//! Fixed-point RGB to luma/chroma conversion.
//!
//! Coefficients follow the BT.601-like integer approximation used by the
//! encoder under evaluation, with truncating shifts rather than rounding:
//!
//! ```text
//! Y  = (77*R + 150*G +  29*B) >> 8
//! Cb = ((-43*R -  85*G + 128*B) >> 8) + 128
//! Cr = ((128*R - 107*G -  21*B) >> 8) + 128
//! ```
//!
//! The chroma intermediates go negative; the shift must be an arithmetic
//! (sign-preserving) shift so that truncation goes toward negative infinity.
//! Rust's `>>` on `i32` has exactly these semantics. Bias-detection output
//! depends on reproducing this bit-for-bit.

use serde::{Deserialize, Serialize};

/// Fixed-point luma, in [0, 255] for 8-bit inputs.
#[inline]
#[must_use]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((77 * i32::from(r) + 150 * i32::from(g) + 29 * i32::from(b)) >> 8) as u8
}

/// Fixed-point blue-difference chroma, in [0, 255] for 8-bit inputs.
#[inline]
#[must_use]
pub fn cb(r: u8, g: u8, b: u8) -> u8 {
    (((-43 * i32::from(r) - 85 * i32::from(g) + 128 * i32::from(b)) >> 8) + 128) as u8
}

/// Fixed-point red-difference chroma, in [0, 255] for 8-bit inputs.
#[inline]
#[must_use]
pub fn cr(r: u8, g: u8, b: u8) -> u8 {
    (((128 * i32::from(r) - 107 * i32::from(g) - 21 * i32::from(b)) >> 8) + 128) as u8
}

/// A per-pixel scalar extracted from an RGB triple.
///
/// Fixed set of extraction functions selected by tag; used by the column
/// aggregator and the report layer to name which component a series covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Red component.
    R,
    /// Green component.
    G,
    /// Blue component.
    B,
    /// Fixed-point luma.
    Luma,
    /// Blue-difference chroma.
    Cb,
    /// Red-difference chroma.
    Cr,
}

impl Channel {
    /// All channels, in report order.
    pub const ALL: [Self; 6] = [Self::Luma, Self::R, Self::G, Self::B, Self::Cb, Self::Cr];

    /// Extract this channel's value from one pixel.
    #[inline]
    #[must_use]
    pub fn extract(self, r: u8, g: u8, b: u8) -> u8 {
        match self {
            Self::R => r,
            Self::G => g,
            Self::B => b,
            Self::Luma => luma(r, g, b),
            Self::Cb => cb(r, g, b),
            Self::Cr => cr(r, g, b),
        }
    }

    /// Short lowercase code, used for CSV headers and report keys.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::R => "r",
            Self::G => "g",
            Self::B => "b",
            Self::Luma => "y",
            Self::Cb => "cb",
            Self::Cr => "cr",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.code())
    }
}
