//! Minimal PNG serialization for visualization output.
//!
//! Emits the narrow subset viewers need to open a diagnostic image: the
//! 8-byte signature, one IHDR, a single IDAT holding one zlib stream, and an
//! empty IEND. Bit depth is always 8, color type 2 (truecolor) or 0
//! (grayscale), no interlacing, filter type 0 on every scanline. Nothing
//! here decodes PNG.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// PNG file signature (magic bytes).
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// IHDR color type for 8-bit truecolor.
const COLOR_RGB: u8 = 2;
/// IHDR color type for 8-bit grayscale.
const COLOR_GRAY: u8 = 0;

/// zlib compression effort for the IDAT stream. Output only has to decode
/// correctly; exact compressed bytes are unconstrained.
const COMPRESSION_LEVEL: u8 = 6;

/// Encode an 8-bit RGB raster as a complete PNG file in memory.
///
/// `pixels` is interleaved RGB, row-major, `width * height * 3` bytes.
pub fn encode_rgb(width: u32, height: u32, pixels: &[u8]) -> Result<Vec<u8>> {
    encode(width, height, pixels, COLOR_RGB, 3)
}

/// Encode an 8-bit grayscale raster as a complete PNG file in memory.
///
/// `pixels` is one byte per pixel, row-major, `width * height` bytes.
pub fn encode_gray(width: u32, height: u32, pixels: &[u8]) -> Result<Vec<u8>> {
    encode(width, height, pixels, COLOR_GRAY, 1)
}

/// Encode RGB and write with a single filesystem call.
pub fn write_rgb(path: impl AsRef<Path>, width: u32, height: u32, pixels: &[u8]) -> Result<()> {
    let bytes = encode_rgb(width, height, pixels)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Encode grayscale and write with a single filesystem call.
pub fn write_gray(path: impl AsRef<Path>, width: u32, height: u32, pixels: &[u8]) -> Result<()> {
    let bytes = encode_gray(width, height, pixels)?;
    fs::write(path, bytes)?;
    Ok(())
}

fn encode(
    width: u32,
    height: u32,
    pixels: &[u8],
    color_type: u8,
    bytes_per_pixel: usize,
) -> Result<Vec<u8>> {
    let stride = width as usize * bytes_per_pixel;
    let expected = stride * height as usize;
    if pixels.len() != expected {
        return Err(Error::SizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    // Scanlines: filter byte 0 ("None") then the row.
    let mut raw = Vec::with_capacity((stride + 1) * height as usize);
    for row in pixels.chunks_exact(stride.max(1)) {
        raw.push(0);
        raw.extend_from_slice(row);
    }

    let idat = miniz_oxide::deflate::compress_to_vec_zlib(&raw, COMPRESSION_LEVEL);

    let mut ihdr = [0u8; 13];
    ihdr[0..4].copy_from_slice(&width.to_be_bytes());
    ihdr[4..8].copy_from_slice(&height.to_be_bytes());
    ihdr[8] = 8; // bit depth
    ihdr[9] = color_type;
    // bytes 10..13: compression, filter, interlace methods, all 0

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + 12 * 3 + ihdr.len() + idat.len());
    out.extend_from_slice(&PNG_SIGNATURE);
    push_chunk(&mut out, b"IHDR", &ihdr);
    push_chunk(&mut out, b"IDAT", &idat);
    push_chunk(&mut out, b"IEND", &[]);
    Ok(out)
}

/// Append one chunk: 4-byte big-endian length, tag, payload, CRC-32 over
/// tag + payload.
fn push_chunk(out: &mut Vec<u8>, tag: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc32(tag, data).to_be_bytes());
}

/// CRC-32 with the standard PNG/zlib polynomial (0xEDB88320 reflected).
fn crc32(tag: &[u8], data: &[u8]) -> u32 {
    static TABLE: OnceLock<[u32; 256]> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        let mut t = [0u32; 256];
        for (n, entry) in t.iter_mut().enumerate() {
            let mut c = n as u32;
            for _ in 0..8 {
                c = if c & 1 != 0 { 0xEDB88320 ^ (c >> 1) } else { c >> 1 };
            }
            *entry = c;
        }
        t
    });

    let mut c = 0xFFFF_FFFFu32;
    for &b in tag.iter().chain(data.iter()) {
        c = table[((c ^ u32::from(b)) & 0xFF) as usize] ^ (c >> 8);
    }
    c ^ 0xFFFF_FFFF
}
