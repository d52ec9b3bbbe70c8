use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::RenderError;
use crate::color::Pixel;

// Flatten pixels into tightly packed RGBA bytes, 4 bytes per pixel.
pub fn to_rgba_bytes(pixels: &[Pixel]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(pixels.len() * 4);
    for p in pixels {
        bytes.extend_from_slice(&[p.r, p.g, p.b, p.a]);
    }
    bytes
}

// Encode a row-major pixel buffer as an in-memory PNG.
pub fn encode_png(pixels: &[Pixel], width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
    let img =
        RgbaImage::from_raw(width, height, to_rgba_bytes(pixels)).ok_or(RenderError::BufferSize {
            len: pixels.len(),
            width,
            height,
        })?;
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

// Encode and write in one step. Encoding happens fully in memory first, so
// an encoder failure leaves no file behind.
pub fn write_png(
    path: &Path,
    pixels: &[Pixel],
    width: u32,
    height: u32,
) -> Result<(), RenderError> {
    let bytes = encode_png(pixels, width, height)?;
    fs::write(path, bytes).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })
}
