// render maps elevations to colors and encodes the pixel buffer as a PNG
pub mod color;
pub mod encode;
pub mod raster;

use std::path::PathBuf;

use thiserror::Error;

pub use color::{ElevationPalette, PaletteError, Pixel};
pub use encode::{encode_png, to_rgba_bytes, write_png};
pub use raster::{rasterize, rasterize_flooded};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error("pixel buffer of {len} entries does not fill a {width}×{height} image")]
    BufferSize {
        len: usize,
        width: u32,
        height: u32,
    },
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("writing {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
