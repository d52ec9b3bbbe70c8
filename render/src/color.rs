use palette::{Gradient, LinSrgb};
use thiserror::Error;

// 8-bit RGBA color, stored in channel order r, g, b, a
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("elevation {elevation} outside palette range 1..={len}")]
pub struct PaletteError {
    pub elevation: u8,
    pub len: usize,
}

// Ordered colors indexed by elevation (1-based), plus the color drawn for
// flooded cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevationPalette {
    colors: Vec<Pixel>,
    flood: Pixel,
}

// Dark blue-green, used for cells at or below the water level
const FLOOD_COLOR: Pixel = Pixel::opaque(0, 49, 83);

impl Default for ElevationPalette {
    // Five elevation bands: green lowlands up to rust-colored peaks
    fn default() -> Self {
        Self::new(vec![
            Pixel::opaque(0, 102, 0),
            Pixel::opaque(154, 205, 50),
            Pixel::opaque(251, 236, 93),
            Pixel::opaque(212, 175, 55),
            Pixel::opaque(166, 60, 20),
        ])
    }
}

impl ElevationPalette {
    pub fn new(colors: Vec<Pixel>) -> Self {
        Self {
            colors,
            flood: FLOOD_COLOR,
        }
    }

    // Build a discrete palette by sampling a color gradient at `len` evenly
    // spaced positions across its domain.
    pub fn from_gradient(stops: Vec<(f32, LinSrgb)>, len: usize) -> Self {
        let gradient = Gradient::with_domain(stops);
        let colors = (0..len)
            .map(|i| {
                let t = if len <= 1 {
                    0.0
                } else {
                    i as f32 / (len - 1) as f32
                };
                let rgb = gradient.get(t).into_format::<u8>();
                Pixel::opaque(rgb.red, rgb.green, rgb.blue)
            })
            .collect();
        Self::new(colors)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn flood_color(&self) -> Pixel {
        self.flood
    }

    // Color for a 1-based elevation. Elevation 0 or past the end of the
    // palette is a hard error, never a clamp.
    pub fn color_for(&self, elevation: u8) -> Result<Pixel, PaletteError> {
        if elevation == 0 || elevation as usize > self.colors.len() {
            return Err(PaletteError {
                elevation,
                len: self.colors.len(),
            });
        }
        Ok(self.colors[elevation as usize - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::{ElevationPalette, PaletteError, Pixel};
    use palette::LinSrgb;

    #[test]
    fn default_palette_lookup() {
        let palette = ElevationPalette::default();
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.color_for(1), Ok(Pixel::opaque(0, 102, 0)));
        assert_eq!(palette.color_for(5), Ok(Pixel::opaque(166, 60, 20)));
    }

    #[test]
    fn out_of_range_elevation_is_an_error() {
        let palette = ElevationPalette::default();
        assert_eq!(
            palette.color_for(0),
            Err(PaletteError {
                elevation: 0,
                len: 5,
            })
        );
        assert_eq!(
            palette.color_for(6),
            Err(PaletteError {
                elevation: 6,
                len: 5,
            })
        );
    }

    #[test]
    fn gradient_sampling() {
        let palette = ElevationPalette::from_gradient(
            vec![
                (0.0, LinSrgb::new(0.0, 0.0, 1.0)),
                (1.0, LinSrgb::new(1.0, 0.0, 0.0)),
            ],
            5,
        );
        assert_eq!(palette.len(), 5);
        let low = palette.color_for(1).unwrap();
        let high = palette.color_for(5).unwrap();
        // Endpoints keep the dominant channel of their stop
        assert!(low.b > low.r);
        assert!(high.r > high.b);
        assert_eq!(low.a, 255);
    }
}
