use terrain::TerrainGrid;

use crate::RenderError;
use crate::color::{ElevationPalette, Pixel};

// Build a row-major pixel buffer of length rows×columns for the grid.
// The row stride is the column count, so non-square grids index correctly.
pub fn rasterize(
    grid: &TerrainGrid,
    palette: &ElevationPalette,
) -> Result<Vec<Pixel>, RenderError> {
    let mut buffer = Vec::with_capacity(grid.rows * grid.columns);
    for row in &grid.elevations {
        for &elev in row {
            buffer.push(palette.color_for(elev)?);
        }
    }
    Ok(buffer)
}

// Like `rasterize`, but cells at or below the water level take the palette's
// flood color instead of an elevation lookup. Flooding can clamp elevations
// all the way to 0, which only this variant can draw.
pub fn rasterize_flooded(
    grid: &TerrainGrid,
    palette: &ElevationPalette,
    water_level: u8,
) -> Result<Vec<Pixel>, RenderError> {
    let mut buffer = Vec::with_capacity(grid.rows * grid.columns);
    for row in &grid.elevations {
        for &elev in row {
            if elev <= water_level {
                buffer.push(palette.flood_color());
            } else {
                buffer.push(palette.color_for(elev)?);
            }
        }
    }
    Ok(buffer)
}
