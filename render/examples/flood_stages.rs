use image::RgbaImage;
use image::imageops::{self, FilterType};
use render::{ElevationPalette, rasterize_flooded, to_rgba_bytes};
use terrain::{FloodSim, TerrainGrid};

// Render the sample bowl at every water level, upscaled so the 10×10 grid
// is visible, one PNG per stage.
fn main() {
    let palette = ElevationPalette::default();

    for level in 0..=5u8 {
        let mut grid = TerrainGrid::sample();
        let flooded = FloodSim::new(level).apply(&mut grid);

        let pixels = rasterize_flooded(&grid, &palette, level).expect("rasterize failed");
        let img = RgbaImage::from_raw(
            grid.columns as u32,
            grid.rows as u32,
            to_rgba_bytes(&pixels),
        )
        .expect("buffer matches dimensions");

        // Nearest-neighbor keeps the cells as crisp blocks
        let big = imageops::resize(&img, 200, 200, FilterType::Nearest);
        let filename = format!("flood_stage_{level}.png");
        big.save(&filename).expect("save failed");
        println!(
            "water level {level}: {} cells flooded, saved {filename}",
            flooded.len()
        );
    }
}
