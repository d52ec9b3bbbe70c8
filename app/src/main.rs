use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use render::{ElevationPalette, rasterize, rasterize_flooded, write_png};
use terrain::{FloodSim, TerrainGrid};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Flood a terrain grid and render it as a color-mapped PNG")]
struct Args {
    /// Water level to flood to; omit to render the dry terrain
    #[arg(short, long)]
    water_level: Option<u8>,

    /// JSON terrain description; defaults to the built-in sample bowl
    #[arg(short, long)]
    terrain: Option<PathBuf>,

    /// Output image path
    #[arg(short, long, default_value = "pixeldata.png")]
    out: PathBuf,

    /// Print a text view of the terrain, `~` for flooded cells
    #[arg(long)]
    ascii: bool,
}

fn load_terrain(path: &Path) -> anyhow::Result<TerrainGrid> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading terrain file {}", path.display()))?;
    let grid: TerrainGrid = serde_json::from_str(&json)
        .with_context(|| format!("parsing terrain file {}", path.display()))?;
    grid.validate()
        .with_context(|| format!("invalid terrain in {}", path.display()))?;
    Ok(grid)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut grid = match &args.terrain {
        Some(path) => load_terrain(path)?,
        None => TerrainGrid::sample(),
    };
    let palette = ElevationPalette::default();

    let pixels = match args.water_level {
        Some(level) => {
            let flooded = FloodSim::new(level).apply(&mut grid);
            info!(level, flooded = flooded.len(), "flood converged");
            rasterize_flooded(&grid, &palette, level)?
        }
        None => rasterize(&grid, &palette)?,
    };

    if args.ascii {
        print!("{}", grid.ascii(args.water_level));
    }

    write_png(&args.out, &pixels, grid.columns as u32, grid.rows as u32)?;
    info!(path = %args.out.display(), "wrote image");
    Ok(())
}
