use std::collections::{HashSet, VecDeque};

use crate::grid::{Point, TerrainGrid};

const NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// Multi-source flood simulation bounded by a water level.
// Water sources are seeded unconditionally; from there the flood spreads
// through 4-connected neighbors whose elevation is at or below the level.
pub struct FloodSim {
    water_level: u8,
}

impl FloodSim {
    pub fn new(water_level: u8) -> Self {
        Self { water_level }
    }

    // Compute the flooded set without touching the grid.
    // Breadth-first over a worklist, so each point is expanded once.
    pub fn flooded(&self, grid: &TerrainGrid) -> HashSet<Point> {
        let mut flooded: HashSet<Point> = grid.water_sources.iter().copied().collect();
        let mut queue: VecDeque<Point> = flooded.iter().copied().collect();

        while let Some(p) = queue.pop_front() {
            for &(dx, dy) in &NEIGHBORS {
                let n = Point::new(p.x + dx, p.y + dy);
                if grid.contains(n)
                    && grid.elevation(n) <= self.water_level
                    && !flooded.contains(&n)
                {
                    flooded.insert(n);
                    queue.push_back(n);
                }
            }
        }
        flooded
    }

    // In-place apply the flood to the grid: every flooded cell's elevation
    // is clamped down to the water level. Returns the flooded set.
    pub fn apply(&self, grid: &mut TerrainGrid) -> HashSet<Point> {
        let flooded = self.flooded(grid);
        for p in &flooded {
            let elev = &mut grid.elevations[p.y as usize][p.x as usize];
            *elev = (*elev).min(self.water_level);
        }
        flooded
    }
}
