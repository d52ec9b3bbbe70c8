use serde::{Deserialize, Serialize};
use thiserror::Error;

// 2D elevation map: row-major Vec<Vec<u8>> of size rows×columns
// access as `map[y][x]`.
pub type ElevationMap = Vec<Vec<u8>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TerrainError {
    #[error("terrain grid has no cells")]
    Empty,
    #[error("grid claims {rows} rows but elevation data has {got}")]
    DimensionMismatch { rows: usize, got: usize },
    #[error("row {row} has {got} columns, expected {expected}")]
    Ragged {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("elevation at ({x}, {y}) is zero, elevations start at 1")]
    ZeroElevation { x: usize, y: usize },
    #[error("water source ({x}, {y}) lies outside the {columns}×{rows} grid")]
    SourceOutOfBounds {
        x: i32,
        y: i32,
        rows: usize,
        columns: usize,
    },
}

// Grid coordinate: x is the column, y is the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainGrid {
    pub rows: usize,
    pub columns: usize,
    pub water_sources: Vec<Point>,
    pub elevations: ElevationMap,
}

impl TerrainGrid {
    // Build a grid from water sources and elevation rows.
    // Dimensions are derived from the elevation data; sources out of bounds,
    // ragged rows and zero elevations are rejected up front.
    pub fn new(water_sources: Vec<Point>, elevations: ElevationMap) -> Result<Self, TerrainError> {
        let grid = Self {
            rows: elevations.len(),
            columns: elevations.first().map_or(0, |row| row.len()),
            water_sources,
            elevations,
        };
        grid.validate()?;
        Ok(grid)
    }

    // Re-check the invariants, e.g. after deserializing a grid from a file.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(TerrainError::Empty);
        }
        // The stored row count must match the data, or the source bounds
        // check below would trust rows that do not exist
        if self.elevations.len() != self.rows {
            return Err(TerrainError::DimensionMismatch {
                rows: self.rows,
                got: self.elevations.len(),
            });
        }
        for (y, row) in self.elevations.iter().enumerate() {
            if row.len() != self.columns {
                return Err(TerrainError::Ragged {
                    row: y,
                    got: row.len(),
                    expected: self.columns,
                });
            }
            for (x, &elev) in row.iter().enumerate() {
                if elev == 0 {
                    return Err(TerrainError::ZeroElevation { x, y });
                }
            }
        }
        for &p in &self.water_sources {
            if !self.contains(p) {
                return Err(TerrainError::SourceOutOfBounds {
                    x: p.x,
                    y: p.y,
                    rows: self.rows,
                    columns: self.columns,
                });
            }
        }
        Ok(())
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && (p.x as usize) < self.columns && p.y >= 0 && (p.y as usize) < self.rows
    }

    // Elevation at an in-bounds point.
    pub fn elevation(&self, p: Point) -> u8 {
        self.elevations[p.y as usize][p.x as usize]
    }

    // The 10×10 bowl used by the standard invocation: elevation 5 at the rim
    // stepping down to 1 in the middle, single water source in the
    // bottom-left corner.
    pub fn sample() -> Self {
        let elevations = vec![
            vec![5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
            vec![5, 4, 4, 4, 4, 4, 4, 4, 4, 5],
            vec![5, 4, 3, 3, 3, 3, 3, 3, 4, 5],
            vec![5, 4, 3, 2, 2, 2, 2, 3, 4, 5],
            vec![5, 4, 3, 2, 1, 1, 2, 3, 4, 5],
            vec![5, 4, 3, 2, 1, 1, 2, 3, 4, 5],
            vec![5, 4, 3, 2, 2, 2, 2, 3, 4, 5],
            vec![5, 4, 3, 3, 3, 3, 3, 3, 4, 5],
            vec![5, 4, 4, 4, 4, 4, 4, 4, 4, 5],
            vec![5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
        ];
        Self::new(vec![Point::new(0, 9)], elevations).expect("sample terrain is valid")
    }

    // Text view of the grid: digits for dry cells, `~` for cells at or
    // below the water level.
    pub fn ascii(&self, water_level: Option<u8>) -> String {
        let mut out = String::with_capacity(self.rows * (self.columns + 1));
        for row in &self.elevations {
            for &elev in row {
                match water_level {
                    Some(level) if elev <= level => out.push('~'),
                    _ => out.push_str(&elev.to_string()),
                }
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, TerrainError, TerrainGrid};

    #[test]
    fn sample_dimensions() {
        let grid = TerrainGrid::sample();
        assert_eq!(grid.rows, 10);
        assert_eq!(grid.columns, 10);
        assert_eq!(grid.water_sources, vec![Point::new(0, 9)]);
        assert_eq!(grid.elevation(Point::new(0, 9)), 5);
        assert_eq!(grid.elevation(Point::new(4, 4)), 1);
    }

    #[test]
    fn rejects_out_of_bounds_source() {
        let err = TerrainGrid::new(vec![Point::new(3, 0)], vec![vec![1, 1], vec![1, 1]]);
        assert_eq!(
            err,
            Err(TerrainError::SourceOutOfBounds {
                x: 3,
                y: 0,
                rows: 2,
                columns: 2,
            })
        );
        let err = TerrainGrid::new(vec![Point::new(0, -1)], vec![vec![1, 1], vec![1, 1]]);
        assert!(matches!(err, Err(TerrainError::SourceOutOfBounds { .. })));
    }

    #[test]
    fn rejects_malformed_elevations() {
        assert_eq!(TerrainGrid::new(vec![], vec![]), Err(TerrainError::Empty));
        assert_eq!(
            TerrainGrid::new(vec![], vec![vec![1, 1], vec![1]]),
            Err(TerrainError::Ragged {
                row: 1,
                got: 1,
                expected: 2,
            })
        );
        assert_eq!(
            TerrainGrid::new(vec![], vec![vec![1, 0]]),
            Err(TerrainError::ZeroElevation { x: 1, y: 0 })
        );
    }

    #[test]
    fn ascii_marks_water() {
        let grid = TerrainGrid::new(vec![Point::new(0, 0)], vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(grid.ascii(None), "12\n34\n");
        assert_eq!(grid.ascii(Some(2)), "~~\n34\n");
        assert_eq!(grid.ascii(Some(4)), "~~\n~~\n");
    }

    #[test]
    fn validate_rejects_stale_dimensions() {
        // A deserialized grid may claim more rows than its data carries;
        // a source in the phantom row must be caught here, not by an
        // out-of-bounds panic in the flood
        let json = r#"{
            "rows": 3,
            "columns": 1,
            "water_sources": [{ "x": 0, "y": 2 }],
            "elevations": [[1], [1]]
        }"#;
        let grid: TerrainGrid = serde_json::from_str(json).unwrap();
        assert_eq!(
            grid.validate(),
            Err(TerrainError::DimensionMismatch { rows: 3, got: 2 })
        );
    }

    #[test]
    fn json_roundtrip() {
        let grid = TerrainGrid::sample();
        let json = serde_json::to_string(&grid).unwrap();
        let back: TerrainGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        back.validate().unwrap();
    }
}
