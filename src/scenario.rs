use crate::geometry::{Point, Rect};
use crate::grid::TerrainGrid;
use crate::obstacle::Obstacle;
use crate::terrain::TerrainType;
use serde::{Deserialize, Serialize};
use std::fs;

/// Snapshot of a full scene: bounds, observers, obstacles and terrain grid
///
/// Obstacle vertex lists are stored raw and re-validated on restore, so a
/// hand-edited file with a 2-vertex polygon fails loudly instead of feeding
/// the engine a degenerate obstacle.
#[derive(Debug, Serialize, Deserialize)]
pub struct Scenario {
    /// Grid revision number at save time
    pub grid_revision: u64,
    pub bounds: Rect,
    pub observers: Vec<Point>,
    /// Raw vertex lists, one per obstacle
    pub obstacles: Vec<Vec<Point>>,
    /// Grid dimensions
    pub grid_cols: i32,
    pub grid_rows: i32,
    /// Terrain per cell, row-major
    pub terrain: Vec<TerrainType>,
}

impl Scenario {
    /// Create a scenario from the current scene state
    pub fn from_scene(
        bounds: Rect,
        observers: &[Point],
        obstacles: &[Obstacle],
        grid: &TerrainGrid,
    ) -> Self {
        Scenario {
            grid_revision: grid.get_revision(),
            bounds,
            observers: observers.to_vec(),
            obstacles: obstacles.iter().map(|o| o.vertices().to_vec()).collect(),
            grid_cols: grid.cols,
            grid_rows: grid.rows,
            terrain: grid.cells.clone(),
        }
    }

    /// Save to file
    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize scenario: {}", e))?;

        fs::write(path, json).map_err(|e| format!("Failed to write scenario file: {}", e))?;

        Ok(())
    }

    /// Load from file
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json =
            fs::read_to_string(path).map_err(|e| format!("Failed to read scenario file: {}", e))?;

        let scenario: Scenario = serde_json::from_str(&json)
            .map_err(|e| format!("Failed to parse scenario file: {}", e))?;

        Ok(scenario)
    }

    /// Restore validated obstacles from the stored vertex lists
    pub fn restore_obstacles(&self) -> Result<Vec<Obstacle>, String> {
        self.obstacles
            .iter()
            .enumerate()
            .map(|(i, vertices)| {
                Obstacle::new(vertices.clone()).map_err(|e| format!("Obstacle {}: {}", i, e))
            })
            .collect()
    }

    /// Restore the terrain grid from the snapshot
    pub fn restore_grid(&self) -> Result<TerrainGrid, String> {
        let expected = (self.grid_cols * self.grid_rows) as usize;
        if self.terrain.len() != expected {
            return Err(format!(
                "Terrain cell count {} does not match {}x{} grid",
                self.terrain.len(),
                self.grid_cols,
                self.grid_rows
            ));
        }

        let mut grid = TerrainGrid::new(self.grid_rows, self.grid_cols);
        grid.cells = self.terrain.clone();
        Ok(grid)
    }
}
