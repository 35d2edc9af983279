use crate::terrain::TerrainType;

/// Grid structure for storing per-cell terrain
/// Indexed (x, y) with x in [0, cols) and y in [0, rows), row-major storage
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainGrid {
    pub rows: i32,
    pub cols: i32,
    pub cells: Vec<TerrainType>,
    /// Revision number - incremented whenever grid cells change
    pub revision: u64,
}

impl TerrainGrid {
    /// Create a new grid with all cells set to open terrain
    pub fn new(rows: i32, cols: i32) -> Self {
        TerrainGrid {
            rows,
            cols,
            cells: vec![TerrainType::Open; (rows * cols) as usize],
            revision: 0,
        }
    }

    /// Build a grid from ASCII rows: '.'=Open, 'r'=Road, 'f'=Forest,
    /// 'u'=Urban, '#'=Mountain. Handy for hand-drawn test scenes.
    pub fn from_rows(rows: &[&str]) -> Self {
        let row_count = rows.len() as i32;
        let col_count = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let mut grid = Self::new(row_count, col_count);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let terrain = match ch {
                    'r' => TerrainType::Road,
                    'f' => TerrainType::Forest,
                    'u' => TerrainType::Urban,
                    '#' => TerrainType::Mountain,
                    _ => TerrainType::Open,
                };
                grid.cells[(y as i32 * col_count + x as i32) as usize] = terrain;
            }
        }
        grid
    }

    /// Check if (x, y) lies inside the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.cols && y >= 0 && y < self.rows
    }

    /// Convert (x, y) coordinates to cell ID
    pub fn get_id(&self, x: i32, y: i32) -> i32 {
        x + y * self.cols
    }

    /// Convert cell ID to (x, y) coordinates
    pub fn get_coords(&self, id: i32) -> (i32, i32) {
        (id % self.cols, id / self.cols)
    }

    /// Get terrain at (x, y); out of bounds reads as impassable
    pub fn get_terrain(&self, x: i32, y: i32) -> TerrainType {
        if !self.in_bounds(x, y) {
            return TerrainType::Mountain;
        }
        self.cells[self.get_id(x, y) as usize]
    }

    /// Set terrain at (x, y), bumping the revision on an effective change
    pub fn set_terrain(&mut self, x: i32, y: i32, terrain: TerrainType) {
        if self.in_bounds(x, y) {
            let id = self.get_id(x, y) as usize;
            if self.cells[id] != terrain {
                self.cells[id] = terrain;
                self.revision += 1;
            }
        }
    }

    /// Get current grid revision number
    pub fn get_revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revision_bumps_only_on_change() {
        let mut grid = TerrainGrid::new(4, 4);
        assert_eq!(grid.get_revision(), 0);
        grid.set_terrain(1, 1, TerrainType::Forest);
        assert_eq!(grid.get_revision(), 1);
        grid.set_terrain(1, 1, TerrainType::Forest); // No change
        assert_eq!(grid.get_revision(), 1);
    }

    #[test]
    fn test_from_rows() {
        let grid = TerrainGrid::from_rows(&[".#.", "rfu"]);
        assert_eq!(grid.rows, 2);
        assert_eq!(grid.cols, 3);
        assert_eq!(grid.get_terrain(1, 0), TerrainType::Mountain);
        assert_eq!(grid.get_terrain(0, 1), TerrainType::Road);
        assert_eq!(grid.get_terrain(1, 1), TerrainType::Forest);
        assert_eq!(grid.get_terrain(2, 1), TerrainType::Urban);
    }

    #[test]
    fn test_out_of_bounds_reads_impassable() {
        let grid = TerrainGrid::new(3, 3);
        assert_eq!(grid.get_terrain(-1, 0), TerrainType::Mountain);
        assert_eq!(grid.get_terrain(0, 3), TerrainType::Mountain);
    }
}
