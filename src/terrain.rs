use serde::{Deserialize, Serialize};

/// Terrain classification for a grid cell
///
/// A closed enum rather than free-form strings, so adding a terrain type
/// forces every cost table and match site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainType {
    Open,
    Road,
    Forest,
    Urban,
    /// Impassable: never entered, filtered out during neighbor generation
    Mountain,
}

/// Entry cost per terrain type
///
/// Passed explicitly into `find_path` so callers (and tests) can vary costs
/// without touching shared state. `cost` returns None for impassable terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostTable {
    pub open: u32,
    pub road: u32,
    pub forest: u32,
    pub urban: u32,
}

impl Default for CostTable {
    fn default() -> Self {
        CostTable {
            open: 1,
            road: 1,
            forest: 8,
            urban: 20,
        }
    }
}

impl CostTable {
    /// Cost of entering a cell of the given terrain, None if impassable
    pub fn cost(&self, terrain: TerrainType) -> Option<u32> {
        match terrain {
            TerrainType::Open => Some(self.open),
            TerrainType::Road => Some(self.road),
            TerrainType::Forest => Some(self.forest),
            TerrainType::Urban => Some(self.urban),
            TerrainType::Mountain => None,
        }
    }

    /// Cheapest passable entry cost, used to scale the Manhattan heuristic
    /// so it stays admissible for any table the caller supplies
    pub fn cheapest(&self) -> u32 {
        self.open.min(self.road).min(self.forest).min(self.urban)
    }
}
