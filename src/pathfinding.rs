use crate::error::InputError;
use crate::grid::TerrainGrid;
use crate::terrain::CostTable;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

// Trace logging flag - set to true to enable debug output
const TRACE_PATHFINDING: bool = false;

/// A position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Manhattan distance: the admissible heuristic for a 4-connected grid
    pub fn manhattan(&self, other: &Position) -> u32 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }
}

/// A node in the pathfinding search
#[derive(Debug, Clone, Copy)]
struct PathNode {
    position: Position,
    /// f = g + h, the heap ordering key
    estimated_total: u32,
    /// Insertion sequence number, the deterministic secondary key for
    /// equal-f nodes
    seq: u64,
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_total == other.estimated_total && self.seq == other.seq
    }
}

impl Eq for PathNode {}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .estimated_total
            .cmp(&self.estimated_total)
            // Tie-breaker: earlier insertion wins, for deterministic paths
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Find the minimum-cumulative-cost path between two grid cells.
///
/// A* over the 4-connected grid where the cost of a step is the cost of
/// ENTERING the destination cell (the start cell is never charged).
/// Impassable cells are not neighbors at all - they are filtered out during
/// neighbor generation rather than given a huge cost, so a goal walled off
/// by them reports `Ok(None)` instead of a path through a "very expensive"
/// cell.
///
/// Returns `Ok(None)` when the goal is unreachable or either endpoint sits
/// on impassable terrain; out-of-bounds endpoints are a caller error and
/// rejected before the search begins.
pub fn find_path(
    grid: &TerrainGrid,
    costs: &CostTable,
    start: Position,
    goal: Position,
) -> Result<Option<Vec<Position>>, InputError> {
    for p in [start, goal] {
        if !grid.in_bounds(p.x, p.y) {
            return Err(InputError::OutOfBounds {
                x: p.x,
                y: p.y,
                cols: grid.cols,
                rows: grid.rows,
            });
        }
    }

    // Cannot stand on impassable terrain
    if costs.cost(grid.get_terrain(start.x, start.y)).is_none()
        || costs.cost(grid.get_terrain(goal.x, goal.y)).is_none()
    {
        return Ok(None);
    }

    if start == goal {
        return Ok(Some(vec![start]));
    }

    if TRACE_PATHFINDING {
        println!(
            "[find_path] START: ({},{}) -> ({},{}) on {}x{} grid",
            start.x, start.y, goal.x, goal.y, grid.cols, grid.rows
        );
    }

    // Scale the heuristic by the cheapest entry cost so it stays a lower
    // bound for any cost table the caller supplies
    let h_scale = costs.cheapest();

    let mut queue: BinaryHeap<PathNode> = BinaryHeap::new();
    let mut best_cost: HashMap<Position, u32> = HashMap::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut next_seq: u64 = 0;

    best_cost.insert(start, 0);
    queue.push(PathNode {
        position: start,
        estimated_total: start.manhattan(&goal) * h_scale,
        seq: next_seq,
    });
    next_seq += 1;

    let mut iterations = 0u64;
    while let Some(node) = queue.pop() {
        iterations += 1;
        let pos = node.position;
        let g = best_cost[&pos];

        if pos == goal {
            let path = reconstruct_path(&came_from, start, goal);
            if TRACE_PATHFINDING {
                println!(
                    "[find_path] FOUND PATH: {} cells, cost={}, {} iterations",
                    path.len(),
                    g,
                    iterations
                );
            }
            return Ok(Some(path));
        }

        // Stale heap entry from a superseded cost
        if node.estimated_total > g + pos.manhattan(&goal) * h_scale {
            continue;
        }

        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let next = Position::new(pos.x + dx, pos.y + dy);
            if !grid.in_bounds(next.x, next.y) {
                continue;
            }
            // Impassable cells are simply not neighbors
            let step_cost = match costs.cost(grid.get_terrain(next.x, next.y)) {
                Some(c) => c,
                None => continue,
            };

            let tentative = g + step_cost;
            let is_better = match best_cost.get(&next) {
                Some(&known) => tentative < known,
                None => true,
            };
            if is_better {
                best_cost.insert(next, tentative);
                came_from.insert(next, pos);
                queue.push(PathNode {
                    position: next,
                    estimated_total: tentative + next.manhattan(&goal) * h_scale,
                    seq: next_seq,
                });
                next_seq += 1;
            }
        }
    }

    if TRACE_PATHFINDING {
        println!("[find_path] NO PATH FOUND after {} iterations", iterations);
    }
    Ok(None)
}

/// Total cost of a path under a cost table: the sum of entered-cell costs,
/// start excluded. Returns None if any entered cell is impassable.
pub fn path_cost(grid: &TerrainGrid, costs: &CostTable, path: &[Position]) -> Option<u32> {
    let mut total = 0u32;
    for p in path.iter().skip(1) {
        total += costs.cost(grid.get_terrain(p.x, p.y))?;
    }
    Some(total)
}

fn reconstruct_path(
    came_from: &HashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        current = came_from[&current];
        path.push(current);
    }
    path.reverse();
    path
}

/// Format path for display
pub fn format_path(path: &[Position]) -> String {
    if path.is_empty() {
        return "No path".to_string();
    }

    let mut result = String::new();
    for (i, pos) in path.iter().enumerate() {
        if i > 0 {
            result.push_str(" -> ");
        }
        result.push_str(&format!("({},{})", pos.x, pos.y));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_equals_goal() {
        let grid = TerrainGrid::new(3, 3);
        let costs = CostTable::default();
        let path = find_path(&grid, &costs, Position::new(1, 1), Position::new(1, 1)).unwrap();
        assert_eq!(path, Some(vec![Position::new(1, 1)]));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let grid = TerrainGrid::new(3, 3);
        let costs = CostTable::default();
        let result = find_path(&grid, &costs, Position::new(0, 0), Position::new(3, 0));
        assert!(matches!(result, Err(InputError::OutOfBounds { .. })));
    }

    #[test]
    fn test_goal_on_mountain_is_no_path() {
        let grid = TerrainGrid::from_rows(&["..#"]);
        let costs = CostTable::default();
        let path = find_path(&grid, &costs, Position::new(0, 0), Position::new(2, 0)).unwrap();
        assert_eq!(path, None);
    }
}
