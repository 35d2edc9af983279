use std::env;
use tacsim::pathfinding::{find_path, Position};
use tacsim::scenario::Scenario;
use tacsim::{compute_visibility, CostTable, Obstacle, Point, Rect, TerrainGrid, TerrainType};

fn temp_path(name: &str) -> String {
    let mut path = env::temp_dir();
    path.push(name);
    path.to_string_lossy().into_owned()
}

fn build_scene() -> (Rect, Vec<Point>, Vec<Obstacle>, TerrainGrid) {
    let bounds = Rect::new(0.0, 0.0, 120.0, 80.0);
    let observers = vec![Point::new(10.0, 10.0), Point::new(100.0, 70.0)];
    let obstacles = vec![
        Obstacle::rect(40.0, 20.0, 60.0, 50.0),
        Obstacle::new(vec![
            Point::new(80.0, 10.0),
            Point::new(95.0, 15.0),
            Point::new(85.0, 30.0),
        ])
        .unwrap(),
    ];
    let mut grid = TerrainGrid::new(8, 12);
    grid.set_terrain(5, 3, TerrainType::Mountain);
    grid.set_terrain(5, 4, TerrainType::Mountain);
    grid.set_terrain(2, 2, TerrainType::Forest);
    grid.set_terrain(3, 2, TerrainType::Road);
    (bounds, observers, obstacles, grid)
}

#[test]
fn test_scenario_round_trip() {
    println!("\n=== Test: Save/load round trip ===");

    let (bounds, observers, obstacles, grid) = build_scene();
    let scenario = Scenario::from_scene(bounds, &observers, &obstacles, &grid);

    let path = temp_path("tacsim_round_trip.json");
    scenario.save_to_file(&path).expect("save should succeed");
    let loaded = Scenario::load_from_file(&path).expect("load should succeed");

    assert_eq!(loaded.bounds, bounds);
    assert_eq!(loaded.observers, observers);
    assert_eq!(loaded.grid_revision, grid.get_revision());

    let restored_obstacles = loaded.restore_obstacles().expect("obstacles should validate");
    assert_eq!(restored_obstacles, obstacles);

    let restored_grid = loaded.restore_grid().expect("grid should restore");
    assert_eq!(restored_grid.cells, grid.cells);
    assert_eq!(restored_grid.get_terrain(5, 3), TerrainType::Mountain);
}

#[test]
fn test_restored_scene_computes_identically() {
    println!("\n=== Test: Computation on restored scene ===");

    let (bounds, observers, obstacles, grid) = build_scene();
    let scenario = Scenario::from_scene(bounds, &observers, &obstacles, &grid);

    let path = temp_path("tacsim_recompute.json");
    scenario.save_to_file(&path).expect("save should succeed");
    let loaded = Scenario::load_from_file(&path).expect("load should succeed");

    let restored_obstacles = loaded.restore_obstacles().unwrap();
    let restored_grid = loaded.restore_grid().unwrap();
    let costs = CostTable::default();

    // Visibility fan, before vs after the round trip
    let before = compute_visibility(observers[0], &obstacles, bounds, 90).unwrap();
    let after = compute_visibility(loaded.observers[0], &restored_obstacles, bounds, 90).unwrap();
    assert_eq!(before, after);

    // Pathfinding, before vs after
    let start = Position::new(0, 0);
    let goal = Position::new(11, 7);
    let path_before = find_path(&grid, &costs, start, goal).unwrap();
    let path_after = find_path(&restored_grid, &costs, start, goal).unwrap();
    assert_eq!(path_before, path_after);
}

#[test]
fn test_tampered_obstacle_fails_loudly() {
    let (bounds, observers, obstacles, grid) = build_scene();
    let mut scenario = Scenario::from_scene(bounds, &observers, &obstacles, &grid);

    // Hand-edited file with a 2-vertex "polygon"
    scenario.obstacles.push(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);

    let err = scenario.restore_obstacles().unwrap_err();
    assert!(err.contains("Obstacle 2"), "Error should name the bad obstacle: {}", err);
}

#[test]
fn test_mismatched_grid_dimensions_fail() {
    let (bounds, observers, obstacles, grid) = build_scene();
    let mut scenario = Scenario::from_scene(bounds, &observers, &obstacles, &grid);

    scenario.terrain.pop();

    let err = scenario.restore_grid().unwrap_err();
    assert!(err.contains("does not match"), "Unexpected error: {}", err);
}

#[test]
fn test_load_missing_file_reports_error() {
    let err = Scenario::load_from_file(&temp_path("tacsim_definitely_missing.json")).unwrap_err();
    assert!(err.contains("Failed to read"), "Unexpected error: {}", err);
}
