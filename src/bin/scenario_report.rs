/// Report tool for scenario files
///
/// Reads a scenario JSON produced by Scenario::save_to_file and prints
/// per-observer fan sizes, the union coverage percentage, and a sample path
/// across the terrain grid.
use std::env;
use std::process;

use tacsim::config::Config;
use tacsim::pathfinding::{find_path, format_path, Position};
use tacsim::scenario::Scenario;
use tacsim::{compute_visibility, estimate_coverage};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <scenario.json>", args[0]);
        eprintln!("Prints visibility, coverage and pathfinding stats for a scenario");
        process::exit(1);
    }

    let config = Config::load();

    let scenario = match Scenario::load_from_file(&args[1]) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let obstacles = match scenario.restore_obstacles() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("=== Scenario: {} ===", args[1]);
    println!(
        "Bounds: ({}, {}) .. ({}, {})",
        scenario.bounds.min_x, scenario.bounds.min_y, scenario.bounds.max_x, scenario.bounds.max_y
    );
    println!(
        "Observers: {}, obstacles: {}, grid: {}x{} (revision {})\n",
        scenario.observers.len(),
        obstacles.len(),
        scenario.grid_cols,
        scenario.grid_rows,
        scenario.grid_revision
    );

    let ray_count = config.visibility.ray_count;
    for (i, observer) in scenario.observers.iter().enumerate() {
        match compute_visibility(*observer, &obstacles, scenario.bounds, ray_count) {
            Ok(fan) => println!(
                "Observer {} at ({:.1}, {:.1}): {} fan points",
                i,
                observer.x,
                observer.y,
                fan.len()
            ),
            Err(e) => println!("Observer {}: {}", i, e),
        }
    }

    let resolution = (
        config.coverage.resolution_cols,
        config.coverage.resolution_rows,
    );
    match estimate_coverage(
        &scenario.observers,
        &obstacles,
        scenario.bounds,
        resolution,
        ray_count,
    ) {
        Ok(pct) => println!(
            "\nCoverage: {:.1}% at {}x{} resolution",
            pct, resolution.0, resolution.1
        ),
        Err(e) => println!("\nCoverage: {}", e),
    }

    let grid = match scenario.restore_grid() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let costs = config.costs.to_table();
    let start = Position::new(0, 0);
    let goal = Position::new(grid.cols - 1, grid.rows - 1);
    println!(
        "\nPath ({},{}) -> ({},{}):",
        start.x, start.y, goal.x, goal.y
    );
    match find_path(&grid, &costs, start, goal) {
        Ok(Some(path)) => {
            println!("  {}", format_path(&path));
            println!("  {} cells", path.len());
        }
        Ok(None) => println!("  No path"),
        Err(e) => println!("  {}", e),
    }
}
