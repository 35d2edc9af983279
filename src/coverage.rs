use crate::error::InputError;
use crate::geometry::{point_in_polygon, Point, Rect};
use crate::obstacle::Obstacle;
use crate::visibility::compute_visibility;

/// Estimate the percentage of the scene covered by at least one observer.
///
/// Each observer's visibility polygon is computed via `compute_visibility`,
/// then the union of all fans is rasterized onto a `resolution.0 x
/// resolution.1` boolean mask sampled at cell centers. Cells inside any
/// obstacle interior are subtracted afterwards - an obstacle blocks the area
/// it occupies even when a fan nominally reaches past it on screen.
///
/// Returns a percentage in [0, 100]. The result is an approximation whose
/// precision scales with the mask resolution; doubling the resolution
/// quarters the area represented by one cell.
pub fn estimate_coverage(
    observers: &[Point],
    obstacles: &[Obstacle],
    bounds: Rect,
    resolution: (usize, usize),
    ray_count: u32,
) -> Result<f64, InputError> {
    let (res_x, res_y) = resolution;
    if res_x == 0 || res_y == 0 {
        return Err(InputError::InvalidResolution(res_x, res_y));
    }

    let mut fans: Vec<Vec<Point>> = Vec::with_capacity(observers.len());
    for observer in observers {
        fans.push(compute_visibility(*observer, obstacles, bounds, ray_count)?);
    }

    let cell_w = bounds.width() / res_x as f64;
    let cell_h = bounds.height() / res_y as f64;

    let mut covered = 0usize;
    for gy in 0..res_y {
        for gx in 0..res_x {
            let sample = Point::new(
                bounds.min_x + (gx as f64 + 0.5) * cell_w,
                bounds.min_y + (gy as f64 + 0.5) * cell_h,
            );

            let in_fan = fans.iter().any(|fan| point_in_polygon(sample, fan));
            if !in_fan {
                continue;
            }

            // Obstacle interiors count as uncovered regardless of the fans
            let in_obstacle = obstacles.iter().any(|o| o.contains(sample));
            if !in_obstacle {
                covered += 1;
            }
        }
    }

    Ok(covered as f64 / (res_x * res_y) as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_resolution_rejected() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        let result = estimate_coverage(&[Point::new(5.0, 5.0)], &[], bounds, (0, 10), 36);
        assert_eq!(result, Err(InputError::InvalidResolution(0, 10)));
    }

    #[test]
    fn test_no_observers_means_no_coverage() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        let pct = estimate_coverage(&[], &[], bounds, (20, 20), 36).unwrap();
        assert_eq!(pct, 0.0);
    }
}
