use crate::error::InputError;
use crate::geometry::{ray_segment_intersection, Point, Rect, Segment};
use crate::obstacle::Obstacle;

/// Default number of rays - one per degree
pub const DEFAULT_RAY_COUNT: u32 = 360;

/// Compute the visibility polygon from `origin` against a set of obstacles.
///
/// Casts `ray_count` rays at evenly spaced angles (standard math convention,
/// angle 0 along +x, increasing counter-clockwise) and keeps the closest hit
/// per ray among every obstacle edge plus the four scene-boundary edges.
///
/// Returns `[origin, hit_0, .., hit_{ray_count-1}]` - always exactly
/// `ray_count + 1` points, hits in increasing angle order so the result draws
/// as a non-self-intersecting fan.
///
/// An origin outside `bounds` is not rejected: rays are still cast, but the
/// boundary edges may sit behind the origin, in which case a ray that hits
/// nothing falls back to `origin + dir * bounds.diagonal()`. Callers wanting
/// in-bounds observers should check `bounds.contains(origin)` themselves.
pub fn compute_visibility(
    origin: Point,
    obstacles: &[Obstacle],
    bounds: Rect,
    ray_count: u32,
) -> Result<Vec<Point>, InputError> {
    if ray_count == 0 {
        return Err(InputError::InvalidRayCount);
    }

    // Candidate segments: every obstacle edge plus the boundary, collected
    // once so each ray scans the same slice
    let mut segments: Vec<Segment> = Vec::new();
    for obstacle in obstacles {
        segments.extend(obstacle.edges());
    }
    segments.extend(bounds.edges());

    let max_range = bounds.diagonal();
    let step_deg = 360.0 / ray_count as f64;

    let mut polygon = Vec::with_capacity(ray_count as usize + 1);
    polygon.push(origin);

    for i in 0..ray_count {
        let angle = (i as f64 * step_deg).to_radians();
        let dir = (angle.cos(), angle.sin());

        // Closest valid hit wins; parallel segments are skipped inside the
        // intersection solve and never abort the fan
        let mut nearest_t: Option<f64> = None;
        for seg in &segments {
            if let Some(t) = ray_segment_intersection(origin, dir, seg) {
                match nearest_t {
                    Some(best) if t >= best => {}
                    _ => nearest_t = Some(t),
                }
            }
        }

        let t = nearest_t.unwrap_or(max_range);
        polygon.push(Point::new(origin.x + dir.0 * t, origin.y + dir.1 * t));
    }

    Ok(polygon)
}
