use serde::{Deserialize, Serialize};

/// Tolerance for the singular-determinant and parameter-range checks
pub const EPSILON: f64 = 1e-9;

/// A point in scene space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A directed line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Segment { a, b }
    }
}

/// Axis-aligned scene bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Rect {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Diagonal length, used as the fallback ray range so a missed ray
    /// still terminates somewhere past the scene
    pub fn diagonal(&self) -> f64 {
        (self.width() * self.width() + self.height() * self.height()).sqrt()
    }

    /// The four boundary edges, corner to corner
    pub fn edges(&self) -> [Segment; 4] {
        let tl = Point::new(self.min_x, self.min_y);
        let tr = Point::new(self.max_x, self.min_y);
        let br = Point::new(self.max_x, self.max_y);
        let bl = Point::new(self.min_x, self.max_y);
        [
            Segment::new(tl, tr),
            Segment::new(tr, br),
            Segment::new(br, bl),
            Segment::new(bl, tl),
        ]
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// Intersect the ray `origin + t * dir` (t > 0) with a segment.
///
/// Solves the 2x2 parametric system with Cramer's rule. Returns the ray
/// parameter `t` of the hit, or None when the system is singular (parallel
/// lines) or the hit falls outside the segment.
pub fn ray_segment_intersection(origin: Point, dir: (f64, f64), seg: &Segment) -> Option<f64> {
    let ex = seg.b.x - seg.a.x;
    let ey = seg.b.y - seg.a.y;

    // [ dir.0  -ex ] [t]   [wx]
    // [ dir.1  -ey ] [s] = [wy]
    let det = ex * dir.1 - ey * dir.0;
    if det.abs() < EPSILON {
        return None; // Parallel or degenerate segment
    }

    let wx = seg.a.x - origin.x;
    let wy = seg.a.y - origin.y;

    let t = (ex * wy - ey * wx) / det;
    let s = (dir.0 * wy - dir.1 * wx) / det;

    if t > EPSILON && s >= -EPSILON && s <= 1.0 + EPSILON {
        Some(t)
    } else {
        None
    }
}

/// Even-odd crossing test for point containment in a polygon
pub fn point_in_polygon(p: Point, vertices: &[Point]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];
        if (vi.y > p.y) != (vj.y > p.y) {
            let cross_x = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
