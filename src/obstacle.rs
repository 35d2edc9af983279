use crate::error::InputError;
use crate::geometry::{point_in_polygon, Point, Segment};
use serde::{Deserialize, Serialize};

/// A closed polygonal obstacle
///
/// Vertices are stored in order; edge i runs from vertex i to vertex
/// (i + 1) mod N. Construction rejects polygons with fewer than 3 vertices,
/// so every Obstacle the engine sees encloses an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    vertices: Vec<Point>,
}

impl Obstacle {
    pub fn new(vertices: Vec<Point>) -> Result<Self, InputError> {
        if vertices.len() < 3 {
            return Err(InputError::DegeneratePolygon(vertices.len()));
        }
        Ok(Obstacle { vertices })
    }

    /// Axis-aligned rectangular obstacle, a common case in test scenes
    pub fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Obstacle {
            vertices: vec![
                Point::new(min_x, min_y),
                Point::new(max_x, min_y),
                Point::new(max_x, max_y),
                Point::new(min_x, max_y),
            ],
        }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Derived edge list: vertex i -> vertex (i + 1) mod N
    pub fn edges(&self) -> Vec<Segment> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Whether a point lies inside the obstacle interior
    pub fn contains(&self, p: Point) -> bool {
        point_in_polygon(p, &self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_degenerate_polygon() {
        let result = Obstacle::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert_eq!(result, Err(InputError::DegeneratePolygon(2)));
    }

    #[test]
    fn test_edge_list_closes_the_polygon() {
        let tri = Obstacle::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 3.0),
        ])
        .unwrap();
        let edges = tri.edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].b, Point::new(0.0, 0.0)); // Last edge returns to first vertex
    }
}
