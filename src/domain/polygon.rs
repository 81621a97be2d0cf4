use crate::geometry::{Bounds, Point};

/// A simple polygon: an ordered vertex list with no closing duplicate.
/// Edge `i` connects vertex `i` to vertex `(i + 1) % n`.
///
/// Construction enforces the only structural invariant (at least 3
/// vertices); collinear runs and self-intersections are allowed, so every
/// operation below must be well-defined on them. Values are never mutated
/// after construction - collection edits replace entries wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Build a polygon from a vertex list. Returns `None` when fewer than
    /// 3 vertices are given, so an undersized polygon never exists as a value.
    pub fn new(vertices: Vec<Point>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        Some(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterate the edges in order, including the wrap-around edge from the
    /// last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Unsigned area via the shoelace formula.
    ///
    /// Cross terms are accumulated in `i64` and the absolute value halved at
    /// the end, so the result does not depend on vertex order or on which
    /// vertex the list starts at.
    pub fn area(&self) -> f64 {
        let twice: i64 = self
            .edges()
            .map(|(a, b)| a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64)
            .sum();
        twice.abs() as f64 / 2.0
    }

    /// Axis-aligned bounding box.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(&self.vertices).expect("polygon has at least 3 vertices")
    }

    /// True iff some vertex joins two perpendicular edges (dot product of
    /// the incident edge vectors is exactly 0, in `i128`).
    ///
    /// Known quirk, kept deliberately: a zero-length edge (two coincident
    /// consecutive vertices) has a zero vector whose dot product with
    /// anything is 0, so such a vertex also reports a right angle.
    pub fn has_right_angle(&self) -> bool {
        let n = self.vertices.len();
        (0..n).any(|i| {
            let prev = self.vertices[(i + n - 1) % n];
            let curr = self.vertices[i];
            let next = self.vertices[(i + 1) % n];
            let ax = curr.x as i128 - prev.x as i128;
            let ay = curr.y as i128 - prev.y as i128;
            let bx = next.x as i128 - curr.x as i128;
            let by = next.y as i128 - curr.y as i128;
            ax * bx + ay * by == 0
        })
    }
}
