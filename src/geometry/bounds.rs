use super::Point;

/// Axis-aligned bounding box on the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    /// Create bounds from a set of points. Returns `None` on an empty set.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for &p in &points[1..] {
            bounds.expand(p);
        }
        Some(bounds)
    }

    /// Expand bounds to include another point.
    pub fn expand(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    /// Smallest bounds covering both `self` and `other`.
    pub fn merge(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// True iff `other` lies entirely within `self` (edges inclusive).
    pub fn contains(&self, other: &Bounds) -> bool {
        self.min_x <= other.min_x
            && other.max_x <= self.max_x
            && self.min_y <= other.min_y
            && other.max_y <= self.max_y
    }

    /// True iff the two boxes share at least one point (edges inclusive).
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_from_points() {
        let bounds = Bounds::from_points(&points(&[(0, 0), (10, 20), (5, -3)])).unwrap();
        assert_eq!(bounds.min_x, 0);
        assert_eq!(bounds.max_x, 10);
        assert_eq!(bounds.min_y, -3);
        assert_eq!(bounds.max_y, 20);
    }

    #[test]
    fn test_from_points_empty() {
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn test_merge_and_contains() {
        let a = Bounds::from_points(&points(&[(0, 0), (4, 4)])).unwrap();
        let b = Bounds::from_points(&points(&[(2, 2), (8, 3)])).unwrap();
        let merged = a.merge(&b);
        assert!(merged.contains(&a));
        assert!(merged.contains(&b));
        assert!(!a.contains(&b));
    }

    #[test]
    fn test_overlaps() {
        let a = Bounds::from_points(&points(&[(0, 0), (4, 4)])).unwrap();
        let b = Bounds::from_points(&points(&[(3, 3), (8, 8)])).unwrap();
        let c = Bounds::from_points(&points(&[(5, 5), (9, 9)])).unwrap();
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        // Touching edges count as overlapping
        let d = Bounds::from_points(&points(&[(4, 0), (6, 4)])).unwrap();
        assert!(a.overlaps(&d));
    }
}
