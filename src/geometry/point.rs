/// A point on the integer grid.
///
/// Coordinates are `i32`. Orientation and angle tests widen every operand
/// before subtracting or multiplying (differences need 33 bits, their
/// products 66), so the full `i32` range is valid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Cross product `(b - a) x (c - a)` in exact `i128` arithmetic.
///
/// # Returns
/// * positive - `c` lies to the left of the directed line `a -> b`
/// * zero - the three points are collinear
/// * negative - `c` lies to the right
pub fn orientation(a: Point, b: Point, c: Point) -> i128 {
    let abx = b.x as i128 - a.x as i128;
    let aby = b.y as i128 - a.y as i128;
    let acx = c.x as i128 - a.x as i128;
    let acy = c.y as i128 - a.y as i128;
    abx * acy - aby * acx
}

/// True iff `p` lies on the closed segment `a..b`.
///
/// Collinearity first (`orientation == 0`), then a bounding-box check to
/// restrict to the segment itself rather than the whole line.
pub fn on_segment(a: Point, b: Point, p: Point) -> bool {
    if orientation(a, b, p) != 0 {
        return false;
    }
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// True iff segments `a..b` and `c..d` share at least one point.
///
/// Standard orientation-based test: a proper crossing when the two
/// orientation pairs have opposite signs; touching endpoints and collinear
/// overlap are resolved through `on_segment` and count as intersecting.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let o1 = orientation(a, b, c).signum();
    let o2 = orientation(a, b, d).signum();
    let o3 = orientation(c, d, a).signum();
    let o4 = orientation(c, d, b).signum();

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Degenerate cases: an endpoint lying on the other segment covers both
    // endpoint touches and full collinear overlap.
    (o1 == 0 && on_segment(a, b, c))
        || (o2 == 0 && on_segment(a, b, d))
        || (o3 == 0 && on_segment(c, d, a))
        || (o4 == 0 && on_segment(c, d, b))
}
