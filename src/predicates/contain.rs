use crate::domain::Polygon;
use crate::geometry::{Bounds, Point};

/// Ray-casting point-in-polygon test.
///
/// Casts a horizontal ray to the left of `p` and toggles on every edge it
/// crosses. The half-open comparison (`a.y > p.y` vs `b.y > p.y`) assigns
/// each edge's lower endpoint to exactly one side, so a ray through a
/// vertex is counted once. The x-intersection is computed in `f64`; the
/// division is only reached when the endpoint y-values differ.
pub fn point_in_polygon(p: Point, polygon: &Polygon) -> bool {
    let vertices = polygon.vertices();
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[j];
        if (a.y > p.y) != (b.y > p.y) {
            let cross_x = (b.x as f64 - a.x as f64) * (p.y as f64 - a.y as f64)
                / (b.y as f64 - a.y as f64)
                + a.x as f64;
            if (p.x as f64) < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// True iff `polygon` fits inside `frame` (bounding-box containment,
/// edges inclusive).
pub fn polygon_in_frame(polygon: &Polygon, frame: &Bounds) -> bool {
    frame.contains(&polygon.bounds())
}
