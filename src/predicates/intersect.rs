use super::contain::point_in_polygon;
use crate::domain::Polygon;
use crate::geometry::segments_intersect;

/// True iff the two polygons share at least one point.
///
/// Three stages, cheapest first:
/// 1. disjoint bounding boxes cannot intersect;
/// 2. otherwise every edge pair is tested with `segments_intersect`;
/// 3. if no edges cross, one polygon may still be fully nested in the
///    other, so fall back to testing a vertex of each against the other.
pub fn polygons_intersect(a: &Polygon, b: &Polygon) -> bool {
    if !a.bounds().overlaps(&b.bounds()) {
        return false;
    }

    for (a1, a2) in a.edges() {
        for (b1, b2) in b.edges() {
            if segments_intersect(a1, a2, b1, b2) {
                return true;
            }
        }
    }

    point_in_polygon(a.vertices()[0], b) || point_in_polygon(b.vertices()[0], a)
}
