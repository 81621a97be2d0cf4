use crate::domain::Polygon;
use crate::geometry::Point;

/// True iff `candidate` can be mapped onto `reference` by a rigid
/// transform: a cyclic relabeling of the vertex list (rotation), an
/// optional reversal (reflection), and a translation. Scaling is excluded,
/// so this is congruence, not similarity.
///
/// For each of the N shifts of each vertex order, the translation is fixed
/// by the first vertex pair and then checked elementwise. O(N^2) in the
/// vertex count.
pub fn congruent(candidate: &Polygon, reference: &Polygon) -> bool {
    let n = reference.vertex_count();
    if candidate.vertex_count() != n {
        return false;
    }

    let forward = candidate.vertices().to_vec();
    let mut backward = forward.clone();
    backward.reverse();

    for order in [&forward, &backward] {
        for shift in 0..n {
            if matches_with_shift(order, reference.vertices(), shift) {
                return true;
            }
        }
    }
    false
}

/// Check `order` rotated by `shift` against `reference` under the
/// translation determined by the first vertex pair. Translation deltas are
/// widened to `i64` so coordinate differences cannot overflow.
fn matches_with_shift(order: &[Point], reference: &[Point], shift: usize) -> bool {
    let n = reference.len();
    let dx = reference[0].x as i64 - order[shift].x as i64;
    let dy = reference[0].y as i64 - order[shift].y as i64;
    (0..n).all(|i| {
        let v = order[(i + shift) % n];
        v.x as i64 + dx == reference[i].x as i64 && v.y as i64 + dy == reference[i].y as i64
    })
}
