use crate::domain::Polygon;

/// Vertex-count filters used by the AREA and COUNT commands.
///
/// The filter set is fixed, so the command layer parses straight into a
/// variant and dispatch stays a plain match. `Exactly` is only constructed
/// with n >= 3; the command parser rejects smaller arguments before a
/// filter exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexFilter {
    Even,
    Odd,
    Exactly(usize),
}

impl VertexFilter {
    pub fn matches(&self, polygon: &Polygon) -> bool {
        match self {
            VertexFilter::Even => polygon.vertex_count() % 2 == 0,
            VertexFilter::Odd => polygon.vertex_count() % 2 == 1,
            VertexFilter::Exactly(n) => polygon.vertex_count() == *n,
        }
    }
}

/// Strict area comparison against a threshold polygon.
pub fn area_less_than(polygon: &Polygon, threshold: &Polygon) -> bool {
    polygon.area() < threshold.area()
}
