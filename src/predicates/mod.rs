pub mod congruence;
pub mod contain;
pub mod filter;
pub mod intersect;

pub use congruence::congruent;
pub use contain::{point_in_polygon, polygon_in_frame};
pub use filter::{VertexFilter, area_less_than};
pub use intersect::polygons_intersect;
