pub mod bounds;
pub mod point;

pub use bounds::Bounds;
pub use point::{Point, on_segment, orientation, segments_intersect};
