pub mod point_in_polygon;

#[doc(inline)]
pub use point_in_polygon::{inside, point_in_polygon, point_in_polygon_with_bounds};
