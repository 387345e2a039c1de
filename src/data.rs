mod bounding_box;
mod directed_edge;
pub(crate) mod point;
pub mod polygon;

pub use bounding_box::*;
pub use directed_edge::*;

#[doc(inline)]
pub use crate::data::polygon::Polygon;
pub use point::Point;
