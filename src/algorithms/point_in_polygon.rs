use log::trace;

use crate::data::{BoundingBox, Point, Polygon};
use crate::{Error, PolygonScalar};

// Even-odd rule: cast a ray from the target towards +x and count how many
// boundary edges it crosses. An edge crosses when it straddles the scan line
// (half-open, see `DirectedEdge::straddles`) and meets it in [pt.x, max_x].

/// $O(n)$ Test whether `pt` lies inside `polygon` by horizontal ray casting.
///
/// Either winding order gives the same answer, as does any rotation of the
/// vertex list. Points exactly on the boundary may be classified either way.
/// The polygon is not validated; degenerate input yields an unspecified answer.
///
/// ```
/// # use raycast_pip::algorithms::point_in_polygon;
/// # use raycast_pip::data::*;
/// let square = Polygon::new(vec![
///   Point::new([0.0, 0.0]),
///   Point::new([0.0, 4.0]),
///   Point::new([4.0, 4.0]),
///   Point::new([4.0, 0.0]),
/// ]).unwrap();
/// assert!(point_in_polygon(&square, &Point::new([2.0, 2.0])));
/// assert!(!point_in_polygon(&square, &Point::new([5.0, 5.0])));
/// ```
pub fn point_in_polygon<T>(polygon: &Polygon<T>, pt: &Point<T, 2>) -> bool
where
  T: PolygonScalar,
{
  match BoundingBox::from_points(polygon.iter()) {
    Some(bbox) => point_in_polygon_with_bounds(polygon, &bbox, pt),
    None => false,
  }
}

/// $O(n)$ Same as [`point_in_polygon`] but reuses a bounding box computed
/// earlier with [`Polygon::bounding_box`]. Useful when many points are tested
/// against one polygon.
///
/// `bbox` must be the bounding box of `polygon`. It is not checked.
pub fn point_in_polygon_with_bounds<T>(
  polygon: &Polygon<T>,
  bbox: &BoundingBox<T>,
  pt: &Point<T, 2>,
) -> bool
where
  T: PolygonScalar,
{
  if !bbox.contains(pt) {
    return false;
  }
  let (x, y) = (pt.x_coord(), pt.y_coord());
  let max_x = bbox.max_x();
  let crossings = polygon
    .iter_boundary_edges()
    .filter_map(|edge| edge.crossing(y))
    .filter(|cx| x <= cx && cx <= max_x)
    .count();
  trace!("{} boundary crossings right of {:?}", crossings, pt);
  crossings % 2 == 1
}

/// $O(n \log n)$ Validating form of [`point_in_polygon`] over a plain vertex
/// list.
///
/// Fails with [`Error::InsufficientVertices`] when there are fewer than three
/// distinct vertices and with [`Error::NonFiniteCoordinate`] on NaN or
/// infinite coordinates.
pub fn inside<T>(points: &[Point<T, 2>], pt: &Point<T, 2>) -> Result<bool, Error>
where
  T: PolygonScalar,
{
  let polygon = Polygon::new(points.to_vec())?;
  Ok(point_in_polygon(&polygon, pt))
}

///////////////////////////////////////////////////////////////////////////////
// Tests
