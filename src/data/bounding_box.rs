use super::Point;
use crate::PolygonScalar;

/// Axis-aligned bounding box, closed on all sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundingBox<T> {
  pub min: Point<T, 2>,
  pub max: Point<T, 2>,
}

impl<T> BoundingBox<T>
where
  T: PolygonScalar,
{
  /// $O(n)$ Smallest box covering every point. `None` if there are no points.
  pub fn from_points<'a, I>(points: I) -> Option<BoundingBox<T>>
  where
    I: IntoIterator<Item = &'a Point<T, 2>>,
    T: 'a,
  {
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let init = BoundingBox {
      min: first.clone(),
      max: first.clone(),
    };
    Some(iter.fold(init, |bbox, pt| {
      let [min_x, min_y] = bbox.min.array;
      let [max_x, max_y] = bbox.max.array;
      BoundingBox {
        min: Point::new([
          min_x.total_min(pt.x_coord().clone()),
          min_y.total_min(pt.y_coord().clone()),
        ]),
        max: Point::new([
          max_x.total_max(pt.x_coord().clone()),
          max_y.total_max(pt.y_coord().clone()),
        ]),
      }
    }))
  }

  pub fn max_x(&self) -> &T {
    self.max.x_coord()
  }

  /// $O(1)$ Boundary points are contained.
  pub fn contains(&self, pt: &Point<T, 2>) -> bool {
    self.min.x_coord() <= pt.x_coord()
      && pt.x_coord() <= self.max.x_coord()
      && self.min.y_coord() <= pt.y_coord()
      && pt.y_coord() <= self.max.y_coord()
  }
}
