use super::Point;
use crate::PolygonScalar;

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

// Directed edge from A to B.
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct DirectedEdge<'a, T, const N: usize = 2> {
  pub src: &'a Point<T, N>,
  pub dst: &'a Point<T, N>,
}

impl<T, const N: usize> Copy for DirectedEdge<'_, T, N> {}
impl<T, const N: usize> Clone for DirectedEdge<'_, T, N> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<'a, T> DirectedEdge<'a, T, 2> {
  pub fn new(src: &'a Point<T, 2>, dst: &'a Point<T, 2>) -> DirectedEdge<'a, T, 2> {
    DirectedEdge { src, dst }
  }

  pub fn reverse(self) -> DirectedEdge<'a, T, 2> {
    DirectedEdge {
      src: self.dst,
      dst: self.src,
    }
  }

  /// Endpoints ordered by y-coordinate, lowest first.
  fn ascending(self) -> (&'a Point<T, 2>, &'a Point<T, 2>)
  where
    T: PolygonScalar,
  {
    if self.src.y_coord() <= self.dst.y_coord() {
      (self.src, self.dst)
    } else {
      (self.dst, self.src)
    }
  }

  /// $O(1)$ X-coordinate where the line through this edge meets the horizontal
  /// line at ordinate `y`.
  ///
  /// Returns `None` for horizontal edges. The point need not lie between the
  /// two endpoints; see [`DirectedEdge::straddles`] for that test.
  ///
  /// The endpoints are always taken lowest-first, so an edge and its reverse
  /// yield the exact same value, even with rounding. Vertical edges and the
  /// lower endpoint return its x-coordinate untouched. For `y` within the
  /// edge's y-range the result is finite, even when the extents of the edge
  /// overflow.
  ///
  /// ```
  /// # use raycast_pip::data::*;
  /// let a = Point::new([1.0, 1.0]);
  /// let b = Point::new([2.0, 3.0]);
  /// assert_eq!(DirectedEdge::new(&a, &b).scanline_intersection(&2.0), Some(1.5));
  /// assert_eq!(DirectedEdge::new(&a, &a).scanline_intersection(&2.0), None);
  /// ```
  pub fn scanline_intersection(self, y: &T) -> Option<T>
  where
    T: PolygonScalar,
  {
    let (lo, hi) = self.ascending();
    let [x0, y0] = lo.array.clone();
    let [x1, y1] = hi.array.clone();
    if y0 == y1 {
      return None;
    }
    if y == &y0 || x0 == x1 {
      return Some(x0);
    }
    let dy = y1.clone() - y0.clone();
    let t = if dy.is_finite() {
      (y.clone() - y0) / dy
    } else {
      // Halved, the y-extent fits.
      let two = T::from_constant(2);
      (y.clone() / two.clone() - y0.clone() / two.clone()) / (y1 / two.clone() - y0 / two)
    };
    let dx = x1.clone() - x0.clone();
    if dx.is_finite() {
      Some(x0 + t * dx)
    } else {
      Some(x0.clone() - t.clone() * x0 + t * x1)
    }
  }

  /// $O(1)$ True iff exactly one endpoint lies strictly above the horizontal
  /// line at ordinate `y`.
  ///
  /// This half-open rule makes a ray through a vertex count exactly once when
  /// the boundary passes through the scan line there, and zero or two times
  /// when it only touches it. Horizontal edges never straddle.
  pub fn straddles(self, y: &T) -> bool
  where
    T: PolygonScalar,
  {
    (self.src.y_coord() > y) != (self.dst.y_coord() > y)
  }

  /// X-coordinate where this edge crosses the horizontal line at `y`, if it
  /// does so under the half-open rule.
  pub fn crossing(self, y: &T) -> Option<T>
  where
    T: PolygonScalar,
  {
    if self.straddles(y) {
      self.scanline_intersection(y)
    } else {
      None
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
