use log::debug;
use std::iter::FromIterator;

use crate::data::BoundingBox;
use crate::data::Point;
use crate::Error;
use crate::{PolygonScalar, TotalOrd};

mod iter;
pub use iter::*;

/// Closed polygon given by its vertices in boundary order.
///
/// The last vertex connects back to the first. Vertices are kept exactly as
/// given: either winding is accepted and nothing is reordered.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T> {
  pub(crate) vertices: Vec<Point<T, 2>>,
}

impl<T> Polygon<T> {
  pub fn new_unchecked(vertices: Vec<Point<T, 2>>) -> Polygon<T> {
    Polygon { vertices }
  }

  pub fn new(points: Vec<Point<T, 2>>) -> Result<Polygon<T>, Error>
  where
    T: PolygonScalar,
  {
    let p = Self::new_unchecked(points);
    p.validate()?;
    Ok(p)
  }
}

impl<T> Polygon<T> {
  /// $O(n \log n)$ Check that every coordinate is finite and that there are at
  /// least three distinct vertices.
  ///
  /// Self-intersections and colinear vertices are not detected.
  pub fn validate(&self) -> Result<(), Error>
  where
    T: PolygonScalar,
  {
    let finite = self
      .vertices
      .iter()
      .all(|pt| pt.array.iter().all(PolygonScalar::is_finite));
    if !finite {
      debug!("rejecting polygon with non-finite coordinates");
      return Err(Error::NonFiniteCoordinate);
    }

    let mut distinct: Vec<&Point<T, 2>> = self.vertices.iter().collect();
    distinct.sort_unstable_by(|a, b| {
      (a.x_coord(), a.y_coord()).total_cmp(&(b.x_coord(), b.y_coord()))
    });
    distinct.dedup();
    if distinct.len() < 3 {
      debug!(
        "rejecting polygon with {} distinct vertices out of {}",
        distinct.len(),
        self.vertices.len()
      );
      return Err(Error::InsufficientVertices);
    }
    Ok(())
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn point(&self, idx: usize) -> &Point<T, 2> {
    &self.vertices[idx]
  }

  pub fn vertices(&self) -> &[Point<T, 2>] {
    &self.vertices
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      iter: self.vertices.iter(),
    }
  }

  pub fn iter_boundary_edges(&self) -> EdgeIter<'_, T> {
    EdgeIter {
      vertices: &self.vertices,
      index: 0,
    }
  }

  /// $O(n)$
  ///
  /// # Panics
  ///
  /// Panics if the polygon has no vertices, which only `new_unchecked` allows.
  pub fn bounding_box(&self) -> BoundingBox<T>
  where
    T: PolygonScalar,
  {
    BoundingBox::from_points(self.iter()).expect("polygon without vertices")
  }

  /// $O(n)$ Positive for counter-clockwise polygons.
  pub fn signed_area_2x(&self) -> T
  where
    T: PolygonScalar,
  {
    self
      .iter_boundary_edges()
      .map(|edge| {
        let p = edge.src;
        let q = edge.dst;
        p.array[0].clone() * q.array[1].clone() - q.array[0].clone() * p.array[1].clone()
      })
      .fold(T::from_constant(0), |acc, x| acc + x)
  }

  pub fn signed_area(&self) -> T
  where
    T: PolygonScalar,
  {
    self.signed_area_2x() / T::from_constant(2)
  }

  /// $O(n)$ Center of mass. Undefined for polygons with zero area.
  pub fn centroid(&self) -> Point<T, 2>
  where
    T: PolygonScalar,
  {
    let zero = T::from_constant(0);
    let (xs, ys) = self
      .iter_boundary_edges()
      .fold((zero.clone(), zero), |(xs, ys), edge| {
        let [px, py] = edge.src.array.clone();
        let [qx, qy] = edge.dst.array.clone();
        let cross = px.clone() * qy.clone() - qx.clone() * py.clone();
        (xs + (px + qx) * cross.clone(), ys + (py + qy) * cross)
      });
    let denom = T::from_constant(3) * self.signed_area_2x();
    Point::new([xs / denom.clone(), ys / denom])
  }

  /// $O(n)$ Even-odd membership test. See
  /// [`point_in_polygon`](crate::algorithms::point_in_polygon).
  pub fn contains(&self, pt: &Point<T, 2>) -> bool
  where
    T: PolygonScalar,
  {
    crate::algorithms::point_in_polygon(self, pt)
  }

  pub fn cast<U, F>(self, f: F) -> Polygon<U>
  where
    T: Clone,
    F: Fn(T) -> U + Clone,
  {
    Polygon {
      vertices: self.vertices.iter().map(|p| p.cast(f.clone())).collect(),
    }
  }
}

impl<T> FromIterator<Point<T, 2>> for Polygon<T> {
  fn from_iter<I: IntoIterator<Item = Point<T, 2>>>(iter: I) -> Polygon<T> {
    Polygon::new_unchecked(iter.into_iter().collect())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
