use crate::data::DirectedEdge;
use crate::data::Point;

pub struct Iter<'a, T: 'a> {
  pub(crate) iter: std::slice::Iter<'a, Point<T, 2>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a Point<T, 2>;
  fn next(&mut self) -> Option<&'a Point<T, 2>> {
    self.iter.next()
  }
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.iter.size_hint()
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

// Walks the closed boundary: vertex i to vertex (i+1) mod n, ending with the
// edge from the last vertex back to the first.
pub struct EdgeIter<'a, T: 'a> {
  pub(crate) vertices: &'a [Point<T, 2>],
  pub(crate) index: usize,
}

impl<'a, T> Iterator for EdgeIter<'a, T> {
  type Item = DirectedEdge<'a, T, 2>;
  fn next(&mut self) -> Option<Self::Item> {
    let n = self.vertices.len();
    if self.index >= n {
      return None;
    }
    let src = &self.vertices[self.index];
    let dst = &self.vertices[(self.index + 1) % n];
    self.index += 1;
    Some(DirectedEdge { src, dst })
  }
  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.vertices.len().saturating_sub(self.index);
    (remaining, Some(remaining))
  }
}

impl<T> ExactSizeIterator for EdgeIter<'_, T> {}
