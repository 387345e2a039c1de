#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Point-in-polygon queries by horizontal ray casting.
//!
//! ```
//! use raycast_pip::data::{Point, Polygon};
//!
//! let triangle = Polygon::new(vec![
//!   Point::new([1.0, 1.0]),
//!   Point::new([2.0, 3.0]),
//!   Point::new([3.0, 1.0]),
//! ])?;
//! assert!(triangle.contains(&Point::new([2.0, 2.0])));
//! assert!(!triangle.contains(&Point::new([2.0, 0.0])));
//! # Ok::<(), raycast_pip::Error>(())
//! ```
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::*;
use ordered_float::{NotNan, OrderedFloat};
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The polygon has fewer than three distinct vertices.
  InsufficientVertices,
  /// A vertex coordinate is NaN or infinite.
  NonFiniteCoordinate,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::NonFiniteCoordinate => write!(f, "Non-finite coordinate"),
    }
  }
}

impl std::error::Error for Error {}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;

  fn total_min(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::min_by(self, other, TotalOrd::total_cmp)
  }

  fn total_max(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::max_by(self, other, TotalOrd::total_cmp)
  }
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Coordinate type of points and polygons.
///
/// Ray casting divides, so only field-like types qualify: floats (plain or
/// wrapped by `ordered_float`) and exact rationals. Integer coordinates can be
/// lifted with [`Point::cast`](crate::data::Point::cast).
pub trait PolygonScalar:
  std::fmt::Debug + NumOps<Self, Self> + TotalOrd + PartialOrd + Clone
{
  fn from_constant(val: i8) -> Self;
  fn is_finite(&self) -> bool;
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl PolygonScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty as From<i8>>::from(val)
        }
        fn is_finite(&self) -> bool {
          <$ty>::is_finite(*self)
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty => $inner:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl PolygonScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty>::from_f64(<f64 as From<i8>>::from(val)).unwrap_or_else(<$ty>::zero)
        }
        fn is_finite(&self) -> bool {
          <$inner>::is_finite(self.into_inner())
        }
      }
    )*
  };
}

floating_precision!(f32, f64);
wrapped_floating_precision!(
  OrderedFloat<f32> => f32,
  OrderedFloat<f64> => f64,
  NotNan<f32> => f32,
  NotNan<f64> => f64
);

impl TotalOrd for BigRational {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self.cmp(other)
  }
}

impl PolygonScalar for BigRational {
  fn from_constant(val: i8) -> Self {
    BigRational::from_integer(<BigInt as From<i8>>::from(val))
  }
  fn is_finite(&self) -> bool {
    true
  }
}

#[cfg(test)]
pub mod testing;
