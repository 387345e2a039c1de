// This module contains strategies for:
//  * points
//  * polygons
//  * convex polygons
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Point, Polygon};

use num_rational::BigRational;
use num_traits::Zero;
use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;
use rand::Rng;
use rand::SeedableRng;
use std::convert::{TryFrom, TryInto};
use std::f64::consts::PI;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl<T: Arbitrary, const N: usize> Arbitrary for Point<T, N>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
  T: Clone,
{
  type Strategy = Mapped<Vec<T>, Point<T, N>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    vec(any_with::<T>(params), N).prop_map(|vec: Vec<T>| Point {
      array: vec.try_into().unwrap(),
    })
  }
}

// Integer grid points stored as floats. Every sum, product and comparison the
// ray caster performs on them is exact or rounds without changing the answer.
pub fn any_small_point() -> impl Strategy<Value = Point<f64>> {
  any::<Point<i8>>().prop_map(|pt| pt.cast(f64::from))
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary polygons

// Not necessarily simple: edges may cross and vertices may repeat.
pub fn any_polygon() -> impl Strategy<Value = Polygon<f64>> {
  vec(any_small_point(), 3..30).prop_filter_map("Need three distinct vertices", |pts| {
    Polygon::new(pts).ok()
  })
}

pub fn to_exact(poly: &Polygon<f64>) -> Polygon<BigRational> {
  poly
    .iter()
    .map(|pt| Point::try_from(pt).unwrap())
    .collect()
}

// Exact test for `pt` lying on one of the edges of `poly`.
pub fn on_boundary(poly: &Polygon<BigRational>, pt: &Point<BigRational>) -> bool {
  poly.iter_boundary_edges().any(|edge| {
    let (p, q) = (edge.src, edge.dst);
    let cross = (&q[0] - &p[0]) * (&pt[1] - &p[1]) - (&q[1] - &p[1]) * (&pt[0] - &p[0]);
    let within = |i: usize| {
      let (lo, hi) = if p[i] <= q[i] { (&p[i], &q[i]) } else { (&q[i], &p[i]) };
      lo <= &pt[i] && &pt[i] <= hi
    };
    cross.is_zero() && within(0) && within(1)
  })
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary convex polygons

// Strictly convex, random winding.
pub fn any_convex() -> impl Strategy<Value = Polygon<f64>> {
  (3usize..40, any::<u64>()).prop_map(|(n, seed)| {
    let rng = &mut rand::rngs::SmallRng::seed_from_u64(seed);
    random_convex(n, rng)
  })
}

// Vertices on a circle. Each angle is jittered by less than a fifth of the
// spacing, so the angular order is kept and no gap reaches half a turn.
fn random_convex<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Polygon<f64> {
  let step = 2.0 * PI / n as f64;
  let phase = rng.gen_range(0.0..step);
  let radius = rng.gen_range(1.0..1000.0);
  let cx = rng.gen_range(-1000.0..1000.0);
  let cy = rng.gen_range(-1000.0..1000.0);
  let mut pts: Vec<Point<f64>> = (0..n)
    .map(|i| {
      let angle: f64 = phase + step * (i as f64 + rng.gen_range(-0.2..0.2));
      Point::new([cx + radius * angle.cos(), cy + radius * angle.sin()])
    })
    .collect();
  if rng.gen() {
    pts.reverse();
  }
  Polygon::new_unchecked(pts)
}
