mod point_in_polygon {
  use raycast_pip::algorithms::*;
  use raycast_pip::data::*;
  use raycast_pip::*;

  fn pts(coords: &[(f64, f64)]) -> Vec<Point<f64>> {
    coords.iter().copied().map(Point::from).collect()
  }

  #[test]
  fn triangle() -> Result<(), Error> {
    let tri = pts(&[(1., 1.), (2., 3.), (3., 1.)]);
    assert!(inside(&tri, &Point::new([2., 2.]))?);
    assert!(!inside(&tri, &Point::new([2., 0.]))?);
    Ok(())
  }

  #[test]
  fn square() -> Result<(), Error> {
    let square = Polygon::new(pts(&[(0., 0.), (0., 4.), (4., 4.), (4., 0.)]))?;
    assert!(square.contains(&Point::new([2., 2.])));
    assert!(!square.contains(&Point::new([5., 5.])));
    Ok(())
  }

  #[test]
  fn pentagon() -> Result<(), Error> {
    let pentagon = Polygon::new(pts(&[(2., 3.), (5., 7.), (8., 5.), (6., 2.), (4., 1.)]))?;
    assert!(!point_in_polygon(&pentagon, &Point::new([100., 100.])));
    assert!(!point_in_polygon(&pentagon, &Point::new([2., 4.])));
    Ok(())
  }

  #[test]
  fn many_queries_one_box() -> Result<(), Error> {
    let square = Polygon::new(pts(&[(0., 0.), (0., 4.), (4., 4.), (4., 0.)]))?;
    let bbox = square.bounding_box();
    let hits = (0..10)
      .flat_map(|x| (0..10).map(move |y| Point::new([f64::from(x) + 0.5, f64::from(y) + 0.5])))
      .filter(|pt| point_in_polygon_with_bounds(&square, &bbox, pt))
      .count();
    assert_eq!(hits, 16);
    Ok(())
  }

  #[test]
  fn degenerate() {
    let line = pts(&[(0., 0.), (1., 1.)]);
    assert_eq!(
      inside(&line, &Point::new([0.5, 0.5])),
      Err(Error::InsufficientVertices)
    );
    assert_eq!(
      Polygon::new(pts(&[(0., 0.), (1., f64::INFINITY), (2., 0.)])).err(),
      Some(Error::NonFiniteCoordinate)
    );
  }
}
