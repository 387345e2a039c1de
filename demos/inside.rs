use raycast_pip::algorithms::inside;
use raycast_pip::data::Point;

fn main() {
  env_logger::init();
  let pentagon: Vec<Point<f64>> = vec![
    (2., 3.).into(),
    (5., 7.).into(),
    (8., 5.).into(),
    (6., 2.).into(),
    (4., 1.).into(),
  ];
  dbg!(inside(&pentagon, &Point::new([2., 4.])));
  dbg!(inside(&pentagon, &Point::new([5., 4.])));
  dbg!(inside(&pentagon, &Point::new([100., 100.])));
  dbg!(inside(&pentagon[..2], &Point::new([2., 4.])));
}
