use crate::basic::{CellDim, Point};
use crate::rendering::shape::{regular_polygon, Shape};

pub struct Hexagon;

impl Shape for Hexagon {
    fn raw_points(CellDim { side, .. }: CellDim) -> Vec<Point> {
        regular_polygon(6, 0., |_| side)
    }
}

#[test]
fn test_hexagon_points() {
    let points = Hexagon::raw_points(CellDim::from(50.));
    assert_eq!(points.len(), 6);

    // vertex 0 is on the positive x axis
    assert!((points[0].x - 50.).abs() < 1e-4);
    assert!(points[0].y.abs() < 1e-4);

    // all vertices lie on the circumcircle
    for point in &points {
        assert!((point.magnitude() - 50.).abs() < 1e-3, "{:?}", point);
    }

    // consecutive vertices are 60 degrees apart
    for (a, b) in points.iter().zip(points.iter().cycle().skip(1)) {
        let delta = (b.y.atan2(b.x) - a.y.atan2(a.x)).rem_euclid(std::f32::consts::TAU);
        assert!((delta - std::f32::consts::FRAC_PI_3).abs() < 1e-3, "{}", delta);
    }
}
