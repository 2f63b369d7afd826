use std::f32::consts::TAU;

pub use hexagon::Hexagon;
pub use star::Star;

use crate::basic::{CellDim, Point};

mod hexagon;
mod star;

/// Ordered fill path of a tile shape, centered on the origin.
/// Connecting the points in order and closing the path produces the
/// shape's outline.
pub trait Shape {
    fn raw_points(cell_dim: CellDim) -> Vec<Point>;
}

/// Vertex `i` sits at angle `2π·i/n` plus `rotation`, at distance
/// `radius(i)` from the origin.
pub fn regular_polygon(
    vertex_count: usize,
    rotation: f32,
    mut radius: impl FnMut(usize) -> f32,
) -> Vec<Point> {
    (0..vertex_count)
        .map(|i| {
            let angle = TAU * i as f32 / vertex_count as f32 + rotation;
            Point::from_polar(radius(i), angle)
        })
        .collect()
}

#[test]
fn test_regular_polygon_rotation() {
    use std::f32::consts::FRAC_PI_2;

    let points = regular_polygon(4, FRAC_PI_2, |_| 1.);
    let expected = [(0., 1.), (-1., 0.), (0., -1.), (1., 0.)];
    for (point, &(x, y)) in points.iter().zip(&expected) {
        assert!((point.x - x).abs() < 1e-6, "{:?}", points);
        assert!((point.y - y).abs() < 1e-6, "{:?}", points);
    }
}
