use crate::basic::{CellDim, Point};
use crate::rendering::shape::{regular_polygon, Shape};
use num_integer::Integer;

/// Six-pointed star: 12 vertices alternating between the side length
/// (even indices) and √3 times the side length (odd indices).
pub struct Star;

impl Shape for Star {
    fn raw_points(CellDim { side, .. }: CellDim) -> Vec<Point> {
        regular_polygon(12, 0., |i| {
            if i.is_even() {
                side
            } else {
                side * 3_f32.sqrt()
            }
        })
    }
}

#[test]
fn test_star_points() {
    use std::f32::consts::TAU;

    let points = Star::raw_points(CellDim::from(50.));
    assert_eq!(points.len(), 12);

    let outer = 50. * 3_f32.sqrt();
    for (i, point) in points.iter().enumerate() {
        let expected = if i % 2 == 0 { 50. } else { outer };
        assert!(
            (point.magnitude() - expected).abs() < 1e-3,
            "vertex {} at {:?}",
            i,
            point
        );

        // vertices are 30 degrees apart starting from the x axis
        let angle = point.y.atan2(point.x).rem_euclid(TAU);
        assert!((angle - TAU * i as f32 / 12.).abs() < 1e-3, "vertex {}", i);
    }
}
