use ggez::mint::Point2;
use lyon_geom::euclid::default::{Point2D, Vector2D};
use std::marker::PhantomData;
use std::ops::{Div, Mul, Neg};

/// A more convenient version of mint::Point2<f32>
#[derive(Copy, Clone, Debug, PartialEq, Add, AddAssign, Sub, SubAssign)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for Point2<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2 { x, y }
    }
}

impl From<Point2<f32>> for Point {
    fn from(Point2 { x, y }: Point2<f32>) -> Self {
        Self { x, y }
    }
}

impl From<Point2D<f32>> for Point {
    fn from(Point2D { x, y, _unit }: Point2D<f32>) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Point2D<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2D { x, y, _unit: PhantomData }
    }
}

impl From<Point> for Vector2D<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Vector2D { x, y, _unit: PhantomData }
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Mul<Point> for f32 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Point {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { x: -self.x, y: -self.y }
    }
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0., y: 0. };

    /// Equal x and y
    pub fn square(side: f32) -> Self {
        Self { x: side, y: side }
    }

    pub fn from_polar(radius: f32, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { x: radius * cos, y: radius * sin }
    }

    #[must_use]
    pub fn magnitude2(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[must_use]
    pub fn magnitude(self) -> f32 {
        self.magnitude2().sqrt()
    }
}

#[test]
fn test_from_polar() {
    use std::f32::consts::{FRAC_PI_2, PI};

    let test = [
        ((50., 0.), (50., 0.)),
        ((50., FRAC_PI_2), (0., 50.)),
        ((50., PI), (-50., 0.)),
        ((0., 1.234), (0., 0.)),
    ];

    for &((radius, angle), (x, y)) in &test {
        let point = Point::from_polar(radius, angle);
        assert!((point.x - x).abs() < 1e-4, "{:?}", point);
        assert!((point.y - y).abs() < 1e-4, "{:?}", point);
    }
}
