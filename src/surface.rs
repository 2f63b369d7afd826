use ggez::graphics::{Color, DrawMode, Mesh, MeshBuilder};
use ggez::Context;
use lyon_geom::euclid::default::Transform2D;
use lyon_geom::euclid::Angle;

use crate::basic::Point;
use crate::error::Result;

/// The subset of a 2D canvas the pattern controllers draw through.
///
/// Transform state composes canvas-style: `translate` and `rotate`
/// apply in the current local space and path points are resolved
/// through the current transform as they are added; `save`/`restore`
/// push and pop the whole transform.
pub trait Surface {
    fn begin_path(&mut self);
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    fn close_path(&mut self);
    fn fill(&mut self) -> Result;
    fn set_fill_color(&mut self, color: Color);
    fn fill_rect(&mut self, top_left: Point, size: Point) -> Result;
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, delta: Point);
    fn rotate(&mut self, angle: f32);

    /// Trace `points` as a closed path and fill it.
    fn fill_polygon(&mut self, points: &[Point]) -> Result {
        self.begin_path();
        let mut iter = points.iter();
        if let Some(&first) = iter.next() {
            self.move_to(first);
        }
        for &point in iter {
            self.line_to(point);
        }
        self.close_path();
        self.fill()
    }
}

/// Canvas-style save/restore stack of 2D affine transforms.
struct TransformStack {
    current: Transform2D<f32>,
    saved: Vec<Transform2D<f32>>,
}

impl TransformStack {
    fn new() -> Self {
        Self {
            current: Transform2D::identity(),
            saved: vec![],
        }
    }

    fn apply(&self, point: Point) -> Point {
        self.current.transform_point(point.into()).into()
    }

    fn translate(&mut self, delta: Point) {
        self.current = Transform2D::translation(delta.x, delta.y).then(&self.current);
    }

    fn rotate(&mut self, angle: f32) {
        self.current = Transform2D::rotation(Angle::radians(angle)).then(&self.current);
    }

    fn save(&mut self) {
        self.saved.push(self.current);
    }

    // restoring with an empty save stack is a no-op, as on a canvas
    fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.current = transform;
        }
    }
}

/// Accumulates filled paths into a ggez mesh for one frame.
pub struct MeshSurface {
    builder: MeshBuilder,
    transform: TransformStack,
    fill_color: Color,
    path: Vec<Point>,
}

impl MeshSurface {
    pub fn new() -> Self {
        Self {
            builder: MeshBuilder::new(),
            transform: TransformStack::new(),
            fill_color: Color::WHITE,
            path: vec![],
        }
    }

    pub fn mesh(&self, ctx: &Context) -> Mesh {
        Mesh::from_data(ctx, self.builder.build())
    }
}

impl Default for MeshSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for MeshSurface {
    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, point: Point) {
        self.path.push(self.transform.apply(point));
    }

    fn line_to(&mut self, point: Point) {
        self.path.push(self.transform.apply(point));
    }

    fn close_path(&mut self) {
        // polygon fill closes the outline implicitly
    }

    // a degenerate or non-finite path is dropped silently, as on a
    // canvas (the splode effect produces an infinite center for
    // out-of-falloff tiles at the exact moment the field is at rest)
    fn fill(&mut self) -> Result {
        let finite = self.path.iter().all(|p| p.x.is_finite() && p.y.is_finite());
        if self.path.len() >= 3 && finite {
            self.builder
                .polygon(DrawMode::fill(), &self.path, self.fill_color)?;
        }
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn fill_rect(&mut self, top_left: Point, size: Point) -> Result {
        let corners = [
            top_left,
            top_left + Point { x: size.x, y: 0. },
            top_left + size,
            top_left + Point { x: 0., y: size.y },
        ]
        .map(|corner| self.transform.apply(corner));
        self.builder
            .polygon(DrawMode::fill(), &corners, self.fill_color)?;
        Ok(())
    }

    fn save(&mut self) {
        self.transform.save();
    }

    fn restore(&mut self) {
        self.transform.restore();
    }

    fn translate(&mut self, delta: Point) {
        self.transform.translate(delta);
    }

    fn rotate(&mut self, angle: f32) {
        self.transform.rotate(angle);
    }
}

/// Records resolved draw calls so geometry can be asserted on without
/// a graphics context.
#[cfg(test)]
pub struct Recorder {
    transform: TransformStack,
    fill_color: Color,
    path: Vec<Point>,
    pub polygons: Vec<(Vec<Point>, Color)>,
    pub rects: Vec<(Point, Point, Color)>,
}

#[cfg(test)]
impl Recorder {
    pub fn new() -> Self {
        Self {
            transform: TransformStack::new(),
            fill_color: Color::WHITE,
            path: vec![],
            polygons: vec![],
            rects: vec![],
        }
    }
}

#[cfg(test)]
impl Surface for Recorder {
    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, point: Point) {
        self.path.push(self.transform.apply(point));
    }

    fn line_to(&mut self, point: Point) {
        self.path.push(self.transform.apply(point));
    }

    fn close_path(&mut self) {}

    fn fill(&mut self) -> Result {
        self.polygons.push((self.path.clone(), self.fill_color));
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn fill_rect(&mut self, top_left: Point, size: Point) -> Result {
        let top_left = self.transform.apply(top_left);
        self.rects.push((top_left, size, self.fill_color));
        Ok(())
    }

    fn save(&mut self) {
        self.transform.save();
    }

    fn restore(&mut self) {
        self.transform.restore();
    }

    fn translate(&mut self, delta: Point) {
        self.transform.translate(delta);
    }

    fn rotate(&mut self, angle: f32) {
        self.transform.rotate(angle);
    }
}

#[test]
fn test_path_points_resolve_through_transform() {
    use std::f32::consts::FRAC_PI_2;

    let mut recorder = Recorder::new();
    recorder.translate(Point { x: 10., y: 0. });
    recorder.rotate(FRAC_PI_2);
    recorder
        .fill_polygon(&[
            Point { x: 1., y: 0. },
            Point { x: 0., y: 1. },
            Point { x: -1., y: 0. },
        ])
        .unwrap();

    let (points, _) = &recorder.polygons[0];
    // local (1, 0) rotates onto the y axis, then shifts right by 10
    assert!((points[0].x - 10.).abs() < 1e-5, "{:?}", points);
    assert!((points[0].y - 1.).abs() < 1e-5, "{:?}", points);
    assert!((points[1].x - 9.).abs() < 1e-5, "{:?}", points);
    assert!(points[1].y.abs() < 1e-5, "{:?}", points);
}

#[test]
fn test_save_restore() {
    let mut recorder = Recorder::new();
    recorder.save();
    recorder.translate(Point { x: 5., y: 5. });
    recorder.restore();
    recorder
        .fill_polygon(&[Point::ORIGIN, Point { x: 1., y: 0. }, Point { x: 0., y: 1. }])
        .unwrap();
    assert_eq!(recorder.polygons[0].0[0], Point::ORIGIN);

    // restore with nothing saved is a no-op
    let mut recorder = Recorder::new();
    recorder.restore();
    recorder.translate(Point { x: 1., y: 2. });
    recorder.fill_rect(Point::ORIGIN, Point::square(4.)).unwrap();
    assert_eq!(recorder.rects[0].0, Point { x: 1., y: 2. });
}

#[test]
fn test_nested_transforms_compose_locally() {
    let mut recorder = Recorder::new();
    recorder.rotate(std::f32::consts::PI);
    recorder.translate(Point { x: 1., y: 0. });
    recorder
        .fill_polygon(&[Point::ORIGIN, Point { x: 1., y: 0. }, Point { x: 0., y: 1. }])
        .unwrap();

    // the translation happens in rotated space, so it points left
    let (points, _) = &recorder.polygons[0];
    assert!((points[0].x + 1.).abs() < 1e-5, "{:?}", points);
    assert!(points[0].y.abs() < 1e-5, "{:?}", points);
}
