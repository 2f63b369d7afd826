use std::f32::consts::TAU;

use static_assertions::assert_impl_all;

use crate::basic::{CellDim, Parity, Point};
use crate::clock::Clock;
use crate::ease::{ease_in_out, loop_amt};
use crate::error::{Error, ErrorConversion, Result};
use crate::palette::Palette;
use crate::rendering::lattice::{Lattice, SkipRule};
use crate::rendering::shape::{Hexagon, Shape, Star};
use crate::rendering::splode::splode_factor;
use crate::surface::Surface;

// shared by the preset constructors
const SIDE: f32 = 20.;
const HALF_LAYERS: isize = 5;
const VIEW: f32 = 800.;

// sharpness of the per-tile rotation ease
const ROTATE_POWER: f32 = 3.;

/// Full description of one pattern sketch.
#[derive(Copy, Clone, Debug)]
pub struct PatternConfig {
    /// hexagon side length, also the star's inner radius
    pub side: f32,
    /// seconds per full animation cycle
    pub period: f32,
    /// grid extends this many rows/columns out from the center
    pub half_layers: isize,
    /// which row parity is shifted half a cell right
    pub offset_parity: Parity,
    /// cells omitted from the day-state hex field
    pub skip: Option<SkipRule>,
    /// radial breathing distortion of tile centers
    pub splode: bool,
    /// split the cycle into a hex half and a star half with inverted
    /// colors
    pub dual_state: bool,
    pub palette: Palette,
    /// extent of the cleared background, centered on the origin
    pub view: Point,
}

/// One animation sketch: a lattice of hexagons (and, for dual-state
/// configs, six-pointed stars) advancing with a cyclic clock.
///
/// The host calls `update` once per simulated tick and `render` once
/// per displayed frame; everything drawn is a pure function of the
/// clock's phase.
pub struct PatternController {
    config: PatternConfig,
    cell_dim: CellDim,
    clock: Clock,
}

assert_impl_all!(PatternController: Send, Sync);

impl PatternController {
    pub fn new(config: PatternConfig) -> Result<Self> {
        if !config.side.is_finite() || config.side <= 0. {
            return Err(Error::invalid_configuration(format!(
                "side must be positive, got {}",
                config.side
            )))
            .with_trace_step("PatternController::new");
        }
        if config.half_layers < 0 {
            return Err(Error::invalid_configuration(format!(
                "half_layers must be non-negative, got {}",
                config.half_layers
            )))
            .with_trace_step("PatternController::new");
        }
        let clock = Clock::new(config.period).with_trace_step("PatternController::new")?;
        Ok(Self {
            cell_dim: CellDim::from(config.side),
            config,
            clock,
        })
    }

    fn base_config() -> PatternConfig {
        PatternConfig {
            side: SIDE,
            period: 9.,
            half_layers: 0,
            offset_parity: Parity::Odd,
            skip: None,
            splode: false,
            dual_state: false,
            palette: Palette::day(),
            view: Point::square(VIEW),
        }
    }

    fn dual_config() -> PatternConfig {
        PatternConfig {
            period: 8.,
            half_layers: HALF_LAYERS,
            offset_parity: Parity::Even,
            skip: Some(SkipRule::SparseThirds),
            dual_state: true,
            ..Self::base_config()
        }
    }

    /// A single static hexagon at the origin.
    pub fn single_tile() -> Result<Self> {
        Self::new(Self::base_config())
    }

    /// The full static hex tiling.
    pub fn hex_grid() -> Result<Self> {
        Self::new(PatternConfig {
            half_layers: HALF_LAYERS,
            ..Self::base_config()
        })
    }

    /// Sparse hex field by day, star field by night, colors inverted
    /// between the halves.
    pub fn day_night() -> Result<Self> {
        Self::new(Self::dual_config())
    }

    /// Day/night plus the radial breathing distortion.
    pub fn splode() -> Result<Self> {
        Self::new(PatternConfig {
            splode: true,
            palette: Palette::duotone(230.),
            ..Self::dual_config()
        })
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Simulate `dt` seconds passing.
    pub fn update(&mut self, dt: f32) -> Result {
        self.clock
            .advance(dt)
            .with_trace_step("PatternController::update")
    }

    /// Draw the current frame. Coordinates are origin-centered; the
    /// host decides where the origin lands on screen.
    pub fn render(&self, surface: &mut impl Surface) -> Result {
        let night = self.config.dual_state && self.clock.sub_phase() == 1;
        let palette = if night {
            self.config.palette.invert()
        } else {
            self.config.palette
        };

        // hard cut between the two states, no blending
        surface.set_fill_color(palette.background);
        surface
            .fill_rect(-self.config.view / 2., self.config.view)
            .with_trace_step("PatternController::render")?;
        surface.set_fill_color(palette.foreground);

        let lattice = Lattice {
            half_layers: self.config.half_layers,
            offset_parity: self.config.offset_parity,
            // the star field is three times as sparse horizontally
            col_spacing: if night { 3. } else { 1. },
            skip: if night { None } else { self.config.skip },
        };

        let (points, vertex_step) = if night {
            (Star::raw_points(self.cell_dim), TAU / 12.)
        } else {
            (Hexagon::raw_points(self.cell_dim), TAU / 6.)
        };

        // each half cycle eases the tiles through one vertex step, so
        // the field ends the half mapped onto itself
        let rotate_amt = if self.config.dual_state {
            ease_in_out(self.clock.sub_amt(), ROTATE_POWER)
        } else {
            0.
        };
        let splode_amt = loop_amt(self.clock.sub_amt());

        for center in lattice.centers(self.cell_dim) {
            let center = if self.config.splode {
                center * splode_factor(center, splode_amt)
            } else {
                center
            };

            surface.save();
            surface.translate(center);
            surface.rotate(rotate_amt * vertex_step);
            surface
                .fill_polygon(&points)
                .with_trace_step("PatternController::render")?;
            surface.restore();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Recorder;

    fn render_to_recorder(controller: &PatternController) -> Recorder {
        let mut recorder = Recorder::new();
        controller.render(&mut recorder).unwrap();
        recorder
    }

    fn approx(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn test_bad_configs_rejected() {
        let config = PatternConfig {
            side: 20.,
            period: 8.,
            half_layers: 5,
            offset_parity: Parity::Even,
            skip: None,
            splode: false,
            dual_state: false,
            palette: Palette::day(),
            view: Point::square(800.),
        };
        assert!(PatternController::new(config).is_ok());
        assert!(PatternController::new(PatternConfig { side: 0., ..config }).is_err());
        assert!(PatternController::new(PatternConfig { period: -8., ..config }).is_err());
        assert!(PatternController::new(PatternConfig { half_layers: -1, ..config }).is_err());
    }

    #[test]
    fn test_single_tile_draws_one_centered_hexagon() {
        let controller = PatternController::single_tile().unwrap();
        let recorder = render_to_recorder(&controller);

        assert_eq!(recorder.rects.len(), 1);
        assert_eq!(recorder.polygons.len(), 1);

        let (points, _) = &recorder.polygons[0];
        assert_eq!(points.len(), 6);
        // vertex 0 of an unrotated hexagon at the origin
        assert!(approx(points[0], Point { x: 20., y: 0. }), "{:?}", points);
    }

    #[test]
    fn test_hex_grid_draws_full_lattice() {
        let controller = PatternController::hex_grid().unwrap();
        let recorder = render_to_recorder(&controller);
        assert_eq!(recorder.polygons.len(), 121);
        assert!(recorder.polygons.iter().all(|(points, _)| points.len() == 6));
    }

    #[test]
    fn test_day_state_draws_sparse_hex_field() {
        let controller = PatternController::day_night().unwrap();
        let recorder = render_to_recorder(&controller);

        // 5 even rows keep 8 of 11 cols, 6 odd rows keep 7 of 11
        assert_eq!(recorder.polygons.len(), 5 * 8 + 6 * 7);
        assert!(recorder.polygons.iter().all(|(points, _)| points.len() == 6));

        let day = controller.config().palette;
        assert_eq!(recorder.rects[0].2.to_rgba(), day.background.to_rgba());
        assert_eq!(recorder.polygons[0].1.to_rgba(), day.foreground.to_rgba());
    }

    #[test]
    fn test_night_state_draws_stars_with_inverted_colors() {
        // period 8: after 4 seconds the clock sits exactly at the
        // start of the second half
        let mut controller = PatternController::day_night().unwrap();
        controller.update(4.).unwrap();
        assert_eq!(controller.clock().phase(), 0.5);
        assert_eq!(controller.clock().sub_phase(), 1);
        assert_eq!(controller.clock().sub_amt(), 0.);

        let recorder = render_to_recorder(&controller);

        // the full star lattice, no skip rule
        assert_eq!(recorder.polygons.len(), 121);
        assert!(recorder.polygons.iter().all(|(points, _)| points.len() == 12));

        let night = controller.config().palette.invert();
        assert_eq!(recorder.rects[0].2.to_rgba(), night.background.to_rgba());
        assert_eq!(recorder.polygons[0].1.to_rgba(), night.foreground.to_rgba());
    }

    #[test]
    fn test_rotation_is_zero_at_half_cycle_boundary() {
        let mut controller = PatternController::day_night().unwrap();
        controller.update(4.).unwrap();
        let recorder = render_to_recorder(&controller);

        // rotate_amt = ease_in_out(0, 3) = 0, so every star's vertex 0
        // sits one side length right of its center
        let cell_dim = CellDim::from(controller.config().side);
        let lattice = Lattice {
            half_layers: controller.config().half_layers,
            offset_parity: controller.config().offset_parity,
            col_spacing: 3.,
            skip: None,
        };
        for ((points, _), center) in recorder.polygons.iter().zip(lattice.centers(cell_dim)) {
            let expected = center + Point { x: controller.config().side, y: 0. };
            assert!(approx(points[0], expected), "{:?} vs {:?}", points[0], expected);
        }
    }

    #[test]
    fn test_splode_scales_centers_not_sizes() {
        // quarter phase: sub_amt = 0.5, splode_amt = loop(0.5) = 1,
        // so every center is scaled by slurp(1, 1.2, 1^dist) = 1.2
        let mut with = PatternController::splode().unwrap();
        let mut without = PatternController::day_night().unwrap();
        with.update(2.).unwrap();
        without.update(2.).unwrap();

        let splode_frame = render_to_recorder(&with);
        let plain_frame = render_to_recorder(&without);
        assert_eq!(splode_frame.polygons.len(), plain_frame.polygons.len());

        for ((splode_points, _), (plain_points, _)) in
            splode_frame.polygons.iter().zip(plain_frame.polygons.iter())
        {
            let splode_center = centroid(splode_points);
            let plain_center = centroid(plain_points);
            assert!(approx(splode_center, plain_center * 1.2));

            // the tile itself keeps its size
            let side = (splode_points[0] - splode_center).magnitude();
            assert!((side - (plain_points[0] - plain_center).magnitude()).abs() < 1e-2);
        }
    }

    fn centroid(points: &[Point]) -> Point {
        points.iter().fold(Point::ORIGIN, |acc, &p| acc + p) / points.len() as f32
    }
}
