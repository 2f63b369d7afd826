use ggez::event::EventHandler;
use ggez::graphics::{Canvas, Color, DrawParam};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::mint::Point2;
use ggez::{Context, GameError, GameResult};

use crate::controller::PatternController;
use crate::error::Result;
use crate::surface::MeshSurface;

/// Drives one controller at a time: feeds it wall-clock deltas and
/// draws its frames with the origin at the window center. Number keys
/// switch between the sketches.
pub struct App {
    controller: PatternController,
}

impl App {
    pub fn new() -> Result<Self> {
        Ok(Self {
            controller: PatternController::splode()?,
        })
    }

    fn switch(&mut self, controller: Result<PatternController>) {
        match controller {
            Ok(controller) => self.controller = controller,
            Err(e) => println!("warning: could not switch sketch: {}", e),
        }
    }
}

impl EventHandler<GameError> for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let dt = ctx.time.delta().as_secs_f32();
        self.controller.update(dt)?;
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut surface = MeshSurface::new();
        self.controller.render(&mut surface)?;
        let mesh = surface.mesh(ctx);

        let (width, height) = ctx.gfx.drawable_size();
        let mut canvas = Canvas::from_frame(ctx, Color::BLACK);
        canvas.draw(
            &mesh,
            DrawParam::default().dest(Point2 { x: width / 2., y: height / 2. }),
        );
        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        match input.keycode {
            Some(KeyCode::Key1) => self.switch(PatternController::single_tile()),
            Some(KeyCode::Key2) => self.switch(PatternController::hex_grid()),
            Some(KeyCode::Key3) => self.switch(PatternController::day_night()),
            Some(KeyCode::Key4) => self.switch(PatternController::splode()),
            _ => {}
        }
        Ok(())
    }
}
