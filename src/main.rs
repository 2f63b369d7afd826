#[macro_use]
extern crate derive_more;

use ggez::conf::{WindowMode, WindowSetup};
use ggez::event;
use ggez::ContextBuilder;

use crate::app::App;

mod app;
mod basic;
mod clock;
mod controller;
mod ease;
mod error;
mod palette;
mod rendering;
mod surface;

fn main() {
    let wm = WindowMode::default().dimensions(800., 800.);
    let ws = WindowSetup::default().title("Hex Tiles").vsync(true);

    let (ctx, event_loop) = ContextBuilder::new("hex_tiles", "gorilskij")
        .window_mode(wm)
        .window_setup(ws)
        .build()
        .expect("couldn't build ggez context");

    let app = App::new().expect("couldn't construct the initial sketch");
    event::run(ctx, event_loop, app)
}
