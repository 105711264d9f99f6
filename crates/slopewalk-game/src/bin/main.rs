//! Slopewalk demo - drives a single actor against a static tile level
//! and renders its sensor bank, bounding box, and state label.

use macroquad::prelude::*;

use slopewalk_core::types::Vec2;
use slopewalk_core::Actor;
use slopewalk_game::{config, debug_render, input_device::KeyboardInput, obstacle_map::TileObstacleMap};

const TILE_SIZE: f32 = 32.0;

const LEVEL: &str = "\
################################
#..............................#
#..............................#
#..........####.................#
#...............................#
#..................####........#
#................................#
#....####........................#
#................................#
#.......................####....#
#................................#
################################";

fn window_conf() -> Conf {
    Conf {
        window_title: "Slopewalk".to_owned(),
        window_width: 1024,
        window_height: 576,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let preset = std::env::args().nth(1).unwrap_or_else(|| "default".to_string());
    let params = match config::load_preset(&preset) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("Failed to load preset '{}': {}, falling back to default", preset, e);
            slopewalk_core::ActorParams::default()
        }
    };

    let map = TileObstacleMap::from_string(LEVEL, TILE_SIZE);

    let mut actor = Actor::create(Vec2::new(3.0 * TILE_SIZE, 3.0 * TILE_SIZE));
    actor.params = params;

    loop {
        let dt = get_frame_time().min(0.05);

        KeyboardInput::poll(&mut actor.input);
        actor.update(&map, dt);

        clear_background(Color::new(0.08, 0.08, 0.12, 1.0));

        debug_render::draw_tiles(&map);
        debug_render::draw_actor(&actor);

        next_frame().await;
    }
}
