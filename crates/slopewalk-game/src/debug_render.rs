//! Draws the sensor bank, bounding box and current angle/movmode over
//! a static level so the simulation can be watched running — the
//! "rendering (debug visualization only)" collaborator the core keeps
//! out of its own scope (§6.1).
//!
//! Grounded on the teacher's `rendering/player.rs` sprite-draw pass,
//! stripped to primitive shapes since this harness has no spritesheet.

use macroquad::prelude::*;
use slopewalk_core::{Actor, ObstacleMap};

use crate::obstacle_map::TileObstacleMap;

/// Draws every solid/cloud tile in `map` as a flat-shaded rectangle.
pub fn draw_tiles(map: &TileObstacleMap) {
    let size = map.tile_size();
    for y in 0..map.height() {
        for x in 0..map.width() {
            let world_x = x as f32 * size;
            let world_y = y as f32 * size;
            if map.obstacle_exists(world_x + size / 2.0, world_y + size / 2.0, 0) {
                draw_rectangle(world_x, world_y, size, size, Color::new(0.3, 0.5, 0.6, 1.0));
            }
        }
    }
}

/// Draws one actor's sensor bank, bounding box, and a small status line
/// with its current angle and movement mode.
pub fn draw_actor(actor: &Actor) {
    for (head, tail, color) in actor.debug_sensor_lines() {
        let color = Color::new(color.r, color.g, color.b, color.a);
        draw_line(head.x, head.y, tail.x, tail.y, 1.5, color);
    }

    let (width, height, center) = actor.bounding_box();
    draw_rectangle_lines(center.x - width / 2.0, center.y - height, width, height, 1.5, WHITE);

    let label = format!(
        "{:?} angle={:.0} movmode={:?}",
        actor.get_state(),
        actor.get_angle(),
        actor.get_movmode()
    );
    draw_text(&label, center.x - width, center.y - height - 16.0, 16.0, WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use slopewalk_core::Vec2;

    #[test]
    fn test_actor_status_label_includes_state() {
        let actor = Actor::create(Vec2::ZERO);
        let label = format!("{:?}", actor.get_state());
        assert!(label.contains("Stopped"));
    }
}
