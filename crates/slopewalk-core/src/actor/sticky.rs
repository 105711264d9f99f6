//! Sticky physics: a brief downward probe after losing ground contact,
//! keeping the actor glued to convex slope breaks at speed (§4.10).

use crate::actor::reacquire::{down_direction, local_depth, reacquire};
use crate::constants::{STICKY_PROBE_MAX, STICKY_PROBE_START};
use crate::movmode::MovMode;
use crate::obstacle::ObstacleMap;
use crate::types::Vec2;

/// Outcome of a successful sticky catch: the corrected position and the
/// angle reacquired at the new position.
pub struct StickyResult {
    pub position: Vec2,
    pub angle: u8,
}

/// Attempts to glue the actor back onto the ground it just left.
/// `eligible` should already encode "was grounded last tick, now
/// midair, and not in a state that suppresses sticky physics" (jumped,
/// hit, sprung, drowned, died, or Rolling-with-`sticky_lock`). Returns
/// `None` (leaving the actor midair) when no ground is found within the
/// probe band or the reacquired angle still reads midair.
#[allow(clippy::too_many_arguments)]
pub fn try_stick<M: ObstacleMap>(
    eligible: bool,
    position: Vec2,
    movmode: MovMode,
    angle: u8,
    layer: i32,
    foot_tail_y: f32,
    sensor_hoff: i32,
    sensor_height: f32,
    obstacle_map: &M,
) -> Option<StickyResult> {
    if !eligible {
        return None;
    }

    let dir = down_direction(movmode);
    let mut u = STICKY_PROBE_START;
    while u <= STICKY_PROBE_MAX {
        let probe_point = Vec2::new(0.0, foot_tail_y + u);
        let world_probe = position + movmode.rotate_local(probe_point);
        let world_here = position + movmode.rotate_local(Vec2::new(0.0, foot_tail_y));
        let (x1, y1, x2, y2) = (
            world_here.x.min(world_probe.x),
            world_here.y.min(world_probe.y),
            world_here.x.max(world_probe.x),
            world_here.y.max(world_probe.y),
        );
        if let Some(obstacle) = obstacle_map.best_obstacle_at(x1, y1, x2, y2, movmode, layer) {
            let ground_world = obstacle.ground_position(world_here.x, world_here.y, dir);
            let depth = local_depth(movmode, position, ground_world);
            let translate = depth - foot_tail_y;
            let translated_position = position + movmode.rotate_local(Vec2::new(0.0, translate));

            let reacquired = reacquire(
                translated_position,
                movmode,
                layer,
                angle,
                sensor_hoff,
                foot_tail_y,
                sensor_height,
                false,
                true,
                obstacle_map,
            );

            return reacquired.map(|r| StickyResult {
                position: translated_position,
                angle: r.angle,
            });
        }
        u += 1.0;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacle::{Direction, Obstacle};

    struct FlatGround {
        surface_y: f32,
    }

    impl Obstacle for FlatGround {
        fn is_solid(&self) -> bool {
            true
        }
        fn ground_position(&self, _x: f32, _y: f32, _direction: Direction) -> f32 {
            self.surface_y
        }
        fn point_collision(&self, _x: f32, _y: f32) -> bool {
            false
        }
        fn got_collision(&self, _x1: f32, _y1: f32, _x2: f32, _y2: f32) -> bool {
            true
        }
    }

    struct FlatMap {
        surface_y: f32,
    }

    impl ObstacleMap for FlatMap {
        type Obstacle = FlatGround;
        fn best_obstacle_at(
            &self,
            _x1: f32,
            _y1: f32,
            _x2: f32,
            _y2: f32,
            _movmode: MovMode,
            _layer: i32,
        ) -> Option<Self::Obstacle> {
            Some(FlatGround {
                surface_y: self.surface_y,
            })
        }
        fn obstacle_exists(&self, _x: f32, _y: f32, _layer: i32) -> bool {
            true
        }
    }

    #[test]
    fn test_ineligible_returns_none() {
        let map = FlatMap { surface_y: 25.0 };
        let result = try_stick(false, Vec2::ZERO, MovMode::Floor, 0, 0, 20.0, 9, 20.0, &map);
        assert!(result.is_none());
    }

    #[test]
    fn test_sticks_to_nearby_ground() {
        let map = FlatMap { surface_y: 25.0 };
        let result = try_stick(true, Vec2::ZERO, MovMode::Floor, 0, 0, 20.0, 9, 20.0, &map);
        assert!(result.is_some());
    }
}
