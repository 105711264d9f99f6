//! Angle reacquisition: a two-point ground probe mapped through the
//! slope-angle lookup table, run whenever the actor is grounded at the
//! end of a movement step or reattaches (§4.3).

use crate::angle::{delta_angle, slope_angle};
use crate::constants::{
    ANGLE_PROBE_MIN_OFFSET, ANGLE_PROBE_MIN_OFFSET_FRESH, ANGLE_PROBE_RETRY_STEP,
    ANGLE_PROBE_SEARCH_HEIGHT_MULT, ANGLE_REJECT_DELTA, ANGLE_RETRY_DELTA, CLOUD_OFFSET,
};
use crate::movmode::MovMode;
use crate::obstacle::{Direction, Obstacle, ObstacleMap};
use crate::types::Vec2;

/// The local-down direction of `movmode`, expressed as a world cardinal,
/// for querying the obstacle map's directional ground position.
pub(crate) fn down_direction(movmode: MovMode) -> Direction {
    match movmode {
        MovMode::Floor => Direction::Down,
        MovMode::RightWall => Direction::Left,
        MovMode::Ceiling => Direction::Up,
        MovMode::LeftWall => Direction::Right,
    }
}

/// Converts a world-space ground coordinate (the surface position along
/// the relevant axis) back into a local "depth below the tail" measured
/// along the mode's local-down axis.
pub(crate) fn local_depth(movmode: MovMode, origin: Vec2, ground_coord: f32) -> f32 {
    match movmode {
        MovMode::Floor => ground_coord - origin.y,
        MovMode::Ceiling => origin.y - ground_coord,
        MovMode::RightWall => origin.x - ground_coord,
        MovMode::LeftWall => ground_coord - origin.x,
    }
}

struct Probe {
    depth: f32,
    solid: bool,
}

/// Probes one ground point at local `x`, starting at local `tail_y` and
/// searching downward by up to `search_height` pixels. Accepts solid
/// obstacles unconditionally and clouds only while still within
/// `CLOUD_OFFSET` of their ground edge.
fn probe_point<M: ObstacleMap>(
    position: Vec2,
    movmode: MovMode,
    layer: i32,
    local_x: f32,
    tail_y: f32,
    search_height: f32,
    obstacle_map: &M,
) -> Option<Probe> {
    let dir = down_direction(movmode);
    let near = Vec2::new(local_x, tail_y);
    let far = Vec2::new(local_x, tail_y + search_height);
    let world_near = position + movmode.rotate_local(near);
    let world_far = position + movmode.rotate_local(far);
    let (x1, y1, x2, y2) = (
        world_near.x.min(world_far.x),
        world_near.y.min(world_far.y),
        world_near.x.max(world_far.x),
        world_near.y.max(world_far.y),
    );
    let obstacle = obstacle_map.best_obstacle_at(x1, y1, x2, y2, movmode, layer)?;
    let ground_world = obstacle.ground_position(world_near.x, world_near.y, dir);
    let depth = local_depth(movmode, position, ground_world);

    if obstacle.is_solid() {
        Some(Probe { depth, solid: true })
    } else if depth <= tail_y + search_height + CLOUD_OFFSET {
        Some(Probe { depth, solid: false })
    } else {
        None
    }
}

/// Outcome of an angle reacquisition attempt.
pub struct Reacquired {
    pub angle: u8,
}

/// Runs angle reacquisition. `tail_y`/`search_height` come from the
/// active A/B sensor pose; `m_n_free` reports whether the M and N
/// sensors are currently unobstructed, which permits retrying with a
/// smaller probe offset per §4.3. Returns `None` if no ground is found
/// or the result is rejected as a discontinuity.
pub fn reacquire<M: ObstacleMap>(
    position: Vec2,
    movmode: MovMode,
    layer: i32,
    current_angle: u8,
    initial_hoff: i32,
    tail_y: f32,
    sensor_height: f32,
    fresh_midair: bool,
    m_n_free: bool,
    obstacle_map: &M,
) -> Option<Reacquired> {
    let floor = if fresh_midair {
        ANGLE_PROBE_MIN_OFFSET_FRESH
    } else {
        ANGLE_PROBE_MIN_OFFSET
    };
    let search_height = sensor_height * ANGLE_PROBE_SEARCH_HEIGHT_MULT;

    let mut hoff = initial_hoff.max(floor);
    loop {
        let left = probe_point(
            position,
            movmode,
            layer,
            -(hoff as f32),
            tail_y,
            search_height,
            obstacle_map,
        );
        let right = probe_point(
            position,
            movmode,
            layer,
            hoff as f32,
            tail_y,
            search_height,
            obstacle_map,
        );

        let (left, right) = match (left, right) {
            (Some(l), Some(r)) => (l, r),
            _ => return None,
        };

        let dx = 2 * hoff;
        let dy = (right.depth - left.depth).round() as i32;
        // `slope_angle` maps a straight-down probe vector (dx=0, dy>0) to
        // angle 0; the ground tangent here is lateral (dx=run, dy=rise),
        // a quarter turn away from that, so rotate it into the table's
        // frame before looking it up.
        let new_angle = slope_angle(-dy, dx);
        let jump = delta_angle(new_angle, current_angle);
        let differing_obstacles = left.solid != right.solid;

        if differing_obstacles && jump > ANGLE_REJECT_DELTA {
            return None;
        }

        let unstable = dx.abs() > crate::constants::SLOPE_LIMIT
            || dy.abs() > crate::constants::SLOPE_LIMIT
            || jump > ANGLE_RETRY_DELTA;

        if unstable && m_n_free && hoff > floor {
            hoff = (hoff - ANGLE_PROBE_RETRY_STEP).max(floor);
            continue;
        }

        return Some(Reacquired { angle: new_angle });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacle::Direction;

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
    fn test_flat_ground_reacquires_angle_zero() {
        let map = FlatMap { surface_y: 10.0 };
        let result = reacquire(
            Vec2::new(0.0, 0.0),
            MovMode::Floor,
            0,
            0,
            9,
            0.0,
            20.0,
            false,
            true,
            &map,
        )
        .expect("flat ground should be found");
        assert!(result.angle <= 2 || result.angle >= 254);
    }
}
