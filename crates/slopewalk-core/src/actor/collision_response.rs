//! Wall collision response (§4.8) and ceiling collision / reattachment
//! (§4.9), run after sub-step motion has zeroed the blocked axes.

use crate::actor::reacquire::reacquire;
use crate::angle::sin;
use crate::constants::{CEILING_REATTACH_BAND_A, CEILING_REATTACH_BAND_B};
use crate::movmode::MovMode;
use crate::obstacle::{Direction, Obstacle, ObstacleMap};
use crate::types::Vec2;

/// Which side's sensor was hit for a wall response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    /// N: the actor's "forward"/right-side sensor.
    Right,
    /// M: the actor's "backward"/left-side sensor.
    Left,
}

/// The obstacle-facing direction to query for repositioning, and the
/// world axis/sign a hit on this side blocks, per mode (mirroring the
/// block-rule table in §4.7).
fn wall_geometry(movmode: MovMode, side: WallSide) -> (Direction, bool /* x axis? */, bool /* positive sign? */) {
    use WallSide::*;
    match (movmode, side) {
        (MovMode::Floor, Right) => (Direction::Left, true, true),
        (MovMode::Floor, Left) => (Direction::Right, true, false),
        (MovMode::RightWall, Left) => (Direction::Up, false, true),
        (MovMode::RightWall, Right) => (Direction::Down, false, false),
        (MovMode::Ceiling, Left) => (Direction::Left, true, true),
        (MovMode::Ceiling, Right) => (Direction::Right, true, false),
        (MovMode::LeftWall, Left) => (Direction::Down, false, false),
        (MovMode::LeftWall, Right) => (Direction::Up, false, true),
    }
}

/// Outcome of resolving a single side's wall hit.
pub struct WallHitOutcome {
    pub position: Vec2,
    pub gsp: f32,
    pub xsp: f32,
    pub ysp: f32,
    pub angle: u8,
    pub enter_pushing: bool,
}

/// Resolves a wall hit from the N (right) or M (left) sensor. `grounded`
/// and `rolling` gate the Pushing transition; `holding_into_wall`
/// reports whether the player is pressing the direction that caused
/// the hit.
#[allow(clippy::too_many_arguments)]
pub fn resolve_wall_hit<O: Obstacle>(
    side: WallSide,
    obstacle: &O,
    position: Vec2,
    movmode: MovMode,
    gsp: f32,
    xsp: f32,
    ysp: f32,
    mut angle: u8,
    grounded: bool,
    rolling: bool,
    holding_into_wall: bool,
) -> WallHitOutcome {
    let (direction, is_x_axis, positive_sign) = wall_geometry(movmode, side);
    let edge = obstacle.ground_position(position.x, position.y, direction);

    let mut new_position = position;
    let mut new_xsp = xsp;
    let mut new_ysp = ysp;

    if is_x_axis {
        new_position.x = edge;
        new_xsp = if positive_sign { new_xsp.min(0.0) } else { new_xsp.max(0.0) };
    } else {
        new_position.y = edge;
        new_ysp = if positive_sign { new_ysp.min(0.0) } else { new_ysp.max(0.0) };
    }

    let new_gsp = if positive_sign { gsp.min(0.0) } else { gsp.max(0.0) };

    let detach_to_floor = !matches!(movmode, MovMode::Floor);
    if detach_to_floor {
        angle = 0;
    }

    let enter_pushing =
        movmode == MovMode::Floor && grounded && !rolling && side == WallSide::Right && holding_into_wall;

    WallHitOutcome {
        position: new_position,
        gsp: new_gsp,
        xsp: new_xsp,
        ysp: new_ysp,
        angle,
        enter_pushing,
    }
}

/// Outcome of resolving a ceiling hit.
pub struct CeilingHitOutcome {
    pub position: Vec2,
    pub gsp: f32,
    pub xsp: f32,
    pub ysp: f32,
    pub angle: u8,
    pub reattached: bool,
}

/// Resolves a ceiling hit while midair (§4.9). `more_extreme` is the
/// obstacle picked from C/D by whichever rule is more extreme for the
/// current mode (higher in Floor, lower in Ceiling, symmetric for the
/// wall modes, mirroring §4.11's ground pick).
#[allow(clippy::too_many_arguments)]
pub fn resolve_ceiling_hit<M: ObstacleMap>(
    more_extreme: &M::Obstacle,
    position: Vec2,
    movmode: MovMode,
    gsp: f32,
    xsp: f32,
    ysp: f32,
    layer: i32,
    sensor_hoff: i32,
    sensor_height: f32,
    obstacle_map: &M,
) -> CeilingHitOutcome {
    if ysp >= 0.0 {
        let edge = more_extreme.ground_position(position.x, position.y, Direction::Up);
        return CeilingHitOutcome {
            position: Vec2::new(position.x, edge + 1.0),
            gsp,
            xsp,
            ysp: ysp.max(0.0),
            angle: 0,
            reattached: false,
        };
    }

    let forced_angle = 0x80;
    let reacquired = reacquire(
        position,
        MovMode::Ceiling,
        layer,
        forced_angle,
        sensor_hoff,
        0.0,
        sensor_height,
        true,
        true,
        obstacle_map,
    );
    let angle = reacquired.map(|r| r.angle).unwrap_or(forced_angle);

    let in_steep_band = |a: u8, band: (u8, u8)| a >= band.0 && a <= band.1;
    let steep = in_steep_band(angle, CEILING_REATTACH_BAND_A) || in_steep_band(angle, CEILING_REATTACH_BAND_B);

    if steep {
        let by_x = xsp.abs();
        let by_y = (ysp * -sin(angle).signum()).abs();
        let new_gsp = if by_x >= by_y { -xsp } else { ysp * -sin(angle).signum() };
        CeilingHitOutcome {
            position,
            gsp: new_gsp,
            xsp: 0.0,
            ysp: 0.0,
            angle,
            reattached: true,
        }
    } else {
        let edge = more_extreme.ground_position(position.x, position.y, Direction::Up);
        CeilingHitOutcome {
            position: Vec2::new(position.x, edge + 1.0),
            gsp,
            xsp,
            ysp: ysp.max(0.0),
            angle: 0,
            reattached: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Wall {
        left_edge: f32,
    }

    impl Obstacle for Wall {
        fn is_solid(&self) -> bool {
            true
        }
        fn ground_position(&self, _x: f32, _y: f32, direction: Direction) -> f32 {
            match direction {
                Direction::Left => self.left_edge,
                _ => 0.0,
            }
        }
        fn point_collision(&self, _x: f32, _y: f32) -> bool {
            true
        }
        fn got_collision(&self, _x1: f32, _y1: f32, _x2: f32, _y2: f32) -> bool {
            true
        }
    }

    #[test]
    fn test_wall_push_clamps_gsp_and_xsp() {
        let wall = Wall { left_edge: 50.0 };
        let outcome = resolve_wall_hit(
            WallSide::Right,
            &wall,
            Vec2::new(40.0, 0.0),
            MovMode::Floor,
            200.0,
            200.0,
            0.0,
            0,
            true,
            false,
            true,
        );
        assert!(outcome.gsp <= 0.0);
        assert!(outcome.xsp <= 0.0);
        assert!(outcome.enter_pushing);
        assert_eq!(outcome.position.x, 50.0);
    }

    #[test]
    fn test_wall_hit_in_wall_mode_detaches_to_floor() {
        let wall = Wall { left_edge: 50.0 };
        let outcome = resolve_wall_hit(
            WallSide::Left,
            &wall,
            Vec2::new(40.0, 0.0),
            MovMode::RightWall,
            -100.0,
            0.0,
            -100.0,
            0x40,
            true,
            false,
            false,
        );
        assert_eq!(outcome.angle, 0);
    }
}
