//! Ground snapping and the midair-to-grounded `gsp` reacquisition table
//! (§4.11).

use crate::angle::sin;
use crate::constants::{LANDING_NEAR_LEVEL, LANDING_SHALLOW_A, LANDING_SHALLOW_B, LANDING_STEEP_A, LANDING_STEEP_B};
use crate::movmode::MovMode;
use crate::types::Vec2;

/// Whether `angle` falls in the inclusive band `(lo, hi)`, wrapping
/// around the `u8` boundary when `lo > hi`.
fn in_band(angle: u8, (lo, hi): (u8, u8)) -> bool {
    if lo <= hi {
        angle >= lo && angle <= hi
    } else {
        angle >= lo || angle <= hi
    }
}

/// Picks the winning A/B ground candidate per §4.11: in Floor/RightWall
/// the smallest ground coordinate wins; in LeftWall/Ceiling the largest
/// (always the surface higher relative to the actor).
pub fn pick_ground(movmode: MovMode, a: Option<f32>, b: Option<f32>) -> Option<f32> {
    match (a, b) {
        (None, None) => None,
        (Some(v), None) | (None, Some(v)) => Some(v),
        (Some(a), Some(b)) => Some(match movmode {
            MovMode::Floor | MovMode::RightWall => a.min(b),
            MovMode::LeftWall | MovMode::Ceiling => a.max(b),
        }),
    }
}

/// Snaps `position` so the sensor's tail lands on `ground_coord` minus
/// `(tail_local_y - 1)` along the mode's down axis.
pub fn snap_position(movmode: MovMode, position: Vec2, tail_local_y: f32, ground_coord: f32) -> Vec2 {
    let depth = tail_local_y - 1.0;
    let mut out = position;
    match movmode {
        MovMode::Floor => out.y = ground_coord - depth,
        MovMode::Ceiling => out.y = ground_coord + depth,
        MovMode::RightWall => out.x = ground_coord + depth,
        MovMode::LeftWall => out.x = ground_coord - depth,
    }
    out
}

/// Reacquires `gsp` from airborne velocity on the midair->grounded
/// transition, per the landing angle band table in §4.11.
pub fn reacquire_gsp_on_landing(angle: u8, xsp: f32, ysp: f32) -> f32 {
    if in_band(angle, LANDING_NEAR_LEVEL) {
        xsp
    } else if in_band(angle, LANDING_SHALLOW_A) || in_band(angle, LANDING_SHALLOW_B) {
        if xsp.abs() > ysp {
            xsp
        } else {
            0.5 * ysp * -sin(angle).signum()
        }
    } else if in_band(angle, LANDING_STEEP_A) || in_band(angle, LANDING_STEEP_B) {
        if xsp.abs() > ysp {
            xsp
        } else {
            ysp * -sin(angle).signum()
        }
    } else {
        xsp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_ground_floor_smallest_wins() {
        assert_eq!(pick_ground(MovMode::Floor, Some(10.0), Some(5.0)), Some(5.0));
    }

    #[test]
    fn test_pick_ground_ceiling_largest_wins() {
        assert_eq!(pick_ground(MovMode::Ceiling, Some(10.0), Some(5.0)), Some(10.0));
    }

    #[test]
    fn test_snap_position_floor() {
        let pos = snap_position(MovMode::Floor, Vec2::new(0.0, 0.0), 20.0, 100.0);
        assert_eq!(pos.y, 100.0 - 19.0);
    }

    #[test]
    fn test_landing_near_level_uses_xsp() {
        assert_eq!(reacquire_gsp_on_landing(0, 150.0, 10.0), 150.0);
        assert_eq!(reacquire_gsp_on_landing(0xFE, 150.0, 10.0), 150.0);
    }

    #[test]
    fn test_landing_steep_uses_ysp_when_dominant() {
        let gsp = reacquire_gsp_on_landing(0x30, 5.0, 100.0);
        assert!(gsp.abs() > 5.0);
    }
}
