//! Incremental sub-stepped translation and collision zeroing (§4.7).
//!
//! Rather than applying the whole `(xsp*dt, ysp*dt)` displacement in one
//! shot, the actor moves in small sub-steps, re-reading the wall/ceiling
//! sensors after each one and zeroing the blocked axis of the remaining
//! increment. This bounds tunneling error on the fast axis.

use crate::movmode::MovMode;
use crate::obstacle::ObstacleMap;
use crate::sensor_bank::{Label, Pose, SensorBank};
use crate::types::Vec2;

/// Which axes were blocked by a wall/ceiling hit during sub-stepping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockedAxes {
    pub x: bool,
    pub y: bool,
}

/// Number of sub-steps to use for a translation of `displacement`,
/// given the actor's speed caps: `min(ceil(max(capspeed,topyspeed)/60/2), ceil(|displacement|))`.
pub fn substep_count(displacement: Vec2, capspeed: f32, topyspeed: f32) -> u32 {
    let speed_bound = (capspeed.max(topyspeed) / 60.0 / 2.0).ceil().max(1.0);
    let distance_bound = displacement.length().ceil().max(1.0);
    speed_bound.min(distance_bound) as u32
}

/// Moves `position` by `displacement` in up to `substep_count` steps,
/// re-reading M, N, C, D after each step and zeroing the remaining
/// increment's blocked axis per the mode's block-rule table.
#[allow(clippy::too_many_arguments)]
pub fn substep_motion<M: ObstacleMap>(
    position: Vec2,
    displacement: Vec2,
    movmode: MovMode,
    layer: i32,
    bank: &SensorBank,
    pose: Pose,
    capspeed: f32,
    topyspeed: f32,
    obstacle_map: &M,
) -> (Vec2, BlockedAxes) {
    let n = substep_count(displacement, capspeed, topyspeed);
    let step = Vec2::new(displacement.x / n as f32, displacement.y / n as f32);

    let mut pos = position;
    let mut blocked = BlockedAxes::default();

    for _ in 0..n {
        if blocked.x && blocked.y {
            break;
        }
        let applied = Vec2::new(
            if blocked.x { 0.0 } else { step.x },
            if blocked.y { 0.0 } else { step.y },
        );
        pos += applied;

        let m_hit = bank
            .sensor(Label::M, pose)
            .check(pos, movmode, layer, obstacle_map)
            .map(|o| o.is_solid())
            .unwrap_or(false);
        let n_hit = bank
            .sensor(Label::N, pose)
            .check(pos, movmode, layer, obstacle_map)
            .map(|o| o.is_solid())
            .unwrap_or(false);
        let cd_hit = bank
            .sensor(Label::C, pose)
            .check(pos, movmode, layer, obstacle_map)
            .map(|o| o.is_solid())
            .unwrap_or(false)
            || bank
                .sensor(Label::D, pose)
                .check(pos, movmode, layer, obstacle_map)
                .map(|o| o.is_solid())
                .unwrap_or(false);

        match movmode {
            MovMode::Floor => {
                if m_hit && step.x < 0.0 {
                    blocked.x = true;
                }
                if n_hit && step.x > 0.0 {
                    blocked.x = true;
                }
                if cd_hit && step.y < 0.0 {
                    blocked.y = true;
                }
            }
            MovMode::RightWall => {
                if m_hit && step.y > 0.0 {
                    blocked.y = true;
                }
                if n_hit && step.y < 0.0 {
                    blocked.y = true;
                }
                if cd_hit && step.x < 0.0 {
                    blocked.x = true;
                }
            }
            MovMode::Ceiling => {
                if m_hit && step.x > 0.0 {
                    blocked.x = true;
                }
                if n_hit && step.x < 0.0 {
                    blocked.x = true;
                }
                if cd_hit && step.y > 0.0 {
                    blocked.y = true;
                }
            }
            MovMode::LeftWall => {
                if m_hit && step.y < 0.0 {
                    blocked.y = true;
                }
                if n_hit && step.y > 0.0 {
                    blocked.y = true;
                }
                if cd_hit && step.x > 0.0 {
                    blocked.x = true;
                }
            }
        }
    }

    (pos, blocked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substep_count_typical_is_eight() {
        let n = substep_count(Vec2::new(10.0, 0.0), 960.0, 960.0);
        assert_eq!(n, 8);
    }

    #[test]
    fn test_substep_count_bounded_by_short_displacement() {
        let n = substep_count(Vec2::new(1.0, 0.0), 960.0, 960.0);
        assert_eq!(n, 1);
    }
}
