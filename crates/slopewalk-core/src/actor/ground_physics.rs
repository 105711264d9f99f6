//! Grounded ground-speed integration: horizontal control, friction,
//! deceleration and slope force applied to `gsp` each tick.
//!
//! The spec names every tunable this module reads (`acc`, `dec`, `frc`,
//! `slp`, `rollfrc`, `rolldec`, `rolluphillslp`, `rolldownhillslp`) but
//! does not spell out their per-tick formula. This follows the
//! Sonic Physics Guide's ground-movement convention: accelerate toward
//! `topspeed` when pushing in the direction of travel, decelerate
//! (without overshooting zero) when pushing against it, and apply
//! friction toward zero with no input. Slope force always pulls `gsp`
//! toward the downhill direction; while rolling the uphill/downhill
//! coefficients replace the ordinary slope coefficient.

use crate::actor::params::ActorParams;
use crate::angle::sin;

/// Caps the approach from `current` toward `target` by `max_delta`,
/// never overshooting.
pub fn move_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    let max_delta = max_delta.abs();
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// Signed horizontal input: `-1` for LEFT, `1` for RIGHT, `0` for
/// neither or both held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDir {
    Left,
    Right,
    None,
}

fn ground_accelerate(gsp: f32, input: InputDir, params: &ActorParams, dt: f32) -> f32 {
    match input {
        InputDir::Right => {
            if gsp < 0.0 {
                move_toward(gsp, 0.0, params.dec * dt)
            } else {
                (gsp + params.acc * dt).min(params.topspeed)
            }
        }
        InputDir::Left => {
            if gsp > 0.0 {
                move_toward(gsp, 0.0, params.dec * dt)
            } else {
                (gsp - params.acc * dt).max(-params.topspeed)
            }
        }
        InputDir::None => move_toward(gsp, 0.0, params.frc * dt),
    }
}

fn roll_accelerate(gsp: f32, input: InputDir, params: &ActorParams, dt: f32) -> f32 {
    let opposing = matches!(
        (input, gsp.partial_cmp(&0.0)),
        (InputDir::Right, Some(std::cmp::Ordering::Less))
            | (InputDir::Left, Some(std::cmp::Ordering::Greater))
    );
    let rate = if opposing { params.rolldec } else { params.rollfrc };
    move_toward(gsp, 0.0, rate * dt)
}

fn slope_force(gsp: f32, angle: u8, params: &ActorParams, dt: f32) -> f32 {
    gsp - params.slp * sin(angle) * dt
}

fn roll_slope_force(gsp: f32, angle: u8, params: &ActorParams, dt: f32) -> f32 {
    let s = sin(angle);
    let downhill = (gsp >= 0.0) == (s >= 0.0);
    let coefficient = if downhill {
        params.rolldownhillslp
    } else {
        params.rolluphillslp
    };
    gsp - coefficient * s * dt
}

/// Advances `gsp` by one tick of grounded control, friction/deceleration
/// and slope force, clamping to `[-capspeed, capspeed]` per the §3
/// invariant.
pub fn integrate_gsp(gsp: f32, angle: u8, rolling: bool, input: InputDir, params: &ActorParams, dt: f32) -> f32 {
    let gsp = if rolling {
        let gsp = roll_accelerate(gsp, input, params, dt);
        roll_slope_force(gsp, angle, params, dt)
    } else {
        let gsp = ground_accelerate(gsp, input, params, dt);
        slope_force(gsp, angle, params, dt)
    };
    gsp.clamp(-params.capspeed, params.capspeed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_toward_caps_overshoot() {
        assert_eq!(move_toward(0.0, 10.0, 100.0), 10.0);
        assert_eq!(move_toward(0.0, 10.0, 3.0), 3.0);
        assert_eq!(move_toward(-5.0, 0.0, 2.0), -3.0);
    }

    #[test]
    fn test_accelerate_right_from_rest() {
        let params = ActorParams::default();
        let gsp = ground_accelerate(0.0, InputDir::Right, &params, 1.0 / 60.0);
        assert!(gsp > 0.0);
        assert!(gsp <= params.topspeed);
    }

    #[test]
    fn test_friction_decays_toward_zero() {
        let params = ActorParams::default();
        let gsp = ground_accelerate(100.0, InputDir::None, &params, 1.0 / 60.0);
        assert!(gsp < 100.0);
        assert!(gsp >= 0.0);
    }

    #[test]
    fn test_flat_ground_no_slope_drift() {
        let params = ActorParams::default();
        let gsp = slope_force(0.0, 0, &params, 1.0 / 60.0);
        assert!((gsp).abs() < 1e-4);
    }

    #[test]
    fn test_integrate_gsp_clamped_to_capspeed() {
        let params = ActorParams::default();
        let gsp = integrate_gsp(params.capspeed, 0, false, InputDir::Right, &params, 1.0);
        assert!(gsp <= params.capspeed);
    }
}
