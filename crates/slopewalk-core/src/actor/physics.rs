//! Airborne physics: horizontal air control, air drag, and gravity (§4.6).

use crate::actor::ground_physics::InputDir;
use crate::actor::params::ActorParams;
use crate::constants::GETTINGHIT_GRAVITY_SCALE;

/// Adds `±air·dt` to `xsp`, capping at `±topspeed` only when `xsp` was
/// already below the cap before this tick's push.
pub fn apply_air_horizontal(xsp: f32, input: InputDir, params: &ActorParams, dt: f32) -> f32 {
    match input {
        InputDir::Right => {
            let pushed = xsp + params.air * dt;
            if xsp < params.topspeed {
                pushed.min(params.topspeed)
            } else {
                pushed
            }
        }
        InputDir::Left => {
            let pushed = xsp - params.air * dt;
            if xsp > -params.topspeed {
                pushed.max(-params.topspeed)
            } else {
                pushed
            }
        }
        InputDir::None => xsp,
    }
}

/// Applies the linear approximation of `pow(airdrag, 60*dt)` to `xsp`
/// while rising but not too fast, and moving fast enough horizontally.
pub fn apply_air_drag(xsp: f32, ysp: f32, params: &ActorParams, dt: f32) -> f32 {
    let rising_slowly = ysp > params.airdragthreshold && ysp < 0.0;
    if rising_slowly && xsp.abs() >= params.airdragxthreshold {
        let (c0, c1) = params.airdrag_coefficient();
        xsp * (c0 * dt + c1)
    } else {
        xsp
    }
}

/// Applies gravity, clamped to `topyspeed`. Gravity is scaled by 6/7
/// while the actor is in the Gettinghit state.
pub fn apply_gravity(ysp: f32, params: &ActorParams, dt: f32, gettinghit: bool) -> f32 {
    let grv = if gettinghit {
        params.grv * GETTINGHIT_GRAVITY_SCALE
    } else {
        params.grv
    };
    (ysp + grv * dt).min(params.topyspeed)
}
