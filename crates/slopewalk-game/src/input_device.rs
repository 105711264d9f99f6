//! Adapts macroquad's polled keyboard state onto the core's
//! `InputDevice`, driving it with `simulate_down`/`simulate_up` once per
//! frame the same way the teacher's `InputState::update` samples raw
//! key state into its own buffer ahead of the simulation reading it.

use macroquad::prelude::*;
use slopewalk_core::{Button, InputDevice};

/// Polls the keyboard and pushes button-down/button-up edges onto an
/// `InputDevice` each frame.
pub struct KeyboardInput;

impl KeyboardInput {
    /// Samples the current keyboard state and applies it to `device`.
    /// Call once per frame, before `Actor::update`.
    pub fn poll(device: &mut InputDevice) {
        Self::apply(device, Button::Left, is_key_down(KeyCode::Left) || is_key_down(KeyCode::A));
        Self::apply(device, Button::Right, is_key_down(KeyCode::Right) || is_key_down(KeyCode::D));
        Self::apply(device, Button::Up, is_key_down(KeyCode::Up) || is_key_down(KeyCode::W));
        Self::apply(device, Button::Down, is_key_down(KeyCode::Down) || is_key_down(KeyCode::S));
        Self::apply(device, Button::Fire1, is_key_down(KeyCode::Space));
        Self::apply(device, Button::Fire2, is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift));
    }

    fn apply(device: &mut InputDevice, button: Button, held: bool) {
        if held {
            device.simulate_down(button);
        } else {
            device.simulate_up(button);
        }
    }
}
