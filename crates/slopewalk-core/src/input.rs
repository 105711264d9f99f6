//! Six-button input device owned by the actor for its entire lifetime
//! (§3, §6.3). Polling of the real keyboard/gamepad happens outside the
//! core; callers drive this device with `simulate_down`/`simulate_up`
//! once per frame, the same way the teacher's input layer pushes edge
//! state into a plain struct before the simulation reads it.

/// One of the six digital buttons the actor reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Up,
    Down,
    Fire1,
    /// Reserved for a future secondary action button.
    Fire2,
}

const BUTTON_COUNT: usize = 6;

fn index(button: Button) -> usize {
    match button {
        Button::Left => 0,
        Button::Right => 1,
        Button::Up => 2,
        Button::Down => 3,
        Button::Fire1 => 4,
        Button::Fire2 => 5,
    }
}

/// A six-button digital input device with edge detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputDevice {
    down: [bool; BUTTON_COUNT],
    prev_down: [bool; BUTTON_COUNT],
    disabled: bool,
}

impl InputDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `button` is currently held.
    pub fn is_down(&self, button: Button) -> bool {
        !self.disabled && self.down[index(button)]
    }

    /// Whether `button` transitioned from up to down this frame.
    pub fn is_pressed(&self, button: Button) -> bool {
        if self.disabled {
            return false;
        }
        let i = index(button);
        self.down[i] && !self.prev_down[i]
    }

    /// Marks `button` as held, for driving the device from an external
    /// input source.
    pub fn simulate_down(&mut self, button: Button) {
        self.down[index(button)] = true;
    }

    /// Marks `button` as released.
    pub fn simulate_up(&mut self, button: Button) {
        self.down[index(button)] = false;
    }

    /// Clears all button state, current and previous.
    pub fn reset(&mut self) {
        self.down = [false; BUTTON_COUNT];
        self.prev_down = [false; BUTTON_COUNT];
    }

    /// Disables the device: `is_down`/`is_pressed` report false for
    /// every button until it is re-enabled by clearing the flag.
    pub fn disable(&mut self) {
        self.disabled = true;
    }

    pub fn enable(&mut self) {
        self.disabled = false;
    }

    /// Call once per frame after the simulation has read this tick's
    /// input, so the next frame's edge detection is correct.
    pub fn advance_frame(&mut self) {
        self.prev_down = self.down;
    }
}
