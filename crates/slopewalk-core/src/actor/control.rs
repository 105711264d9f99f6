//! The control/animation state machine: Ducking, LookingUp, Charging,
//! Jumping, Rolling and Braking transitions, run once per grounded or
//! midair tick before velocities are integrated (§4.4).

use super::{sensors, Actor};
use crate::angle;
use crate::constants::{CHARGE_FILL_RATE, CHARGE_RELEASE_JUMP_LOCK, ROLL_LANDING_RELEASE_TIME};
use crate::input::Button;
use crate::movmode::MovMode;
use crate::obstacle::ObstacleMap;
use crate::state::AnimationState;

/// States in which ordinary Stopped/Walking/Running/Braking resolution
/// is allowed to overwrite `self.state` after `gsp` changes.
fn is_locomotion_state(state: AnimationState) -> bool {
    matches!(
        state,
        AnimationState::Stopped
            | AnimationState::Waiting
            | AnimationState::Walking
            | AnimationState::Running
            | AnimationState::Braking
    )
}

impl Actor {
    pub(super) fn apply_control<M: ObstacleMap>(
        &mut self,
        dt: f32,
        readout: &sensors::Readout<M::Obstacle>,
        movmode: MovMode,
        _obstacle_map: &M,
    ) {
        if self.midair {
            self.apply_midair_control(dt);
        } else {
            self.apply_grounded_control(dt, readout, movmode);
        }
    }

    fn apply_midair_control(&mut self, dt: f32) {
        if self.hlock_timer <= 0.0 {
            if self.input.is_down(Button::Left) {
                self.facing_right = false;
            } else if self.input.is_down(Button::Right) {
                self.facing_right = true;
            }
        }

        if self.state == AnimationState::Rolling
            && self.midair_timer >= ROLL_LANDING_RELEASE_TIME
            && !self.input.is_down(Button::Down)
        {
            self.state = if self.gsp.abs() > self.params.topspeed {
                AnimationState::Running
            } else {
                AnimationState::Walking
            };
        }

        let _ = dt;
    }

    fn apply_grounded_control<O>(&mut self, dt: f32, readout: &sensors::Readout<O>, movmode: MovMode) {
        let _ = readout;

        match self.state {
            AnimationState::Charging => {
                self.apply_charging(dt);
                return;
            }
            AnimationState::Ducking => {
                self.apply_ducking(dt);
                return;
            }
            AnimationState::LookingUp => {
                if !self.input.is_down(Button::Up) {
                    self.state = AnimationState::Stopped;
                } else {
                    return;
                }
            }
            _ => {}
        }

        if self.try_enter_jump(movmode) {
            return;
        }

        if self.input.is_down(Button::Down) {
            if self.state == AnimationState::Rolling {
                if self.gsp.abs() < self.params.unrollthreshold {
                    self.state = AnimationState::Stopped;
                }
            } else if self.gsp.abs() >= self.params.rollthreshold {
                self.state = AnimationState::Rolling;
            } else if self.gsp.abs() < 1e-3 {
                self.state = AnimationState::Ducking;
                return;
            }
        } else if self.state == AnimationState::Rolling && self.gsp.abs() < self.params.unrollthreshold {
            self.state = AnimationState::Stopped;
        }

        if self.input.is_down(Button::Up) && self.gsp.abs() < 1e-3 && self.state != AnimationState::Rolling {
            self.state = AnimationState::LookingUp;
            return;
        }

        let rolling = self.state == AnimationState::Rolling;
        let input_dir = self.horizontal_input_dir();

        if !rolling {
            let reversing = (self.gsp > self.params.brakingthreshold && input_dir == super::ground_physics::InputDir::Left)
                || (self.gsp < -self.params.brakingthreshold && input_dir == super::ground_physics::InputDir::Right);
            if reversing {
                self.state = AnimationState::Braking;
            } else if self.state == AnimationState::Braking {
                self.state = AnimationState::Walking;
            }
        }

        if !matches!(self.state, AnimationState::Ducking | AnimationState::Charging | AnimationState::Rolling) {
            if self.hlock_timer <= 0.0 {
                if input_dir == super::ground_physics::InputDir::Left {
                    self.facing_right = false;
                } else if input_dir == super::ground_physics::InputDir::Right {
                    self.facing_right = true;
                }
            }
        }

        self.gsp = super::ground_physics::integrate_gsp(self.gsp, self.angle, rolling, input_dir, &self.params, dt);

        if self.state == AnimationState::Pushing && !self.input.is_down(Button::Right) {
            self.state = AnimationState::Stopped;
        }

        if is_locomotion_state(self.state) {
            self.state = if self.gsp.abs() < 1e-3 {
                AnimationState::Stopped
            } else if self.gsp.abs() > self.params.topspeed {
                AnimationState::Running
            } else {
                AnimationState::Walking
            };
        }
    }

    fn apply_ducking(&mut self, dt: f32) {
        let _ = dt;
        if !self.input.is_down(Button::Down) {
            self.state = AnimationState::Stopped;
            return;
        }
        if self.input.is_pressed(Button::Fire1) {
            self.state = AnimationState::Charging;
            self.charge_intensity = 0.0;
        }
    }

    fn apply_charging(&mut self, dt: f32) {
        if !self.input.is_down(Button::Down) {
            let sign = if self.facing_right { 1.0 } else { -1.0 };
            self.gsp = sign * self.params.chrg * (0.67 + 0.33 * self.charge_intensity);
            self.charge_intensity = 0.0;
            self.jump_lock_timer = self.jump_lock_timer.max(CHARGE_RELEASE_JUMP_LOCK);
            self.state = AnimationState::Rolling;
            return;
        }
        self.charge_intensity = (self.charge_intensity + CHARGE_FILL_RATE * dt).min(1.0);
    }

    fn try_enter_jump(&mut self, movmode: MovMode) -> bool {
        if self.jump_lock_timer > 0.0 {
            return false;
        }
        if !self.input.is_pressed(Button::Fire1) {
            return false;
        }
        if matches!(self.state, AnimationState::Pushing) {
            return false;
        }
        if self.touching_ceiling {
            return false;
        }

        let jmp = if self.params.want_jump_attenuation && movmode == MovMode::Floor {
            let uphill = (self.gsp >= 0.0) != (angle::sin(self.angle) >= 0.0);
            if uphill {
                self.params.jmp * 0.5
            } else {
                self.params.jmp
            }
        } else {
            self.params.jmp
        };

        let new_xsp = self.gsp * angle::cos(self.angle) - jmp * angle::sin(self.angle);
        let new_ysp = -self.gsp * angle::sin(self.angle) + jmp * angle::cos(self.angle);

        self.xsp = new_xsp;
        self.ysp = new_ysp;
        self.gsp = 0.0;
        self.angle = 0;
        self.midair = true;
        self.state = AnimationState::Jumping;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::params::ActorParams;
    use crate::obstacle::Direction;
    use crate::types::Vec2;

    struct FlatGround {
        surface_y: f32,
    }

    impl crate::obstacle::Obstacle for FlatGround {
        fn is_solid(&self) -> bool {
            true
        }
        fn ground_position(&self, _x: f32, _y: f32, _direction: Direction) -> f32 {
            self.surface_y
        }
        fn point_collision(&self, _x: f32, y: f32) -> bool {
            y >= self.surface_y
        }
        fn got_collision(&self, _x1: f32, _y1: f32, _x2: f32, y2: f32) -> bool {
            y2 >= self.surface_y
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
            y2: f32,
            _movmode: MovMode,
            _layer: i32,
        ) -> Option<Self::Obstacle> {
            if y2 >= self.surface_y {
                Some(FlatGround { surface_y: self.surface_y })
            } else {
                None
            }
        }
        fn obstacle_exists(&self, _x: f32, y: f32, _layer: i32) -> bool {
            y >= self.surface_y
        }
    }

    #[test]
    fn test_roll_entry_requires_threshold_speed() {
        let mut actor = Actor::create(Vec2::new(0.0, 9.0));
        let map = FlatMap { surface_y: 10.0 };
        actor.params = ActorParams::default();
        actor.update(&map, 1.0 / 60.0);
        actor.gsp = actor.params.rollthreshold + 5.0;
        actor.duck();
        actor.update(&map, 1.0 / 60.0);
        assert_eq!(actor.get_state(), AnimationState::Rolling);
    }

    #[test]
    fn test_jump_suppressed_while_touching_ceiling() {
        let mut actor = Actor::create(Vec2::new(0.0, 9.0));
        let map = FlatMap { surface_y: 10.0 };
        actor.update(&map, 1.0 / 60.0);
        assert!(!actor.is_midair());

        actor.touching_ceiling = true;
        actor.input.simulate_down(Button::Fire1);
        let entered = actor.try_enter_jump(MovMode::Floor);

        assert!(!entered);
        assert_ne!(actor.state, AnimationState::Jumping);
        assert!(!actor.midair);
    }

    #[test]
    fn test_roll_exit_below_unroll_threshold() {
        let mut actor = Actor::create(Vec2::new(0.0, 9.0));
        let map = FlatMap { surface_y: 10.0 };
        actor.update(&map, 1.0 / 60.0);
        actor.gsp = actor.params.rollthreshold + 5.0;
        actor.duck();
        actor.update(&map, 1.0 / 60.0);
        assert_eq!(actor.get_state(), AnimationState::Rolling);

        actor.gsp = actor.params.unrollthreshold - 1.0;
        actor.input.simulate_up(Button::Down);
        actor.update(&map, 1.0 / 60.0);
        assert_ne!(actor.get_state(), AnimationState::Rolling);
    }
}
