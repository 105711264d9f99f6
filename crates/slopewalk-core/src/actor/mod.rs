//! The actor: the single movable physics body this crate simulates
//! (§3 Data Model, §6.4 public surface).
//!
//! Every other module in this crate is a pure function or a small piece
//! of state the actor composes; this module owns the full kinematic
//! state and drives one tick in the fixed order §5 requires.

mod control;
mod driver;

use crate::angle;
use crate::constants::{BREATHE_DURATION, FALLOFF_HLOCK_DURATION, FALLOFF_STEEP_BAND, LEDGE_EXTRA_OFFSET};
use crate::input::{Button, InputDevice};
use crate::movmode::MovMode;
use crate::obstacle::{Direction, Obstacle, ObstacleMap};
use crate::sensor::Sensor;
use crate::sensor_bank::{Label, Pose, SensorBank};
use crate::state::AnimationState;
use crate::types::Vec2;

pub mod collision_response;
pub mod ground_physics;
pub mod ground_snap;
pub mod motion;
pub mod params;
pub mod physics;
pub mod reacquire;
pub mod sensors;
pub mod sticky;

pub use driver::Driver;
pub use params::ActorParams;

/// The actor: kinematics, tunables, timers, flags and sensor bank for a
/// single controllable physics body (§3).
pub struct Actor {
    pub position: Vec2,
    pub xsp: f32,
    pub ysp: f32,
    pub gsp: f32,
    pub angle: u8,
    pub facing_right: bool,

    pub midair: bool,
    pub was_midair: bool,
    pub touching_ceiling: bool,
    pub inside_wall: bool,
    pub winning_pose: bool,
    pub sticky_lock: bool,

    pub hlock_timer: f32,
    pub jump_lock_timer: f32,
    pub wait_timer: f32,
    pub midair_timer: f32,
    pub breathe_timer: f32,

    pub charge_intensity: f32,
    pub state: AnimationState,
    pub layer: i32,

    pub input: InputDevice,
    pub params: ActorParams,

    sensors: SensorBank,
    driver: Driver,
}

impl Actor {
    /// Spawns a new actor at `position`, Stopped, Floor mode, facing
    /// right, with default tunables (§6.4 `create`).
    pub fn create(position: Vec2) -> Self {
        Self {
            position,
            xsp: 0.0,
            ysp: 0.0,
            gsp: 0.0,
            angle: 0,
            facing_right: true,
            midair: false,
            was_midair: false,
            touching_ceiling: false,
            inside_wall: false,
            winning_pose: false,
            sticky_lock: false,
            hlock_timer: 0.0,
            jump_lock_timer: 0.0,
            wait_timer: 0.0,
            midair_timer: 0.0,
            breathe_timer: 0.0,
            charge_intensity: 0.0,
            state: AnimationState::Stopped,
            layer: 0,
            input: InputDevice::new(),
            params: ActorParams::default(),
            sensors: SensorBank::new(),
            driver: Driver::new(),
        }
    }

    /// Consumes the actor. Present for symmetry with `create`; Rust's
    /// ownership already frees everything the actor owns on drop.
    pub fn destroy(self) {}

    /// Drives one outer frame: advances the fixed-timestep driver with
    /// `frame_dt` and runs the simulation body for the `dt'` it
    /// produces (§5, §6.4 `update`). Called at most once per outer
    /// frame; `obstacle_map` is borrowed only for this call.
    pub fn update<M: ObstacleMap>(&mut self, obstacle_map: &M, frame_dt: f32) {
        let dt = self.driver.advance(frame_dt);
        self.tick(obstacle_map, dt);
        self.input.advance_frame();
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn get_position(&self) -> Vec2 {
        self.position
    }

    pub fn get_state(&self) -> AnimationState {
        self.state
    }

    /// Degrees, counter-clockwise, per §9: `((256-angle)*180/128) mod 360`.
    pub fn get_angle(&self) -> f32 {
        angle::to_degrees(self.angle)
    }

    pub fn get_movmode(&self) -> MovMode {
        MovMode::from_angle(self.angle)
    }

    pub fn get_layer(&self) -> i32 {
        self.layer
    }

    pub fn set_layer(&mut self, layer: i32) {
        self.layer = layer;
    }

    pub fn is_midair(&self) -> bool {
        self.midair
    }

    pub fn is_touching_ceiling(&self) -> bool {
        self.touching_ceiling
    }

    pub fn is_facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn is_inside_wall(&self) -> bool {
        self.inside_wall
    }

    pub fn enable_winning_pose(&mut self) {
        self.winning_pose = true;
    }

    /// Returns to life from Dead/Drowned at `position`; a no-op
    /// returning `false` from any other state (§7).
    pub fn resurrect(&mut self, position: Vec2) -> bool {
        if matches!(self.state, AnimationState::Dead | AnimationState::Drowned) {
            self.position = position;
            self.xsp = 0.0;
            self.ysp = 0.0;
            self.gsp = 0.0;
            self.state = AnimationState::Stopped;
            self.midair = false;
            true
        } else {
            false
        }
    }

    /// Masks LEFT/RIGHT input for at least `seconds` (never shortens an
    /// existing lock); negative durations clamp to zero (§4.5, §7).
    pub fn lock_horizontally_for(&mut self, seconds: f32) {
        self.hlock_timer = self.hlock_timer.max(seconds.max(0.0));
    }

    /// Width, height and world-space center of the actor's current-pose
    /// bounding box, derived from the A/B/C/D sensor extents.
    pub fn bounding_box(&self) -> (f32, f32, Vec2) {
        let pose = self.pose();
        let a = self.sensors.sensor(Label::A, pose);
        let c = self.sensors.sensor(Label::C, pose);
        let width = 2.0 * a.tail_world(Vec2::ZERO, MovMode::Floor).x.abs();
        let height = a.tail_world(Vec2::ZERO, MovMode::Floor).y - c.head_world(Vec2::ZERO, MovMode::Floor).y;
        (width, height, self.position)
    }

    /// World-space endpoints and color of every sensor in the current
    /// pose, for debug visualization only (§6.1 "rendering (debug
    /// visualization only)").
    pub fn debug_sensor_lines(&self) -> Vec<(Vec2, Vec2, crate::types::Color)> {
        const LABELS: [Label; 7] = [Label::A, Label::B, Label::C, Label::D, Label::M, Label::N, Label::U];
        let pose = self.pose();
        let movmode = self.get_movmode();
        LABELS
            .iter()
            .map(|&label| {
                let sensor = self.sensors.sensor(label, pose);
                let (head, tail) = sensor.worldpos(self.position, movmode);
                (head, tail, sensor.color())
            })
            .collect()
    }

    /// Whether the actor is currently resting on `obstacle` (A or B
    /// grounded against it while not midair).
    pub fn is_standing_on_platform<O: Obstacle>(&self, obstacle: &O) -> bool {
        if self.midair {
            return false;
        }
        let movmode = self.get_movmode();
        let a = self.sensors.sensor(Label::A, self.pose()).tail_world(self.position, movmode);
        let b = self.sensors.sensor(Label::B, self.pose()).tail_world(self.position, movmode);
        obstacle.point_collision(a.x, a.y) || obstacle.point_collision(b.x, b.y)
    }

    /// Difference in A-sensor height between the Normal and JumpRoll
    /// poses, i.e. how much the hitbox shrinks while rolling.
    pub fn roll_delta(&self) -> f32 {
        let normal = self.sensors.sensor(Label::A, Pose::Normal);
        let roll = self.sensors.sensor(Label::A, Pose::JumpRoll);
        sensor_height(normal) - sensor_height(roll)
    }

    pub fn charge_intensity(&self) -> f32 {
        self.charge_intensity
    }

    pub fn reset_model_parameters(&mut self) {
        self.params = ActorParams::default();
    }

    // -- Input injection (§6.4) --------------------------------------

    pub fn walk_left(&mut self) {
        self.input.simulate_down(Button::Left);
    }

    pub fn walk_right(&mut self) {
        self.input.simulate_down(Button::Right);
    }

    pub fn duck(&mut self) {
        self.input.simulate_down(Button::Down);
    }

    pub fn look_up(&mut self) {
        self.input.simulate_down(Button::Up);
    }

    pub fn jump(&mut self) {
        self.input.simulate_down(Button::Fire1);
    }

    // -- State setters (§6.4) -----------------------------------------

    pub fn kill(&mut self) {
        self.state = AnimationState::Dead;
        self.xsp = 0.0;
        self.ysp = self.params.diejmp;
        self.gsp = 0.0;
        self.midair = true;
        self.facing_right = true;
    }

    pub fn hit(&mut self) {
        self.state = AnimationState::Gettinghit;
        self.ysp = self.params.hitjmp;
        self.gsp = 0.0;
        self.midair = true;
        self.facing_right = self.xsp <= 0.0;
    }

    /// Bounces the actor off an external object with `ysp` set to
    /// `velocity` (negative = upward), entering Springing.
    pub fn bounce(&mut self, velocity: f32) {
        self.state = AnimationState::Springing;
        self.ysp = velocity;
        self.gsp = 0.0;
        self.midair = true;
    }

    /// A spring pad launch using the jump impulse magnitude.
    pub fn spring(&mut self) {
        self.bounce(self.params.jmp);
    }

    /// Forces the actor into Rolling while grounded; a no-op midair.
    pub fn roll(&mut self) {
        if !self.midair {
            self.state = AnimationState::Rolling;
        }
    }

    pub fn drown(&mut self) {
        self.state = AnimationState::Drowned;
        self.xsp = 0.0;
        self.ysp = 0.0;
        self.gsp = 0.0;
        self.facing_right = true;
    }

    pub fn breathe(&mut self) {
        self.breathe_timer = BREATHE_DURATION;
        if self.state == AnimationState::Stopped {
            self.state = AnimationState::Breathing;
        }
    }

    // -- Internals ------------------------------------------------------

    fn pose(&self) -> Pose {
        Pose::select(self.state, self.midair)
    }

    /// Runs one simulation tick of `dt` seconds in the fixed order §5
    /// demands.
    fn tick<M: ObstacleMap>(&mut self, obstacle_map: &M, dt: f32) {
        let pose = self.pose();
        let movmode = self.get_movmode();

        // `inside_wall` is tested separately at the top of each tick (§4.2).
        self.inside_wall =
            sensors::read_inside_wall(&self.sensors, pose, self.position, movmode, self.layer, obstacle_map);

        // (1) read sensors, applying the efficiency gating from last
        // tick's flags before the new readout replaces them.
        self.sensors.apply_gating(self.midair, self.gsp, self.xsp, self.ysp);
        let readout = sensors::read_sensors(
            &self.sensors,
            pose,
            self.position,
            movmode,
            self.layer,
            self.angle,
            self.midair,
            self.xsp,
            self.ysp,
            obstacle_map,
        );

        // (2) cache was_midair, then adopt this tick's sensor-derived flags.
        self.was_midair = self.midair;
        self.midair = readout.midair;
        self.touching_ceiling = readout.touching_ceiling;

        // (3) apply special states (ignore input, scale gravity, fix facing).
        let ignoring_input = self.state.ignores_input();
        let grounded_before_control = !self.midair;

        // (4) horizontal / roll / charge dynamics (control state machine).
        if !ignoring_input {
            self.apply_control(dt, &readout, movmode, obstacle_map);
        }
        let just_launched = grounded_before_control && self.midair;

        // (5) integrate velocities.
        let movmode = self.get_movmode();
        if !self.midair {
            self.xsp = self.gsp * angle::cos(self.angle);
            self.ysp = -self.gsp * angle::sin(self.angle);
        } else if just_launched {
            // The tick a jump/spring/hit is initiated already set xsp/ysp
            // to the launch impulse; gravity hasn't had a chance to act
            // yet and shouldn't until the next tick.
        } else {
            if !ignoring_input {
                let input_dir = self.horizontal_input_dir();
                self.xsp = physics::apply_air_horizontal(self.xsp, input_dir, &self.params, dt);
                self.xsp = physics::apply_air_drag(self.xsp, self.ysp, &self.params, dt);
            }
            let gettinghit = self.state == AnimationState::Gettinghit;
            self.ysp = physics::apply_gravity(self.ysp, &self.params, dt, gettinghit);
            self.apply_jump_attenuation();
        }

        // (6) sub-step motion, zeroing blocked axes.
        let displacement = Vec2::new(self.xsp * dt, self.ysp * dt);
        let (new_position, blocked) = motion::substep_motion(
            self.position,
            displacement,
            movmode,
            self.layer,
            &self.sensors,
            pose,
            self.params.capspeed,
            self.params.topyspeed,
            obstacle_map,
        );
        self.position = new_position;
        if blocked.x {
            self.xsp = 0.0;
        }
        if blocked.y {
            self.ysp = 0.0;
        }

        // (7) wall response.
        self.apply_wall_response(&readout, movmode);

        // (8) ceiling response.
        self.apply_ceiling_response(&readout, obstacle_map);

        // (9) sticky physics.
        self.apply_sticky_physics(obstacle_map);

        // (10)/(11) ground snap and ground reacquisition.
        self.apply_ground_snap_and_reacquire(&readout, obstacle_map);

        // (12) fall-off test.
        self.apply_falloff();

        // (13) timers and state fixup.
        self.update_timers(dt);
        self.apply_ledge_check(&readout, obstacle_map);
        self.fixup_state();
    }

    fn horizontal_input_dir(&self) -> ground_physics::InputDir {
        if self.hlock_timer > 0.0 {
            return ground_physics::InputDir::None;
        }
        let left = self.input.is_down(Button::Left);
        let right = self.input.is_down(Button::Right);
        match (left, right) {
            (true, false) => ground_physics::InputDir::Left,
            (false, true) => ground_physics::InputDir::Right,
            _ => ground_physics::InputDir::None,
        }
    }

    fn apply_wall_response<O: Obstacle>(&mut self, readout: &sensors::Readout<O>, movmode: MovMode) {
        let holding_right = self.input.is_down(Button::Right) && self.hlock_timer <= 0.0;
        let holding_left = self.input.is_down(Button::Left) && self.hlock_timer <= 0.0;
        let rolling = self.state == AnimationState::Rolling;

        if let Some(obstacle) = &readout.n {
            let outcome = collision_response::resolve_wall_hit(
                collision_response::WallSide::Right,
                obstacle,
                self.position,
                movmode,
                self.gsp,
                self.xsp,
                self.ysp,
                self.angle,
                !self.midair,
                rolling,
                holding_right,
            );
            self.adopt_wall_outcome(outcome);
        } else if let Some(obstacle) = &readout.m {
            let outcome = collision_response::resolve_wall_hit(
                collision_response::WallSide::Left,
                obstacle,
                self.position,
                movmode,
                self.gsp,
                self.xsp,
                self.ysp,
                self.angle,
                !self.midair,
                rolling,
                holding_left,
            );
            self.adopt_wall_outcome(outcome);
        }
    }

    fn adopt_wall_outcome(&mut self, outcome: collision_response::WallHitOutcome) {
        self.position = outcome.position;
        self.gsp = outcome.gsp;
        self.xsp = outcome.xsp;
        self.ysp = outcome.ysp;
        self.angle = outcome.angle;
        if outcome.enter_pushing {
            self.state = AnimationState::Pushing;
        }
    }

    fn apply_ceiling_response<M: ObstacleMap>(&mut self, readout: &sensors::Readout<M::Obstacle>, obstacle_map: &M) {
        if !self.midair || !self.touching_ceiling {
            return;
        }
        let movmode = self.get_movmode();
        let more_extreme = match (&readout.c, &readout.d) {
            (Some(c), Some(d)) => {
                let c_edge = c.ground_position(self.position.x, self.position.y, Direction::Up);
                let d_edge = d.ground_position(self.position.x, self.position.y, Direction::Up);
                Some(if movmode == MovMode::Floor {
                    if c_edge < d_edge { c } else { d }
                } else if c_edge > d_edge {
                    c
                } else {
                    d
                })
            }
            (Some(c), None) => Some(c),
            (None, Some(d)) => Some(d),
            (None, None) => None,
        };
        let Some(obstacle) = more_extreme else { return };

        let a_sensor = self.sensors.sensor(Label::A, self.pose());
        let hoff = (a_sensor.tail_world(Vec2::ZERO, MovMode::Floor).x.abs().ceil() as i32) | 1;
        let height = sensor_height(a_sensor);

        let outcome = collision_response::resolve_ceiling_hit(
            obstacle,
            self.position,
            movmode,
            self.gsp,
            self.xsp,
            self.ysp,
            self.layer,
            hoff,
            height,
            obstacle_map,
        );
        self.position = outcome.position;
        self.gsp = outcome.gsp;
        self.xsp = outcome.xsp;
        self.ysp = outcome.ysp;
        self.angle = outcome.angle;
        if outcome.reattached {
            self.midair = false;
            if self.state != AnimationState::Rolling {
                self.state = if self.gsp.abs() > self.params.topspeed {
                    AnimationState::Running
                } else {
                    AnimationState::Walking
                };
            }
        }
    }

    fn apply_sticky_physics<M: ObstacleMap>(&mut self, obstacle_map: &M) {
        let suppressed = matches!(
            self.state,
            AnimationState::Jumping | AnimationState::Gettinghit | AnimationState::Springing | AnimationState::Drowned | AnimationState::Dead
        ) || (self.state == AnimationState::Rolling && self.sticky_lock);
        let eligible = self.was_midair && self.midair && !suppressed;
        if !eligible {
            return;
        }

        let movmode = self.get_movmode();
        let a_sensor = self.sensors.sensor(Label::A, self.pose());
        let tail_y = a_sensor.tail_world(Vec2::ZERO, MovMode::Floor).y;
        let hoff = (a_sensor.tail_world(Vec2::ZERO, MovMode::Floor).x.abs().ceil() as i32) | 1;
        let height = sensor_height(a_sensor);

        match sticky::try_stick(true, self.position, movmode, self.angle, self.layer, tail_y, hoff, height, obstacle_map) {
            Some(result) => {
                self.position = result.position;
                self.angle = result.angle;
                self.midair = false;
                if self.state == AnimationState::Rolling {
                    self.sticky_lock = false;
                }
            }
            None if self.state == AnimationState::Rolling => {
                self.sticky_lock = true;
            }
            None => {}
        }
    }

    fn apply_ground_snap_and_reacquire<M: ObstacleMap>(&mut self, readout: &sensors::Readout<M::Obstacle>, obstacle_map: &M) {
        if self.midair {
            return;
        }
        let movmode = self.get_movmode();
        let dir = reacquire::down_direction(movmode);
        let a_ground = readout
            .a
            .as_ref()
            .map(|o| o.ground_position(self.position.x, self.position.y, dir));
        let b_ground = readout
            .b
            .as_ref()
            .map(|o| o.ground_position(self.position.x, self.position.y, dir));

        if let Some(ground) = ground_snap::pick_ground(movmode, a_ground, b_ground) {
            let a_sensor = self.sensors.sensor(Label::A, self.pose());
            let tail_local_y = sensor_tail_local_y(a_sensor);
            self.position = ground_snap::snap_position(movmode, self.position, tail_local_y, ground);
        }

        let transitioned = self.was_midair && !self.midair;
        if transitioned {
            let new_gsp = ground_snap::reacquire_gsp_on_landing(self.angle, self.xsp, self.ysp);
            let prior_movmode = movmode;
            self.gsp = new_gsp;
            self.xsp = 0.0;
            self.ysp = 0.0;
            if self.state != AnimationState::Rolling {
                self.state = if self.gsp.abs() > self.params.topspeed {
                    AnimationState::Running
                } else {
                    AnimationState::Walking
                };
            }
            let _ = prior_movmode;
        }

        // Continuous angle reacquisition while grounded (§4.3).
        let a_sensor = self.sensors.sensor(Label::A, self.pose());
        let hoff = (a_sensor.tail_world(Vec2::ZERO, MovMode::Floor).x.abs().ceil() as i32) | 1;
        let tail_local_y = sensor_tail_local_y(a_sensor);
        let height = sensor_height(a_sensor);
        let m_n_free = readout.m.is_none() && readout.n.is_none();
        let fresh_midair = transitioned;

        if let Some(result) = reacquire::reacquire(
            self.position,
            movmode,
            self.layer,
            self.angle,
            hoff,
            tail_local_y,
            height,
            fresh_midair,
            m_n_free,
            obstacle_map,
        ) {
            self.angle = result.angle;
        } else {
            self.midair = true;
        }
    }

    fn apply_falloff(&mut self) {
        if self.midair {
            return;
        }
        let movmode = self.get_movmode();
        if movmode == MovMode::Floor {
            return;
        }
        if self.hlock_timer == 0.0 && self.gsp.abs() < self.params.falloffthreshold {
            self.hlock_timer = FALLOFF_HLOCK_DURATION;
            let (lo, hi) = FALLOFF_STEEP_BAND;
            if self.angle >= lo && self.angle <= hi {
                self.gsp = 0.0;
                self.angle = 0;
            }
        }
    }

    fn apply_ledge_check<M: ObstacleMap>(&mut self, readout: &sensors::Readout<M::Obstacle>, obstacle_map: &M) {
        if self.midair || self.get_movmode() != MovMode::Floor {
            return;
        }
        if self.gsp.abs() >= self.params.walkthreshold {
            return;
        }
        let a_grounded = readout.a.is_some();
        let b_grounded = readout.b.is_some();
        if a_grounded == b_grounded {
            return;
        }
        let a_sensor = self.sensors.sensor(Label::A, self.pose());
        let depth = sensor_tail_local_y(a_sensor) + LEDGE_EXTRA_OFFSET;
        let probe = self.position + Vec2::new(0.0, depth);
        if !obstacle_map.obstacle_exists(probe.x, probe.y, self.layer) {
            self.state = AnimationState::Ledge;
            self.facing_right = a_grounded;
        }
    }

    /// Clamps a released jump to `jmprel` before the apex (the short-hop
    /// cutoff). Independent of `want_jump_attenuation`, which gates a
    /// separate uphill-launch scale at the moment of take-off.
    fn apply_jump_attenuation(&mut self) {
        if self.state == AnimationState::Jumping && !self.input.is_down(Button::Fire1) && self.ysp < self.params.jmprel {
            self.ysp = self.params.jmprel;
        }
    }

    fn update_timers(&mut self, dt: f32) {
        self.hlock_timer = (self.hlock_timer - dt).max(0.0);
        self.jump_lock_timer = (self.jump_lock_timer - dt).max(0.0);
        self.breathe_timer = (self.breathe_timer - dt).max(0.0);
        if self.breathe_timer == 0.0 && self.state == AnimationState::Breathing && self.midair {
            self.state = AnimationState::Walking;
        }

        if self.midair {
            self.midair_timer += dt;
        } else {
            self.midair_timer = 0.0;
        }

        let any_input = self.input.is_down(Button::Left)
            || self.input.is_down(Button::Right)
            || self.input.is_down(Button::Up)
            || self.input.is_down(Button::Down)
            || self.input.is_down(Button::Fire1);
        if any_input || self.midair {
            self.wait_timer = 0.0;
            if self.state == AnimationState::Waiting {
                self.state = AnimationState::Stopped;
            }
        } else if self.state == AnimationState::Stopped {
            self.wait_timer += dt;
            if self.wait_timer >= self.params.waittime {
                self.state = AnimationState::Waiting;
            }
        }

        if self.state == AnimationState::Springing && self.midair && self.ysp > 0.0 {
            self.state = AnimationState::Walking;
        }

        if self.winning_pose
            && !self.midair
            && self.gsp.abs() < self.params.walkthreshold
            && self.state != AnimationState::Braking
        {
            self.state = AnimationState::Winning;
        }
    }

    /// Rewrites states that cannot occur midair or at rest with
    /// near-zero speed, per §7.
    fn fixup_state(&mut self) {
        if self.midair && !self.state.valid_midair() {
            self.state = AnimationState::Walking;
        }
        if self.state == AnimationState::Walking && self.gsp.abs() < 1e-3 && !self.midair {
            self.state = AnimationState::Stopped;
        }
    }
}

fn sensor_height(sensor: &Sensor) -> f32 {
    let head = sensor.head_world(Vec2::ZERO, MovMode::Floor);
    let tail = sensor.tail_world(Vec2::ZERO, MovMode::Floor);
    (tail.y - head.y).abs()
}

fn sensor_tail_local_y(sensor: &Sensor) -> f32 {
    sensor.tail_world(Vec2::ZERO, MovMode::Floor).y
}
