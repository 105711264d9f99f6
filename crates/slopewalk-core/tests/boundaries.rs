//! Integration tests for boundary/edge behaviors of the control state machine

use slopewalk_core::input::Button;
use slopewalk_core::movmode::MovMode;
use slopewalk_core::obstacle::Direction;
use slopewalk_core::state::AnimationState;
use slopewalk_core::{Actor, ActorParams, Obstacle, ObstacleMap, Vec2};

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
            Some(FlatGround {
                surface_y: self.surface_y,
            })
        } else {
            None
        }
    }
    fn obstacle_exists(&self, _x: f32, y: f32, _layer: i32) -> bool {
        y >= self.surface_y
    }
}

// =============================================================================
// Air drag boundaries
// =============================================================================

#[test]
fn test_airdrag_one_leaves_xsp_unchanged() {
    let mut params = ActorParams::default();
    params.set_airdrag(1.0);
    let (c0, c1) = params.airdrag_coefficient();
    let xsp = 123.4_f32;
    let dt = 1.0 / 60.0;
    let dragged = xsp * (c0 * dt + c1);
    assert!((dragged - xsp).abs() < 1e-3);
}

#[test]
fn test_airdrag_zero_zeroes_xsp_on_qualifying_tick() {
    let mut params = ActorParams::default();
    params.set_airdrag(0.0);
    let (c0, c1) = params.airdrag_coefficient();
    let xsp = 123.4_f32;
    let dt = 1.0 / 60.0;
    let dragged = xsp * (c0 * dt + c1);
    assert_eq!(dragged, 0.0);
}

// =============================================================================
// Ducking -> Charging -> Rolling
// =============================================================================

#[test]
fn test_ducking_requires_down_and_does_not_charge_on_down_alone() {
    let mut actor = Actor::create(Vec2::new(0.0, 9.0));
    let map = FlatMap { surface_y: 10.0 };
    actor.update(&map, 1.0 / 60.0);

    actor.duck();
    actor.update(&map, 1.0 / 60.0);
    assert_eq!(actor.get_state(), AnimationState::Ducking);
    assert_ne!(actor.get_state(), AnimationState::Charging);
}

#[test]
fn test_charging_requires_fire1_pressed_while_ducking() {
    let mut actor = Actor::create(Vec2::new(0.0, 9.0));
    let map = FlatMap { surface_y: 10.0 };
    actor.update(&map, 1.0 / 60.0);

    actor.duck();
    actor.update(&map, 1.0 / 60.0);
    assert_eq!(actor.get_state(), AnimationState::Ducking);

    actor.duck();
    actor.jump();
    actor.update(&map, 1.0 / 60.0);
    assert_eq!(actor.get_state(), AnimationState::Charging);
}

#[test]
fn test_releasing_down_while_charging_enters_rolling_with_release_formula() {
    let mut actor = Actor::create(Vec2::new(0.0, 9.0));
    let map = FlatMap { surface_y: 10.0 };
    actor.update(&map, 1.0 / 60.0);

    actor.duck();
    actor.update(&map, 1.0 / 60.0);
    actor.duck();
    actor.jump();
    actor.update(&map, 1.0 / 60.0);
    assert_eq!(actor.get_state(), AnimationState::Charging);

    // Hold the charge for 30 ticks (0.5s at 60Hz) before releasing.
    for _ in 0..30 {
        actor.duck();
        actor.update(&map, 1.0 / 60.0);
    }
    let intensity_before_release = actor.charge_intensity();
    assert!(intensity_before_release > 0.0);

    actor.input.simulate_up(Button::Down);
    actor.update(&map, 1.0 / 60.0);

    assert_eq!(actor.get_state(), AnimationState::Rolling);
    let expected = actor.params.chrg * (0.67 + 0.33 * intensity_before_release);
    assert!((actor.gsp - expected).abs() < 1.0);
}

// =============================================================================
// Round-trip / idempotence
// =============================================================================

#[test]
fn test_position_roundtrips_through_set_get() {
    let mut actor = Actor::create(Vec2::ZERO);
    actor.set_position(Vec2::new(17.5, -3.25));
    assert_eq!(actor.get_position(), Vec2::new(17.5, -3.25));
}

#[test]
fn test_resting_actor_with_no_input_stays_at_rest() {
    let mut actor = Actor::create(Vec2::new(0.0, 9.0));
    let map = FlatMap { surface_y: 10.0 };
    actor.update(&map, 1.0 / 60.0);
    let position_after_settle = actor.get_position();

    for _ in 0..30 {
        actor.update(&map, 1.0 / 60.0);
    }

    assert_eq!(actor.gsp, 0.0);
    assert_eq!(actor.get_position(), position_after_settle);
}
