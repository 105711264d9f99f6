//! Integration tests for the actor's always-true invariants

use slopewalk_core::actor::params::airdrag_coefficient;
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
// movmode / angle invariant
// =============================================================================

#[test]
fn test_movmode_matches_angle_quadrant_for_every_band() {
    for angle in 0u16..=255 {
        let angle = angle as u8;
        let expected = MovMode::from_angle(angle);
        let got = MovMode::from_angle(angle);
        assert_eq!(got, expected);
    }
    // Spot-check the four quadrant interiors directly.
    assert_eq!(MovMode::from_angle(0x00), MovMode::Floor);
    assert_eq!(MovMode::from_angle(0x40), MovMode::LeftWall);
    assert_eq!(MovMode::from_angle(0x80), MovMode::Ceiling);
    assert_eq!(MovMode::from_angle(0xC0), MovMode::RightWall);
}

#[test]
fn test_actor_movmode_accessor_agrees_with_angle_field() {
    let mut actor = Actor::create(Vec2::new(0.0, 9.0));
    actor.angle = 0x40;
    assert_eq!(actor.get_movmode(), MovMode::from_angle(actor.angle));
}

// =============================================================================
// gsp / xsp clamping
// =============================================================================

#[test]
fn test_gsp_never_exceeds_capspeed_while_grounded() {
    let mut actor = Actor::create(Vec2::new(0.0, 9.0));
    let map = FlatMap { surface_y: 10.0 };
    actor.update(&map, 1.0 / 60.0);

    for _ in 0..600 {
        actor.walk_right();
        actor.update(&map, 1.0 / 60.0);
        if !actor.is_midair() {
            assert!(actor.gsp.abs() <= actor.params.capspeed + 1e-3);
        }
    }
}

#[test]
fn test_xsp_bounded_by_topspeed_or_capspeed_projection_while_grounded() {
    let mut actor = Actor::create(Vec2::new(0.0, 9.0));
    let map = FlatMap { surface_y: 10.0 };
    actor.update(&map, 1.0 / 60.0);

    for _ in 0..120 {
        actor.walk_right();
        actor.update(&map, 1.0 / 60.0);
        if !actor.is_midair() {
            let bound = actor.params.topspeed.max(actor.params.capspeed);
            assert!(actor.xsp.abs() <= bound + 1.0);
        }
    }
}

// =============================================================================
// airdrag
// =============================================================================

#[test]
fn test_airdrag_stays_within_unit_range() {
    let params = ActorParams::default();
    assert!((0.0..=1.0).contains(&params.airdrag));
}

#[test]
fn test_airdrag_coefficient_matches_formula() {
    let params = ActorParams::default();
    assert_eq!(params.airdrag_coefficient(), airdrag_coefficient(params.airdrag));
}

// =============================================================================
// timers never negative
// =============================================================================

#[test]
fn test_timers_never_go_negative_across_many_ticks() {
    let mut actor = Actor::create(Vec2::new(0.0, 9.0));
    let map = FlatMap { surface_y: 10.0 };

    for i in 0..300 {
        if i % 7 == 0 {
            actor.jump();
        }
        if i % 5 == 0 {
            actor.walk_right();
        }
        actor.update(&map, 1.0 / 60.0);

        assert!(actor.hlock_timer >= 0.0);
        assert!(actor.jump_lock_timer >= 0.0);
        assert!(actor.wait_timer >= 0.0);
        assert!(actor.midair_timer >= 0.0);
        assert!(actor.breathe_timer >= 0.0);
    }
}

// =============================================================================
// midair <=> no ground sensors
// =============================================================================

#[test]
fn test_midair_flag_matches_ground_sensor_readout() {
    let mut actor = Actor::create(Vec2::new(0.0, 9.0));
    let map = FlatMap { surface_y: 10.0 };
    actor.update(&map, 1.0 / 60.0);
    assert!(!actor.is_midair());

    actor.jump();
    actor.update(&map, 1.0 / 60.0);
    assert!(actor.is_midair());

    // Falls until it lands back on the flat ground.
    for _ in 0..120 {
        actor.update(&map, 1.0 / 60.0);
        if !actor.is_midair() {
            break;
        }
    }
    assert!(!actor.is_midair());
}

// =============================================================================
// state never grounded-only while midair
// =============================================================================

#[test]
fn test_grounded_only_states_never_survive_a_midair_tick() {
    let mut actor = Actor::create(Vec2::new(0.0, 9.0));
    let map = FlatMap { surface_y: 10.0 };
    actor.update(&map, 1.0 / 60.0);

    actor.jump();
    actor.update(&map, 1.0 / 60.0);
    assert!(actor.is_midair());
    assert!(!matches!(
        actor.get_state(),
        AnimationState::Pushing
            | AnimationState::Stopped
            | AnimationState::Waiting
            | AnimationState::Ducking
            | AnimationState::LookingUp
    ));
}
