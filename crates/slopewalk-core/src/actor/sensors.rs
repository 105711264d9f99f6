//! Per-tick sensor reads and cloud filtering (§4.2).

use crate::constants::CLOUD_OFFSET;
use crate::movmode::MovMode;
use crate::obstacle::{Direction, Obstacle, ObstacleMap};
use crate::sensor_bank::{Label, Pose, SensorBank};
use crate::types::Vec2;

/// The filtered result of one tick's sensor reads.
pub struct Readout<O> {
    pub a: Option<O>,
    pub b: Option<O>,
    pub c: Option<O>,
    pub d: Option<O>,
    pub m: Option<O>,
    pub n: Option<O>,
    pub midair: bool,
    pub touching_ceiling: bool,
}

/// Whether `obstacle`'s tail point still counts as "on top of" a cloud,
/// applying rule 2 only in the midair/Floor/angle-0 case the spec calls
/// out; otherwise rule 1 alone governs.
fn cloud_still_caught<O: Obstacle>(
    obstacle: &O,
    tail: Vec2,
    movmode: MovMode,
    angle: u8,
    midair_before: bool,
) -> bool {
    if !obstacle.point_collision(tail.x, tail.y) {
        return false;
    }
    if midair_before && movmode == MovMode::Floor && angle == 0 {
        let ground_y = obstacle.ground_position(tail.x, tail.y, Direction::Down);
        tail.y < ground_y + CLOUD_OFFSET
    } else {
        true
    }
}

fn filter_ab<O: Obstacle>(
    obstacle: Option<O>,
    sensor_tail: Vec2,
    movmode: MovMode,
    angle: u8,
    midair_before: bool,
    xsp: f32,
    ysp: f32,
) -> Option<O> {
    let obstacle = obstacle?;
    if obstacle.is_solid() {
        return Some(obstacle);
    }
    if -ysp > xsp.abs() {
        return None;
    }
    if cloud_still_caught(&obstacle, sensor_tail, movmode, angle, midair_before) {
        Some(obstacle)
    } else {
        None
    }
}

fn filter_solid_only<O: Obstacle>(obstacle: Option<O>) -> Option<O> {
    obstacle.filter(|o| o.is_solid())
}

/// Reads A, B, C, D, M, N against the obstacle map, applies cloud
/// filtering, and resolves the A/B "higher cloud wins" tie-break.
#[allow(clippy::too_many_arguments)]
pub fn read_sensors<M: ObstacleMap>(
    bank: &SensorBank,
    pose: Pose,
    position: Vec2,
    movmode: MovMode,
    layer: i32,
    angle: u8,
    midair_before: bool,
    xsp: f32,
    ysp: f32,
    obstacle_map: &M,
) -> Readout<M::Obstacle> {
    let a_sensor = bank.sensor(Label::A, pose);
    let b_sensor = bank.sensor(Label::B, pose);

    let a_raw = a_sensor.check(position, movmode, layer, obstacle_map);
    let b_raw = b_sensor.check(position, movmode, layer, obstacle_map);
    let a_tail = a_sensor.tail_world(position, movmode);
    let b_tail = b_sensor.tail_world(position, movmode);

    let mut a = filter_ab(a_raw, a_tail, movmode, angle, midair_before, xsp, ysp);
    let mut b = filter_ab(b_raw, b_tail, movmode, angle, midair_before, xsp, ysp);

    if movmode == MovMode::Floor {
        if let (Some(oa), Some(ob)) = (&a, &b) {
            if !oa.is_solid() && !ob.is_solid() {
                let ga = oa.ground_position(a_tail.x, a_tail.y, Direction::Down);
                let gb = ob.ground_position(b_tail.x, b_tail.y, Direction::Down);
                if (ga - gb).abs() > 8.0 {
                    if ga < gb {
                        b = None;
                    } else {
                        a = None;
                    }
                }
            }
        }
    }

    let c = filter_solid_only(bank.sensor(Label::C, pose).check(position, movmode, layer, obstacle_map));
    let d = filter_solid_only(bank.sensor(Label::D, pose).check(position, movmode, layer, obstacle_map));
    let m = filter_solid_only(bank.sensor(Label::M, pose).check(position, movmode, layer, obstacle_map));
    let n = filter_solid_only(bank.sensor(Label::N, pose).check(position, movmode, layer, obstacle_map));

    let midair = a.is_none() && b.is_none();
    let touching_ceiling = c.is_some() || d.is_some();

    Readout {
        a,
        b,
        c,
        d,
        m,
        n,
        midair,
        touching_ceiling,
    }
}

/// Tests sensor U against a solid obstacle only, independent of the
/// main sensor readout (§4.2: `inside_wall` is set separately).
pub fn read_inside_wall<M: ObstacleMap>(
    bank: &SensorBank,
    pose: Pose,
    position: Vec2,
    movmode: MovMode,
    layer: i32,
    obstacle_map: &M,
) -> bool {
    bank.sensor(Label::U, pose)
        .check(position, movmode, layer, obstacle_map)
        .map(|o| o.is_solid())
        .unwrap_or(false)
}
