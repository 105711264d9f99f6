//! The sensor primitive: an axis-aligned line segment in sprite-local
//! coordinates, rotated into world space per the actor's movement mode
//! before it probes the obstacle map (§6.2).

use crate::movmode::MovMode;
use crate::obstacle::ObstacleMap;
use crate::types::{Color, Vec2};

/// Whether a sensor was built from a vertical or horizontal segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// An axis-aligned line-segment probe, immutable except for its
/// enabled flag.
#[derive(Debug, Clone, Copy)]
pub struct Sensor {
    orientation: Orientation,
    /// "Head": the lower-index endpoint in local coordinates.
    head: Vec2,
    /// "Tail": the higher-index endpoint in local coordinates.
    tail: Vec2,
    color: Color,
    enabled: bool,
}

impl Sensor {
    /// Builds a vertical sensor at local `x`, spanning `y1..=y2`.
    pub fn vertical(x: f32, y1: f32, y2: f32, color: Color) -> Self {
        Self {
            orientation: Orientation::Vertical,
            head: Vec2::new(x, y1),
            tail: Vec2::new(x, y2),
            color,
            enabled: true,
        }
    }

    /// Builds a horizontal sensor at local `y`, spanning `x1..=x2`.
    pub fn horizontal(y: f32, x1: f32, x2: f32, color: Color) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            head: Vec2::new(x1, y),
            tail: Vec2::new(x2, y),
            color,
            enabled: true,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// World-space position of the head endpoint, rotated by `movmode`
    /// and offset by the actor's `position`.
    pub fn head_world(&self, position: Vec2, movmode: MovMode) -> Vec2 {
        position + movmode.rotate_local(self.head)
    }

    /// World-space position of the tail endpoint, rotated by `movmode`
    /// and offset by the actor's `position`.
    pub fn tail_world(&self, position: Vec2, movmode: MovMode) -> Vec2 {
        position + movmode.rotate_local(self.tail)
    }

    /// Both endpoints in world space, as `(head, tail)`.
    pub fn worldpos(&self, position: Vec2, movmode: MovMode) -> (Vec2, Vec2) {
        (
            self.head_world(position, movmode),
            self.tail_world(position, movmode),
        )
    }

    /// Rotates the segment into world space and queries the obstacle
    /// map for the best-matching obstacle, or `None` if disabled or
    /// nothing intersects.
    pub fn check<M: ObstacleMap>(
        &self,
        position: Vec2,
        movmode: MovMode,
        layer: i32,
        obstacle_map: &M,
    ) -> Option<M::Obstacle> {
        if !self.enabled {
            return None;
        }
        let (head, tail) = self.worldpos(position, movmode);
        let (x1, y1, x2, y2) = (
            head.x.min(tail.x),
            head.y.min(tail.y),
            head.x.max(tail.x),
            head.y.max(tail.y),
        );
        obstacle_map.best_obstacle_at(x1, y1, x2, y2, movmode, layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_head_tail() {
        let s = Sensor::vertical(-9.0, 0.0, 20.0, Color::WHITE);
        assert_eq!(s.head, Vec2::new(-9.0, 0.0));
        assert_eq!(s.tail, Vec2::new(-9.0, 20.0));
    }

    #[test]
    fn test_horizontal_head_tail() {
        let s = Sensor::horizontal(4.0, -10.0, 0.0, Color::WHITE);
        assert_eq!(s.head, Vec2::new(-10.0, 4.0));
        assert_eq!(s.tail, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_disabled_sensor_reports_none_via_worldpos_not_check() {
        let mut s = Sensor::vertical(0.0, 0.0, 10.0, Color::WHITE);
        assert!(s.is_enabled());
        s.set_enabled(false);
        assert!(!s.is_enabled());
    }

    #[test]
    fn test_worldpos_rotation_right_wall() {
        let s = Sensor::vertical(9.0, 0.0, 20.0, Color::WHITE);
        let (head, tail) = s.worldpos(Vec2::ZERO, MovMode::RightWall);
        assert_eq!(head, Vec2::new(0.0, 9.0));
        assert_eq!(tail, Vec2::new(-20.0, 9.0));
    }
}
