//! The obstacle map and obstacle traits: the actor's only read-only
//! collaborator, borrowed for the duration of a single tick and never
//! retained (see §5 resource lifetime, §6.1).

use crate::movmode::MovMode;

/// Cardinal direction a ground-position query is asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
    Left,
    Right,
}

/// A single obstacle returned by the obstacle map.
pub trait Obstacle {
    /// Whether this obstacle blocks from every direction, as opposed to
    /// a one-way "cloud" platform.
    fn is_solid(&self) -> bool;

    /// The coordinate of this obstacle's surface in `direction` at the
    /// column/row implied by `(x, y)`.
    fn ground_position(&self, x: f32, y: f32, direction: Direction) -> f32;

    /// Whether the point `(x, y)` lies inside this obstacle.
    fn point_collision(&self, x: f32, y: f32) -> bool;

    /// Whether the axis-aligned region `(x1,y1)-(x2,y2)` intersects this
    /// obstacle at all.
    fn got_collision(&self, x1: f32, y1: f32, x2: f32, y2: f32) -> bool;
}

/// Spatial index of obstacles, consumed through sensor probes.
///
/// Implementations are expected to support layered geometry: `layer` is
/// an opaque tag forwarded from the actor, letting front/back obstacle
/// sets coexist in the same map.
pub trait ObstacleMap {
    type Obstacle: Obstacle;

    /// Returns the most relevant obstacle intersecting the axis-aligned
    /// region, or `None` if nothing qualifies.
    fn best_obstacle_at(
        &self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        movmode: MovMode,
        layer: i32,
    ) -> Option<Self::Obstacle>;

    /// Whether any obstacle occupies the point `(x, y)` on `layer`.
    fn obstacle_exists(&self, x: f32, y: f32, layer: i32) -> bool;
}
