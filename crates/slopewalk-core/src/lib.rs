//! Slopewalk Core - Pure logic for 2D platformer actor physics
//!
//! This crate contains platform-independent code for:
//! - Sensor-based ground/wall/ceiling collision against a host's tilemap
//! - Angle-aware slope movement, ground speed integration, and air physics
//! - The actor's animation/control state machine
//! - The fixed-timestep simulation driver
pub mod actor;
pub mod angle;
pub mod constants;
pub mod error;
pub mod input;
pub mod movmode;
pub mod obstacle;
pub mod sensor;
pub mod sensor_bank;
pub mod state;
pub mod types;

/// Default tile size in pixels used by hosts built against this crate.
pub const DEFAULT_TILE_SIZE: f32 = 32.0;

// Re-export core types at crate root for convenience.
pub use types::{vec2, Color, Rect, Vec2};

pub use actor::{Actor, ActorParams, Driver};
pub use error::ActorError;
pub use input::{Button, InputDevice};
pub use movmode::MovMode;
pub use obstacle::{Direction, Obstacle, ObstacleMap};
pub use state::AnimationState;
