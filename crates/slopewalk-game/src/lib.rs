//! Slopewalk Game - macroquad demo harness for slopewalk-core
//!
//! This crate is a thin host around `slopewalk_core::Actor`: it
//! supplies the three collaborators the core keeps outside its own
//! scope - a tilemap implementing `ObstacleMap`, a physical input
//! device feeding `InputDevice`, and debug rendering - and nothing
//! else. There is no menu system, no audio, no save data and no
//! procedural generation here; those are game concerns, not physics
//! ones.

pub use slopewalk_core;

pub mod config;
pub mod debug_render;
pub mod error;
pub mod input_device;
pub mod obstacle_map;

pub use config::load_preset;
pub use debug_render::{draw_actor, draw_tiles};
pub use error::{GameError, Result};
pub use input_device::KeyboardInput;
pub use obstacle_map::{TileKind, TileObstacle, TileObstacleMap};

/// Compatibility module for converting between core and macroquad types.
///
/// `slopewalk_core::types::{Vec2, Color, Rect}` are standalone
/// replacements for macroquad's own types, not wrappers around them, so
/// crossing the boundary always needs an explicit field-by-field
/// conversion.
pub mod compat {
    use macroquad::prelude as mq;
    use slopewalk_core as core;

    /// Convert core Vec2 to macroquad Vec2
    pub fn vec2_to_mq(v: core::Vec2) -> mq::Vec2 {
        mq::Vec2::new(v.x, v.y)
    }

    /// Convert macroquad Vec2 to core Vec2
    pub fn vec2_from_mq(v: mq::Vec2) -> core::Vec2 {
        core::Vec2::new(v.x, v.y)
    }

    /// Convert core Rect to macroquad Rect
    pub fn rect_to_mq(r: core::Rect) -> mq::Rect {
        mq::Rect::new(r.x, r.y, r.w, r.h)
    }

    /// Convert macroquad Rect to core Rect
    pub fn rect_from_mq(r: mq::Rect) -> core::Rect {
        core::Rect::new(r.x, r.y, r.w, r.h)
    }

    /// Convert core Color to macroquad Color
    pub fn color_to_mq(c: core::Color) -> mq::Color {
        mq::Color::new(c.r, c.g, c.b, c.a)
    }

    /// Convert macroquad Color to core Color
    pub fn color_from_mq(c: mq::Color) -> core::Color {
        core::Color::new(c.r, c.g, c.b, c.a)
    }

    /// Extension trait for converting slopewalk_core::Color to macroquad::Color
    pub trait ToMqColor {
        fn to_mq_color(&self) -> mq::Color;
    }

    impl ToMqColor for core::Color {
        #[inline]
        fn to_mq_color(&self) -> mq::Color {
            mq::Color::new(self.r, self.g, self.b, self.a)
        }
    }

    /// Extension trait for converting slopewalk_core::Vec2 to macroquad::Vec2
    pub trait ToMqVec2 {
        fn to_mq_vec2(&self) -> mq::Vec2;
    }

    impl ToMqVec2 for core::Vec2 {
        #[inline]
        fn to_mq_vec2(&self) -> mq::Vec2 {
            mq::Vec2::new(self.x, self.y)
        }
    }

    /// Extension trait for converting macroquad::Vec2 to slopewalk_core::Vec2
    pub trait ToCoreVec2 {
        fn to_core_vec2(&self) -> core::Vec2;
    }

    impl ToCoreVec2 for mq::Vec2 {
        #[inline]
        fn to_core_vec2(&self) -> core::Vec2 {
            core::Vec2::new(self.x, self.y)
        }
    }
}
