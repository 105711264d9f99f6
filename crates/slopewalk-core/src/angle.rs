//! 256-value clockwise angle encoding and the slope-angle lookup table.
//!
//! `angle` is a `u8`: 0 is world-down (standing on a floor), 0x40 is
//! world-left (left wall), 0x80 is world-up (ceiling), 0xC0 is
//! world-right (right wall). Sine and cosine are looked up from a single
//! 256-entry table; sine is cosine read `0x40` indices ahead, matching a
//! quarter-turn phase shift.

use crate::constants::{SLOPE_LIMIT, SLOPE_TABLE_SIZE};
use std::sync::OnceLock;

const TABLE_LEN: usize = 256;

fn cosine_table() -> &'static [f32; TABLE_LEN] {
    static TABLE: OnceLock<[f32; TABLE_LEN]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [0.0f32; TABLE_LEN];
        for (i, slot) in table.iter_mut().enumerate() {
            let turns = i as f32 / TABLE_LEN as f32;
            *slot = (turns * std::f32::consts::TAU).cos();
        }
        table
    })
}

/// Cosine of `angle`, read from the fixed 256-entry lookup table.
#[inline]
pub fn cos(angle: u8) -> f32 {
    cosine_table()[angle as usize]
}

/// Sine of `angle`, implemented as a `+0x40` offset index into the
/// cosine table (a quarter turn ahead).
#[inline]
pub fn sin(angle: u8) -> f32 {
    cosine_table()[angle.wrapping_add(0x40) as usize]
}

/// Minimum angular distance between two angles, in `[0, 128]`.
#[inline]
pub fn delta_angle(a: u8, b: u8) -> u8 {
    let diff = a.wrapping_sub(b);
    diff.min(diff.wrapping_neg())
}

/// Converts an internal angle to degrees, counter-clockwise, per §9:
/// `degrees = ((256 - angle) * 180 / 128) mod 360`.
pub fn to_degrees(angle: u8) -> f32 {
    let degrees = (256.0 - angle as f32) * 180.0 / 128.0;
    degrees.rem_euclid(360.0)
}

/// Inverse of [`to_degrees`], rounding to the nearest encodable angle.
pub fn from_degrees(degrees: f32) -> u8 {
    let normalized = degrees.rem_euclid(360.0);
    let raw = 256.0 - normalized * 128.0 / 180.0;
    raw.rem_euclid(256.0).round() as u8
}

fn slope_table() -> &'static [[u8; SLOPE_TABLE_SIZE]; SLOPE_TABLE_SIZE] {
    static TABLE: OnceLock<[[u8; SLOPE_TABLE_SIZE]; SLOPE_TABLE_SIZE]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [[0u8; SLOPE_TABLE_SIZE]; SLOPE_TABLE_SIZE];
        for (row, dy_row) in table.iter_mut().enumerate() {
            let dy = row as i32 - SLOPE_LIMIT;
            for (col, slot) in dy_row.iter_mut().enumerate() {
                let dx = col as i32 - SLOPE_LIMIT;
                *slot = if dx == 0 && dy == 0 {
                    0
                } else {
                    let radians = (dy as f32).atan2(dx as f32);
                    // atan2(dy, dx) is measured counter-clockwise from +x
                    // with +y down already matching screen space; rotate
                    // into our clockwise, down-is-zero encoding.
                    let turns = radians / std::f32::consts::TAU;
                    let raw = (0.25 - turns) * 256.0;
                    raw.rem_euclid(256.0).round() as u8
                };
            }
        }
        table
    })
}

/// Clamps a local displacement coordinate into the table's domain by
/// reflection, as called for in §4.3 ("out-of-range values are clamped
/// by reflection").
fn reflect(value: i32) -> i32 {
    let limit = SLOPE_LIMIT;
    if value > limit {
        limit - (value - limit)
    } else if value < -limit {
        -limit + (-limit - value)
    } else {
        value
    }
    .clamp(-limit, limit)
}

/// Maps a local ground displacement `(dx, dy)` to a slope angle via the
/// precomputed 23x23 lookup table, reflecting out-of-range inputs.
pub fn slope_angle(dx: i32, dy: i32) -> u8 {
    let dx = reflect(dx);
    let dy = reflect(dy);
    let row = (dy + SLOPE_LIMIT) as usize;
    let col = (dx + SLOPE_LIMIT) as usize;
    slope_table()[row][col]
}
