//! Centralized tuning and geometry constants for the actor simulation.
//!
//! These mirror the magic numbers the spec calls out by name (slope
//! lookup bounds, cloud catch distance, angle-band thresholds) so they
//! live in one place instead of scattered through the state machine.

/// Half-width of the slope-angle lookup table's domain: valid local
/// displacements span `[-SLOPE_LIMIT, SLOPE_LIMIT]` on both axes.
pub const SLOPE_LIMIT: i32 = 11;

/// Side length of the slope-angle lookup table (`2*SLOPE_LIMIT + 1`).
pub const SLOPE_TABLE_SIZE: usize = (2 * SLOPE_LIMIT + 1) as usize;

/// How far (in pixels) above/below a one-way platform's ground edge a
/// sensor tail is still considered "on top of" the cloud.
pub const CLOUD_OFFSET: f32 = 12.0;

/// Angle reacquisition rejects a result more than this far (in 1/256-turn
/// units) from the current angle when the two probe obstacles differ.
pub const ANGLE_REJECT_DELTA: u8 = 0x25;

/// Angle reacquisition treats a jump larger than this as unstable and
/// retries with a smaller probe offset.
pub const ANGLE_RETRY_DELTA: u8 = 0x14;

/// Floor of the half-offset used by angle reacquisition when retrying
/// for precision while the actor has not just left midair.
pub const ANGLE_PROBE_MIN_OFFSET_FRESH: i32 = 3;

/// Floor of the half-offset used by angle reacquisition when retrying
/// away from a fresh midair transition.
pub const ANGLE_PROBE_MIN_OFFSET: i32 = 1;

/// Step size subtracted from the probe half-offset on each retry.
pub const ANGLE_PROBE_RETRY_STEP: i32 = 2;

/// Multiplier applied to sensor height when searching downward for
/// ground during angle reacquisition.
pub const ANGLE_PROBE_SEARCH_HEIGHT_MULT: f32 = 3.0;

/// Starting downward probe distance (pixels) for sticky physics.
pub const STICKY_PROBE_START: f32 = 4.0;

/// Maximum downward probe distance (pixels) for sticky physics.
pub const STICKY_PROBE_MAX: f32 = 12.0;

/// Minimum seconds a midair Rolling actor must have spent before DOWN
/// release returns it to Walking/Running on landing.
pub const ROLL_LANDING_RELEASE_TIME: f32 = 0.2;

/// Gravity scale applied while the actor is in the Gettinghit state.
pub const GETTINGHIT_GRAVITY_SCALE: f32 = 6.0 / 7.0;

/// `jump_lock_timer` set on release from Charging into Rolling.
pub const CHARGE_RELEASE_JUMP_LOCK: f32 = 3.0 / 32.0;

/// `hlock_timer` set when the actor falls off a wall/ceiling.
pub const FALLOFF_HLOCK_DURATION: f32 = 0.5;

/// Fixed-timestep driver tick rate.
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// Angle-band boundaries (quadrant boundaries of `movmode`, see §3 invariant).
pub struct AngleBands {
    pub floor_to_leftwall: u8,
    pub leftwall_to_ceiling: u8,
    pub ceiling_to_rightwall: u8,
    pub rightwall_to_floor: u8,
}

impl AngleBands {
    pub const fn default_const() -> Self {
        Self {
            floor_to_leftwall: 0x20,
            leftwall_to_ceiling: 0x60,
            ceiling_to_rightwall: 0xA0,
            rightwall_to_floor: 0xE0,
        }
    }
}

/// Global angle-band boundaries instance.
pub static ANGLE_BANDS: AngleBands = AngleBands::default_const();

/// Ceiling-reattachment steep bands from §4.9: `[0xA0, 0xBF] ∪ [0x40, 0x5F]`.
pub const CEILING_REATTACH_BAND_A: (u8, u8) = (0xA0, 0xBF);
pub const CEILING_REATTACH_BAND_B: (u8, u8) = (0x40, 0x5F);

/// Ground-reacquisition angle bands from §4.11.
pub const LANDING_NEAR_LEVEL: (u8, u8) = (0xF0, 0x0F);
pub const LANDING_SHALLOW_A: (u8, u8) = (0xE0, 0xEF);
pub const LANDING_SHALLOW_B: (u8, u8) = (0x10, 0x1F);
pub const LANDING_STEEP_A: (u8, u8) = (0xC0, 0xDF);
pub const LANDING_STEEP_B: (u8, u8) = (0x20, 0x3F);

/// Fall-off steep-angle band from §4.12: `[0x40, 0xC0]`.
pub const FALLOFF_STEEP_BAND: (u8, u8) = (0x40, 0xC0);

/// Charge intensity gained per second of holding Charging (§3 `charge_intensity`,
/// §4.4 Ducking -> Charging). The distilled spec leaves the fill rate
/// unstated; a one-second full charge matches `chrgthreshold`'s role as a
/// mid-charge tier marker.
pub const CHARGE_FILL_RATE: f32 = 1.0;

/// Default `breathe_timer` duration set by `breathe()` (§6.4, §4.4).
pub const BREATHE_DURATION: f32 = 3.0;

/// Extra distance (px) beyond the A/B sensor depth probed downward from
/// sprite-center when testing for a Ledge (§4.4): "nothing under the
/// center offset by sensor depth + 8 px".
pub const LEDGE_EXTRA_OFFSET: f32 = 8.0;

/// `midair_timer` threshold used to detect a "fresh" midair transition
/// for angle-reacquisition precision retries (§4.3).
pub const FRESH_MIDAIR_WINDOW: f32 = 1.0 / 60.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slope_table_size() {
        assert_eq!(SLOPE_TABLE_SIZE, 23);
    }

    #[test]
    fn test_angle_bands_defaults() {
        let bands = AngleBands::default_const();
        assert_eq!(bands.floor_to_leftwall, 0x20);
        assert_eq!(bands.leftwall_to_ceiling, 0x60);
        assert_eq!(bands.ceiling_to_rightwall, 0xA0);
        assert_eq!(bands.rightwall_to_floor, 0xE0);
    }

    #[test]
    fn test_cloud_offset() {
        assert!((CLOUD_OFFSET - 12.0).abs() < f32::EPSILON);
    }
}
