//! Tunable physics parameters, all initialized at 60 FPS and scaled to
//! pixels/s and pixels/s^2 regardless of the simulated `dt` (§3).
//!
//! The defaults follow the well-known Sonic Physics Guide constants,
//! converted from subpixels-per-frame-at-60Hz into pixels/s units.

use serde::{Deserialize, Serialize};

use crate::error::{ActorError, Result};

/// Every tunable the actor's simulation reads, plus the two open-question
/// switches called out in §9: these preserve the original's disabled
/// behaviors as flags instead of guessing a "fixed" version.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorParams {
    /// Ground acceleration while holding a direction, px/s^2.
    pub acc: f32,
    /// Ground deceleration when turning into the opposite direction, px/s^2.
    pub dec: f32,
    /// Ground friction applied with no input held, px/s^2.
    pub frc: f32,
    /// Absolute clamp on `gsp` while grounded, px/s.
    pub capspeed: f32,
    /// Horizontal input cap; also the Walking/Running split, px/s.
    pub topspeed: f32,
    /// Absolute clamp on `ysp` after gravity, px/s.
    pub topyspeed: f32,
    /// Air horizontal acceleration, px/s^2.
    pub air: f32,
    /// Air drag ratio applied per 1/60s while rising and fast, in `[0,1]`.
    pub airdrag: f32,
    /// Jump launch speed (negative = upward), px/s.
    pub jmp: f32,
    /// Short-hop release clamp (negative = upward), px/s.
    pub jmprel: f32,
    /// Death jump impulse (negative = upward), px/s.
    pub diejmp: f32,
    /// Gettinghit jump impulse (negative = upward), px/s.
    pub hitjmp: f32,
    /// Gravity acceleration, px/s^2.
    pub grv: f32,
    /// Slope-force coefficient, px/s^2.
    pub slp: f32,
    /// Spindash charge release scale, px/s.
    pub chrg: f32,
    /// Friction while rolling, px/s^2.
    pub rollfrc: f32,
    /// Deceleration while rolling, px/s^2.
    pub rolldec: f32,
    /// Slope-force coefficient while rolling uphill, px/s^2.
    pub rolluphillslp: f32,
    /// Slope-force coefficient while rolling downhill, px/s^2.
    pub rolldownhillslp: f32,
    /// Minimum `|gsp|` to enter Rolling, px/s.
    pub rollthreshold: f32,
    /// `|gsp|` below which Rolling returns to Stopped, px/s.
    pub unrollthreshold: f32,
    /// `|gsp|` above which Stopped becomes Walking, px/s.
    pub walkthreshold: f32,
    /// `|gsp|` below which a non-Floor mode actor falls off, px/s.
    pub falloffthreshold: f32,
    /// `|gsp|` required to enter Braking on direction reversal, px/s.
    pub brakingthreshold: f32,
    /// Upper (less negative) bound of the air-drag-qualifying `ysp` band, px/s.
    pub airdragthreshold: f32,
    /// Minimum `|xsp|` for air drag to apply, px/s.
    pub airdragxthreshold: f32,
    /// Charge intensity threshold before a charge "tier" visibly changes.
    pub chrgthreshold: f32,
    /// Seconds of no input before Stopped becomes Waiting.
    pub waittime: f32,

    /// Preserves the original's disabled uphill-jump-attenuation switch
    /// (`WANT_JUMP_ATTENUATION = 0`); do not assume it should be enabled.
    pub want_jump_attenuation: bool,

    /// Derived from `airdrag`: linear approximation coefficients
    /// `(c0, c1)` such that `xsp *= c0*dt + c1` approximates
    /// `pow(airdrag, 60*dt)` (§4.6).
    ///
    /// Skipped by (de)serialization since it is a pure function of
    /// `airdrag`; callers that deserialize an `ActorParams` must call
    /// `set_airdrag(airdrag)` once afterward to recompute it.
    #[serde(skip, default = "default_airdrag_coefficient")]
    airdrag_coefficient: (f32, f32),
}

fn default_airdrag_coefficient() -> (f32, f32) {
    airdrag_coefficient(0.96875)
}

/// Computes the `(c0, c1)` linear approximation of `pow(a, 60*dt)` from
/// §4.6, handling the `a=0` and `a=1` edge cases exactly.
pub fn airdrag_coefficient(a: f32) -> (f32, f32) {
    if a >= 1.0 {
        (0.0, 1.0)
    } else if a <= 0.0 {
        (0.0, 0.0)
    } else {
        let ln_a = a.ln();
        (60.0 * a * ln_a, a * (1.0 - ln_a))
    }
}

impl Default for ActorParams {
    fn default() -> Self {
        let airdrag = 0.96875;
        Self {
            acc: 168.75,
            dec: 1800.0,
            frc: 168.75,
            capspeed: 960.0,
            topspeed: 360.0,
            topyspeed: 960.0,
            air: 337.5,
            airdrag,
            jmp: -390.0,
            jmprel: -240.0,
            diejmp: -420.0,
            hitjmp: -240.0,
            grv: 787.5,
            slp: 450.0,
            chrg: 480.0,
            rollfrc: 84.375,
            rolldec: 450.0,
            rolluphillslp: 281.25,
            rolldownhillslp: 1125.0,
            rollthreshold: 60.0,
            unrollthreshold: 30.0,
            walkthreshold: 30.0,
            falloffthreshold: 150.0,
            brakingthreshold: 240.0,
            airdragthreshold: -240.0,
            airdragxthreshold: 30.0,
            chrgthreshold: 0.5,
            waittime: 5.0,
            want_jump_attenuation: false,
            airdrag_coefficient: airdrag_coefficient(airdrag),
        }
    }
}

impl ActorParams {
    /// Returns the built-in preset by name, or `UnknownPreset`.
    pub fn preset(name: &str) -> Result<Self> {
        match name {
            "default" => Ok(Self::default()),
            "heavy" => Ok(Self::heavy()),
            "ice" => Ok(Self::ice()),
            other => Err(ActorError::UnknownPreset {
                name: other.to_string(),
            }),
        }
    }

    /// A heavier, slower-accelerating tuning: lower acceleration and
    /// friction, higher gravity, same caps.
    fn heavy() -> Self {
        Self {
            acc: 112.5,
            frc: 112.5,
            grv: 900.0,
            air: 225.0,
            ..Self::default()
        }
    }

    /// A low-friction tuning: sliding takes much longer to stop.
    fn ice() -> Self {
        Self {
            dec: 600.0,
            frc: 33.75,
            rollfrc: 16.875,
            ..Self::default()
        }
    }

    /// The `(c0, c1)` linear drag coefficients matching the current
    /// `airdrag`.
    pub fn airdrag_coefficient(&self) -> (f32, f32) {
        self.airdrag_coefficient
    }

    /// Sets `airdrag`, clamping to `[0,1]` and recomputing the drag
    /// coefficients (§7).
    pub fn set_airdrag(&mut self, airdrag: f32) {
        self.airdrag = airdrag.clamp(0.0, 1.0);
        self.airdrag_coefficient = airdrag_coefficient(self.airdrag);
    }

    /// Validates every tunable, collecting every problem found rather
    /// than failing on the first one.
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut issues = Vec::new();

        if self.topspeed <= 0.0 {
            issues.push("topspeed must be positive".to_string());
        }
        if self.capspeed <= 0.0 {
            issues.push("capspeed must be positive".to_string());
        }
        if self.topyspeed <= 0.0 {
            issues.push("topyspeed must be positive".to_string());
        }
        if !(0.0..=1.0).contains(&self.airdrag) {
            issues.push("airdrag must be within [0,1]".to_string());
        }
        if self.jmp >= 0.0 {
            issues.push("jmp must be negative (upward)".to_string());
        }
        if self.jmprel >= 0.0 {
            issues.push("jmprel must be negative (upward)".to_string());
        }
        if self.jmprel < self.jmp {
            issues.push("jmprel must be a weaker impulse than jmp (jmprel >= jmp)".to_string());
        }
        if self.grv <= 0.0 {
            issues.push("grv must be positive".to_string());
        }
        if self.rollthreshold < self.unrollthreshold {
            issues.push("rollthreshold must be >= unrollthreshold".to_string());
        }
        if self.waittime < 0.0 {
            issues.push("waittime must be non-negative".to_string());
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }

    /// Converts validation failures into an `ActorError`, for callers
    /// that want a single `Result`.
    pub fn validated(self) -> Result<Self> {
        self.validate()
            .map(|_| self)
            .map_err(|issues| ActorError::InvalidParams { issues })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_valid() {
        assert!(ActorParams::default().validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip_needs_airdrag_fixup() {
        let original = ActorParams::ice();
        let json = serde_json::to_string(&original).unwrap();
        let mut restored: ActorParams = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.acc, original.acc);
        restored.set_airdrag(restored.airdrag);
        assert_eq!(restored.airdrag_coefficient(), original.airdrag_coefficient());
    }

    #[test]
    fn test_airdrag_coefficient_identity_at_one() {
        assert_eq!(airdrag_coefficient(1.0), (0.0, 1.0));
    }

    #[test]
    fn test_airdrag_coefficient_zero_at_zero() {
        assert_eq!(airdrag_coefficient(0.0), (0.0, 0.0));
    }

    #[test]
    fn test_set_airdrag_clamps_and_recomputes() {
        let mut params = ActorParams::default();
        params.set_airdrag(5.0);
        assert_eq!(params.airdrag, 1.0);
        assert_eq!(params.airdrag_coefficient(), (0.0, 1.0));
    }

    #[test]
    fn test_validate_catches_bad_jump_sign() {
        let mut params = ActorParams::default();
        params.jmp = 100.0;
        let issues = params.validate().unwrap_err();
        assert!(issues.iter().any(|i| i.contains("jmp")));
    }

    #[test]
    fn test_unknown_preset_errors() {
        assert!(ActorParams::preset("nonexistent").is_err());
    }

    #[test]
    fn test_known_presets_are_valid() {
        assert!(ActorParams::preset("heavy").unwrap().validate().is_ok());
        assert!(ActorParams::preset("ice").unwrap().validate().is_ok());
    }
}
