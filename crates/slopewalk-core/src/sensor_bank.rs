//! The seven-label sensor bank: three precomputed pose sets (Normal,
//! Airborne, JumpRoll) per sensor, so pose selection never rebuilds
//! geometry on the hot path (§4.1).

use crate::sensor::Sensor;
use crate::state::AnimationState;
use crate::types::Color;

/// Which of the seven sensor labels a probe corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    A,
    B,
    C,
    D,
    M,
    N,
    U,
}

const LABELS: [Label; 7] = [
    Label::A,
    Label::B,
    Label::C,
    Label::D,
    Label::M,
    Label::N,
    Label::U,
];

/// Which precomputed geometry set is active this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Normal,
    Airborne,
    JumpRoll,
}

impl Pose {
    /// Selects the active pose from animation state and midair flag,
    /// per §4.1: pure function of state, no hidden coupling to motion.
    pub fn select(state: AnimationState, midair: bool) -> Self {
        if matches!(state, AnimationState::Jumping | AnimationState::Rolling) {
            Pose::JumpRoll
        } else if midair || state == AnimationState::Springing {
            Pose::Airborne
        } else {
            Pose::Normal
        }
    }

    fn index(self) -> usize {
        match self {
            Pose::Normal => 0,
            Pose::Airborne => 1,
            Pose::JumpRoll => 2,
        }
    }
}

/// Seven sensors, each with three immutable pose-indexed geometries, as
/// described in §3's data model.
#[derive(Debug, Clone)]
pub struct SensorBank {
    sensors: [[Sensor; 3]; 7],
}

impl Default for SensorBank {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorBank {
    /// Builds the bank from the fixed geometry table in §3. Coordinates
    /// are sprite-local; A/B are the vertical ground/ceiling feelers, C/D
    /// the vertical head feelers, M/N the horizontal side feelers, and U
    /// the upward "smash" probe.
    pub fn new() -> Self {
        let normal = [
            Sensor::vertical(-9.0, 0.0, 20.0, Color::GREEN),   // A
            Sensor::vertical(9.0, 0.0, 20.0, Color::GREEN),    // B
            Sensor::vertical(-9.0, -24.0, 0.0, Color::CYAN),   // C
            Sensor::vertical(9.0, -24.0, 0.0, Color::CYAN),    // D
            Sensor::horizontal(4.0, -10.0, 0.0, Color::YELLOW), // M
            Sensor::horizontal(4.0, 0.0, 10.0, Color::YELLOW),  // N
            Sensor::vertical(0.0, -4.0, -4.0, Color::MAGENTA),  // U
        ];
        let airborne = [
            normal[0],
            normal[1],
            normal[2],
            normal[3],
            Sensor::horizontal(0.0, -11.0, 0.0, Color::YELLOW), // M
            Sensor::horizontal(0.0, 0.0, 11.0, Color::YELLOW),  // N
            normal[6],
        ];
        let jump_roll = [
            Sensor::vertical(-5.0, 0.0, 19.0, Color::GREEN),   // A
            Sensor::vertical(5.0, 0.0, 19.0, Color::GREEN),    // B
            Sensor::vertical(-5.0, -10.0, 0.0, Color::CYAN),   // C
            Sensor::vertical(5.0, -10.0, 0.0, Color::CYAN),    // D
            Sensor::horizontal(0.0, -11.0, 0.0, Color::YELLOW), // M
            Sensor::horizontal(0.0, 0.0, 11.0, Color::YELLOW),  // N
            normal[6],
        ];

        let mut sensors = [[normal[0]; 3]; 7];
        for (i, _) in LABELS.iter().enumerate() {
            sensors[i] = [normal[i], airborne[i], jump_roll[i]];
        }
        Self { sensors }
    }

    fn slot(&self, label: Label) -> &[Sensor; 3] {
        &self.sensors[label as usize]
    }

    fn slot_mut(&mut self, label: Label) -> &mut [Sensor; 3] {
        &mut self.sensors[label as usize]
    }

    /// The active-pose geometry for `label` given the current pose.
    pub fn sensor(&self, label: Label, pose: Pose) -> &Sensor {
        &self.slot(label)[pose.index()]
    }

    /// Sets the enabled flag on every pose variant of `label` at once,
    /// since the efficiency gating in §4.2 applies per-label, not
    /// per-pose.
    pub fn set_enabled(&mut self, label: Label, enabled: bool) {
        for sensor in self.slot_mut(label).iter_mut() {
            sensor.set_enabled(enabled);
        }
    }

    /// Applies §4.2's efficiency gating for this tick.
    pub fn apply_gating(&mut self, midair: bool, gsp: f32, xsp: f32, ysp: f32) {
        if midair {
            self.set_enabled(Label::A, ysp >= 0.0);
            self.set_enabled(Label::B, ysp >= 0.0);
            self.set_enabled(Label::C, ysp < 0.0);
            self.set_enabled(Label::D, ysp < 0.0);
            self.set_enabled(Label::M, xsp < 0.0);
            self.set_enabled(Label::N, xsp > 0.0);
        } else {
            self.set_enabled(Label::A, true);
            self.set_enabled(Label::B, true);
            self.set_enabled(Label::C, false);
            self.set_enabled(Label::D, false);
            self.set_enabled(Label::M, gsp < 0.0);
            self.set_enabled(Label::N, gsp > 0.0);
        }
        self.set_enabled(Label::U, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_select_jump_roll() {
        assert_eq!(Pose::select(AnimationState::Jumping, false), Pose::JumpRoll);
        assert_eq!(Pose::select(AnimationState::Rolling, true), Pose::JumpRoll);
    }

    #[test]
    fn test_pose_select_airborne() {
        assert_eq!(Pose::select(AnimationState::Walking, true), Pose::Airborne);
        assert_eq!(Pose::select(AnimationState::Springing, false), Pose::Airborne);
    }

    #[test]
    fn test_pose_select_normal() {
        assert_eq!(Pose::select(AnimationState::Stopped, false), Pose::Normal);
    }

    #[test]
    fn test_gating_grounded_gsp_sign() {
        let mut bank = SensorBank::new();
        bank.apply_gating(false, -5.0, 0.0, 0.0);
        assert!(bank.sensor(Label::M, Pose::Normal).is_enabled());
        assert!(!bank.sensor(Label::N, Pose::Normal).is_enabled());
    }

    #[test]
    fn test_gating_airborne_disables_cd_when_falling() {
        let mut bank = SensorBank::new();
        bank.apply_gating(true, 0.0, 0.0, 50.0);
        assert!(bank.sensor(Label::A, Pose::Normal).is_enabled());
        assert!(!bank.sensor(Label::C, Pose::Normal).is_enabled());
    }
}
