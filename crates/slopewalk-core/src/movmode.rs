//! Movement mode: which of the four cardinal surfaces the actor is
//! currently oriented to, derived purely from `angle`.

use crate::constants::ANGLE_BANDS;
use crate::types::Vec2;

/// Which surface the actor's local-down axis currently points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovMode {
    #[default]
    Floor,
    LeftWall,
    Ceiling,
    RightWall,
}

impl MovMode {
    /// Derives the movement mode from an angle, per the quadrant
    /// invariant in the data model: each of the four boundary angles
    /// (0x20/0x60/0xA0/0xE0) stays in the band immediately below it
    /// rather than switching to the next band.
    pub fn from_angle(angle: u8) -> Self {
        if angle > ANGLE_BANDS.floor_to_leftwall && angle <= ANGLE_BANDS.leftwall_to_ceiling {
            MovMode::LeftWall
        } else if angle > ANGLE_BANDS.leftwall_to_ceiling && angle <= ANGLE_BANDS.ceiling_to_rightwall
        {
            MovMode::Ceiling
        } else if angle > ANGLE_BANDS.ceiling_to_rightwall && angle <= ANGLE_BANDS.rightwall_to_floor
        {
            MovMode::RightWall
        } else {
            MovMode::Floor
        }
    }

    /// Rotates a sprite-local coordinate into world space for this mode,
    /// matching the sensor coordinate rotation table.
    pub fn rotate_local(self, local: Vec2) -> Vec2 {
        match self {
            MovMode::Floor => local,
            MovMode::RightWall => Vec2::new(-local.y, local.x),
            MovMode::Ceiling => Vec2::new(-local.x, -local.y),
            MovMode::LeftWall => Vec2::new(local.y, -local.x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_band() {
        assert_eq!(MovMode::from_angle(0), MovMode::Floor);
        assert_eq!(MovMode::from_angle(0x1F), MovMode::Floor);
        assert_eq!(MovMode::from_angle(0xE1), MovMode::Floor);
        assert_eq!(MovMode::from_angle(255), MovMode::Floor);
    }

    #[test]
    fn test_boundary_angles_stay_in_wider_bands() {
        assert_eq!(MovMode::from_angle(0x20), MovMode::Floor);
        assert_eq!(MovMode::from_angle(0x60), MovMode::LeftWall);
        assert_eq!(MovMode::from_angle(0xA0), MovMode::Ceiling);
        assert_eq!(MovMode::from_angle(0xE0), MovMode::RightWall);
    }

    #[test]
    fn test_wall_and_ceiling_bands() {
        assert_eq!(MovMode::from_angle(0x40), MovMode::LeftWall);
        assert_eq!(MovMode::from_angle(0x80), MovMode::Ceiling);
        assert_eq!(MovMode::from_angle(0xC0), MovMode::RightWall);
    }

    #[test]
    fn test_rotate_local_floor_is_identity() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(MovMode::Floor.rotate_local(v), v);
    }

    #[test]
    fn test_rotate_local_right_wall() {
        let v = Vec2::new(2.0, 5.0);
        let rotated = MovMode::RightWall.rotate_local(v);
        assert_eq!(rotated, Vec2::new(-5.0, 2.0));
    }
}
