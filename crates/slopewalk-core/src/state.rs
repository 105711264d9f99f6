//! Animation / control state: the eighteen states the actor's control
//! state machine can occupy (§3, §4.4).

/// One of the actor's animation/control states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Stopped,
    Waiting,
    Walking,
    Running,
    Jumping,
    Rolling,
    Pushing,
    Gettinghit,
    Braking,
    LookingUp,
    Ducking,
    Charging,
    Springing,
    Breathing,
    Ledge,
    Winning,
    Dead,
    Drowned,
}

impl AnimationState {
    /// Whether this state makes sense while midair. Used at tick's end
    /// to rewrite states that only make sense grounded (§7).
    pub fn valid_midair(self) -> bool {
        !matches!(
            self,
            AnimationState::Pushing
                | AnimationState::Stopped
                | AnimationState::Waiting
                | AnimationState::Ducking
                | AnimationState::LookingUp
        )
    }

    /// Whether input is ignored entirely in this state (§4.4).
    pub fn ignores_input(self) -> bool {
        matches!(
            self,
            AnimationState::Gettinghit | AnimationState::Dead | AnimationState::Drowned
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_midair() {
        assert!(!AnimationState::Stopped.valid_midair());
        assert!(!AnimationState::Pushing.valid_midair());
        assert!(AnimationState::Jumping.valid_midair());
        assert!(AnimationState::Rolling.valid_midair());
    }

    #[test]
    fn test_ignores_input() {
        assert!(AnimationState::Dead.ignores_input());
        assert!(AnimationState::Gettinghit.ignores_input());
        assert!(!AnimationState::Walking.ignores_input());
    }
}
