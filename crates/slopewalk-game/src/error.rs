//! Game-level error type wrapping the core's and the demo harness' own
//! failure modes (preset loading, static level loading).

use std::fmt;

use slopewalk_core::ActorError;

/// Game-level error type wrapping all subsystem errors.
#[derive(Debug, Clone)]
pub enum GameError {
    /// Error from `slopewalk-core` (parameter validation, preset loading).
    Core(ActorError),

    /// Failed to load or parse the static demo level.
    Level { path: String, reason: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core(e) => write!(f, "{}", e),
            Self::Level { path, reason } => write!(f, "failed to load level '{}': {}", path, reason),
        }
    }
}

impl std::error::Error for GameError {}

impl From<ActorError> for GameError {
    fn from(e: ActorError) -> Self {
        GameError::Core(e)
    }
}

/// For backwards compatibility with plain-string error surfaces.
impl From<GameError> for String {
    fn from(e: GameError) -> Self {
        e.to_string()
    }
}

/// Convenience type alias.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_conversion() {
        let core_err = ActorError::UnknownPreset { name: "turbo".to_string() };
        let game_err: GameError = core_err.into();
        assert!(game_err.to_string().contains("turbo"));
    }

    #[test]
    fn test_level_error_to_string() {
        let err = GameError::Level {
            path: "demo.lvl".to_string(),
            reason: "no spawn marker".to_string(),
        };
        let s: String = err.into();
        assert!(s.contains("demo.lvl"));
    }
}
