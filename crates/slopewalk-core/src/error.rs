//! Error types for slopewalk-core operations.
//!
//! The simulation loop itself never fails - a tick either advances the
//! actor or it doesn't. These errors cover the surfaces that *can* fail:
//! building an actor from untrusted parameters and loading tuning presets.

use std::fmt;

/// Core error type for slopewalk-core operations.
#[derive(Debug, Clone)]
pub enum ActorError {
    /// One or more `ActorParams` fields failed validation.
    InvalidParams {
        issues: Vec<String>,
    },

    /// A preset name did not match any built-in tuning preset.
    UnknownPreset {
        name: String,
    },

    /// Preset/parameter deserialization failed.
    Deserialization {
        reason: String,
    },
}

impl fmt::Display for ActorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { issues } => {
                write!(f, "actor parameters invalid: {}", issues.join(", "))
            }
            Self::UnknownPreset { name } => {
                write!(f, "unknown tuning preset '{}'", name)
            }
            Self::Deserialization { reason } => {
                write!(f, "failed to deserialize actor parameters: {}", reason)
            }
        }
    }
}

impl std::error::Error for ActorError {}

/// For callers that only care about a message, not the structured variant.
impl From<ActorError> for String {
    fn from(e: ActorError) -> Self {
        e.to_string()
    }
}

/// Convenience type alias.
pub type Result<T> = std::result::Result<T, ActorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_params_display() {
        let err = ActorError::InvalidParams {
            issues: vec!["top_speed must be positive".to_string()],
        };
        assert!(err.to_string().contains("top_speed"));
    }

    #[test]
    fn test_unknown_preset_display() {
        let err = ActorError::UnknownPreset {
            name: "turbo".to_string(),
        };
        assert!(err.to_string().contains("turbo"));
    }

    #[test]
    fn test_error_to_string_conversion() {
        let err = ActorError::Deserialization {
            reason: "missing field `gravity`".to_string(),
        };
        let s: String = err.into();
        assert!(s.contains("gravity"));
    }
}
