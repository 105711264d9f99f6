//! Loads an `ActorParams` tuning preset, either one of the core's
//! built-ins or a JSON file on disk, mirroring the teacher's
//! `GameConfig::validate()` + `Default` pairing but delegating the
//! actual tunable set to `slopewalk_core::ActorParams`.

use std::fs;
use std::path::Path;

use slopewalk_core::{ActorError, ActorParams};

use crate::error::{GameError, Result};

/// Resolves a preset by name: a built-in core preset (`"default"`,
/// `"heavy"`, `"ice"`), or, if no built-in matches, a path to a JSON
/// file holding a serialized `ActorParams`.
pub fn load_preset(name_or_path: &str) -> Result<ActorParams> {
    match ActorParams::preset(name_or_path) {
        Ok(params) => Ok(params),
        Err(ActorError::UnknownPreset { .. }) => load_from_file(name_or_path),
        Err(other) => Err(other.into()),
    }
}

fn load_from_file(path: &str) -> Result<ActorParams> {
    let contents = fs::read_to_string(Path::new(path)).map_err(|e| GameError::Level {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    let mut params: ActorParams = serde_json::from_str(&contents).map_err(|e| {
        GameError::Core(ActorError::Deserialization { reason: e.to_string() })
    })?;
    params.set_airdrag(params.airdrag);

    params.validated().map_err(GameError::Core)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_preset_resolves_without_touching_disk() {
        let params = load_preset("heavy").unwrap();
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_missing_file_reports_level_error() {
        let err = load_preset("/nonexistent/path/to/preset.json").unwrap_err();
        assert!(err.to_string().contains("preset.json"));
    }
}
