//! Settings persistence
//!
//! Saves and loads [`EngineSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! Settings are stored as `settings.json` in the platform configuration
//! directory (for example `~/.config/chess-rules/settings.json` on Linux).
//! Falls back to `settings.json` in the working directory when no config
//! directory can be resolved.
//!
//! # Error Handling
//!
//! [`load_settings`] never fails: a missing, unreadable or malformed file
//! falls back to defaults and logs why. [`try_load_settings`] is the strict
//! variant for callers that want to surface the error.

use crate::core::error::CoreResult;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// User-facing preferences for the terminal front-end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Draw pieces with Unicode chess glyphs instead of ASCII letters
    pub unicode_pieces: bool,
    /// Print file letters and rank numbers around the board
    pub show_coordinates: bool,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            unicode_pieces: true,
            show_coordinates: true,
            log_filter: "info".to_string(),
        }
    }
}

/// Resolve the default settings file path
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "chess-rules") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings, returning an error instead of falling back
pub fn try_load_settings(path: &Path) -> CoreResult<EngineSettings> {
    let contents = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&contents)?;
    Ok(settings)
}

/// Load settings from `path`, falling back to defaults on any failure
pub fn load_settings(path: &Path) -> EngineSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return EngineSettings::default();
    }

    match try_load_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            EngineSettings::default()
        }
    }
}

/// Write settings to `path` as pretty JSON, creating the parent directory
pub fn save_settings(settings: &EngineSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CoreError;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("chess-rules-test-{}-{}", std::process::id(), name))
            .join(SETTINGS_FILENAME)
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = scratch_path("missing");
        assert_eq!(load_settings(&path), EngineSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        //! Saving creates the directory and the file reads back identically
        let path = scratch_path("roundtrip");
        let settings = EngineSettings {
            unicode_pieces: false,
            show_coordinates: false,
            log_filter: "debug".to_string(),
        };

        save_settings(&settings, &path).expect("save should succeed");
        assert_eq!(load_settings(&path), settings);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = scratch_path("partial");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{ "unicode_pieces": false }"#).unwrap();

        let settings = load_settings(&path);
        assert!(!settings.unicode_pieces);
        assert!(settings.show_coordinates, "unset field keeps its default");
        assert_eq!(settings.log_filter, "info");

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_malformed_file() {
        //! Strict loading reports the parse error, lenient loading falls back
        let path = scratch_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            try_load_settings(&path),
            Err(CoreError::SettingsSerialization(_))
        ));
        assert_eq!(load_settings(&path), EngineSettings::default());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
