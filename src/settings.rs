use crate::model::{Color, StrokeStyle, BACKGROUND_WHITE};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "inkboard_settings.json";

/// Host-configurable defaults for the annotation surface. Only configuration
/// is persisted here; stroke data itself is never serialized.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnnotationSettings {
    pub background: Color,
    pub stroke: StrokeStyle,
}

impl Default for AnnotationSettings {
    fn default() -> Self {
        Self {
            background: BACKGROUND_WHITE,
            stroke: StrokeStyle::default(),
        }
    }
}

impl AnnotationSettings {
    /// Clamps loaded values into the ranges the surface accepts.
    pub fn sanitize(&mut self) {
        if self.stroke.width == 0 {
            self.stroke.width = 1;
        }
    }
}

pub fn settings_path_from_exe_path(exe_path: &Path) -> Result<PathBuf> {
    let parent = exe_path
        .parent()
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe_path.display()))?;
    Ok(parent.join(SETTINGS_FILE_NAME))
}

pub fn resolve_settings_path() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().context("resolve current executable")?;
    settings_path_from_exe_path(&exe_path)
}

/// Loads settings from `path`, falling back to defaults when the file does
/// not exist yet.
pub fn load_from_path(path: &Path) -> Result<AnnotationSettings> {
    if !path.exists() {
        return Ok(AnnotationSettings::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read annotation settings from {}", path.display()))?;
    let mut settings: AnnotationSettings =
        serde_json::from_str(&content).context("deserialize annotation settings")?;
    settings.sanitize();
    Ok(settings)
}

pub fn save_to_path(path: &Path, settings: &AnnotationSettings) -> Result<()> {
    let content =
        serde_json::to_string_pretty(settings).context("serialize annotation settings")?;
    std::fs::write(path, content)
        .with_context(|| format!("write annotation settings to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded = load_from_path(&dir.path().join("nope.json")).expect("load");
        assert_eq!(loaded, AnnotationSettings::default());
    }

    #[test]
    fn settings_round_trip_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        let settings = AnnotationSettings {
            background: Color::rgba(0, 0, 0, 255),
            stroke: StrokeStyle {
                width: 12,
                color: Color::rgba(255, 128, 0, 255),
            },
        };

        save_to_path(&path, &settings).expect("save");
        assert_eq!(load_from_path(&path).expect("load"), settings);
    }

    #[test]
    fn zero_width_is_sanitized_on_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        let mut settings = AnnotationSettings::default();
        settings.stroke.width = 0;
        save_to_path(&path, &settings).expect("save");

        assert_eq!(load_from_path(&path).expect("load").stroke.width, 1);
    }

    #[test]
    fn partial_settings_files_use_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, r#"{"stroke":{"width":3,"color":{"r":1,"g":2,"b":3,"a":255}}}"#)
            .expect("write");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.background, BACKGROUND_WHITE);
        assert_eq!(loaded.stroke.width, 3);
    }

    #[test]
    fn settings_path_is_sibling_of_exe() {
        let path = settings_path_from_exe_path(Path::new("/opt/host/bin/app")).expect("path");
        assert_eq!(path, Path::new("/opt/host/bin").join(SETTINGS_FILE_NAME));
    }
}
