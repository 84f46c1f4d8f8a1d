//! Render settings file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glint_renderer::{CameraConfig, RenderConfig};
use serde::{Deserialize, Serialize};

/// Top-level settings file layout. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub camera: CameraConfig,
    pub render: RenderConfig,
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Apply command line resolution overrides.
    pub fn with_overrides(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        if let Some(width) = width {
            self.camera.width = width;
        }
        if let Some(height) = height {
            self.camera.height = height;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_renderer::{Vec3, MAX_DEPTH};

    #[test]
    fn test_empty_json_gives_defaults() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "camera": { "vfov": 45.0, "position": [1.0, 2.0, 3.0] },
            "render": { "bucket_size": 16 }
        }"#;
        let settings = Settings::from_json(json).unwrap();

        assert_eq!(settings.camera.vfov, 45.0);
        assert_eq!(settings.camera.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(settings.camera.width, 800);
        assert_eq!(settings.render.bucket_size, 16);
        assert_eq!(settings.render.max_depth, MAX_DEPTH);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ camera: }").is_err());
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default().with_overrides(Some(64), None);
        assert_eq!(settings.camera.width, 64);
        assert_eq!(settings.camera.height, 600);
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(Settings::load(Path::new("/nonexistent/glint.json")).is_err());
    }
}
