//! User settings stored as `startwriting.json` in the working directory.
//!
//! Every field is optional in the file; anything missing takes its default.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name looked up in the working directory.
pub const SETTINGS_FILE: &str = "startwriting.json";

/// Environment variable that overrides [`Settings::images_dir`].
pub const IMAGES_DIR_ENV: &str = "STARTWRITING_IMAGES";

/// Folder name used when no images directory is configured.
pub const DEFAULT_IMAGES_DIR: &str = "images";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Folder holding the pictures. Relative paths are resolved against the
    /// working directory.
    pub images_dir: Option<String>,

    /// Colour used for vowels in the word box.
    pub vowel_color: [u8; 3],

    /// Point size of the word box text.
    pub font_size: f32,

    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            images_dir: None,
            vowel_color: [255, 0, 0],
            font_size: 48.0,
            dark_mode: false,
        }
    }
}

impl Settings {
    /// Load settings from `dir`, then apply environment overrides.
    pub fn load(dir: &Path) -> Self {
        let mut settings = Self::load_file(dir);
        settings.apply_images_override(std::env::var(IMAGES_DIR_ENV).ok());
        settings
    }

    /// Replace `images_dir` with the environment value. Unset or empty
    /// values leave the setting alone.
    pub fn apply_images_override(&mut self, value: Option<String>) {
        if let Some(images) = value.filter(|v| !v.is_empty()) {
            debug!("{} overrides images_dir: {}", IMAGES_DIR_ENV, images);
            self.images_dir = Some(images);
        }
    }

    /// Load settings from `dir` only. Missing or malformed files fall back to
    /// defaults.
    pub fn load_file(dir: &Path) -> Self {
        let path = dir.join(SETTINGS_FILE);
        match std::fs::read_to_string(&path) {
            Ok(s) => Self::from_json(&s).unwrap_or_else(|e| {
                warn!("Failed to parse {}: {} -- using defaults", path.display(), e);
                Self::default()
            }),
            Err(_) => {
                debug!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Absolute images folder: the configured one or `<base>/images`.
    pub fn images_dir(&self, base: &Path) -> PathBuf {
        match self.images_dir.as_deref() {
            Some(dir) => base.join(dir),
            None => base.join(DEFAULT_IMAGES_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.vowel_color, [255, 0, 0]);
        assert_eq!(s.images_dir(Path::new("/app")), PathBuf::from("/app/images"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{ "font_size": 64.0 }"#).unwrap();
        assert_eq!(s.font_size, 64.0);
        assert_eq!(s.vowel_color, [255, 0, 0]);
        assert!(!s.dark_mode);
    }

    #[test]
    fn test_images_dir_relative_and_absolute() {
        let mut s = Settings::default();
        s.images_dir = Some("pics".into());
        assert_eq!(s.images_dir(Path::new("/app")), PathBuf::from("/app/pics"));

        s.images_dir = Some("/srv/pics".into());
        assert_eq!(s.images_dir(Path::new("/app")), PathBuf::from("/srv/pics"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_load_file_missing_uses_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert_eq!(Settings::load_file(tmp.path()), Settings::default());
    }

    #[test]
    fn test_load_file_reads_settings_json() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(SETTINGS_FILE),
            r#"{ "images_dir": "obrazki", "vowel_color": [0, 128, 0], "dark_mode": true }"#,
        )
        .unwrap();

        let s = Settings::load_file(tmp.path());
        assert_eq!(s.images_dir.as_deref(), Some("obrazki"));
        assert_eq!(s.vowel_color, [0, 128, 0]);
        assert!(s.dark_mode);
        assert_eq!(s.font_size, 48.0);
        assert_eq!(s.images_dir(tmp.path()), tmp.path().join("obrazki"));
    }

    #[test]
    fn test_load_file_malformed_uses_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join(SETTINGS_FILE), "{ \"font_size\": ").unwrap();
        assert_eq!(Settings::load_file(tmp.path()), Settings::default());
    }

    #[test]
    fn test_images_override() {
        let mut s = Settings::default();
        s.images_dir = Some("pics".into());

        s.apply_images_override(None);
        assert_eq!(s.images_dir.as_deref(), Some("pics"));

        s.apply_images_override(Some(String::new()));
        assert_eq!(s.images_dir.as_deref(), Some("pics"));

        s.apply_images_override(Some("/srv/obrazki".into()));
        assert_eq!(s.images_dir.as_deref(), Some("/srv/obrazki"));
    }

    /// The only test that touches the process environment.
    #[test]
    fn test_load_applies_environment_override() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join(SETTINGS_FILE), r#"{ "images_dir": "pics" }"#).unwrap();

        std::env::set_var(IMAGES_DIR_ENV, "from-env");
        let overridden = Settings::load(tmp.path());
        std::env::set_var(IMAGES_DIR_ENV, "");
        let empty = Settings::load(tmp.path());
        std::env::remove_var(IMAGES_DIR_ENV);
        let unset = Settings::load(tmp.path());

        assert_eq!(overridden.images_dir.as_deref(), Some("from-env"));
        assert_eq!(empty.images_dir.as_deref(), Some("pics"));
        assert_eq!(unset.images_dir.as_deref(), Some("pics"));
    }
}
