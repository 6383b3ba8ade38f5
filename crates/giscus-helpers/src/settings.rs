//! Helper settings
//!
//! Stores overrides for the widget conventions in a plain JSON file.
//! A missing file yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::digest::DigestAlgorithm;
use crate::error::Result;
use crate::origin::{strip_query_param, SESSION_PARAM};
use crate::textarea::{resize_text_area_to, TextArea, MAX_TEXTAREA_HEIGHT};
use crate::theme::{resolve_theme, theme_url_in, DEFAULT_THEMES_PATH};

/// Helper settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Settings file version
    pub version: u32,
    /// Path the built-in theme stylesheets are served from
    pub themes_path: String,
    /// Query parameter holding the session token
    pub session_param: String,
    /// Maximum comment box height in pixels
    pub max_textarea_height: u32,
    /// Algorithm used when none is given
    pub default_digest: DigestAlgorithm,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: 1,
            themes_path: DEFAULT_THEMES_PATH.to_string(),
            session_param: SESSION_PARAM.to_string(),
            max_textarea_height: MAX_TEXTAREA_HEIGHT,
            default_digest: DigestAlgorithm::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults if it doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub async fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write atomically using temp file
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, &contents).await?;
        tokio::fs::rename(&temp_path, path).await?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Stylesheet URL for a theme tag under the configured themes path
    pub fn theme_url(&self, theme: &str) -> String {
        theme_url_in(&self.themes_path, resolve_theme(theme), theme)
    }

    /// Fit a comment box to its content, capped at the configured height
    pub fn resize_text_area<T: TextArea + ?Sized>(&self, textarea: &mut T) {
        resize_text_area_to(textarea, self.max_textarea_height);
    }

    /// Remove the configured session parameter from a URL
    pub fn clean_session_param(&self, url: &str) -> String {
        strip_query_param(url, &self.session_param)
    }
}

/// Default settings file location under the platform config directory
pub fn default_settings_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("app", "giscus", "giscus-helpers")
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_settings_default() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load(&temp_dir.path().join("settings.json")).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.themes_path, "/themes");
        assert_eq!(settings.session_param, "giscus");
        assert_eq!(settings.max_textarea_height, 270);
        assert_eq!(settings.default_digest, DigestAlgorithm::Sha1);
    }

    #[tokio::test]
    async fn test_settings_persistence() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");

        let settings = Settings {
            themes_path: "https://cdn.example.com/themes".to_string(),
            default_digest: DigestAlgorithm::Sha256,
            ..Settings::default()
        };
        settings.save(&path).await.unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{"sessionParam": "session", "defaultDigest": "SHA-512"}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.session_param, "session");
        assert_eq!(settings.default_digest, DigestAlgorithm::Sha512);
        assert_eq!(settings.themes_path, "/themes");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn test_configured_helpers() {
        let settings = Settings {
            themes_path: "/static/themes".to_string(),
            session_param: "session".to_string(),
            ..Settings::default()
        };

        assert_eq!(settings.theme_url("dark"), "/static/themes/dark.css");
        assert_eq!(settings.theme_url("https://x/y.css"), "https://x/y.css");
        assert_eq!(
            settings.clean_session_param("https://a.b/?session=1&giscus=2"),
            "https://a.b/?giscus=2"
        );
    }
}
