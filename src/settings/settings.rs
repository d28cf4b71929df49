// Settings management and persistence
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PodcastrError, Result};

/// Newest settings schema this build understands
pub const SETTINGS_VERSION: i32 = 1;

/// Text shown by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSettings {
    pub header: String,
    pub empty_state: String,
    pub shuffle: String,
    pub previous: String,
    pub play: String,
    pub pause: String,
    pub next: String,
    pub repeat: String,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            header: "Tocando agora".to_string(),
            empty_state: "Selecione um podcast para ouvir".to_string(),
            shuffle: "Aleatório".to_string(),
            previous: "Tocar anterior".to_string(),
            play: "Tocar".to_string(),
            pause: "Pausar".to_string(),
            next: "Tocar próxima".to_string(),
            repeat: "Repetir".to_string(),
        }
    }
}

/// Seek slider colours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub track_color: String, // Hex color code e.g. "#04d361"
    pub rail_color: String,
    pub handle_border_width: u32,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            track_color: "#04d361".to_string(),
            rail_color: "#9f75ff".to_string(),
            handle_border_width: 4,
        }
    }
}

/// Episode artwork box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtworkSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for ArtworkSettings {
    fn default() -> Self {
        Self {
            width: 592,
            height: 592,
        }
    }
}

/// Progress display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressSettings {
    /// Never show an elapsed time past the episode duration
    pub clamp_to_duration: bool,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            clamp_to_duration: true,
        }
    }
}

/// Main player settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub version: i32, // Settings schema version for future migrations
    pub labels: LabelSettings,
    pub theme: ThemeSettings,
    pub artwork: ArtworkSettings,
    pub progress: ProgressSettings,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            labels: LabelSettings::default(),
            theme: ThemeSettings::default(),
            artwork: ArtworkSettings::default(),
            progress: ProgressSettings::default(),
        }
    }
}

impl PlayerSettings {
    /// Get the settings file path
    pub fn get_settings_path(app_dir: &Path) -> PathBuf {
        app_dir.join("settings.json")
    }

    /// Load settings from file, or return defaults if file doesn't exist
    pub fn load(app_dir: &Path) -> Result<Self> {
        let path = Self::get_settings_path(app_dir);

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let settings: PlayerSettings = serde_json::from_str(&content)?;

        if settings.version > SETTINGS_VERSION {
            return Err(PodcastrError::Settings {
                found: settings.version,
                supported: SETTINGS_VERSION,
            });
        }

        info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Save settings to file
    pub fn save(&self, app_dir: &Path) -> Result<()> {
        // Ensure directory exists
        fs::create_dir_all(app_dir)?;

        let path = Self::get_settings_path(app_dir);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;

        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = PlayerSettings::load(dir.path()).unwrap();

        assert_eq!(settings, PlayerSettings::default());
        assert_eq!(settings.labels.header, "Tocando agora");
        assert!(settings.progress.clamp_to_duration);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("nested");

        let mut settings = PlayerSettings::default();
        settings.labels.header = "Now playing".to_string();
        settings.artwork.width = 300;
        settings.save(&app_dir).unwrap();

        assert_eq!(PlayerSettings::load(&app_dir).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            PlayerSettings::get_settings_path(dir.path()),
            r#"{"labels": {"header": "Now playing"}}"#,
        )
        .unwrap();

        let settings = PlayerSettings::load(dir.path()).unwrap();
        assert_eq!(settings.labels.header, "Now playing");
        assert_eq!(settings.labels.play, "Tocar");
        assert_eq!(settings.theme.track_color, "#04d361");
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            PlayerSettings::get_settings_path(dir.path()),
            r#"{"version": 99}"#,
        )
        .unwrap();

        assert!(matches!(
            PlayerSettings::load(dir.path()),
            Err(PodcastrError::Settings { found: 99, .. })
        ));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(PlayerSettings::get_settings_path(dir.path()), "{").unwrap();

        assert!(matches!(
            PlayerSettings::load(dir.path()),
            Err(PodcastrError::Json(_))
        ));
    }
}
