//! Game configuration. Loaded from config.ron at startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Session settings. Loaded from `config.ron` in the current directory; a
/// missing or invalid file falls back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Window width in logical pixels.
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Window height in logical pixels.
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Number of orbs scattered at world init.
    #[serde(default = "default_pickup_count")]
    pub pickup_count: usize,
    /// Half-extent of the square playable field in world units.
    #[serde(default = "default_field_half_extent")]
    pub field_half_extent: f32,
    /// Camera distance behind the avatar.
    #[serde(default = "default_camera_distance")]
    pub camera_distance: f32,
    /// Fixed camera height.
    #[serde(default = "default_camera_height")]
    pub camera_height: f32,
    /// Path of the character rig descriptor.
    #[serde(default = "default_rig_path")]
    pub rig_path: PathBuf,
}

fn default_window_width() -> u32 {
    1280
}
fn default_window_height() -> u32 {
    720
}
fn default_pickup_count() -> usize {
    100
}
fn default_field_half_extent() -> f32 {
    25.0
}
fn default_camera_distance() -> f32 {
    10.0
}
fn default_camera_height() -> f32 {
    5.0
}
fn default_rig_path() -> PathBuf {
    PathBuf::from("character.ron")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            pickup_count: default_pickup_count(),
            field_half_extent: default_field_half_extent(),
            camera_distance: default_camera_distance(),
            camera_height: default_camera_height(),
            rig_path: default_rig_path(),
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid,
    /// returns the default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Save current config to `config.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.ron")
}
