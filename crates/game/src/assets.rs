//! Character rig loading.
//!
//! The rig descriptor stands in for the asset-loading collaborator: it names
//! the movement tuning and animation groups the loaded character exposes.
//! Loading is strictly fallible - a missing or broken rig means the session
//! runs without an avatar, it does not invent defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors from loading a character rig.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("could not read rig file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid rig file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Names of the animation groups baked into the character asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationNames {
    #[serde(default = "default_idle")]
    pub idle: String,
    #[serde(default = "default_walk")]
    pub walk: String,
    #[serde(default = "default_walk_back")]
    pub walk_back: String,
    #[serde(default = "default_dance")]
    pub dance: String,
}

fn default_idle() -> String {
    "Idle".to_string()
}
fn default_walk() -> String {
    "Walk".to_string()
}
fn default_walk_back() -> String {
    "WalkBack".to_string()
}
fn default_dance() -> String {
    "Samba".to_string()
}

impl Default for AnimationNames {
    fn default() -> Self {
        Self {
            idle: default_idle(),
            walk: default_walk(),
            walk_back: default_walk_back(),
            dance: default_dance(),
        }
    }
}

/// Movement tuning and animation bindings for the controllable character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterRig {
    /// Forward speed in units per second.
    #[serde(default = "default_walk_speed")]
    pub walk_speed: f32,
    /// Forward speed with the sprint modifier held.
    #[serde(default = "default_run_speed")]
    pub run_speed: f32,
    /// Reverse speed (stored positive, applied against the facing axis).
    #[serde(default = "default_backward_speed")]
    pub backward_speed: f32,
    /// Yaw step in radians applied per frame a turn key is held.
    ///
    /// Deliberately not scaled by dt: the reference tuning couples turn rate
    /// to frame rate, so the quirk is preserved rather than silently fixed.
    #[serde(default = "default_rotation_step")]
    pub rotation_step: f32,
    /// Upward velocity set at the moment of a jump.
    #[serde(default = "default_jump_impulse")]
    pub jump_impulse: f32,
    /// Downward acceleration in units per second squared.
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    /// Half-extents of the character's collision box (x, y, z).
    #[serde(default = "default_half_extents")]
    pub half_extents: [f32; 3],
    #[serde(default)]
    pub animations: AnimationNames,
}

fn default_walk_speed() -> f32 {
    3.0
}
fn default_run_speed() -> f32 {
    6.0
}
fn default_backward_speed() -> f32 {
    1.5
}
fn default_rotation_step() -> f32 {
    0.05
}
fn default_jump_impulse() -> f32 {
    6.0
}
fn default_gravity() -> f32 {
    9.81
}
fn default_half_extents() -> [f32; 3] {
    [0.5, 0.9, 0.5]
}

impl Default for CharacterRig {
    fn default() -> Self {
        Self {
            walk_speed: default_walk_speed(),
            run_speed: default_run_speed(),
            backward_speed: default_backward_speed(),
            rotation_step: default_rotation_step(),
            jump_impulse: default_jump_impulse(),
            gravity: default_gravity(),
            half_extents: default_half_extents(),
            animations: AnimationNames::default(),
        }
    }
}

impl CharacterRig {
    /// Load a rig descriptor from a RON file.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let data = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&data).map_err(|source| AssetError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
