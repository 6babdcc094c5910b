//! Game settings and preferences
//!
//! Persisted as a JSON file next to the game. Missing fields take their
//! defaults so older files keep loading.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controls::TouchScheme;
use crate::input::JumpPolicy;
use crate::layout::ScreenConfig;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot access settings file '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file '{path}'")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "screen {width}x{height} leaves no play area between two {sidebar_width}px sidebars"
    )]
    InvalidScreen {
        width: u32,
        height: u32,
        sidebar_width: u32,
    },
    #[error("cannot serialize settings")]
    Serialize(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Screen and sidebar geometry
    pub screen: ScreenConfig,

    // === Controls ===
    /// Whether the up arrow needs ground contact to register
    pub jump_policy: JumpPolicy,
    /// Overlay images or plain screen zones for touch
    pub touch_scheme: TouchScheme,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    /// Directory the asset paths are relative to
    pub asset_root: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),

            jump_policy: JumpPolicy::Grounded,
            touch_scheme: TouchScheme::Overlay,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            asset_root: ".".to_string(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject screens whose sidebars leave no play area
    pub fn validate(&self) -> Result<(), SettingsError> {
        let screen = self.screen;
        if screen.has_play_area() {
            Ok(())
        } else {
            Err(SettingsError::InvalidScreen {
                width: screen.width,
                height: screen.height,
                sidebar_width: screen.sidebar_width,
            })
        }
    }

    /// Load settings from `path`
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}, using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
