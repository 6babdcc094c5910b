//! Asset keys, paths and animation clips
//!
//! Decoding for rendering is the engine's job. The only images this crate
//! reads itself are the control overlays.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controls::{ControlOverlay, ControlSet, OverlayKind};
use crate::scene::SceneLayout;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to decode image '{path}'")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// A static image registered with the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageAsset {
    pub key: &'static str,
    pub path: &'static str,
}

pub const IMAGES: &[ImageAsset] = &[
    ImageAsset { key: "sky", path: "assets/sky.png" },
    ImageAsset { key: "ground", path: "assets/platform.png" },
    ImageAsset { key: "star", path: "assets/star.png" },
    ImageAsset { key: "bomb", path: "assets/bomb.png" },
    ImageAsset { key: "sidebar", path: "shared/assets/sidebar_100x600.png" },
    ImageAsset { key: "dpad", path: "shared/assets/dpad.png" },
    ImageAsset { key: "buttons", path: "shared/assets/buttons.png" },
];

/// The player spritesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheet {
    pub key: &'static str,
    pub path: &'static str,
    pub frame_width: u32,
    pub frame_height: u32,
}

pub const PLAYER_SHEET: SpriteSheet = SpriteSheet {
    key: "dude",
    path: "assets/dude.png",
    frame_width: 32,
    frame_height: 48,
};

/// Look up a registered image path by key
pub fn image_path(key: &str) -> Option<&'static str> {
    IMAGES.iter().find(|a| a.key == key).map(|a| a.path)
}

/// Player animation clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Animation {
    Left,
    #[default]
    Turn,
    Right,
}

/// Frame range and timing for a clip on [`PLAYER_SHEET`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationClip {
    pub first_frame: u32,
    pub last_frame: u32,
    pub frame_rate: u32,
    pub looping: bool,
}

impl Animation {
    pub const ALL: [Animation; 3] = [Animation::Left, Animation::Turn, Animation::Right];

    pub fn key(&self) -> &'static str {
        match self {
            Animation::Left => "left",
            Animation::Turn => "turn",
            Animation::Right => "right",
        }
    }

    pub fn clip(&self) -> AnimationClip {
        match self {
            Animation::Left => AnimationClip {
                first_frame: 0,
                last_frame: 3,
                frame_rate: 10,
                looping: true,
            },
            Animation::Turn => AnimationClip {
                first_frame: 4,
                last_frame: 4,
                frame_rate: 20,
                looping: false,
            },
            Animation::Right => AnimationClip {
                first_frame: 5,
                last_frame: 8,
                frame_rate: 10,
                looping: true,
            },
        }
    }
}

/// Load both control overlays from `root`, placed where the scene puts them
pub fn load_controls(root: &Path, scene: &SceneLayout) -> Result<ControlSet, AssetError> {
    let path_for = |kind: OverlayKind| -> PathBuf {
        // Both overlay keys are registered in IMAGES
        root.join(image_path(kind.asset_key()).unwrap_or_default())
    };
    let dpad = ControlOverlay::load(
        OverlayKind::DPad,
        scene.dpad_center,
        &path_for(OverlayKind::DPad),
    )?;
    let buttons = ControlOverlay::load(
        OverlayKind::Buttons,
        scene.buttons_center,
        &path_for(OverlayKind::Buttons),
    )?;
    Ok(ControlSet::new(dpad, buttons))
}
