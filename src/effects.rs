//! Side-effect sink handed to the collision handlers
//!
//! Collects what the engine has to do after a batch of events: queued sounds,
//! the player tint and whether physics should stop.

use crate::audio::{AudioManager, PlayRequest, SoundEffect};
use crate::settings::Settings;
use crate::sim::SideEffects;

#[derive(Debug, Clone, Default)]
pub struct EngineEffects {
    pub audio: AudioManager,
    pub player_tint: Option<u32>,
    pub physics_paused: bool,
}

impl EngineEffects {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            audio: AudioManager::from_settings(settings),
            ..Default::default()
        }
    }

    /// Sounds to hand to the mixer this frame
    pub fn take_sounds(&mut self) -> Vec<PlayRequest> {
        self.audio.drain()
    }
}

impl SideEffects for EngineEffects {
    fn play_sound(&mut self, sound: SoundEffect) {
        self.audio.play(sound);
    }

    fn tint_player(&mut self, color: u32) {
        self.player_tint = Some(color);
    }

    fn pause_physics(&mut self) {
        if !self.physics_paused {
            log::info!("Physics paused");
        }
        self.physics_paused = true;
    }
}
