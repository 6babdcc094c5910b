//! Sound effects
//!
//! Playback belongs to the engine. This module names the sounds, applies the
//! player's volume settings and queues fire-and-forget play requests that the
//! engine drains once per frame.

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player touched a bomb
    BombHit,
    /// Bomb bounced off a platform
    BombBounce,
    /// Star landed hard on a platform
    StarBounce,
    /// Player collected a star
    StarGrab,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 4] = [
        SoundEffect::BombHit,
        SoundEffect::BombBounce,
        SoundEffect::StarBounce,
        SoundEffect::StarGrab,
    ];

    pub fn asset_key(&self) -> &'static str {
        match self {
            SoundEffect::BombHit => "bomb_hit",
            SoundEffect::BombBounce => "bomb_bounce",
            SoundEffect::StarBounce => "star_bounce",
            SoundEffect::StarGrab => "star_grab",
        }
    }

    pub fn asset_path(&self) -> &'static str {
        match self {
            SoundEffect::BombHit => "assets/sound/bomb_hit.wav",
            SoundEffect::BombBounce => "assets/sound/bomb_bounce.wav",
            SoundEffect::StarBounce => "assets/sound/star_bounce.wav",
            SoundEffect::StarGrab => "assets/sound/star_grab.wav",
        }
    }
}

/// A queued request for the engine's mixer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayRequest {
    pub key: &'static str,
    pub volume: f32,
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    pending: Vec<PlayRequest>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            pending: Vec::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Queue a sound effect. Silent when muted or at zero volume.
    pub fn play(&mut self, effect: SoundEffect) {
        let volume = self.effective_volume();
        if volume <= 0.0 {
            return;
        }
        log::debug!("play {} at {:.2}", effect.asset_key(), volume);
        self.pending.push(PlayRequest {
            key: effect.asset_key(),
            volume,
        });
    }

    /// Take every request queued since the last drain
    pub fn drain(&mut self) -> Vec<PlayRequest> {
        std::mem::take(&mut self.pending)
    }
}
