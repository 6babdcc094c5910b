//! Star Catch - collect the stars, avoid the bomb
//!
//! Core modules:
//! - `layout`: Screen and play-area geometry
//! - `controls`: Touch overlays decoded by pixel color, and the zone fallback
//! - `input`: Per-tick intent from keyboard and pointers
//! - `sim`: Game session, collision handlers, intent application
//! - `scene`: Declarative world description for the engine
//! - `assets`: Asset keys, paths and animation clips
//! - `audio`: Sound effect keys and the volume gate
//! - `effects`: Side-effect sink the engine drains after collisions
//! - `settings`: Player preferences persisted as JSON

pub mod assets;
pub mod audio;
pub mod controls;
pub mod effects;
pub mod input;
pub mod layout;
pub mod scene;
pub mod settings;
pub mod sim;

pub use input::{Intent, InputResolver, JumpPolicy, Move, RawInput};
pub use layout::{PlayArea, ScreenConfig};
pub use settings::Settings;
pub use sim::{GamePhase, GameSession};

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (play area plus two sidebars)
    pub const SCREEN_WIDTH: u32 = 1000;
    pub const SCREEN_HEIGHT: u32 = 600;
    pub const SIDEBAR_WIDTH: u32 = 100;

    /// Arcade gravity applied to dynamic bodies (bombs opt out)
    pub const GRAVITY_Y: f32 = 300.0;

    /// Player movement
    pub const PLAYER_RUN_SPEED: f32 = 160.0;
    pub const PLAYER_JUMP_VELOCITY: f32 = -330.0;
    pub const PLAYER_BOUNCE: f32 = 0.2;

    /// Stars: 12 in total, evenly spaced along the x axis
    pub const STAR_COUNT: usize = 12;
    pub const STAR_OFFSET_X: f32 = 12.0;
    pub const STAR_STEP_X: f32 = 70.0;
    pub const STAR_SCORE: u32 = 10;
    /// Random vertical bounce range per star
    pub const STAR_BOUNCE_MIN: f32 = 0.4;
    pub const STAR_BOUNCE_MAX: f32 = 0.8;
    /// Below this vertical speed a star landing is silent
    pub const STAR_BOUNCE_SOUND_MIN_SPEED: f32 = 20.0;

    /// Bombs
    pub const BOMB_SPAWN_Y: f32 = 16.0;
    pub const BOMB_MAX_SPEED_X: i32 = 200;
    pub const BOMB_SPEED_Y: f32 = 20.0;
    pub const BOMB_BOUNCE: f32 = 1.0;

    /// Tint applied to the player when hit
    pub const HIT_TINT: u32 = 0xff0000;

    /// Maximum concurrent pointer samples (primary + 4 touches)
    pub const MAX_POINTERS: usize = 5;

    /// Zone touch scheme bounds, as fractions of screen width
    pub const ZONE_LEFT_FRACTION: f32 = 0.30;
    pub const ZONE_RIGHT_FRACTION: f32 = 0.70;
}
