//! Game simulation module
//!
//! Gameplay state and rules. Physics integration, rendering and audio
//! playback stay with the engine:
//! - Seeded RNG only
//! - Single owner: every handler takes the session by `&mut`
//! - Side effects go through the [`SideEffects`] port

pub mod events;
pub mod state;
pub mod tick;

pub use events::{
    GameEvent, SideEffects, bomb_bounce, collect_star, handle_event, hit_bomb, player_land,
    star_bounce,
};
pub use state::{Bomb, CollectOutcome, GamePhase, GameSession, Player, Star};
pub use tick::{PlayerCommand, apply_intent, tick};
