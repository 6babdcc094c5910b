//! Collision and overlap handlers
//!
//! The engine detects contacts and calls in here with the session and a
//! side-effect port. Handlers mutate the session and trigger sounds; they
//! never talk to the engine any other way.

use super::state::{CollectOutcome, GameSession};
use crate::audio::SoundEffect;
use crate::consts::{HIT_TINT, STAR_BOUNCE_SOUND_MIN_SPEED};

/// Engine-side effects a handler may trigger
pub trait SideEffects {
    fn play_sound(&mut self, sound: SoundEffect);
    fn tint_player(&mut self, color: u32);
    /// Stop the physics world (game over)
    fn pause_physics(&mut self);
}

/// Contacts reported by the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Player collided with a platform
    PlayerLanded,
    /// Star collided with a platform
    StarLanded { star_id: u32, vertical_speed: f32 },
    /// Bomb collided with a platform
    BombBounced { bomb_id: u32 },
    /// Player overlapped a star
    StarTouched { star_id: u32 },
    /// Player collided with a bomb
    BombTouched { bomb_id: u32 },
}

/// Route an engine contact to its handler
pub fn handle_event(session: &mut GameSession, event: GameEvent, fx: &mut impl SideEffects) {
    match event {
        GameEvent::PlayerLanded => player_land(session),
        GameEvent::StarLanded { vertical_speed, .. } => {
            star_bounce(vertical_speed, fx);
        }
        GameEvent::BombBounced { .. } => bomb_bounce(fx),
        GameEvent::StarTouched { star_id } => {
            collect_star(session, star_id, fx);
        }
        GameEvent::BombTouched { bomb_id } => {
            log::debug!("Player touched bomb {}", bomb_id);
            hit_bomb(session, fx);
        }
    }
}

pub fn collect_star(
    session: &mut GameSession,
    star_id: u32,
    fx: &mut impl SideEffects,
) -> CollectOutcome {
    let outcome = session.collect_star(star_id);
    if outcome != CollectOutcome::Ignored {
        fx.play_sound(SoundEffect::StarGrab);
    }
    outcome
}

/// Returns true on the transition into game over
pub fn hit_bomb(session: &mut GameSession, fx: &mut impl SideEffects) -> bool {
    if !session.end_game() {
        return false;
    }
    fx.pause_physics();
    fx.tint_player(HIT_TINT);
    fx.play_sound(SoundEffect::BombHit);
    true
}

pub fn bomb_bounce(fx: &mut impl SideEffects) {
    fx.play_sound(SoundEffect::BombBounce);
}

/// Only hard landings are audible. Returns whether a sound played.
pub fn star_bounce(vertical_velocity: f32, fx: &mut impl SideEffects) -> bool {
    if vertical_velocity.abs() > STAR_BOUNCE_SOUND_MIN_SPEED {
        fx.play_sound(SoundEffect::StarBounce);
        true
    } else {
        false
    }
}

/// No effect yet
pub fn player_land(session: &mut GameSession) {
    log::trace!("Player landed at {:?}", session.player.pos);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::STAR_COUNT;
    use crate::layout::ScreenConfig;
    use crate::scene::SceneLayout;
    use crate::sim::GamePhase;

    #[derive(Default)]
    struct Recorder {
        sounds: Vec<SoundEffect>,
        tints: Vec<u32>,
        pauses: u32,
    }

    impl SideEffects for Recorder {
        fn play_sound(&mut self, sound: SoundEffect) {
            self.sounds.push(sound);
        }
        fn tint_player(&mut self, color: u32) {
            self.tints.push(color);
        }
        fn pause_physics(&mut self) {
            self.pauses += 1;
        }
    }

    fn new_session() -> GameSession {
        GameSession::new(5, &SceneLayout::build(&ScreenConfig::default()))
    }

    #[test]
    fn test_collect_plays_grab() {
        let mut session = new_session();
        let mut fx = Recorder::default();
        let id = session.stars[0].id;
        collect_star(&mut session, id, &mut fx);
        collect_star(&mut session, id, &mut fx);
        assert_eq!(fx.sounds, [SoundEffect::StarGrab]);
        assert_eq!(session.score, 10);
    }

    #[test]
    fn test_hit_bomb_is_idempotent() {
        let mut session = new_session();
        let mut fx = Recorder::default();
        let id = session.stars[2].id;
        collect_star(&mut session, id, &mut fx);
        let stars_before: Vec<bool> = session.stars.iter().map(|s| s.active).collect();

        assert!(hit_bomb(&mut session, &mut fx));
        assert!(!hit_bomb(&mut session, &mut fx));

        assert_eq!(session.phase, GamePhase::GameOver);
        assert_eq!(session.score, 10);
        assert_eq!(
            session.stars.iter().map(|s| s.active).collect::<Vec<_>>(),
            stars_before
        );
        assert_eq!(fx.sounds, [SoundEffect::StarGrab, SoundEffect::BombHit]);
        assert_eq!(fx.tints, [HIT_TINT]);
        assert_eq!(fx.pauses, 1);
    }

    #[test]
    fn test_star_bounce_threshold() {
        let mut fx = Recorder::default();
        assert!(!star_bounce(20.0, &mut fx));
        assert!(!star_bounce(-5.0, &mut fx));
        assert!(star_bounce(20.5, &mut fx));
        assert!(star_bounce(-120.0, &mut fx));
        assert_eq!(fx.sounds, [SoundEffect::StarBounce, SoundEffect::StarBounce]);
    }

    #[test]
    fn test_bomb_bounce_always_plays() {
        let mut session = new_session();
        let mut fx = Recorder::default();
        for _ in 0..3 {
            handle_event(&mut session, GameEvent::BombBounced { bomb_id: 1 }, &mut fx);
        }
        assert_eq!(fx.sounds, [SoundEffect::BombBounce; 3]);
    }

    #[test]
    fn test_player_land_is_silent() {
        let mut session = new_session();
        let mut fx = Recorder::default();
        handle_event(&mut session, GameEvent::PlayerLanded, &mut fx);
        assert!(fx.sounds.is_empty());
        assert!(fx.tints.is_empty());
    }

    #[test]
    fn test_clearing_stars_through_events() {
        let mut session = new_session();
        let mut fx = Recorder::default();
        let ids: Vec<u32> = session.stars.iter().map(|s| s.id).collect();
        for id in ids {
            handle_event(&mut session, GameEvent::StarTouched { star_id: id }, &mut fx);
        }
        assert_eq!(session.score, 10 * STAR_COUNT as u32);
        assert_eq!(session.bombs.len(), 1);
        assert_eq!(session.stars_remaining(), STAR_COUNT);
        assert_eq!(fx.sounds.len(), STAR_COUNT);
    }
}
