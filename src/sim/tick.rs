//! Per-tick player control
//!
//! Resolves input into an intent and turns it into player velocity and an
//! animation clip. The engine integrates the velocity.

use super::state::{GameSession, Player};
use crate::assets::Animation;
use crate::consts::{PLAYER_JUMP_VELOCITY, PLAYER_RUN_SPEED};
use crate::input::{InputResolver, Intent, Move, RawInput};

/// What the engine should apply to the player this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerCommand {
    pub intent: Intent,
    pub velocity_x: f32,
    /// Set only when a jump starts this tick
    pub velocity_y: Option<f32>,
    pub animation: Animation,
}

/// Apply an intent to the player record. Jumps need ground contact.
pub fn apply_intent(player: &mut Player, intent: Intent) -> PlayerCommand {
    let (velocity_x, animation) = match intent.movement {
        Move::Left => (-PLAYER_RUN_SPEED, Animation::Left),
        Move::Right => (PLAYER_RUN_SPEED, Animation::Right),
        Move::None => (0.0, Animation::Turn),
    };
    player.vel.x = velocity_x;
    player.animation = animation;

    let velocity_y = if intent.jump && player.grounded {
        player.vel.y = PLAYER_JUMP_VELOCITY;
        Some(PLAYER_JUMP_VELOCITY)
    } else {
        None
    };

    PlayerCommand {
        intent,
        velocity_x,
        velocity_y,
        animation,
    }
}

/// Advance one tick. Returns `None` once the game is over: input is frozen
/// and the player is left untouched.
pub fn tick(
    session: &mut GameSession,
    resolver: &InputResolver,
    raw: &RawInput,
) -> Option<PlayerCommand> {
    let intent = resolver.resolve(raw, session.is_game_over(), session.player.grounded);
    if session.is_game_over() {
        return None;
    }
    session.time_ticks += 1;
    Some(apply_intent(&mut session.player, intent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{TouchControls, ZoneScheme};
    use crate::input::{JumpPolicy, KeyboardState, PointerSample};
    use crate::layout::ScreenConfig;
    use crate::scene::SceneLayout;

    fn setup(policy: JumpPolicy) -> (GameSession, InputResolver) {
        let screen = ScreenConfig::default();
        let session = GameSession::new(9, &SceneLayout::build(&screen));
        let zones = ZoneScheme::for_screen(&screen);
        let resolver = InputResolver::new(TouchControls::Zones(zones), policy);
        (session, resolver)
    }

    fn keys(left: bool, right: bool, up: bool) -> RawInput {
        RawInput {
            keyboard: KeyboardState { left, right, up },
            pointers: Vec::new(),
        }
    }

    #[test]
    fn test_idle_turns_and_stops() {
        let (mut session, resolver) = setup(JumpPolicy::Grounded);
        session.player.vel.x = 160.0;
        let cmd = tick(&mut session, &resolver, &RawInput::default()).unwrap();
        assert_eq!(cmd.velocity_x, 0.0);
        assert_eq!(cmd.animation, Animation::Turn);
        assert_eq!(session.player.vel.x, 0.0);
        assert_eq!(session.time_ticks, 1);
    }

    #[test]
    fn test_run_left_and_right() {
        let (mut session, resolver) = setup(JumpPolicy::Grounded);
        let cmd = tick(&mut session, &resolver, &keys(true, false, false)).unwrap();
        assert_eq!((cmd.velocity_x, cmd.animation), (-160.0, Animation::Left));
        let cmd = tick(&mut session, &resolver, &keys(false, true, false)).unwrap();
        assert_eq!((cmd.velocity_x, cmd.animation), (160.0, Animation::Right));
        assert_eq!(session.player.animation, Animation::Right);
    }

    #[test]
    fn test_jump_requires_ground() {
        let (mut session, resolver) = setup(JumpPolicy::Ungated);
        session.player.grounded = false;
        let cmd = tick(&mut session, &resolver, &keys(false, false, true)).unwrap();
        assert!(cmd.intent.jump);
        assert_eq!(cmd.velocity_y, None);

        session.player.grounded = true;
        let cmd = tick(&mut session, &resolver, &keys(false, false, true)).unwrap();
        assert_eq!(cmd.velocity_y, Some(-330.0));
        assert_eq!(session.player.vel.y, -330.0);
    }

    #[test]
    fn test_touch_jump_from_ground() {
        let (mut session, resolver) = setup(JumpPolicy::Grounded);
        session.player.grounded = true;
        let raw = RawInput {
            keyboard: KeyboardState::default(),
            pointers: vec![PointerSample::down(500.0, 400.0)],
        };
        let cmd = tick(&mut session, &resolver, &raw).unwrap();
        assert_eq!(cmd.velocity_y, Some(PLAYER_JUMP_VELOCITY));
    }

    #[test]
    fn test_game_over_freezes_player() {
        let (mut session, resolver) = setup(JumpPolicy::Ungated);
        session.player.grounded = true;
        session.player.vel.x = 160.0;
        session.end_game();
        let ticks = session.time_ticks;

        assert_eq!(tick(&mut session, &resolver, &keys(true, false, true)), None);
        assert_eq!(session.player.vel.x, 160.0);
        assert_eq!(session.player.animation, Animation::Turn);
        assert_eq!(session.time_ticks, ticks);
    }
}
