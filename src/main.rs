//! Star Catch headless driver
//!
//! Builds the scene and a seeded session, then plays a scripted run through
//! the same input and collision paths an engine would use: clear the stars,
//! watch the bomb bounce, touch it. Set `RUST_LOG=debug` to see every event.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use star_catch::assets;
    use star_catch::controls::TouchControls;
    use star_catch::effects::EngineEffects;
    use star_catch::scene::SceneLayout;
    use star_catch::{GameSession, InputResolver, Settings};

    env_logger::init();
    log::info!("Star Catch (headless) starting...");

    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "settings.json".to_string());
    let settings = Settings::load_or_default(Path::new(&settings_path));

    let scene = SceneLayout::build(&settings.screen);
    let overlays = match assets::load_controls(Path::new(&settings.asset_root), &scene) {
        Ok(set) => Some(set),
        Err(e) => {
            log::warn!("Control overlays unavailable: {e}");
            None
        }
    };
    let touch = TouchControls::for_scheme(settings.touch_scheme, overlays, &settings.screen);
    let resolver = InputResolver::new(touch, settings.jump_policy);

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut session = GameSession::new(seed, &scene);
    let mut fx = EngineEffects::from_settings(&settings);
    log::info!("Session seed: {}", seed);

    script::run(&mut session, &resolver, &mut fx);

    match serde_json::to_string_pretty(&session) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Cannot serialize session: {e}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod script {
    use star_catch::effects::EngineEffects;
    use star_catch::input::{KeyboardState, PointerSample};
    use star_catch::sim::{GameEvent, handle_event, tick};
    use star_catch::{GameSession, InputResolver, RawInput};

    fn keys(left: bool, right: bool, up: bool) -> RawInput {
        RawInput {
            keyboard: KeyboardState { left, right, up },
            pointers: Vec::new(),
        }
    }

    fn step(session: &mut GameSession, resolver: &InputResolver, raw: &RawInput) {
        match tick(session, resolver, raw) {
            Some(cmd) => log::info!(
                "tick {}: {:?} -> vx={} vy={:?} clip={}",
                session.time_ticks,
                cmd.intent,
                cmd.velocity_x,
                cmd.velocity_y,
                cmd.animation.key()
            ),
            None => log::info!("tick ignored: game over"),
        }
    }

    fn flush_sounds(fx: &mut EngineEffects) {
        for request in fx.take_sounds() {
            log::info!("sound {} at {:.2}", request.key, request.volume);
        }
    }

    pub fn run(session: &mut GameSession, resolver: &InputResolver, fx: &mut EngineEffects) {
        // Land on the ground and run right
        session.player.grounded = true;
        handle_event(session, GameEvent::PlayerLanded, fx);
        for _ in 0..3 {
            step(session, resolver, &keys(false, true, false));
        }

        // Stars drop onto the ledges: one hard landing, one settling
        let first = session.stars[0].id;
        handle_event(
            session,
            GameEvent::StarLanded {
                star_id: first,
                vertical_speed: 180.0,
            },
            fx,
        );
        handle_event(
            session,
            GameEvent::StarLanded {
                star_id: first,
                vertical_speed: 4.0,
            },
            fx,
        );
        flush_sounds(fx);

        // Sweep every star
        let ids: Vec<u32> = session.stars.iter().map(|s| s.id).collect();
        for id in ids {
            handle_event(session, GameEvent::StarTouched { star_id: id }, fx);
        }
        log::info!("{} after {} stars", session.score_text(), session.stars.len());
        flush_sounds(fx);

        // The new bomb bounces twice while the player jumps with a touch
        if let Some(bomb_id) = session.bombs.last().map(|b| b.id) {
            handle_event(session, GameEvent::BombBounced { bomb_id }, fx);
            let touch = RawInput {
                keyboard: KeyboardState::default(),
                pointers: vec![PointerSample::down(500.0, 300.0)],
            };
            step(session, resolver, &touch);
            handle_event(session, GameEvent::BombBounced { bomb_id }, fx);
            handle_event(session, GameEvent::BombTouched { bomb_id }, fx);
            handle_event(session, GameEvent::BombTouched { bomb_id }, fx);
        }
        flush_sounds(fx);

        step(session, resolver, &keys(true, false, true));
        log::info!(
            "Final: phase={:?} score={} level={} physics_paused={}",
            session.phase,
            session.score,
            session.level,
            fx.physics_paused
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build is driven by the host engine through the library
}
