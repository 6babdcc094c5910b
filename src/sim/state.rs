//! Game session and the entities it owns
//!
//! One `GameSession` per scene run. The engine writes physics results
//! (positions, velocities, ground contact) back into the entity records; the
//! session owns score, star activation and the terminal phase.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::assets::Animation;
use crate::consts::*;
use crate::layout::PlayArea;
use crate::scene::SceneLayout;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player hit a bomb. Terminal until the scene restarts.
    GameOver,
}

/// The player sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub bounce: f32,
    pub collide_world_bounds: bool,
    /// Reported by physics: resting on a downward-facing contact
    pub grounded: bool,
    pub animation: Animation,
    pub tint: Option<u32>,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            bounce: PLAYER_BOUNCE,
            collide_world_bounds: true,
            grounded: false,
            animation: Animation::Turn,
            tint: None,
        }
    }
}

/// A collectible star
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Vertical bounce coefficient, fixed per star
    pub bounce_y: f32,
    pub active: bool,
    spawn_x: f32,
}

impl Star {
    pub fn spawn_x(&self) -> f32 {
        self.spawn_x
    }

    /// Put the star back at its column, at height `top`
    fn respawn(&mut self, top: f32) {
        self.pos = Vec2::new(self.spawn_x, top);
        self.vel = Vec2::ZERO;
        self.active = true;
    }
}

/// A bomb bouncing around the play area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bomb {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub bounce: f32,
    pub allow_gravity: bool,
    pub collide_world_bounds: bool,
}

/// Result of a player-star overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectOutcome {
    /// Star already collected, unknown, or the game is over
    Ignored,
    Collected { score: u32 },
    /// Last active star collected: stars respawned and a bomb spawned
    LevelCleared { score: u32, bomb_id: u32 },
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub play_area: PlayArea,
    pub phase: GamePhase,
    pub score: u32,
    /// Number of times the stars have been cleared
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Stars in spawn order
    pub stars: Vec<Star>,
    pub bombs: Vec<Bomb>,
    next_id: u32,
}

impl GameSession {
    /// Start a scene: player at its spawn, every star active, no bombs
    pub fn new(seed: u64, scene: &SceneLayout) -> Self {
        let mut session = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            play_area: scene.play_area,
            phase: GamePhase::Playing,
            score: 0,
            level: 0,
            time_ticks: 0,
            player: Player::new(scene.player_spawn),
            stars: Vec::with_capacity(scene.star_spawns.len()),
            bombs: Vec::new(),
            next_id: 1,
        };

        for &spawn in &scene.star_spawns {
            let id = session.next_entity_id();
            let bounce_y = session.rng.random_range(STAR_BOUNCE_MIN..STAR_BOUNCE_MAX);
            session.stars.push(Star {
                id,
                pos: spawn,
                vel: Vec2::ZERO,
                bounce_y,
                active: true,
                spawn_x: spawn.x,
            });
        }

        session
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn stars_remaining(&self) -> usize {
        self.stars.iter().filter(|s| s.active).count()
    }

    pub fn star(&self, id: u32) -> Option<&Star> {
        self.stars.iter().find(|s| s.id == id)
    }

    pub fn star_mut(&mut self, id: u32) -> Option<&mut Star> {
        self.stars.iter_mut().find(|s| s.id == id)
    }

    pub fn bomb_mut(&mut self, id: u32) -> Option<&mut Bomb> {
        self.bombs.iter_mut().find(|b| b.id == id)
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Deactivate a star and score it. Clearing the last active star
    /// advances the level.
    pub fn collect_star(&mut self, star_id: u32) -> CollectOutcome {
        if self.is_game_over() {
            return CollectOutcome::Ignored;
        }
        let Some(star) = self.star_mut(star_id) else {
            log::warn!("Overlap with unknown star {}", star_id);
            return CollectOutcome::Ignored;
        };
        if !star.active {
            return CollectOutcome::Ignored;
        }
        star.active = false;
        self.score += STAR_SCORE;

        if self.stars_remaining() == 0 {
            let bomb_id = self.advance_level();
            CollectOutcome::LevelCleared {
                score: self.score,
                bomb_id,
            }
        } else {
            CollectOutcome::Collected { score: self.score }
        }
    }

    /// Respawn every star at the top of the play area and release one bomb
    /// on the side away from the player. Returns the bomb's id.
    fn advance_level(&mut self) -> u32 {
        let top = self.play_area.top();
        for star in &mut self.stars {
            star.respawn(top);
        }
        self.level += 1;

        let area = self.play_area;
        let x = if area.is_left_of_center(self.player.pos.x) {
            self.rng.random_range(area.center.x..=area.right)
        } else {
            self.rng.random_range(area.left..=area.center.x)
        };
        let vel_x = self.rng.random_range(-BOMB_MAX_SPEED_X..=BOMB_MAX_SPEED_X);

        let id = self.next_entity_id();
        self.bombs.push(Bomb {
            id,
            pos: Vec2::new(x as f32, BOMB_SPAWN_Y),
            vel: Vec2::new(vel_x as f32, BOMB_SPEED_Y),
            bounce: BOMB_BOUNCE,
            allow_gravity: false,
            collide_world_bounds: true,
        });

        log::info!(
            "Level {} cleared: score {}, bomb {} at x={} vx={}",
            self.level,
            self.score,
            id,
            x,
            vel_x
        );
        id
    }

    /// Enter the terminal phase. Returns false if already there.
    pub fn end_game(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.phase = GamePhase::GameOver;
        self.player.tint = Some(HIT_TINT);
        self.player.animation = Animation::Turn;
        log::info!("Game over: score {}, level {}", self.score, self.level);
        true
    }
}
