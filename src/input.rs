//! Per-tick input resolution
//!
//! Keyboard state and up to [`MAX_POINTERS`] pointer samples are merged into a
//! single [`Intent`]. Sources are applied in order: keyboard first, then
//! pointers. A later source overrides `movement`; `jump` is OR-ed and never
//! cleared once set within a tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_POINTERS;
use crate::controls::TouchControls;

/// Horizontal movement decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Move {
    Left,
    Right,
    #[default]
    None,
}

/// Resolved control decision for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Intent {
    pub movement: Move,
    pub jump: bool,
}

impl Intent {
    /// What a frozen (game over) tick resolves to
    pub const IDLE: Intent = Intent {
        movement: Move::None,
        jump: false,
    };
}

/// Whether the up arrow only registers while the player stands on something
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpPolicy {
    #[default]
    Grounded,
    Ungated,
}

/// Cursor key state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

/// One mouse or touch pointer as polled this tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub is_down: bool,
}

impl PointerSample {
    pub fn down(x: f32, y: f32) -> Self {
        Self { x, y, is_down: true }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Raw device state for a tick
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    pub keyboard: KeyboardState,
    /// Primary pointer first, then touches. Extra samples are ignored.
    pub pointers: Vec<PointerSample>,
}

/// Turns raw device state into an [`Intent`]
#[derive(Debug, Clone)]
pub struct InputResolver {
    pub touch: TouchControls,
    pub jump_policy: JumpPolicy,
}

impl InputResolver {
    pub fn new(touch: TouchControls, jump_policy: JumpPolicy) -> Self {
        Self { touch, jump_policy }
    }

    /// Resolve one tick of input.
    ///
    /// `grounded` is only consulted for the keyboard under
    /// [`JumpPolicy::Grounded`].
    pub fn resolve(&self, raw: &RawInput, game_over: bool, grounded: bool) -> Intent {
        if game_over {
            return Intent::IDLE;
        }

        let mut movement = None;
        let mut jump = false;

        let keys = raw.keyboard;
        if keys.left {
            movement = Some(Move::Left);
        } else if keys.right {
            movement = Some(Move::Right);
        }

        if keys.up {
            jump = match self.jump_policy {
                JumpPolicy::Grounded => grounded,
                JumpPolicy::Ungated => true,
            };
        }

        for pointer in raw.pointers.iter().take(MAX_POINTERS) {
            if !pointer.is_down {
                continue;
            }
            if let Some(signal) = self.touch.signal_at(pointer.pos()) {
                if signal.movement.is_some() {
                    movement = signal.movement;
                }
                jump |= signal.jump;
            }
        }

        Intent {
            movement: movement.unwrap_or(Move::None),
            jump,
        }
    }
}
