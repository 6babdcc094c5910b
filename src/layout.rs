//! Screen and play-area geometry
//!
//! The screen is a play area flanked by two equal sidebars. Everything is in
//! screen pixels with the origin at the top-left corner.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, SIDEBAR_WIDTH};

/// Configured screen dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
    pub sidebar_width: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            sidebar_width: SIDEBAR_WIDTH,
        }
    }
}

impl ScreenConfig {
    /// A usable screen leaves a play area of at least one pixel each way
    pub fn has_play_area(&self) -> bool {
        self.height > 0
            && self
                .sidebar_width
                .checked_mul(2)
                .is_some_and(|sidebars| self.width > sidebars)
    }

    pub fn play_area(&self) -> PlayArea {
        PlayArea::new(self.sidebar_width, self.width, self.height)
    }

    /// Center of the left sidebar
    pub fn left_sidebar_center(&self) -> Vec2 {
        Vec2::new(
            (self.sidebar_width / 2) as f32,
            self.height as f32 / 2.0,
        )
    }

    /// Center of the right sidebar
    pub fn right_sidebar_center(&self) -> Vec2 {
        Vec2::new(
            self.width.saturating_sub(self.sidebar_width / 2) as f32,
            self.height as f32 / 2.0,
        )
    }
}

/// The region between the sidebars where gameplay happens.
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayArea {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub left: i32,
    pub right: i32,
    pub center: IVec2,
}

impl PlayArea {
    /// Play area for a screen with a sidebar of `sidebar_width` on each side.
    pub fn new(sidebar_width: u32, screen_width: u32, screen_height: u32) -> Self {
        let x = sidebar_width as i32;
        let y = 0;
        let w = screen_width as i32 - 2 * sidebar_width as i32;
        let h = screen_height as i32;

        Self {
            x,
            y,
            w,
            h,
            left: x,
            right: x + w,
            // floor(x + w/2) for integer inputs
            center: IVec2::new(
                (2 * x + w).div_euclid(2),
                (2 * y + h).div_euclid(2),
            ),
        }
    }

    pub fn center_vec(&self) -> Vec2 {
        self.center.as_vec2()
    }

    /// Top edge, where stars respawn
    pub fn top(&self) -> f32 {
        self.y as f32
    }

    pub fn is_left_of_center(&self, x: f32) -> bool {
        x < self.center.x as f32
    }
}
