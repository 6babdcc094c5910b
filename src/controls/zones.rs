//! Zone touch scheme
//!
//! No images: the left 30% of the screen moves left, the right 30% moves
//! right, and the strip in between jumps.

use glam::Vec2;

use super::Signal;
use crate::consts::{ZONE_LEFT_FRACTION, ZONE_RIGHT_FRACTION};
use crate::layout::ScreenConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneScheme {
    pub left_bound: f32,
    pub right_bound: f32,
}

impl ZoneScheme {
    pub fn for_screen(screen: &ScreenConfig) -> Self {
        let width = screen.width as f32;
        Self {
            left_bound: (width * ZONE_LEFT_FRACTION).floor(),
            right_bound: (width * ZONE_RIGHT_FRACTION).floor(),
        }
    }

    /// Points exactly on a bound produce nothing
    pub fn signal_at(&self, point: Vec2) -> Option<Signal> {
        let x = point.x;
        if x < self.left_bound {
            Some(Signal::LEFT)
        } else if x > self.right_bound {
            Some(Signal::RIGHT)
        } else if x > self.left_bound && x < self.right_bound {
            Some(Signal::JUMP)
        } else {
            None
        }
    }
}
