//! Touch controls
//!
//! A pointer that is down maps to at most one partial [`Signal`]. Two schemes
//! exist: color-coded overlay images in the sidebars, and plain screen zones.

pub mod overlay;
pub mod zones;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use overlay::{ControlOverlay, OverlayKind, classify_buttons, classify_dpad};
pub use zones::ZoneScheme;

use crate::input::Move;
use crate::layout::ScreenConfig;

/// Partial control decision from a single pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Signal {
    pub jump: bool,
    /// `Some(Left | Right)` when the pointer asks to move
    pub movement: Option<Move>,
}

impl Signal {
    pub const JUMP: Signal = Signal {
        jump: true,
        movement: None,
    };
    pub const LEFT: Signal = Signal {
        jump: false,
        movement: Some(Move::Left),
    };
    pub const RIGHT: Signal = Signal {
        jump: false,
        movement: Some(Move::Right),
    };
    /// Recognised zone that does nothing (the disabled "down" arrow)
    pub const IDLE: Signal = Signal {
        jump: false,
        movement: None,
    };
}

/// Which touch scheme is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TouchScheme {
    #[default]
    Overlay,
    Zones,
}

/// The two sidebar overlays
#[derive(Debug, Clone)]
pub struct ControlSet {
    pub dpad: ControlOverlay,
    pub buttons: ControlOverlay,
}

impl ControlSet {
    pub fn new(dpad: ControlOverlay, buttons: ControlOverlay) -> Self {
        Self { dpad, buttons }
    }

    /// Decode a screen-space point.
    ///
    /// The dpad is checked first; a point inside both overlays only consults
    /// the dpad, even when its pixel there carries no signal.
    pub fn signal_at(&self, point: Vec2) -> Option<Signal> {
        if self.dpad.contains(point) {
            self.dpad.sample(point)
        } else if self.buttons.contains(point) {
            self.buttons.sample(point)
        } else {
            None
        }
    }
}

/// Active touch decoder
#[derive(Debug, Clone)]
pub enum TouchControls {
    Overlays(ControlSet),
    Zones(ZoneScheme),
}

impl TouchControls {
    /// Build the decoder for `scheme`. Falls back to zones when the overlay
    /// scheme is requested but no overlays are available.
    pub fn for_scheme(
        scheme: TouchScheme,
        overlays: Option<ControlSet>,
        screen: &ScreenConfig,
    ) -> Self {
        match (scheme, overlays) {
            (TouchScheme::Overlay, Some(set)) => TouchControls::Overlays(set),
            (TouchScheme::Overlay, None) => {
                log::warn!("Overlay touch scheme requested without overlays, using zones");
                TouchControls::Zones(ZoneScheme::for_screen(screen))
            }
            (TouchScheme::Zones, _) => TouchControls::Zones(ZoneScheme::for_screen(screen)),
        }
    }

    pub fn signal_at(&self, point: Vec2) -> Option<Signal> {
        match self {
            TouchControls::Overlays(set) => set.signal_at(point),
            TouchControls::Zones(zones) => zones.signal_at(point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn solid(kind: OverlayKind, center: Vec2, color: [u8; 4]) -> ControlOverlay {
        ControlOverlay::new(kind, center, RgbaImage::from_pixel(40, 40, Rgba(color)))
    }

    #[test]
    fn test_dpad_wins_when_overlapping() {
        // Dpad pixel is transparent, buttons pixel is red; both cover (100, 100)
        let set = ControlSet::new(
            solid(OverlayKind::DPad, Vec2::new(100.0, 100.0), [0, 0, 0, 0]),
            solid(OverlayKind::Buttons, Vec2::new(100.0, 100.0), [255, 0, 0, 255]),
        );
        assert_eq!(set.signal_at(Vec2::new(100.0, 100.0)), None);
    }

    #[test]
    fn test_buttons_consulted_outside_dpad() {
        let set = ControlSet::new(
            solid(OverlayKind::DPad, Vec2::new(50.0, 300.0), [0, 255, 0, 255]),
            solid(OverlayKind::Buttons, Vec2::new(950.0, 300.0), [0, 0, 200, 255]),
        );
        assert_eq!(set.signal_at(Vec2::new(50.0, 300.0)), Some(Signal::RIGHT));
        assert_eq!(set.signal_at(Vec2::new(950.0, 300.0)), Some(Signal::JUMP));
        assert_eq!(set.signal_at(Vec2::new(500.0, 300.0)), None);
    }

    #[test]
    fn test_overlay_scheme_without_images_uses_zones() {
        let controls =
            TouchControls::for_scheme(TouchScheme::Overlay, None, &ScreenConfig::default());
        assert!(matches!(controls, TouchControls::Zones(_)));
        assert_eq!(controls.signal_at(Vec2::new(10.0, 10.0)), Some(Signal::LEFT));
    }
}
