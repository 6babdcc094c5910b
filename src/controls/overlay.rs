//! Color-coded control overlays
//!
//! Each overlay is a static image drawn over a sidebar. Its pixel colors mark
//! the interactive zones, so hit-testing is a color lookup in the source image
//! rather than per-button geometry.
//!
//! On screen an overlay is placed by its center. For lookup, a pointer is made
//! local by subtracting the overlay's top-left corner.

use std::path::Path;

use glam::Vec2;
use image::{ImageFormat, Rgba, RgbaImage};

use super::Signal;
use crate::assets::AssetError;

/// Which overlay an image encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Directional pad (left sidebar)
    DPad,
    /// Action buttons (right sidebar)
    Buttons,
}

impl OverlayKind {
    pub fn asset_key(&self) -> &'static str {
        match self {
            OverlayKind::DPad => "dpad",
            OverlayKind::Buttons => "buttons",
        }
    }

    pub fn classify(&self, pixel: Rgba<u8>) -> Option<Signal> {
        match self {
            OverlayKind::DPad => classify_dpad(pixel),
            OverlayKind::Buttons => classify_buttons(pixel),
        }
    }
}

/// Dpad colors: red jumps, green moves right, yellow moves left, blue is the
/// disabled down arrow. Only exact colors count.
pub fn classify_dpad(pixel: Rgba<u8>) -> Option<Signal> {
    let Rgba([r, g, b, a]) = pixel;
    if a == 0 {
        return None;
    }
    match (r, g, b) {
        (255, 0, 0) => Some(Signal::JUMP),
        (0, 255, 0) => Some(Signal::RIGHT),
        (255, 255, 0) => Some(Signal::LEFT),
        (0, 0, 255) => Some(Signal::IDLE),
        _ => None,
    }
}

/// Button colors: anything with red, or pure blue shades, jumps.
///
/// Both buttons currently resolve to jump. Fully transparent pixels give no
/// signal even when their color channels are set: the button art is drawn
/// on a clear background, and a touch on that background is not a press.
pub fn classify_buttons(pixel: Rgba<u8>) -> Option<Signal> {
    let Rgba([r, g, b, a]) = pixel;
    if a == 0 {
        return None;
    }
    if r > 0 || (g == 0 && b > 0) {
        Some(Signal::JUMP)
    } else {
        None
    }
}

/// An overlay image placed on screen
#[derive(Debug, Clone)]
pub struct ControlOverlay {
    pub kind: OverlayKind,
    /// Screen-space center the overlay is drawn at
    pub center: Vec2,
    image: RgbaImage,
}

impl ControlOverlay {
    pub fn new(kind: OverlayKind, center: Vec2, image: RgbaImage) -> Self {
        Self {
            kind,
            center,
            image,
        }
    }

    /// Load the overlay from a PNG file
    pub fn load(kind: OverlayKind, center: Vec2, path: &Path) -> Result<Self, AssetError> {
        let image = image::open(path)
            .map_err(|source| AssetError::Decode {
                path: path.display().to_string(),
                source,
            })?
            .into_rgba8();
        log::info!(
            "Loaded {} overlay {}x{} from {}",
            kind.asset_key(),
            image.width(),
            image.height(),
            path.display()
        );
        Ok(Self::new(kind, center, image))
    }

    /// Decode the overlay from in-memory PNG bytes
    pub fn from_png_bytes(
        kind: OverlayKind,
        center: Vec2,
        bytes: &[u8],
    ) -> Result<Self, AssetError> {
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(|source| AssetError::Decode {
                path: format!("<{} bytes>", kind.asset_key()),
                source,
            })?
            .into_rgba8();
        Ok(Self::new(kind, center, image))
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.image.width() as f32, self.image.height() as f32)
    }

    pub fn top_left(&self) -> Vec2 {
        self.center - self.size() / 2.0
    }

    /// Screen-space bounds as (min, max), max exclusive
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let min = self.top_left();
        (min, min + self.size())
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let (min, max) = self.bounds();
        point.x >= min.x && point.y >= min.y && point.x < max.x && point.y < max.y
    }

    pub fn to_local(&self, point: Vec2) -> Vec2 {
        point - self.top_left()
    }

    /// Pixel at overlay-local coordinates, `None` outside the image
    pub fn pixel_at(&self, local: Vec2) -> Option<Rgba<u8>> {
        if !local.x.is_finite() || !local.y.is_finite() || local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let (x, y) = (local.x.floor() as u32, local.y.floor() as u32);
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Classify a screen-space point against this overlay
    pub fn sample(&self, point: Vec2) -> Option<Signal> {
        let local = self.to_local(point);
        match self.pixel_at(local) {
            Some(pixel) => self.kind.classify(pixel),
            None => {
                log::debug!(
                    "{} overlay sampled outside its image at {:?}",
                    self.kind.asset_key(),
                    local
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Move;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
    const YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    /// 40x40 dpad: top-left red, top-right green, bottom-left yellow,
    /// bottom-right blue, with a transparent 4px border
    fn dpad_image() -> RgbaImage {
        RgbaImage::from_fn(40, 40, |x, y| {
            if !(4..36).contains(&x) || !(4..36).contains(&y) {
                CLEAR
            } else {
                match (x < 20, y < 20) {
                    (true, true) => RED,
                    (false, true) => GREEN,
                    (true, false) => YELLOW,
                    (false, false) => BLUE,
                }
            }
        })
    }

    fn dpad_at(center: Vec2) -> ControlOverlay {
        ControlOverlay::new(OverlayKind::DPad, center, dpad_image())
    }

    #[test]
    fn test_dpad_colors() {
        assert_eq!(classify_dpad(RED), Some(Signal::JUMP));
        assert_eq!(classify_dpad(GREEN), Some(Signal::RIGHT));
        assert_eq!(classify_dpad(YELLOW), Some(Signal::LEFT));
        assert_eq!(classify_dpad(BLUE), Some(Signal::IDLE));
        assert_eq!(classify_dpad(CLEAR), None);
        assert_eq!(classify_dpad(Rgba([254, 0, 0, 255])), None);
        assert_eq!(classify_dpad(Rgba([128, 128, 128, 255])), None);
    }

    #[test]
    fn test_red_jumps_without_moving() {
        let signal = classify_dpad(RED).unwrap();
        assert!(signal.jump);
        assert_eq!(signal.movement, None);
        assert_eq!(classify_dpad(GREEN).unwrap().movement, Some(Move::Right));
        assert_eq!(classify_dpad(YELLOW).unwrap().movement, Some(Move::Left));
    }

    #[test]
    fn test_button_colors() {
        assert_eq!(classify_buttons(Rgba([1, 0, 0, 255])), Some(Signal::JUMP));
        assert_eq!(classify_buttons(Rgba([200, 200, 200, 255])), Some(Signal::JUMP));
        assert_eq!(classify_buttons(Rgba([0, 0, 1, 255])), Some(Signal::JUMP));
        assert_eq!(classify_buttons(Rgba([0, 10, 200, 255])), None);
        assert_eq!(classify_buttons(Rgba([0, 255, 0, 255])), None);
        assert_eq!(classify_buttons(CLEAR), None);
    }

    #[test]
    fn test_transparent_button_pixel_is_not_a_press() {
        assert_eq!(classify_buttons(Rgba([255, 0, 0, 0])), None);
        assert_eq!(classify_buttons(Rgba([0, 0, 255, 0])), None);
        assert_eq!(classify_buttons(Rgba([255, 0, 0, 1])), Some(Signal::JUMP));
    }

    #[test]
    fn test_placed_by_center_sampled_by_top_left() {
        let overlay = dpad_at(Vec2::new(50.0, 300.0));
        assert_eq!(overlay.top_left(), Vec2::new(30.0, 280.0));
        assert_eq!(overlay.to_local(Vec2::new(40.0, 290.0)), Vec2::new(10.0, 10.0));

        assert_eq!(overlay.sample(Vec2::new(40.0, 290.0)), Some(Signal::JUMP));
        assert_eq!(overlay.sample(Vec2::new(60.0, 290.0)), Some(Signal::RIGHT));
        assert_eq!(overlay.sample(Vec2::new(40.0, 310.0)), Some(Signal::LEFT));
        assert_eq!(overlay.sample(Vec2::new(60.0, 310.0)), Some(Signal::IDLE));
        // Transparent border
        assert_eq!(overlay.sample(Vec2::new(31.0, 281.0)), None);
    }

    #[test]
    fn test_contains_uses_bounds() {
        let overlay = dpad_at(Vec2::new(50.0, 300.0));
        assert!(overlay.contains(Vec2::new(30.0, 280.0)));
        assert!(overlay.contains(Vec2::new(69.9, 319.9)));
        assert!(!overlay.contains(Vec2::new(70.0, 300.0)));
        assert!(!overlay.contains(Vec2::new(29.9, 300.0)));
    }

    #[test]
    fn test_out_of_image_sampling_is_no_signal() {
        let overlay = dpad_at(Vec2::new(50.0, 300.0));
        assert_eq!(overlay.pixel_at(Vec2::new(-1.0, 5.0)), None);
        assert_eq!(overlay.pixel_at(Vec2::new(40.0, 5.0)), None);
        assert_eq!(overlay.pixel_at(Vec2::new(f32::NAN, 5.0)), None);
        assert_eq!(overlay.sample(Vec2::new(500.0, 500.0)), None);
    }

    #[test]
    fn test_png_round_trip_through_decoder() {
        let mut bytes = Vec::new();
        dpad_image()
            .write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        let overlay =
            ControlOverlay::from_png_bytes(OverlayKind::DPad, Vec2::new(20.0, 20.0), &bytes)
                .unwrap();
        assert_eq!(overlay.size(), Vec2::new(40.0, 40.0));
        assert_eq!(overlay.sample(Vec2::new(10.0, 10.0)), Some(Signal::JUMP));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let result = ControlOverlay::from_png_bytes(OverlayKind::Buttons, Vec2::ZERO, b"not a png");
        assert!(matches!(result, Err(AssetError::Decode { .. })));
    }
}
