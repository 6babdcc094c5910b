//! Declarative scene description
//!
//! Everything the engine needs to build the world: background, static
//! platforms, sidebars, spawn points, score text and overlay placement. The
//! engine creates the bodies; the game session only tracks the dynamic ones.

use glam::Vec2;

use crate::consts::{GRAVITY_Y, STAR_COUNT, STAR_OFFSET_X, STAR_STEP_X};
use crate::layout::{PlayArea, ScreenConfig};

/// Source size of the `ground` platform image
pub const PLATFORM_SIZE: Vec2 = Vec2::new(400.0, 32.0);

/// An image or static body placed by its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub key: &'static str,
    pub center: Vec2,
    pub size: Vec2,
}

/// Text drawn at a top-left position
#[derive(Debug, Clone, PartialEq)]
pub struct TextPlacement {
    pub pos: Vec2,
    pub content: String,
    pub font_size: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone)]
pub struct SceneLayout {
    pub screen: ScreenConfig,
    pub play_area: PlayArea,
    /// World gravity for dynamic bodies; bombs opt out
    pub gravity: Vec2,
    pub background: Placement,
    /// Ground first, then the ledges
    pub platforms: Vec<Placement>,
    /// Left then right; static bodies like the platforms
    pub sidebars: Vec<Placement>,
    pub player_spawn: Vec2,
    pub star_spawns: Vec<Vec2>,
    pub score_text: TextPlacement,
    pub dpad_center: Vec2,
    pub buttons_center: Vec2,
}

impl SceneLayout {
    pub fn build(screen: &ScreenConfig) -> Self {
        let area = screen.play_area();
        let left = area.left as f32;
        let center = area.center_vec();
        let width = screen.width as f32;
        let height = screen.height as f32;

        // Ground is stretched across the whole screen
        let ground_scale = width / PLATFORM_SIZE.x;
        let mut platforms = vec![Placement {
            key: "ground",
            center: Vec2::new(center.x, height - PLATFORM_SIZE.y),
            size: PLATFORM_SIZE * ground_scale,
        }];
        for ledge in [
            Vec2::new(left + 400.0, 600.0),
            Vec2::new(left + 50.0, 250.0),
            Vec2::new(left + 750.0, 220.0),
        ] {
            platforms.push(Placement {
                key: "ground",
                center: ledge,
                size: PLATFORM_SIZE,
            });
        }

        let sidebar_size = Vec2::new(screen.sidebar_width as f32, height);
        let sidebars = vec![
            Placement {
                key: "sidebar",
                center: screen.left_sidebar_center(),
                size: sidebar_size,
            },
            Placement {
                key: "sidebar",
                center: screen.right_sidebar_center(),
                size: sidebar_size,
            },
        ];

        let star_spawns = (0..STAR_COUNT)
            .map(|i| Vec2::new(left + STAR_OFFSET_X + STAR_STEP_X * i as f32, area.top()))
            .collect();

        Self {
            screen: *screen,
            play_area: area,
            gravity: Vec2::new(0.0, GRAVITY_Y),
            background: Placement {
                key: "sky",
                center,
                size: Vec2::new(area.w as f32, area.h as f32),
            },
            platforms,
            sidebars,
            player_spawn: Vec2::new(left + 100.0, 450.0),
            star_spawns,
            score_text: TextPlacement {
                pos: Vec2::new(left + 16.0, 16.0),
                content: "score: 0".to_string(),
                font_size: 32,
                color: "#000",
            },
            dpad_center: screen.left_sidebar_center(),
            buttons_center: screen.right_sidebar_center(),
        }
    }
}
