//! Level layout loaded from `assets/data/level.ron`.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::data::{load_or_default, DATA_DIR};
use crate::core::ConfigError;

/// An axis-aligned box in world units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RectDef {
    pub center: (f32, f32),
    pub size: (f32, f32),
}

impl RectDef {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center.0, self.center.1)
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.size.0, self.size.1) * 0.5
    }
}

/// Level layout: solid ground, hazards, coins, and start points.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    pub player_start: (f32, f32),
    pub boss_start: (f32, f32),
    #[serde(default)]
    pub ground: Vec<RectDef>,
    #[serde(default)]
    pub obstacles: Vec<RectDef>,
    #[serde(default)]
    pub coins: Vec<(f32, f32)>,
}

impl Default for LevelDefinition {
    fn default() -> Self {
        let rect = |cx, cy, w, h| RectDef {
            center: (cx, cy),
            size: (w, h),
        };

        Self {
            name: "Arena".to_string(),
            player_start: (-14.0, 1.0),
            boss_start: (12.0, 1.1),
            ground: vec![
                rect(0.0, -0.5, 40.0, 1.0),
                rect(-6.0, 2.5, 4.0, 0.4),
                rect(2.0, 4.0, 4.0, 0.4),
            ],
            obstacles: vec![rect(-9.0, 0.25, 1.0, 0.5)],
            coins: vec![(-11.0, 1.0), (-6.0, 3.4), (2.0, 4.9), (6.0, 1.0)],
        }
    }
}

impl LevelDefinition {
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(self.player_start.0, self.player_start.1)
    }

    pub fn boss_start(&self) -> Vec2 {
        Vec2::new(self.boss_start.0, self.boss_start.1)
    }

    /// Reject degenerate rectangles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = self.ground.iter().chain(self.obstacles.iter());
        for rect in all {
            if rect.size.0 <= 0.0 || rect.size.1 <= 0.0 {
                return Err(ConfigError::Invalid {
                    field: "size",
                    reason: format!("rectangle at {:?} has size {:?}", rect.center, rect.size),
                });
            }
        }
        Ok(())
    }
}

/// Load the level layout at startup.
pub fn load_level_definition(mut commands: Commands) {
    let path = format!("{DATA_DIR}/level.ron");
    let level: LevelDefinition = load_or_default(&path, LevelDefinition::validate);

    info!(
        "Level '{}': {} ground pieces, {} obstacles, {} coins",
        level.name,
        level.ground.len(),
        level.obstacles.len(),
        level.coins.len()
    );
    commands.insert_resource(level);
}
