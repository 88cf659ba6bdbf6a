//! Level building from a [`LevelDefinition`].

use bevy::prelude::*;

use super::components::{ColliderTag, LevelEntity};
use super::data::LevelDefinition;
use super::spawning::{spawn_coin, spawn_solid};
use crate::boss::{spawn_boss, BossConfig};
use crate::player::{spawn_player, PlayerConfig};

/// World units visible per screen pixel.
const CAMERA_SCALE: f32 = 1.0 / 32.0;

/// Spawn the camera, geometry, coins, player, and boss.
///
/// The boss is wired to the player here; that is the only link between
/// the two controllers.
pub fn build_level(
    commands: &mut Commands,
    level: &LevelDefinition,
    player_config: &PlayerConfig,
    boss_config: &BossConfig,
) -> Entity {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        },
        Transform::from_xyz(0.0, 4.0, 0.0),
        LevelEntity,
    ));

    for rect in &level.ground {
        spawn_solid(commands, rect, ColliderTag::Ground);
    }
    for rect in &level.obstacles {
        spawn_solid(commands, rect, ColliderTag::Obstacle);
    }
    for &(x, y) in &level.coins {
        spawn_coin(commands, Vec2::new(x, y));
    }

    let player = spawn_player(commands, level.player_start(), player_config);
    commands.entity(player).insert(LevelEntity);

    let boss = spawn_boss(commands, level.boss_start(), boss_config, Some(player));
    commands.entity(boss).insert(LevelEntity);

    player
}
