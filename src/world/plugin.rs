//! World plugin - level loading, physics contacts, and world setup.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::boss::BossConfig;
use crate::core::GameState;
use crate::player::PlayerConfig;

use super::builder::build_level;
use super::components::LevelEntity;
use super::contacts::dispatch_player_contacts;
use super::data::{load_level_definition, LevelDefinition};

/// World plugin - handles level loading and world setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_level_definition)
            // Resuming from pause re-enters InGame, so build only when coming from the menu
            .add_systems(
                OnTransition {
                    exited: GameState::MainMenu,
                    entered: GameState::InGame,
                },
                setup_level,
            )
            .add_systems(
                OnTransition {
                    exited: GameState::Paused,
                    entered: GameState::MainMenu,
                },
                cleanup_level,
            )
            .add_systems(OnEnter(GameState::Paused), pause_physics)
            .add_systems(OnExit(GameState::Paused), resume_physics)
            // Paused too, so contacts from the frame before a pause are not dropped
            .add_systems(
                Update,
                dispatch_player_contacts
                    .run_if(in_state(GameState::InGame).or(in_state(GameState::Paused))),
            );
    }
}

/// Set up the level from data.
pub fn setup_level(
    mut commands: Commands,
    level: Res<LevelDefinition>,
    player_config: Res<PlayerConfig>,
    boss_config: Res<BossConfig>,
) {
    info!("Building level: {}", level.name);
    build_level(&mut commands, &level, &player_config, &boss_config);
}

/// Clean up level entities when returning to the menu.
fn cleanup_level(mut commands: Commands, level_query: Query<Entity, With<LevelEntity>>) {
    for entity in level_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

fn pause_physics(mut config: Query<&mut RapierConfiguration>) {
    for mut config in config.iter_mut() {
        config.physics_pipeline_active = false;
    }
}

fn resume_physics(mut config: Query<&mut RapierConfiguration>) {
    for mut config in config.iter_mut() {
        config.physics_pipeline_active = true;
    }
}
