//! Boss plugin - registers boss data loading and the FSM system.

use bevy::prelude::*;

use super::data::load_boss_config;
use super::systems;
use crate::core::GameState;

/// Boss plugin - loads tuning at startup, ticks the FSM during gameplay.
pub struct BossPlugin;

impl Plugin for BossPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_boss_config)
            .add_systems(
                Update,
                systems::boss_fsm.run_if(in_state(GameState::InGame)),
            );
    }
}
