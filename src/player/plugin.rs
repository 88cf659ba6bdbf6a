//! Player plugin - movement, contacts, and player-related systems.

use bevy::prelude::*;

use super::data::load_player_config;
use super::input::read_player_input;
use super::systems::{drive_players, initialize_players};
use crate::core::GameState;

/// Player plugin - loads tuning, reads input, and drives the controller.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_player_config).add_systems(
            Update,
            (initialize_players, read_player_input, drive_players)
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
    }
}
