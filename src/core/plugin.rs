//! Core plugin that sets up game states, events, and fundamental systems.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, MainMenu, InGame, Paused)
/// - Global events (BossStateChanged, BossAttackEvent, CoinCollected)
/// - Basic game flow systems
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_state::<GameState>()

            .add_event::<BossStateChanged>()
            .add_event::<BossAttackEvent>()
            .add_event::<CoinCollected>()

            // Data files are read in Startup, so the first Update can leave Loading
            .add_systems(Update, finish_loading.run_if(in_state(GameState::Loading)))

            .add_systems(
                Update,
                handle_pause_input.run_if(in_state(GameState::InGame).or(in_state(GameState::Paused)))
            )

            // Deadlines read virtual time, so it must stop with the game
            .add_systems(OnEnter(GameState::Paused), pause_game_clock)
            .add_systems(OnExit(GameState::Paused), resume_game_clock);
    }
}

fn pause_game_clock(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

fn resume_game_clock(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}

/// Leave the loading state once startup loaders have run.
fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::MainMenu);
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            GameState::InGame => next_state.set(GameState::Paused),
            GameState::Paused => next_state.set(GameState::InGame),
            _ => {}
        }
    }
}
