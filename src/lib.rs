//! Platformer Boss - a 2D platformer prototype in Bevy.
//!
//! A player runs, jumps, and collects coins while a boss watches from the
//! far end of the arena, then chases and attacks once the player comes
//! close.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, frame clock, diagnostics, errors
//! - **Player**: Movement controller, keyboard input, player data file
//! - **Boss**: Boss FSM, attack catalogue, boss data file
//! - **World**: Level layout, collider tags, physics contact dispatch
//! - **UI**: Title menu, pause overlay, HUD
//!
//! The two controllers ([`player::PlayerController`] and
//! [`boss::BossController`]) do not depend on the ECS; the plugins feed them
//! each frame and apply what they return.

pub mod boss;
pub mod core;
pub mod player;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct PlatformerBossPlugin;

impl Plugin for PlatformerBossPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            .add_plugins(player::PlayerPlugin)
            .add_plugins(boss::BossPlugin)
            .add_plugins(world::WorldPlugin)
            .add_plugins(ui::UiPlugin);
    }
}
