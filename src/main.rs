//! Platformer Boss - Entry Point
//!
//! Controls:
//! - A/D or arrows: Move
//! - Shift: Run (when the run modifier is enabled)
//! - Space: Jump
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platformer Boss".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.08, 0.07, 0.1)))

        // Physics, in world units (one unit is one meter)
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        .add_plugins(platformer_boss::PlatformerBossPlugin)

        .run();
}
