//! Entity spawning functions for level construction.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{ColliderTag, LevelEntity};
use super::data::RectDef;

/// Radius of a coin sensor.
const COIN_RADIUS: f32 = 0.3;

/// Spawn a fixed box tagged as ground or obstacle.
pub fn spawn_solid(commands: &mut Commands, rect: &RectDef, tag: ColliderTag) -> Entity {
    let half = rect.half_extents();
    let color = match tag {
        ColliderTag::Obstacle => Color::srgb(0.75, 0.25, 0.1),
        _ => Color::srgb(0.3, 0.28, 0.26),
    };

    commands
        .spawn((
            tag,
            Sprite::from_color(color, half * 2.0),
            Transform::from_translation(rect.center().extend(0.0)),
            RigidBody::Fixed,
            Collider::cuboid(half.x, half.y),
            LevelEntity,
        ))
        .id()
}

/// Spawn a collectible coin sensor.
pub fn spawn_coin(commands: &mut Commands, position: Vec2) -> Entity {
    commands
        .spawn((
            ColliderTag::Coin,
            Sprite::from_color(Color::srgb(0.95, 0.8, 0.2), Vec2::splat(COIN_RADIUS * 2.0)),
            Transform::from_translation(position.extend(0.5)),
            Collider::ball(COIN_RADIUS),
            Sensor,
            LevelEntity,
        ))
        .id()
}
