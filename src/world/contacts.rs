//! Dispatch of rapier contact events to the player controller.
//!
//! Solid contacts become `on_collision_begin` / `on_collision_end`, sensor
//! contacts become `on_trigger_enter`. Only colliders carrying a
//! [`ColliderTag`] are reported.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;

use super::components::ColliderTag;
use crate::core::{BevyLog, CoinCollected};
use crate::player::{Body, Player, PlayerController, TriggerResponse};

/// Route this frame's collision events to the player.
pub fn dispatch_player_contacts(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    tags: Query<&ColliderTag>,
    mut players: Query<
        (&mut PlayerController, &mut Transform, Option<&mut Velocity>),
        With<Player>,
    >,
    mut coin_events: EventWriter<CoinCollected>,
) {
    let mut sink = BevyLog::new("player");
    let mut consumed: Vec<Entity> = Vec::new();

    for event in collisions.read() {
        let (a, b, flags, started) = match event {
            CollisionEvent::Started(a, b, flags) => (*a, *b, *flags, true),
            CollisionEvent::Stopped(a, b, flags) => (*a, *b, *flags, false),
        };

        let (player, other) = if players.contains(a) {
            (a, b)
        } else if players.contains(b) {
            (b, a)
        } else {
            continue;
        };

        let Ok(&tag) = tags.get(other) else {
            continue;
        };
        let Ok((mut controller, mut transform, velocity)) = players.get_mut(player) else {
            continue;
        };

        if flags.contains(CollisionEventFlags::SENSOR) {
            if !started || consumed.contains(&other) {
                continue;
            }
            if controller.on_trigger_enter(tag, &mut sink) == TriggerResponse::Consume {
                consumed.push(other);
                commands.entity(other).despawn_recursive();
                coin_events.send(CoinCollected {
                    player,
                    coin: other,
                    score: controller.score(),
                });
            }
            continue;
        }

        if !started {
            controller.on_collision_end(tag);
            continue;
        }

        let mut body = Body {
            position: transform.translation.truncate(),
            velocity: velocity.as_ref().map_or(Vec2::ZERO, |v| v.linvel),
        };
        let before = body;

        controller.on_collision_begin(tag, &mut body, &mut sink);

        if body != before {
            transform.translation.x = body.position.x;
            transform.translation.y = body.position.y;
            if let Some(mut velocity) = velocity {
                velocity.linvel = body.velocity;
            }
        }
    }
}
