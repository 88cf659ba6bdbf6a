//! Player systems: spawning, initialization, and the per-frame driver.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{MoveInput, Player, PlayerAnimator, JUMP_PARAM, SPEED_PARAM};
use super::controller::{Attached, Body, PlayerController};
use super::data::PlayerConfig;
use crate::core::BevyLog;

/// Player sprite size in world units.
const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.2);

/// Spawn the player at `position`.
///
/// The body is always dynamic so jumps and gravity come from the physics
/// step; kinematic motion moves it by translation instead of velocity.
pub fn spawn_player(commands: &mut Commands, position: Vec2, config: &PlayerConfig) -> Entity {
    let capabilities = config.capabilities;
    let gravity = if capabilities.vertical_movement { 0.0 } else { 1.0 };

    let player = commands
        .spawn((
            Player,
            Name::new(config.player_name.clone()),
            PlayerController::new(config.clone()),
            MoveInput::default(),
            Sprite::from_color(Color::srgb(0.3, 0.55, 0.85), PLAYER_SIZE),
            Transform::from_translation(position.extend(2.0)),
            // Rapier physics components
            RigidBody::Dynamic,
            Collider::cuboid(PLAYER_SIZE.x * 0.5, PLAYER_SIZE.y * 0.5),
            Velocity::zero(),
            LockedAxes::ROTATION_LOCKED,
            GravityScale(gravity),
            ActiveEvents::COLLISION_EVENTS,
        ))
        .id();

    if capabilities.animated {
        commands.entity(player).insert(PlayerAnimator::default());
    }

    player
}

/// Initialize newly spawned controllers.
///
/// A controller that fails is removed so it never ticks; the failure was
/// already logged by the controller.
pub fn initialize_players(
    mut commands: Commands,
    mut query: Query<
        (Entity, &mut PlayerController, &Transform, Has<Velocity>, Has<PlayerAnimator>),
        Added<PlayerController>,
    >,
) {
    let mut sink = BevyLog::new("player");

    for (entity, mut controller, transform, has_body, has_animator) in query.iter_mut() {
        let attached = Attached {
            body: has_body,
            animator: has_animator,
        };

        if controller
            .initialize(transform.translation.truncate(), attached, &mut sink)
            .is_err()
        {
            commands.entity(entity).remove::<PlayerController>();
        }
    }
}

/// Tick every player controller and write the result back.
pub fn drive_players(
    time: Res<Time>,
    mut query: Query<
        (
            &mut PlayerController,
            &MoveInput,
            &mut Transform,
            Option<&mut Velocity>,
            Option<&mut PlayerAnimator>,
            Option<&mut Sprite>,
        ),
        With<Player>,
    >,
) {
    let mut sink = BevyLog::new("player");
    let delta = time.delta_secs();

    for (mut controller, input, mut transform, velocity, animator, sprite) in query.iter_mut() {
        let mut body = Body {
            position: transform.translation.truncate(),
            velocity: velocity.as_ref().map_or(Vec2::ZERO, |v| v.linvel),
        };
        let before = body;

        controller.tick(delta, input, &mut body, &mut sink);

        // Only write what changed, so the physics step keeps ownership otherwise
        if body.position != before.position {
            transform.translation.x = body.position.x;
            transform.translation.y = body.position.y;
        }
        if let Some(mut velocity) = velocity {
            if body.velocity != before.velocity {
                velocity.linvel = body.velocity;
            }
        }

        // Sprite flipping belongs to the animated variants
        let Some(params) = controller.animation() else {
            continue;
        };
        if let Some(mut animator) = animator {
            animator.set_float(SPEED_PARAM, params.speed);
            animator.set_bool(JUMP_PARAM, params.jump);
        }
        if let Some(mut sprite) = sprite {
            let flip = controller.facing().flip_x();
            if sprite.flip_x != flip {
                sprite.flip_x = flip;
            }
        }
    }
}
