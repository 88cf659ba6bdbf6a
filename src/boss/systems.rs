//! Boss systems: spawning and the per-frame FSM driver.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{Boss, BossRng, TargetTracking};
use super::data::BossConfig;
use super::fsm::BossController;
use crate::core::{BevyLog, BossAttackEvent, BossStateChanged, FrameClock};
use crate::player::Player;

/// Boss sprite size in world units.
const BOSS_SIZE: Vec2 = Vec2::new(1.6, 2.2);

/// Spawn the boss at `position`, chasing `target`.
///
/// Without a target the boss still appears but has no controller, so it
/// never ticks. The configuration error is reported once, here.
pub fn spawn_boss(
    commands: &mut Commands,
    position: Vec2,
    config: &BossConfig,
    target: Option<Entity>,
) -> Entity {
    let boss = commands
        .spawn((
            Boss,
            Name::new("Boss"),
            Sprite::from_color(Color::srgb(0.55, 0.12, 0.15), BOSS_SIZE),
            Transform::from_translation(position.extend(1.0)),
            RigidBody::KinematicPositionBased,
            Collider::cuboid(BOSS_SIZE.x * 0.5, BOSS_SIZE.y * 0.5),
            TargetTracking::default(),
        ))
        .id();

    match BossController::new(config.clone(), target) {
        Ok(controller) => {
            commands.entity(boss).insert(controller);
        }
        Err(e) => {
            error!("Boss {:?} disabled: {}", boss, e);
        }
    }

    boss
}

/// Drive every boss FSM one tick and apply the result.
pub fn boss_fsm(
    time: Res<Time>,
    mut rng: ResMut<BossRng>,
    target_query: Query<&Transform, (With<Player>, Without<Boss>)>,
    mut boss_query: Query<
        (
            Entity,
            &mut BossController,
            &mut Transform,
            &mut TargetTracking,
            Option<&mut Sprite>,
        ),
        With<Boss>,
    >,
    mut state_events: EventWriter<BossStateChanged>,
    mut attack_events: EventWriter<BossAttackEvent>,
) {
    let clock = FrameClock::from_time(&time);
    let mut sink = BevyLog::new("boss");

    for (entity, mut controller, mut transform, mut tracking, sprite) in boss_query.iter_mut() {
        let Ok(target_transform) = target_query.get(controller.target()) else {
            if !tracking.lost {
                warn!("Boss {:?} lost its target {:?}", entity, controller.target());
                tracking.lost = true;
            }
            continue;
        };
        tracking.lost = false;

        let report = controller.tick(
            clock,
            transform.translation.truncate(),
            target_transform.translation.truncate(),
            &mut rng.0,
            &mut sink,
        );

        transform.translation.x = report.position.x;
        transform.translation.y = report.position.y;

        if let (Some(facing), Some(mut sprite)) = (report.facing, sprite) {
            sprite.flip_x = facing.flip_x();
        }

        if let Some(kind) = report.attack {
            attack_events.send(BossAttackEvent { boss: entity, kind });
        }
        if report.state_changed {
            state_events.send(BossStateChanged {
                boss: entity,
                state: controller.state(),
            });
        }
    }
}
