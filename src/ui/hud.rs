//! In-game HUD - score and boss state.

use bevy::prelude::*;

use crate::boss::{AttackKind, BossController, BossState};
use crate::core::{BossAttackEvent, BossStateChanged, CoinCollected, GameState};
use crate::player::{Player, PlayerController};

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the score line.
#[derive(Component)]
pub struct ScoreText;

/// Marker for the boss status line.
#[derive(Component)]
pub struct BossText;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(
            Update,
            (update_score_text, update_boss_text).run_if(in_state(GameState::InGame)),
        );
}

/// Spawn the HUD UI in the top-left corner.
///
/// Also runs when resuming from pause, so initial text comes from the
/// live controllers rather than defaults.
fn spawn_hud(
    mut commands: Commands,
    player_query: Query<&PlayerController, With<Player>>,
    boss_query: Query<&BossController>,
) {
    let score = player_query.get_single().map_or(0, |c| c.score());
    let state = boss_query.get_single().map_or(BossState::Idle, |c| c.state());

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Start,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_line(parent, &format!("Score: {}", score), ScoreText);
            spawn_line(parent, &format!("Boss: {:?}", state), BossText);
        });
}

fn spawn_line<M: Component>(parent: &mut ChildBuilder, text: &str, marker: M) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.85, 0.85, 0.8)),
        Node {
            margin: UiRect::bottom(Val::Px(4.0)),
            ..default()
        },
        marker,
    ));
}

/// Show the latest score.
fn update_score_text(
    mut events: EventReader<CoinCollected>,
    mut text_query: Query<&mut Text, With<ScoreText>>,
) {
    let Some(latest) = events.read().last() else {
        return;
    };
    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };

    text.0 = format!("Score: {}", latest.score);
}

/// Show the boss's state and its most recent attack.
fn update_boss_text(
    mut state_events: EventReader<BossStateChanged>,
    mut attack_events: EventReader<BossAttackEvent>,
    mut text_query: Query<&mut Text, With<BossText>>,
    boss_query: Query<&BossController>,
    mut last_attack: Local<Option<AttackKind>>,
) {
    let state_changed = state_events.read().last().is_some();
    if let Some(event) = attack_events.read().last() {
        *last_attack = Some(event.kind);
    } else if !state_changed {
        return;
    }

    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };
    let state = boss_query.get_single().map_or(BossState::Idle, |c| c.state());

    text.0 = match *last_attack {
        Some(kind) => format!("Boss: {:?} (last attack: {:?})", state, kind),
        None => format!("Boss: {:?}", state),
    };
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
