//! UI plugin - title menu, pause overlay, and HUD.

use bevy::prelude::*;

use super::hud;
use crate::core::GameState;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        hud::setup_hud_systems(app);

        app
            .add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
            .add_systems(OnExit(GameState::MainMenu), despawn_all::<MainMenuUi>)
            .add_systems(OnEnter(GameState::Paused), setup_pause_menu)
            .add_systems(OnExit(GameState::Paused), despawn_all::<PauseMenuUi>)
            .add_systems(
                Update,
                menu_button_input
                    .run_if(in_state(GameState::MainMenu).or(in_state(GameState::Paused))),
            );
    }
}

/// Marker for title menu entities, including its camera.
#[derive(Component)]
struct MainMenuUi;

/// Marker for pause overlay entities.
#[derive(Component)]
struct PauseMenuUi;

/// What a menu button does.
#[derive(Component, Clone, Copy)]
enum MenuButton {
    Start,
    Quit,
    Resume,
    MainMenu,
}

const BUTTON_IDLE: Color = Color::srgb(0.15, 0.15, 0.2);
const BUTTON_HOVER: Color = Color::srgb(0.25, 0.25, 0.3);
const BUTTON_PRESSED: Color = Color::srgb(0.3, 0.3, 0.35);

/// Full-screen centered column.
fn overlay_root() -> Node {
    Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        flex_direction: FlexDirection::Column,
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

fn spawn_title(parent: &mut ChildBuilder, text: &str, size: f32, color: Color, gap: f32) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(gap)),
            ..default()
        },
    ));
}

fn spawn_menu_button(parent: &mut ChildBuilder, text: &str, button: MenuButton) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(200.0),
                height: Val::Px(50.0),
                margin: UiRect::all(Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            button,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });
}

/// Title screen with its own camera, since no level exists yet.
fn setup_main_menu(mut commands: Commands) {
    commands.spawn((Camera2d, MainMenuUi));

    commands
        .spawn((
            overlay_root(),
            BackgroundColor(Color::srgb(0.05, 0.05, 0.08)),
            MainMenuUi,
        ))
        .with_children(|parent| {
            spawn_title(parent, "BOSS ARENA", 72.0, Color::srgb(0.8, 0.7, 0.6), 30.0);
            spawn_title(
                parent,
                "A/D move, Shift run, Space jump, Esc pause",
                20.0,
                Color::srgb(0.5, 0.5, 0.55),
                50.0,
            );
            spawn_menu_button(parent, "Start", MenuButton::Start);
            spawn_menu_button(parent, "Quit", MenuButton::Quit);
        });
}

/// Semi-transparent overlay over the frozen level.
fn setup_pause_menu(mut commands: Commands) {
    commands
        .spawn((
            overlay_root(),
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            PauseMenuUi,
        ))
        .with_children(|parent| {
            spawn_title(parent, "PAUSED", 48.0, Color::srgb(0.8, 0.8, 0.85), 40.0);
            spawn_menu_button(parent, "Resume", MenuButton::Resume);
            spawn_menu_button(parent, "Main Menu", MenuButton::MainMenu);
        });
}

/// Handle button hover and presses for every menu.
fn menu_button_input(
    mut interaction_query: Query<
        (&Interaction, &MenuButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, button, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = BUTTON_PRESSED.into();
                match button {
                    MenuButton::Start | MenuButton::Resume => next_state.set(GameState::InGame),
                    MenuButton::MainMenu => next_state.set(GameState::MainMenu),
                    MenuButton::Quit => {
                        exit.send(AppExit::Success);
                    }
                }
            }
            Interaction::Hovered => *bg_color = BUTTON_HOVER.into(),
            Interaction::None => *bg_color = BUTTON_IDLE.into(),
        }
    }
}

/// Despawn every entity carrying marker `T`.
fn despawn_all<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
