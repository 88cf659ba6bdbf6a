//! Keyboard input mapped into [`MoveInput`].

use bevy::prelude::*;

use super::components::{MoveInput, Player};

/// Read the keyboard into every player's movement intent.
///
/// A/D or arrows move horizontally, W/S or arrows vertically (only used by
/// the free-move variant), Shift runs, Space jumps.
pub fn read_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut MoveInput, With<Player>>,
) {
    let mut axis = Vec2::ZERO;
    if keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        axis.x -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        axis.x += 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        axis.y += 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        axis.y -= 1.0;
    }

    let run = keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
    let jump = keyboard.just_pressed(KeyCode::Space);

    for mut input in query.iter_mut() {
        *input = MoveInput { axis, run, jump };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_input() -> (App, Entity) {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, read_player_input);
        let player = app.world_mut().spawn((Player, MoveInput::default())).id();
        (app, player)
    }

    fn input_of(app: &App, player: Entity) -> MoveInput {
        *app.world().get::<MoveInput>(player).unwrap()
    }

    /// End of frame, as the input plugin would do it.
    fn next_frame(app: &mut App) {
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
    }

    #[test]
    fn held_jump_key_fires_once() {
        let (mut app, player) = app_with_input();

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Space);
        app.update();
        assert!(input_of(&app, player).jump);

        next_frame(&mut app);
        app.update();
        assert!(app.world().resource::<ButtonInput<KeyCode>>().pressed(KeyCode::Space));
        assert!(!input_of(&app, player).jump);

        // Release and press again is a new jump
        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.release(KeyCode::Space);
        keyboard.clear();
        keyboard.press(KeyCode::Space);
        app.update();
        assert!(input_of(&app, player).jump);
    }

    #[test]
    fn keys_map_to_axis_and_run() {
        let (mut app, player) = app_with_input();

        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.press(KeyCode::KeyA);
        keyboard.press(KeyCode::ArrowUp);
        keyboard.press(KeyCode::ShiftLeft);
        app.update();

        let input = input_of(&app, player);
        assert_eq!(input.axis, Vec2::new(-1.0, 1.0));
        assert!(input.run);
        assert!(!input.jump);
    }

    #[test]
    fn opposite_keys_cancel() {
        let (mut app, player) = app_with_input();

        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.press(KeyCode::KeyA);
        keyboard.press(KeyCode::ArrowRight);
        app.update();

        assert_eq!(input_of(&app, player).axis, Vec2::ZERO);
    }
}
