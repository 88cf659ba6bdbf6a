//! Player-related components.

use bevy::prelude::*;
use std::collections::HashMap;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Animator parameter for movement speed.
pub const SPEED_PARAM: &str = "Speed";
/// Animator parameter raised on jump, cleared on landing.
pub const JUMP_PARAM: &str = "Jump";

/// Movement intent for this frame, filled from the keyboard.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveInput {
    /// Directional intent, each axis in -1..=1
    pub axis: Vec2,
    /// Run modifier held
    pub run: bool,
    /// Jump pressed this frame (edge, not level)
    pub jump: bool,
}

/// Named animation parameters, the player's animation driver.
///
/// Optional: a player without one still moves, it just has nothing to
/// forward speed and jump state to.
#[derive(Component, Debug, Default)]
pub struct PlayerAnimator {
    floats: HashMap<&'static str, f32>,
    bools: HashMap<&'static str, bool>,
}

impl PlayerAnimator {
    pub fn set_float(&mut self, name: &'static str, value: f32) {
        self.floats.insert(name, value);
    }

    pub fn set_bool(&mut self, name: &'static str, value: bool) {
        self.bools.insert(name, value);
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        self.floats.get(name).copied()
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.bools.get(name).copied()
    }
}
