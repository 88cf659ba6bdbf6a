//! Player tuning loaded from `assets/data/player.ron`.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::data::{load_or_default, DATA_DIR};
use crate::core::{require_positive, ConfigError};

/// How the controller moves the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum MotionMode {
    /// Assign velocity and let the physics step integrate it.
    #[default]
    Physics,
    /// Translate the position directly by `speed * delta`.
    Kinematic,
}

/// Feature flags selecting a controller variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayerCapabilities {
    pub motion: MotionMode,
    /// Forward speed and jump parameters to an animator
    pub animated: bool,
    /// Holding run multiplies speed
    pub run_modifier: bool,
    /// Up/down input moves the player too
    pub vertical_movement: bool,
}

impl Default for PlayerCapabilities {
    fn default() -> Self {
        Self::physics_animated()
    }
}

impl PlayerCapabilities {
    /// Velocity-driven platformer movement with animation. The default.
    pub fn physics_animated() -> Self {
        Self {
            motion: MotionMode::Physics,
            animated: true,
            run_modifier: false,
            vertical_movement: false,
        }
    }

    /// Plain translation, no animator.
    pub fn kinematic_basic() -> Self {
        Self {
            motion: MotionMode::Kinematic,
            animated: false,
            run_modifier: false,
            vertical_movement: false,
        }
    }

    /// Translation with a run modifier and animation.
    pub fn kinematic_run() -> Self {
        Self {
            motion: MotionMode::Kinematic,
            animated: true,
            run_modifier: true,
            vertical_movement: false,
        }
    }

    /// Translation on both axes with a run modifier and animation.
    pub fn kinematic_free_move() -> Self {
        Self {
            motion: MotionMode::Kinematic,
            animated: true,
            run_modifier: true,
            vertical_movement: true,
        }
    }
}

/// Player tuning values.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Base movement speed in units per second
    pub move_speed: f32,
    /// Vertical velocity applied on jump
    pub jump_force: f32,
    /// Speed multiplier while running
    pub run_multiplier: f32,
    /// Shown in the greeting
    pub player_name: String,
    pub capabilities: PlayerCapabilities,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_force: 10.0,
            run_multiplier: 2.0,
            player_name: "Traveler".to_string(),
            capabilities: PlayerCapabilities::default(),
        }
    }
}

impl PlayerConfig {
    /// Check that every tuning value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("move_speed", self.move_speed)?;
        require_positive("jump_force", self.jump_force)?;
        require_positive("run_multiplier", self.run_multiplier)?;
        Ok(())
    }
}

/// Load the player config at startup.
pub fn load_player_config(mut commands: Commands) {
    let path = format!("{DATA_DIR}/player.ron");
    let config: PlayerConfig = load_or_default(&path, PlayerConfig::validate);
    commands.insert_resource(config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::parse_ron;

    #[test]
    fn parses_capabilities() {
        let config: PlayerConfig = parse_ron(
            "player.ron",
            r#"(
                move_speed: 4.0,
                player_name: "Tester",
                capabilities: (motion: Kinematic, run_modifier: true),
            )"#,
        )
        .unwrap();

        assert_eq!(config.move_speed, 4.0);
        assert_eq!(config.jump_force, 10.0);
        assert_eq!(config.player_name, "Tester");
        assert_eq!(config.capabilities.motion, MotionMode::Kinematic);
        assert!(config.capabilities.run_modifier);
        // Unspecified flags come from the default preset
        assert!(config.capabilities.animated);
        assert!(!config.capabilities.vertical_movement);
    }

    #[test]
    fn rejects_negative_speed() {
        let config = PlayerConfig {
            move_speed: -1.0,
            ..default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "move_speed", .. })
        ));
    }
}
