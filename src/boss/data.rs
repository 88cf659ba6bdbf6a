//! Boss tuning loaded from `assets/data/boss.ron`.

use bevy::prelude::*;
use serde::Deserialize;

use super::components::BossRng;
use crate::core::data::{load_or_default, DATA_DIR};
use crate::core::{require_positive, ConfigError};

/// Boss tuning values.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BossConfig {
    /// Chase speed along X, in units per second
    pub patrol_speed: f32,
    /// Distance at which the boss notices the target
    pub detection_range: f32,
    /// Seconds spent in Recover after a normal attack
    pub attack_cooldown: f32,
    /// Seconds spent in Recover after a vulnerable stand
    pub vulnerable_window: f32,
    /// Fixed seed for attack selection (random if absent)
    pub rng_seed: Option<u64>,
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            patrol_speed: 1.5,
            detection_range: 10.0,
            attack_cooldown: 3.0,
            vulnerable_window: 1.5,
            rng_seed: None,
        }
    }
}

impl BossConfig {
    /// Check that every tuning value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("patrol_speed", self.patrol_speed)?;
        require_positive("detection_range", self.detection_range)?;
        require_positive("attack_cooldown", self.attack_cooldown)?;
        require_positive("vulnerable_window", self.vulnerable_window)?;
        Ok(())
    }
}

/// Load the boss config and seed the attack RNG.
pub fn load_boss_config(mut commands: Commands) {
    let path = format!("{DATA_DIR}/boss.ron");
    let config: BossConfig = load_or_default(&path, BossConfig::validate);

    commands.insert_resource(BossRng::new(config.rng_seed));
    commands.insert_resource(config);
}
