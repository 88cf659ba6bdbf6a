//! World components: collider categories and level ownership.

use bevy::prelude::*;

/// Category of a collider the player can touch.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderTag {
    /// Walkable surface; contact toggles grounded.
    Ground,
    /// Hazard; contact sends the player back to spawn.
    Obstacle,
    /// Collectible sensor worth one point.
    Coin,
}

/// Marker for everything spawned as part of the level (cleaned up on exit).
#[derive(Component)]
pub struct LevelEntity;
