//! Global events used for cross-system communication.
//!
//! The controllers themselves never touch the ECS. Their systems translate
//! tick reports into these events so the HUD and any future presentation
//! layer can react without reaching into controller state.

use bevy::prelude::*;

use crate::boss::{AttackKind, BossState};

/// Sent when a boss enters a new FSM state.
#[derive(Event, Debug, Clone, Copy)]
pub struct BossStateChanged {
    pub boss: Entity,
    pub state: BossState,
}

/// Sent when a boss performs one of its attacks.
#[derive(Event, Debug, Clone, Copy)]
pub struct BossAttackEvent {
    pub boss: Entity,
    pub kind: AttackKind,
}

/// Sent when the player picks up a coin.
#[derive(Event, Debug, Clone, Copy)]
pub struct CoinCollected {
    /// The player entity
    pub player: Entity,
    /// The coin, already queued for despawn
    pub coin: Entity,
    /// Score after pickup
    pub score: u32,
}
