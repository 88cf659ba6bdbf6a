//! Boss module - the boss FSM, its attacks, and the systems that drive it.

mod attacks;
mod components;
mod data;
mod fsm;
mod plugin;
mod systems;

pub use attacks::AttackKind;
pub use components::*;
pub use data::BossConfig;
pub use fsm::{BossController, BossTick};
pub use plugin::BossPlugin;
pub use systems::spawn_boss;
