//! Player module - player entity, movement controller, and input.

mod components;
mod controller;
mod data;
mod input;
mod plugin;
mod systems;

pub use components::*;
pub use controller::{AnimationParams, Attached, Body, PlayerController, TriggerResponse};
pub use data::{MotionMode, PlayerCapabilities, PlayerConfig};
pub use plugin::PlayerPlugin;
pub use systems::spawn_player;
