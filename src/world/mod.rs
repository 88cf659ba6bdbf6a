//! World module - level layout, collider tags, and contact dispatch.

mod builder;
mod components;
mod contacts;
pub mod data;
mod plugin;
mod spawning;

pub use builder::build_level;
pub use components::*;
pub use data::LevelDefinition;
pub use plugin::WorldPlugin;
