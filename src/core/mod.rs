//! Core game module - states, events, timing, diagnostics, and errors.
//!
//! This module provides the foundation that the player, boss, and world
//! modules build upon.

mod clock;
pub mod data;
mod diagnostics;
mod error;
mod events;
mod facing;
mod plugin;
mod states;

pub use clock::FrameClock;
pub use diagnostics::*;
pub use error::*;
pub use events::*;
pub use facing::Facing;
pub use plugin::CorePlugin;
pub use states::*;
