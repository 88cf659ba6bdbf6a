//! UI module - menus and HUD.

mod hud;
mod plugin;

pub use plugin::UiPlugin;
