//! Configuration error types.

use thiserror::Error;

/// Errors raised while setting up a controller or loading its data file.
///
/// These are reported once and never retried: the affected entity runs
/// without its controller, or the loader falls back to defaults.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The boss was created without a target to chase.
    #[error("Boss has no target assigned")]
    MissingTarget,

    /// Physics-driven movement was requested on an entity without a body.
    #[error("Physics movement requires a physics body on the player")]
    MissingBody,

    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    Read { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    Parse { path: String, details: String },

    /// A value parsed fine but is out of range.
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Reject zero, negative, or non-finite tuning values.
pub fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected a positive number, got {value}"),
        })
    }
}
