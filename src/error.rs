//! Error types for the aperture surface layer.

use thiserror::Error;

/// Surface-related errors
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Member not found: {member}")]
    NotFound { member: String },

    #[error("Reserved member cannot be assigned: {member}")]
    ReservedMember { member: String },

    #[error("Plugin not registered: {0}")]
    UnknownPlugin(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<config::ConfigError> for SurfaceError {
    fn from(err: config::ConfigError) -> Self {
        SurfaceError::Config(err.to_string())
    }
}
