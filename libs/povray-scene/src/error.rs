//! # Scene Errors

use config::constants::ConfigError;
use povray_lines::LineError;
use thiserror::Error;

/// Errors raised while assembling scenes and molecule models.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// Neither explicit bonds nor the distance threshold connect any pair.
    #[error("No bonds found between particles")]
    NoBonds,

    /// Particle coordinates or bond indices are unusable.
    #[error("Invalid coordinates: {message}")]
    InvalidCoordinates { message: String },

    #[error("Invalid scene configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Line(#[from] LineError),
}

impl SceneError {
    /// Creates an invalid coordinates error.
    pub fn invalid_coordinates(message: impl Into<String>) -> Self {
        Self::InvalidCoordinates {
            message: message.into(),
        }
    }
}
