//! # Line Errors

use thiserror::Error;

/// Errors raised while resampling polylines or building lines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    /// The polyline or the pattern cannot be resampled.
    #[error("Invalid resampling: {message}")]
    InvalidResampling { message: String },

    /// Radii must be finite and non-negative.
    #[error("Invalid radius: {radius}")]
    InvalidRadius { radius: f64 },
}

impl LineError {
    /// Creates an invalid resampling error.
    pub fn resampling(message: impl Into<String>) -> Self {
        Self::InvalidResampling {
            message: message.into(),
        }
    }
}
