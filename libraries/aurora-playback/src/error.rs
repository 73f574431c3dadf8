//! Error types for playback management

use aurora_core::SourceLocator;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    /// The device could not open or decode a source
    ///
    /// The engine pauses and waits for the user to call `play` again.
    #[error("Failed to load {locator}: {reason}")]
    DeviceLoad {
        /// Source the device was asked to open
        locator: SourceLocator,
        /// Reason reported by the device
        reason: String,
    },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for PlaybackError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
