//! Playback configuration

use crate::error::{PlaybackError, Result};
use crate::types::RepeatMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable prefix (`AURORA_VOLUME`, `AURORA_REPEAT`, ...)
const ENV_PREFIX: &str = "AURORA";

/// Engine settings applied at construction
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaybackConfig {
    /// Initial volume (0-100)
    #[serde(default = "default_volume")]
    pub volume: u8,

    /// Initial shuffle flag
    #[serde(default)]
    pub shuffle: bool,

    /// Initial repeat mode
    #[serde(default)]
    pub repeat: RepeatMode,

    /// Position past which `previous` restarts the current track
    #[serde(default = "default_restart_threshold_ms")]
    pub restart_threshold_ms: u64,

    /// Seed for the shuffle RNG (entropy when unset)
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

impl PlaybackConfig {
    /// Load configuration from an optional TOML file and the environment
    ///
    /// Environment variables (prefixed with `AURORA_`) override the file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(
                config::File::from(path.to_path_buf()).format(config::FileFormat::Toml),
            );
        }

        // Override with environment variables
        settings =
            settings.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.volume > 100 {
            return Err(PlaybackError::Config(format!(
                "volume must be between 0 and 100, got {}",
                self.volume
            )));
        }

        Ok(())
    }

    /// Restart threshold as a `Duration`
    pub fn restart_threshold(&self) -> Duration {
        Duration::from_millis(self.restart_threshold_ms)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            shuffle: false,
            repeat: RepeatMode::None,
            restart_threshold_ms: default_restart_threshold_ms(),
            shuffle_seed: None,
        }
    }
}

// Default values
fn default_volume() -> u8 {
    80
}

fn default_restart_threshold_ms() -> u64 {
    3000
}
