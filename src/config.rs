//! Screen configuration
//!
//! Loaded from `assets/config/clear_screen.json`. Every field has a default, so a
//! partial file only overrides what it names and a missing file is not an error.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Errors loading the configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// SDL scancode names bound to each logical key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindingConfig {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub confirm: Vec<String>,
}

impl Default for KeyBindingConfig {
    fn default() -> Self {
        KeyBindingConfig {
            up: vec!["Up".to_string(), "W".to_string()],
            down: vec!["Down".to_string(), "S".to_string()],
            confirm: vec!["Space".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Logical window width in pixels
    pub width: u32,

    /// Logical window height in pixels
    pub height: u32,

    /// Target frame rate
    pub fps: u32,

    /// Milliseconds between changes in the highlighted option
    pub selection_interval_ms: u64,

    /// Milliseconds after a screen opens before selection input is accepted
    pub input_delay_ms: u64,

    pub bindings: KeyBindingConfig,

    /// Where score files live (defaults to `~/.round_clear/scores`)
    pub scores_dir: Option<PathBuf>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            width: 448,
            height: 520,
            fps: 60,
            selection_interval_ms: 200,
            input_delay_ms: 1000,
            bindings: KeyBindingConfig::default(),
            scores_dir: None,
        }
    }
}

impl ScreenConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn selection_interval(&self) -> Duration {
        Duration::from_millis(self.selection_interval_ms)
    }

    pub fn input_delay(&self) -> Duration {
        Duration::from_millis(self.input_delay_ms)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn scores_dir(&self) -> PathBuf {
        self.scores_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|p| p.join(".round_clear/scores"))
                .unwrap_or_else(|| PathBuf::from("./scores"))
        })
    }
}
