//! Application settings
//!
//! Persisted as JSON. Missing fields fall back to their defaults, so a
//! settings file only needs the values it changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::MAX_FRAME_DT;
use crate::pid::PidGains;
use crate::scenario::Scenario;
use crate::sim::StepConfig;

/// Errors loading or saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the driver needs to run a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Physics parameters handed to every step
    pub step: StepConfig,
    /// Layout loaded at startup
    pub scenario: Scenario,
    /// Gains for PID tracking
    pub pid: PidGains,
    /// Step cap applied to slow frames
    pub max_frame_dt: f32,
    /// Frame time of the headless run
    pub frame_dt: f32,
    /// Number of frames in the headless run
    pub frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            step: StepConfig::default(),
            scenario: Scenario::default(),
            pid: PidGains::default(),
            max_frame_dt: MAX_FRAME_DT,
            frame_dt: MAX_FRAME_DT,
            frames: 600,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let settings = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        fs::write(path.as_ref(), self.to_json()?)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
