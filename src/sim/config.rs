//! Per-step simulation parameters
//!
//! A `StepConfig` is handed to every [`World::step`](super::World::step)
//! call. Control surfaces may change it freely between steps.

use serde::{Deserialize, Serialize};

use super::error::{Result, SimError};
use crate::consts::{DEFAULT_GRAVITY, WORLD_HEIGHT, WORLD_WIDTH};

/// Rectangular world `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
        }
    }
}

/// Tunable parameters read by each simulation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepConfig {
    /// Pairwise attraction on/off
    pub gravity_enabled: bool,
    /// Gravitational constant (must be >= 0)
    pub gravity_constant: f32,
    /// Clamp particles to `bounds`
    pub walls_enabled: bool,
    /// Normal-velocity scale for bounces (0 = dead stop, 1 = elastic)
    pub restitution: f32,
    /// Fraction of velocity removed every step
    pub drag: f32,
    /// World rectangle used by the walls
    pub bounds: Bounds,
    /// Relative energy drift that triggers a warning (None = never warn)
    pub energy_drift_tolerance: Option<f32>,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            gravity_enabled: true,
            gravity_constant: DEFAULT_GRAVITY,
            walls_enabled: true,
            restitution: 1.0,
            drag: 0.0,
            bounds: Bounds::default(),
            energy_drift_tolerance: None,
        }
    }
}

impl StepConfig {
    /// No gravity, no walls, no drag, perfectly elastic
    pub fn isolated() -> Self {
        Self {
            gravity_enabled: false,
            walls_enabled: false,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.gravity_constant.is_finite() || self.gravity_constant < 0.0 {
            return Err(SimError::invalid_config(format!(
                "gravity constant must be finite and >= 0, got {}",
                self.gravity_constant
            )));
        }
        if !self.restitution.is_finite() {
            return Err(SimError::invalid_config("restitution must be finite"));
        }
        if !self.drag.is_finite() {
            return Err(SimError::invalid_config("drag must be finite"));
        }
        if !(self.bounds.width > 0.0 && self.bounds.height > 0.0) {
            return Err(SimError::invalid_config(format!(
                "bounds must be positive, got {}x{}",
                self.bounds.width, self.bounds.height
            )));
        }
        if let Some(tolerance) = self.energy_drift_tolerance {
            if !(tolerance >= 0.0) {
                return Err(SimError::invalid_config(
                    "energy drift tolerance must be >= 0",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = StepConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.gravity_enabled);
        assert_eq!(config.bounds, Bounds { width: 1000.0, height: 1000.0 });
    }

    #[test]
    fn test_rejects_negative_gravity() {
        let config = StepConfig {
            gravity_constant: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig { .. })));
    }

    #[test]
    fn test_rejects_nan_drag() {
        let config = StepConfig {
            drag: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: StepConfig =
            serde_json::from_str(r#"{ "gravity_enabled": false, "drag": 0.25 }"#).unwrap();
        assert!(!config.gravity_enabled);
        assert_eq!(config.drag, 0.25);
        assert!(config.walls_enabled);
        assert_eq!(config.restitution, 1.0);
    }
}
