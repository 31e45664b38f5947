//! Error types for simulation operations.

use thiserror::Error;

/// Errors surfaced by the simulation core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Integration step that is zero, negative or NaN.
    #[error("invalid timestep: {0} (must be positive)")]
    InvalidTimestep(f32),

    /// Particle built with a non-positive or non-finite size or density.
    #[error("invalid particle: radius {radius}, density {density} (both must be positive)")]
    InvalidParticle {
        /// Requested radius.
        radius: f32,
        /// Requested density.
        density: f32,
    },

    /// Step configuration the core cannot run with.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with it.
        reason: String,
    },
}

impl SimError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

/// Result alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;
