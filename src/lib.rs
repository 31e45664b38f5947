//! Ballpit - a 2D particle sandbox
//!
//! Core modules:
//! - `sim`: Deterministic particle physics (collisions, gravity, walls)
//! - `scenario`: Initial particle layouts
//! - `pid`: PID controller that steers a particle toward a target
//! - `settings`: Persisted configuration

pub mod pid;
pub mod scenario;
pub mod settings;
pub mod sim;

pub use pid::{PidController, PidGains};
pub use scenario::Scenario;
pub use settings::{Settings, SettingsError};
pub use sim::{Particle, SimError, StepConfig, StepReport, World};

/// World configuration constants
pub mod consts {
    /// World dimensions (origin top-left, y down)
    pub const WORLD_WIDTH: f32 = 1000.0;
    pub const WORLD_HEIGHT: f32 = 1000.0;

    /// Largest step the driver will take, however long a frame took
    pub const MAX_FRAME_DT: f32 = 1.0 / 60.0;

    /// Default gravitational constant
    pub const DEFAULT_GRAVITY: f32 = 1e2;
}
