//! PID tracking
//!
//! Steers a particle's center toward a target point by moving it directly
//! (no forces involved). Gains may be negative.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Particle, Result, SimError};

/// Proportional, integral and derivative gains
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidGains {
    pub p: f32,
    pub i: f32,
    pub d: f32,
}

impl Default for PidGains {
    fn default() -> Self {
        Self {
            p: 1.0,
            i: 1.0,
            d: 0.5,
        }
    }
}

/// 2D PID controller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PidController {
    pub gains: PidGains,
    integral: Vec2,
    prev_error: Vec2,
}

impl PidController {
    pub fn new(gains: PidGains) -> Self {
        Self {
            gains,
            ..Default::default()
        }
    }

    /// Controller output for one step of `dt` seconds
    pub fn update(&mut self, target: Vec2, current: Vec2, dt: f32) -> Result<Vec2> {
        if !(dt > 0.0) {
            return Err(SimError::InvalidTimestep(dt));
        }

        let error = target - current;
        self.integral += error * dt;
        let derivative = (error - self.prev_error) / dt;
        self.prev_error = error;

        Ok(self.gains.p * error + self.gains.i * self.integral + self.gains.d * derivative)
    }

    /// Move `particle`'s center by the controller output over `dt`
    pub fn track(&mut self, particle: &mut Particle, target: Vec2, dt: f32) -> Result<()> {
        let output = self.update(target, particle.center(), dt)?;
        particle.set_center(particle.center() + output * dt);
        Ok(())
    }

    /// Forget accumulated integral and derivative history
    pub fn reset(&mut self) {
        self.integral = Vec2::ZERO;
        self.prev_error = Vec2::ZERO;
    }

    pub fn integral(&self) -> Vec2 {
        self.integral
    }
}
