//! Initial particle layouts
//!
//! Seeded layouts are reproducible: the same seed always yields the same
//! particles (ids aside).

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::{Particle, Result};

/// Margin kept free around the edges when scattering particles
const SCATTER_MARGIN: f32 = 100.0;

/// A named starting configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scenario {
    /// No particles
    Empty,
    /// Many small resting particles scattered over the world
    LittleBalls { count: usize, seed: u64 },
    /// Two large particles on a glancing course
    BigBalls,
    /// A light particle circling a heavy one
    Orbit,
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario::LittleBalls {
            count: 100,
            seed: 0,
        }
    }
}

impl Scenario {
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Empty => "empty",
            Scenario::LittleBalls { .. } => "little_balls",
            Scenario::BigBalls => "big_balls",
            Scenario::Orbit => "orbit",
        }
    }

    /// Create this scenario's particles
    pub fn build(&self) -> Result<Vec<Particle>> {
        let particles = match *self {
            Scenario::Empty => Vec::new(),
            Scenario::LittleBalls { count, seed } => scatter(count, seed)?,
            Scenario::BigBalls => vec![
                Particle::new(Vec2::new(150.0, 200.0), Vec2::ZERO, 50.0, 50.0)?,
                Particle::new(Vec2::new(300.0, 290.0), Vec2::new(-50.0, 0.0), 50.0, 50.0)?,
            ],
            Scenario::Orbit => vec![
                Particle::new(Vec2::new(450.0, 450.0), Vec2::ZERO, 50.0, 500.0)?,
                Particle::new(Vec2::new(250.0, 450.0), Vec2::new(0.0, 1600.0), 50.0, 0.05)?,
            ],
        };

        log::info!("Scenario {}: {} particles", self.name(), particles.len());
        Ok(particles)
    }
}

fn scatter(count: usize, seed: u64) -> Result<Vec<Particle>> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let position = Vec2::new(
                rng.random_range(SCATTER_MARGIN..WORLD_WIDTH - SCATTER_MARGIN),
                rng.random_range(SCATTER_MARGIN..WORLD_HEIGHT - SCATTER_MARGIN),
            );
            let radius = rng.random_range(5.0..20.0);
            let density = rng.random_range(1.0..5.0);
            Particle::new(position, Vec2::ZERO, radius, density)
        })
        .collect()
}
