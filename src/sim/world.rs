//! Particle world and the per-frame simulation step
//!
//! A step runs, in order:
//! 1. kinetic energy snapshot
//! 2. one pairwise pass (collision, then gravity if enabled)
//! 3. energy baseline on the first step
//! 4. per particle: walls, drag, integration
//! 5. center of mass, frame counter

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::resolve_collision;
use super::config::StepConfig;
use super::error::{Result, SimError};
use super::gravity::apply_gravity;
use super::pairs::for_each_pair;
use super::particle::Particle;
use super::walls::collide_with_walls;

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    /// Frame number the step ran as
    pub frame: u64,
    /// Kinetic energy before the step
    pub kinetic_energy: f32,
    /// Sum of pairwise gravitational potential (0 with gravity off)
    pub potential_energy: f32,
    pub total_energy: f32,
    /// Overlapping pairs resolved
    pub collisions: usize,
    /// Particles that touched at least one wall
    pub wall_contacts: usize,
    /// Relative deviation from the energy baseline
    pub energy_drift: Option<f32>,
    /// Drift went past the configured tolerance
    pub drift_exceeded: bool,
}

/// The simulated particle collection and its bookkeeping
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    /// Particles in pairwise visitation order
    particles: Vec<Particle>,
    /// Steps completed since the last reset
    frame: u64,
    /// Left-wall bounces since the last reset
    bounces: u64,
    /// Total energy at the first step, kept for drift diagnostics
    energy_baseline: Option<f32>,
    center_of_mass: Vec2,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        let mut world = Self::new();
        world.reset(particles);
        world
    }

    /// Replace every particle and clear frame, bounce and energy bookkeeping
    pub fn reset(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
        self.frame = 0;
        self.bounces = 0;
        self.energy_baseline = None;
        self.update_center_of_mass();
    }

    /// Clamp a raw frame time to `max_dt` and step with it.
    ///
    /// Both must be positive; `min` would otherwise swallow a NaN.
    pub fn advance(&mut self, config: &StepConfig, frame_time: f32, max_dt: f32) -> Result<StepReport> {
        if !(frame_time > 0.0) {
            return Err(SimError::InvalidTimestep(frame_time));
        }
        if !(max_dt > 0.0) {
            return Err(SimError::InvalidTimestep(max_dt));
        }
        self.step(config, frame_time.min(max_dt))
    }

    /// Advance the world by `delta_time` seconds.
    ///
    /// Rejects a non-positive `delta_time` or an invalid config before
    /// touching any state.
    pub fn step(&mut self, config: &StepConfig, delta_time: f32) -> Result<StepReport> {
        if !(delta_time > 0.0) {
            return Err(SimError::InvalidTimestep(delta_time));
        }
        config.validate()?;

        let mut report = StepReport {
            frame: self.frame,
            kinetic_energy: self.kinetic_energy(),
            ..Default::default()
        };

        let mut potential = 0.0;
        let mut collisions = 0;
        for_each_pair(&mut self.particles, |a, b| {
            if resolve_collision(a, b, config.restitution).hit {
                collisions += 1;
            }
            if config.gravity_enabled {
                potential += apply_gravity(a, b, config.gravity_constant);
            }
        });
        report.potential_energy = potential;
        report.collisions = collisions;
        report.total_energy = report.kinetic_energy + potential;

        match self.energy_baseline {
            None => {
                log::info!("Total energy of system: {}", report.total_energy);
                self.energy_baseline = Some(report.total_energy);
            }
            Some(baseline) => {
                let drift = relative_drift(baseline, report.total_energy);
                report.energy_drift = Some(drift);
                if let Some(tolerance) = config.energy_drift_tolerance {
                    if drift > tolerance {
                        report.drift_exceeded = true;
                        log::warn!(
                            "Frame {}: energy {} drifted {:.2}% from baseline {}",
                            self.frame,
                            report.total_energy,
                            drift * 100.0,
                            baseline
                        );
                    }
                }
            }
        }

        for particle in &mut self.particles {
            if config.walls_enabled {
                let contact = collide_with_walls(particle, config.bounds, config.restitution);
                if contact.left {
                    self.bounces += 1;
                }
                if contact.any() {
                    report.wall_contacts += 1;
                }
            }

            particle.set_velocity(particle.velocity() * (1.0 - config.drag));
            particle.tick(delta_time)?;
        }

        self.update_center_of_mass();
        self.frame += 1;

        log::debug!(
            "Frame {}: E={} (K={}, U={}), {} collisions, {} wall contacts",
            report.frame,
            report.total_energy,
            report.kinetic_energy,
            report.potential_energy,
            report.collisions,
            report.wall_contacts
        );

        Ok(report)
    }

    fn update_center_of_mass(&mut self) {
        let (weighted, total) = self
            .particles
            .iter()
            .fold((Vec2::ZERO, 0.0), |(sum, mass), p| {
                (sum + p.center() * p.mass(), mass + p.mass())
            });
        if total != 0.0 {
            self.center_of_mass = weighted / total;
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn bounces(&self) -> u64 {
        self.bounces
    }

    pub fn energy_baseline(&self) -> Option<f32> {
        self.energy_baseline
    }

    /// Mass-weighted mean of particle centers as of the last step or reset.
    /// Keeps its previous value while the world is empty.
    pub fn center_of_mass(&self) -> Vec2 {
        self.center_of_mass
    }

    pub fn total_mass(&self) -> f32 {
        self.particles.iter().map(Particle::mass).sum()
    }

    pub fn momentum(&self) -> Vec2 {
        self.particles.iter().map(Particle::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    /// Relative deviation of `total_energy` from the recorded baseline
    pub fn energy_drift(&self, total_energy: f32) -> Option<f32> {
        self.energy_baseline
            .map(|baseline| relative_drift(baseline, total_energy))
    }
}

fn relative_drift(baseline: f32, current: f32) -> f32 {
    let delta = (current - baseline).abs();
    if baseline == 0.0 { delta } else { delta / baseline.abs() }
}
