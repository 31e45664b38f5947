//! Circular particles and their per-particle physics
//!
//! Positions are the top-left corner of the particle's bounding box in world
//! coordinates (origin top-left, y grows downward). Use [`Particle::center`]
//! when you need the centroid.

use std::f32::consts::PI;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::error::{Result, SimError};

static NEXT_PARTICLE_ID: AtomicU64 = AtomicU64::new(0);

/// A circular body with a fixed radius and density
///
/// Deserializing goes through [`Particle::new`], so the id and mass are
/// always assigned fresh and bad dimensions are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ParticleRepr")]
pub struct Particle {
    id: u64,
    position: Vec2,
    velocity: Vec2,
    /// Force accumulated since the last integration
    #[serde(skip)]
    force: Vec2,
    radius: f32,
    density: f32,
    mass: f32,
}

/// Serialized fields a particle is rebuilt from
#[derive(Deserialize)]
struct ParticleRepr {
    position: Vec2,
    velocity: Vec2,
    radius: f32,
    density: f32,
}

impl TryFrom<ParticleRepr> for Particle {
    type Error = SimError;

    fn try_from(repr: ParticleRepr) -> Result<Self> {
        Particle::new(repr.position, repr.velocity, repr.radius, repr.density)
    }
}

impl Particle {
    /// Create a particle; `radius` and `density` must be positive and finite.
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, density: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(radius) || !valid(density) {
            return Err(SimError::InvalidParticle { radius, density });
        }

        Ok(Self {
            id: NEXT_PARTICLE_ID.fetch_add(1, Ordering::Relaxed),
            position,
            velocity,
            force: Vec2::ZERO,
            radius,
            density,
            mass: PI * radius * radius * density,
        })
    }

    /// Create a particle positioned by its center instead of its corner
    pub fn centered(center: Vec2, velocity: Vec2, radius: f32, density: f32) -> Result<Self> {
        Self::new(center - Vec2::splat(radius), velocity, radius, density)
    }

    /// Accumulate a force to be consumed by the next [`Particle::tick`]
    #[inline]
    pub fn push(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Same as [`Particle::push`]
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.push(force);
    }

    /// Semi-implicit Euler step: velocity from the accumulated force, then
    /// position from the new velocity. Clears the accumulator.
    pub fn tick(&mut self, delta_time: f32) -> Result<()> {
        // `!(x > 0)` so NaN is rejected too
        if !(delta_time > 0.0) {
            return Err(SimError::InvalidTimestep(delta_time));
        }

        self.velocity += (self.force / self.mass) * delta_time;
        self.force = Vec2::ZERO;
        self.position += self.velocity * delta_time;
        Ok(())
    }

    /// Same as [`Particle::tick`]
    #[inline]
    pub fn integrate(&mut self, delta_time: f32) -> Result<()> {
        self.tick(delta_time)
    }

    /// Strict circle overlap; exact tangency is not a collision
    pub fn collides(&self, other: &Particle) -> bool {
        self.center().distance(other.center()) < self.radius + other.radius
    }

    /// Geometric center of the circle
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.position + Vec2::splat(self.radius)
    }

    /// Move the particle so its center lands on `center`
    #[inline]
    pub fn set_center(&mut self, center: Vec2) {
        self.position = center - Vec2::splat(self.radius);
    }

    #[inline]
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Force accumulated so far this step
    #[cfg(test)]
    #[inline]
    pub(crate) fn pending_force(&self) -> Vec2 {
        self.force
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn diameter(&self) -> f32 {
        2.0 * self.radius
    }

    #[inline]
    pub fn density(&self) -> f32 {
        self.density
    }

    /// Cached `π r² ρ`
    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    /// `½ m |v|²`
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}
