//! Rectangular world boundary
//!
//! Each axis is checked on its own, so a particle in a corner can be clamped
//! on two sides in one call. Positions are clamped immediately rather than
//! integrating the rest of the step after the bounce.

use super::config::Bounds;
use super::particle::Particle;

/// Which walls a particle touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

/// Reflect and clamp a particle that reached the edge of `bounds`
pub fn collide_with_walls(particle: &mut Particle, bounds: Bounds, restitution: f32) -> WallContact {
    let mut contact = WallContact::default();
    let diameter = particle.diameter();
    let mut position = particle.position();
    let mut velocity = particle.velocity();

    if bounds.height - position.y - diameter <= 0.0 {
        velocity.y *= -restitution;
        position.y = bounds.height - diameter;
        contact.bottom = true;
    }

    if position.y <= 0.0 {
        velocity.y *= -restitution;
        position.y = 0.0;
        contact.top = true;
    }

    if position.x <= 0.0 {
        velocity.x *= -restitution;
        position.x = 0.0;
        contact.left = true;
    }

    if bounds.width - position.x - diameter <= 0.0 {
        velocity.x *= -restitution;
        position.x = bounds.width - diameter;
        contact.right = true;
    }

    particle.set_position(position);
    particle.set_velocity(velocity);
    contact
}
