//! Pairwise Newtonian attraction

use super::particle::Particle;

/// Pull `a` and `b` toward each other with `G m_a m_b / r²`.
///
/// The forces are accumulated on both particles and consumed by their next
/// tick. Returns the pair's potential energy `G m_a m_b / r`, which only feeds
/// diagnostics. Coincident centers are a caller bug (r = 0).
pub fn apply_gravity(a: &mut Particle, b: &mut Particle, gravity_constant: f32) -> f32 {
    let offset = b.center() - a.center();
    let distance_sq = offset.length_squared();
    let distance = distance_sq.sqrt();
    let strength = gravity_constant * a.mass() * b.mass();

    let force = strength * (offset / distance) / distance_sq;
    a.push(force);
    b.push(-force);

    strength / distance
}
