//! Circle-circle collision detection and response
//!
//! Overlapping particles are pushed apart along the line of centers, then the
//! normal components of their velocities go through the 1D two-mass collision
//! formula scaled by restitution. Tangential components pass through, so there
//! is no friction.

use glam::Vec2;

use super::particle::Particle;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the particles overlapped
    pub hit: bool,
    /// Unit vector from the first particle's center toward the second's
    pub normal: Vec2,
    /// Overlap depth before correction
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Fractions of the overlap each particle absorbs.
///
/// The faster particle is assumed to have caused more of the penetration and
/// moves further. Two resting particles split it evenly.
fn correction_shares(speed_a: f32, speed_b: f32) -> (f32, f32) {
    if speed_a == 0.0 && speed_b == 0.0 {
        (0.5, 0.5)
    } else {
        let total = speed_a + speed_b;
        (speed_a / total, speed_b / total)
    }
}

/// Separate and bounce two particles if they overlap.
///
/// Precondition: the centers never coincide exactly (the normal would be NaN).
pub fn resolve_collision(a: &mut Particle, b: &mut Particle, restitution: f32) -> CollisionResult {
    if !a.collides(b) {
        return CollisionResult::miss();
    }

    let offset = b.center() - a.center();
    let distance = offset.length();
    let normal = offset / distance;
    let tangent = normal.perp();

    let penetration = a.radius() + b.radius() - distance;

    // Depenetration
    let (share_a, share_b) = correction_shares(a.speed(), b.speed());
    a.translate(-normal * penetration * share_a);
    b.translate(normal * penetration * share_b);

    // Velocity response
    let (ma, mb) = (a.mass(), b.mass());
    let inv_total_mass = 1.0 / (ma + mb);

    let va_n = a.velocity().project_onto_normalized(normal);
    let vb_n = b.velocity().project_onto_normalized(normal);
    let va_t = a.velocity().project_onto_normalized(tangent);
    let vb_t = b.velocity().project_onto_normalized(tangent);

    let new_va_n = ((ma - mb) * va_n + 2.0 * mb * vb_n) * inv_total_mass;
    let new_vb_n = ((mb - ma) * vb_n + 2.0 * ma * va_n) * inv_total_mass;

    a.set_velocity(new_va_n * restitution + va_t);
    b.set_velocity(new_vb_n * restitution + vb_t);

    CollisionResult {
        hit: true,
        normal,
        penetration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(center: Vec2, vel: Vec2, radius: f32, density: f32) -> Particle {
        Particle::centered(center, vel, radius, density).unwrap()
    }

    #[test]
    fn test_separated_particles_are_untouched() {
        let mut a = ball(Vec2::ZERO, Vec2::new(1.0, 0.0), 1.0, 1.0);
        let mut b = ball(Vec2::new(5.0, 0.0), Vec2::new(-1.0, 0.0), 1.0, 1.0);

        let result = resolve_collision(&mut a, &mut b, 1.0);
        assert!(!result.hit);
        assert_eq!(a.velocity(), Vec2::new(1.0, 0.0));
        assert_eq!(b.center(), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_resting_overlap_splits_evenly() {
        let mut a = ball(Vec2::ZERO, Vec2::ZERO, 10.0, 1.0);
        let mut b = ball(Vec2::new(16.0, 0.0), Vec2::ZERO, 10.0, 1.0);

        let result = resolve_collision(&mut a, &mut b, 1.0);
        assert!(result.hit);
        assert!((result.penetration - 4.0).abs() < 1e-5);
        assert!((a.center() - Vec2::new(-2.0, 0.0)).length() < 1e-5);
        assert!((b.center() - Vec2::new(18.0, 0.0)).length() < 1e-5);
        assert_eq!(a.velocity(), Vec2::ZERO);
        assert_eq!(b.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_faster_particle_takes_the_correction() {
        let mut a = ball(Vec2::ZERO, Vec2::ZERO, 10.0, 1.0);
        let mut b = ball(Vec2::new(16.0, 0.0), Vec2::new(0.0, 3.0), 10.0, 1.0);

        resolve_collision(&mut a, &mut b, 1.0);
        // `a` is at rest so `b` moves the whole overlap
        assert!((a.center() - Vec2::ZERO).length() < 1e-5);
        assert!((b.center().x - 20.0).abs() < 1e-5);
    }

    #[test]
    fn test_equal_masses_exchange_velocity() {
        let mut a = ball(Vec2::ZERO, Vec2::ZERO, 10.0, 1.0);
        let mut b = ball(Vec2::new(18.0, 0.0), Vec2::new(-50.0, 0.0), 10.0, 1.0);

        resolve_collision(&mut a, &mut b, 1.0);
        assert!((a.velocity() - Vec2::new(-50.0, 0.0)).length() < 1e-3);
        assert!(b.velocity().length() < 1e-3);
    }

    #[test]
    fn test_tangential_velocity_passes_through() {
        let mut a = ball(Vec2::ZERO, Vec2::new(0.0, 7.0), 10.0, 1.0);
        let mut b = ball(Vec2::new(18.0, 0.0), Vec2::new(-4.0, -2.0), 10.0, 1.0);

        resolve_collision(&mut a, &mut b, 1.0);
        assert!((a.velocity() - Vec2::new(-4.0, 7.0)).length() < 1e-4);
        assert!((b.velocity() - Vec2::new(0.0, -2.0)).length() < 1e-4);
    }

    #[test]
    fn test_zero_restitution_kills_normal_motion() {
        let mut a = ball(Vec2::ZERO, Vec2::new(10.0, 1.0), 10.0, 1.0);
        let mut b = ball(Vec2::new(18.0, 0.0), Vec2::new(-10.0, 0.0), 10.0, 1.0);

        resolve_collision(&mut a, &mut b, 0.0);
        assert!(a.velocity().x.abs() < 1e-4);
        assert!(b.velocity().x.abs() < 1e-4);
        assert!((a.velocity().y - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_heavy_particle_barely_moves() {
        let mut heavy = ball(Vec2::ZERO, Vec2::ZERO, 10.0, 1000.0);
        let mut light = ball(Vec2::new(18.0, 0.0), Vec2::new(-10.0, 0.0), 10.0, 1.0);

        resolve_collision(&mut heavy, &mut light, 1.0);
        assert!(heavy.velocity().length() < 0.05);
        // Light one bounces back at almost full speed
        assert!(light.velocity().x > 9.9);
    }
}
