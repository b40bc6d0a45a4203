//! Boundary containment: keeps particles inside `[0, width] x [0, height]`.

use crate::float::Float;
use crate::particle::Particle;

/// Clamp `particle` inside the world rectangle and reflect its velocity on
/// every axis where it crossed a wall. Restitution is exactly one, so the
/// bounced component keeps its magnitude and only flips sign.
///
/// Returns `true` if any axis was clamped.
pub fn contain<F: Float>(particle: &mut Particle<F>, width: F, height: F) -> bool {
    let r = particle.radius();
    let mut clamped = false;

    if particle.pos.x - r < F::zero() {
        particle.pos.x = r;
        particle.velocity.x = -particle.velocity.x;
        clamped = true;
    } else if particle.pos.x + r > width {
        particle.pos.x = width - r;
        particle.velocity.x = -particle.velocity.x;
        clamped = true;
    }

    if particle.pos.y - r < F::zero() {
        particle.pos.y = r;
        particle.velocity.y = -particle.velocity.y;
        clamped = true;
    } else if particle.pos.y + r > height {
        particle.pos.y = height - r;
        particle.velocity.y = -particle.velocity.y;
        clamped = true;
    }

    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle<f32> {
        let mut p = Particle::new(Vec2::new(x, y), 1.0, 2.0).unwrap();
        p.velocity = Vec2::new(vx, vy);
        p
    }

    #[test]
    fn left_wall_reflects_x() {
        let mut p = particle(1.0, 50.0, -3.0, 0.5);
        assert!(contain(&mut p, 100.0, 100.0));
        assert_eq!(p.pos, Vec2::new(2.0, 50.0));
        assert_eq!(p.velocity, Vec2::new(3.0, 0.5));
    }

    #[test]
    fn floor_reflects_y() {
        let mut p = particle(50.0, 99.5, 0.0, 7.25);
        assert!(contain(&mut p, 100.0, 100.0));
        assert_eq!(p.pos.y, 98.0);
        assert_eq!(p.velocity.y, -7.25);
    }

    #[test]
    fn corner_clamps_both_axes() {
        let mut p = particle(101.0, -1.0, 2.0, -2.0);
        assert!(contain(&mut p, 100.0, 100.0));
        assert_eq!(p.pos, Vec2::new(98.0, 2.0));
        assert_eq!(p.velocity, Vec2::new(-2.0, 2.0));
    }

    #[test]
    fn inside_particle_untouched() {
        let mut p = particle(50.0, 50.0, 1.0, 1.0);
        assert!(!contain(&mut p, 100.0, 100.0));
        assert_eq!(p.pos, Vec2::new(50.0, 50.0));
        assert_eq!(p.velocity, Vec2::new(1.0, 1.0));
    }
}
