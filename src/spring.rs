//! Damped Hookean springs between two particles of a shared arena.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// Endpoints closer than this have no usable direction.
const DEGENERATE_LENGTH: f32 = 1e-10;

/// A damped spring joining particles `a` and `b` by index.
///
/// The spring does not own its particles; indices refer to the particle
/// arena of the topology that created it.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    rest_length: F,
    pub stiffness: F,
    pub damping: F,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, rest_length: F, stiffness: F, damping: F) -> Self {
        debug_assert_ne!(a, b, "a spring needs two distinct particles");
        Spring { a, b, rest_length, stiffness, damping }
    }

    /// Spring whose rest length is the current distance between `a` and `b`.
    pub fn between(a: usize, b: usize, particles: &[Particle<F>], stiffness: F, damping: F) -> Self {
        let rest_length = particles[a].pos.distance(particles[b].pos);
        Spring::new(a, b, rest_length, stiffness, damping)
    }

    pub fn rest_length(&self) -> F {
        self.rest_length
    }

    /// Accumulate this spring's force on both endpoints.
    ///
    /// The elastic term is `stiffness * (length - rest_length)`. The damping
    /// term only sees the relative velocity projected on the spring axis, so
    /// sliding past each other is left undamped. `a` receives `+total` along
    /// `b - a` and `b` receives the exact negation.
    ///
    /// Returns the force applied to `a`, or `None` when the endpoints
    /// coincide and no direction exists.
    pub fn update(&self, particles: &mut [Particle<F>]) -> Option<Vec2<F>> {
        let pa = &particles[self.a];
        let pb = &particles[self.b];
        let delta = pb.pos - pa.pos;
        let length = delta.length();
        let direction = delta.try_normalize(F::from_f32(DEGENERATE_LENGTH))?;

        let elastic = self.stiffness * (length - self.rest_length);
        let closing_speed = (pb.velocity - pa.velocity).dot(direction);
        let total = direction.scale(elastic + self.damping * closing_speed);

        particles[self.a].apply_force(total);
        particles[self.b].apply_force(-total);
        Some(total)
    }

    /// Current length of the spring.
    pub fn length(&self, particles: &[Particle<F>]) -> F {
        particles[self.a].pos.distance(particles[self.b].pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn pair(ax: f32, bx: f32) -> alloc::vec::Vec<Particle<f32>> {
        vec![
            Particle::new(Vec2::new(ax, 0.0), 1.0, 1.0).unwrap(),
            Particle::new(Vec2::new(bx, 0.0), 1.0, 1.0).unwrap(),
        ]
    }

    #[test]
    fn stretched_spring_pulls_endpoints_together() {
        let mut particles = pair(0.0, 12.0);
        let spring = Spring::new(0, 1, 10.0, 2.0, 0.0);
        let force = spring.update(&mut particles).unwrap();
        assert_eq!(force, Vec2::new(4.0, 0.0));
        assert_eq!(particles[0].force, Vec2::new(4.0, 0.0));
        assert_eq!(particles[1].force, Vec2::new(-4.0, 0.0));
    }

    #[test]
    fn damping_uses_projected_relative_velocity() {
        let mut particles = pair(0.0, 10.0);
        // Perpendicular motion contributes nothing, separation speed does.
        particles[1].velocity = Vec2::new(1.0, 5.0);
        let spring = Spring::new(0, 1, 10.0, 0.0, 3.0);
        let force = spring.update(&mut particles).unwrap();
        assert_eq!(force, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn coincident_endpoints_are_skipped() {
        let mut particles = pair(5.0, 5.0);
        let spring = Spring::new(0, 1, 1.0, 3.0, 1.5);
        assert_eq!(spring.update(&mut particles), None);
        assert_eq!(particles[0].force, Vec2::zero());
        assert_eq!(particles[1].force, Vec2::zero());
    }

    #[test]
    fn between_measures_rest_length() {
        let particles = pair(1.0, 4.0);
        let spring = Spring::between(0, 1, &particles, 3.0, 1.5);
        assert_eq!(spring.rest_length(), 3.0);
    }
}
