//! Cloth topology: a rectangular particle grid joined by structural springs.

use crate::error::ClothError;
use crate::float::Float;
use crate::particle::{Color, Particle};
use crate::spring::Spring;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Largest cloth, in particles, a build will allocate.
pub const MAX_PARTICLES: usize = 1 << 20;

/// Parameters a cloth is built from. Changing any of them means building a
/// new [`Topology`]; nothing is carried over from the old one.
#[derive(Clone, Debug, PartialEq)]
pub struct ClothParams<F: Float> {
    pub rows: usize,
    pub cols: usize,
    /// Distance between neighboring particles at rest.
    pub spacing: F,
    pub stiffness: F,
    pub damping: F,
    pub particle_mass: F,
    pub particle_radius: F,
    /// Vertical position of the anchored top row.
    pub origin_y: F,
    pub color: Color,
}

impl<F: Float> ClothParams<F> {
    /// A 56x14 cloth hanging from `y = 100` in an 800px-wide world.
    pub fn new() -> Self {
        ClothParams {
            rows: 14,
            cols: 56,
            spacing: F::from_f32(12.0),
            stiffness: F::from_f32(3.0),
            damping: F::from_f32(1.5),
            particle_mass: F::from_f32(10.0),
            particle_radius: F::from_f32(4.0),
            origin_y: F::from_f32(100.0),
            color: Color::BLACK,
        }
    }

    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_particle(mut self, mass: F, radius: F) -> Self {
        self.particle_mass = mass;
        self.particle_radius = radius;
        self
    }

    pub fn with_origin_y(mut self, origin_y: F) -> Self {
        self.origin_y = origin_y;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Check the grid and spring parameters. The grid may hold at most
    /// [`MAX_PARTICLES`] particles. Particle mass and radius are
    /// checked by [`Particle::new`] during the build.
    pub fn validate(&self) -> Result<(), ClothError> {
        let invalid = |parameter| Err(ClothError::InvalidTopologyParameter { parameter });
        if self.rows == 0 {
            return invalid("rows");
        }
        if self.cols == 0 {
            return invalid("cols");
        }
        match self.rows.checked_mul(self.cols) {
            Some(count) if count <= MAX_PARTICLES => {}
            _ if self.rows >= self.cols => return invalid("rows"),
            _ => return invalid("cols"),
        }
        if !self.spacing.is_finite() || self.spacing <= F::zero() {
            return invalid("spacing");
        }
        if !self.stiffness.is_finite() || self.stiffness < F::zero() {
            return invalid("stiffness");
        }
        if !self.damping.is_finite() || self.damping < F::zero() {
            return invalid("damping");
        }
        if !self.origin_y.is_finite() {
            return invalid("origin_y");
        }
        Ok(())
    }
}

impl<F: Float> Default for ClothParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Particles in row-major order plus the springs between grid neighbors.
///
/// Particle at (col, row) has index `row * cols + col`. Row 0 is anchored.
#[derive(Clone, Debug)]
pub struct Topology<F: Float> {
    particles: AllocVec<Particle<F>>,
    springs: AllocVec<Spring<F>>,
    cols: usize,
    rows: usize,
}

impl<F: Float> Topology<F> {
    /// Build a fresh cloth.
    ///
    /// Particle (col, row) starts at `(col * spacing + spacing,
    /// row * spacing + origin_y)`. Springs join horizontal neighbors in every
    /// row and vertical neighbors between adjacent rows, each with the
    /// initial distance as rest length:
    /// `(cols - 1) * rows + (rows - 1) * cols` springs in total.
    pub fn build(params: &ClothParams<F>) -> Result<Self, ClothError> {
        params.validate()?;
        let ClothParams { rows, cols, spacing, .. } = *params;

        let mut particles = AllocVec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let x = F::from_usize(col) * spacing + spacing;
                let y = F::from_usize(row) * spacing + params.origin_y;
                let particle = Particle::new(Vec2::new(x, y), params.particle_mass, params.particle_radius)?
                    .with_color(params.color);
                particles.push(particle);
            }
        }

        for particle in particles.iter_mut().take(cols) {
            particle.pin();
        }

        let spring_count = (cols - 1) * rows + (rows - 1) * cols;
        let mut springs = AllocVec::with_capacity(spring_count);

        // Horizontal: (col, col+1)
        for row in 0..rows {
            for col in 0..(cols - 1) {
                let a = row * cols + col;
                let b = row * cols + col + 1;
                springs.push(Spring::between(a, b, &particles, params.stiffness, params.damping));
            }
        }

        // Vertical: (row, row+1)
        for row in 0..(rows - 1) {
            for col in 0..cols {
                let a = row * cols + col;
                let b = (row + 1) * cols + col;
                springs.push(Spring::between(a, b, &particles, params.stiffness, params.damping));
            }
        }

        Ok(Topology { particles, springs, cols, rows })
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    pub fn particle_at(&self, col: usize, row: usize) -> &Particle<F> {
        &self.particles[self.index(col, row)]
    }

    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle<F>] {
        &mut self.particles
    }

    pub fn springs(&self) -> &[Spring<F>] {
        &self.springs
    }

    /// Split borrow for the force pass: springs read, particles written.
    pub fn parts_mut(&mut self) -> (&[Spring<F>], &mut [Particle<F>]) {
        (&self.springs, &mut self.particles)
    }

    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
}
