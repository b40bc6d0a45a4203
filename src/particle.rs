//! Point masses with explicitly accumulated forces.

use crate::error::ClothError;
use crate::float::Float;
use crate::vec::Vec2;

/// RGB color handed to the renderer alongside position and radius.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

/// A point mass integrated with semi-implicit Euler.
///
/// `fixed` particles are anchors set at construction time; `held` particles
/// are being dragged by an input layer. Either flag makes the particle
/// ignore forces, and its velocity and acceleration stay zero.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub velocity: Vec2<F>,
    /// Force accumulated since the last integration. Cleared every tick.
    pub force: Vec2<F>,
    pub acceleration: Vec2<F>,
    mass: F,
    radius: F,
    pub color: Color,
    pub fixed: bool,
    pub held: bool,
}

impl<F: Float> Particle<F> {
    /// Create a free particle at rest.
    pub fn new(pos: Vec2<F>, mass: F, radius: F) -> Result<Self, ClothError> {
        if !mass.is_finite() || mass <= F::zero() {
            return Err(ClothError::InvalidMass);
        }
        if !radius.is_finite() || radius <= F::zero() {
            return Err(ClothError::InvalidRadius);
        }
        Ok(Particle {
            pos,
            velocity: Vec2::zero(),
            force: Vec2::zero(),
            acceleration: Vec2::zero(),
            mass,
            radius,
            color: Color::BLACK,
            fixed: false,
            held: false,
        })
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn mass(&self) -> F { self.mass }
    pub fn radius(&self) -> F { self.radius }

    /// True when neither fixed nor held, i.e. physics may move it.
    pub fn is_free(&self) -> bool {
        !self.fixed && !self.held
    }

    pub fn apply_force(&mut self, force: Vec2<F>) {
        if self.is_free() {
            self.force = self.force + force;
        }
    }

    /// Advance one tick.
    ///
    /// Adds air drag `-drag * velocity` and weight `(0, gravity) * mass` to
    /// the accumulated force, then `v += a * dt` and `x += v * dt`. With
    /// `dt = 1` this is the unit-tick scheme the cloth is tuned for.
    /// Anchored and held particles have their motion state zeroed instead.
    /// The accumulated force is always cleared on return.
    pub fn integrate(&mut self, dt: F, gravity: F, drag: F) {
        if self.is_free() {
            let drag_force = -self.velocity.scale(drag);
            let weight = Vec2::new(F::zero(), gravity).scale(self.mass);
            self.force = self.force + weight + drag_force;
            self.acceleration = self.force.scale(F::one() / self.mass);
            self.velocity = self.velocity + self.acceleration.scale(dt);
            self.pos = self.pos + self.velocity.scale(dt);
        } else {
            self.acceleration = Vec2::zero();
            self.velocity = Vec2::zero();
        }
        self.force = Vec2::zero();
    }

    /// Overwrite the position. Velocity is left alone.
    pub fn set_position(&mut self, pos: Vec2<F>) {
        self.pos = pos;
    }

    pub fn hit_test(&self, point: Vec2<F>) -> bool {
        self.pos.distance(point) <= self.radius
    }

    /// Anchor the particle in place.
    pub fn pin(&mut self) {
        self.fixed = true;
        self.clear_motion();
    }

    /// Hand control of the particle to an input layer.
    pub fn grab(&mut self) {
        self.held = true;
        self.clear_motion();
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    fn clear_motion(&mut self) {
        self.force = Vec2::zero();
        self.acceleration = Vec2::zero();
        self.velocity = Vec2::zero();
    }
}
