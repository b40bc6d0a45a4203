//! Configuration types for the simulation loop and the collision pass.

use crate::collision::Neighborhood;
use crate::error::ClothError;
use crate::float::Float;

/// Tuning for particle-particle collision resolution.
///
/// # Builder Pattern
/// ```
/// use drape::config::CollisionConfig;
/// use drape::collision::Neighborhood;
///
/// let config: CollisionConfig<f32> = CollisionConfig::new()
///     .with_cell_size(32.0)
///     .with_neighborhood(Neighborhood::Moore)
///     .with_dedup_pairs(true);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionConfig<F: Float> {
    /// Edge length of a square grid cell. Default: 50.
    pub cell_size: F,
    /// Cells searched around each particle. Default: [`Neighborhood::Cross`].
    pub neighborhood: Neighborhood,
    /// Evaluate each unordered pair once instead of from both sides.
    /// Default: false.
    pub dedup_pairs: bool,
    /// Factor applied to both velocities on contact. Default: 0.8.
    pub velocity_damping: F,
}

impl<F: Float> CollisionConfig<F> {
    pub fn new() -> Self {
        CollisionConfig {
            cell_size: F::from_f32(50.0),
            neighborhood: Neighborhood::Cross,
            dedup_pairs: false,
            velocity_damping: F::from_f32(0.8),
        }
    }

    pub fn with_cell_size(mut self, cell_size: F) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    pub fn with_dedup_pairs(mut self, dedup_pairs: bool) -> Self {
        self.dedup_pairs = dedup_pairs;
        self
    }

    pub fn with_velocity_damping(mut self, velocity_damping: F) -> Self {
        self.velocity_damping = velocity_damping;
        self
    }

    pub fn validate(&self) -> Result<(), ClothError> {
        if !self.cell_size.is_finite() || self.cell_size <= F::zero() {
            return Err(ClothError::InvalidCellSize);
        }
        if !self.velocity_damping.is_finite() || self.velocity_damping < F::zero() {
            return Err(ClothError::InvalidDamping);
        }
        Ok(())
    }
}

impl<F: Float> Default for CollisionConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the per-tick simulation loop.
///
/// Defaults reproduce the unit-tick scheme the cloth is tuned for: one
/// integration step per tick with `dt = 1`, in an 800x800 world with `y`
/// pointing down.
///
/// # Builder Pattern
/// ```
/// use drape::config::SimulationConfig;
///
/// let config: SimulationConfig<f32> = SimulationConfig::new()
///     .with_gravity(0.3)
///     .with_drag(0.02)
///     .with_world_size(1024.0, 768.0)
///     .with_collisions(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig<F: Float> {
    /// Timestep multiplier for velocity and position updates. Default: 1.
    pub dt: F,
    /// Downward gravitational acceleration. Default: 0.5.
    pub gravity: F,
    /// Air drag coefficient; drag force is `-drag * velocity`. Default: 0.05.
    pub drag: F,
    /// World extent along x. Default: 800.
    pub world_width: F,
    /// World extent along y. Default: 800.
    pub world_height: F,
    /// Run the collision pass every tick. Default: false.
    pub collisions_enabled: bool,
    pub collision: CollisionConfig<F>,
}

impl<F: Float> SimulationConfig<F> {
    pub fn new() -> Self {
        SimulationConfig {
            dt: F::one(),
            gravity: F::from_f32(0.5),
            drag: F::from_f32(0.05),
            world_width: F::from_f32(800.0),
            world_height: F::from_f32(800.0),
            collisions_enabled: false,
            collision: CollisionConfig::new(),
        }
    }

    pub fn with_dt(mut self, dt: F) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_drag(mut self, drag: F) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_world_size(mut self, width: F, height: F) -> Self {
        self.world_width = width;
        self.world_height = height;
        self
    }

    pub fn with_collisions(mut self, enabled: bool) -> Self {
        self.collisions_enabled = enabled;
        self
    }

    pub fn with_collision_config(mut self, collision: CollisionConfig<F>) -> Self {
        self.collision = collision;
        self
    }

    pub fn validate(&self) -> Result<(), ClothError> {
        if !self.dt.is_finite() || self.dt <= F::zero() {
            return Err(ClothError::InvalidTimestep);
        }
        if !self.world_width.is_finite()
            || !self.world_height.is_finite()
            || self.world_width <= F::zero()
            || self.world_height <= F::zero()
        {
            return Err(ClothError::InvalidWorldBounds);
        }
        if !self.drag.is_finite() || self.drag < F::zero() || !self.gravity.is_finite() {
            return Err(ClothError::InvalidDamping);
        }
        self.collision.validate()
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
