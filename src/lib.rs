//! Mass-spring cloth simulation with grid-accelerated collision response.
//!
//! `drape` simulates a cloth as a rectangular grid of point masses joined by
//! damped springs, hanging from an anchored top row. Each tick accumulates
//! spring forces, integrates every particle with semi-implicit Euler under
//! gravity and air drag, keeps particles inside the world rectangle, and can
//! optionally push overlapping particles apart using a uniform spatial grid.
//!
//! The crate owns no window, input, or rendering code. A presentation layer
//! reads particle positions, radii, colors, and spring segments after each
//! tick, and sends discrete commands (grab, drag, release a particle; change
//! a cloth parameter) between ticks.
//!
//! # Features
//!
//! - **Force-based springs**: Hooke's law with axis-projected damping
//! - **Explicit timestep**: `dt = 1` by default, configurable for fixed-step runs
//! - **Containment**: Perfectly elastic reflection off the world bounds
//! - **Spatial grid**: Cross (default) or 3x3 neighborhoods, optional pair dedup
//! - **Atomic rebuilds**: Any parameter change swaps in a freshly built cloth
//! - **Observable**: Monitor tick phases via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use drape::{ClothParams, ClothSimulation, NoOpStepObserver, SimulationConfig, Vec2};
//!
//! let mut sim: ClothSimulation<f32> =
//!     ClothSimulation::new(ClothParams::new(), SimulationConfig::new()).unwrap();
//! let corner = sim.particles()[sim.topology().index(0, 13)].pos;
//! sim.select_particle_at(corner);
//! sim.move_held_particle_to(Vec2::new(300.0, 500.0));
//! sim.step(&mut NoOpStepObserver);
//! sim.release_held_particle();
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod spring;
pub mod topology;
pub mod bounds;
pub mod collision;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::{Color, Particle};
pub use spring::Spring;
pub use topology::{ClothParams, Topology, MAX_PARTICLES};
pub use bounds::contain;
pub use collision::{Cell, CollisionStats, Neighborhood, SpatialGrid};
pub use simulation::{ClothSimulation, TopologyParameter};
pub use config::{CollisionConfig, SimulationConfig};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::ClothError;
