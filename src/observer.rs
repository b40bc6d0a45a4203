//! Step observer trait for monitoring simulation ticks.

use crate::collision::CollisionStats;

/// Trait for observing the phases of a simulation tick.
///
/// Implement this trait to monitor the loop (debug overlays, profiling,
/// test probes). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after every spring force has been accumulated.
    /// `degenerate` counts springs skipped because their endpoints coincide.
    fn on_springs_applied(&mut self, _degenerate: usize) {}

    /// Called after all particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after boundary containment; `clamped` particles touched a wall.
    fn on_contain(&mut self, _clamped: usize) {}

    /// Called after the collision pass, when collisions are enabled.
    fn on_collisions(&mut self, _stats: &CollisionStats) {}

    /// Called when tick number `tick` is fully complete.
    fn on_step_complete(&mut self, _tick: u64) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
