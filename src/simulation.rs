//! The simulation session: owns the cloth and runs the per-tick loop.

use crate::bounds::contain;
use crate::collision::SpatialGrid;
use crate::config::SimulationConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::spring::Spring;
use crate::topology::{ClothParams, Topology};
use crate::vec::Vec2;

/// A single topology parameter change requested by an input layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TopologyParameter<F: Float> {
    Rows(usize),
    Cols(usize),
    Spacing(F),
    Stiffness(F),
    Damping(F),
}

impl<F: Float> TopologyParameter<F> {
    /// Parse a named slider value. Row and column counts are floored; a
    /// count below one is rejected. Counts too large for a cloth are
    /// rejected later, when the rebuild validates them.
    pub fn from_name(name: &str, value: F) -> Result<Self, ClothError> {
        let count = |parameter| {
            if !value.is_finite() || value < F::one() {
                Err(ClothError::InvalidTopologyParameter { parameter })
            } else {
                usize::try_from(value.floor().to_i64())
                    .map_err(|_| ClothError::InvalidTopologyParameter { parameter })
            }
        };
        match name {
            "rows" => Ok(TopologyParameter::Rows(count("rows")?)),
            "cols" => Ok(TopologyParameter::Cols(count("cols")?)),
            "spacing" => Ok(TopologyParameter::Spacing(value)),
            "stiffness" => Ok(TopologyParameter::Stiffness(value)),
            "damping" => Ok(TopologyParameter::Damping(value)),
            _ => Err(ClothError::UnknownParameter),
        }
    }

    /// `params` with this one parameter replaced.
    pub fn apply_to(self, params: &ClothParams<F>) -> ClothParams<F> {
        let mut next = params.clone();
        match self {
            TopologyParameter::Rows(rows) => next.rows = rows,
            TopologyParameter::Cols(cols) => next.cols = cols,
            TopologyParameter::Spacing(spacing) => next.spacing = spacing,
            TopologyParameter::Stiffness(stiffness) => next.stiffness = stiffness,
            TopologyParameter::Damping(damping) => next.damping = damping,
        }
        next
    }
}

/// A cloth simulation session.
///
/// Owns the current topology and everything needed to advance it. Input
/// commands and ticks both take `&mut self`, so a command can only land
/// between two ticks, never inside one.
pub struct ClothSimulation<F: Float> {
    params: ClothParams<F>,
    config: SimulationConfig<F>,
    topology: Topology<F>,
    grid: SpatialGrid<F>,
    held: Option<usize>,
    tick: u64,
}

impl<F: Float> ClothSimulation<F> {
    pub fn new(params: ClothParams<F>, config: SimulationConfig<F>) -> Result<Self, ClothError> {
        config.validate()?;
        let topology = Topology::build(&params)?;
        tracing::info!(
            rows = params.rows,
            cols = params.cols,
            particles = topology.particle_count(),
            springs = topology.spring_count(),
            "cloth simulation created"
        );
        Ok(ClothSimulation {
            grid: SpatialGrid::new(config.collision.cell_size),
            params,
            config,
            topology,
            held: None,
            tick: 0,
        })
    }

    /// Advance one tick: spring forces, integration, containment, then the
    /// optional collision pass.
    pub fn step<O: StepObserver>(&mut self, observer: &mut O) {
        let SimulationConfig { dt, gravity, drag, world_width, world_height, .. } = self.config;

        let (springs, particles) = self.topology.parts_mut();
        let mut degenerate = 0;
        for spring in springs {
            if spring.update(particles).is_none() {
                degenerate += 1;
            }
        }
        if degenerate > 0 {
            tracing::trace!(degenerate, "springs skipped with coincident endpoints");
        }
        observer.on_springs_applied(degenerate);

        for p in particles.iter_mut() {
            p.integrate(dt, gravity, drag);
        }
        observer.on_integrate();

        let mut clamped = 0;
        for p in particles.iter_mut() {
            if contain(p, world_width, world_height) {
                clamped += 1;
            }
        }
        observer.on_contain(clamped);

        if self.config.collisions_enabled {
            let stats = self.grid.resolve_collisions(particles, &self.config.collision);
            observer.on_collisions(&stats);
        }

        self.tick += 1;
        observer.on_step_complete(self.tick);
    }

    /// Grab the particle under `point`, preferring the closest one when
    /// several overlap it. Any particle already held is released first.
    pub fn select_particle_at(&mut self, point: Vec2<F>) -> Option<usize> {
        self.release_held_particle();

        let mut best: Option<(usize, F)> = None;
        for (i, p) in self.topology.particles().iter().enumerate() {
            if !p.hit_test(point) {
                continue;
            }
            let d = p.pos.distance(point);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }

        let (index, _) = best?;
        self.topology.particles_mut()[index].grab();
        self.held = Some(index);
        tracing::debug!(index, "particle grabbed");
        Some(index)
    }

    /// Drag the held particle to `point`. Does nothing when nothing is held.
    pub fn move_held_particle_to(&mut self, point: Vec2<F>) {
        if let Some(index) = self.held {
            self.topology.particles_mut()[index].set_position(point);
        }
    }

    /// Hand the held particle back to physics. Returns its index.
    pub fn release_held_particle(&mut self) -> Option<usize> {
        let index = self.held.take()?;
        self.topology.particles_mut()[index].release();
        tracing::debug!(index, "particle released");
        Some(index)
    }

    /// Change one topology parameter and rebuild the cloth from scratch.
    ///
    /// On error the current cloth is left exactly as it was.
    pub fn set_topology_parameter(&mut self, parameter: TopologyParameter<F>) -> Result<(), ClothError> {
        let next = parameter.apply_to(&self.params);
        self.set_params(next)
    }

    /// Replace every cloth parameter at once and rebuild.
    pub fn set_params(&mut self, params: ClothParams<F>) -> Result<(), ClothError> {
        let topology = match Topology::build(&params) {
            Ok(topology) => topology,
            Err(e) => {
                tracing::warn!(error = %e, "cloth parameter change rejected");
                return Err(e);
            }
        };
        self.params = params;
        self.replace_topology(topology);
        Ok(())
    }

    /// Reset the cloth to its initial layout with the current parameters.
    pub fn rebuild(&mut self) -> Result<(), ClothError> {
        let topology = Topology::build(&self.params)?;
        self.replace_topology(topology);
        Ok(())
    }

    fn replace_topology(&mut self, topology: Topology<F>) {
        self.topology = topology;
        self.held = None;
        tracing::debug!(
            rows = self.params.rows,
            cols = self.params.cols,
            springs = self.topology.spring_count(),
            "cloth rebuilt"
        );
    }

    /// Replace the loop configuration. The cloth itself is untouched.
    pub fn set_config(&mut self, config: SimulationConfig<F>) -> Result<(), ClothError> {
        config.validate()?;
        self.grid.set_cell_size(config.collision.cell_size);
        self.config = config;
        Ok(())
    }

    pub fn set_collisions_enabled(&mut self, enabled: bool) {
        self.config.collisions_enabled = enabled;
    }

    pub fn particles(&self) -> &[Particle<F>] {
        self.topology.particles()
    }

    pub fn springs(&self) -> &[Spring<F>] {
        self.topology.springs()
    }

    /// Endpoint positions of every spring, in spring order.
    pub fn spring_segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        let particles = self.topology.particles();
        self.topology
            .springs()
            .iter()
            .map(move |s| (particles[s.a].pos, particles[s.b].pos))
    }

    pub fn topology(&self) -> &Topology<F> { &self.topology }
    pub fn params(&self) -> &ClothParams<F> { &self.params }
    pub fn config(&self) -> &SimulationConfig<F> { &self.config }
    pub fn held_particle(&self) -> Option<usize> { self.held }
    pub fn tick_count(&self) -> u64 { self.tick }
}
