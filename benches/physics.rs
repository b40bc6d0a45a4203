//! Benchmarks for drape cloth simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use drape::*;

fn bench_spring_pass(c: &mut Criterion) {
    c.bench_function("spring_pass_default_cloth_1000_steps", |b| {
        let mut topology: Topology<f32> = Topology::build(&ClothParams::new()).unwrap();
        b.iter(|| {
            for _ in 0..1000 {
                let (springs, particles) = topology.parts_mut();
                for spring in springs {
                    spring.update(particles);
                }
                for p in particles.iter_mut() {
                    p.force = Vec2::zero();
                }
            }
            topology.particles()[0].pos
        });
    });
}

fn bench_cloth_simulation(c: &mut Criterion) {
    c.bench_function("cloth_56x14_60_steps", |b| {
        b.iter(|| {
            let mut sim: ClothSimulation<f32> =
                ClothSimulation::new(ClothParams::new(), SimulationConfig::new()).unwrap();
            for _ in 0..60 {
                sim.step(&mut NoOpStepObserver);
            }
            sim.particles()[sim.particles().len() - 1].pos
        });
    });
}

fn bench_collisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("cloth_56x14_collisions_60_steps");
    for (name, neighborhood, dedup) in [
        ("cross", Neighborhood::Cross, false),
        ("moore", Neighborhood::Moore, false),
        ("moore_dedup", Neighborhood::Moore, true),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let collision = CollisionConfig::new()
                    .with_neighborhood(neighborhood)
                    .with_dedup_pairs(dedup);
                let config = SimulationConfig::new()
                    .with_collisions(true)
                    .with_collision_config(collision);
                let mut sim: ClothSimulation<f32> =
                    ClothSimulation::new(ClothParams::new(), config).unwrap();
                for _ in 0..60 {
                    sim.step(&mut NoOpStepObserver);
                }
                sim.particles()[0].pos
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_spring_pass, bench_cloth_simulation, bench_collisions);
criterion_main!(benches);
