use drape::{ClothParams, ClothSimulation, NoOpStepObserver, SimulationConfig, Vec2};

fn run(config: SimulationConfig<f32>, ticks: usize) -> Vec<Vec2<f32>> {
    let params = ClothParams::new().with_size(8, 12).with_spacing(15.0);
    let mut sim = ClothSimulation::new(params, config).unwrap();
    let grabbed = sim.topology().index(11, 7);
    let corner = sim.particles()[grabbed].pos;
    sim.select_particle_at(corner);
    for i in 0..ticks {
        if i < ticks / 2 {
            sim.move_held_particle_to(Vec2::new(300.0 + i as f32, 400.0));
        } else if i == ticks / 2 {
            sim.release_held_particle();
        }
        sim.step(&mut NoOpStepObserver);
    }
    sim.particles().iter().map(|p| p.pos).collect()
}

#[test]
fn cloth_deterministic() {
    let results: Vec<_> = (0..5).map(|_| run(SimulationConfig::new(), 120)).collect();
    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}

#[test]
fn cloth_with_collisions_deterministic() {
    let config = SimulationConfig::new().with_collisions(true);
    let results: Vec<_> = (0..5).map(|_| run(config.clone(), 120)).collect();
    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}

#[test]
fn fixed_timestep_runs_reproduce() {
    let config = SimulationConfig::new().with_dt(0.25);
    let a = run(config.clone(), 200);
    let b = run(config, 200);
    assert_eq!(a, b);
}
