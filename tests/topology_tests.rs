use drape::{ClothError, ClothParams, ClothSimulation, NoOpStepObserver, SimulationConfig, Topology};

#[test]
fn three_by_four_cloth() {
    let params = ClothParams::<f32>::new().with_size(3, 4);
    let topology = Topology::build(&params).unwrap();

    assert_eq!(topology.particle_count(), 12);
    let horizontal = (4 - 1) * 3;
    let vertical = (3 - 1) * 4;
    assert_eq!(topology.spring_count(), horizontal + vertical);

    for col in 0..4 {
        assert!(topology.particle_at(col, 0).fixed);
    }
    assert_eq!(topology.particles().iter().filter(|p| p.fixed).count(), 4);
}

#[test]
fn springs_join_grid_neighbors_only() {
    let topology = Topology::build(&ClothParams::<f32>::new().with_size(5, 6)).unwrap();
    let cols = topology.cols();
    for s in topology.springs() {
        let (ra, ca) = (s.a / cols, s.a % cols);
        let (rb, cb) = (s.b / cols, s.b % cols);
        let horizontal = ra == rb && cb == ca + 1;
        let vertical = ca == cb && rb == ra + 1;
        assert!(horizontal || vertical, "unexpected spring {} -> {}", s.a, s.b);
    }
}

#[test]
fn invalid_parameters_rejected() {
    assert_eq!(
        Topology::build(&ClothParams::<f32>::new().with_spacing(-3.0)).err(),
        Some(ClothError::InvalidTopologyParameter { parameter: "spacing" })
    );
    assert_eq!(
        Topology::build(&ClothParams::<f32>::new().with_damping(f32::NAN)).err(),
        Some(ClothError::InvalidTopologyParameter { parameter: "damping" })
    );
    assert_eq!(
        Topology::build(&ClothParams::<f32>::new().with_particle(10.0, -1.0)).err(),
        Some(ClothError::InvalidRadius)
    );
}

#[test]
fn pinned_top_row_drapes_under_gravity() {
    let params = ClothParams::new().with_size(5, 5).with_spacing(20.0);
    let mut sim = ClothSimulation::<f32>::new(params, SimulationConfig::new()).unwrap();

    let cols = sim.topology().cols();
    let bottom_row = sim.topology().rows() - 1;
    let top_initial: Vec<_> = (0..cols).map(|c| sim.topology().particle_at(c, 0).pos).collect();
    let bottom_initial: Vec<_> = (0..cols)
        .map(|c| sim.topology().particle_at(c, bottom_row).pos)
        .collect();

    for _ in 0..120 {
        sim.step(&mut NoOpStepObserver);
    }

    for col in 0..cols {
        let pos = sim.topology().particle_at(col, 0).pos;
        assert_eq!(pos, top_initial[col], "top row particle {} moved", col);
    }

    // y grows downward: the free rows sag below where they started.
    for col in 0..cols {
        let pos = sim.topology().particle_at(col, bottom_row).pos;
        assert!(
            pos.y > bottom_initial[col].y,
            "bottom particle {} should sag below y {}, found {}",
            col, bottom_initial[col].y, pos.y,
        );
    }
}
