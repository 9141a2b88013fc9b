use approx::{assert_abs_diff_eq, assert_relative_eq};

use orbsim::{
    build_world, AccelSet, Body, BodyId, BodyKind, ConfigError, Direction, Engine, LaunchConfig, NVec2,
    NewtonianGravity, Parameters, Propulsion, ScenarioConfig, SimError, Stage, System, UpdateOrder, Viewport,
    World, G_SI,
};

/// Default physics parameters for tests: no contact buffer, long trails
pub fn test_params() -> Parameters {
    Parameters {
        interference_eps: 0.0,
        collision_eps: 1e-3,
        trail_size: 16,
        ..Parameters::default()
    }
}

/// Empty world with a 1000x1000 screen and unit scaling
pub fn empty_world(params: Parameters, order: UpdateOrder) -> World {
    let engine = Engine { update_order: order, ..Engine::default() };
    World::new(params, engine, Viewport::new(1000.0, 1000.0, 1.0, 0.1), LaunchConfig::default())
}

pub fn planet(kind: BodyKind, x: [f64; 2], v: [f64; 2], radius: f64, m: f64) -> Body {
    Body::new(kind, NVec2::new(x[0], x[1]), NVec2::new(v[0], v[1]), radius, m, [255, 255, 255])
}

pub fn rocket(x: [f64; 2], v: [f64; 2], stages: Vec<Stage>) -> Body {
    Body::new(
        BodyKind::Rocket(Propulsion::new(stages)),
        NVec2::new(x[0], x[1]),
        NVec2::new(v[0], v[1]),
        10.0,
        0.0,
        [255, 100, 255],
    )
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_matches_inverse_square_and_is_antiparallel() {
    let m_a = 5.0e22;
    let m_b = 2.0e24;
    let r = 3.0e7;
    let sys = System {
        bodies: vec![
            planet(BodyKind::DynamicPlanet, [0.0, 0.0], [0.0, 0.0], 0.0, m_a),
            planet(BodyKind::DynamicPlanet, [r, 0.0], [0.0, 0.0], 0.0, m_b),
        ],
        t: 0.0,
    };
    let forces = AccelSet::new().with(NewtonianGravity { g: G_SI, interference_eps: 0.0 });

    let mut acc = vec![NVec2::zeros(); 2];
    forces.accumulate_accels(&sys, &mut acc);

    assert_relative_eq!(acc[0].norm(), G_SI * m_b / (r * r), max_relative = 1e-12);
    assert_relative_eq!(acc[1].norm(), G_SI * m_a / (r * r), max_relative = 1e-12);

    // a points at the other body; forces are equal and opposite
    assert!(acc[0].x > 0.0 && acc[1].x < 0.0);
    let net = acc[0] * m_a + acc[1] * m_b;
    assert!(net.norm() < 1e-9 * (acc[0] * m_a).norm(), "net force not zero: {:?}", net);
}

#[test]
fn rocket_and_planet_attract_each_other() {
    let m_planet = 1.0e3;
    let m_rocket = 1.0e9;
    let r = 100.0;
    let sys = System {
        bodies: vec![
            planet(BodyKind::DynamicPlanet, [0.0, 0.0], [0.0, 0.0], 0.0, m_planet),
            Body { radius: 0.0, ..rocket([r, 0.0], [0.0, 0.0], vec![Stage::new(1.0, m_rocket, 0.0, 0.0)]) },
        ],
        t: 0.0,
    };
    let forces = AccelSet::new().with(NewtonianGravity { g: G_SI, interference_eps: 0.0 });

    let mut acc = vec![NVec2::zeros(); 2];
    forces.accumulate_accels(&sys, &mut acc);

    assert_relative_eq!(acc[0].norm(), G_SI * m_rocket / (r * r), max_relative = 1e-12);
    assert_relative_eq!(acc[1].norm(), G_SI * m_planet / (r * r), max_relative = 1e-12);
    assert!(acc[0].x > 0.0 && acc[1].x < 0.0);
    let net = acc[0] * m_planet + acc[1] * m_rocket;
    assert!(net.norm() < 1e-9 * (acc[0] * m_planet).norm(), "net force not zero: {:?}", net);
}

#[test]
fn coincident_point_masses_never_produce_nan() {
    let mut world = empty_world(test_params(), UpdateOrder::Simultaneous);
    let a = world
        .add_body(planet(BodyKind::DynamicPlanet, [0.0, 0.0], [1.0, 0.0], 0.0, 1.0e20))
        .unwrap();
    let b = world
        .add_body(planet(BodyKind::DynamicPlanet, [0.0, 0.0], [0.0, 0.0], 0.0, 1.0e20))
        .unwrap();
    let far = world
        .add_body(planet(BodyKind::DynamicPlanet, [1.0e6, 0.0], [0.0, 0.0], 0.0, 1.0))
        .unwrap();

    world.advance(1.0);

    for id in [a, b, far] {
        let body = world.body(id).unwrap();
        assert!(body.x.iter().chain(body.v.iter()).all(|c| c.is_finite()), "{id} is not finite");
    }
    assert_eq!(world.body(a).unwrap().x, NVec2::new(1.0, 0.0));
}

#[test]
fn static_planet_feels_nothing_and_never_moves() {
    let mut world = empty_world(test_params(), UpdateOrder::Simultaneous);
    let sun = world
        .add_body(planet(BodyKind::StaticPlanet, [0.0, 0.0], [0.0, 0.0], 1.0, 1.0))
        .unwrap();
    world
        .add_body(planet(BodyKind::DynamicPlanet, [1.0e6, 0.0], [0.0, 50.0], 1.0, 1.0e30))
        .unwrap();

    for _ in 0..100 {
        world.advance(1.0);
    }
    let s = world.body(sun).unwrap();
    assert_eq!(s.x, NVec2::zeros());
    assert_eq!(s.v, NVec2::zeros());
}

#[test]
fn circular_orbit_closes_after_one_period() {
    let m_central = 5.972e24;
    let r = 1.0e7;
    let v = (G_SI * m_central / r).sqrt();
    let period = 2.0 * std::f64::consts::PI * r / v;

    let mut world = empty_world(test_params(), UpdateOrder::Simultaneous);
    world
        .add_body(planet(BodyKind::StaticPlanet, [0.0, 0.0], [0.0, 0.0], 6.371e6, m_central))
        .unwrap();
    let moon = world
        .add_body(planet(BodyKind::DynamicPlanet, [r, 0.0], [0.0, v], 1.0, 1.0))
        .unwrap();

    let steps = 20_000;
    let dt = period / steps as f64;
    let mut max_radius_error: f64 = 0.0;
    for _ in 0..steps {
        world.advance(dt);
        let b = world.body(moon).unwrap();
        max_radius_error = max_radius_error.max((b.x.norm() - r).abs());
    }

    let end = world.body(moon).unwrap().x;
    assert!((end - NVec2::new(r, 0.0)).norm() < 1e-3 * r, "orbit did not close: {:?}", end);
    assert!(max_radius_error < 1e-2 * r, "orbit drifted by {max_radius_error}");
    assert_relative_eq!(world.elapsed(), period, max_relative = 1e-9);
}

// ==================================================================================
// Collision tests
// ==================================================================================

fn head_on_rocket(order: UpdateOrder) {
    let mut world = empty_world(Parameters { interference_eps: 1.0, ..test_params() }, order);
    let ground = world
        .add_body(planet(BodyKind::StaticPlanet, [0.0, 0.0], [0.0, 0.0], 1000.0, 1.0e20))
        .unwrap();
    let r = world
        .add_body(rocket([5000.0, 0.0], [-2000.0, 0.0], vec![Stage::new(1.0, 100.0, 0.0, 0.0)]))
        .unwrap();

    for _ in 0..50 {
        world.advance(0.1);
    }

    let b = world.body(r).unwrap();
    let g = world.body(ground).unwrap();
    let radius_sum = b.radius + g.radius;
    assert_abs_diff_eq!(b.x.norm(), radius_sum + test_params().collision_eps, epsilon = 1e-6);
    assert!(b.x.x > 0.0, "rocket should rest on the side it came from");
    assert_abs_diff_eq!(b.x.y, 0.0);
    assert_eq!(b.v, g.v);
    assert_eq!(b.v, NVec2::zeros());
}

#[test]
fn rocket_lands_on_static_planet() {
    head_on_rocket(UpdateOrder::Simultaneous);
}

#[test]
fn rocket_lands_on_static_planet_in_sequential_order() {
    head_on_rocket(UpdateOrder::Sequential);
}

#[test]
fn landed_rocket_rides_along_with_moving_planet() {
    let mut world = empty_world(Parameters { interference_eps: 1.0, ..test_params() }, UpdateOrder::Simultaneous);
    let p = world
        .add_body(planet(BodyKind::DynamicPlanet, [0.0, 0.0], [30.0, 0.0], 1000.0, 1.0e10))
        .unwrap();
    let r = world
        .add_body(rocket([0.0, -1005.0], [0.0, 0.0], vec![Stage::new(1.0, 100.0, 0.0, 0.0)]))
        .unwrap();

    world.advance(1.0);

    // no gravity across the contact, and a rocket never displaces a planet
    let planet_v = world.body(p).unwrap().v;
    assert_eq!(planet_v, NVec2::new(30.0, 0.0));
    // rocket took the planet's velocity; gravity of the touching pair is off
    assert_eq!(world.body(r).unwrap().v, planet_v);
}

#[test]
fn touching_rockets_both_snap_apart() {
    let mut world = empty_world(test_params(), UpdateOrder::Simultaneous);
    let light = world
        .add_body(rocket([0.0, 0.0], [5.0, 0.0], vec![Stage::new(1.0, 10.0, 0.0, 0.0)]))
        .unwrap();
    let heavy = world
        .add_body(rocket([15.0, 0.0], [-5.0, 0.0], vec![Stage::new(1.0, 1.0e4, 0.0, 0.0)]))
        .unwrap();

    world.advance(1.0);

    let eps = test_params().collision_eps;
    let a = world.body(light).unwrap();
    let b = world.body(heavy).unwrap();
    // each lands outside where the other was, then drifts with the other's velocity
    assert_eq!(a.v, NVec2::new(-5.0, 0.0));
    assert_eq!(b.v, NVec2::new(5.0, 0.0));
    assert_relative_eq!(a.x, NVec2::new(15.0 - 20.0 - eps - 5.0, 0.0), epsilon = 1e-9);
    assert_relative_eq!(b.x, NVec2::new(20.0 + eps + 5.0, 0.0), epsilon = 1e-9);
}

#[test]
fn lighter_planet_is_absorbed_by_heavier() {
    let mut world = empty_world(test_params(), UpdateOrder::Simultaneous);
    let heavy = world
        .add_body(planet(BodyKind::DynamicPlanet, [0.0, 0.0], [10.0, 0.0], 500.0, 1.0e12))
        .unwrap();
    let light = world
        .add_body(planet(BodyKind::DynamicPlanet, [600.0, 0.0], [-10.0, 5.0], 500.0, 1.0e6))
        .unwrap();

    world.advance(1.0);

    let h = world.body(heavy).unwrap().clone();
    let l = world.body(light).unwrap().clone();
    assert_eq!(h.v, NVec2::new(10.0, 0.0), "heavier body must be undisturbed");
    assert_eq!(h.x, NVec2::new(10.0, 0.0));
    assert_eq!(l.x, h.x);
    assert_eq!(l.v, h.v);
}

#[test]
fn equal_masses_resolve_towards_lower_id() {
    let mut world = empty_world(test_params(), UpdateOrder::Simultaneous);
    let first = world
        .add_body(planet(BodyKind::DynamicPlanet, [0.0, 0.0], [0.0, 1.0], 500.0, 1.0e6))
        .unwrap();
    let second = world
        .add_body(planet(BodyKind::DynamicPlanet, [100.0, 0.0], [0.0, -1.0], 500.0, 1.0e6))
        .unwrap();

    world.advance(1.0);

    let a = world.body(first).unwrap();
    let b = world.body(second).unwrap();
    assert_eq!(a.x, NVec2::new(0.0, 1.0));
    assert_eq!(b.x, a.x);
    assert!(first < second);
}

// ==================================================================================
// Rocket tests
// ==================================================================================

#[test]
fn staged_rocket_burns_then_stages_once() {
    let mut world = empty_world(test_params(), UpdateOrder::Simultaneous);
    let r = world
        .add_body(rocket(
            [0.0, 0.0],
            [0.0, 0.0],
            vec![Stage::new(10.0, 100.0, 1000.0, 1.0), Stage::new(5.0, 30.0, 1000.0, 1.0)],
        ))
        .unwrap();
    world.apply_thrust(r, &[Direction::Right]).unwrap();

    let fuel0 = |w: &World| w.body(r).unwrap().propulsion().unwrap().stages[0].fuel;
    let mut last_mass = world.body(r).unwrap().m;
    assert_eq!(last_mass, 100.0);

    while fuel0(&world) > 0.0 {
        world.advance(1.0);
        let m = world.body(r).unwrap().m;
        assert!(m < last_mass, "mass must drop while stage 0 has fuel");
        last_mass = m;
    }
    assert_eq!(fuel0(&world), 0.0);
    assert_relative_eq!(last_mass, 90.0, epsilon = 1e-9);

    for _ in 0..5 {
        world.advance(1.0);
        assert_eq!(world.body(r).unwrap().m, last_mass, "dry stage must not lose mass");
    }

    assert_eq!(world.advance_stage(r), Ok(true));
    assert_eq!(world.body(r).unwrap().m, 30.0);
    assert_eq!(world.body(r).unwrap().propulsion().unwrap().current, 1);

    assert_eq!(world.advance_stage(r), Ok(false));
    assert_eq!(world.body(r).unwrap().m, 30.0);
    assert_eq!(world.body(r).unwrap().propulsion().unwrap().current, 1);
}

#[test]
fn thrust_is_idempotent_and_diagonal_is_not_faster() {
    let stages = || vec![Stage::new(50.0, 100.0, 100.0, 0.0)];
    let mut world = empty_world(test_params(), UpdateOrder::Simultaneous);
    let straight = world.add_body(rocket([0.0, 0.0], [0.0, 0.0], stages())).unwrap();
    let diagonal = world.add_body(rocket([0.0, 1.0e9], [0.0, 0.0], stages())).unwrap();

    world.apply_thrust(straight, &[Direction::Up]).unwrap();
    world.apply_thrust(straight, &[Direction::Up]).unwrap();
    world.apply_thrust(diagonal, &[Direction::Up, Direction::Left]).unwrap();

    world.advance(1.0);

    let vs = world.body(straight).unwrap().v;
    let vd = world.body(diagonal).unwrap().v;
    assert_relative_eq!(vs, NVec2::new(0.0, -1.0), epsilon = 1e-9);
    assert_relative_eq!(vd.norm(), vs.norm(), epsilon = 1e-9);
    assert!(vd.x < 0.0 && vd.y < 0.0);
}

#[test]
fn thrust_commands_reject_wrong_targets() {
    let mut world = empty_world(test_params(), UpdateOrder::Simultaneous);
    let p = world
        .add_body(planet(BodyKind::DynamicPlanet, [0.0, 0.0], [0.0, 0.0], 1.0, 1.0))
        .unwrap();

    assert_eq!(world.apply_thrust(p, &[Direction::Up]), Err(SimError::NotARocket(p)));
    assert_eq!(world.advance_stage(p), Err(SimError::NotARocket(p)));
    assert_eq!(world.advance_stage(BodyId(42)), Err(SimError::UnknownBody(BodyId(42))));
}

// ==================================================================================
// World tests
// ==================================================================================

#[test]
fn non_positive_dt_is_skipped() {
    let mut world = empty_world(test_params(), UpdateOrder::Simultaneous);
    let b = world
        .add_body(planet(BodyKind::DynamicPlanet, [0.0, 0.0], [5.0, 0.0], 1.0, 1.0))
        .unwrap();
    world.advance(0.0);
    world.advance(-1.0);
    world.advance(f64::NAN);
    assert_eq!(world.body(b).unwrap().x, NVec2::zeros());
    assert_eq!(world.elapsed(), 0.0);
}

#[test]
fn spawns_join_at_the_next_safe_point() {
    let mut world = empty_world(test_params(), UpdateOrder::Simultaneous);
    world
        .add_body(planet(BodyKind::StaticPlanet, [0.0, 0.0], [0.0, 0.0], 1.0, 1.0))
        .unwrap();

    let id = world
        .spawn_body(BodyKind::DynamicPlanet, NVec2::new(1.0e6, 0.0), NVec2::zeros(), 1.0, 1.0, [0, 230, 230])
        .unwrap();
    assert_eq!(id, BodyId(1));
    assert!(world.body_snapshot(id).is_none());
    assert_eq!(world.pending_spawns(), 1);

    world.advance(1.0);
    assert_eq!(world.pending_spawns(), 0);
    let snap = world.body_snapshot(id).unwrap();
    assert!(snap.has_trail);
    assert_eq!(snap.color, [0, 230, 230]);
}

#[test]
fn spawned_ids_survive_direct_inserts() {
    let mut world = empty_world(test_params(), UpdateOrder::Simultaneous);
    let spawned = world
        .spawn_body(BodyKind::DynamicPlanet, NVec2::new(1.0e6, 0.0), NVec2::zeros(), 1.0, 7.0, [0; 3])
        .unwrap();
    let added = world
        .add_body(planet(BodyKind::DynamicPlanet, [-1.0e6, 0.0], [0.0, 0.0], 1.0, 99.0))
        .unwrap();
    world.commit_spawns();

    assert_ne!(spawned, added);
    assert_eq!(world.body(spawned).unwrap().m, 7.0);
    assert_eq!(world.body(added).unwrap().m, 99.0);
    assert_eq!(world.bodies().len(), 2);
}

#[test]
fn invalid_spawn_leaves_world_unchanged() {
    let mut world = empty_world(test_params(), UpdateOrder::Simultaneous);
    let bad_mass = world.spawn_body(BodyKind::DynamicPlanet, NVec2::zeros(), NVec2::zeros(), 1.0, -5.0, [0; 3]);
    assert!(matches!(bad_mass, Err(SimError::NonPositiveMass { .. })));

    let bad_radius = world.spawn_body(BodyKind::DynamicPlanet, NVec2::zeros(), NVec2::zeros(), -1.0, 5.0, [0; 3]);
    assert!(matches!(bad_radius, Err(SimError::NegativeRadius { .. })));

    let no_stages = world.spawn_body(BodyKind::Rocket(Propulsion::new(vec![])), NVec2::zeros(), NVec2::zeros(), 1.0, 5.0, [0; 3]);
    assert!(matches!(no_stages, Err(SimError::EmptyStages { .. })));

    world.commit_spawns();
    assert!(world.bodies().is_empty());
}

#[test]
fn launched_body_starts_under_the_cursor() {
    let mut world = empty_world(test_params(), UpdateOrder::Simultaneous);
    world.zoom(-12.0);
    world.pan(NVec2::new(35.0, -80.0));

    let from = NVec2::new(420.0, 310.0);
    let to = NVec2::new(400.0, 300.0);
    let id = world.launch(from, to).unwrap();
    world.commit_spawns();

    let body = world.body(id).unwrap();
    assert_eq!(body.name.as_deref(), Some("Spawned Planet №1"));
    assert_relative_eq!(body.v, NVec2::new(20.0, 10.0) * world.launch.velocity_per_pixel);
    assert_relative_eq!(body.screen, from, epsilon = 1e-6);
}

#[test]
fn trails_are_bounded_and_follow_the_viewport() {
    let params = test_params();
    let cap = params.trail_size;
    let mut world = empty_world(params, UpdateOrder::Simultaneous);
    let b = world
        .add_body(planet(BodyKind::DynamicPlanet, [0.0, 0.0], [1.0e6, 0.0], 1.0, 1.0).with_trail(cap))
        .unwrap();

    for _ in 0..(cap * 3) {
        world.advance(1.0);
    }
    world.zoom(5.0);
    world.pan(NVec2::new(-12.0, 7.0));

    let trail = world.body(b).unwrap().trail.clone().unwrap();
    assert_eq!(trail.len(), cap);
    for (screen, raw) in trail.screen_points().zip(trail.raw_points()) {
        assert_relative_eq!(*screen, world.viewport.scale(*raw), epsilon = 1e-9);
    }

    let snap = world.body_snapshot(b).unwrap();
    assert_eq!(snap.trail_points.len(), cap);
    assert_relative_eq!(*snap.trail_points.last().unwrap(), snap.screen_position, epsilon = 1e-9);
}

#[test]
fn nearest_body_prefers_closest_edge_and_first_on_ties() {
    // display_scale 1e-6 and unit scaling: 1 px per 1e6 m
    let mut world = empty_world(test_params(), UpdateOrder::Simultaneous);
    let a = world
        .add_body(planet(BodyKind::StaticPlanet, [100.0e6, 100.0e6], [0.0, 0.0], 0.0, 1.0))
        .unwrap();
    let b = world
        .add_body(planet(BodyKind::StaticPlanet, [140.0e6, 100.0e6], [0.0, 0.0], 0.0, 1.0))
        .unwrap();
    let r = world
        .add_body(rocket([120.0e6, 100.0e6], [0.0, 0.0], vec![Stage::new(1.0, 2.0, 0.0, 0.0)]))
        .unwrap();

    let mid = NVec2::new(120.0, 100.0);
    assert_eq!(world.nearest_body_within_radius(mid, 50.0, true), Some(a));
    assert_eq!(world.nearest_body_within_radius(mid, 50.0, false), Some(r));
    assert_eq!(world.nearest_body_within_radius(NVec2::new(139.0, 100.0), 50.0, true), Some(b));
    assert_eq!(world.nearest_body_within_radius(NVec2::new(500.0, 500.0), 50.0, true), None);
}

#[test]
fn sequential_order_differs_slightly_from_simultaneous() {
    let setup = |order| {
        let mut world = empty_world(test_params(), order);
        world
            .add_body(planet(BodyKind::DynamicPlanet, [-1.0e7, 0.0], [0.0, 0.0], 1.0, 1.0e24))
            .unwrap();
        let second = world
            .add_body(planet(BodyKind::DynamicPlanet, [1.0e7, 0.0], [0.0, 0.0], 1.0, 1.0e24))
            .unwrap();
        world.advance(100.0);
        world.body(second).unwrap().v
    };

    let simultaneous = setup(UpdateOrder::Simultaneous);
    let sequential = setup(UpdateOrder::Sequential);
    assert_ne!(simultaneous, sequential);
    assert_relative_eq!(simultaneous, sequential, max_relative = 1e-3);
}

#[test]
fn frame_runs_sub_steps_unless_paused() {
    let mut world = empty_world(test_params(), UpdateOrder::Simultaneous);
    world
        .add_body(planet(BodyKind::DynamicPlanet, [0.0, 0.0], [1.0, 0.0], 1.0, 1.0))
        .unwrap();
    let sub_steps = world.engine.sub_steps;

    assert_eq!(world.frame(1.0 / 60.0), sub_steps);
    assert_relative_eq!(world.elapsed(), world.engine.time_scale / 60.0, max_relative = 1e-9);

    world.engine.toggle_pause();
    let t = world.elapsed();
    assert_eq!(world.frame(1.0 / 60.0), 0);
    assert_eq!(world.elapsed(), t);
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn scenario_yaml_builds_world() {
    let cfg = ScenarioConfig::from_yaml_str(
        r#"
engine:
  update_order: "sequential"
bodies:
  - name: "Earth"
    kind: "static_planet"
    x: [7.5e8, 4.5e8]
    m: 5.972e24
    radius: 6.371e6
  - name: "Rocket"
    kind: "rocket"
    x: [8.5e8, 4.5e8]
    radius: 50.0
    stages:
      - { fuel: 100.0, mass: 1000.0, thrust: 5.0e4, fuel_flow: 1.0 }
"#,
    )
    .unwrap();
    let world = build_world(cfg).unwrap();

    assert_eq!(world.engine.update_order, UpdateOrder::Sequential);
    assert_eq!(world.bodies().len(), 2);
    assert_eq!(world.first_rocket(), Some(BodyId(1)));
    assert_eq!(world.body(BodyId(1)).unwrap().m, 1000.0);
    assert!(world.body(BodyId(0)).unwrap().trail.is_none());
    // Earth sits in the middle of a 1500x900 screen at zoom 1
    assert_relative_eq!(world.body(BodyId(0)).unwrap().screen, NVec2::new(750.0, 450.0), epsilon = 1e-9);
}

#[test]
fn scenario_rejects_invalid_bodies() {
    let missing_mass = ScenarioConfig::from_yaml_str(
        r#"
bodies:
  - kind: "dynamic_planet"
    x: [0.0, 0.0]
    radius: 1.0
"#,
    )
    .unwrap();
    assert!(matches!(build_world(missing_mass), Err(ConfigError::Body { .. })));

    let negative_mass = ScenarioConfig::from_yaml_str(
        r#"
bodies:
  - kind: "dynamic_planet"
    x: [0.0, 0.0]
    m: -1.0
    radius: 1.0
"#,
    )
    .unwrap();
    assert!(matches!(
        build_world(negative_mass),
        Err(ConfigError::Sim(SimError::NonPositiveMass { .. }))
    ));

    let empty_rocket = ScenarioConfig::from_yaml_str(
        r#"
bodies:
  - kind: "rocket"
    x: [0.0, 0.0]
    radius: 1.0
"#,
    )
    .unwrap();
    assert!(matches!(
        build_world(empty_rocket),
        Err(ConfigError::Sim(SimError::EmptyStages { .. }))
    ));
}

#[test]
fn bundled_scenarios_load() {
    let dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    for name in ["earth_moon.yaml", "binary.yaml"] {
        let cfg = ScenarioConfig::load(dir.join(name)).unwrap();
        let mut world = build_world(cfg).unwrap();
        assert!(world.first_rocket().is_some(), "{name} has no rocket");
        world.frame(1.0 / 60.0);
    }
}
