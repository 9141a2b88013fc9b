use std::time::Instant;

use crate::configuration::config::{LaunchConfig, UpdateOrder};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyKind, NVec2, System};
use crate::simulation::world::World;
use crate::visualization::viewport::Viewport;

/// Deterministic ring of dynamic planets around a heavy static one
fn ring_bodies(n: usize) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(n + 1);
    bodies.push(Body::new(BodyKind::StaticPlanet, NVec2::zeros(), NVec2::zeros(), 6.4e6, 6.0e24, [100, 100, 255]));

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let r = 4.0e7 + (i_f * 0.37).sin().abs() * 3.0e8;
        let phi = i_f * 0.13;
        let x = NVec2::new(r * phi.cos(), r * phi.sin());
        let speed = (6.674e-11 * 6.0e24 / r).sqrt();
        let v = NVec2::new(-phi.sin(), phi.cos()) * speed;
        bodies.push(Body::new(BodyKind::DynamicPlanet, x, v, 1.0e3, 1.0e10, [200, 200, 200]).with_trail(100));
    }
    bodies
}

fn world_with(n: usize, order: UpdateOrder) -> World {
    let engine = Engine { update_order: order, ..Engine::default() };
    let mut world = World::new(Parameters::default(), engine, Viewport::new(1500.0, 900.0, 1.0, 0.1), LaunchConfig::default());
    for b in ring_bodies(n) {
        if let Err(e) = world.add_body(b) {
            println!("skipping body: {e}");
        }
    }
    world
}

pub fn bench_gravity() {
    // Different system sizes to test
    let ns = [100, 200, 400, 800, 1600];

    for n in ns {
        let sys = System { bodies: ring_bodies(n), t: 0.0 };
        let p = Parameters::default();
        let forces = AccelSet::new().with(NewtonianGravity {
            g: p.g,
            interference_eps: p.interference_eps,
        });
        let mut out = vec![NVec2::zeros(); sys.bodies.len()];

        // Warm up
        forces.accumulate_accels(&sys, &mut out);

        let t0 = Instant::now();
        forces.accumulate_accels(&sys, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct gravity = {dt:8.6} s");
    }
}

pub fn bench_step() {
    let ns = [100, 200, 400, 800];
    let steps = 20;

    for n in ns {
        let mut simultaneous = world_with(n, UpdateOrder::Simultaneous);
        let mut sequential = world_with(n, UpdateOrder::Sequential);

        let t0 = Instant::now();
        for _ in 0..steps {
            simultaneous.advance(10.0);
        }
        let dt_sim = t0.elapsed().as_secs_f64() / steps as f64;

        let t1 = Instant::now();
        for _ in 0..steps {
            sequential.advance(10.0);
        }
        let dt_seq = t1.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, simultaneous step = {dt_sim:8.6} s, sequential step = {dt_seq:8.6} s");
    }
}
