//! Fixed-step integrator for the orbital system
//!
//! One sub-step of semi-implicit Euler, driven by an `AccelSet`, the collision
//! policy and rocket thrust. Two evaluation orders are supported:
//! - `Simultaneous`: gravity and contacts for every body are computed from
//!   the state at the start of the step, then all bodies move
//! - `Sequential`: bodies are evaluated and moved one at a time in list
//!   order, so later bodies see earlier ones already moved

use crate::configuration::config::UpdateOrder;
use crate::simulation::collision::{self, Contact};
use crate::simulation::forces::AccelSet;
use crate::simulation::params::Parameters;
use crate::simulation::rocket;
use crate::simulation::states::{Body, NVec2, System};

/// Per-step switches that are not physical constants
#[derive(Debug, Clone, Copy)]
pub struct StepOptions {
    pub order: UpdateOrder,
    pub auto_stage: bool,
}

/// Advance the system by one sub-step of length `dt`.
/// A step with `dt <= 0` (or a non-finite `dt`) is skipped entirely
pub fn euler_step(sys: &mut System, forces: &AccelSet, params: &Parameters, opts: StepOptions, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 || !(dt > 0.0) || !dt.is_finite() {
        return;
    }

    match opts.order {
        UpdateOrder::Simultaneous => {
            // a[i] and contact[i] both read the positions of x_n
            let mut accels = vec![NVec2::zeros(); n];
            forces.accumulate_accels(&*sys, &mut accels);
            let contacts: Vec<Option<Contact>> =
                (0..n).map(|i| collision::resolve(i, &*sys, params)).collect();

            for ((b, a), contact) in sys.bodies.iter_mut().zip(accels).zip(contacts) {
                apply(b, a, contact, params, opts, dt);
            }
        }
        UpdateOrder::Sequential => {
            for i in 0..n {
                if sys.bodies[i].kind.is_static() {
                    continue;
                }
                let a = forces.accel_on(i, &*sys);
                let contact = collision::resolve(i, &*sys, params);
                apply(&mut sys.bodies[i], a, contact, params, opts, dt);
            }
        }
    }

    sys.t += dt;
}

/// Contact override, thrust, then kick and drift:
/// v_n+1 = v_n + dt a_n
/// x_n+1 = x_n + dt v_n+1
fn apply(b: &mut Body, a: NVec2, contact: Option<Contact>, params: &Parameters, opts: StepOptions, dt: f64) {
    if b.kind.is_static() {
        return;
    }

    if let Some(c) = contact {
        b.x = c.x;
        b.v = c.v;
    }

    b.a = a + rocket::thrust(b, dt, params.max_velocity, opts.auto_stage);
    b.v += dt * b.a;
    b.x += dt * b.v;
    b.a = NVec2::zeros();
}
