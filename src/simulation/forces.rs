//! Acceleration contributors for the orbital engine
//!
//! Defines the acceleration trait, the set that sums several terms, and
//! direct Newtonian gravity. Every term is evaluated against a read-only
//! `System`, one body at a time, so the integrator decides whether all bodies
//! see the same snapshot or each body sees the ones already moved

use crate::simulation::collision;
use crate::simulation::states::{NVec2, System};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total acceleration felt by body `i`
    pub fn accel_on(&self, i: usize, sys: &System) -> NVec2 {
        let mut a = NVec2::zeros();
        for term in &self.terms {
            term.acceleration(i, sys, &mut a);
        }
        a
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` is overwritten; static bodies always get zero
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec2]) {
        for (i, a) in out.iter_mut().enumerate() {
            *a = if sys.bodies[i].kind.is_static() {
                NVec2::zeros()
            } else {
                self.accel_on(i, sys)
            };
        }
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add the contribution felt by body `i` into `out`
pub trait Acceleration {
    fn acceleration(&self, i: usize, sys: &System, out: &mut NVec2);
}

/// Direct Newtonian gravity without softening.
///
/// Every body pulls on every other one, rockets included. Pairs closer than
/// the contact threshold are skipped and handed to the collision policy; so
/// are coincident centers, where the direction is undefined
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub interference_eps: f64, // extra contact distance
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, i: usize, sys: &System, out: &mut NVec2) {
        let bi = &sys.bodies[i];

        for (j, bj) in sys.bodies.iter().enumerate() {
            if j == i {
                continue;
            }

            // d points from j to i, so the pull is along -d
            let d = bi.x - bj.x;
            let r = d.norm();
            if r == 0.0 || collision::in_contact(bi, bj, r, self.interference_eps) {
                continue;
            }

            // a_i += -G * m_j * d / |d|^3
            *out += d * (-self.g * bj.m / (r * r * r));
        }
    }
}
