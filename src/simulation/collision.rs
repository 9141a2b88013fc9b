//! Contact detection and the collision policy
//!
//! Two bodies are in contact when their centers are closer than the sum of
//! their radii plus `interference_eps`. A contact replaces gravity for that
//! pair. Who gives way:
//! - static planets never move and win against everything
//! - a rocket always gives way, to planets and to other rockets alike
//! - a planet is never displaced by a rocket
//! - between planets the lighter one gives way; on equal mass the lower id wins
//!
//! A planet that gives way is pinned onto the winner (same position and
//! velocity). A rocket is placed just outside the other body along the line
//! between the centers and takes its velocity, so two touching rockets both
//! move apart from the snapshot positions

use log::debug;

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyId, BodyKind, NVec2, System};

/// Normal used when two centers coincide and the direction is undefined
pub const FALLBACK_NORMAL: NVec2 = NVec2::new(0.0, -1.0);

/// State a body must take after resolving a contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub with: BodyId,
    pub x: NVec2,
    pub v: NVec2,
}

/// Whether a contact with `o` can displace `b`. Rockets never push planets
pub fn interacts(b: &Body, o: &Body) -> bool {
    b.kind.is_rocket() || !o.kind.is_rocket()
}

pub fn in_contact(b: &Body, o: &Body, r: f64, interference_eps: f64) -> bool {
    r < b.radius + o.radius + interference_eps
}

/// Whether `b` has to give way to `o` when they touch
pub fn yields_to(b: &Body, o: &Body) -> bool {
    match (&b.kind, &o.kind) {
        (BodyKind::StaticPlanet, _) => false,
        (_, BodyKind::StaticPlanet) => true,
        (BodyKind::Rocket(_), _) => true,
        (BodyKind::DynamicPlanet, BodyKind::Rocket(_)) => false,
        _ => o.m > b.m || (o.m == b.m && o.id < b.id),
    }
}

/// Resolve every contact of body `i` against `sys`.
/// When several bodies touch it, the last one in list order decides
pub fn resolve(i: usize, sys: &System, params: &Parameters) -> Option<Contact> {
    let bi = &sys.bodies[i];
    if bi.kind.is_static() {
        return None;
    }

    let mut contact = None;
    for (j, bj) in sys.bodies.iter().enumerate() {
        if j == i || !interacts(bi, bj) {
            continue;
        }

        let d = bi.x - bj.x;
        let r = d.norm();
        if !in_contact(bi, bj, r, params.interference_eps) || !yields_to(bi, bj) {
            continue;
        }

        let x = match bi.kind {
            BodyKind::Rocket(_) => {
                let n = if r > 0.0 { d / r } else { FALLBACK_NORMAL };
                bj.x + n * (bj.radius + bi.radius + params.collision_eps)
            }
            _ => bj.x,
        };
        debug!("{} touches {}", bi.display_name(), bj.display_name());
        contact = Some(Contact { with: bj.id, x, v: bj.v });
    }
    contact
}
