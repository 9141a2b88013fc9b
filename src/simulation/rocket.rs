//! Rocket steering, fuel burn and staging
//!
//! Thrust input is a set of held cardinal directions. The set is reduced to a
//! heading of length 0 or 1 when it is applied; every sub-step the heading is
//! turned into an acceleration `thrust / mass` and fuel is burned for it.
//! Staging is one-way and only moves forward on an explicit command, unless
//! auto-staging is switched on.

use log::{info, warn};

use crate::simulation::states::{Body, NVec2, Propulsion};

/// Cardinal thrust directions. Screen space, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn unit(self) -> NVec2 {
        match self {
            Direction::Up => NVec2::new(0.0, -1.0),
            Direction::Down => NVec2::new(0.0, 1.0),
            Direction::Left => NVec2::new(-1.0, 0.0),
            Direction::Right => NVec2::new(1.0, 0.0),
        }
    }
}

/// Sum the held directions, each counted once. A diagonal is scaled down to
/// unit length so it is not faster than a single axis
pub fn heading(directions: &[Direction]) -> NVec2 {
    let mut sum = NVec2::zeros();
    for dir in Direction::ALL {
        if directions.contains(&dir) {
            sum += dir.unit();
        }
    }
    if sum.x.abs() == 1.0 && sum.y.abs() == 1.0 {
        sum /= 2f64.sqrt();
    }
    sum
}

/// Thrust acceleration for this sub-step, burning the fuel it needs.
///
/// Returns zero when nothing is held, the stage is dry, or the rocket is
/// already faster than `max_velocity`
pub fn thrust(body: &mut Body, dt: f64, max_velocity: f64, auto_stage: bool) -> NVec2 {
    let speed = body.v.norm();
    let mass = body.m;
    let Some(p) = body.propulsion_mut() else {
        return NVec2::zeros();
    };

    let draw = p.heading.norm();
    if draw == 0.0 {
        return NVec2::zeros();
    }
    if speed > max_velocity {
        warn!("rocket above {} m/s, thrust suppressed", max_velocity);
        return NVec2::zeros();
    }
    if p.stage().fuel <= 0.0 {
        if auto_stage && !p.is_last_stage() {
            body.m = next_stage(p);
        }
        return NVec2::zeros();
    }

    // acceleration uses the mass at the start of the burn
    let heading = p.heading;
    let stage = p.stage_mut();
    let accel = heading * (stage.thrust / mass);

    let burn = (stage.fuel_flow * draw * dt).min(stage.fuel).max(0.0);
    stage.fuel -= burn;
    body.m = (mass - burn).max(0.0);
    accel
}

/// Move to the next stage and return its nominal mass
fn next_stage(p: &mut Propulsion) -> f64 {
    p.current += 1;
    info!("stage {} of {} ignited", p.current + 1, p.stages.len());
    p.stage().mass
}

/// Advance to the next stage. A no-op on the last stage.
/// Returns whether the stage changed
pub fn change_stage(body: &mut Body) -> bool {
    let Some(p) = body.propulsion_mut() else {
        return false;
    };
    if p.is_last_stage() {
        return false;
    }
    body.m = next_stage(p);
    true
}
