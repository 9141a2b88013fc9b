//! The world: bodies, physics settings and the viewport behind one interface
//!
//! Hosts drive it once per frame:
//! - feed input with [`World::apply_thrust`], [`World::advance_stage`],
//!   [`World::pan`], [`World::zoom`], [`World::launch`]
//! - call [`World::frame`] (or [`World::advance`] per sub-step)
//! - draw from [`World::snapshots`]
//!
//! Bodies spawned at runtime are queued and only join the body list at the
//! start of the next sub-step or at the end of a frame, never while the list
//! is being stepped.

use log::{debug, info, warn};

use crate::configuration::config::LaunchConfig;
use crate::error::SimError;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::{euler_step, StepOptions};
use crate::simulation::params::Parameters;
use crate::simulation::rocket::{self, Direction};
use crate::simulation::states::{Body, BodyId, BodyKind, NVec2, Rgb, System};
use crate::visualization::viewport::Viewport;

/// Everything the drawing side needs for one body
#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub name: String,
    pub is_rocket: bool,
    pub screen_position: NVec2,
    pub radius: f64, // m
    pub screen_radius: f64, // px, never below min_draw_radius
    pub color: Rgb,
    pub has_trail: bool,
    pub trail_points: Vec<NVec2>,
}

pub struct World {
    pub system: System,
    pub parameters: Parameters,
    pub engine: Engine,
    pub viewport: Viewport,
    pub launch: LaunchConfig,
    forces: AccelSet,
    pending: Vec<Body>,
    spawned: usize,
}

impl World {
    pub fn new(parameters: Parameters, engine: Engine, viewport: Viewport, launch: LaunchConfig) -> Self {
        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            interference_eps: parameters.interference_eps,
        });
        Self {
            system: System::default(),
            parameters,
            engine,
            viewport,
            launch,
            forces,
            pending: Vec::new(),
            spawned: 0,
        }
    }

    /// Insert a body right away. Meant for world setup, before stepping starts.
    /// Queued spawns are committed first so their ids stay valid
    pub fn add_body(&mut self, body: Body) -> Result<BodyId, SimError> {
        body.validate()?;
        self.commit_spawns();
        let id = BodyId(self.system.bodies.len());
        self.insert(body, id);
        Ok(id)
    }

    /// Queue a new body. It is validated now and appended at the next safe
    /// point; the returned id becomes valid once it has been appended
    pub fn spawn_body(
        &mut self,
        kind: BodyKind,
        position: NVec2,
        velocity: NVec2,
        radius: f64,
        mass: f64,
        color: Rgb,
    ) -> Result<BodyId, SimError> {
        let body = Body::new(kind, position, velocity, radius, mass, color)
            .with_trail(self.parameters.trail_size);
        self.queue(body)
    }

    fn queue(&mut self, mut body: Body) -> Result<BodyId, SimError> {
        if let Err(e) = body.validate() {
            warn!("spawn rejected: {e}");
            return Err(e);
        }
        let id = BodyId(self.system.bodies.len() + self.pending.len());
        body.id = id;
        debug!("queued {} at {:?}", body.display_name(), body.x);
        self.pending.push(body);
        Ok(id)
    }

    /// Append every queued body to the body list
    pub fn commit_spawns(&mut self) {
        for body in std::mem::take(&mut self.pending) {
            let id = BodyId(self.system.bodies.len());
            self.insert(body, id);
        }
    }

    fn insert(&mut self, mut body: Body, id: BodyId) {
        body.id = id;
        let raw = body.x * self.parameters.display_scale;
        body.screen = self.viewport.scale(raw);
        if let Some(trail) = body.trail.as_mut() {
            trail.push(body.screen, raw);
        }
        info!("added {} ({}) with mass {:e} kg", body.display_name(), body.kind.label(), body.m);
        self.system.bodies.push(body);
    }

    /// Launch a dynamic planet from a mouse drag, using the launch template.
    /// It starts under `from` and flies opposite to the drag
    pub fn launch(&mut self, from: NVec2, to: NVec2) -> Result<BodyId, SimError> {
        let position = self.viewport.unscale(from) / self.parameters.display_scale;
        let velocity = (from - to) * self.launch.velocity_per_pixel;
        let mut body = Body::new(
            BodyKind::DynamicPlanet,
            position,
            velocity,
            self.launch.radius,
            self.launch.mass,
            self.launch.color,
        )
        .with_name(format!("Spawned Planet №{}", self.spawned + 1));
        if self.launch.trail {
            body = body.with_trail(self.parameters.trail_size);
        }
        let id = self.queue(body)?;
        self.spawned += 1;
        Ok(id)
    }

    /// Advance every body by one sub-step of `dt` seconds.
    /// Skipped entirely when `dt <= 0`
    pub fn advance(&mut self, dt: f64) {
        if !(dt > 0.0) || !dt.is_finite() {
            return;
        }
        self.commit_spawns();
        let opts = StepOptions {
            order: self.engine.update_order,
            auto_stage: self.engine.auto_stage,
        };
        euler_step(&mut self.system, &self.forces, &self.parameters, opts, dt);
        self.refresh_display(true);
    }

    /// Run one rendered frame that took `frame_dt` real seconds.
    /// Returns the number of sub-steps taken
    pub fn frame(&mut self, frame_dt: f64) -> u32 {
        let dt = self.engine.sub_step_dt(frame_dt);
        let mut steps = 0;
        if dt > 0.0 && dt.is_finite() {
            for _ in 0..self.engine.sub_steps {
                self.advance(dt);
                steps += 1;
            }
        }
        self.commit_spawns();
        if steps == 0 {
            self.refresh_display(false);
        }
        steps
    }

    /// Recompute screen positions from simulation positions; moving bodies
    /// also leave a trail point when `push_trail` is set
    fn refresh_display(&mut self, push_trail: bool) {
        let scale = self.parameters.display_scale;
        for b in self.system.bodies.iter_mut() {
            let raw = b.x * scale;
            b.screen = self.viewport.scale(raw);
            if push_trail && !b.kind.is_static() {
                if let Some(trail) = b.trail.as_mut() {
                    trail.push(b.screen, raw);
                }
            }
        }
    }

    /// Set the held thrust directions of a rocket. Reapplying the same set
    /// changes nothing
    pub fn apply_thrust(&mut self, id: BodyId, directions: &[Direction]) -> Result<(), SimError> {
        let body = self.system.get_mut(id).ok_or(SimError::UnknownBody(id))?;
        let p = body.propulsion_mut().ok_or(SimError::NotARocket(id))?;
        p.heading = rocket::heading(directions);
        Ok(())
    }

    /// Move a rocket to its next stage. `Ok(false)` on the last stage
    pub fn advance_stage(&mut self, id: BodyId) -> Result<bool, SimError> {
        let body = self.system.get_mut(id).ok_or(SimError::UnknownBody(id))?;
        if !body.kind.is_rocket() {
            return Err(SimError::NotARocket(id));
        }
        Ok(rocket::change_stage(body))
    }

    pub fn pan(&mut self, delta: NVec2) {
        self.viewport.pan(delta, &mut self.system.bodies);
        self.refresh_display(false);
    }

    pub fn zoom(&mut self, steps: f64) {
        self.viewport.update(steps, &mut self.system.bodies);
        self.refresh_display(false);
    }

    pub fn reset_pan(&mut self) {
        self.viewport.reset_pan(&mut self.system.bodies);
        self.refresh_display(false);
    }

    fn screen_radius(&self, b: &Body) -> f64 {
        (b.radius * self.parameters.display_scale / self.viewport.scaling()).max(self.parameters.min_draw_radius)
    }

    pub fn body_snapshot(&self, id: BodyId) -> Option<BodySnapshot> {
        let b = self.system.get(id)?;
        Some(BodySnapshot {
            id: b.id,
            name: b.display_name(),
            is_rocket: b.kind.is_rocket(),
            screen_position: b.screen,
            radius: b.radius,
            screen_radius: self.screen_radius(b),
            color: b.color,
            has_trail: b.trail.is_some(),
            trail_points: b
                .trail
                .as_ref()
                .map(|t| t.screen_points().copied().collect())
                .unwrap_or_default(),
        })
    }

    pub fn snapshots(&self) -> impl Iterator<Item = BodySnapshot> + '_ {
        self.system.bodies.iter().filter_map(|b| self.body_snapshot(b.id))
    }

    /// Body whose drawn disc edge is closest to `screen_point`, if that edge
    /// is within `max_distance` pixels. On a tie the first body wins
    pub fn nearest_body_within_radius(&self, screen_point: NVec2, max_distance: f64, exclude_rockets: bool) -> Option<BodyId> {
        let mut best = None;
        let mut best_distance = max_distance;
        for b in &self.system.bodies {
            if exclude_rockets && b.kind.is_rocket() {
                continue;
            }
            let edge = (b.screen - screen_point).norm()
                - b.radius * self.parameters.display_scale / self.viewport.scaling();
            if edge < best_distance {
                best_distance = edge;
                best = Some(b.id);
            }
        }
        best
    }

    /// Distance from the center of `from` to the surface of `to`, in meters
    pub fn surface_distance(&self, from: BodyId, to: BodyId) -> Option<f64> {
        let a = self.system.get(from)?;
        let b = self.system.get(to)?;
        Some((a.x - b.x).norm() - b.radius)
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.system.get(id)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn pending_spawns(&self) -> usize {
        self.pending.len()
    }

    /// First rocket in the body list, the one the keyboard steers
    pub fn first_rocket(&self) -> Option<BodyId> {
        self.system.bodies.iter().find(|b| b.kind.is_rocket()).map(|b| b.id)
    }

    /// Simulated seconds since the world was built
    pub fn elapsed(&self) -> f64 {
        self.system.t
    }
}

/// Render simulated seconds as `Dd HHh MMm SSs`
pub fn format_elapsed(secs: f64) -> String {
    let total = secs.max(0.0).floor() as u64;
    let days = total / 86_400;
    let hours = total / 3_600 % 24;
    let minutes = total / 60 % 60;
    let seconds = total % 60;
    format!("{days}d {hours:0>2}h {minutes:0>2}m {seconds:0>2}s")
}
