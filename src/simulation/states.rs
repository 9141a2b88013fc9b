//! Core state types for the orbital simulation
//!
//! Defines the 2D body/system structs:
//! - `Body`   one point mass with a `BodyKind` tag (static planet, dynamic planet, rocket)
//! - `Trail`  bounded history of where a body has been, in screen and display space
//! - `System` the list of bodies and the current simulation time `t`
//!
//! Positions are in meters and velocities in m/s. The display position of a
//! body is `x * display_scale`, which the viewport then projects to pixels.

use std::collections::VecDeque;
use std::fmt;

use nalgebra::Vector2;

use crate::error::SimError;

pub type NVec2 = Vector2<f64>;

/// Display color, RGB. Has no effect on physics
pub type Rgb = [u8; 3];

/// Stable handle of a body. Bodies are never removed, so the id is also the
/// index of the body inside `System::bodies`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub usize);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One propulsion segment of a rocket
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub fuel: f64,      // remaining fuel mass (kg)
    pub mass: f64,      // structural + fuel mass at ignition (kg)
    pub thrust: f64,    // maximum thrust force (N)
    pub fuel_flow: f64, // fuel burned per second at full thrust (kg/s)
}

impl Stage {
    pub fn new(fuel: f64, mass: f64, thrust: f64, fuel_flow: f64) -> Self {
        Self { fuel, mass, thrust, fuel_flow }
    }

    fn check(&self) -> Result<(), &'static str> {
        if !(self.mass > 0.0) {
            return Err("stage mass must be positive");
        }
        if !(self.fuel >= 0.0) {
            return Err("stage fuel must be non-negative");
        }
        if self.fuel >= self.mass {
            return Err("stage fuel must be lighter than the stage itself");
        }
        if !(self.thrust >= 0.0) || !(self.fuel_flow >= 0.0) {
            return Err("stage thrust and fuel flow must be non-negative");
        }
        Ok(())
    }
}

/// Rocket-only state: the stage stack and the thrust currently commanded
#[derive(Debug, Clone, PartialEq)]
pub struct Propulsion {
    pub stages: Vec<Stage>,
    pub current: usize,
    /// Combined direction of the held thrust keys, length 0 or 1
    pub heading: NVec2,
}

impl Propulsion {
    pub fn new(stages: Vec<Stage>) -> Self {
        Self {
            stages,
            current: 0,
            heading: NVec2::zeros(),
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stages[self.current]
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stages[self.current]
    }

    pub fn is_last_stage(&self) -> bool {
        self.current + 1 >= self.stages.len()
    }
}

/// Closed set of body behaviours, matched on by the integrator
#[derive(Debug, Clone, PartialEq)]
pub enum BodyKind {
    /// Never moves; only its screen position is refreshed
    StaticPlanet,
    /// Moves under gravity
    DynamicPlanet,
    /// Moves under gravity and its own thrust; never displaces a planet on contact
    Rocket(Propulsion),
}

impl BodyKind {
    pub fn is_static(&self) -> bool {
        matches!(self, BodyKind::StaticPlanet)
    }

    pub fn is_rocket(&self) -> bool {
        matches!(self, BodyKind::Rocket(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            BodyKind::StaticPlanet => "static planet",
            BodyKind::DynamicPlanet => "dynamic planet",
            BodyKind::Rocket(_) => "rocket",
        }
    }
}

/// Bounded history of past positions.
///
/// `raw` keeps display-space points (before the viewport) so that `screen`
/// can be rebuilt whenever the zoom or pan changes
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    cap: usize,
    screen: VecDeque<NVec2>,
    raw: VecDeque<NVec2>,
}

impl Trail {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            screen: VecDeque::with_capacity(cap),
            raw: VecDeque::with_capacity(cap),
        }
    }

    pub fn push(&mut self, screen: NVec2, raw: NVec2) {
        if self.cap == 0 {
            return;
        }
        if self.raw.len() == self.cap {
            self.screen.pop_front();
            self.raw.pop_front();
        }
        self.screen.push_back(screen);
        self.raw.push_back(raw);
    }

    /// Rebuild every screen point from its raw point
    pub fn reproject(&mut self, project: impl Fn(NVec2) -> NVec2) {
        for (s, r) in self.screen.iter_mut().zip(self.raw.iter()) {
            *s = project(*r);
        }
    }

    pub fn screen_points(&self) -> impl Iterator<Item = &NVec2> {
        self.screen.iter()
    }

    pub fn raw_points(&self) -> impl Iterator<Item = &NVec2> {
        self.raw.iter()
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub name: Option<String>,
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub a: NVec2, // acceleration (m/s^2), cleared after every sub-step
    pub m: f64, // mass (kg)
    pub radius: f64, // radius (m)
    pub color: Rgb,
    pub kind: BodyKind,
    pub screen: NVec2, // last projected screen position (px)
    pub trail: Option<Trail>,
}

impl Body {
    /// Build a body without a trail. Rockets take their mass from stage 0,
    /// whatever `m` says
    pub fn new(kind: BodyKind, x: NVec2, v: NVec2, radius: f64, m: f64, color: Rgb) -> Self {
        let m = match &kind {
            BodyKind::Rocket(p) => p.stages.first().map_or(m, |s| s.mass),
            _ => m,
        };
        let v = if kind.is_static() { NVec2::zeros() } else { v };
        Self {
            id: BodyId(0),
            name: None,
            x,
            v,
            a: NVec2::zeros(),
            m,
            radius,
            color,
            kind,
            screen: NVec2::zeros(),
            trail: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Static planets never get a trail since they never move
    pub fn with_trail(mut self, cap: usize) -> Self {
        if !self.kind.is_static() {
            self.trail = Some(Trail::new(cap));
        }
        self
    }

    pub fn display_name(&self) -> String {
        match &self.name {
            Some(n) => n.clone(),
            None => format!("{} {}", self.kind.label(), self.id),
        }
    }

    pub fn propulsion(&self) -> Option<&Propulsion> {
        match &self.kind {
            BodyKind::Rocket(p) => Some(p),
            _ => None,
        }
    }

    pub fn propulsion_mut(&mut self) -> Option<&mut Propulsion> {
        match &mut self.kind {
            BodyKind::Rocket(p) => Some(p),
            _ => None,
        }
    }

    /// Fail fast on anything that would make the integrator misbehave
    pub fn validate(&self) -> Result<(), SimError> {
        let name = self.display_name();
        if let BodyKind::Rocket(p) = &self.kind {
            if p.stages.is_empty() {
                return Err(SimError::EmptyStages { name });
            }
            for (index, stage) in p.stages.iter().enumerate() {
                stage
                    .check()
                    .map_err(|reason| SimError::InvalidStage { name: name.clone(), index, reason })?;
            }
        }
        if !(self.m > 0.0) || !self.m.is_finite() {
            return Err(SimError::NonPositiveMass { name, mass: self.m });
        }
        if !(self.radius >= 0.0) || !self.radius.is_finite() {
            return Err(SimError::NegativeRadius { name, radius: self.radius });
        }
        if !self.x.iter().chain(self.v.iter()).all(|c| c.is_finite()) {
            return Err(SimError::NonFiniteState { name });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // all bodies, indexed by BodyId
    pub t: f64, // simulated time (s)
}

impl System {
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.0)
    }
}
