//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – frame settings (sub-steps, speed, update order, staging)
//! - [`ParametersConfig`] – physical constants and thresholds
//! - [`ViewportConfig`]   – screen size and initial zoom
//! - [`LaunchConfig`]     – template for bodies launched with the mouse
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section except `bodies` may be left out and falls back to defaults.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   sub_steps: 5
//!   time_scale: 2000.0
//!   update_order: "simultaneous"   # or "sequential"
//!
//! parameters:
//!   G: 6.674e-11
//!   display_scale: 1.0e-6
//!
//! viewport:
//!   width: 1500
//!   height: 900
//!
//! bodies:
//!   - name: "Earth"
//!     kind: "static_planet"
//!     x: [7.5e8, 4.5e8]
//!     m: 5.972e24
//!     radius: 6.371e6
//!     color: [100, 100, 255]
//!   - name: "Rocket"
//!     kind: "rocket"
//!     x: [8.56e8, 4.5e8]
//!     radius: 50.0
//!     stages:
//!       - { fuel: 150000.0, mass: 241000.0, thrust: 2.8e8, fuel_flow: 400.0 }
//! ```
//!
//! The scenario builder maps this into a runtime `World`, validating every
//! body on the way.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::simulation::engine::Engine;
use crate::simulation::params::{Parameters, G_SI};

/// Order in which bodies are evaluated within one sub-step
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateOrder {
    #[serde(rename = "simultaneous")] // every body reads the state at the start of the sub-step
    #[default]
    Simultaneous,

    #[serde(rename = "sequential")] // bodies move one by one in list order; later bodies see moved ones
    Sequential,
}

/// Frame-level engine configuration
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub sub_steps: u32, // physics sub-steps per rendered frame
    pub time_scale: f64, // simulated seconds per real second
    pub time_scale_step: f64, // speed change per key press
    pub max_time_scale: f64, // upper speed limit
    pub update_order: UpdateOrder,
    pub auto_stage: bool, // drop an empty stage automatically
}

impl Default for EngineConfig {
    fn default() -> Self {
        let e = Engine::default();
        Self {
            sub_steps: e.sub_steps,
            time_scale: e.time_scale,
            time_scale_step: e.time_scale_step,
            max_time_scale: e.max_time_scale,
            update_order: e.update_order,
            auto_stage: e.auto_stage,
        }
    }
}

/// Physical constants and thresholds
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub display_scale: f64, // meters -> display units
    pub interference_eps: f64, // contact buffer distance (m)
    pub collision_eps: f64, // landing gap (m)
    pub max_velocity: f64, // rocket thrust ceiling (m/s)
    pub trail_size: usize, // points per trail
    pub min_draw_radius: f64, // px
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            g: G_SI,
            display_scale: p.display_scale,
            interference_eps: p.interference_eps,
            collision_eps: p.collision_eps,
            max_velocity: p.max_velocity,
            trail_size: p.trail_size,
            min_draw_radius: p.min_draw_radius,
        }
    }
}

/// Screen size and initial zoom
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
    pub zoom_level: f64,
    pub delta_zoom: f64, // zoom change per scroll tick
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1500.0,
            height: 900.0,
            zoom_level: 1.0,
            delta_zoom: 0.1,
        }
    }
}

/// Template for bodies launched by dragging on screen
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LaunchConfig {
    pub radius: f64, // m
    pub mass: f64, // kg
    pub velocity_per_pixel: f64, // launch speed per pixel of drag (m/s)
    pub color: [u8; 3],
    pub trail: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            radius: 1.5e6,
            mass: 4.0e22,
            velocity_per_pixel: 15.0,
            color: [0, 230, 230],
            trail: true,
        }
    }
}

/// Which kind of body a [`BodyConfig`] describes
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKindConfig {
    #[serde(rename = "static_planet")]
    StaticPlanet,
    #[serde(rename = "dynamic_planet")]
    DynamicPlanet,
    #[serde(rename = "rocket")]
    Rocket,
}

/// One rocket stage
#[derive(Deserialize, Debug, Clone)]
pub struct StageConfig {
    pub fuel: f64, // fuel mass (kg)
    pub mass: f64, // structure + fuel (kg)
    pub thrust: f64, // max thrust (N)
    pub fuel_flow: f64, // kg/s at full thrust
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: Option<String>,
    pub kind: BodyKindConfig,
    pub x: [f64; 2], // initial position (m)
    #[serde(default)]
    pub v: [f64; 2], // initial velocity (m/s), ignored for static planets
    pub m: Option<f64>, // mass (kg), required for planets, taken from stage 0 for rockets
    pub radius: f64, // m
    #[serde(default = "default_color")]
    pub color: [u8; 3],
    #[serde(default = "default_trail")]
    pub trail: bool, // ignored for static planets
    #[serde(default)]
    pub stages: Vec<StageConfig>, // rockets only
}

fn default_color() -> [u8; 3] {
    [255, 255, 255]
}

fn default_trail() -> bool {
    true
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub launch: LaunchConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
