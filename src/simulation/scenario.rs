//! Build fully-initialized worlds from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `World`
//! containing:
//! - engine settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - the viewport
//! - every body, validated and placed at t = 0
//!
//! Any invalid body aborts the build; nothing half-built is returned

use log::info;

use crate::configuration::config::{BodyConfig, BodyKindConfig, ScenarioConfig};
use crate::error::ConfigError;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyKind, NVec2, Propulsion, Stage};
use crate::simulation::world::World;
use crate::visualization::viewport::Viewport;

pub fn build_world(cfg: ScenarioConfig) -> Result<World, ConfigError> {
    // Parameters (runtime) from ParametersConfig
    let p_cfg = cfg.parameters;
    let parameters = Parameters {
        g: p_cfg.g,
        display_scale: p_cfg.display_scale,
        interference_eps: p_cfg.interference_eps,
        collision_eps: p_cfg.collision_eps,
        max_velocity: p_cfg.max_velocity,
        trail_size: p_cfg.trail_size,
        min_draw_radius: p_cfg.min_draw_radius,
    };

    // Engine (runtime) from EngineConfig
    let e_cfg = cfg.engine;
    let engine = Engine {
        sub_steps: e_cfg.sub_steps,
        time_scale: e_cfg.time_scale,
        base_time_scale: e_cfg.time_scale,
        time_scale_step: e_cfg.time_scale_step,
        max_time_scale: e_cfg.max_time_scale.max(e_cfg.time_scale),
        paused: false,
        update_order: e_cfg.update_order,
        auto_stage: e_cfg.auto_stage,
    };

    let v_cfg = cfg.viewport;
    let viewport = Viewport::new(v_cfg.width, v_cfg.height, v_cfg.zoom_level, v_cfg.delta_zoom);

    let trail_size = parameters.trail_size;
    let mut world = World::new(parameters, engine, viewport, cfg.launch);

    // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
    for bc in &cfg.bodies {
        let body = build_body(bc, trail_size)?;
        world.add_body(body)?;
    }

    info!("world built with {} bodies", world.bodies().len());
    Ok(world)
}

fn build_body(bc: &BodyConfig, trail_size: usize) -> Result<Body, ConfigError> {
    let name = bc.name.clone().unwrap_or_else(|| "unnamed".to_string());
    let kind = match bc.kind {
        BodyKindConfig::StaticPlanet => BodyKind::StaticPlanet,
        BodyKindConfig::DynamicPlanet => BodyKind::DynamicPlanet,
        BodyKindConfig::Rocket => {
            let stages = bc
                .stages
                .iter()
                .map(|s| Stage::new(s.fuel, s.mass, s.thrust, s.fuel_flow))
                .collect();
            BodyKind::Rocket(Propulsion::new(stages))
        }
    };

    if !kind.is_rocket() && !bc.stages.is_empty() {
        return Err(ConfigError::Body { name, reason: "only rockets have stages" });
    }
    let m = match (&kind, bc.m) {
        (BodyKind::Rocket(_), m) => m.unwrap_or(0.0),
        (_, Some(m)) => m,
        (_, None) => return Err(ConfigError::Body { name, reason: "planets need a mass `m`" }),
    };

    let mut body = Body::new(
        kind,
        NVec2::new(bc.x[0], bc.x[1]),
        NVec2::new(bc.v[0], bc.v[1]),
        bc.radius,
        m,
        bc.color,
    );
    if let Some(n) = &bc.name {
        body = body.with_name(n.clone());
    }
    if bc.trail {
        body = body.with_trail(trail_size);
    }
    Ok(body)
}
