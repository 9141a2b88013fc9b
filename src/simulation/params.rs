//! Physical and numerical parameters for the simulation
//!
//! `Parameters` is built once from the scenario and handed to the world; it is
//! never mutated afterwards:
//! - gravitational constant `g`,
//! - `display_scale` converting meters into display units,
//! - contact thresholds (`interference_eps`, `collision_eps`),
//! - rocket velocity ceiling, trail length and minimum drawn radius

/// Standard gravitational constant (SI)
pub const G_SI: f64 = 6.674e-11;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub display_scale: f64, // meters -> display units
    pub interference_eps: f64, // extra contact distance (m)
    pub collision_eps: f64, // gap left when a rocket is snapped onto a surface (m)
    pub max_velocity: f64, // rockets stop thrusting above this speed (m/s)
    pub trail_size: usize, // max points per trail
    pub min_draw_radius: f64, // smallest radius handed to the drawing side (px)
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: G_SI,
            display_scale: 1.0e-6,
            interference_eps: 1.0e3,
            collision_eps: 1.0e-3,
            max_velocity: 3.0e8,
            trail_size: 100,
            min_draw_radius: 1.0,
        }
    }
}
