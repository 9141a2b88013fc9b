pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{ConfigError, SimError};

pub use simulation::states::{Body, BodyId, BodyKind, Propulsion, Stage, System, Trail, NVec2, Rgb};
pub use simulation::params::{Parameters, G_SI};
pub use simulation::engine::Engine;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::collision::Contact;
pub use simulation::rocket::Direction;
pub use simulation::integrator::{euler_step, StepOptions};
pub use simulation::world::{format_elapsed, BodySnapshot, World};
pub use simulation::scenario::build_world;

pub use configuration::config::{
    BodyConfig, BodyKindConfig, EngineConfig, LaunchConfig, ParametersConfig, ScenarioConfig, StageConfig,
    UpdateOrder, ViewportConfig,
};

pub use visualization::{orbsim_vis2d::run_2d, viewport::Viewport};

pub use benchmark::benchmark::{bench_gravity, bench_step};
