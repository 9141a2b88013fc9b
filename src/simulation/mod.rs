pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod collision;
pub mod rocket;
pub mod integrator;
pub mod world;
pub mod scenario;
