//! Error types for world construction and scenario loading
//!
//! Runtime stepping never fails; everything here is raised while a body or a
//! scenario is being built, or when a command names a body that cannot take it

use thiserror::Error;

use crate::simulation::states::BodyId;

/// Rejections raised by the world when a body or command is invalid
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("body `{name}` has non-positive mass {mass}")]
    NonPositiveMass { name: String, mass: f64 },

    #[error("body `{name}` has negative radius {radius}")]
    NegativeRadius { name: String, radius: f64 },

    #[error("body `{name}` has a non-finite position or velocity")]
    NonFiniteState { name: String },

    #[error("rocket `{name}` has no stages")]
    EmptyStages { name: String },

    #[error("rocket `{name}` stage {index} is invalid: {reason}")]
    InvalidStage { name: String, index: usize, reason: &'static str },

    #[error("no body with id {0}")]
    UnknownBody(BodyId),

    #[error("body {0} is not a rocket")]
    NotARocket(BodyId),
}

/// Failures while reading a scenario file into a world
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario yaml")]
    Yaml(#[from] serde_yaml::Error),

    #[error("body `{name}`: {reason}")]
    Body { name: String, reason: &'static str },

    #[error(transparent)]
    Sim(#[from] SimError),
}
