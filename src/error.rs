/*
 * Error Module
 *
 * Recoverable failures of the simulation core: bad configuration values,
 * rejected weight updates and configuration file problems. Index corruption
 * is not represented here, it is a fatal assertion in the spatial grid.
 */

use thiserror::Error;

use crate::params::WeightKind;

#[derive(Debug, Error)]
pub enum SimError {
    // A configuration value that cannot be used (e.g. non-positive cell size).
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    // Weights are non-negative scalars.
    #[error("{kind} weight must be non-negative, got {value}")]
    NegativeWeight { kind: WeightKind, value: f32 },

    #[error("failed to access configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
