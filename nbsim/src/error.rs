//! Error type shared by the simulation core, scenario builder and harnesses

use thiserror::Error;

/// Errors raised when a simulation is built or stepped with invalid input
#[derive(Error, Debug)]
pub enum SimError {
    /// `simulate` needs at least one worker thread
    #[error("invalid thread count {0}: at least one thread is required")]
    InvalidThreadCount(usize),

    /// Zero or negative mass would turn the acceleration into Inf/NaN
    #[error("body {index} has non-positive mass {mass}")]
    NonPositiveMass { index: usize, mass: f64 },

    /// Mass, position or velocity contains NaN or Inf
    #[error("body {index} has a non-finite mass, position or velocity")]
    NonFiniteBody { index: usize },

    #[error("invalid timestep {0}: timestep must be finite")]
    InvalidTimestep(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The rayon worker pool could not be started
    #[error("failed to build worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),
}

pub type SimResult<T> = Result<T, SimError>;
