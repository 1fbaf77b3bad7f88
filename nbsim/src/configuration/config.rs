//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]     – force strategy and default worker count
//! - [`ParametersConfig`] – timestep, step count and physical constants
//! - [`BodyConfig`]       – initial state for each explicit body
//! - [`GeneratorConfig`]  – optional seeded random bodies appended after `bodies`
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   strategy: "direct"      # or "pair_buffer"
//!   threads: 4
//!
//! parameters:
//!   timestep: 300.0         # seconds per step
//!   steps: 10000
//!   G: 6.67430e-11          # optional
//!   softening: 1.0e-10      # optional, added to |r|^2
//!   report_every: 1000      # optional, log interval in steps
//!
//! bodies:
//!   - m: 5.972e24
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!   - m: 7.348e22
//!     x: [3.844e8, 0.0]
//!     v: [0.0, 1018.0]
//!     size: 2.0
//!     color: [0.6, 0.6, 0.6]
//!
//! generator:                # optional
//!   count: 500
//!   seed: 42
//!   mass: [1.0e20, 1.0e24]
//!   radius: [1.0e9, 1.0e11]
//!   speed: [0.0, 3.0e4]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{SimError, SimResult};
use crate::simulation::engine::Strategy;
use crate::simulation::params;

fn default_threads() -> usize {
    1
}

fn default_g() -> f64 {
    params::G
}

fn default_softening() -> f64 {
    params::SOFTENING
}

fn default_report_every() -> u64 {
    1000
}

/// Engine configuration: how forces are accumulated and on how many workers
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default)]
    pub strategy: Strategy, // "pair_buffer" or "direct"
    #[serde(default = "default_threads")]
    pub threads: usize, // worker threads per step, >= 1
}

/// Numerical and physical parameters for a run
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub timestep: f64, // step size
    pub steps: u64, // number of steps to run
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default = "default_softening")]
    pub softening: f64, // added to the squared separation
    #[serde(default = "default_report_every")]
    pub report_every: u64, // log progress every n steps, 0 disables
}

/// Initial state of one body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub m: f64, // mass
    pub x: [f64; 2], // position
    pub v: [f64; 2], // velocity
    pub size: Option<f64>, // display radius
    pub color: Option<[f64; 3]>, // display rgb
}

/// Seeded random body generator
#[derive(Deserialize, Debug, Clone)]
pub struct GeneratorConfig {
    pub count: usize, // number of bodies
    pub seed: u64, // rng seed
    pub mass: [f64; 2], // uniform mass range
    pub radius: [f64; 2], // uniform distance from the origin
    pub speed: [f64; 2], // uniform tangential speed
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
    pub generator: Option<GeneratorConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        serde_yaml::from_str(s).map_err(|e| SimError::InvalidConfig(e.to_string()))
    }

    pub fn from_path(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SimError::InvalidConfig(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml_str(&text)
    }

    /// Checks that do not depend on the bodies themselves
    pub fn validate(&self) -> SimResult<()> {
        if self.engine.threads == 0 {
            return Err(SimError::InvalidThreadCount(0));
        }
        let p = &self.parameters;
        if !p.timestep.is_finite() {
            return Err(SimError::InvalidTimestep(p.timestep));
        }
        if !(p.G.is_finite() && p.softening.is_finite() && p.softening >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "G and softening must be finite and softening non-negative, got G={} softening={}",
                p.G, p.softening
            )));
        }
        Ok(())
    }
}
