//! Build a runnable scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario` holding:
//! - the `Galaxy` with its bodies at t = 0 and the selected strategy
//! - the physical constants the kernel was built with
//! - run settings (timestep, steps, threads, report interval)

use log::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::SimResult;
use crate::simulation::galaxy::Galaxy;
use crate::simulation::engine::Strategy;
use crate::simulation::generator::{self, random_bodies};
use crate::simulation::params::Constants;
use crate::simulation::states::{Appearance, Body, Vec2};

pub struct Scenario {
    pub galaxy: Galaxy,
    pub constants: Constants,
    pub timestep: f64,
    pub steps: u64,
    pub threads: usize,
    pub report_every: u64,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        cfg.validate()?;

        // Bodies: explicit list first, generated ones appended
        let mut bodies: Vec<Body> = cfg.bodies.iter().map(body_from_config).collect();
        if let Some(generator) = &cfg.generator {
            bodies.extend(random_bodies(generator)?);
        }

        let p = cfg.parameters;
        let constants = Constants {
            G: p.G,
            softening: p.softening,
        };

        info!(
            "scenario: {} bodies, strategy {}, {} threads, dt = {}, {} steps",
            bodies.len(),
            cfg.engine.strategy,
            cfg.engine.threads,
            p.timestep,
            p.steps
        );

        let galaxy = Galaxy::with_constants(bodies, cfg.engine.strategy, constants)?;

        Ok(Self {
            galaxy,
            constants,
            timestep: p.timestep,
            steps: p.steps,
            threads: cfg.engine.threads,
            report_every: p.report_every,
        })
    }

    /// Built-in Sun + eight planets: 5 minute steps for one Earth year
    pub fn solar_system() -> SimResult<Self> {
        let constants = Constants::default();
        let galaxy = Galaxy::with_constants(generator::solar_system(), Strategy::default(), constants)?;

        info!("scenario: built-in solar system, {} bodies", galaxy.bodies().len());

        Ok(Self {
            galaxy,
            constants,
            timestep: 300.0,
            steps: 105_192,
            threads: 2,
            report_every: 10_000,
        })
    }
}

fn body_from_config(bc: &BodyConfig) -> Body {
    let body = Body::new(bc.m, Vec2::new(bc.x[0], bc.x[1]), Vec2::new(bc.v[0], bc.v[1]));
    match (bc.size, bc.color) {
        (None, None) => body,
        (size, color) => body.with_appearance(Appearance {
            size: size.unwrap_or(1.0),
            color: color.unwrap_or([1.0, 1.0, 1.0]),
        }),
    }
}
