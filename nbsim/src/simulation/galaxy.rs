//! The simulation: an owned body list plus the engine that steps it
//!
//! `Galaxy::simulate` is one blocking fork-join round: net forces are fully
//! computed and merged before integration starts, and integration finishes
//! before the call returns. Steps never overlap.

use log::debug;

use crate::error::{SimError, SimResult};
use crate::simulation::engine::{ForceEngine, Strategy};
use crate::simulation::forces::{NewtonianGravity, PairForce};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::pairs::pair_count;
use crate::simulation::params::Constants;
use crate::simulation::states::{Body, Vec2};

pub struct Galaxy<K: PairForce = NewtonianGravity> {
    bodies: Vec<Body>, // fixed for the lifetime of the run
    kernel: K, // pairwise force law
    engine: ForceEngine, // strategy + cached worker pool
    time: f64, // simulated time
    steps: u64, // completed steps
}

impl Galaxy<NewtonianGravity> {
    /// Newtonian gravity with the default constants
    pub fn new(bodies: Vec<Body>, strategy: Strategy) -> SimResult<Self> {
        Self::with_kernel(bodies, strategy, NewtonianGravity::default())
    }

    pub fn with_constants(bodies: Vec<Body>, strategy: Strategy, constants: Constants) -> SimResult<Self> {
        Self::with_kernel(bodies, strategy, NewtonianGravity::new(constants))
    }
}

impl<K: PairForce> Galaxy<K> {
    /// Build a simulation around any pairwise force law.
    /// Rejects bodies with non-positive or non-finite mass and non-finite state.
    pub fn with_kernel(bodies: Vec<Body>, strategy: Strategy, kernel: K) -> SimResult<Self> {
        validate_bodies(&bodies)?;
        Ok(Self {
            bodies,
            kernel,
            engine: ForceEngine::new(strategy),
            time: 0.0,
            steps: 0,
        })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn into_bodies(self) -> Vec<Body> {
        self.bodies
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn strategy(&self) -> Strategy {
        self.engine.strategy()
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.engine.set_strategy(strategy);
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Net force on each body for the current state, without stepping
    pub fn net_forces(&mut self, threads: usize) -> SimResult<Vec<Vec2>> {
        self.engine.net_forces(&self.kernel, &self.bodies, threads)
    }

    /// Advance every body by `timestep` using `threads` workers.
    ///
    /// Zero or one body is a no-op. Fails before touching any state when
    /// `threads == 0` or `timestep` is not finite.
    pub fn simulate(&mut self, timestep: f64, threads: usize) -> SimResult<()> {
        if threads == 0 {
            return Err(SimError::InvalidThreadCount(threads));
        }
        if !timestep.is_finite() {
            return Err(SimError::InvalidTimestep(timestep));
        }

        let n = self.bodies.len();
        if pair_count(n) == 0 {
            debug!("simulate: {n} bodies, nothing interacts");
            return Ok(());
        }

        // phase 1 (+2): forces, merged after every worker joined
        let forces = self.engine.net_forces(&self.kernel, &self.bodies, threads)?;

        // phase 3: integration on the same pool
        let pool = self.engine.pool(threads)?;
        semi_implicit_euler(pool, &mut self.bodies, &forces, timestep);

        self.time += timestep;
        self.steps += 1;
        Ok(())
    }
}

fn validate_bodies(bodies: &[Body]) -> SimResult<()> {
    for (index, b) in bodies.iter().enumerate() {
        if !b.is_finite() {
            return Err(SimError::NonFiniteBody { index });
        }
        if b.mass <= 0.0 {
            return Err(SimError::NonPositiveMass { index, mass: b.mass });
        }
    }
    Ok(())
}
