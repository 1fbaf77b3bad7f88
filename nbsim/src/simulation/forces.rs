//! Pairwise force kernels for the n-body engine
//!
//! A kernel returns the force exerted on body `a` by body `b`. The engine
//! applies the negated value to `b`, so kernels only ever see each unordered
//! pair once.

use crate::simulation::params::Constants;
use crate::simulation::states::{normalize_in_place, Body, Vec2};

/// Trait for pairwise interactions evaluated by [`crate::simulation::engine::ForceEngine`].
/// Implementations must be pure: the engine calls them concurrently for
/// disjoint pairs while the body slice is shared read-only.
pub trait PairForce: Send + Sync {
    /// Force on `a` due to `b`. The force on `b` due to `a` must be the exact negation.
    fn force(&self, a: &Body, b: &Body) -> Vec2;
}

/// 2D Newtonian gravity with additive softening on the squared distance
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub softening: f64, // added to |r|^2
}

impl NewtonianGravity {
    pub fn new(constants: Constants) -> Self {
        Self {
            G: constants.G,
            softening: constants.softening,
        }
    }
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self::new(Constants::default())
    }
}

impl PairForce for NewtonianGravity {
    fn force(&self, a: &Body, b: &Body) -> Vec2 {
        // r points from a to b, so a is pulled along +r
        let mut direction = b.position - a.position;

        // softened squared separation |r|^2 + eps
        let distance2 = direction.norm_squared() + self.softening;

        // the mass product is formed first so force(a, b) == -force(b, a) bit for bit
        let magnitude = self.G * (a.mass * b.mass) / distance2;

        normalize_in_place(&mut direction);
        magnitude * direction
    }
}
