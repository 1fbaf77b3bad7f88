//! Read-only conserved quantities over a body slice.
//! Used for progress logging and conservation checks; none of these mutate state.

use crate::simulation::pairs::{pair_count, PairIter};
use crate::simulation::params::Constants;
use crate::simulation::states::{Body, Vec2};

/// Total linear momentum, sum of m * v
pub fn total_momentum(bodies: &[Body]) -> Vec2 {
    bodies.iter().fold(Vec2::zeros(), |p, b| p + b.mass * b.velocity)
}

/// Mass-weighted mean position, or the origin for an empty slice
pub fn center_of_mass(bodies: &[Body]) -> Vec2 {
    let total_mass: f64 = bodies.iter().map(|b| b.mass).sum();
    if total_mass > 0.0 {
        bodies.iter().fold(Vec2::zeros(), |c, b| c + b.mass * b.position) / total_mass
    } else {
        Vec2::zeros()
    }
}

/// z-component of the total angular momentum about the origin
pub fn angular_momentum(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| b.mass * (b.position.x * b.velocity.y - b.position.y * b.velocity.x))
        .sum()
}

pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(|b| 0.5 * b.mass * b.velocity.norm_squared()).sum()
}

/// Gravitational potential energy using the same softened distance as the force kernel
pub fn potential_energy(bodies: &[Body], constants: &Constants) -> f64 {
    let n = bodies.len();
    let pairs = pair_count(n);
    PairIter::new(0..pairs, n)
        .map(|(i, j)| {
            let (a, b) = (&bodies[i], &bodies[j]);
            let r = ((b.position - a.position).norm_squared() + constants.softening).sqrt();
            -constants.G * (a.mass * b.mass) / r
        })
        .sum()
}

pub fn total_energy(bodies: &[Body], constants: &Constants) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, constants)
}
