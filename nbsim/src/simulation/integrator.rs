//! Fixed-step semi-implicit (symplectic) Euler integrator
//!
//! Velocity is kicked first, then position drifts with the new velocity:
//!   v_n+1 = v_n + dt * F_n / m
//!   x_n+1 = x_n + dt * v_n+1
//! Each body's update reads and writes only its own slot, so the body slice
//! can be split into contiguous chunks across workers.

use rayon::prelude::*;

use crate::simulation::pairs::partition;
use crate::simulation::pool::WorkerPool;
use crate::simulation::states::{Body, Vec2};

/// Advance every body by `dt` under `forces[i]`.
/// Runs inline when `pool` is `None`, otherwise one contiguous chunk per worker.
pub fn semi_implicit_euler(pool: Option<&WorkerPool>, bodies: &mut [Body], forces: &[Vec2], dt: f64) {
    debug_assert_eq!(bodies.len(), forces.len());
    if bodies.is_empty() {
        return;
    }

    match pool {
        None => {
            for (b, f) in bodies.iter_mut().zip(forces) {
                advance(b, f, dt);
            }
        }
        Some(pool) => {
            // same ceil-sized blocks as the force phase, over body indices
            let stride = partition(bodies.len(), pool.threads())
                .first()
                .map_or(bodies.len(), |r| r.len());

            pool.join(|| {
                bodies
                    .par_chunks_mut(stride)
                    .zip(forces.par_chunks(stride))
                    .for_each(|(b_chunk, f_chunk)| {
                        for (b, f) in b_chunk.iter_mut().zip(f_chunk) {
                            advance(b, f, dt);
                        }
                    });
            });
        }
    }
}

#[inline]
fn advance(body: &mut Body, force: &Vec2, dt: f64) {
    let acceleration = *force / body.mass;
    // kick, then drift with the updated velocity
    body.velocity += dt * acceleration;
    body.position += dt * body.velocity;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_updates_before_position() {
        let mut bodies = vec![Body::new(2.0, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0))];
        let forces = vec![Vec2::new(4.0, 0.0)];

        semi_implicit_euler(None, &mut bodies, &forces, 0.5);

        // a = (2, 0); v = (0, 1) + 0.5 * (2, 0) = (1, 1); x = (1, 0) + 0.5 * (1, 1)
        assert_eq!(bodies[0].velocity, Vec2::new(1.0, 1.0));
        assert_eq!(bodies[0].position, Vec2::new(1.5, 0.5));
    }

    #[test]
    fn pooled_update_matches_inline() {
        let make = || -> Vec<Body> {
            (0..37)
                .map(|i| Body::new(1.0 + i as f64, Vec2::new(i as f64, -(i as f64)), Vec2::new(0.5, 0.25)))
                .collect()
        };
        let forces: Vec<Vec2> = (0..37).map(|i| Vec2::new(i as f64 * 0.1, 1.0)).collect();

        let mut inline = make();
        semi_implicit_euler(None, &mut inline, &forces, 0.01);

        let pool = WorkerPool::new(4).unwrap();
        let mut pooled = make();
        semi_implicit_euler(Some(&pool), &mut pooled, &forces, 0.01);

        assert_eq!(inline, pooled);
    }
}
