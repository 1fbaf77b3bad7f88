//! Initial conditions: a fixed solar system and seeded random disks

use std::f64::consts::TAU;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::configuration::config::GeneratorConfig;
use crate::error::{SimError, SimResult};
use crate::simulation::states::{Appearance, Body, Vec2};

/// Sun and the eight planets on the +x axis with their mean orbital speeds (SI units)
pub fn solar_system() -> Vec<Body> {
    let planet = |mass: f64, x: f64, vy: f64, size: f64, color: [f64; 3]| {
        Body::new(mass, Vec2::new(x, 0.0), Vec2::new(0.0, vy)).with_appearance(Appearance { size, color })
    };

    vec![
        planet(1.989e30, 0.0, 0.0, 12.0, [1.0, 0.8, 0.0]), // Sun
        planet(3.30e23, 5.79e10, 47400.0, 2.0, [0.5, 0.5, 0.5]), // Mercury
        planet(4.87e24, 1.082e11, 35000.0, 3.0, [1.0, 0.5, 0.0]), // Venus
        planet(5.97e24, 1.496e11, 29780.0, 3.0, [0.0, 0.0, 1.0]), // Earth
        planet(6.42e23, 2.279e11, 24070.0, 2.5, [1.0, 0.0, 0.0]), // Mars
        planet(1.90e27, 7.785e11, 13070.0, 7.0, [1.0, 0.5, 0.0]), // Jupiter
        planet(5.68e26, 1.433e12, 9690.0, 6.0, [0.6, 0.6, 0.3]), // Saturn
        planet(8.68e25, 2.877e12, 6810.0, 4.5, [0.0, 1.0, 0.0]), // Uranus
        planet(1.02e26, 4.503e12, 5430.0, 4.5, [0.6, 0.0, 0.6]), // Neptune
    ]
}

/// `cfg.count` bodies with uniform mass, radial distance and tangential speed.
/// The same seed always yields the same bodies.
pub fn random_bodies(cfg: &GeneratorConfig) -> SimResult<Vec<Body>> {
    check_range("mass", cfg.mass)?;
    check_range("radius", cfg.radius)?;
    check_range("speed", cfg.speed)?;
    if cfg.mass[0] <= 0.0 {
        return Err(SimError::InvalidConfig(format!(
            "generator mass range must be positive, got {:?}",
            cfg.mass
        )));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);
    let bodies = (0..cfg.count)
        .map(|_| {
            let mass = rng.gen_range(cfg.mass[0]..=cfg.mass[1]);
            let r = rng.gen_range(cfg.radius[0]..=cfg.radius[1]);
            let angle = rng.gen_range(0.0..TAU);
            let speed = rng.gen_range(cfg.speed[0]..=cfg.speed[1]);

            let (sin, cos) = angle.sin_cos();
            // counter-clockwise, perpendicular to the radius
            Body::new(mass, Vec2::new(r * cos, r * sin), Vec2::new(-sin * speed, cos * speed))
        })
        .collect();

    Ok(bodies)
}

fn check_range(name: &str, range: [f64; 2]) -> SimResult<()> {
    let [lo, hi] = range;
    if !(lo.is_finite() && hi.is_finite()) || lo > hi || lo < 0.0 {
        return Err(SimError::InvalidConfig(format!(
            "generator {name} range must be finite, non-negative and ordered, got [{lo}, {hi}]"
        )));
    }
    Ok(())
}
