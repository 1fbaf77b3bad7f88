//! Core state types for the N-body simulation.
//!
//! `Vec2` is the 2D vector used everywhere (nalgebra provides addition,
//! subtraction, scalar and component-wise products, division, dot product,
//! `norm_squared` and `norm`). `Body` is the mutable physical state owned by
//! the simulation, with optional display attributes for renderers.

use nalgebra::Vector2;

pub type Vec2 = Vector2<f64>;

/// Normalize `v` to unit length in place.
/// A zero vector is left untouched instead of turning into NaN.
pub fn normalize_in_place(v: &mut Vec2) {
    let norm = v.norm();
    if norm > 0.0 {
        *v /= norm;
    }
}

/// Display attributes; only read by renderers, never by the physics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub size: f64, // draw radius in screen units
    pub color: [f64; 3], // rgb in 0..=1
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub mass: f64, // mass (> 0)
    pub position: Vec2, // position
    pub velocity: Vec2, // velocity
    pub appearance: Option<Appearance>, // optional display attributes
}

impl Body {
    pub fn new(mass: f64, position: Vec2, velocity: Vec2) -> Self {
        Self {
            mass,
            position,
            velocity,
            appearance: None,
        }
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = Some(appearance);
        self
    }

    /// True when mass, position and velocity contain no NaN or Inf
    pub fn is_finite(&self) -> bool {
        self.mass.is_finite()
            && self.position.iter().all(|c| c.is_finite())
            && self.velocity.iter().all(|c| c.is_finite())
    }
}
