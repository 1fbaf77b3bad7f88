//! Physical constants injected into the force kernel
//!
//! `Constants` holds the gravitational constant and the softening term
//! added to the squared separation. Defaults are SI values.

/// Newtonian gravitational constant in m^3 kg^-1 s^-2
pub const G: f64 = 6.67430e-11;

/// Added to the squared distance so coincident bodies never divide by zero
pub const SOFTENING: f64 = 1e-10;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants {
    pub G: f64, // gravitational constant
    pub softening: f64, // additive softening on |r|^2
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            G,
            softening: SOFTENING,
        }
    }
}
