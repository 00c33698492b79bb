//! Semi-implicit Euler integration method (symplectic Euler)

use super::Integrator;
use crate::physics::math::{Scalar, Vector};

/// Semi-implicit Euler integrator (also known as symplectic Euler)
///
/// This is a first-order symplectic integrator that updates velocities
/// before positions, providing better energy conservation than explicit Euler.
///
/// ```text
/// v(t+dt) = v(t) + a(t) * dt
/// x(t+dt) = x(t) + v(t+dt) * dt
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar) {
        // Update velocity first: v(t+dt) = v(t) + a(t) * dt
        *velocity += acceleration * dt;

        // Then update position using new velocity: x(t+dt) = x(t) + v(t+dt) * dt
        *position += *velocity * dt;
    }

    fn name(&self) -> &str {
        "Semi-implicit Euler"
    }

    fn order(&self) -> usize {
        1
    }
}
