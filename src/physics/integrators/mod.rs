//! Numerical integration methods for n-body simulation

use crate::physics::math::{Scalar, Vector};
use serde::{Deserialize, Serialize};

pub mod semi_implicit_euler;

pub use semi_implicit_euler::SemiImplicitEuler;

/// Base trait for all integrators
pub trait Integrator: Send + Sync {
    /// Advance a single body's state by one time step
    ///
    /// # Arguments
    /// * `position` - Mutable reference to position
    /// * `velocity` - Mutable reference to velocity vector
    /// * `acceleration` - Acceleration from the net force at the current positions
    /// * `dt` - Time step
    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar);

    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Get the order of this integrator
    fn order(&self) -> usize;
}

/// Integrator selection in configuration
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntegratorType {
    #[default]
    SemiImplicitEuler,
}

impl IntegratorType {
    pub fn create(self) -> Box<dyn Integrator> {
        match self {
            IntegratorType::SemiImplicitEuler => Box::new(SemiImplicitEuler),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrator_type_creates_semi_implicit_euler() {
        let integrator = IntegratorType::default().create();
        assert_eq!(integrator.name(), "Semi-implicit Euler");
    }
}
