//! Errors raised by the simulation core

use crate::components::BodyId;
use crate::physics::math::Scalar;
use std::fmt;

/// Simulation errors
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A body with zero, negative or non-finite mass cannot be integrated
    InvalidMass { name: String, mass: Scalar },
    /// Time scale must be finite and non-negative
    InvalidTimeScale(Scalar),
    /// A parent reference points outside the body store
    UnknownBody(BodyId),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidMass { name, mass } => {
                write!(f, "Body '{name}' has invalid mass {mass}")
            }
            SimulationError::InvalidTimeScale(factor) => {
                write!(f, "Invalid time scale: {factor}")
            }
            SimulationError::UnknownBody(id) => write!(f, "Unknown body id: {}", id.index()),
        }
    }
}

impl std::error::Error for SimulationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = SimulationError::InvalidMass {
            name: "Rock".to_string(),
            mass: 0.0,
        };
        assert_eq!(error.to_string(), "Body 'Rock' has invalid mass 0");

        let error = SimulationError::InvalidTimeScale(-1.0);
        assert_eq!(error.to_string(), "Invalid time scale: -1");

        let error = SimulationError::UnknownBody(BodyId(7));
        assert_eq!(error.to_string(), "Unknown body id: 7");
    }
}
