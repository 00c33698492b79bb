//! Orrery prelude module
//!
//! This module re-exports the most commonly used types, traits, and functions
//! to reduce import boilerplate.

// External crate re-exports
pub use bevy::prelude::*;
pub use rand::Rng;

// Internal re-exports - Config
pub use crate::config::{MotionMode, SimulationConfig, SystemPreset};

// Internal re-exports - States and events
pub use crate::events::SimulationCommand;
pub use crate::states::AppState;

// Internal re-exports - Resources
pub use crate::resources::{PhysicsTime, SharedRng};

// Internal re-exports - Components
pub use crate::components::{Body, BodyId, OrbitHistory};

// Internal re-exports - Physics
pub use crate::error::SimulationError;
pub use crate::physics::math::{Scalar, Vector};
pub use crate::physics::{NewtonianGravity, SimulationClock, SystemGenerator};
