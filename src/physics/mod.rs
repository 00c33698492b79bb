//! Newtonian gravity, integration and system generation

pub mod clock;
pub mod forces;
pub mod generation;
pub mod integrators;
pub mod math;
pub mod parametric;

pub use clock::SimulationClock;
pub use forces::NewtonianGravity;
pub use generation::SystemGenerator;
