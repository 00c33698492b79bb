//! Orrery library
//!
//! Newtonian simulation of a procedurally generated star system: a star,
//! its planets and their moons, advanced with pairwise gravity and a
//! semi-implicit Euler integrator. The core is plain Rust; `plugins`
//! hosts it inside a Bevy app.

pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;
pub mod states;

// Test utilities are public for integration tests
pub mod test_utils;
