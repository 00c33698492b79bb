use crate::components::trail::OrbitHistory;
use crate::physics::math::{Scalar, Vector};
use bevy::color::Color;

/// Index of a body in the simulation's flat body store
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

impl BodyId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A point mass taking part in the gravitational simulation.
///
/// The `parent` link groups a moon with its planet for display and generation
/// only. Every body is a peer of every other body in the force calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub name: String,
    /// Kilograms
    pub mass: Scalar,
    /// Meters
    pub radius: Scalar,
    /// Meters, relative to the system origin
    pub position: Vector,
    /// Meters per second
    pub velocity: Vector,
    pub color: Color,
    /// Seconds
    pub rotation_period: Scalar,
    /// Seconds
    pub orbital_period: Scalar,
    pub parent: Option<BodyId>,
    pub orbit_history: OrbitHistory,
}

impl Body {
    /// Creates a body at rest at the origin.
    pub fn new(name: impl Into<String>, mass: Scalar, radius: Scalar) -> Self {
        Self {
            name: name.into(),
            mass,
            radius,
            position: Vector::ZERO,
            velocity: Vector::ZERO,
            color: Color::WHITE,
            rotation_period: 0.0,
            orbital_period: 0.0,
            parent: None,
            orbit_history: OrbitHistory::default(),
        }
    }

    pub fn with_position(mut self, position: Vector) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_periods(mut self, rotation_period: Scalar, orbital_period: Scalar) -> Self {
        self.rotation_period = rotation_period;
        self.orbital_period = orbital_period;
        self
    }

    pub fn with_parent(mut self, parent: BodyId) -> Self {
        self.parent = Some(parent);
        self
    }

    #[inline]
    pub fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }

    #[inline]
    pub fn kinetic_energy(&self) -> Scalar {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Mass must be positive and finite for `force / mass` to be defined
    #[inline]
    pub fn has_valid_mass(&self) -> bool {
        self.mass.is_finite() && self.mass > 0.0
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_builder() {
        let body = Body::new("Rock", 2.0, 1.0)
            .with_position(Vector::new(1.0, 2.0, 3.0))
            .with_velocity(Vector::new(0.0, 3.0, 0.0))
            .with_color(Color::srgb(0.5, 0.5, 0.5))
            .with_periods(10.0, 20.0)
            .with_parent(BodyId(0));

        assert_eq!(body.name, "Rock");
        assert_eq!(body.position, Vector::new(1.0, 2.0, 3.0));
        assert_eq!(body.rotation_period, 10.0);
        assert_eq!(body.orbital_period, 20.0);
        assert_eq!(body.parent, Some(BodyId(0)));
        assert!(body.orbit_history.is_empty());
    }

    #[test]
    fn test_momentum_and_kinetic_energy() {
        let body = Body::new("Rock", 2.0, 1.0).with_velocity(Vector::new(0.0, 3.0, 0.0));

        assert_eq!(body.momentum(), Vector::new(0.0, 6.0, 0.0));
        assert_eq!(body.kinetic_energy(), 9.0);
    }

    #[test]
    fn test_mass_validation() {
        assert!(Body::new("ok", 1.0, 1.0).has_valid_mass());
        assert!(!Body::new("zero", 0.0, 1.0).has_valid_mass());
        assert!(!Body::new("negative", -1.0, 1.0).has_valid_mass());
        assert!(!Body::new("nan", f64::NAN, 1.0).has_valid_mass());
    }
}
