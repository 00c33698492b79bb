//! Pairwise Newtonian gravity
//!
//! Every body attracts every other body, O(n²) per evaluation. Systems here
//! hold tens of bodies, so no spatial partitioning is used.

use crate::components::Body;
use crate::physics::math::{GRAVITATIONAL_CONSTANT, Scalar, Vector};

/// Direct-sum Newtonian gravity without softening
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub gravitational_constant: Scalar,
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self::new(GRAVITATIONAL_CONSTANT)
    }
}

impl NewtonianGravity {
    pub fn new(gravitational_constant: Scalar) -> Self {
        Self {
            gravitational_constant,
        }
    }

    /// Force exerted on `a` by `b`.
    ///
    /// Coincident bodies exert no force on each other.
    #[inline]
    pub fn pair_force(&self, a: &Body, b: &Body) -> Vector {
        let r = b.position - a.position;
        let distance = r.length();
        if distance == 0.0 {
            return Vector::ZERO;
        }

        let magnitude = self.gravitational_constant * a.mass * b.mass / (distance * distance);
        r / distance * magnitude
    }

    /// Writes the net force on each body into `out`, which must have one slot per body.
    pub fn accumulate(&self, bodies: &[Body], out: &mut [Vector]) {
        debug_assert_eq!(bodies.len(), out.len());

        for force in out.iter_mut() {
            *force = Vector::ZERO;
        }

        let n = bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let force = self.pair_force(&bodies[i], &bodies[j]);
                out[i] += force;
                out[j] -= force;
            }
        }
    }

    pub fn net_forces(&self, bodies: &[Body]) -> Vec<Vector> {
        let mut forces = vec![Vector::ZERO; bodies.len()];
        self.accumulate(bodies, &mut forces);
        forces
    }

    /// Total gravitational potential energy, -Σ G mᵢ mⱼ / dᵢⱼ over unordered pairs.
    pub fn potential_energy(&self, bodies: &[Body]) -> Scalar {
        let mut energy = 0.0;
        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                let distance = a.position.distance(b.position);
                if distance > 0.0 {
                    energy -= self.gravitational_constant * a.mass * b.mass / distance;
                }
            }
        }
        energy
    }
}
