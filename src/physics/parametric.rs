//! Closed-form circular motion, a non-physical preview mode
//!
//! Each orbiting body keeps the circle it started on and sweeps it at a
//! constant angular rate of 2π / T. No forces are evaluated, so bodies never
//! perturb each other.

use crate::components::Body;
use crate::physics::math::{Rotation, Scalar, TAU, Vector};

/// Initial circular orbit of one body, relative to its centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularOrbit {
    /// Index of the body being orbited, or `None` for the system origin
    pub center: Option<usize>,
    pub initial_offset: Vector,
    /// Unit normal of the orbital plane, along r × v
    pub normal: Vector,
    /// Radians per second
    pub angular_rate: Scalar,
}

impl CircularOrbit {
    /// Offset from the centre after `elapsed` seconds
    pub fn offset_at(&self, elapsed: Scalar) -> Vector {
        Rotation::from_axis_angle(self.normal, self.angular_rate * elapsed) * self.initial_offset
    }
}

/// Orbits captured from the bodies' state at the start of a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParametricOrbits {
    orbits: Vec<Option<CircularOrbit>>,
    /// Simulated time at which the initial offsets were recorded
    captured_at: Scalar,
}

impl ParametricOrbits {
    /// Records each body's orbit around its parent, or around the origin if it has none,
    /// as of simulated time `elapsed`.
    ///
    /// Bodies without a positive orbital period, or whose velocity is parallel to
    /// their offset, have no orbit and stay where they are.
    pub fn capture(bodies: &[Body], elapsed: Scalar) -> Self {
        let orbits = bodies
            .iter()
            .map(|body| {
                if body.orbital_period.is_nan() || body.orbital_period <= 0.0 {
                    return None;
                }

                let center = body.parent.map(|id| id.index()).filter(|&i| i < bodies.len());
                let (center_position, center_velocity) = match center {
                    Some(i) => (bodies[i].position, bodies[i].velocity),
                    None => (Vector::ZERO, Vector::ZERO),
                };

                let initial_offset = body.position - center_position;
                let relative_velocity = body.velocity - center_velocity;
                let normal = initial_offset.cross(relative_velocity).try_normalize()?;

                Some(CircularOrbit {
                    center,
                    initial_offset,
                    normal,
                    angular_rate: TAU / body.orbital_period,
                })
            })
            .collect();

        Self {
            orbits,
            captured_at: elapsed,
        }
    }

    pub fn orbit(&self, index: usize) -> Option<&CircularOrbit> {
        self.orbits.get(index).and_then(Option::as_ref)
    }

    /// Places every orbiting body on its circle at time `elapsed`.
    ///
    /// Centres are resolved first, so a moon follows its planet even when the
    /// planet is stored after it.
    pub fn apply(&self, bodies: &mut [Body], elapsed: Scalar) {
        let count = bodies.len().min(self.orbits.len());
        let mut resolved = vec![false; count];

        for index in 0..count {
            self.resolve(bodies, elapsed, index, &mut resolved, 0);
        }
    }

    fn resolve(
        &self,
        bodies: &mut [Body],
        elapsed: Scalar,
        index: usize,
        resolved: &mut [bool],
        depth: usize,
    ) {
        if resolved[index] || depth > resolved.len() {
            return;
        }
        resolved[index] = true;

        let Some(orbit) = self.orbits[index] else {
            return;
        };

        let (center_position, center_velocity) = match orbit.center {
            Some(center) if center < resolved.len() => {
                self.resolve(bodies, elapsed, center, resolved, depth + 1);
                (bodies[center].position, bodies[center].velocity)
            }
            _ => (Vector::ZERO, Vector::ZERO),
        };

        let offset = orbit.offset_at(elapsed - self.captured_at);
        let body = &mut bodies[index];
        body.position = center_position + offset;
        body.velocity = center_velocity + orbit.normal.cross(offset) * orbit.angular_rate;
    }
}
