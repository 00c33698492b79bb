/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 3D vector type for positions, velocities, and forces
pub type Vector = bevy::math::DVec3;

/// Rotation type used by the parametric orbit mode
pub type Rotation = bevy::math::DQuat;

/// Newtonian gravitational constant in SI units (m³ kg⁻¹ s⁻²)
pub const GRAVITATIONAL_CONSTANT: Scalar = 6.67430e-11;

pub const SECONDS_PER_DAY: Scalar = 24.0 * 3600.0;

pub const TAU: Scalar = core::f64::consts::TAU;

/// Speed of a circular orbit at `distance` around `central_mass`: v = √(GM/d)
#[inline]
pub fn circular_orbit_speed(g: Scalar, central_mass: Scalar, distance: Scalar) -> Scalar {
    libm::sqrt(g * central_mass / distance)
}

/// Kepler's third law for a circular orbit: T = 2π √(d³ / GM)
#[inline]
pub fn orbital_period(g: Scalar, central_mass: Scalar, distance: Scalar) -> Scalar {
    TAU * libm::sqrt(libm::pow(distance, 3.0) / (g * central_mass))
}

/// Position and velocity on a circular orbit of radius `distance` and speed
/// `speed`, at phase `angle`, in a plane tilted by `inclination` about the x axis.
///
/// With zero inclination the orbit lies in the x-z plane. The returned velocity
/// is always perpendicular to the returned position.
pub fn circular_orbit_state(
    distance: Scalar,
    speed: Scalar,
    angle: Scalar,
    inclination: Scalar,
) -> (Vector, Vector) {
    let (sin_angle, cos_angle) = (libm::sin(angle), libm::cos(angle));
    let (sin_incl, cos_incl) = (libm::sin(inclination), libm::cos(inclination));

    let position = Vector::new(
        distance * cos_angle,
        distance * sin_angle * sin_incl,
        distance * sin_angle * cos_incl,
    );
    let velocity = Vector::new(
        -speed * sin_angle,
        speed * cos_angle * sin_incl,
        speed * cos_angle * cos_incl,
    );

    (position, velocity)
}

#[cfg(test)]
mod math_tests {
    use super::*;

    const SUN_MASS: Scalar = 1.989e30;
    const EARTH_DISTANCE: Scalar = 1.496e11;

    #[test]
    fn test_circular_orbit_speed_earth() {
        let speed = circular_orbit_speed(GRAVITATIONAL_CONSTANT, SUN_MASS, EARTH_DISTANCE);

        // Earth's mean orbital speed is about 29.78 km/s
        assert!(
            (speed - 29_780.0).abs() < 100.0,
            "Unexpected orbital speed: {speed}"
        );
    }

    #[test]
    fn test_orbital_period_earth() {
        let period = orbital_period(GRAVITATIONAL_CONSTANT, SUN_MASS, EARTH_DISTANCE);
        let days = period / SECONDS_PER_DAY;

        assert!((days - 365.25).abs() < 1.0, "Unexpected period: {days} days");
    }

    #[test]
    fn test_period_and_speed_agree() {
        let speed = circular_orbit_speed(GRAVITATIONAL_CONSTANT, SUN_MASS, 5.8e10);
        let period = orbital_period(GRAVITATIONAL_CONSTANT, SUN_MASS, 5.8e10);

        // Circumference travelled in one period at constant speed
        let circumference = TAU * 5.8e10;
        assert!((speed * period - circumference).abs() / circumference < 1e-12);
    }

    #[test]
    fn test_circular_orbit_state_is_perpendicular() {
        for step in 0..64 {
            let angle = step as Scalar * TAU / 64.0;
            let inclination = (step as Scalar / 64.0 - 0.5) * 0.2;
            let (position, velocity) = circular_orbit_state(2.0, 3.0, angle, inclination);

            assert!((position.length() - 2.0).abs() < 1e-12);
            assert!((velocity.length() - 3.0).abs() < 1e-12);
            assert!(
                position.dot(velocity).abs() < 1e-12,
                "Velocity not perpendicular at angle {angle}"
            );
        }
    }

    #[test]
    fn test_circular_orbit_state_flat_plane() {
        let (position, velocity) = circular_orbit_state(1.0, 1.0, 0.3, 0.0);

        assert_eq!(position.y, 0.0);
        assert_eq!(velocity.y, 0.0);
    }
}
