//! Procedural generation of star systems
//!
//! Planets are placed on circular orbits around a solar-mass star with
//! geometrically spaced orbital distances; moons orbit their planet in the
//! planet's own frame. Every random draw comes from a caller-supplied RNG so
//! that seeded runs reproduce exactly.

use crate::components::{Body, BodyId};
use crate::config::{GenerationConfig, SystemPreset};
use crate::physics::math::{
    SECONDS_PER_DAY, Scalar, TAU, circular_orbit_speed, circular_orbit_state, orbital_period,
};
use bevy::color::Color;
use bevy::prelude::*;
use rand::Rng;

pub const SUN_NAME: &str = "Sun";
pub const SOLAR_MASS: Scalar = 1.989e30;
pub const SOLAR_RADIUS: Scalar = 6.9634e8;
pub const SOLAR_ROTATION_PERIOD_DAYS: Scalar = 25.05;

const SUN_COLOR: Color = Color::srgb(1.0, 0.8, 0.0);
const MOON_COLOR: Color = Color::srgb(0.7, 0.7, 0.7);

pub const ROCKY_PLANET_COLORS: [Color; 4] = [
    Color::srgb(0.8, 0.4, 0.2), // Mars-like
    Color::srgb(0.6, 0.6, 0.6), // Mercury-like
    Color::srgb(0.4, 0.4, 0.8), // Earth-like
    Color::srgb(0.8, 0.8, 0.4), // Venus-like
];

pub const GAS_GIANT_COLORS: [Color; 4] = [
    Color::srgb(0.8, 0.6, 0.4), // Jupiter-like
    Color::srgb(0.6, 0.8, 0.8), // Uranus-like
    Color::srgb(0.4, 0.6, 0.8), // Neptune-like
    Color::srgb(0.8, 0.8, 0.6), // Saturn-like
];

const MOON_MASS_FRACTION: (Scalar, Scalar) = (1e-4, 1e-2);
const MOON_RADIUS_FRACTION: (Scalar, Scalar) = (0.01, 0.1);
const MOON_DISTANCE_IN_PLANET_RADII: (Scalar, Scalar) = (2.0, 10.0);
const ROTATION_PERIOD_DAYS: (Scalar, Scalar) = (0.5, 2.0);

/// Rocky planets and gas giants draw mass, radius and color from different ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetClass {
    Rocky,
    GasGiant,
}

impl PlanetClass {
    pub fn palette(self) -> &'static [Color] {
        match self {
            PlanetClass::Rocky => &ROCKY_PLANET_COLORS,
            PlanetClass::GasGiant => &GAS_GIANT_COLORS,
        }
    }
}

/// Builds ready-to-simulate body collections
#[derive(Debug, Clone)]
pub struct SystemGenerator {
    config: GenerationConfig,
    gravitational_constant: Scalar,
}

impl SystemGenerator {
    pub fn new(config: GenerationConfig, gravitational_constant: Scalar) -> Self {
        Self {
            config,
            gravitational_constant,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// The central star: solar mass and radius, at rest at the origin
    pub fn star(&self) -> Body {
        Body::new(SUN_NAME, SOLAR_MASS, SOLAR_RADIUS)
            .with_color(SUN_COLOR)
            .with_periods(SOLAR_ROTATION_PERIOD_DAYS * SECONDS_PER_DAY, 0.0)
    }

    /// Orbital distance of the `index`-th planet (0-based)
    pub fn planet_distance(&self, index: usize) -> Scalar {
        self.config.min_orbital_distance * libm::pow(self.config.orbital_spacing_ratio, index as Scalar)
    }

    pub fn sample_planet_class<R: Rng + ?Sized>(&self, rng: &mut R) -> PlanetClass {
        if rng.random::<f64>() < self.config.gas_giant_probability {
            PlanetClass::GasGiant
        } else {
            PlanetClass::Rocky
        }
    }

    /// Generates the `index`-th planet on a circular orbit around a star of `star_mass`
    pub fn generate_planet<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        index: usize,
        star_mass: Scalar,
    ) -> Body {
        let class = self.sample_planet_class(rng);
        let (mass, radius) = match class {
            PlanetClass::GasGiant => (
                uniform(rng, self.config.max_planet_mass * 0.5, self.config.max_planet_mass),
                uniform(rng, self.config.max_planet_radius * 0.5, self.config.max_planet_radius),
            ),
            PlanetClass::Rocky => (
                uniform(rng, self.config.min_planet_mass, self.config.min_planet_mass * 10.0),
                uniform(rng, self.config.min_planet_radius, self.config.min_planet_radius * 3.0),
            ),
        };
        let color = pick(rng, class.palette());

        let distance = self.planet_distance(index);
        let speed = circular_orbit_speed(self.gravitational_constant, star_mass, distance);

        let inclination = uniform(rng, -self.config.max_inclination, self.config.max_inclination);
        let angle = rng.random_range(0.0..TAU);
        let (position, velocity) = circular_orbit_state(distance, speed, angle, inclination);

        let rotation_period = random_rotation_period(rng);
        let orbital_period = orbital_period(self.gravitational_constant, star_mass, distance);

        Body::new(format!("Planet {}", index + 1), mass, radius)
            .with_position(position)
            .with_velocity(velocity)
            .with_color(color)
            .with_periods(rotation_period, orbital_period)
    }

    /// Generates `count` moons around `planet`, stored at `planet_id`
    ///
    /// Moons orbit in the planet's x-z plane and inherit its position and velocity.
    pub fn generate_moons<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        planet: &Body,
        planet_id: BodyId,
        count: usize,
    ) -> Vec<Body> {
        (0..count)
            .map(|i| {
                let mass = planet.mass * uniform(rng, MOON_MASS_FRACTION.0, MOON_MASS_FRACTION.1);
                let radius =
                    planet.radius * uniform(rng, MOON_RADIUS_FRACTION.0, MOON_RADIUS_FRACTION.1);

                let distance = planet.radius
                    * uniform(
                        rng,
                        MOON_DISTANCE_IN_PLANET_RADII.0,
                        MOON_DISTANCE_IN_PLANET_RADII.1,
                    );
                let speed = circular_orbit_speed(self.gravitational_constant, planet.mass, distance);

                let angle = rng.random_range(0.0..TAU);
                let (offset, relative_velocity) = circular_orbit_state(distance, speed, angle, 0.0);

                let rotation_period = random_rotation_period(rng);
                let orbital_period =
                    orbital_period(self.gravitational_constant, planet.mass, distance);

                Body::new(format!("{} Moon {}", planet.name, i + 1), mass, radius)
                    .with_position(planet.position + offset)
                    .with_velocity(planet.velocity + relative_velocity)
                    .with_color(MOON_COLOR)
                    .with_periods(rotation_period, orbital_period)
                    .with_parent(planet_id)
            })
            .collect()
    }

    /// Star first, then each planet immediately followed by its moons.
    ///
    /// Body ids are indices into the returned vector.
    pub fn generate_system<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        num_planets: usize,
        moons_per_planet: Option<usize>,
    ) -> Vec<Body> {
        let star = self.star();
        let star_mass = star.mass;

        let moons_per_planet = moons_per_planet.unwrap_or(0);
        let mut bodies = Vec::with_capacity(1 + num_planets * (1 + moons_per_planet));
        bodies.push(star);

        for index in 0..num_planets {
            let planet = self.generate_planet(rng, index, star_mass);
            let planet_id = BodyId(bodies.len());
            let moons = self.generate_moons(rng, &planet, planet_id, moons_per_planet);

            bodies.push(planet);
            bodies.extend(moons);
        }

        debug!(
            "Generated star system with {} planets and {} bodies in total",
            num_planets,
            bodies.len()
        );

        bodies
    }

    /// The Sun with Mercury, Venus and Earth on circular orbits in the x-z plane
    pub fn inner_solar_system(&self) -> Vec<Body> {
        const PLANETS: [(&str, Scalar, Scalar, Scalar, Scalar, Color); 3] = [
            // name, mass (kg), radius (m), distance (m), rotation (days), color
            ("Mercury", 3.301e23, 2.4397e6, 5.79e10, 58.646, Color::srgb(0.7, 0.7, 0.7)),
            ("Venus", 4.867e24, 6.0518e6, 1.082e11, 243.025, Color::srgb(0.9, 0.7, 0.5)),
            ("Earth", 5.972e24, 6.371e6, 1.496e11, 0.99727, Color::srgb(0.0, 0.0, 1.0)),
        ];

        let star = self.star();
        let star_mass = star.mass;
        let mut bodies = vec![star];

        for (name, mass, radius, distance, rotation_days, color) in PLANETS {
            let speed = circular_orbit_speed(self.gravitational_constant, star_mass, distance);
            let (position, velocity) = circular_orbit_state(distance, speed, 0.0, 0.0);

            bodies.push(
                Body::new(name, mass, radius)
                    .with_position(position)
                    .with_velocity(velocity)
                    .with_color(color)
                    .with_periods(
                        rotation_days * SECONDS_PER_DAY,
                        orbital_period(self.gravitational_constant, star_mass, distance),
                    ),
            );
        }

        bodies
    }

    /// Builds the configured preset with the configured planet and moon counts
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R, preset: SystemPreset) -> Vec<Body> {
        match preset {
            SystemPreset::Procedural => {
                self.generate_system(rng, self.config.planet_count, self.config.moons_per_planet)
            }
            SystemPreset::InnerSolarSystem => self.inner_solar_system(),
        }
    }
}

/// Uniform draw from [low, high]; a degenerate range returns `low`
fn uniform<R: Rng + ?Sized>(rng: &mut R, low: Scalar, high: Scalar) -> Scalar {
    if high > low {
        rng.random_range(low..=high)
    } else {
        low
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, palette: &[Color]) -> Color {
    match palette.len() {
        0 => Color::WHITE,
        len => palette[rng.random_range(0..len)],
    }
}

fn random_rotation_period<R: Rng + ?Sized>(rng: &mut R) -> Scalar {
    uniform(rng, ROTATION_PERIOD_DAYS.0, ROTATION_PERIOD_DAYS.1) * SECONDS_PER_DAY
}
