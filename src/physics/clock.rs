//! Simulation clock
//!
//! Owns the authoritative body store and advances it one step at a time:
//! forces, then integration, then orbit history bookkeeping. Stepping is
//! synchronous and must not be re-entered.

use crate::components::{Body, BodyId};
use crate::config::{MotionMode, SimulationConfig, SystemPreset};
use crate::error::SimulationError;
use crate::physics::forces::NewtonianGravity;
use crate::physics::generation::SystemGenerator;
use crate::physics::integrators::Integrator;
use crate::physics::math::{Scalar, Vector};
use crate::physics::parametric::ParametricOrbits;
use crate::resources::SharedRng;
use bevy::prelude::*;

/// Recipe used to rebuild the initial configuration on reset
#[derive(Debug, Clone)]
enum Blueprint {
    Preset(SystemPreset),
    Bodies(Vec<Body>),
}

#[derive(Resource)]
pub struct SimulationClock {
    bodies: Vec<Body>,
    elapsed: Scalar,
    paused: bool,
    time_scale: Scalar,
    gravity: NewtonianGravity,
    integrator: Box<dyn Integrator>,
    motion_mode: MotionMode,
    parametric: ParametricOrbits,
    history_capacity: usize,
    generator: SystemGenerator,
    rng: SharedRng,
    blueprint: Blueprint,
    forces: Vec<Vector>,
}

impl SimulationClock {
    /// Generates the configured system using the configured seed
    pub fn from_config(config: &SimulationConfig) -> Self {
        let rng = SharedRng::from_optional_seed(config.physics.initial_seed);
        Self::from_config_with_rng(config, rng)
    }

    /// Generates the configured system drawing from `rng`
    pub fn from_config_with_rng(config: &SimulationConfig, rng: SharedRng) -> Self {
        let mut clock = Self::empty(config, rng, Blueprint::Preset(config.generation.preset));
        clock.rebuild();
        clock
    }

    /// Starts from an explicit set of bodies; `reset` restores exactly these bodies
    pub fn with_bodies(
        bodies: Vec<Body>,
        config: &SimulationConfig,
    ) -> Result<Self, SimulationError> {
        for (index, body) in bodies.iter().enumerate() {
            validate(body, index)?;
            if let Some(parent) = body.parent {
                if parent.index() >= bodies.len() {
                    return Err(SimulationError::UnknownBody(parent));
                }
            }
        }

        let rng = SharedRng::from_optional_seed(config.physics.initial_seed);
        let mut clock = Self::empty(config, rng, Blueprint::Bodies(bodies));
        clock.rebuild();
        Ok(clock)
    }

    fn empty(config: &SimulationConfig, rng: SharedRng, blueprint: Blueprint) -> Self {
        let gravity = NewtonianGravity::new(config.physics.gravitational_constant);
        Self {
            bodies: Vec::new(),
            elapsed: 0.0,
            paused: false,
            time_scale: config.physics.time_scale,
            gravity,
            integrator: config.physics.integrator.create(),
            motion_mode: config.physics.motion_mode,
            parametric: ParametricOrbits::default(),
            history_capacity: config.trails.max_points_per_trail,
            generator: SystemGenerator::new(
                config.generation.clone(),
                config.physics.gravitational_constant,
            ),
            rng,
            blueprint,
            forces: Vec::new(),
        }
    }

    fn rebuild(&mut self) {
        let bodies = match &self.blueprint {
            Blueprint::Preset(preset) => self.generator.build(&mut *self.rng, *preset),
            Blueprint::Bodies(bodies) => bodies.clone(),
        };

        self.bodies = bodies;
        for body in &mut self.bodies {
            body.orbit_history.set_capacity(self.history_capacity);
            body.orbit_history.clear();
        }
        self.elapsed = 0.0;
        self.recapture_orbits();
    }

    fn recapture_orbits(&mut self) {
        self.parametric = match self.motion_mode {
            MotionMode::Parametric => ParametricOrbits::capture(&self.bodies, self.elapsed),
            MotionMode::NBody => ParametricOrbits::default(),
        };
    }

    /// Appends a body to the live store.
    ///
    /// For a clock built from explicit bodies the body also becomes part of the
    /// configuration that `reset` restores.
    pub fn add_body(&mut self, mut body: Body) -> Result<BodyId, SimulationError> {
        let id = BodyId(self.bodies.len());
        validate(&body, id.index())?;
        if let Some(parent) = body.parent {
            if parent.index() >= self.bodies.len() {
                return Err(SimulationError::UnknownBody(parent));
            }
        }

        body.orbit_history.set_capacity(self.history_capacity);
        if let Blueprint::Bodies(bodies) = &mut self.blueprint {
            bodies.push(body.clone());
        }
        self.bodies.push(body);
        self.recapture_orbits();

        Ok(id)
    }

    /// Advances the simulation by `dt` seconds of real time, scaled by the time scale.
    ///
    /// Does nothing while paused. Large steps are not clamped.
    pub fn step(&mut self, dt: Scalar) -> Result<(), SimulationError> {
        if self.paused {
            return Ok(());
        }

        let dt = dt * self.time_scale;

        match self.motion_mode {
            MotionMode::NBody => self.integrate(dt)?,
            MotionMode::Parametric => {
                self.parametric.apply(&mut self.bodies, self.elapsed + dt);
            }
        }

        for body in &mut self.bodies {
            body.orbit_history.push(body.position);
        }

        self.elapsed += dt;
        Ok(())
    }

    fn integrate(&mut self, dt: Scalar) -> Result<(), SimulationError> {
        for (index, body) in self.bodies.iter().enumerate() {
            validate(body, index)?;
        }

        self.forces.resize(self.bodies.len(), Vector::ZERO);
        self.gravity.accumulate(&self.bodies, &mut self.forces);

        for (body, force) in self.bodies.iter_mut().zip(&self.forces) {
            let acceleration = *force / body.mass;
            self.integrator
                .step(&mut body.position, &mut body.velocity, acceleration, dt);
        }

        Ok(())
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!(
            "Simulation {}",
            if self.paused { "paused" } else { "resumed" }
        );
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Discards every body and rebuilds the initial configuration.
    ///
    /// Procedural systems are regenerated with fresh draws from the clock's
    /// random source. Elapsed time returns to zero; the pause flag is kept.
    pub fn reset(&mut self) {
        self.rebuild();
        info!("Simulation reset with {} bodies", self.bodies.len());
    }

    pub fn set_time_scale(&mut self, factor: Scalar) -> Result<(), SimulationError> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(SimulationError::InvalidTimeScale(factor));
        }
        self.time_scale = factor;
        Ok(())
    }

    pub fn time_scale(&self) -> Scalar {
        self.time_scale
    }

    /// Simulated seconds since the last reset
    pub fn elapsed(&self) -> Scalar {
        self.elapsed
    }

    pub fn motion_mode(&self) -> MotionMode {
        self.motion_mode
    }

    pub fn integrator_name(&self) -> &str {
        self.integrator.name()
    }

    pub fn gravity(&self) -> &NewtonianGravity {
        &self.gravity
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    /// First body with this name. Names are not required to be unique.
    pub fn find_body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|body| body.name == name)
    }

    pub fn find_body_id(&self, name: &str) -> Option<BodyId> {
        self.bodies
            .iter()
            .position(|body| body.name == name)
            .map(BodyId)
    }

    pub fn parent_of(&self, id: BodyId) -> Option<&Body> {
        self.body(id)?.parent.and_then(|parent| self.body(parent))
    }

    pub fn children_of(&self, id: BodyId) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .filter(move |(_, body)| body.parent == Some(id))
            .map(|(index, body)| (BodyId(index), body))
    }

    pub fn total_momentum(&self) -> Vector {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> Scalar {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn potential_energy(&self) -> Scalar {
        self.gravity.potential_energy(&self.bodies)
    }

    pub fn total_energy(&self) -> Scalar {
        self.kinetic_energy() + self.potential_energy()
    }

    /// Mass-weighted mean position, or `None` without mass
    pub fn barycenter(&self) -> Option<Vector> {
        let (weighted_positions, total_mass): (Vector, Scalar) = self
            .bodies
            .iter()
            .fold((Vector::ZERO, 0.0), |(pos_acc, mass_acc), body| {
                (pos_acc + body.position * body.mass, mass_acc + body.mass)
            });

        (total_mass > 0.0).then(|| weighted_positions / total_mass)
    }
}

fn validate(body: &Body, index: usize) -> Result<(), SimulationError> {
    if body.has_valid_mass() {
        Ok(())
    } else {
        warn!(
            "Rejecting body '{}' at index {} with mass {}",
            body.name, index, body.mass
        );
        Err(SimulationError::InvalidMass {
            name: body.name.clone(),
            mass: body.mass,
        })
    }
}
