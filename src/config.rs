use crate::components::DEFAULT_ORBIT_HISTORY_CAPACITY;
use crate::physics::integrators::IntegratorType;
use crate::physics::math::{GRAVITATIONAL_CONSTANT, Scalar};
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "config.toml";
const ENVIRONMENT_PREFIX: &str = "ORRERY";

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub generation: GenerationConfig,
    pub trails: TrailConfig,
}

/// How body positions are advanced each step
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    /// Pairwise gravity integrated over time
    #[default]
    NBody,
    /// Closed-form circular motion driven by elapsed time, for cheap previews
    Parametric,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravitational_constant: Scalar,
    pub integrator: IntegratorType,
    pub motion_mode: MotionMode,
    /// Seconds of real time per fixed tick
    pub time_step: Scalar,
    pub time_scale: Scalar,
    pub initial_seed: Option<u64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            integrator: IntegratorType::default(),
            motion_mode: MotionMode::default(),
            time_step: 0.016,
            time_scale: 1.0,
            initial_seed: None,
        }
    }
}

/// Which initial configuration to build
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SystemPreset {
    /// A star with randomly generated planets and moons
    #[default]
    Procedural,
    /// The Sun, Mercury, Venus and Earth on circular orbits
    InnerSolarSystem,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    pub preset: SystemPreset,
    pub planet_count: usize,
    pub moons_per_planet: Option<usize>,
    pub gas_giant_probability: f64,
    /// Kilograms; rocky planets draw from [min, 10 * min]
    pub min_planet_mass: Scalar,
    /// Kilograms; gas giants draw from [max / 2, max]
    pub max_planet_mass: Scalar,
    /// Meters; rocky planets draw from [min, 3 * min]
    pub min_planet_radius: Scalar,
    /// Meters; gas giants draw from [max / 2, max]
    pub max_planet_radius: Scalar,
    /// Meters; orbital distance of the innermost planet
    pub min_orbital_distance: Scalar,
    /// Ratio between consecutive planets' orbital distances
    pub orbital_spacing_ratio: Scalar,
    /// Radians; inclinations are drawn from [-max, max]
    pub max_inclination: Scalar,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            preset: SystemPreset::default(),
            planet_count: 8,
            moons_per_planet: None,
            gas_giant_probability: 0.3,
            min_planet_mass: 3.3e23,
            max_planet_mass: 1.9e27,
            min_planet_radius: 2.4e6,
            max_planet_radius: 7.0e7,
            min_orbital_distance: 5.8e10,
            orbital_spacing_ratio: 1.5,
            max_inclination: 0.1,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TrailConfig {
    pub max_points_per_trail: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            max_points_per_trail: DEFAULT_ORBIT_HISTORY_CAPACITY,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse config file {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path);
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Location of the per-user configuration file, if a home directory can be found
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "orrery").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the per-user configuration layered under `ORRERY_` environment overrides
    ///
    /// Nested keys use a double underscore, e.g. `ORRERY_PHYSICS__TIME_SCALE=10`.
    pub fn load_from_user_config() -> Self {
        let mut builder = config::Config::builder();

        if let Some(path) = Self::user_config_path() {
            debug!("Looking for user configuration at {}", path.display());
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let layered = builder
            .add_source(
                config::Environment::with_prefix(ENVIRONMENT_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|settings| settings.try_deserialize::<SimulationConfig>());

        match layered {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load user configuration: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Save configuration to the per-user configuration file, creating its directory
    pub fn save_to_user_config(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::user_config_path().ok_or("no home directory for user configuration")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        info!("Saved configuration to {}", path.display());
        Ok(())
    }
}
