//! Simulation plugin
//!
//! Hosts the simulation clock as a resource, steps it on the fixed schedule
//! and applies `SimulationCommand` events.

use crate::prelude::*;

mod actions;

pub use actions::{
    advance_simulation, handle_restart_simulation_event, handle_set_time_scale_event,
    handle_toggle_pause_simulation_event,
};
use bevy::ecs::schedule::{LogLevel, ScheduleBuildSettings};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Step,
}

#[derive(Default)]
pub struct SimulationPlugin {
    config: Option<SimulationConfig>,
}

impl SimulationPlugin {
    /// Uses the per-user configuration file and environment overrides
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            config: Some(config),
        }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = self
            .config
            .clone()
            .unwrap_or_else(SimulationConfig::load_from_user_config);

        match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                debug!("=== Current Configuration (TOML) ===\n{}", toml_string);
                debug!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        let clock = SimulationClock::from_config(&config);
        info!(
            "Simulation started with {} bodies using {}",
            clock.len(),
            clock.integrator_name()
        );

        app.insert_resource(PhysicsTime {
            dt: config.physics.time_step,
        });
        app.insert_resource(Time::<Fixed>::from_seconds(config.physics.time_step));
        app.insert_resource(clock);
        app.insert_resource(config);

        app.init_state::<AppState>();
        app.add_event::<SimulationCommand>();

        app.edit_schedule(FixedUpdate, |schedule| {
            schedule.set_build_settings(ScheduleBuildSettings {
                ambiguity_detection: LogLevel::Warn,
                ..default()
            });
        });

        app.add_systems(
            FixedUpdate,
            advance_simulation
                .in_set(SimulationSet::Step)
                .run_if(in_state(AppState::Running)),
        );
        app.add_systems(
            Update,
            (
                handle_restart_simulation_event,
                handle_toggle_pause_simulation_event,
                handle_set_time_scale_event,
            )
                .chain()
                .in_set(SimulationSet::Input),
        );
    }
}
