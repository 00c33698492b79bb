//! Test utilities for plugin testing

use bevy::prelude::*;

/// Creates a headless test app with the core Bevy plugins the simulation needs
pub fn create_test_app() -> App {
    let mut app = App::new();

    app.add_plugins((MinimalPlugins, bevy::state::app::StatesPlugin));

    app
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::simulation::SimulationPlugin;
    use crate::prelude::{SimulationClock, SimulationConfig};

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();
        assert!(app.world().contains_resource::<Time>());
    }

    #[test]
    fn test_simulation_plugin_builds() {
        let mut config = SimulationConfig::default();
        config.physics.initial_seed = Some(1);

        let mut app = create_test_app();
        app.add_plugins(SimulationPlugin::with_config(config.clone()));
        app.update();

        assert!(app.world().contains_resource::<SimulationClock>());
        assert_eq!(*app.world().resource::<SimulationConfig>(), config);
        assert_eq!(
            app.world().resource::<SimulationClock>().len(),
            config.generation.planet_count + 1
        );
    }
}
