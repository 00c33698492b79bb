//! Action handlers for simulation commands
//!
//! This module contains the fixed-step advance system and the handlers for
//! restart, pause/resume and time scale commands.

use crate::prelude::*;

pub fn advance_simulation(mut clock: ResMut<SimulationClock>, physics_time: Res<PhysicsTime>) {
    if let Err(e) = clock.step(physics_time.dt) {
        error!("Simulation step failed: {}", e);
    }
}

pub fn handle_restart_simulation_event(
    mut commands_reader: EventReader<SimulationCommand>,
    mut clock: ResMut<SimulationClock>,
) {
    for command in commands_reader.read() {
        if !matches!(command, SimulationCommand::Restart) {
            continue;
        }
        clock.reset();
    }
}

pub fn handle_toggle_pause_simulation_event(
    mut commands_reader: EventReader<SimulationCommand>,
    mut clock: ResMut<SimulationClock>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for command in commands_reader.read() {
        if !matches!(command, SimulationCommand::TogglePause) {
            continue;
        }
        clock.toggle_pause();
        next_state.set(if clock.is_paused() {
            AppState::Paused
        } else {
            AppState::Running
        });
    }
}

pub fn handle_set_time_scale_event(
    mut commands_reader: EventReader<SimulationCommand>,
    mut clock: ResMut<SimulationClock>,
) {
    for command in commands_reader.read() {
        let SimulationCommand::SetTimeScale(factor) = *command else {
            continue;
        };
        match clock.set_time_scale(factor) {
            Ok(()) => debug!("Time scale set to {}", factor),
            Err(e) => warn!("Ignoring time scale command: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::simulation::SimulationPlugin;
    use crate::test_utils::create_test_app;

    fn simulation_app() -> App {
        let mut config = SimulationConfig::default();
        config.physics.initial_seed = Some(42);
        config.generation.planet_count = 3;

        let mut app = create_test_app();
        app.add_plugins(SimulationPlugin::with_config(config));
        app.update();
        app
    }

    #[test]
    fn test_pause_toggle_updates_clock_and_state() {
        let mut app = simulation_app();

        assert!(!app.world().resource::<SimulationClock>().is_paused());
        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Running
        );

        app.world_mut().send_event(SimulationCommand::TogglePause);
        app.update();
        assert!(app.world().resource::<SimulationClock>().is_paused());

        // State transitions apply on the following frame
        app.update();
        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Paused
        );

        app.world_mut().send_event(SimulationCommand::TogglePause);
        app.update();
        app.update();
        assert!(!app.world().resource::<SimulationClock>().is_paused());
        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Running
        );
    }

    #[test]
    fn test_fixed_update_advances_clock() {
        let mut app = simulation_app();
        let before = app.world().resource::<SimulationClock>().bodies().to_vec();
        let elapsed = app.world().resource::<SimulationClock>().elapsed();

        app.world_mut().run_schedule(FixedUpdate);

        let clock = app.world().resource::<SimulationClock>();
        assert!((clock.elapsed() - elapsed - 0.016).abs() < 1e-9);
        assert_ne!(clock.bodies(), before.as_slice());
    }

    #[test]
    fn test_fixed_update_skipped_while_paused() {
        let mut app = simulation_app();
        app.world_mut().send_event(SimulationCommand::TogglePause);
        app.update();
        app.update();

        let before = app.world().resource::<SimulationClock>().bodies().to_vec();
        let elapsed = app.world().resource::<SimulationClock>().elapsed();
        app.world_mut().run_schedule(FixedUpdate);

        let clock = app.world().resource::<SimulationClock>();
        assert_eq!(clock.elapsed(), elapsed);
        assert_eq!(clock.bodies(), before.as_slice());
    }

    #[test]
    fn test_restart_resets_elapsed_time() {
        let mut app = simulation_app();
        for _ in 0..5 {
            app.world_mut().run_schedule(FixedUpdate);
        }
        assert!(app.world().resource::<SimulationClock>().elapsed() > 0.0);

        app.world_mut().send_event(SimulationCommand::Restart);
        app.update();

        let clock = app.world().resource::<SimulationClock>();
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.len(), 4);
    }

    #[test]
    fn test_set_time_scale_command() {
        let mut app = simulation_app();

        app.world_mut()
            .send_event(SimulationCommand::SetTimeScale(1000.0));
        app.update();
        assert_eq!(
            app.world().resource::<SimulationClock>().time_scale(),
            1000.0
        );

        // Invalid factors are ignored
        app.world_mut()
            .send_event(SimulationCommand::SetTimeScale(-3.0));
        app.update();
        assert_eq!(
            app.world().resource::<SimulationClock>().time_scale(),
            1000.0
        );
    }
}
