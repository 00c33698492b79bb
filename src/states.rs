use bevy::prelude::*;

/// Mirrors the simulation clock's pause flag
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Running,
    Paused,
}
